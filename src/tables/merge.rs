//! Positional merge of computed series with fixed illustrative constants.

use crate::tables::model::StructuralMismatch;
use tracing::warn;

/// Pair each computed item with the constant at the same position.
///
/// The result is as long as the shorter side. When the lengths differ the
/// mismatch is logged and returned so the caller can keep it on the report.
pub fn zip_static<C, S: Copy>(
    table: &'static str,
    computed: Vec<C>,
    statics: &[S],
) -> (Vec<(C, S)>, Option<StructuralMismatch>) {
    let mismatch = (computed.len() != statics.len()).then(|| {
        warn!(
            table,
            computed = computed.len(),
            expected = statics.len(),
            "computed rows do not line up with constant values"
        );
        StructuralMismatch {
            table,
            computed: computed.len(),
            expected: statics.len(),
        }
    });

    let merged = computed.into_iter().zip(statics.iter().copied()).collect();
    (merged, mismatch)
}
