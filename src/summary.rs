//! Headless rendering of the tables for terminal output.

use crate::tables::DashboardTables;
use polars::prelude::*;

/// All five tables as Polars frames under their section titles.
pub fn render_text(tables: &DashboardTables) -> PolarsResult<String> {
    let sections = [
        ("1. Go Digital", tables.digital.to_frame()?),
        ("2. Cut Costs", tables.cost.to_frame()?),
        ("3. Unique Value", tables.unique_value.to_frame()?),
        ("4. Collaborate", tables.collab.to_frame()?),
        ("5. Start Small", tables.pilot.to_frame()?),
    ];

    let mut out = String::new();
    for (title, frame) in sections {
        out.push_str(&format!("{title}\n{frame}\n\n"));
    }

    let report = &tables.report;
    out.push_str(&format!(
        "rows: {}, zeroed amounts: {}, unparsed dates: {}\n",
        report.cleaning.rows, report.cleaning.zeroed_amounts, report.cleaning.unparsed_dates
    ));
    for mismatch in &report.mismatches {
        out.push_str(&format!(
            "warning: {} has {} computed rows for {} constant values\n",
            mismatch.table, mismatch.computed, mismatch.expected
        ));
    }
    Ok(out)
}

pub fn render_json(tables: &DashboardTables) -> serde_json::Result<String> {
    serde_json::to_string_pretty(tables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CleaningReport;
    use crate::tables::*;

    fn empty_tables() -> DashboardTables {
        DashboardTables {
            digital: DigitalTable { rows: vec![] },
            cost: CostTable { rows: vec![] },
            unique_value: UniqueValueTable { rows: vec![] },
            collab: CollabTable { rows: vec![] },
            pilot: PilotTable { rows: vec![] },
            report: LoadReport {
                cleaning: CleaningReport {
                    rows: 5,
                    zeroed_amounts: 2,
                    unparsed_dates: 1,
                },
                mismatches: vec![StructuralMismatch {
                    table: "pilot",
                    computed: 0,
                    expected: 2,
                }],
            },
        }
    }

    #[test]
    fn text_ends_with_report_and_warnings() {
        let text = render_text(&empty_tables()).unwrap();
        assert!(text.starts_with("1. Go Digital\n"));
        assert!(text.ends_with(
            "rows: 5, zeroed amounts: 2, unparsed dates: 1\n\
             warning: pilot has 0 computed rows for 2 constant values\n"
        ));
    }
}
