//! Statistics Calculator Module
//! Filtered and grouped aggregations over the cleaned frame, run as Polars lazy queries.

use polars::prelude::*;

/// Name of the per-group total in [`StatsCalculator::group_sums`] output.
pub const SUM: &str = "sum";
const COUNT: &str = "count";
const MEAN: &str = "mean";

/// Size and mean of a filtered subset.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    /// `None` for an empty subset.
    pub mean: Option<f64>,
}

/// Total of one group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupTotal {
    pub key: String,
    pub sum: f64,
}

/// Handles the aggregations behind the derived tables.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Case-insensitive regex match on a text column. Null cells never match.
    ///
    /// `pattern` is matched against the lowercased text, so it must be lowercase.
    pub fn text_matches(column: &str, pattern: &str) -> Expr {
        col(column)
            .str()
            .to_lowercase()
            .str()
            .contains(lit(pattern), false)
    }

    /// Count and mean of `value` over the rows matching `predicate`.
    pub fn summarize(df: &DataFrame, predicate: Expr, value: &str) -> PolarsResult<Summary> {
        let out = df
            .clone()
            .lazy()
            .filter(predicate)
            .select([
                col(value).count().cast(DataType::Float64).alias(COUNT),
                col(value).mean().alias(MEAN),
            ])
            .collect()?;

        let count = out.column(COUNT)?.f64()?.get(0).unwrap_or(0.0) as usize;
        let mean = out.column(MEAN)?.f64()?.get(0);
        Ok(Summary { count, mean })
    }

    /// Sum of `value` per distinct `key`, groups in order of first appearance.
    ///
    /// Rows with a null key are not grouped. `carry` columns keep the first
    /// value seen in each group.
    pub fn group_sums(df: &DataFrame, key: &str, value: &str, carry: &[&str]) -> LazyFrame {
        let mut aggs = vec![col(value).sum().alias(SUM)];
        aggs.extend(carry.iter().map(|name| col(*name).first()));

        df.clone()
            .lazy()
            .filter(col(key).is_not_null())
            .group_by_stable([col(key)])
            .agg(aggs)
    }

    /// The `n` groups with the largest sums, descending.
    ///
    /// The sort is stable, so equal sums keep their first-seen order.
    pub fn top_by_sum(
        df: &DataFrame,
        key: &str,
        value: &str,
        n: usize,
    ) -> PolarsResult<Vec<GroupTotal>> {
        let top = Self::group_sums(df, key, value, &[])
            .sort(
                [SUM],
                SortMultipleOptions::default()
                    .with_order_descending(true)
                    .with_maintain_order(true),
            )
            .limit(n as IdxSize)
            .collect()?;
        Self::totals(&top, key)
    }

    /// `(key, sum)` rows of a collected [`StatsCalculator::group_sums`] frame.
    pub fn totals(df: &DataFrame, key: &str) -> PolarsResult<Vec<GroupTotal>> {
        let keys = df.column(key)?.str()?;
        let sums = df.column(SUM)?.f64()?;

        Ok(keys
            .into_iter()
            .zip(sums)
            .filter_map(|(key, sum)| {
                Some(GroupTotal {
                    key: key?.to_string(),
                    sum: sum?,
                })
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn frame(keys: &[Option<&str>], values: &[f64]) -> DataFrame {
        DataFrame::new(vec![
            Column::new("key".into(), keys.to_vec()),
            Column::new("value".into(), values.to_vec()),
        ])
        .unwrap()
    }

    fn keys(totals: &[GroupTotal]) -> Vec<&str> {
        totals.iter().map(|g| g.key.as_str()).collect()
    }

    #[test]
    fn summarize_empty_subset_has_no_mean() {
        let df = frame(&[Some("a")], &[4.0]);
        let summary = StatsCalculator::summarize(&df, col("key").eq(lit("zzz")), "value").unwrap();
        assert_eq!(summary, Summary { count: 0, mean: None });
    }

    #[test]
    fn summarize_counts_and_averages_matches() {
        let df = frame(&[Some("a"), Some("b"), Some("a")], &[1.0, 100.0, 3.0]);
        let summary = StatsCalculator::summarize(&df, col("key").eq(lit("a")), "value").unwrap();
        assert_eq!(summary, Summary { count: 2, mean: Some(2.0) });
    }

    #[test]
    fn text_matches_ignores_case_and_nulls() {
        let df = frame(
            &[Some("FinTech"), Some("Online E-Commerce"), Some("Retail"), None],
            &[1.0, 2.0, 4.0, 8.0],
        );
        let summary =
            StatsCalculator::summarize(&df, StatsCalculator::text_matches("key", "tech|e-commerce"), "value")
                .unwrap();
        assert_eq!(summary.count, 2);
        assert_eq!(summary.mean, Some(1.5));
    }

    #[test]
    fn groups_keep_first_seen_order_and_skip_null_keys() {
        let df = frame(&[Some("b"), None, Some("a"), Some("b")], &[1.0, 100.0, 2.0, 3.0]);
        let grouped = StatsCalculator::group_sums(&df, "key", "value", &[]).collect().unwrap();
        let totals = StatsCalculator::totals(&grouped, "key").unwrap();

        assert_eq!(keys(&totals), vec!["b", "a"]);
        assert_eq!(totals[0].sum, 4.0);
        assert_eq!(totals[1].sum, 2.0);
    }

    #[test]
    fn group_sums_carry_first_value() {
        let df = DataFrame::new(vec![
            Column::new("key".into(), ["x", "y", "x"]),
            Column::new("value".into(), [1.0, 2.0, 3.0]),
            Column::new("tag".into(), [10i32, 20, 30]),
        ])
        .unwrap();
        let grouped = StatsCalculator::group_sums(&df, "key", "value", &["tag"]).collect().unwrap();
        let tags = grouped.column("tag").unwrap().i32().unwrap();
        assert_eq!(tags.get(0), Some(10));
        assert_eq!(tags.get(1), Some(20));
    }

    #[test]
    fn top_by_sum_is_descending_with_stable_ties() {
        let df = frame(
            &[Some("x"), Some("y"), Some("z"), Some("w")],
            &[5.0, 9.0, 9.0, 1.0],
        );
        let top = StatsCalculator::top_by_sum(&df, "key", "value", 2).unwrap();
        assert_eq!(keys(&top), vec!["y", "z"]);
    }

    #[test]
    fn top_by_sum_with_fewer_groups() {
        let df = frame(&[Some("only")], &[1.0]);
        assert_eq!(StatsCalculator::top_by_sum(&df, "key", "value", 2).unwrap().len(), 1);
    }
}
