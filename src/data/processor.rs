//! Data Processor Module
//! Turns raw funding rows into the cleaned frame: amounts in Rs lakh and month buckets.

use crate::data::loader::{
    text_column, DatasetError, COL_AMOUNT, COL_CITY, COL_DATE, COL_INVESTOR, COL_VERTICAL,
};
use chrono::{Datelike, NaiveDate};
use polars::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

/// USD to Rs lakh: 1 USD = 83 Rs, 1 lakh = 100,000 Rs.
pub const USD_TO_RS: f64 = 83.0;
pub const RS_PER_LAKH: f64 = 100_000.0;

/// Day-first layouts tried in order. `%y` goes first because `%Y` would
/// also accept a two-digit year as year 00xx.
const DAY_FIRST_FORMATS: [&str; 5] = ["%d/%m/%y", "%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y", "%Y-%m-%d"];

/// Label format of a month bucket, e.g. "Aug 2017".
const MONTH_LABEL_FORMAT: &str = "%b %Y";

/// Columns added by [`DataProcessor::clean`] next to the three text columns.
pub const COL_AMOUNT_RS_LAKH: &str = "amount_rs_lakh";
pub const COL_MONTH_YEAR: &str = "month_year";
/// Calendar sort key of the month bucket, see [`month_index`].
pub const COL_MONTH_INDEX: &str = "month_index";

/// Counts of rows that were kept but degraded during cleaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleaningReport {
    pub rows: usize,
    /// Amounts that were absent or unparseable and became 0.
    pub zeroed_amounts: usize,
    /// Dates that were absent or unparseable and got no month bucket.
    pub unparsed_dates: usize,
}

/// Parse a comma-grouped USD amount.
///
/// Returns `None` for absent, empty, unparseable, non-finite or negative text.
pub fn parse_amount_usd(raw: Option<&str>) -> Option<f64> {
    let cleaned = raw?.replace(',', "");
    let value: f64 = cleaned.trim().parse().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}

pub fn usd_to_rs_lakh(usd: f64) -> f64 {
    usd / RS_PER_LAKH * USD_TO_RS
}

/// Cleaned amount in Rs lakh; anything unusable counts as zero.
pub fn clean_amount(raw: Option<&str>) -> f64 {
    parse_amount_usd(raw).map(usd_to_rs_lakh).unwrap_or(0.0)
}

/// Parse a day-first date. Invalid calendar dates (31/02/2020) yield `None`.
pub fn parse_day_first(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    DAY_FIRST_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

/// Month bucket of a raw date field: label plus first day of that month.
pub fn month_bucket(raw: Option<&str>) -> Option<(String, NaiveDate)> {
    let date = parse_day_first(raw?)?;
    let start = NaiveDate::from_ymd_opt(date.year(), date.month(), 1)?;
    Some((date.format(MONTH_LABEL_FORMAT).to_string(), start))
}

/// Months since year 0, increasing with calendar order.
pub fn month_index(start: NaiveDate) -> i32 {
    start.year() * 12 + start.month0() as i32
}

/// Text cell with blank or whitespace-only values treated as missing.
fn present(raw: Option<&str>) -> Option<String> {
    raw.filter(|s| !s.trim().is_empty()).map(str::to_string)
}

/// Handles the row-level cleaning of the funding dataset.
pub struct DataProcessor;

impl DataProcessor {
    /// Clean every row of `df` into the frame the tables are derived from.
    ///
    /// The result keeps the vertical, city and investor text columns (blank
    /// cells become null) and adds [`COL_AMOUNT_RS_LAKH`], [`COL_MONTH_YEAR`]
    /// and [`COL_MONTH_INDEX`]. Rows are never dropped.
    pub fn clean(df: &DataFrame) -> Result<(DataFrame, CleaningReport), DatasetError> {
        let verticals = text_column(df, COL_VERTICAL)?;
        let cities = text_column(df, COL_CITY)?;
        let investors = text_column(df, COL_INVESTOR)?;
        let amounts = text_column(df, COL_AMOUNT)?;
        let dates = text_column(df, COL_DATE)?;

        let height = df.height();
        let mut report = CleaningReport {
            rows: height,
            ..CleaningReport::default()
        };

        let mut vertical: Vec<Option<String>> = Vec::with_capacity(height);
        let mut city: Vec<Option<String>> = Vec::with_capacity(height);
        let mut investor: Vec<Option<String>> = Vec::with_capacity(height);
        let mut amount_rs_lakh: Vec<f64> = Vec::with_capacity(height);
        let mut month_year: Vec<Option<String>> = Vec::with_capacity(height);
        let mut month_idx: Vec<Option<i32>> = Vec::with_capacity(height);

        for i in 0..height {
            let raw_amount = amounts.get(i);
            amount_rs_lakh.push(match parse_amount_usd(raw_amount) {
                Some(usd) => usd_to_rs_lakh(usd),
                None => {
                    report.zeroed_amounts += 1;
                    if raw_amount.is_some() {
                        debug!(row = i, raw = ?raw_amount, "unparseable amount, using 0");
                    }
                    0.0
                }
            });

            let raw_date = dates.get(i);
            match month_bucket(raw_date) {
                Some((label, start)) => {
                    month_year.push(Some(label));
                    month_idx.push(Some(month_index(start)));
                }
                None => {
                    report.unparsed_dates += 1;
                    if raw_date.is_some() {
                        debug!(row = i, raw = ?raw_date, "unparseable date, no month bucket");
                    }
                    month_year.push(None);
                    month_idx.push(None);
                }
            }

            vertical.push(present(verticals.get(i)));
            city.push(present(cities.get(i)));
            investor.push(present(investors.get(i)));
        }

        let cleaned = DataFrame::new(vec![
            Column::new(COL_VERTICAL.into(), vertical),
            Column::new(COL_CITY.into(), city),
            Column::new(COL_INVESTOR.into(), investor),
            Column::new(COL_AMOUNT_RS_LAKH.into(), amount_rs_lakh),
            Column::new(COL_MONTH_YEAR.into(), month_year),
            Column::new(COL_MONTH_INDEX.into(), month_idx),
        ])?;

        info!(
            rows = report.rows,
            zeroed_amounts = report.zeroed_amounts,
            unparsed_dates = report.unparsed_dates,
            "dataset cleaned"
        );
        Ok((cleaned, report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn amount_strips_separators_and_scales() {
        assert_eq!(clean_amount(Some("1,234.5")), 1234.5 / 100_000.0 * 83.0);
        assert!((clean_amount(Some("1,000")) - 0.83).abs() < 1e-12);
    }

    #[test]
    fn absent_or_empty_amount_is_zero() {
        assert_eq!(clean_amount(None), 0.0);
        assert_eq!(clean_amount(Some("")), 0.0);
        assert_eq!(clean_amount(Some("   ")), 0.0);
    }

    #[test]
    fn malformed_amounts_never_go_negative() {
        for raw in ["undisclosed", "N/A", "-5,000", "NaN", "inf", "14342000+", "1,2,3.4.5"] {
            let cleaned = clean_amount(Some(raw));
            assert!(cleaned >= 0.0, "{raw} cleaned to {cleaned}");
            assert!(cleaned.is_finite());
        }
        assert_eq!(clean_amount(Some("-5,000")), 0.0);
    }

    #[test]
    fn amount_tolerates_surrounding_whitespace() {
        assert_eq!(parse_amount_usd(Some(" 2,500 ")), Some(2500.0));
    }

    #[test]
    fn dates_parse_day_first() {
        assert_eq!(parse_day_first("01/08/2017"), NaiveDate::from_ymd_opt(2017, 8, 1));
        assert_eq!(parse_day_first("13/04/2015"), NaiveDate::from_ymd_opt(2015, 4, 13));
        assert_eq!(parse_day_first("05-09-2019"), NaiveDate::from_ymd_opt(2019, 9, 5));
        assert_eq!(parse_day_first("05.09.2019"), NaiveDate::from_ymd_opt(2019, 9, 5));
        assert_eq!(parse_day_first("01/08/17"), NaiveDate::from_ymd_opt(2017, 8, 1));
        assert_eq!(parse_day_first("2017-08-01"), NaiveDate::from_ymd_opt(2017, 8, 1));
    }

    #[test]
    fn invalid_dates_have_no_bucket() {
        assert_eq!(month_bucket(Some("31/02/2020")), None);
        assert_eq!(month_bucket(Some("12/05.2015")), None);
        assert_eq!(month_bucket(Some("not a date")), None);
        assert_eq!(month_bucket(Some("")), None);
        assert_eq!(month_bucket(None), None);
    }

    #[test]
    fn bucket_label_is_short_month_and_year() {
        let (label, start) = month_bucket(Some("28/02/2020")).unwrap();
        assert_eq!(label, "Feb 2020");
        assert_eq!(start, NaiveDate::from_ymd_opt(2020, 2, 1).unwrap());
    }

    #[test]
    fn month_index_follows_the_calendar() {
        let index = |y, m| month_index(NaiveDate::from_ymd_opt(y, m, 1).unwrap());
        assert!(index(2015, 12) < index(2016, 1));
        assert_eq!(index(2016, 1) - index(2015, 12), 1);
    }

    #[test]
    fn clean_keeps_degraded_rows_and_counts_them() {
        let df = DataFrame::new(vec![
            Column::new(COL_VERTICAL.into(), [Some("Tech"), Some("Retail"), None]),
            Column::new(COL_CITY.into(), [Some("Delhi"), Some("Mumbai"), Some("Bangalore")]),
            Column::new(COL_INVESTOR.into(), [Some("A"), None, Some("C")]),
            Column::new(COL_AMOUNT.into(), [Some("1,000"), None, Some("oops")]),
            Column::new(COL_DATE.into(), [Some("01/08/2017"), Some("31/02/2020"), None]),
        ])
        .unwrap();

        let (cleaned, report) = DataProcessor::clean(&df).unwrap();
        assert_eq!(cleaned.height(), 3);
        assert_eq!(
            report,
            CleaningReport {
                rows: 3,
                zeroed_amounts: 2,
                unparsed_dates: 2,
            }
        );

        let amounts = cleaned.column(COL_AMOUNT_RS_LAKH).unwrap().f64().unwrap();
        assert_eq!(amounts.get(0), Some(usd_to_rs_lakh(1000.0)));
        assert_eq!(amounts.get(1), Some(0.0));
        assert!(amounts.into_iter().all(|a| a.is_some_and(|a| a >= 0.0)));

        let months = cleaned.column(COL_MONTH_YEAR).unwrap().str().unwrap();
        assert_eq!(months.get(0), Some("Aug 2017"));
        assert_eq!(months.get(1), None);
        let index = cleaned.column(COL_MONTH_INDEX).unwrap().i32().unwrap();
        assert_eq!(index.get(0), Some(2017 * 12 + 7));
        assert_eq!(index.get(1), None);

        assert_eq!(cleaned.column(COL_INVESTOR).unwrap().str().unwrap().get(1), None);
        assert_eq!(cleaned.column(COL_VERTICAL).unwrap().str().unwrap().get(2), None);
    }

    #[test]
    fn blank_text_cells_become_null() {
        let df = DataFrame::new(vec![
            Column::new(COL_VERTICAL.into(), [Some(""), Some("Tech")]),
            Column::new(COL_CITY.into(), [Some("   "), Some(" Delhi")]),
            Column::new(COL_INVESTOR.into(), [Some(""), Some("Fund A")]),
            Column::new(COL_AMOUNT.into(), [Some("1"), Some("2")]),
            Column::new(COL_DATE.into(), [Some("01/08/2017"), Some("01/08/2017")]),
        ])
        .unwrap();

        let (cleaned, _) = DataProcessor::clean(&df).unwrap();
        let text = |name| cleaned.column(name).unwrap().str().unwrap().clone();
        assert_eq!(text(COL_VERTICAL).get(0), None);
        assert_eq!(text(COL_CITY).get(0), None);
        assert_eq!(text(COL_INVESTOR).get(0), None);
        assert_eq!(text(COL_CITY).get(1), Some(" Delhi"));
        assert_eq!(text(COL_INVESTOR).get(1), Some("Fund A"));
    }

    proptest! {
        #[test]
        fn cleaned_amount_is_finite_and_non_negative(raw in ".*") {
            let cleaned = clean_amount(Some(&raw));
            prop_assert!(cleaned.is_finite());
            prop_assert!(cleaned >= 0.0);
        }

        #[test]
        fn numeric_looking_amounts_stay_non_negative(raw in "[-+0-9,. eEinfa]{0,24}") {
            let cleaned = clean_amount(Some(&raw));
            prop_assert!(cleaned.is_finite() && cleaned >= 0.0, "{} cleaned to {}", raw, cleaned);
        }

        #[test]
        fn grouped_digits_scale_like_plain_digits(usd in 0u64..10_000_000_000) {
            let grouped = usd
                .to_string()
                .as_bytes()
                .rchunks(3)
                .rev()
                .map(|chunk| std::str::from_utf8(chunk).unwrap())
                .collect::<Vec<_>>()
                .join(",");
            prop_assert_eq!(clean_amount(Some(&grouped)), usd_to_rs_lakh(usd as f64));
        }
    }
}
