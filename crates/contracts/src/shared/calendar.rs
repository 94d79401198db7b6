//! Calendar helpers shared by budget and overtime pages.
//!
//! The fiscal year runs April 1 – March 31 and is identified by the
//! calendar year in which it starts (`2025` is April 2025 – March 2026).

use chrono::{Datelike, Duration, NaiveDate};

/// First month of the fiscal year.
pub const FISCAL_YEAR_START_MONTH: u32 = 4;

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_monday() as i64;
    date - Duration::days(offset)
}

/// Sunday of the week containing `date`.
pub fn week_end(date: NaiveDate) -> NaiveDate {
    week_start(date) + Duration::days(6)
}

/// Fiscal year (by starting calendar year) that `date` belongs to.
pub fn fiscal_year_of(date: NaiveDate) -> i32 {
    if date.month() >= FISCAL_YEAR_START_MONTH {
        date.year()
    } else {
        date.year() - 1
    }
}

/// April 1 of the fiscal year containing `date`.
pub fn fiscal_year_start(date: NaiveDate) -> NaiveDate {
    first_of_month(fiscal_year_of(date), FISCAL_YEAR_START_MONTH)
}

/// March 31 closing the fiscal year containing `date`.
pub fn fiscal_year_end(date: NaiveDate) -> NaiveDate {
    last_of_month(fiscal_year_of(date) + 1, FISCAL_YEAR_START_MONTH - 1)
}

/// "FY 2025-26"
pub fn fiscal_year_label(start_year: i32) -> String {
    format!("FY {}-{:02}", start_year, (start_year + 1).rem_euclid(100))
}

/// First day of the 3-month block (Jan/Apr/Jul/Oct) containing `date`.
pub fn quarter_start(date: NaiveDate) -> NaiveDate {
    block_start(date, 3)
}

/// First day of the 6-month block (Jan/Jul) containing `date`.
pub fn half_year_start(date: NaiveDate) -> NaiveDate {
    block_start(date, 6)
}

/// First day of the `months`-wide block, blocks aligned to January.
fn block_start(date: NaiveDate, months: u32) -> NaiveDate {
    let month0 = date.month0();
    first_of_month(date.year(), month0 - month0 % months + 1)
}

/// Adds whole months to the first day of a month.
pub fn add_months(first: NaiveDate, months: u32) -> NaiveDate {
    let total = first.month0() + months;
    first_of_month(first.year() + (total / 12) as i32, total % 12 + 1)
}

pub fn first_of_month(year: i32, month: u32) -> NaiveDate {
    // day 1 of a month in 1..=12 always exists
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MIN)
}

pub fn last_of_month(year: i32, month: u32) -> NaiveDate {
    add_months(first_of_month(year, month), 1) - Duration::days(1)
}

/// Parses `YYYY-MM-DD`, also accepting an ISO datetime by taking its date part.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.trim().split('T').next()?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_week_start_is_monday() {
        // 2025-10-15 is a Wednesday
        assert_eq!(week_start(d(2025, 10, 15)), d(2025, 10, 13));
        // Monday maps to itself
        assert_eq!(week_start(d(2025, 10, 13)), d(2025, 10, 13));
        // Sunday belongs to the week that started six days earlier
        assert_eq!(week_start(d(2025, 10, 19)), d(2025, 10, 13));
        // across a year boundary
        assert_eq!(week_start(d(2026, 1, 1)), d(2025, 12, 29));
        assert_eq!(week_end(d(2026, 1, 1)), d(2026, 1, 4));
    }

    #[test]
    fn test_fiscal_year_starts_april_first() {
        assert_eq!(fiscal_year_start(d(2025, 4, 1)), d(2025, 4, 1));
        assert_eq!(fiscal_year_start(d(2025, 12, 31)), d(2025, 4, 1));
        assert_eq!(fiscal_year_start(d(2026, 3, 31)), d(2025, 4, 1));
        assert_eq!(fiscal_year_start(d(2026, 1, 15)), d(2025, 4, 1));
        assert_eq!(fiscal_year_end(d(2025, 6, 1)), d(2026, 3, 31));
        for month in 1..=12 {
            let start = fiscal_year_start(d(2024, month, 10));
            assert_eq!((start.month(), start.day()), (4, 1));
        }
    }

    #[test]
    fn test_fiscal_year_label() {
        assert_eq!(fiscal_year_label(2025), "FY 2025-26");
        assert_eq!(fiscal_year_label(1999), "FY 1999-00");
    }

    #[test]
    fn test_quarter_and_half_year_grids() {
        assert_eq!(quarter_start(d(2025, 1, 31)), d(2025, 1, 1));
        assert_eq!(quarter_start(d(2025, 5, 20)), d(2025, 4, 1));
        assert_eq!(quarter_start(d(2025, 9, 30)), d(2025, 7, 1));
        assert_eq!(quarter_start(d(2025, 12, 1)), d(2025, 10, 1));
        assert_eq!(half_year_start(d(2025, 6, 30)), d(2025, 1, 1));
        assert_eq!(half_year_start(d(2025, 7, 1)), d(2025, 7, 1));
        for month in 1..=12 {
            let q = quarter_start(d(2025, month, 1));
            let h = half_year_start(d(2025, month, 1));
            assert_eq!(q.month0() % 3, 0);
            assert_eq!(h.month0() % 6, 0);
        }
    }

    #[test]
    fn test_month_arithmetic() {
        assert_eq!(last_of_month(2024, 2), d(2024, 2, 29));
        assert_eq!(last_of_month(2025, 12), d(2025, 12, 31));
        assert_eq!(add_months(d(2025, 11, 1), 3), d(2026, 2, 1));
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("2025-03-15"), Some(d(2025, 3, 15)));
        assert_eq!(parse_iso_date("2025-03-15T10:00:00Z"), Some(d(2025, 3, 15)));
        assert_eq!(parse_iso_date("15.03.2025"), None);
    }
}
