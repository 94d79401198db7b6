//! Calendar buckets for the overtime cost cards.

use super::aggregate::OvertimeRecord;
use crate::shared::calendar::{
    self, add_months, fiscal_year_end, fiscal_year_start, half_year_start, last_of_month,
    parse_iso_date, quarter_start, week_end, week_start,
};
use chrono::{Datelike, Duration, NaiveDate};

/// Inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeriodBucket {
    Day,
    Week,
    Month,
    Quarter,
    HalfYear,
    FiscalYear,
}

impl PeriodBucket {
    pub const ALL: [PeriodBucket; 6] = [
        PeriodBucket::Day,
        PeriodBucket::Week,
        PeriodBucket::Month,
        PeriodBucket::Quarter,
        PeriodBucket::HalfYear,
        PeriodBucket::FiscalYear,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PeriodBucket::Day => "Today",
            PeriodBucket::Week => "This week",
            PeriodBucket::Month => "This month",
            PeriodBucket::Quarter => "This quarter",
            PeriodBucket::HalfYear => "This half-year",
            PeriodBucket::FiscalYear => "Fiscal year",
        }
    }

    /// The bucket period that contains `today`.
    pub fn range(&self, today: NaiveDate) -> DateRange {
        let (start, end) = match self {
            PeriodBucket::Day => (today, today),
            PeriodBucket::Week => (week_start(today), week_end(today)),
            PeriodBucket::Month => (
                calendar::first_of_month(today.year(), today.month()),
                last_of_month(today.year(), today.month()),
            ),
            PeriodBucket::Quarter => {
                let start = quarter_start(today);
                (start, add_months(start, 3) - Duration::days(1))
            }
            PeriodBucket::HalfYear => {
                let start = half_year_start(today);
                (start, add_months(start, 6) - Duration::days(1))
            }
            PeriodBucket::FiscalYear => (fiscal_year_start(today), fiscal_year_end(today)),
        };
        DateRange { start, end }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BucketTotal {
    pub amount: f64,
    pub hours: f64,
    pub count: usize,
}

/// Cost and hours per bucket, in [`PeriodBucket::ALL`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct BucketTotals {
    pub today: NaiveDate,
    pub totals: [(PeriodBucket, BucketTotal); 6],
}

impl BucketTotals {
    /// Records with an unparseable date are not counted in any bucket.
    pub fn from_records(records: &[OvertimeRecord], today: NaiveDate) -> Self {
        let mut totals = PeriodBucket::ALL.map(|b| (b, BucketTotal::default()));
        let ranges = PeriodBucket::ALL.map(|b| b.range(today));

        for record in records {
            let Some(date) = parse_iso_date(&record.date) else {
                continue;
            };
            for (slot, range) in totals.iter_mut().zip(ranges.iter()) {
                if range.contains(date) {
                    slot.1.amount += record.amount;
                    slot.1.hours += record.hours;
                    slot.1.count += 1;
                }
            }
        }

        Self { today, totals }
    }

    pub fn get(&self, bucket: PeriodBucket) -> BucketTotal {
        self.totals
            .iter()
            .find(|(b, _)| *b == bucket)
            .map(|(_, t)| *t)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn record(date: &str, hours: f64, amount: f64) -> OvertimeRecord {
        OvertimeRecord {
            id: date.to_string(),
            employee_id: "7".to_string(),
            employee_name: "Test".to_string(),
            date: date.to_string(),
            from_time: "18:00".to_string(),
            to_time: "20:00".to_string(),
            hours,
            amount,
            remarks: None,
        }
    }

    #[test]
    fn test_ranges_for_fixed_today() {
        // Wednesday
        let today = d(2025, 8, 13);
        assert_eq!(PeriodBucket::Day.range(today), DateRange { start: today, end: today });
        assert_eq!(
            PeriodBucket::Week.range(today),
            DateRange { start: d(2025, 8, 11), end: d(2025, 8, 17) }
        );
        assert_eq!(
            PeriodBucket::Month.range(today),
            DateRange { start: d(2025, 8, 1), end: d(2025, 8, 31) }
        );
        assert_eq!(
            PeriodBucket::Quarter.range(today),
            DateRange { start: d(2025, 7, 1), end: d(2025, 9, 30) }
        );
        assert_eq!(
            PeriodBucket::HalfYear.range(today),
            DateRange { start: d(2025, 7, 1), end: d(2025, 12, 31) }
        );
        assert_eq!(
            PeriodBucket::FiscalYear.range(today),
            DateRange { start: d(2025, 4, 1), end: d(2026, 3, 31) }
        );
    }

    #[test]
    fn test_fiscal_year_before_april() {
        let range = PeriodBucket::FiscalYear.range(d(2026, 2, 10));
        assert_eq!(range.start, d(2025, 4, 1));
        assert_eq!(range.end, d(2026, 3, 31));
    }

    #[test]
    fn test_bucket_sums() {
        let today = d(2025, 8, 13);
        let records = vec![
            record("2025-08-13", 2.0, 100.0), // every bucket
            record("2025-08-11", 1.5, 50.0),  // week and wider
            record("2025-08-01", 3.0, 150.0), // month and wider
            record("2025-07-02", 1.0, 40.0),  // quarter, half, fiscal
            record("2025-04-01", 4.0, 200.0), // fiscal only
            record("2025-03-31", 5.0, 999.0), // previous fiscal year
            record("not-a-date", 1.0, 1.0),
        ];
        let totals = BucketTotals::from_records(&records, today);

        assert_eq!(totals.get(PeriodBucket::Day).amount, 100.0);
        assert_eq!(totals.get(PeriodBucket::Week).amount, 150.0);
        assert_eq!(totals.get(PeriodBucket::Month).amount, 300.0);
        assert_eq!(totals.get(PeriodBucket::Quarter).amount, 340.0);
        assert_eq!(totals.get(PeriodBucket::HalfYear).amount, 340.0);
        assert_eq!(totals.get(PeriodBucket::FiscalYear).amount, 540.0);
        assert_eq!(totals.get(PeriodBucket::FiscalYear).count, 5);
        assert_eq!(totals.get(PeriodBucket::Week).hours, 3.5);
    }

    #[test]
    fn test_empty_records() {
        let totals = BucketTotals::from_records(&[], d(2025, 1, 1));
        for bucket in PeriodBucket::ALL {
            assert_eq!(totals.get(bucket), BucketTotal::default());
        }
    }
}
