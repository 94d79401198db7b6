//! Totals reducers used by list pages for summary rows and cards.
//!
//! All sums are computed over already-fetched records; nothing here
//! rounds or re-derives backend figures.

/// Sum of `f(item)` over the slice. Empty input sums to `0.0`.
pub fn sum_by<T, F>(items: &[T], f: F) -> f64
where
    F: Fn(&T) -> f64,
{
    items.iter().map(f).sum()
}

/// Sum over the items that pass `keep`.
///
/// Equivalent to filtering into a new vector and calling [`sum_by`] on it.
pub fn sum_filtered<T, P, F>(items: &[T], keep: P, f: F) -> f64
where
    P: Fn(&T) -> bool,
    F: Fn(&T) -> f64,
{
    items.iter().filter(|item| keep(item)).map(f).sum()
}

/// Treats values within half a cent as equal.
pub fn money_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 0.005
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Row {
        amount: f64,
        flagged: bool,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { amount: 120.5, flagged: true },
            Row { amount: 80.25, flagged: false },
            Row { amount: 1000.0, flagged: true },
            Row { amount: 0.75, flagged: false },
        ]
    }

    #[test]
    fn test_empty_sum_is_zero() {
        let empty: Vec<Row> = Vec::new();
        assert_eq!(sum_by(&empty, |r| r.amount), 0.0);
        assert_eq!(sum_filtered(&empty, |r| r.flagged, |r| r.amount), 0.0);
    }

    #[test]
    fn test_sum_is_order_independent() {
        let forward = rows();
        let mut reversed = rows();
        reversed.reverse();
        assert_eq!(sum_by(&forward, |r| r.amount), 1201.5);
        assert_eq!(sum_by(&reversed, |r| r.amount), 1201.5);
    }

    #[test]
    fn test_sum_stable_under_refiltering() {
        let data = rows();
        let filtered: Vec<Row> = data.iter().filter(|r| r.flagged).cloned().collect();
        let direct = sum_filtered(&data, |r| r.flagged, |r| r.amount);
        assert_eq!(direct, sum_by(&filtered, |r| r.amount));
        assert_eq!(direct, 1120.5);

        // filtering an already filtered set by the same predicate changes nothing
        let again: Vec<Row> = filtered.iter().filter(|r| r.flagged).cloned().collect();
        assert_eq!(sum_by(&again, |r| r.amount), direct);
    }

    #[test]
    fn test_money_eq() {
        assert!(money_eq(100.0, 100.004));
        assert!(!money_eq(100.0, 100.01));
    }
}
