//! Summary statistics over filtered record sets.
//!
//! Every function here has a defined answer for zero records: means and
//! rates are 0, breakdowns are empty. No division faults, no NaN.

/// Arithmetic mean; 0 for an empty input.
pub fn mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in values {
        sum += value;
        count += 1;
    }
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// `part` as a percentage of `total`; 0 when `total` is 0.
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// Count records per category, preserving first-seen order so rendered
/// breakdowns are stable for a given filtered set.
pub fn breakdown<'r, R>(records: &[&'r R], key: fn(&R) -> &str) -> Vec<(&'r str, usize)> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for record in records {
        let category = key(record);
        match counts.iter_mut().find(|(c, _)| *c == category) {
            Some((_, n)) => *n += 1,
            None => counts.push((category, 1)),
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_nothing_is_zero() {
        assert_eq!(mean(std::iter::empty()), 0.0);
        assert!(!mean(std::iter::empty()).is_nan());
    }

    #[test]
    fn mean_of_values() {
        assert_eq!(mean([2.0, 4.0, 6.0]), 4.0);
    }

    #[test]
    fn percentage_of_zero_total_is_zero() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(3, 4), 75.0);
    }

    #[test]
    fn breakdown_preserves_first_seen_order() {
        struct Item(&'static str);
        let a = Item("SEV1");
        let b = Item("SEV0");
        let c = Item("SEV1");
        let records = vec![&a, &b, &c];
        let counts = breakdown(&records, |i: &Item| i.0);
        assert_eq!(counts, vec![("SEV1", 2), ("SEV0", 1)]);
    }
}
