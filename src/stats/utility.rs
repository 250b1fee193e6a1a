use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// Counts occurrences of each value in a single pass.
pub fn frequencies<T, I>(values: I) -> HashMap<T, usize>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut counts = HashMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}

/// Most frequent value. Ties go to the smallest value, so the result does not
/// depend on input order. `None` for empty input.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Ord + Hash,
    I: IntoIterator<Item = T>,
{
    frequencies(values)
        .into_iter()
        .max_by(|(a, count_a), (b, count_b)| count_a.cmp(count_b).then_with(|| b.cmp(a)))
        .map(|(value, _)| value)
}

/// Orders counted labels by descending count, ties by ascending label.
pub fn ranked(counts: &BTreeMap<String, usize>) -> Vec<(&str, usize)> {
    let mut rows: Vec<(&str, usize)> = counts.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    // BTreeMap iteration is already label-ascending and the sort is stable.
    rows.sort_by(|a, b| b.1.cmp(&a.1));
    rows
}

/// Arithmetic mean rounded to the nearest integer, halves rounding up.
/// Returns 0 for `n == 0`.
pub fn rounded_mean(total: u64, n: usize) -> u64 {
    if n == 0 {
        return 0;
    }
    let n = n as u128;
    ((total as u128 * 2 + n) / (n * 2)) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequencies() {
        let counts = frequencies(["a", "b", "a"]);
        assert_eq!(counts.get("a"), Some(&2));
        assert_eq!(counts.get("b"), Some(&1));
    }

    #[test]
    fn test_mode_empty() {
        assert_eq!(mode(Vec::<u32>::new()), None);
    }

    #[test]
    fn test_mode_picks_most_frequent() {
        assert_eq!(mode([3, 1, 3, 2]), Some(3));
    }

    #[test]
    fn test_mode_tie_goes_to_smallest_regardless_of_order() {
        assert_eq!(mode(["B", "A", "B", "A"]), Some("A"));
        assert_eq!(mode(["A", "B", "A", "B"]), Some("A"));
        assert_eq!(mode([9, 4, 7]), Some(4));
    }

    #[test]
    fn test_ranked_orders_by_count_then_label() {
        let counts: BTreeMap<String, usize> = [("Subscriber", 5), ("Dependent", 1), ("Customer", 5)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        assert_eq!(
            ranked(&counts),
            vec![("Customer", 5), ("Subscriber", 5), ("Dependent", 1)]
        );
    }

    #[test]
    fn test_rounded_mean() {
        assert_eq!(rounded_mean(270, 3), 90);
        assert_eq!(rounded_mean(10, 4), 3); // 2.5 rounds up
        assert_eq!(rounded_mean(9, 4), 2);
        assert_eq!(rounded_mean(0, 0), 0);
        assert_eq!(rounded_mean(u64::MAX, 1), u64::MAX);
    }
}
