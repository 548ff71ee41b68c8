//! Insertion-ordered frequency table and mode selection.
use numstat_core::{Mode, ModePolicy};
use std::collections::HashMap;

/// Occurrence counts per distinct value, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    index: HashMap<u64, usize>,
    entries: Vec<(f64, usize)>,
}

impl FrequencyTable {
    pub fn from_values(data: &[f64]) -> Self {
        data.iter().fold(Self::default(), |mut table, &x| {
            table.add(x);
            table
        })
    }

    pub fn add(&mut self, value: f64) {
        let key = key_of(value);
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push((value, 1));
            }
        }
    }

    /// Distinct values with their counts, in first-seen order
    pub fn entries(&self) -> &[(f64, usize)] {
        &self.entries
    }

    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    /// First value, in first-seen order, holding the highest count
    pub fn most_frequent(&self) -> Option<(f64, usize)> {
        let mut best: Option<(f64, usize)> = None;
        for &(value, count) in &self.entries {
            if best.map_or(true, |(_, top)| count > top) {
                best = Some((value, count));
            }
        }
        best
    }

    pub fn mode(&self, policy: ModePolicy) -> Mode {
        match (self.most_frequent(), policy) {
            (None, _) => Mode::NoMode,
            (Some((_, 1)), ModePolicy::RequireRepeat) => Mode::NoMode,
            (Some((value, _)), _) => Mode::Value(value),
        }
    }
}

/// `-0.0` and `0.0` share a key
fn key_of(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_in_first_seen_order() {
        let table = FrequencyTable::from_values(&[3.0, 1.0, 3.0, 2.0, 1.0, 3.0]);
        assert_eq!(table.entries(), &[(3.0, 3), (1.0, 2), (2.0, 1)]);
        assert_eq!(table.distinct(), 3);
    }

    #[test]
    fn test_tie_goes_to_first_seen() {
        let table = FrequencyTable::from_values(&[1.0, 1.0, 2.0, 2.0]);
        assert_eq!(table.mode(ModePolicy::RequireRepeat), Mode::Value(1.0));

        let table = FrequencyTable::from_values(&[2.0, 1.0, 1.0, 2.0]);
        assert_eq!(table.mode(ModePolicy::RequireRepeat), Mode::Value(2.0));
    }

    #[test]
    fn test_all_unique_depends_on_policy() {
        let table = FrequencyTable::from_values(&[5.0, 3.0, 9.0]);
        assert_eq!(table.mode(ModePolicy::RequireRepeat), Mode::NoMode);
        assert_eq!(table.mode(ModePolicy::FirstMostFrequent), Mode::Value(5.0));
    }

    #[test]
    fn test_signed_zero_counts_once() {
        let table = FrequencyTable::from_values(&[0.0, -0.0, 1.0]);
        assert_eq!(table.distinct(), 2);
        assert_eq!(table.mode(ModePolicy::RequireRepeat), Mode::Value(0.0));
    }

    #[test]
    fn test_empty_table_has_no_mode() {
        let table = FrequencyTable::default();
        assert_eq!(table.mode(ModePolicy::FirstMostFrequent), Mode::NoMode);
    }
}
