//! Derived summaries over the fetched movie list.
//!
//! Everything here is a pure function of the record slice. Pages wrap these
//! calls in `use_memo` so they only rerun when the fetched records change.

use std::collections::HashMap;

use api::MovieRecord;

/// How many entries the ranking charts keep.
pub const TOP_N: usize = 10;

/// Occurrence counts keyed by name, kept in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
    positions: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `name`. Blank names are ignored.
    pub fn add(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        match self.positions.get(name) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.positions.insert(name.to_string(), self.entries.len());
                self.entries.push((name.to_string(), 1));
            }
        }
    }

    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.positions.get(name).map(|&pos| self.entries[pos].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Entries by descending count. Ties keep first-appearance order.
    pub fn into_ranked(self) -> Vec<(String, usize)> {
        let mut ranked = self.entries;
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

impl<'a> FromIterator<&'a str> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut table = Self::new();
        for name in iter {
            table.add(name);
        }
        table
    }
}

/// Director counts after the top-N cut.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectorBreakdown {
    pub named: Vec<(String, usize)>,
    /// Sum of everyone past the cut; `None` when nobody was cut.
    pub others: Option<usize>,
}

impl DirectorBreakdown {
    /// Number of chart entries, the others bucket included.
    pub fn len(&self) -> usize {
        self.named.len() + usize::from(self.others.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn total(&self) -> usize {
        self.named.iter().map(|(_, count)| count).sum::<usize>() + self.others.unwrap_or(0)
    }
}

/// Records ordered by ascending rank, truncated to `n`. Equal ranks keep input order.
pub fn top_by_rank(records: &[MovieRecord], n: usize) -> Vec<MovieRecord> {
    let mut sorted: Vec<&MovieRecord> = records.iter().collect();
    sorted.sort_by_key(|movie| movie.rank);
    sorted.into_iter().take(n).cloned().collect()
}

pub fn genre_frequency(records: &[MovieRecord]) -> FrequencyTable {
    records.iter().flat_map(MovieRecord::genre_tokens).collect()
}

/// Count every director, keep the `slots` most frequent and fold the rest into one bucket.
pub fn director_frequency(records: &[MovieRecord], slots: usize) -> DirectorBreakdown {
    let table: FrequencyTable = records.iter().flat_map(MovieRecord::directors).collect();

    let mut named = table.into_ranked();
    let rest = named.split_off(slots.min(named.len()));
    let others_count: usize = rest.iter().map(|(_, count)| count).sum();

    DirectorBreakdown {
        named,
        others: (others_count > 0).then_some(others_count),
    }
}
