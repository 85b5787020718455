//! Column layout, sorting and paging for the movie table. No rendering here.

use std::cmp::Ordering;

use api::MovieRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Rank,
    ChineseName,
    OriginalName,
    Director,
    Score,
    Countries,
    Genres,
}

impl Column {
    pub fn sort_key(self) -> Option<SortKey> {
        match self {
            Self::Rank => Some(SortKey::Rank),
            Self::Score => Some(SortKey::Score),
            _ => None,
        }
    }
}

/// Which table variant a page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableLayout {
    /// Every column, fixed page size.
    Full,
    /// Dashboard variant: fewer columns, page size selector, genres joined.
    Compact,
}

impl TableLayout {
    pub fn columns(self) -> &'static [Column] {
        match self {
            Self::Full => &[
                Column::Rank,
                Column::ChineseName,
                Column::OriginalName,
                Column::Director,
                Column::Score,
                Column::Countries,
                Column::Genres,
            ],
            Self::Compact => &[
                Column::Rank,
                Column::ChineseName,
                Column::OriginalName,
                Column::Score,
                Column::Genres,
            ],
        }
    }

    pub fn page_size_options(self) -> &'static [usize] {
        match self {
            Self::Full => &[],
            Self::Compact => &[10, 20, 50, 100],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Rank,
    Score,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub key: SortKey,
    pub direction: SortDirection,
}

/// Header click: ascending, then descending, then back to input order.
/// Clicking a different column starts over at ascending.
pub fn next_sort(current: Option<SortOrder>, clicked: SortKey) -> Option<SortOrder> {
    match current {
        Some(SortOrder {
            key,
            direction: SortDirection::Ascending,
        }) if key == clicked => Some(SortOrder {
            key,
            direction: SortDirection::Descending,
        }),
        Some(SortOrder {
            key,
            direction: SortDirection::Descending,
        }) if key == clicked => None,
        _ => Some(SortOrder {
            key: clicked,
            direction: SortDirection::Ascending,
        }),
    }
}

/// Stable sort of `records` by `order`; `None` keeps the fetched order.
pub fn sorted_rows(records: &[MovieRecord], order: Option<SortOrder>) -> Vec<&MovieRecord> {
    let mut rows: Vec<&MovieRecord> = records.iter().collect();
    if let Some(order) = order {
        rows.sort_by(|a, b| {
            let ord = compare(a, b, order.key);
            match order.direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
    }
    rows
}

fn compare(a: &MovieRecord, b: &MovieRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Rank => a.rank.cmp(&b.rank),
        SortKey::Score => a.score.total_cmp(&b.score),
    }
}

/// 1-based page position over a row count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// At least one page, even for an empty table.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    /// The current page, pulled back inside `1..=page_count`.
    pub fn clamped_page(&self, total: usize) -> usize {
        self.page.clamp(1, self.page_count(total))
    }

    pub fn slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let page = self.clamped_page(rows.len());
        let start = (page - 1) * self.page_size;
        let end = (start + self.page_size).min(rows.len());
        &rows[start.min(rows.len())..end]
    }

    pub fn with_page(self, page: usize) -> Self {
        Self { page, ..self }
    }

    /// Changing the page size returns to the first page.
    pub fn with_page_size(self, page_size: usize) -> Self {
        Self::new(page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(rank: u32, score: f64) -> MovieRecord {
        MovieRecord {
            rank,
            chinese_name: format!("m{rank}"),
            original_name: String::new(),
            director: String::new(),
            score,
            countries: String::new(),
            genres: String::new(),
        }
    }

    #[test]
    fn sort_cycle() {
        let asc = next_sort(None, SortKey::Score);
        assert_eq!(
            asc,
            Some(SortOrder {
                key: SortKey::Score,
                direction: SortDirection::Ascending
            })
        );
        let desc = next_sort(asc, SortKey::Score);
        assert_eq!(desc.map(|o| o.direction), Some(SortDirection::Descending));
        assert_eq!(next_sort(desc, SortKey::Score), None);

        let switched = next_sort(desc, SortKey::Rank);
        assert_eq!(
            switched,
            Some(SortOrder {
                key: SortKey::Rank,
                direction: SortDirection::Ascending
            })
        );
    }

    #[test]
    fn score_sort_is_stable() {
        let records = vec![movie(1, 9.0), movie(2, 9.5), movie(3, 9.0)];
        let order = Some(SortOrder {
            key: SortKey::Score,
            direction: SortDirection::Ascending,
        });
        let ranks: Vec<u32> = sorted_rows(&records, order).iter().map(|m| m.rank).collect();
        assert_eq!(ranks, [1, 3, 2]);

        let order = Some(SortOrder {
            key: SortKey::Score,
            direction: SortDirection::Descending,
        });
        let ranks: Vec<u32> = sorted_rows(&records, order).iter().map(|m| m.rank).collect();
        assert_eq!(ranks, [2, 1, 3]);
    }

    #[test]
    fn unsorted_keeps_fetch_order() {
        let records = vec![movie(3, 8.0), movie(1, 9.0)];
        let ranks: Vec<u32> = sorted_rows(&records, None).iter().map(|m| m.rank).collect();
        assert_eq!(ranks, [3, 1]);
    }

    #[test]
    fn paging_clamps_and_slices() {
        let rows: Vec<u32> = (1..=12).collect();
        let paging = Pagination::new(5);
        assert_eq!(paging.page_count(rows.len()), 3);
        assert_eq!(paging.slice(&rows), &[1, 2, 3, 4, 5]);
        assert_eq!(paging.with_page(3).slice(&rows), &[11, 12]);
        assert_eq!(paging.with_page(9).slice(&rows), &[11, 12]);
        assert_eq!(paging.with_page(0).clamped_page(rows.len()), 1);
    }

    #[test]
    fn empty_table_has_one_empty_page() {
        let paging = Pagination::new(10);
        let rows: Vec<u32> = Vec::new();
        assert_eq!(paging.page_count(0), 1);
        assert!(paging.slice(&rows).is_empty());
    }

    #[test]
    fn page_size_change_resets_page() {
        let paging = Pagination::new(10).with_page(4).with_page_size(20);
        assert_eq!(paging, Pagination::new(20));
    }

    #[test]
    fn only_rank_and_score_sort() {
        let sortable: Vec<Column> = TableLayout::Full
            .columns()
            .iter()
            .copied()
            .filter(|c| c.sort_key().is_some())
            .collect();
        assert_eq!(sortable, [Column::Rank, Column::Score]);
        assert!(!TableLayout::Compact.columns().contains(&Column::Director));
    }
}
