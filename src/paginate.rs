//! Fixed-size pages over a dataset's raw trips.
//!
//! The cursor belongs to the caller; paging never touches the dataset.

use crate::loader::{Dataset, Trip};

pub const PAGE_SIZE: usize = 5;

/// Returns trips `[cursor, cursor + PAGE_SIZE)` and the cursor for the next
/// call. The cursor always advances by `PAGE_SIZE`; past the end the page is
/// empty.
pub fn next_page(ds: &Dataset, cursor: usize) -> (&[Trip], usize) {
    let trips = ds.trips();
    let start = cursor.min(trips.len());
    let end = cursor.saturating_add(PAGE_SIZE).min(trips.len());
    (&trips[start..end], cursor.saturating_add(PAGE_SIZE))
}

/// Iterates over the non-empty pages of a dataset from the start.
pub fn pages(ds: &Dataset) -> impl Iterator<Item = &[Trip]> {
    ds.trips().chunks(PAGE_SIZE)
}
