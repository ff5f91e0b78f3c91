//! Pagination over the derived entry list.
//!
//! Pure functions only. The paginator never clamps the requested page:
//! a page past the end produces an empty visible slice rather than an error.

use std::num::NonZeroUsize;

/// Number of entries shown per page. Fixed for the lifetime of the app.
pub const PAGE_SIZE: usize = 30;

/// A 1-based page number.
///
/// Smart constructor enforces the `>= 1` invariant; there is no upper bound
/// because a stale page past the end of a shrunken list is a valid state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(NonZeroUsize);

impl PageNumber {
    /// The first page.
    pub const FIRST: PageNumber = PageNumber(NonZeroUsize::MIN);

    /// Returns `None` for 0.
    pub fn new(page: usize) -> Option<Self> {
        NonZeroUsize::new(page).map(Self)
    }

    /// The 1-based page number.
    pub fn get(self) -> usize {
        self.0.get()
    }

    /// Next page, clamped to `total_pages`. Never goes below page 1.
    pub fn next_within(self, total_pages: usize) -> Self {
        let target = self.get().saturating_add(1).min(total_pages.max(1));
        Self::new(target).unwrap_or(Self::FIRST)
    }

    /// Previous page, clamped to `total_pages` and saturating at page 1.
    pub fn prev_within(self, total_pages: usize) -> Self {
        let target = self.get().saturating_sub(1).min(total_pages.max(1));
        Self::new(target).unwrap_or(Self::FIRST)
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl std::fmt::Display for PageNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The visible window of one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageView<'a> {
    /// Entries shown on this page (borrowed from the full list).
    pub visible: &'a [String],
    /// `ceil(len / page_size)`, 0 for an empty list.
    pub total_pages: usize,
    /// `(page - 1) * page_size`. Entry `i` of `visible` has ordinal
    /// `start_index + i + 1`.
    pub start_index: usize,
}

impl PageView<'_> {
    /// 1-based ordinal displayed next to the `i`-th visible entry.
    pub fn ordinal(&self, i: usize) -> usize {
        self.start_index + i + 1
    }

    /// True when nothing is visible on this page.
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Whether page controls should be shown at all.
    pub fn has_pages(&self) -> bool {
        self.total_pages > 0
    }
}

/// Total number of pages for `len` entries.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Compute the visible window for `page` over `entries`.
///
/// Half-open slice `[(page-1)*page_size, page*page_size)` clamped to the
/// list. Out-of-range pages yield an empty `visible` slice.
pub fn paginate(entries: &[String], page_size: usize, page: PageNumber) -> PageView<'_> {
    let start_index = (page.get() - 1).saturating_mul(page_size);
    let start = start_index.min(entries.len());
    let end = start_index.saturating_add(page_size).min(entries.len());

    PageView {
        visible: &entries[start..end],
        total_pages: total_pages(entries.len(), page_size),
        start_index,
    }
}

/// Page numbers for the selector strip: `1..=total_pages`.
pub fn page_numbers(total_pages: usize) -> impl Iterator<Item = PageNumber> {
    (1..=total_pages).filter_map(PageNumber::new)
}
