//! Client-side paging over the filtered catalog.

pub const DEFAULT_PAGE_SIZE: usize = 14;

/// How the catalog pages its results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagePolicy {
    pub page_size: usize,
    /// Pull the current page back into range when the search query changes.
    /// Off by default: the page number is left as it was.
    pub clamp_on_filter_change: bool,
}

impl Default for PagePolicy {
    fn default() -> Self {
        PagePolicy {
            page_size: DEFAULT_PAGE_SIZE,
            clamp_on_filter_change: false,
        }
    }
}

/// Number of pages needed for `total` items; zero when there are none
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Items on the 1-based `page`. Pages past the end are empty.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    pub number: usize,
    pub active: bool,
}

/// Pager state for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControls {
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub pages: Vec<PageButton>,
}

impl PageControls {
    pub fn new(current_page: usize, page_count: usize) -> Self {
        PageControls {
            prev_disabled: current_page == 1,
            next_disabled: current_page == page_count,
            pages: (1..=page_count)
                .map(|number| PageButton {
                    number,
                    active: number == current_page,
                })
                .collect(),
        }
    }
}
