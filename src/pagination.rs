//! Fixed-size paging over an ordered list.
//!
//! No range checking happens here: a page outside `1..=total_pages` is simply empty.
//! Wrapping out-of-range pages is the caller's job.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page that was requested.
    pub current_page: i64,
    pub total_pages: i64,
}

pub fn total_pages(len: usize, page_size: usize) -> i64 {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size) as i64
}

/// Slice `items` to the 1-based `page`. Never panics, whatever `page` is.
pub fn paginate<T: Clone>(items: &[T], page: i64, page_size: usize) -> Page<T> {
    let total = total_pages(items.len(), page_size);
    let slice = page
        .checked_sub(1)
        .and_then(|p| usize::try_from(p).ok())
        .and_then(|p| p.checked_mul(page_size))
        .filter(|&start| start < items.len())
        .map(|start| {
            let end = start.saturating_add(page_size).min(items.len());
            &items[start..end]
        })
        .unwrap_or(&[]);
    Page {
        items: slice.to_vec(),
        current_page: page,
        total_pages: total,
    }
}
