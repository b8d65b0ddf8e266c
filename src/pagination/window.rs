//! Page window calculation for the navigation bar.
//!
//! Given the size of a result set and the current page, computes which page
//! buttons to show. The window is the current page plus up to
//! `sibling_count` neighbours on each side.
//!
//! # Known defect
//!
//! `has_next` is always `true`: the window never checks the current page
//! against `last_page`, so "next" is offered past the final page. Callers that
//! want to stop at the end can compare `current_page` with `last_page`
//! themselves.

use std::collections::BTreeSet;

/// Navigation controls derived from a result set. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    /// Ascending, unique page numbers to render as buttons.
    pub page_numbers: Vec<u32>,
    pub has_prev: bool,
    pub has_next: bool,
    pub current_page: u32,
    /// `ceil(total_items / page_size)`. Zero for an empty result set.
    pub last_page: u64,
}

impl PageWindow {
    /// Returns the page number of the `n`-th button (1-based), if shown.
    #[must_use]
    pub fn nth(&self, n: usize) -> Option<u32> {
        n.checked_sub(1).and_then(|i| self.page_numbers.get(i).copied())
    }

    /// Whether `page` is the active page.
    #[must_use]
    pub const fn is_current(&self, page: u32) -> bool {
        page == self.current_page
    }
}

/// Computes the page window.
///
/// The seed is always `{current_page}`. For each `i` in `1..=sibling_count`
/// the page `current_page + i` is added only while it is strictly less than
/// `last_page`, so the final page is never reached through the forward rule.
/// `current_page - i` is added while it is above zero.
///
/// A `page_size` of zero is treated as one.
///
/// # Examples
///
/// ```
/// use bookworld::pagination::compute_window;
///
/// let window = compute_window(100, 10, 5, 2);
/// assert_eq!(window.page_numbers, vec![3, 4, 5, 6, 7]);
/// assert!(window.has_prev);
///
/// let window = compute_window(100, 10, 1, 2);
/// assert_eq!(window.page_numbers, vec![1, 2, 3]);
/// assert!(!window.has_prev);
/// ```
#[must_use]
pub fn compute_window(
    total_items: u64,
    page_size: u32,
    current_page: u32,
    sibling_count: u32,
) -> PageWindow {
    let page_size = u64::from(page_size.max(1));
    let last_page = total_items.div_ceil(page_size);

    let mut pages = BTreeSet::from([current_page]);
    for i in 1..=sibling_count {
        if let Some(next) = current_page.checked_add(i) {
            if u64::from(next) < last_page {
                pages.insert(next);
            }
        }
        if let Some(prev) = current_page.checked_sub(i) {
            if prev > 0 {
                pages.insert(prev);
            }
        }
    }

    tracing::trace!(
        total_items,
        page_size,
        current_page,
        sibling_count,
        last_page,
        window = ?pages,
        "computed page window"
    );

    PageWindow {
        page_numbers: pages.into_iter().collect(),
        has_prev: current_page > 1,
        has_next: true,
        current_page,
        last_page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn middle_page_shows_both_siblings() {
        let window = compute_window(100, 10, 5, 2);
        assert_eq!(window.page_numbers, vec![3, 4, 5, 6, 7]);
        assert!(window.has_prev);
        assert_eq!(window.last_page, 10);
    }

    #[test]
    fn first_page_has_no_prev() {
        let window = compute_window(100, 10, 1, 2);
        assert_eq!(window.page_numbers, vec![1, 2, 3]);
        assert!(!window.has_prev);
    }

    #[test]
    fn last_page_is_never_added_by_sibling_rule() {
        let window = compute_window(100, 10, 10, 2);
        assert_eq!(window.page_numbers, vec![8, 9, 10]);

        let window = compute_window(100, 10, 9, 2);
        assert_eq!(window.page_numbers, vec![7, 8, 9]);
        assert!(!window.page_numbers.contains(&10));

        let window = compute_window(100, 10, 8, 2);
        assert_eq!(window.page_numbers, vec![6, 7, 8, 9]);
    }

    #[test]
    fn has_next_is_always_reported() {
        assert!(compute_window(100, 10, 10, 2).has_next);
        assert!(compute_window(0, 10, 1, 2).has_next);
    }

    #[test]
    fn empty_result_set_shows_only_current() {
        let window = compute_window(0, 10, 1, 2);
        assert_eq!(window.page_numbers, vec![1]);
        assert_eq!(window.last_page, 0);
    }

    #[test]
    fn partial_last_page_rounds_up() {
        assert_eq!(compute_window(101, 10, 1, 0).last_page, 11);
        assert_eq!(compute_window(9, 10, 1, 0).last_page, 1);
    }

    #[test]
    fn zero_siblings_and_zero_page_size() {
        assert_eq!(compute_window(100, 10, 4, 0).page_numbers, vec![4]);
        assert_eq!(compute_window(5, 0, 2, 1).last_page, 5);
    }

    #[test]
    fn overlapping_ranges_are_deduplicated() {
        let window = compute_window(30, 10, 2, 5);
        assert_eq!(window.page_numbers, vec![1, 2]);
    }

    #[test]
    fn nth_button_lookup() {
        let window = compute_window(100, 10, 5, 2);
        assert_eq!(window.nth(1), Some(3));
        assert_eq!(window.nth(5), Some(7));
        assert_eq!(window.nth(0), None);
        assert_eq!(window.nth(6), None);
        assert!(window.is_current(5));
    }

    proptest! {
        #[test]
        fn window_is_strictly_ascending(
            total in 0u64..100_000,
            page_size in 0u32..100,
            current in 1u32..20_000,
            siblings in 0u32..12,
        ) {
            let window = compute_window(total, page_size, current, siblings);
            prop_assert!(window.page_numbers.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(window.page_numbers.contains(&current));
            prop_assert!(window.page_numbers.iter().all(|&p| p > 0));
        }

        #[test]
        fn forward_rule_never_reaches_last_page(
            total in 1u64..10_000,
            current in 1u32..2_000,
            siblings in 0u32..12,
        ) {
            let window = compute_window(total, 10, current, siblings);
            for page in &window.page_numbers {
                if *page != current {
                    prop_assert!(*page < current || u64::from(*page) < window.last_page);
                }
            }
        }
    }
}
