//! Page window calculator.
//!
//! Given the size of a result set and the page being viewed, decides which
//! page numbers a pagination bar renders, where the ellipses go, and which
//! records the "X–Y of Z" label covers.
//!
//! The last page is `floor(total_count / page_size)`. When the total is not a
//! multiple of the page size the trailing partial page is not counted, which
//! matches how the dashboard has always numbered its pages.

use serde::Serialize;
use utoipa::ToSchema;

use crate::constants::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, SIBLINGS_COUNT};
use crate::pagination::PaginationError;

/// Inputs for one window computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationRequest {
    pub total_count: i64,
    pub page_size: i64,
    pub current_page: i64,
}

impl PaginationRequest {
    /// Request for the first page with the default page size.
    pub fn new(total_count: i64) -> Self {
        Self {
            total_count,
            page_size: DEFAULT_PAGE_SIZE as i64,
            current_page: DEFAULT_PAGE_NUMBER as i64,
        }
    }

    pub fn page_size(mut self, page_size: i64) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn current_page(mut self, current_page: i64) -> Self {
        self.current_page = current_page;
        self
    }

    /// Compute the window using the dashboard's sibling count.
    pub fn compute(&self) -> Result<PaginationResult, PaginationError> {
        compute_window(
            self.total_count,
            self.page_size,
            self.current_page,
            SIBLINGS_COUNT,
        )
    }
}

/// Page numbers and record range to display for the current page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PaginationResult {
    /// Pages to render, ascending, current page included exactly once
    #[schema(example = json!([1, 4, 5, 6, 9]))]
    page_numbers: Vec<u64>,
    /// Whether a gap separates page 1 from the previous window
    #[schema(example = true)]
    leading_ellipsis: bool,
    /// Whether a gap separates the next window from the last page
    #[schema(example = true)]
    trailing_ellipsis: bool,
    /// 1-based index of the first record on the current page
    #[schema(example = 41)]
    first_record_index: u64,
    /// 1-based index of the last record on the current page
    #[schema(example = 50)]
    last_record_index: u64,
    /// Highest page number, `floor(total_count / page_size)`
    #[schema(example = 9)]
    last_page: u64,
    /// Number of records in the whole result set
    #[schema(example = 95)]
    total_count: u64,
}

impl PaginationResult {
    pub fn page_numbers(&self) -> &[u64] {
        &self.page_numbers
    }

    pub fn leading_ellipsis(&self) -> bool {
        self.leading_ellipsis
    }

    pub fn trailing_ellipsis(&self) -> bool {
        self.trailing_ellipsis
    }

    pub fn first_record_index(&self) -> u64 {
        self.first_record_index
    }

    pub fn last_record_index(&self) -> u64 {
        self.last_record_index
    }

    pub fn last_page(&self) -> u64 {
        self.last_page
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Label such as `41–50 of 95`.
    pub fn range_label(&self) -> String {
        format!(
            "{}–{} of {}",
            self.first_record_index, self.last_record_index, self.total_count
        )
    }
}

/// Ascending integers in the half-open range `(from, to]`, without values `<= 0`.
pub fn generate_pages(from: i64, to: i64) -> Vec<u64> {
    let from = from.max(0);
    (from..to).map(|page| (page + 1) as u64).collect()
}

/// Compute the page window around `current_page`.
///
/// Up to `siblings_count` pages are shown on each side of the current page.
/// Page 1 and the last page are added as anchors when the window does not
/// already reach them, and an ellipsis is flagged wherever the anchor is not
/// adjacent to the window.
///
/// # Errors
/// Returns [`PaginationError::InvalidArgument`] if `total_count < 0`,
/// `page_size <= 0`, `current_page < 1` or `siblings_count < 0`.
pub fn compute_window(
    total_count: i64,
    page_size: i64,
    current_page: i64,
    siblings_count: i64,
) -> Result<PaginationResult, PaginationError> {
    if total_count < 0 {
        return Err(PaginationError::invalid_argument(
            "total_count",
            total_count,
            "must not be negative",
        ));
    }
    if page_size <= 0 {
        return Err(PaginationError::invalid_argument(
            "page_size",
            page_size,
            "must be greater than zero",
        ));
    }
    if current_page < 1 {
        return Err(PaginationError::invalid_argument(
            "current_page",
            current_page,
            "must be at least 1",
        ));
    }
    if siblings_count < 0 {
        return Err(PaginationError::invalid_argument(
            "siblings_count",
            siblings_count,
            "must not be negative",
        ));
    }

    let last_page = total_count / page_size;

    let previous_pages = if current_page > 1 {
        generate_pages(current_page - 1 - siblings_count, current_page - 1)
    } else {
        Vec::new()
    };

    let next_pages = if current_page < last_page {
        generate_pages(
            current_page,
            current_page.saturating_add(siblings_count).min(last_page),
        )
    } else {
        Vec::new()
    };

    let has_leading_anchor = current_page > siblings_count.saturating_add(1);
    let leading_ellipsis = current_page > siblings_count.saturating_add(2);
    let has_trailing_anchor = current_page.saturating_add(siblings_count) < last_page;
    let trailing_ellipsis = current_page
        .saturating_add(siblings_count)
        .saturating_add(1)
        < last_page;

    let mut page_numbers = Vec::with_capacity(previous_pages.len() + next_pages.len() + 3);
    if has_leading_anchor {
        page_numbers.push(1);
    }
    page_numbers.extend(previous_pages);
    page_numbers.push(current_page as u64);
    page_numbers.extend(next_pages);
    if has_trailing_anchor {
        page_numbers.push(last_page as u64);
    }

    let first_record_index = (current_page - 1)
        .checked_mul(page_size)
        .and_then(|offset| offset.checked_add(1))
        .ok_or_else(|| {
            PaginationError::invalid_argument(
                "current_page",
                current_page,
                "puts the record range out of bounds",
            )
        })?;
    let last_record_index = current_page
        .checked_mul(page_size)
        .map_or(total_count, |end| end.min(total_count));

    Ok(PaginationResult {
        page_numbers,
        leading_ellipsis: has_leading_anchor && leading_ellipsis,
        trailing_ellipsis: has_trailing_anchor && trailing_ellipsis,
        first_record_index: first_record_index as u64,
        last_record_index: last_record_index as u64,
        last_page: last_page as u64,
        total_count: total_count as u64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(total: i64, page_size: i64, current: i64) -> PaginationResult {
        compute_window(total, page_size, current, 1).expect("valid inputs")
    }

    #[test]
    fn test_first_page_shows_next_sibling_and_last_anchor() {
        let result = window(95, 10, 1);
        assert_eq!(result.last_page(), 9);
        assert_eq!(result.page_numbers(), &[1, 2, 9]);
        assert!(!result.leading_ellipsis());
        assert!(result.trailing_ellipsis());
        assert_eq!(result.first_record_index(), 1);
        assert_eq!(result.last_record_index(), 10);
        assert_eq!(result.range_label(), "1–10 of 95");
    }

    #[test]
    fn test_middle_page_has_both_anchors_and_ellipses() {
        let result = window(95, 10, 5);
        assert_eq!(result.page_numbers(), &[1, 4, 5, 6, 9]);
        assert!(result.leading_ellipsis());
        assert!(result.trailing_ellipsis());
        assert_eq!(result.range_label(), "41–50 of 95");
    }

    #[test]
    fn test_last_page_has_no_trailing_anchor() {
        let result = window(95, 10, 9);
        assert_eq!(result.page_numbers(), &[1, 8, 9]);
        assert!(result.leading_ellipsis());
        assert!(!result.trailing_ellipsis());
        assert_eq!(result.range_label(), "81–90 of 95");
    }

    #[test]
    fn test_empty_result_set() {
        let result = window(0, 10, 1);
        assert_eq!(result.last_page(), 0);
        assert_eq!(result.page_numbers(), &[1]);
        assert!(!result.leading_ellipsis());
        assert!(!result.trailing_ellipsis());
        assert_eq!(result.first_record_index(), 1);
        assert_eq!(result.last_record_index(), 0);
        assert_eq!(result.range_label(), "1–0 of 0");
    }

    #[test]
    fn test_anchor_adjacent_to_window_has_no_ellipsis() {
        // Page 3: previous window is [2], so page 1 is adjacent.
        let result = window(95, 10, 3);
        assert_eq!(result.page_numbers(), &[1, 2, 3, 4, 9]);
        assert!(!result.leading_ellipsis());
        assert!(result.trailing_ellipsis());

        // Page 7: next window is [8], so page 9 is adjacent.
        let result = window(95, 10, 7);
        assert_eq!(result.page_numbers(), &[1, 6, 7, 8, 9]);
        assert!(result.leading_ellipsis());
        assert!(!result.trailing_ellipsis());
    }

    #[test]
    fn test_second_page_includes_first_page_from_window() {
        let result = window(95, 10, 2);
        assert_eq!(result.page_numbers(), &[1, 2, 3, 9]);
        assert!(!result.leading_ellipsis());
    }

    #[test]
    fn test_page_past_last_page_still_lists_previous_window() {
        // 95 records floor to 9 pages; page 10 holds records 91 to 95.
        let result = window(95, 10, 10);
        assert_eq!(result.page_numbers(), &[1, 9, 10]);
        assert!(!result.trailing_ellipsis());
        assert_eq!(result.range_label(), "91–95 of 95");
    }

    #[test]
    fn test_zero_siblings_shows_only_anchors_and_current() {
        let result = compute_window(95, 10, 5, 0).unwrap();
        assert_eq!(result.page_numbers(), &[1, 5, 9]);
        assert!(result.leading_ellipsis());
        assert!(result.trailing_ellipsis());
    }

    #[test]
    fn test_wider_sibling_window() {
        let result = compute_window(200, 10, 10, 2).unwrap();
        assert_eq!(result.last_page(), 20);
        assert_eq!(result.page_numbers(), &[1, 8, 9, 10, 11, 12, 20]);
        assert!(result.leading_ellipsis());
        assert!(result.trailing_ellipsis());
    }

    #[test]
    fn test_large_sibling_count_is_clamped_to_existing_pages() {
        let result = compute_window(50, 10, 3, i64::MAX).unwrap();
        assert_eq!(result.page_numbers(), &[1, 2, 3, 4, 5]);
        assert!(!result.leading_ellipsis());
        assert!(!result.trailing_ellipsis());
    }

    #[test]
    fn test_invalid_arguments_are_rejected() {
        assert!(matches!(
            compute_window(-1, 10, 1, 1),
            Err(PaginationError::InvalidArgument(_))
        ));
        assert!(matches!(
            compute_window(10, 0, 1, 1),
            Err(PaginationError::InvalidArgument(_))
        ));
        assert!(matches!(
            compute_window(10, -5, 1, 1),
            Err(PaginationError::InvalidArgument(_))
        ));
        assert!(matches!(
            compute_window(10, 10, 0, 1),
            Err(PaginationError::InvalidArgument(_))
        ));
        assert!(matches!(
            compute_window(10, 10, 1, -1),
            Err(PaginationError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_record_index_overflow_is_rejected() {
        assert!(matches!(
            compute_window(10, i64::MAX, 3, 1),
            Err(PaginationError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_repeated_calls_are_value_equal() {
        assert_eq!(window(95, 10, 5), window(95, 10, 5));
    }

    #[test]
    fn test_window_invariants_hold_across_inputs() {
        for siblings in 0..=3 {
            for page_size in 1..=7 {
                for total in 0..=60 {
                    let last_page = total / page_size;
                    for current in 1..=last_page + 3 {
                        let result = compute_window(total, page_size, current, siblings).unwrap();
                        let pages = result.page_numbers();

                        assert!(
                            pages.windows(2).all(|pair| pair[0] < pair[1]),
                            "not strictly ascending: {:?}",
                            pages
                        );
                        assert_eq!(
                            pages.iter().filter(|&&p| p == current as u64).count(),
                            1
                        );

                        if result.leading_ellipsis() {
                            assert_eq!(pages[0], 1);
                            assert!(pages[1] - pages[0] >= 2);
                        }
                        if result.trailing_ellipsis() {
                            let n = pages.len();
                            assert_eq!(pages[n - 1], last_page as u64);
                            assert!(pages[n - 1] - pages[n - 2] >= 2);
                        }

                        // The partial trailing page is only reachable as
                        // `last_page + 1` when the division leaves a remainder.
                        let reachable = if total % page_size == 0 {
                            last_page.max(1)
                        } else {
                            last_page + 1
                        };
                        if total > 0 && current <= reachable {
                            assert!(result.first_record_index() <= result.last_record_index());
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_generate_pages_drops_non_positive_values() {
        assert_eq!(generate_pages(-2, 2), vec![1, 2]);
        assert_eq!(generate_pages(3, 5), vec![4, 5]);
        assert!(generate_pages(4, 4).is_empty());
        assert!(generate_pages(-3, 0).is_empty());
    }

    #[test]
    fn test_request_defaults_and_builder() {
        let request = PaginationRequest::new(95);
        assert_eq!(request.page_size, 10);
        assert_eq!(request.current_page, 1);

        let result = request.current_page(5).compute().unwrap();
        assert_eq!(result, window(95, 10, 5));

        let result = PaginationRequest::new(95).page_size(0).compute();
        assert!(result.is_err());
    }
}
