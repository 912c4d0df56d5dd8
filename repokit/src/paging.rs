//! Offset/limit windowing and page-number translation
//!
//! [`Pagination`] is the raw window applied to an ordered sequence.
//! [`Pager`] converts page numbers into windows and carries the start-page
//! convention as configuration, so callers can be 0-based or 1-based without
//! the repository caring.
//!
//! # Example
//!
//! ```rust
//! use repokit::paging::{Pager, Pagination};
//!
//! let window = Pagination::new(3, 3);
//! assert_eq!(window.apply(vec![1, 2, 3, 4, 5]), vec![4, 5]);
//!
//! let pager = Pager::new(20);
//! assert_eq!(pager.page(3)?, Pagination::new(40, 20));
//! # Ok::<(), repokit::error::RepositoryError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{RepositoryError, RepositoryResult};

/// Pagination parameters for windowing query results
///
/// # Example
///
/// ```rust
/// use repokit::paging::Pagination;
///
/// // Get the first 20 results
/// let page1 = Pagination::first_page(20);
/// assert_eq!(page1.offset, 0);
/// assert_eq!(page1.limit, 20);
///
/// // Get the second page
/// let page2 = Pagination::new(20, 20);
/// assert_eq!(page2.offset, 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pagination {
    /// Number of records to skip
    pub offset: usize,
    /// Maximum number of records to return
    pub limit: usize,
}

impl Pagination {
    /// Create new pagination parameters
    #[must_use]
    pub const fn new(offset: usize, limit: usize) -> Self {
        Self { offset, limit }
    }

    /// Create pagination for the first page with the given limit
    #[must_use]
    pub const fn first_page(limit: usize) -> Self {
        Self { offset: 0, limit }
    }

    /// Take the contiguous `[offset, offset + limit)` window of a sequence
    ///
    /// No wraparound: an offset at or past the end yields an empty result, a
    /// window overrunning the end is truncated, and a zero limit is empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use repokit::paging::Pagination;
    ///
    /// let items = vec!["a", "b", "c", "d"];
    /// assert_eq!(Pagination::new(1, 2).apply(items.clone()), vec!["b", "c"]);
    /// assert_eq!(Pagination::new(3, 5).apply(items.clone()), vec!["d"]);
    /// assert!(Pagination::new(9, 2).apply(items).is_empty());
    /// ```
    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.offset)
            .take(self.limit)
            .collect()
    }
}

/// Translates page numbers into [`Pagination`] windows
///
/// The start page defaults to 1; [`starting_at`](Self::starting_at) switches
/// the convention (0-based APIs pass 0). The page size is expected to be
/// positive. A requested page below the start page is an invalid-argument
/// error rather than a clamp, so off-by-one bugs in callers stay visible.
///
/// # Example
///
/// ```rust
/// use repokit::paging::Pager;
///
/// let pager = Pager::new(10).starting_at(0);
/// assert_eq!(pager.page(0)?.offset, 0);
/// assert_eq!(pager.page(2)?.offset, 20);
/// assert!(pager.starting_at(1).page(0).is_err());
/// # Ok::<(), repokit::error::RepositoryError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pager {
    page_size: usize,
    start_page: usize,
}

impl Pager {
    /// Start page used unless overridden with [`starting_at`](Self::starting_at)
    pub const DEFAULT_START_PAGE: usize = 1;

    /// Create a pager with the given page size and the default start page
    #[must_use]
    pub const fn new(page_size: usize) -> Self {
        Self {
            page_size,
            start_page: Self::DEFAULT_START_PAGE,
        }
    }

    /// Change the number of the first page
    #[must_use]
    pub const fn starting_at(mut self, start_page: usize) -> Self {
        self.start_page = start_page;
        self
    }

    /// The configured page size
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// The configured start page
    #[must_use]
    pub const fn start_page(&self) -> usize {
        self.start_page
    }

    /// Translate a page number into pagination parameters
    ///
    /// `offset = (page_number - start_page) * page_size`, `limit = page_size`.
    pub fn page(&self, page_number: usize) -> RepositoryResult<Pagination> {
        if page_number < self.start_page {
            return Err(RepositoryError::invalid_argument(format!(
                "page {page_number} is below the start page {}",
                self.start_page
            )));
        }
        let offset = (page_number - self.start_page).saturating_mul(self.page_size);
        Ok(Pagination::new(offset, self.page_size))
    }
}
