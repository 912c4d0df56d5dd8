//! Multi-key ordering over record sequences
//!
//! [`OrderOptions`] is an ordered, non-empty list of sort keys, most
//! significant first. Applying it performs one stable multi-key sort: key
//! values are prefetched per record (surfacing attribute-not-found before
//! anything is reordered) and records with fully equal composite keys keep
//! their relative input order.
//!
//! # Example
//!
//! ```rust
//! use repokit::order::{NullPlacement, OrderBy, OrderOptions};
//!
//! let options = OrderOptions::by(OrderBy::desc("id"))
//!     .then(OrderBy::asc("title").with_nulls(NullPlacement::Last));
//! assert_eq!(options.keys().len(), 2);
//! ```

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{RepositoryError, RepositoryResult};
use crate::record::Record;
use crate::value::AttributeValue;

/// Direction for ordering results
///
/// # Example
///
/// ```rust
/// use repokit::order::OrderDirection;
///
/// assert_eq!(format!("{}", OrderDirection::Ascending), "asc");
/// assert_eq!(format!("{}", OrderDirection::Descending), "desc");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OrderDirection {
    /// Sort in ascending order (A-Z, 0-9)
    #[default]
    Ascending,
    /// Sort in descending order (Z-A, 9-0)
    Descending,
}

impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => write!(f, "asc"),
            Self::Descending => write!(f, "desc"),
        }
    }
}

/// Placement of null values within a single sort key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NullPlacement {
    /// Nulls sort before all non-null values, regardless of direction
    First,
    /// Nulls sort after all non-null values, regardless of direction
    Last,
    /// Nulls act as the smallest value under `asc` and the largest under
    /// `desc`, tracking the key's direction
    #[default]
    Auto,
}

impl fmt::Display for NullPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => write!(f, "nulls_first"),
            Self::Last => write!(f, "nulls_last"),
            Self::Auto => write!(f, "auto"),
        }
    }
}

/// A single sort key: attribute, direction, and null placement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy {
    /// The attribute name to sort by
    pub attribute: String,
    /// Sort direction for this key
    pub direction: OrderDirection,
    /// Where null values land for this key
    pub nulls: NullPlacement,
}

impl OrderBy {
    /// Create a sort key with the default null placement
    pub fn new(attribute: impl Into<String>, direction: OrderDirection) -> Self {
        Self {
            attribute: attribute.into(),
            direction,
            nulls: NullPlacement::Auto,
        }
    }

    /// Create an ascending sort key
    pub fn asc(attribute: impl Into<String>) -> Self {
        Self::new(attribute, OrderDirection::Ascending)
    }

    /// Create a descending sort key
    pub fn desc(attribute: impl Into<String>) -> Self {
        Self::new(attribute, OrderDirection::Descending)
    }

    /// Override where nulls land for this key
    #[must_use]
    pub fn with_nulls(mut self, placement: NullPlacement) -> Self {
        self.nulls = placement;
        self
    }

    /// Compare two prefetched key values under this key's settings.
    ///
    /// Nulls are ranked ahead of or behind non-nulls by
    /// `nulls_first XOR direction_is_desc`, then the direction reverses the
    /// whole (rank, value) comparison. Explicit `First`/`Last` therefore pin
    /// nulls to the same end of the output for either direction, while
    /// `Auto` lets them track the direction.
    fn compare_values(&self, a: &AttributeValue, b: &AttributeValue) -> Ordering {
        let descending = self.direction == OrderDirection::Descending;
        let nulls_first = !matches!(self.nulls, NullPlacement::Last);
        let flipped = nulls_first != descending;
        let rank = |value: &AttributeValue| u8::from(value.is_null() != flipped);

        let ordering = rank(a).cmp(&rank(b)).then_with(|| a.sort_cmp(b));
        if descending {
            ordering.reverse()
        } else {
            ordering
        }
    }
}

/// Ordered, non-empty sequence of sort keys
///
/// Construction starts from the primary key, so an empty key list cannot be
/// built.
///
/// # Example
///
/// ```rust
/// use repokit::order::{OrderBy, OrderOptions};
///
/// let options = OrderOptions::by(OrderBy::asc("group")).then(OrderBy::desc("id"));
/// assert_eq!(options.keys()[0].attribute, "group");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderOptions {
    keys: Vec<OrderBy>,
}

impl OrderOptions {
    /// Start order options from the primary sort key
    pub fn by(key: OrderBy) -> Self {
        Self { keys: vec![key] }
    }

    /// Append a less significant sort key
    #[must_use]
    pub fn then(mut self, key: OrderBy) -> Self {
        self.keys.push(key);
        self
    }

    /// The sort keys, most significant first
    #[must_use]
    pub fn keys(&self) -> &[OrderBy] {
        &self.keys
    }

    /// Sort a snapshot of records into a new, stably ordered sequence
    ///
    /// Every record must carry every keyed attribute; a missing attribute is
    /// an attribute-not-found error and nothing is reordered. Mixed value
    /// types under one key are a caller error and fall back to a
    /// deterministic type rank instead of panicking.
    pub fn apply<R: Record>(&self, records: Vec<R>) -> RepositoryResult<Vec<R>> {
        let mut decorated = Vec::with_capacity(records.len());
        for record in records {
            let mut key_values = Vec::with_capacity(self.keys.len());
            for key in &self.keys {
                let value = record.attribute(&key.attribute).ok_or_else(|| {
                    RepositoryError::attribute_not_found(R::MODEL, key.attribute.as_str())
                })?;
                key_values.push(value);
            }
            decorated.push((key_values, record));
        }

        // Vec::sort_by is stable, so equal composite keys keep input order.
        decorated.sort_by(|(left, _), (right, _)| {
            self.keys
                .iter()
                .zip(left.iter().zip(right.iter()))
                .map(|(key, (a, b))| key.compare_values(a, b))
                .find(|ordering| *ordering != Ordering::Equal)
                .unwrap_or(Ordering::Equal)
        });

        Ok(decorated.into_iter().map(|(_, record)| record).collect())
    }
}

impl From<OrderBy> for OrderOptions {
    fn from(key: OrderBy) -> Self {
        Self::by(key)
    }
}
