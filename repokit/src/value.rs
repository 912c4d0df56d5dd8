//! Runtime attribute values
//!
//! Records expose their attributes dynamically as [`AttributeValue`] so the
//! filter and order engines can work over any record type. The comparison
//! rules live here: same-type values compare naturally, `Integer` and `Float`
//! coerce, `Null` participates in equality but never in ordering, and any
//! other cross-type comparison is an invalid-argument error.
//!
//! # Example
//!
//! ```rust
//! use repokit::value::AttributeValue;
//!
//! let title: AttributeValue = "First Topic 1".into();
//! let id: AttributeValue = 42_i64.into();
//! let missing: AttributeValue = Option::<String>::None.into();
//!
//! assert!(missing.is_null());
//! assert_eq!(id.type_name(), "integer");
//! ```

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{RepositoryError, RepositoryResult};

/// A dynamically typed attribute value
///
/// Lists exist for the membership operators; `Null` models a present but
/// empty attribute, which is distinct from an attribute the record type does
/// not have at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    /// String value
    String(String),
    /// 64-bit integer value
    Integer(i64),
    /// 64-bit floating point value
    Float(f64),
    /// Boolean value
    Boolean(bool),
    /// List of string values (for membership operators)
    StringList(Vec<String>),
    /// List of integer values (for membership operators)
    IntegerList(Vec<i64>),
    /// Null value
    Null,
}

impl AttributeValue {
    /// Check whether this value is `Null`
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check whether this value is one of the list variants
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::StringList(_) | Self::IntegerList(_))
    }

    /// Human-readable name of the value's type, used in diagnostics
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Boolean(_) => "boolean",
            Self::StringList(_) => "string list",
            Self::IntegerList(_) => "integer list",
            Self::Null => "null",
        }
    }

    /// Test two values for equality under the crate's comparison rules
    ///
    /// `Null` equals only `Null` and is unequal to everything else without
    /// raising. `Integer` and `Float` coerce. Any other cross-type pairing is
    /// an invalid-argument error, surfacing schema mistakes instead of
    /// silently filtering everything out.
    ///
    /// # Example
    ///
    /// ```rust
    /// use repokit::value::AttributeValue;
    ///
    /// let a = AttributeValue::Integer(12);
    /// let b = AttributeValue::Float(12.0);
    /// assert!(a.equals(&b).unwrap());
    ///
    /// assert!(!AttributeValue::Null.equals(&a).unwrap());
    /// assert!(a.equals(&AttributeValue::String("12".into())).is_err());
    /// ```
    pub fn equals(&self, other: &Self) -> RepositoryResult<bool> {
        match (self, other) {
            (Self::Null, Self::Null) => Ok(true),
            (Self::Null, _) | (_, Self::Null) => Ok(false),
            (Self::String(a), Self::String(b)) => Ok(a == b),
            (Self::Integer(a), Self::Integer(b)) => Ok(a == b),
            (Self::Float(a), Self::Float(b)) => Ok(a == b),
            (Self::Integer(a), Self::Float(b)) => Ok((*a as f64) == *b),
            (Self::Float(a), Self::Integer(b)) => Ok(*a == (*b as f64)),
            (Self::Boolean(a), Self::Boolean(b)) => Ok(a == b),
            (Self::StringList(a), Self::StringList(b)) => Ok(a == b),
            (Self::IntegerList(a), Self::IntegerList(b)) => Ok(a == b),
            _ => Err(RepositoryError::invalid_argument(format!(
                "cannot test {} against {} for equality",
                self.type_name(),
                other.type_name()
            ))),
        }
    }

    /// Compare two values under the crate's ordering rules
    ///
    /// Both operands must be non-null and mutually comparable; `Integer` and
    /// `Float` coerce. Lists and `Null` have no ordering.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use repokit::value::AttributeValue;
    ///
    /// let a = AttributeValue::Integer(3);
    /// let b = AttributeValue::Integer(5);
    /// assert_eq!(a.compare(&b).unwrap(), Ordering::Less);
    ///
    /// assert!(AttributeValue::Null.compare(&b).is_err());
    /// ```
    pub fn compare(&self, other: &Self) -> RepositoryResult<Ordering> {
        let incomparable = || {
            RepositoryError::invalid_argument(format!(
                "cannot order {} against {}",
                self.type_name(),
                other.type_name()
            ))
        };
        match (self, other) {
            (Self::String(a), Self::String(b)) => Ok(a.cmp(b)),
            (Self::Integer(a), Self::Integer(b)) => Ok(a.cmp(b)),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(b).ok_or_else(incomparable),
            (Self::Integer(a), Self::Float(b)) => {
                (*a as f64).partial_cmp(b).ok_or_else(incomparable)
            }
            (Self::Float(a), Self::Integer(b)) => {
                a.partial_cmp(&(*b as f64)).ok_or_else(incomparable)
            }
            (Self::Boolean(a), Self::Boolean(b)) => Ok(a.cmp(b)),
            _ => Err(incomparable()),
        }
    }

    /// Total ordering used by the sort engine once nulls are ranked away
    ///
    /// Mixed value types under a single order key are a caller error; they
    /// fall back to a fixed type rank so sorting stays deterministic and
    /// never panics.
    pub(crate) fn sort_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::String(a), Self::String(b)) => a.cmp(b),
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => a.total_cmp(b),
            (Self::Integer(a), Self::Float(b)) => (*a as f64).total_cmp(b),
            (Self::Float(a), Self::Integer(b)) => a.total_cmp(&(*b as f64)),
            (Self::Boolean(a), Self::Boolean(b)) => a.cmp(b),
            (Self::StringList(a), Self::StringList(b)) => a.cmp(b),
            (Self::IntegerList(a), Self::IntegerList(b)) => a.cmp(b),
            _ => self.type_rank().cmp(&other.type_rank()),
        }
    }

    const fn type_rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Boolean(_) => 1,
            Self::Integer(_) => 2,
            Self::Float(_) => 3,
            Self::String(_) => 4,
            Self::StringList(_) => 5,
            Self::IntegerList(_) => 6,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for AttributeValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for AttributeValue {
    fn from(n: i32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<f64> for AttributeValue {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<Vec<String>> for AttributeValue {
    fn from(list: Vec<String>) -> Self {
        Self::StringList(list)
    }
}

impl From<Vec<i64>> for AttributeValue {
    fn from(list: Vec<i64>) -> Self {
        Self::IntegerList(list)
    }
}

impl<T> From<Option<T>> for AttributeValue
where
    T: Into<AttributeValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
