//! Specification algebra for filtering records
//!
//! A [`Specification`] is an immutable boolean predicate tree. Leaves compare
//! a single attribute against a value; `And`, `Or`, and `Not` nodes compose
//! them. Trees are plain data: building one never touches a record, and all
//! operand checking happens lazily at evaluation time so specifications can be
//! assembled, serialized, and inspected before use.
//!
//! # Example
//!
//! ```rust
//! use repokit::prelude::*;
//!
//! struct Article {
//!     id: i64,
//!     title: String,
//! }
//!
//! impl Record for Article {
//!     const MODEL: &'static str = "Article";
//!
//!     fn attribute(&self, name: &str) -> Option<AttributeValue> {
//!         match name {
//!             "id" => Some(self.id.into()),
//!             "title" => Some(self.title.clone().into()),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let spec = Specification::like("title", "first topic%")
//!     .and(Specification::lt("id", 10));
//!
//! let article = Article { id: 1, title: "First Topic 1".into() };
//! assert!(spec.is_satisfied_by(&article)?);
//! # Ok::<(), repokit::error::RepositoryError>(())
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{RepositoryError, RepositoryResult};
use crate::record::Record;
use crate::value::AttributeValue;

/// Comparison operators for attribute specifications
///
/// `Display` renders the SQL-style token and [`FromStr`] parses it back. The
/// enum is closed, so an operator outside the recognized set can only enter
/// through parsing, where it surfaces as an unsupported-operator error.
///
/// # Example
///
/// ```rust
/// use repokit::specification::Operator;
///
/// assert_eq!(format!("{}", Operator::Like), "LIKE");
/// assert_eq!("not in".parse::<Operator>().unwrap(), Operator::NotIn);
/// assert!("=~".parse::<Operator>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Equal to (=)
    Equal,
    /// Not equal to (!=)
    NotEqual,
    /// Less than (<)
    LessThan,
    /// Less than or equal to (<=)
    LessThanOrEqual,
    /// Greater than (>)
    GreaterThan,
    /// Greater than or equal to (>=)
    GreaterThanOrEqual,
    /// Case-insensitive pattern match with `%`/`_` wildcards (LIKE)
    Like,
    /// Value is a member of a list (IN)
    In,
    /// Value is not a member of a list (NOT IN)
    NotIn,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equal => write!(f, "="),
            Self::NotEqual => write!(f, "!="),
            Self::LessThan => write!(f, "<"),
            Self::LessThanOrEqual => write!(f, "<="),
            Self::GreaterThan => write!(f, ">"),
            Self::GreaterThanOrEqual => write!(f, ">="),
            Self::Like => write!(f, "LIKE"),
            Self::In => write!(f, "IN"),
            Self::NotIn => write!(f, "NOT IN"),
        }
    }
}

impl FromStr for Operator {
    type Err = RepositoryError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.to_ascii_uppercase().as_str() {
            "=" => Ok(Self::Equal),
            "!=" => Ok(Self::NotEqual),
            "<" => Ok(Self::LessThan),
            "<=" => Ok(Self::LessThanOrEqual),
            ">" => Ok(Self::GreaterThan),
            ">=" => Ok(Self::GreaterThanOrEqual),
            "LIKE" => Ok(Self::Like),
            "IN" => Ok(Self::In),
            "NOT IN" => Ok(Self::NotIn),
            _ => Err(RepositoryError::unsupported_operator(token)),
        }
    }
}

/// Leaf node binding an attribute name, an operator, and a comparison value
///
/// # Example
///
/// ```rust
/// use repokit::specification::{AttributeSpecification, Operator};
///
/// let leaf = AttributeSpecification::new("id", Operator::In, vec![1_i64, 2]);
/// assert_eq!(leaf.attribute, "id");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeSpecification {
    /// The attribute name to compare
    pub attribute: String,
    /// The comparison operator
    pub operator: Operator,
    /// The value to compare against
    pub value: AttributeValue,
}

impl AttributeSpecification {
    /// Create a new attribute specification
    pub fn new(
        attribute: impl Into<String>,
        operator: Operator,
        value: impl Into<AttributeValue>,
    ) -> Self {
        Self {
            attribute: attribute.into(),
            operator,
            value: value.into(),
        }
    }

    /// Evaluate this leaf against a single record
    ///
    /// Operand checking happens here, not at construction: a scalar handed to
    /// a membership operator, a non-string operand under `LIKE`, or values of
    /// incompatible types all surface as invalid-argument errors. An
    /// attribute the record type lacks is an attribute-not-found error.
    pub fn is_satisfied_by<R: Record>(&self, record: &R) -> RepositoryResult<bool> {
        let actual = record
            .attribute(&self.attribute)
            .ok_or_else(|| RepositoryError::attribute_not_found(R::MODEL, self.attribute.as_str()))?;

        match self.operator {
            Operator::Equal => actual.equals(&self.value),
            Operator::NotEqual => Ok(!actual.equals(&self.value)?),
            Operator::LessThan => Ok(actual.compare(&self.value)? == Ordering::Less),
            Operator::LessThanOrEqual => Ok(actual.compare(&self.value)? != Ordering::Greater),
            Operator::GreaterThan => Ok(actual.compare(&self.value)? == Ordering::Greater),
            Operator::GreaterThanOrEqual => Ok(actual.compare(&self.value)? != Ordering::Less),
            Operator::Like => like_matches(&self.value, &actual),
            Operator::In => list_contains(&self.value, &actual),
            Operator::NotIn => Ok(!list_contains(&self.value, &actual)?),
        }
    }
}

/// Composable boolean predicate over records
///
/// The node set is fixed: attribute comparisons at the leaves, variadic `And`
/// and `Or`, and single-child `Not`. Evaluation dispatches exhaustively and
/// short-circuits left to right, so the first failing child's error is the
/// one propagated.
///
/// # Example
///
/// ```rust
/// use repokit::specification::Specification;
///
/// let spec = Specification::gte("id", 3)
///     .and(Specification::lt("id", 6))
///     .and(Specification::ne("title", "skip me").negate().negate());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Specification {
    /// Single attribute comparison
    Attribute(AttributeSpecification),
    /// Satisfied iff every child is satisfied; an empty `And` is satisfied
    And(Vec<Specification>),
    /// Satisfied iff at least one child is satisfied; an empty `Or` is not
    Or(Vec<Specification>),
    /// Satisfied iff the child is not satisfied
    Not(Box<Specification>),
}

impl Specification {
    /// Create a leaf comparing `attribute` to `value` under `operator`
    pub fn attribute(
        attribute: impl Into<String>,
        operator: Operator,
        value: impl Into<AttributeValue>,
    ) -> Self {
        Self::Attribute(AttributeSpecification::new(attribute, operator, value))
    }

    /// Create an equality specification (attribute = value)
    pub fn eq(attribute: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        Self::attribute(attribute, Operator::Equal, value)
    }

    /// Create a not-equal specification (attribute != value)
    pub fn ne(attribute: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        Self::attribute(attribute, Operator::NotEqual, value)
    }

    /// Create a less-than specification (attribute < value)
    pub fn lt(attribute: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        Self::attribute(attribute, Operator::LessThan, value)
    }

    /// Create a less-than-or-equal specification (attribute <= value)
    pub fn lte(attribute: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        Self::attribute(attribute, Operator::LessThanOrEqual, value)
    }

    /// Create a greater-than specification (attribute > value)
    pub fn gt(attribute: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        Self::attribute(attribute, Operator::GreaterThan, value)
    }

    /// Create a greater-than-or-equal specification (attribute >= value)
    pub fn gte(attribute: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        Self::attribute(attribute, Operator::GreaterThanOrEqual, value)
    }

    /// Create a case-insensitive pattern specification (attribute LIKE pattern)
    ///
    /// `%` matches any run of characters, `_` exactly one. Anchors are
    /// implicit at both ends, so a pattern without wildcards is an exact
    /// case-insensitive match.
    ///
    /// # Example
    ///
    /// ```rust
    /// use repokit::specification::Specification;
    ///
    /// let prefix = Specification::like("title", "First Topic%");
    /// let contains = Specification::like("title", "%topic%");
    /// ```
    pub fn like(attribute: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::attribute(attribute, Operator::Like, pattern.into())
    }

    /// Create a membership specification (attribute IN values)
    ///
    /// The value must be a list; handing a scalar builds fine and fails with
    /// invalid-argument when evaluated.
    pub fn in_list(attribute: impl Into<String>, values: impl Into<AttributeValue>) -> Self {
        Self::attribute(attribute, Operator::In, values)
    }

    /// Create a non-membership specification (attribute NOT IN values)
    pub fn not_in(attribute: impl Into<String>, values: impl Into<AttributeValue>) -> Self {
        Self::attribute(attribute, Operator::NotIn, values)
    }

    /// Conjunction of an arbitrary number of specifications
    pub fn all(children: Vec<Specification>) -> Self {
        Self::And(children)
    }

    /// Disjunction of an arbitrary number of specifications
    pub fn any(children: Vec<Specification>) -> Self {
        Self::Or(children)
    }

    /// Combine with another specification under `And`
    ///
    /// Appends to an existing `And` node instead of nesting, which keeps
    /// left-to-right evaluation order intact.
    #[must_use]
    pub fn and(self, other: Specification) -> Self {
        match self {
            Self::And(mut children) => {
                children.push(other);
                Self::And(children)
            }
            _ => Self::And(vec![self, other]),
        }
    }

    /// Combine with another specification under `Or`
    #[must_use]
    pub fn or(self, other: Specification) -> Self {
        match self {
            Self::Or(mut children) => {
                children.push(other);
                Self::Or(children)
            }
            _ => Self::Or(vec![self, other]),
        }
    }

    /// Negate this specification
    #[must_use]
    pub fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Evaluate this specification against a single record
    ///
    /// Pure: neither the record nor the specification is mutated, and
    /// repeated evaluation yields the same result. `And`/`Or` short-circuit
    /// left to right; the first failing child's error propagates.
    pub fn is_satisfied_by<R: Record>(&self, record: &R) -> RepositoryResult<bool> {
        match self {
            Self::Attribute(leaf) => leaf.is_satisfied_by(record),
            Self::And(children) => {
                for child in children {
                    if !child.is_satisfied_by(record)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Self::Or(children) => {
                for child in children {
                    if child.is_satisfied_by(record)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            Self::Not(inner) => Ok(!inner.is_satisfied_by(record)?),
        }
    }
}

fn list_contains(list: &AttributeValue, needle: &AttributeValue) -> RepositoryResult<bool> {
    match list {
        AttributeValue::StringList(items) => Ok(match needle {
            AttributeValue::String(s) => items.iter().any(|item| item == s),
            _ => false,
        }),
        AttributeValue::IntegerList(items) => Ok(match needle {
            AttributeValue::Integer(n) => items.contains(n),
            AttributeValue::Float(x) => items.iter().any(|item| (*item as f64) == *x),
            _ => false,
        }),
        other => Err(RepositoryError::invalid_argument(format!(
            "membership operator requires a list value, got {}",
            other.type_name()
        ))),
    }
}

fn like_matches(pattern: &AttributeValue, actual: &AttributeValue) -> RepositoryResult<bool> {
    let AttributeValue::String(pattern) = pattern else {
        return Err(RepositoryError::invalid_argument(format!(
            "LIKE pattern must be a string, got {}",
            pattern.type_name()
        )));
    };
    let AttributeValue::String(actual) = actual else {
        return Err(RepositoryError::invalid_argument(format!(
            "LIKE requires a string attribute, got {}",
            actual.type_name()
        )));
    };
    Ok(like_regex(pattern)?.is_match(actual))
}

/// Translate a `%`/`_` wildcard pattern into an anchored regular expression.
fn like_regex(pattern: &str) -> RepositoryResult<Regex> {
    let mut source = String::with_capacity(pattern.len() + 2);
    let mut literal = String::new();
    source.push('^');
    for ch in pattern.chars() {
        match ch {
            '%' | '_' => {
                source.push_str(&regex::escape(&literal));
                literal.clear();
                source.push_str(if ch == '%' { ".*" } else { "." });
            }
            other => literal.push(other),
        }
    }
    source.push_str(&regex::escape(&literal));
    source.push('$');

    RegexBuilder::new(&source)
        .case_insensitive(true)
        .dot_matches_new_line(true)
        .build()
        .map_err(|err| {
            RepositoryError::invalid_argument(format!("malformed LIKE pattern `{pattern}`: {err}"))
        })
}
