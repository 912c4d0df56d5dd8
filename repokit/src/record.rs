//! Record trait for dynamically inspectable domain types
//!
//! The filter and order engines never see concrete record types. They reach
//! attributes through [`Record::attribute`], which keeps the engines generic
//! over anything a repository stores.

use crate::value::AttributeValue;

/// A domain type whose attributes can be read by name
///
/// Returning `None` from [`attribute`](Self::attribute) means the type has no
/// such attribute, which the engines report as an attribute-not-found error.
/// A present but empty attribute is `Some(AttributeValue::Null)` instead.
///
/// # Example
///
/// ```rust
/// use repokit::record::Record;
/// use repokit::value::AttributeValue;
///
/// struct Article {
///     id: i64,
///     title: String,
///     text: Option<String>,
/// }
///
/// impl Record for Article {
///     const MODEL: &'static str = "Article";
///
///     fn attribute(&self, name: &str) -> Option<AttributeValue> {
///         match name {
///             "id" => Some(self.id.into()),
///             "title" => Some(self.title.clone().into()),
///             "text" => Some(self.text.clone().into()),
///             _ => None,
///         }
///     }
/// }
///
/// let article = Article { id: 1, title: "First".into(), text: None };
/// assert_eq!(article.attribute("id"), Some(AttributeValue::Integer(1)));
/// assert_eq!(article.attribute("text"), Some(AttributeValue::Null));
/// assert_eq!(article.attribute("author"), None);
/// ```
pub trait Record {
    /// Model name used in diagnostics and error payloads
    const MODEL: &'static str;

    /// Read an attribute by name
    fn attribute(&self, name: &str) -> Option<AttributeValue>;
}
