//! # repokit
//!
//! Storage-agnostic CRUD repositories with composable filter, order, and
//! paging specifications. Works equally well as a query-description layer in
//! front of a real store and as a standalone in-memory backend for tests and
//! prototypes.
//!
//! ## Features
//!
//! - **Specifications**: attribute conditions (`=`, `!=`, `<`, `<=`, `>`, `>=`,
//!   `LIKE`, `IN`, `NOT IN`) composed with `and`, `or`, and `negate`
//! - **Ordering**: stable multi-key sort with per-key direction and null
//!   placement
//! - **Paging**: offset/limit windows plus a page-number translator
//! - **Repository contract**: sequential and suspension-capable variants over
//!   the same four type axes (id, entity, create input, update input)
//! - **In-memory backend**: copy-on-write reference implementation driven by
//!   a small adapter trait
//!
//! ## Example
//!
//! ```rust
//! use repokit::prelude::*;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct News {
//!     id: i64,
//!     title: String,
//! }
//!
//! impl Record for News {
//!     const MODEL: &'static str = "News";
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
//! struct CreateNews {
//!     title: String,
//! }
//!
//! struct UpdateNews {
//!     title: String,
//! }
//!
//! #[derive(Default)]
//! struct NewsAdapter {
//!     last_id: i64,
//! }
//!
//! impl MemoryAdapter for NewsAdapter {
//!     type Id = i64;
//!     type Entity = News;
//!     type Create = CreateNews;
//!     type Update = UpdateNews;
//!
//!     fn next_id(&mut self) -> i64 {
//!         self.last_id += 1;
//!         self.last_id
//!     }
//!
//!     fn build_entity(&self, input: CreateNews, id: i64) -> News {
//!         News { id, title: input.title }
//!     }
//!
//!     fn apply_update(&self, entity: &mut News, input: UpdateNews) {
//!         entity.title = input.title;
//!     }
//!
//!     fn id_specification(&self, id: &i64) -> Specification {
//!         Specification::eq("id", *id)
//!     }
//! }
//!
//! fn main() -> RepositoryResult<()> {
//!     let mut repo = MemoryRepository::new(NewsAdapter::default());
//!     for title in ["Local News 1", "Local News 2", "World News 1"] {
//!         repo.create(CreateNews { title: title.into() })?;
//!     }
//!
//!     let filter = Specification::like("title", "local%");
//!     let order = OrderOptions::by(OrderBy::desc("id"));
//!     let page = Pager::new(10).page(1)?;
//!
//!     let latest = repo.get_collection(Some(&filter), Some(&order), Some(&page))?;
//!     assert_eq!(latest.len(), 2);
//!     assert_eq!(latest[0].title, "Local News 2");
//!     assert_eq!(repo.count(Some(&filter))?, 2);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod order;
pub mod paging;
pub mod record;
pub mod repository;
pub mod specification;
pub mod value;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{RepositoryError, RepositoryOperation, RepositoryResult};
    pub use crate::order::{NullPlacement, OrderBy, OrderDirection, OrderOptions};
    pub use crate::paging::{Pager, Pagination};
    pub use crate::record::Record;
    pub use crate::specification::{AttributeSpecification, Operator, Specification};
    pub use crate::value::AttributeValue;

    pub use crate::repository::{CrudRepository, MemoryAdapter, MemoryRepository};

    #[cfg(feature = "async")]
    pub use crate::repository::{AsyncCrudRepository, AsyncMemoryRepository};

    // Re-export serde derives for query-description round trips
    pub use serde::{Deserialize, Serialize};

    // Re-export tokio for suspension-capable callers
    #[cfg(feature = "async")]
    pub use tokio;
}
