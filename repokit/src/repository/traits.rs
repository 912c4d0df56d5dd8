//! Repository contract definitions
//!
//! Two equivalent contracts are defined here. [`CrudRepository`] is the
//! sequential shape: every operation runs to completion on the caller's
//! thread. [`AsyncCrudRepository`] is the suspension-capable twin with the
//! same semantics, using RPITIT (Return Position Impl Trait In Traits,
//! available since Rust 1.75) instead of an `async_trait` macro.
//!
//! Mutating operations take `&mut self`. That is the single-writer
//! discipline of the contract made visible in the type system: there is no
//! concurrent mutation path unless an implementation chooses to add one
//! behind interior mutability.
//!
//! # Example
//!
//! ```rust,ignore
//! use repokit::prelude::*;
//!
//! struct NewsDirectory {
//!     backing: MemoryRepository<NewsAdapter>,
//! }
//!
//! fn front_page(repo: &impl CrudRepository<i64, News, CreateNews, UpdateNews>)
//!     -> RepositoryResult<Vec<News>>
//! {
//!     repo.get_collection(
//!         Some(&Specification::like("title", "%breaking%")),
//!         Some(&OrderOptions::by(OrderBy::desc("id"))),
//!         Some(&Pagination::first_page(10)),
//!     )
//! }
//! ```

#[cfg(feature = "async")]
use std::future::Future;

use crate::error::RepositoryResult;
use crate::order::OrderOptions;
use crate::paging::Pagination;
use crate::specification::Specification;

/// Sequential repository contract for CRUD operations
///
/// # Type Parameters
///
/// - `Id`: the identifier type (e.g. `i64`, `Uuid`, a newtype)
/// - `Entity`: the full record type returned from queries
/// - `Create`: the input for creating new records
/// - `Update`: the input for updating existing records
///
/// The four axes are independent: an update input typically excludes the
/// identifier, and a create input excludes everything the store generates.
pub trait CrudRepository<Id, Entity, Create, Update> {
    /// Fetch records matching `filter`, ordered and windowed
    ///
    /// Applies filter, then order, then paging over a snapshot of the
    /// current records and returns a new sequence, never the internal one.
    /// `None` for any argument skips that stage.
    fn get_collection(
        &self,
        filter: Option<&Specification>,
        order: Option<&OrderOptions>,
        paging: Option<&Pagination>,
    ) -> RepositoryResult<Vec<Entity>>;

    /// Count records matching `filter`, ignoring order and paging
    ///
    /// Always equals the length of an unpaged
    /// [`get_collection`](Self::get_collection) under the same filter.
    fn count(&self, filter: Option<&Specification>) -> RepositoryResult<usize>;

    /// Fetch the single record carrying `id`
    ///
    /// # Errors
    ///
    /// Not-found if no record carries the identifier.
    fn get_item(&self, id: &Id) -> RepositoryResult<Entity>;

    /// Check whether a record with `id` is present
    ///
    /// Never yields not-found; a miss is `Ok(false)`. Other evaluation
    /// errors still propagate.
    fn exists(&self, id: &Id) -> RepositoryResult<bool>;

    /// Create a new record from `input`
    ///
    /// Allocates a fresh unique identifier, builds the full record, appends
    /// it, and returns it.
    ///
    /// # Errors
    ///
    /// Uniqueness-violation if a pre-mutation check rejects the input; the
    /// backing state is untouched in that case.
    fn create(&mut self, input: Create) -> RepositoryResult<Entity>;

    /// Update the record carrying `id` with `input`
    ///
    /// Mutates the located record's updatable attributes and returns it.
    /// The identifier itself is never changed by an update.
    ///
    /// # Errors
    ///
    /// Not-found if the identifier is absent; uniqueness-violation if a
    /// pre-mutation check rejects the input.
    fn update(&mut self, id: &Id, input: Update) -> RepositoryResult<Entity>;

    /// Delete the record carrying `id`, returning its pre-removal value
    ///
    /// # Errors
    ///
    /// Not-found if the identifier is absent.
    fn delete(&mut self, id: &Id) -> RepositoryResult<Entity>;

    /// The record type descriptor used in diagnostics
    fn model_name(&self) -> &'static str;
}

/// Suspension-capable repository contract, semantically equivalent to
/// [`CrudRepository`]
///
/// Implementations may suspend at internal step boundaries (the in-memory
/// reference yields between the filter, order, and paging stages) but are
/// not required to; the points exist so future backing stores that do real
/// I/O fit the same contract.
///
/// # Example
///
/// ```rust,ignore
/// use repokit::prelude::*;
///
/// async fn archive_all<R>(repo: &mut R) -> RepositoryResult<usize>
/// where
///     R: AsyncCrudRepository<i64, News, CreateNews, UpdateNews>,
/// {
///     repo.count(None).await
/// }
/// ```
#[cfg(feature = "async")]
pub trait AsyncCrudRepository<Id, Entity, Create, Update>: Send + Sync {
    /// Fetch records matching `filter`, ordered and windowed
    fn get_collection(
        &self,
        filter: Option<&Specification>,
        order: Option<&OrderOptions>,
        paging: Option<&Pagination>,
    ) -> impl Future<Output = RepositoryResult<Vec<Entity>>> + Send;

    /// Count records matching `filter`, ignoring order and paging
    fn count(
        &self,
        filter: Option<&Specification>,
    ) -> impl Future<Output = RepositoryResult<usize>> + Send;

    /// Fetch the single record carrying `id`; not-found if absent
    fn get_item(&self, id: &Id) -> impl Future<Output = RepositoryResult<Entity>> + Send;

    /// Check whether a record with `id` is present; a miss is `Ok(false)`
    fn exists(&self, id: &Id) -> impl Future<Output = RepositoryResult<bool>> + Send;

    /// Create a new record from `input`
    fn create(&mut self, input: Create) -> impl Future<Output = RepositoryResult<Entity>> + Send;

    /// Update the record carrying `id` with `input`; not-found if absent
    fn update(
        &mut self,
        id: &Id,
        input: Update,
    ) -> impl Future<Output = RepositoryResult<Entity>> + Send;

    /// Delete the record carrying `id`, returning its pre-removal value
    fn delete(&mut self, id: &Id) -> impl Future<Output = RepositoryResult<Entity>> + Send;

    /// The record type descriptor used in diagnostics
    fn model_name(&self) -> &'static str;
}
