//! In-memory reference repository
//!
//! [`MemoryRepository`] keeps an ordered `Vec` of records and implements the
//! full repository contract by composing the specification, order, and paging
//! engines. Everything type-specific is supplied by a [`MemoryAdapter`]:
//! identifier generation, record construction, update application, the
//! identifier-equality specification used for lookups, and optional
//! uniqueness pre-checks.
//!
//! Reads hand out cloned snapshots. Update and delete rebuild the backing
//! sequence instead of splicing it in place, so a snapshot taken earlier is
//! never affected by later mutations. The repository is not thread-safe;
//! mutation goes through `&mut self` and concurrent use needs external
//! coordination.
//!
//! # Example
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
//! let mut repo = MemoryRepository::new(NewsAdapter::default());
//! let created = repo.create(CreateNews { title: "hello".into() })?;
//! assert_eq!(created.id, 1);
//! assert_eq!(repo.count(None)?, 1);
//! assert_eq!(repo.get_item(&1)?.title, "hello");
//! # Ok::<(), repokit::error::RepositoryError>(())
//! ```

use std::fmt;

use crate::error::{RepositoryError, RepositoryResult};
use crate::order::OrderOptions;
use crate::paging::Pagination;
use crate::record::Record;
use crate::specification::Specification;

#[cfg(feature = "async")]
use super::traits::AsyncCrudRepository;
use super::traits::CrudRepository;

/// Type-specific extension points for the in-memory repository
///
/// An adapter bundles the four type axes of the repository contract with the
/// operations only the concrete record type can provide. The repository owns
/// the generic flow; the adapter fills in the blanks.
pub trait MemoryAdapter {
    /// Identifier type of the stored records
    type Id;
    /// The stored record type
    type Entity;
    /// Input for creating a record
    type Create;
    /// Input for updating a record
    type Update;

    /// Produce the next unique identifier
    ///
    /// The in-memory reference convention is a monotonically increasing
    /// counter starting at 1. An adapter handed to
    /// [`MemoryRepository::seeded`] must start its counter above the seeded
    /// identifiers.
    fn next_id(&mut self) -> Self::Id;

    /// Build a full record from a creation input and a generated identifier
    fn build_entity(&self, input: Self::Create, id: Self::Id) -> Self::Entity;

    /// Apply an update input onto an existing record
    ///
    /// Must leave the identifier untouched.
    fn apply_update(&self, entity: &mut Self::Entity, input: Self::Update);

    /// Build the identifier-equality specification used for lookups
    ///
    /// Lookup-by-id runs this specification through the regular filter path,
    /// so there is no separate equality machinery to keep consistent.
    fn id_specification(&self, id: &Self::Id) -> Specification;

    /// Validate a creation input against the current records
    ///
    /// Runs before any state changes; returning an error (typically a
    /// uniqueness violation) leaves the repository untouched and does not
    /// consume an identifier. The default accepts everything.
    fn check_create(
        &self,
        _input: &Self::Create,
        _records: &[Self::Entity],
    ) -> RepositoryResult<()> {
        Ok(())
    }

    /// Validate an update input against the current records
    ///
    /// Same contract as [`check_create`](Self::check_create); runs after the
    /// target record has been located and before it is mutated.
    fn check_update(
        &self,
        _id: &Self::Id,
        _input: &Self::Update,
        _records: &[Self::Entity],
    ) -> RepositoryResult<()> {
        Ok(())
    }
}

/// Sequential in-memory repository over an adapter's record type
pub struct MemoryRepository<A: MemoryAdapter> {
    adapter: A,
    records: Vec<A::Entity>,
}

impl<A: MemoryAdapter> MemoryRepository<A> {
    /// Create an empty repository
    pub fn new(adapter: A) -> Self {
        Self {
            adapter,
            records: Vec::new(),
        }
    }

    /// Create a repository pre-populated with existing records
    ///
    /// Seeded records are served as-is; the adapter's identifier generator
    /// is only consulted for subsequent creates.
    pub fn seeded(adapter: A, records: Vec<A::Entity>) -> Self {
        Self { adapter, records }
    }
}

impl<A> MemoryRepository<A>
where
    A: MemoryAdapter,
    A::Entity: Record + Clone,
    A::Id: fmt::Display,
{
    /// Clone every record satisfying `filter`, in backing order.
    fn snapshot_matching(
        &self,
        filter: Option<&Specification>,
    ) -> RepositoryResult<Vec<A::Entity>> {
        let mut hits = Vec::new();
        for record in &self.records {
            if matches_filter(filter, record)? {
                hits.push(record.clone());
            }
        }
        Ok(hits)
    }

    /// Index of the record carrying `id`, via the adapter's id specification.
    fn position_of(&self, id: &A::Id) -> RepositoryResult<usize> {
        let spec = self.adapter.id_specification(id);
        for (index, record) in self.records.iter().enumerate() {
            if spec.is_satisfied_by(record)? {
                return Ok(index);
            }
        }
        Err(RepositoryError::not_found(A::Entity::MODEL, id))
    }
}

impl<A> CrudRepository<A::Id, A::Entity, A::Create, A::Update> for MemoryRepository<A>
where
    A: MemoryAdapter,
    A::Entity: Record + Clone,
    A::Id: fmt::Display,
{
    fn get_collection(
        &self,
        filter: Option<&Specification>,
        order: Option<&OrderOptions>,
        paging: Option<&Pagination>,
    ) -> RepositoryResult<Vec<A::Entity>> {
        let mut results = self.snapshot_matching(filter)?;
        if let Some(order) = order {
            results = order.apply(results)?;
        }
        if let Some(paging) = paging {
            results = paging.apply(results);
        }
        tracing::trace!(
            model = A::Entity::MODEL,
            matched = results.len(),
            "collection assembled"
        );
        Ok(results)
    }

    fn count(&self, filter: Option<&Specification>) -> RepositoryResult<usize> {
        let mut total = 0;
        for record in &self.records {
            if matches_filter(filter, record)? {
                total += 1;
            }
        }
        Ok(total)
    }

    fn get_item(&self, id: &A::Id) -> RepositoryResult<A::Entity> {
        let spec = self.adapter.id_specification(id);
        let mut matches = self.get_collection(Some(&spec), None, None)?;
        if matches.is_empty() {
            return Err(RepositoryError::not_found(A::Entity::MODEL, id));
        }
        Ok(matches.swap_remove(0))
    }

    fn exists(&self, id: &A::Id) -> RepositoryResult<bool> {
        let spec = self.adapter.id_specification(id);
        Ok(self.count(Some(&spec))? > 0)
    }

    fn create(&mut self, input: A::Create) -> RepositoryResult<A::Entity> {
        self.adapter.check_create(&input, &self.records)?;
        let id = self.adapter.next_id();
        let entity = self.adapter.build_entity(input, id);
        self.records.push(entity.clone());
        tracing::debug!(
            model = A::Entity::MODEL,
            total = self.records.len(),
            "record created"
        );
        Ok(entity)
    }

    fn update(&mut self, id: &A::Id, input: A::Update) -> RepositoryResult<A::Entity> {
        let position = self.position_of(id)?;
        self.adapter.check_update(id, &input, &self.records)?;

        // Copy-on-write: earlier snapshots keep seeing the old sequence.
        let mut next = self.records.clone();
        self.adapter.apply_update(&mut next[position], input);
        let updated = next[position].clone();
        self.records = next;
        tracing::debug!(model = A::Entity::MODEL, "record updated");
        Ok(updated)
    }

    fn delete(&mut self, id: &A::Id) -> RepositoryResult<A::Entity> {
        let position = self.position_of(id)?;

        let mut next = self.records.clone();
        let removed = next.remove(position);
        self.records = next;
        tracing::debug!(
            model = A::Entity::MODEL,
            total = self.records.len(),
            "record deleted"
        );
        Ok(removed)
    }

    fn model_name(&self) -> &'static str {
        A::Entity::MODEL
    }
}

fn matches_filter<R: Record>(
    filter: Option<&Specification>,
    record: &R,
) -> RepositoryResult<bool> {
    filter.map_or(Ok(true), |spec| spec.is_satisfied_by(record))
}

/// Suspension-capable wrapper around [`MemoryRepository`]
///
/// Semantics are identical to the sequential repository. Collection reads
/// yield to the scheduler between the filter, order, and paging stages;
/// point operations yield once before running. No operation blocks.
#[cfg(feature = "async")]
pub struct AsyncMemoryRepository<A: MemoryAdapter> {
    inner: MemoryRepository<A>,
}

#[cfg(feature = "async")]
impl<A: MemoryAdapter> AsyncMemoryRepository<A> {
    /// Create an empty repository
    pub fn new(adapter: A) -> Self {
        Self {
            inner: MemoryRepository::new(adapter),
        }
    }

    /// Create a repository pre-populated with existing records
    pub fn seeded(adapter: A, records: Vec<A::Entity>) -> Self {
        Self {
            inner: MemoryRepository::seeded(adapter, records),
        }
    }

    /// Unwrap into the sequential repository
    pub fn into_inner(self) -> MemoryRepository<A> {
        self.inner
    }
}

#[cfg(feature = "async")]
impl<A: MemoryAdapter> From<MemoryRepository<A>> for AsyncMemoryRepository<A> {
    fn from(inner: MemoryRepository<A>) -> Self {
        Self { inner }
    }
}

#[cfg(feature = "async")]
impl<A> AsyncCrudRepository<A::Id, A::Entity, A::Create, A::Update> for AsyncMemoryRepository<A>
where
    A: MemoryAdapter + Send + Sync,
    A::Id: fmt::Display + Send + Sync,
    A::Entity: Record + Clone + Send + Sync,
    A::Create: Send,
    A::Update: Send,
{
    async fn get_collection(
        &self,
        filter: Option<&Specification>,
        order: Option<&OrderOptions>,
        paging: Option<&Pagination>,
    ) -> RepositoryResult<Vec<A::Entity>> {
        let mut results = self.inner.snapshot_matching(filter)?;
        tokio::task::yield_now().await;
        if let Some(order) = order {
            results = order.apply(results)?;
        }
        tokio::task::yield_now().await;
        if let Some(paging) = paging {
            results = paging.apply(results);
        }
        Ok(results)
    }

    async fn count(&self, filter: Option<&Specification>) -> RepositoryResult<usize> {
        tokio::task::yield_now().await;
        self.inner.count(filter)
    }

    async fn get_item(&self, id: &A::Id) -> RepositoryResult<A::Entity> {
        tokio::task::yield_now().await;
        self.inner.get_item(id)
    }

    async fn exists(&self, id: &A::Id) -> RepositoryResult<bool> {
        tokio::task::yield_now().await;
        self.inner.exists(id)
    }

    async fn create(&mut self, input: A::Create) -> RepositoryResult<A::Entity> {
        tokio::task::yield_now().await;
        self.inner.create(input)
    }

    async fn update(&mut self, id: &A::Id, input: A::Update) -> RepositoryResult<A::Entity> {
        tokio::task::yield_now().await;
        self.inner.update(id, input)
    }

    async fn delete(&mut self, id: &A::Id) -> RepositoryResult<A::Entity> {
        tokio::task::yield_now().await;
        self.inner.delete(id)
    }

    fn model_name(&self) -> &'static str {
        self.inner.model_name()
    }
}
