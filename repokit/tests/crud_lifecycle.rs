//! Full create/read/update/delete walks against the in-memory repository,
//! including identifier assignment, not-found propagation, and adapter
//! uniqueness pre-checks.

mod common;

use common::{
    article_catalog, create_article, ids, Article, ArticleAdapter, CreateArticle, UpdateArticle,
};
use repokit::prelude::*;

/// Adapter enforcing unique titles, as a subtype would for usernames.
#[derive(Debug, Default)]
struct UniqueTitleAdapter {
    last_id: i64,
}

impl MemoryAdapter for UniqueTitleAdapter {
    type Id = i64;
    type Entity = Article;
    type Create = CreateArticle;
    type Update = UpdateArticle;

    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    fn build_entity(&self, input: CreateArticle, id: i64) -> Article {
        Article {
            id,
            title: input.title,
            text: input.text,
        }
    }

    fn apply_update(&self, entity: &mut Article, input: UpdateArticle) {
        entity.title = input.title;
        entity.text = input.text;
    }

    fn id_specification(&self, id: &i64) -> Specification {
        Specification::eq("id", *id)
    }

    fn check_create(&self, input: &CreateArticle, records: &[Article]) -> RepositoryResult<()> {
        if records.iter().any(|a| a.title == input.title) {
            return Err(RepositoryError::uniqueness_violation(
                Article::MODEL,
                RepositoryOperation::Create,
                format!("title `{}` already in use", input.title),
            ));
        }
        Ok(())
    }

    fn check_update(
        &self,
        id: &i64,
        input: &UpdateArticle,
        records: &[Article],
    ) -> RepositoryResult<()> {
        if records
            .iter()
            .any(|a| a.id != *id && a.title == input.title)
        {
            return Err(RepositoryError::uniqueness_violation(
                Article::MODEL,
                RepositoryOperation::Update,
                format!("title `{}` already in use", input.title),
            ));
        }
        Ok(())
    }
}

fn update_article(title: &str, text: Option<&str>) -> UpdateArticle {
    UpdateArticle {
        title: title.to_string(),
        text: text.map(str::to_string),
    }
}

// ===== CREATE =====

#[test]
fn test_first_create_gets_id_one_and_subsequent_creates_increment() {
    let mut repo = MemoryRepository::new(ArticleAdapter::default());

    let first = repo.create(create_article("One", None)).unwrap();
    let second = repo.create(create_article("Two", None)).unwrap();
    let third = repo.create(create_article("Three", None)).unwrap();

    assert_eq!((first.id, second.id, third.id), (1, 2, 3));
    assert_eq!(repo.count(None).unwrap(), 3);
}

#[test]
fn test_create_returns_the_full_record() {
    let mut repo = MemoryRepository::new(ArticleAdapter::default());

    let created = repo.create(create_article("Headline", Some("Body"))).unwrap();

    assert_eq!(created.title, "Headline");
    assert_eq!(created.text.as_deref(), Some("Body"));
    assert_eq!(repo.get_item(&created.id).unwrap(), created);
}

#[test]
fn test_ids_are_not_reused_after_delete() {
    let mut repo = article_catalog();

    repo.delete(&9).unwrap();
    let created = repo.create(create_article("Replacement", None)).unwrap();

    assert_eq!(created.id, 10);
}

// ===== READ =====

#[test]
fn test_get_item_returns_the_exact_record() {
    let repo = article_catalog();

    let article = repo.get_item(&5).unwrap();

    assert_eq!(article.title, "Second Topic 2");
    assert_eq!(article.text.as_deref(), Some("Text 2"));
}

#[test]
fn test_get_item_miss_names_model_and_id() {
    let repo = article_catalog();

    let err = repo.get_item(&42).unwrap_err();

    assert_eq!(err, RepositoryError::not_found("Article", 42));
    assert_eq!(err.to_string(), "Article not found [id: 42]");
}

#[test]
fn test_exists_reports_presence_without_raising() {
    let repo = article_catalog();

    assert!(repo.exists(&1).unwrap());
    assert!(!repo.exists(&42).unwrap());
}

#[test]
fn test_model_name_reflects_the_record_type() {
    let repo = MemoryRepository::new(ArticleAdapter::default());

    assert_eq!(repo.model_name(), "Article");
}

// ===== UPDATE =====

#[test]
fn test_update_rewrites_attributes_and_keeps_the_id() {
    let mut repo = article_catalog();

    let updated = repo.update(&5, update_article("Revised", None)).unwrap();

    assert_eq!(updated.id, 5);
    assert_eq!(updated.title, "Revised");
    assert_eq!(updated.text, None);
    assert_eq!(repo.get_item(&5).unwrap(), updated);
}

#[test]
fn test_update_of_absent_id_is_not_found() {
    let mut repo = article_catalog();

    let err = repo.update(&42, update_article("x", None)).unwrap_err();

    assert!(err.is_not_found());
}

// ===== DELETE =====

#[test]
fn test_delete_returns_the_pre_removal_record() {
    let mut repo = article_catalog();

    let removed = repo.delete(&5).unwrap();

    assert_eq!(removed.title, "Second Topic 2");
    assert_eq!(repo.count(None).unwrap(), 8);
}

#[test]
fn test_every_operation_on_a_deleted_id_is_not_found() {
    let mut repo = article_catalog();
    repo.delete(&5).unwrap();

    assert!(repo.get_item(&5).unwrap_err().is_not_found());
    assert!(repo.update(&5, update_article("x", None)).unwrap_err().is_not_found());
    assert!(repo.delete(&5).unwrap_err().is_not_found());
    assert!(!repo.exists(&5).unwrap());
}

#[test]
fn test_delete_leaves_the_remaining_order_intact() {
    let mut repo = article_catalog();

    repo.delete(&2).unwrap();
    let rest = repo.get_collection(None, None, None).unwrap();

    assert_eq!(ids(&rest), vec![1, 3, 4, 5, 6, 7, 8, 9]);
}

// ===== SEEDING =====

#[test]
fn test_seeded_repository_serves_and_extends_the_seed() {
    let seed = vec![
        Article {
            id: 1,
            title: "Archived 1".to_string(),
            text: None,
        },
        Article {
            id: 2,
            title: "Archived 2".to_string(),
            text: None,
        },
    ];
    let mut repo = MemoryRepository::seeded(ArticleAdapter::starting_after(2), seed);

    assert_eq!(repo.count(None).unwrap(), 2);
    assert_eq!(repo.get_item(&1).unwrap().title, "Archived 1");

    let created = repo.create(create_article("Fresh", None)).unwrap();
    assert_eq!(created.id, 3);
}

// ===== UNIQUENESS PRE-CHECKS =====

#[test]
fn test_duplicate_title_create_is_rejected_before_any_mutation() {
    let mut repo = MemoryRepository::new(UniqueTitleAdapter::default());
    repo.create(create_article("Exclusive", None)).unwrap();

    let err = repo.create(create_article("Exclusive", None)).unwrap_err();

    assert_eq!(
        err,
        RepositoryError::uniqueness_violation(
            "Article",
            RepositoryOperation::Create,
            "title `Exclusive` already in use",
        )
    );
    assert_eq!(repo.count(None).unwrap(), 1);
    // The rejected attempt did not consume an identifier.
    assert_eq!(repo.create(create_article("Another", None)).unwrap().id, 2);
}

#[test]
fn test_duplicate_title_update_is_rejected_and_state_is_untouched() {
    let mut repo = MemoryRepository::new(UniqueTitleAdapter::default());
    repo.create(create_article("First", None)).unwrap();
    repo.create(create_article("Second", None)).unwrap();

    let err = repo.update(&2, update_article("First", None)).unwrap_err();

    assert!(matches!(err, RepositoryError::UniquenessViolation { .. }));
    assert_eq!(repo.get_item(&2).unwrap().title, "Second");
}

#[test]
fn test_update_keeping_its_own_title_is_not_a_conflict() {
    let mut repo = MemoryRepository::new(UniqueTitleAdapter::default());
    repo.create(create_article("Stable", Some("v1"))).unwrap();

    let updated = repo.update(&1, update_article("Stable", Some("v2"))).unwrap();

    assert_eq!(updated.text.as_deref(), Some("v2"));
}
