//! Collection reads over a seeded article catalog: filtering, ordering,
//! and paging, separately and combined.

mod common;

use common::{article_catalog, create_article, ids, titles};
use repokit::prelude::*;

// ===== FILTERING =====

#[test]
fn test_title_prefix_pattern_returns_the_group_in_insertion_order() {
    let repo = article_catalog();
    let filter = Specification::like("title", "First Topic%");

    let articles = repo.get_collection(Some(&filter), None, None).unwrap();

    assert_eq!(
        titles(&articles),
        vec!["First Topic 1", "First Topic 2", "First Topic 3"]
    );
}

#[test]
fn test_pattern_matching_ignores_case() {
    let repo = article_catalog();
    let filter = Specification::like("title", "fIrSt tOpIc%");

    assert_eq!(repo.count(Some(&filter)).unwrap(), 3);
}

#[test]
fn test_conjunction_of_title_and_text_patterns() {
    let repo = article_catalog();
    let filter =
        Specification::like("title", "%Topic%").and(Specification::like("text", "%1"));

    let articles = repo.get_collection(Some(&filter), None, None).unwrap();

    assert_eq!(titles(&articles), vec!["First Topic 1", "Second Topic 1"]);
}

#[test]
fn test_disjunction_collects_both_branches() {
    let repo = article_catalog();
    let filter = Specification::eq("id", 1_i64).or(Specification::eq("id", 9_i64));

    let articles = repo.get_collection(Some(&filter), None, None).unwrap();

    assert_eq!(ids(&articles), vec![1, 9]);
}

#[test]
fn test_negation_selects_the_complement() {
    let repo = article_catalog();
    let filter = Specification::like("title", "%Topic%").negate();

    let articles = repo.get_collection(Some(&filter), None, None).unwrap();

    assert_eq!(
        titles(&articles),
        vec!["Third Theme 1", "Third Theme 2", "Third Theme 3"]
    );
}

#[test]
fn test_relational_operators_on_ids() {
    let repo = article_catalog();

    let above = repo
        .get_collection(Some(&Specification::gt("id", 6_i64)), None, None)
        .unwrap();
    assert_eq!(ids(&above), vec![7, 8, 9]);

    let up_to = repo
        .get_collection(Some(&Specification::lte("id", 2_i64)), None, None)
        .unwrap();
    assert_eq!(ids(&up_to), vec![1, 2]);
}

#[test]
fn test_inequality_excludes_matching_text() {
    let repo = article_catalog();
    let filter = Specification::ne("text", "Text 2");

    assert_eq!(repo.count(Some(&filter)).unwrap(), 6);
}

#[test]
fn test_membership_preserves_backing_order_not_list_order() {
    let repo = article_catalog();
    let filter = Specification::in_list("id", vec![2_i64, 1]);

    let articles = repo.get_collection(Some(&filter), None, None).unwrap();

    assert_eq!(ids(&articles), vec![1, 2]);
}

#[test]
fn test_negated_membership_drops_the_listed_ids() {
    let repo = article_catalog();
    let filter = Specification::not_in("id", (3..=9).collect::<Vec<i64>>());

    let articles = repo.get_collection(Some(&filter), None, None).unwrap();

    assert_eq!(ids(&articles), vec![1, 2]);
}

#[test]
fn test_no_match_yields_an_empty_collection() {
    let repo = article_catalog();
    let filter = Specification::like("title", "Fourth%");

    assert!(repo.get_collection(Some(&filter), None, None).unwrap().is_empty());
    assert_eq!(repo.count(Some(&filter)).unwrap(), 0);
}

// ===== EVALUATION ERRORS =====

#[test]
fn test_scalar_membership_value_is_invalid() {
    let repo = article_catalog();
    let filter = Specification::attribute("id", Operator::In, 12_i64);

    let err = repo.get_collection(Some(&filter), None, None).unwrap_err();

    assert!(matches!(err, RepositoryError::InvalidArgument(_)));
}

#[test]
fn test_unknown_attribute_in_filter_names_the_model() {
    let repo = article_catalog();
    let filter = Specification::eq("author", "nobody");

    let err = repo.count(Some(&filter)).unwrap_err();

    assert_eq!(err, RepositoryError::attribute_not_found("Article", "author"));
}

#[test]
fn test_unrecognized_operator_token_is_unsupported() {
    let err = "BETWEEN".parse::<Operator>().unwrap_err();

    assert_eq!(err, RepositoryError::unsupported_operator("BETWEEN"));
}

// ===== ORDERING =====

#[test]
fn test_descending_id_reverses_insertion_order() {
    let repo = article_catalog();
    let order = OrderOptions::by(OrderBy::desc("id"));

    let articles = repo.get_collection(None, Some(&order), None).unwrap();

    assert_eq!(ids(&articles), vec![9, 8, 7, 6, 5, 4, 3, 2, 1]);
}

#[test]
fn test_multi_key_order_with_mixed_directions() {
    let repo = article_catalog();
    let order = OrderOptions::by(OrderBy::asc("text")).then(OrderBy::desc("id"));

    let articles = repo.get_collection(None, Some(&order), None).unwrap();

    assert_eq!(ids(&articles), vec![7, 4, 1, 8, 5, 2, 9, 6, 3]);
}

#[test]
fn test_equal_keys_keep_insertion_order() {
    let repo = article_catalog();
    // Every "Text n" group shares one key value.
    let order = OrderOptions::by(OrderBy::asc("text"));

    let articles = repo.get_collection(None, Some(&order), None).unwrap();

    assert_eq!(ids(&articles), vec![1, 4, 7, 2, 5, 8, 3, 6, 9]);
}

#[test]
fn test_null_text_placement_under_both_directions() {
    let mut repo = article_catalog();
    repo.create(create_article("Untitled Draft", None)).unwrap();

    let auto = OrderOptions::by(OrderBy::asc("text"));
    let articles = repo.get_collection(None, Some(&auto), None).unwrap();
    assert_eq!(articles[0].id, 10);

    let last = OrderOptions::by(OrderBy::desc("text").with_nulls(NullPlacement::Last));
    let articles = repo.get_collection(None, Some(&last), None).unwrap();
    assert_eq!(articles[9].id, 10);
}

#[test]
fn test_unknown_order_attribute_names_the_model() {
    let repo = article_catalog();
    let order = OrderOptions::by(OrderBy::asc("published_at"));

    let err = repo.get_collection(None, Some(&order), None).unwrap_err();

    assert_eq!(
        err,
        RepositoryError::attribute_not_found("Article", "published_at")
    );
}

// ===== PAGING =====

#[test]
fn test_windows_slice_the_ordered_sequence() {
    let repo = article_catalog();
    let order = OrderOptions::by(OrderBy::asc("id"));

    let window = repo
        .get_collection(None, Some(&order), Some(&Pagination::new(4, 2)))
        .unwrap();
    assert_eq!(ids(&window), vec![5, 6]);

    let past_end = repo
        .get_collection(None, Some(&order), Some(&Pagination::new(20, 5)))
        .unwrap();
    assert!(past_end.is_empty());
}

#[test]
fn test_pager_translates_page_numbers_into_windows() {
    let repo = article_catalog();
    let order = OrderOptions::by(OrderBy::asc("id"));
    let pager = Pager::new(4);

    let second_page = repo
        .get_collection(None, Some(&order), Some(&pager.page(2).unwrap()))
        .unwrap();
    assert_eq!(ids(&second_page), vec![5, 6, 7, 8]);

    let err = pager.page(0).unwrap_err();
    assert!(matches!(err, RepositoryError::InvalidArgument(_)));
}

// ===== COMBINED PIPELINE =====

#[test]
fn test_filtered_set_ordered_descending_pages_cleanly() {
    let repo = article_catalog();
    let filter = Specification::like("title", "%Topic%");
    let order = OrderOptions::by(OrderBy::desc("id"));

    let first = repo
        .get_collection(Some(&filter), Some(&order), Some(&Pagination::new(0, 3)))
        .unwrap();
    assert_eq!(
        titles(&first),
        vec!["Second Topic 3", "Second Topic 2", "Second Topic 1"]
    );

    let second = repo
        .get_collection(Some(&filter), Some(&order), Some(&Pagination::new(3, 3)))
        .unwrap();
    assert_eq!(
        titles(&second),
        vec!["First Topic 3", "First Topic 2", "First Topic 1"]
    );
}

#[test]
fn test_count_ignores_order_and_paging() {
    let repo = article_catalog();
    let filter = Specification::like("title", "%Topic%");

    let paged = repo
        .get_collection(Some(&filter), None, Some(&Pagination::new(0, 2)))
        .unwrap();

    assert_eq!(paged.len(), 2);
    assert_eq!(repo.count(Some(&filter)).unwrap(), 6);
}
