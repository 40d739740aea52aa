use std::sync::Arc;

mod support;

use regex::Regex;
use slugtree_core::domain::errors::DomainError;
use slugtree_core::domain::node::{NewNode, NodeWriteRepository, PageTitles};
use slugtree_core::domain::slug::{
    Slug, SlugAllocator, SlugNormalizer, SlugPath, SlugScope, SlugSettings,
};
use slugtree_core::infrastructure::repositories::InMemoryNodeRepository;
use slugtree_core::infrastructure::util::DefaultTransliterator;

use support::fixed_now;

async fn store_with(slugs: &[&str]) -> InMemoryNodeRepository {
    let store = InMemoryNodeRepository::new();
    for slug in slugs {
        store
            .insert(NewNode {
                parent_id: None,
                titles: PageTitles::new(*slug).unwrap(),
                slug: Slug::new(*slug).unwrap(),
                slug_path: SlugPath::new(*slug).unwrap(),
                has_url: true,
                created_at: fixed_now(),
                updated_at: fixed_now(),
            })
            .await
            .unwrap();
    }
    store
}

async fn allocate(existing: &[&str], candidate: &str, max_length: usize) -> Result<String, DomainError> {
    let store = store_with(existing).await;
    SlugAllocator::new(max_length)
        .allocate(&store, candidate, &SlugScope::Table, None)
        .await
        .map(String::from)
}

#[tokio::test]
async fn first_duplicate_gets_counter_two() {
    assert_eq!(allocate(&["item"], "item", 50).await.unwrap(), "item-2");
}

#[tokio::test]
async fn existing_counter_is_continued() {
    assert_eq!(allocate(&["item", "item-2"], "item-2", 50).await.unwrap(), "item-3");
}

#[tokio::test]
async fn overlong_candidate_is_truncated_with_counter() {
    assert_eq!(allocate(&[], "abcdefghij", 5).await.unwrap(), "abc-2");
}

#[tokio::test]
async fn unused_candidate_is_kept() {
    assert_eq!(allocate(&["news"], "events", 50).await.unwrap(), "events");
}

#[tokio::test]
async fn counter_skips_taken_values() {
    assert_eq!(allocate(&["faq", "faq-2"], "faq", 50).await.unwrap(), "faq-3");
}

#[tokio::test]
async fn allocation_is_deterministic() {
    let existing = ["report", "report-2", "report-3"];
    let first = allocate(&existing, "report", 8).await.unwrap();
    for _ in 0..5 {
        assert_eq!(allocate(&existing, "report", 8).await.unwrap(), first);
    }
}

#[tokio::test]
async fn result_never_exceeds_max_length() {
    let existing = ["abcd", "abc-2", "abc-3", "ab-4", "ab-5"];
    for max_length in 3..=12 {
        let slug = allocate(&existing, "abcdefghijklmnop", max_length).await.unwrap();
        assert!(slug.chars().count() <= max_length, "{slug} > {max_length}");
        assert!(!existing.contains(&slug.as_str()));
    }
}

#[tokio::test]
async fn hopeless_length_is_reported() {
    let err = allocate(&["x", "2", "3", "4", "5", "6", "7", "8", "9"], "x", 1)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::LengthExhausted { max_length: 1 }));
}

#[tokio::test]
async fn empty_candidate_is_rejected() {
    let err = allocate(&[], "", 50).await.unwrap_err();
    assert!(matches!(err, DomainError::EmptyCandidate));
}

#[tokio::test]
async fn sibling_scope_only_sees_same_parent() {
    let store = Arc::new(store_with(&["team"]).await);
    let parent = store
        .insert(NewNode {
            parent_id: None,
            titles: PageTitles::new("Section").unwrap(),
            slug: Slug::new("section").unwrap(),
            slug_path: SlugPath::new("section").unwrap(),
            has_url: true,
            created_at: fixed_now(),
            updated_at: fixed_now(),
        })
        .await
        .unwrap();

    let allocator = SlugAllocator::new(50);
    let nested = allocator
        .allocate(
            store.as_ref(),
            "team",
            &SlugScope::Siblings {
                parent: Some(parent.id),
            },
            None,
        )
        .await
        .unwrap();
    let top = allocator
        .allocate(store.as_ref(), "team", &SlugScope::Siblings { parent: None }, None)
        .await
        .unwrap();

    assert_eq!(nested.as_str(), "team");
    assert_eq!(top.as_str(), "team-2");
}

#[test]
fn ascii_normalization_yields_url_safe_tokens() {
    let normalizer = SlugNormalizer::new(&SlugSettings::default(), Arc::new(DefaultTransliterator));
    let shape = Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap();

    for input in [
        "Hello World",
        "  --Trim me__please-- ",
        "Don't stop",
        "Crème brûlée à la carte",
        "Grüße aus Köln",
        "Ünïcödé ÆØÅ",
        "tabs\tand\nnewlines",
        "100% pure",
        "???",
    ] {
        let slug = normalizer.normalize(input).unwrap();
        assert!(shape.is_match(&slug), "{input:?} -> {slug:?}");
    }

    assert_eq!(normalizer.normalize("Don't stop").unwrap(), "dont-stop");
    assert_eq!(normalizer.normalize("Grüße aus Köln").unwrap(), "gruesse-aus-koeln");
}

#[test]
fn unicode_normalization_keeps_letters() {
    let settings = SlugSettings::default().with_unicode(true);
    let normalizer = SlugNormalizer::new(&settings, Arc::new(DefaultTransliterator));

    assert_eq!(normalizer.normalize("Grüße aus Köln").unwrap(), "grüße-aus-köln");
    assert_eq!(normalizer.normalize("Привет мир").unwrap(), "привет-мир");
}
