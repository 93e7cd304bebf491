//! Tests for page clamping and the post/category join.

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::CategoryRepositoryError;
use crate::domain::test_support::{MockStore, category, comment, post};
use crate::domain::content::PostId;
use rstest::rstest;

fn engine(mocks: MockStore) -> ListingEngine {
    ListingEngine::new(mocks.into_store())
}

fn request(page: u32, limit: u32) -> PageRequest {
    PageRequest::new(page, limit).expect("valid page request")
}

#[rstest]
#[case::within_limit(2, 3, 3, 3)]
#[case::clamped(1, 50, 5, 0)]
#[case::exact(3, 5, 5, 10)]
#[tokio::test]
async fn post_pages_clamp_to_five(
    #[case] page: u32,
    #[case] limit: u32,
    #[case] effective: u32,
    #[case] offset: u64,
) {
    let mut mocks = MockStore::default();
    mocks
        .posts
        .expect_count_listed()
        .withf(|filter| filter.title_term().is_none())
        .times(1)
        .return_once(|_| Ok(12));
    mocks
        .posts
        .expect_find_listed()
        .withf(move |_, window| {
            window.is_some_and(|w| w.limit() == effective && w.offset() == offset)
        })
        .times(1)
        .return_once(|_, _| Ok(vec![post(None)]));

    let listed = engine(mocks)
        .list_posts(request(page, limit))
        .await
        .expect("page computed");
    assert_eq!(listed.total, 12);
    assert_eq!(listed.page, page);
    assert_eq!(listed.limit, effective);
    assert_eq!(listed.data.len(), 1);
}

#[tokio::test]
async fn comment_pages_clamp_to_fifteen() {
    let post_id = PostId::random();
    let mut mocks = MockStore::default();
    mocks.comments.expect_count().times(1).return_once(|| Ok(40));
    mocks
        .comments
        .expect_find_page()
        .withf(|window| window.limit() == COMMENT_PAGE_LIMIT && window.offset() == 15)
        .times(1)
        .return_once(move |_| Ok(vec![comment(post_id)]));

    let listed = engine(mocks)
        .list_comments(request(2, 100))
        .await
        .expect("page computed");
    assert_eq!(listed.limit, 15);
    assert_eq!(listed.total, 40);
}

#[tokio::test]
async fn search_is_unpaged_and_counts_matches() {
    let mut mocks = MockStore::default();
    mocks
        .posts
        .expect_find_listed()
        .withf(|filter, window| filter.title_term() == Some("rust") && window.is_none())
        .times(1)
        .return_once(|_, _| Ok(vec![post(None), post(None)]));
    mocks.posts.expect_count_listed().never();

    let results = engine(mocks)
        .search_posts(&PostFilter::title_contains("  rust "))
        .await
        .expect("search succeeds");
    assert_eq!(results.total, 2);
    assert_eq!(results.data.len(), 2);
}

#[test]
fn join_resolves_linked_categories() {
    let news = category(None);
    let linked = post(Some(news.id));
    let joined = join_categories(vec![linked], std::slice::from_ref(&news));

    assert_eq!(joined[0].category.id, Some(news.id));
    assert_eq!(joined[0].category.name.as_deref(), Some("News"));
}

#[rstest]
#[case::unlinked(None)]
#[case::dangling(Some(CategoryId::random()))]
fn join_falls_back_to_an_empty_summary(#[case] link: Option<CategoryId>) {
    let joined = join_categories(vec![post(link)], &[category(None)]);
    assert_eq!(joined[0].category, CategorySummary::empty());
}

#[tokio::test]
async fn joined_listing_keeps_page_metadata() {
    let news = category(None);
    let news_id = news.id;
    let mut mocks = MockStore::default();
    mocks.posts.expect_count_listed().times(1).return_once(|_| Ok(1));
    mocks
        .posts
        .expect_find_listed()
        .times(1)
        .return_once(move |_, _| Ok(vec![post(Some(news_id))]));
    mocks
        .categories
        .expect_find_all()
        .times(1)
        .return_once(move || Ok(vec![news]));

    let listed = engine(mocks)
        .list_posts_with_categories(request(1, 10))
        .await
        .expect("joined page");
    assert_eq!(listed.limit, POST_PAGE_LIMIT);
    assert_eq!(listed.total, 1);
    assert_eq!(listed.data[0].category.id, Some(news_id));
}

#[tokio::test]
async fn joined_listing_surfaces_category_failures() {
    let mut mocks = MockStore::default();
    mocks.posts.expect_count_listed().times(1).return_once(|_| Ok(0));
    mocks
        .posts
        .expect_find_listed()
        .times(1)
        .return_once(|_, _| Ok(Vec::new()));
    mocks
        .categories
        .expect_find_all()
        .times(1)
        .return_once(|| Err(CategoryRepositoryError::connection("down")));

    let err = engine(mocks)
        .list_posts_with_categories(request(1, 5))
        .await
        .expect_err("category lookup fails");
    assert_eq!(err.code(), ErrorCode::InternalError);
}
