mod common;

use serde_json::Value;
use sqlx::PgPool;

use common::{create_bookmark, get_access_token, spawn_app};

/// Creates bookmarks in order, spaced out so `created_at` is strictly
/// increasing.
async fn add_bookmarks(
    client: &reqwest::Client,
    address: &str,
    token: &str,
    entries: &[(&str, &str)],
) {
    for (title, url) in entries {
        create_bookmark(client, address, token, title, url).await;
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }
}

async fn list_page(
    client: &reqwest::Client,
    address: &str,
    token: &str,
    query: &str,
) -> Value {
    let response = client
        .get(format!("{address}/api/bookmarks{query}"))
        .header("Authorization", format!("Bearer {token}"))
        .send()
        .await
        .expect("Failed to list bookmarks");
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    response.json().await.expect("Failed to parse page")
}

fn titles(page: &Value) -> Vec<&str> {
    page["items"]
        .as_array()
        .expect("items should be an array")
        .iter()
        .map(|item| item["title"].as_str().expect("title should be a string"))
        .collect()
}

#[sqlx::test]
async fn test_list_orders_newest_first(pool: PgPool) {
    let address = spawn_app(pool).await;
    let client = reqwest::Client::new();
    let token = get_access_token(&client, &address, "lister@example.com", "a strong password").await;

    add_bookmarks(
        &client,
        &address,
        &token,
        &[
            ("First", "https://example.com/1"),
            ("Second", "https://example.com/2"),
            ("Third", "https://example.com/3"),
        ],
    )
    .await;

    let page = list_page(&client, &address, &token, "").await;
    assert_eq!(titles(&page), vec!["Third", "Second"]);

    let page = list_page(&client, &address, &token, "?page=2").await;
    assert_eq!(titles(&page), vec!["First"]);
}

#[sqlx::test]
async fn test_list_pagination_metadata(pool: PgPool) {
    let address = spawn_app(pool).await;
    let client = reqwest::Client::new();
    let token = get_access_token(&client, &address, "pager@example.com", "a strong password").await;

    add_bookmarks(
        &client,
        &address,
        &token,
        &[
            ("One", "https://example.com/1"),
            ("Two", "https://example.com/2"),
            ("Three", "https://example.com/3"),
            ("Four", "https://example.com/4"),
            ("Five", "https://example.com/5"),
        ],
    )
    .await;

    let page = list_page(&client, &address, &token, "?page=1").await;
    assert_eq!(page["items"].as_array().unwrap().len(), 2);
    assert_eq!(page["pagination"]["page"], 1);
    assert_eq!(page["pagination"]["total"], 5);
    assert_eq!(page["pagination"]["total_pages"], 3);
    assert_eq!(page["pagination"]["has_next"], true);
    assert_eq!(page["pagination"]["has_previous"], false);

    let page = list_page(&client, &address, &token, "?page=2").await;
    assert_eq!(page["items"].as_array().unwrap().len(), 2);
    assert_eq!(page["pagination"]["has_next"], true);
    assert_eq!(page["pagination"]["has_previous"], true);

    let page = list_page(&client, &address, &token, "?page=3").await;
    assert_eq!(page["items"].as_array().unwrap().len(), 1);
    assert_eq!(page["pagination"]["has_next"], false);
    assert_eq!(page["pagination"]["has_previous"], true);
}

#[sqlx::test]
async fn test_list_out_of_range_page_clamps(pool: PgPool) {
    let address = spawn_app(pool).await;
    let client = reqwest::Client::new();
    let token = get_access_token(&client, &address, "clamp@example.com", "a strong password").await;

    add_bookmarks(
        &client,
        &address,
        &token,
        &[
            ("One", "https://example.com/1"),
            ("Two", "https://example.com/2"),
            ("Three", "https://example.com/3"),
            ("Four", "https://example.com/4"),
            ("Five", "https://example.com/5"),
        ],
    )
    .await;

    // Past the end: lands on the last page instead of an empty one
    let page = list_page(&client, &address, &token, "?page=10").await;
    assert_eq!(page["pagination"]["page"], 3);
    assert_eq!(page["items"].as_array().unwrap().len(), 1);
    assert_eq!(titles(&page), vec!["One"]);

    // Below the start: lands on the first page
    let page = list_page(&client, &address, &token, "?page=0").await;
    assert_eq!(page["pagination"]["page"], 1);
    assert_eq!(page["items"].as_array().unwrap().len(), 2);
}

#[sqlx::test]
async fn test_list_empty_collection(pool: PgPool) {
    let address = spawn_app(pool).await;
    let client = reqwest::Client::new();
    let token = get_access_token(&client, &address, "empty@example.com", "a strong password").await;

    let page = list_page(&client, &address, &token, "").await;
    assert_eq!(page["items"].as_array().unwrap().len(), 0);
    assert_eq!(page["pagination"]["page"], 1);
    assert_eq!(page["pagination"]["total"], 0);
    assert_eq!(page["pagination"]["total_pages"], 1);
    assert_eq!(page["pagination"]["has_next"], false);
    assert_eq!(page["pagination"]["has_previous"], false);
}

#[sqlx::test]
async fn test_search_matches_title_or_url(pool: PgPool) {
    let address = spawn_app(pool).await;
    let client = reqwest::Client::new();
    let token = get_access_token(&client, &address, "finder@example.com", "a strong password").await;

    add_bookmarks(
        &client,
        &address,
        &token,
        &[
            ("Rust Book", "https://doc.rust-lang.org/book/"),
            ("Bread Recipes", "https://cooking.example.com/rustic-bread"),
            ("Morning News", "https://news.example.com/"),
        ],
    )
    .await;

    // "rust" appears in the first title and in the second url
    let page = list_page(&client, &address, &token, "?search=rust").await;
    assert_eq!(page["pagination"]["total"], 2);
    assert_eq!(titles(&page), vec!["Bread Recipes", "Rust Book"]);
}

#[sqlx::test]
async fn test_search_is_case_insensitive(pool: PgPool) {
    let address = spawn_app(pool).await;
    let client = reqwest::Client::new();
    let token = get_access_token(&client, &address, "shouty@example.com", "a strong password").await;

    add_bookmarks(
        &client,
        &address,
        &token,
        &[
            ("Rust Book", "https://doc.rust-lang.org/book/"),
            ("Morning News", "https://news.example.com/"),
        ],
    )
    .await;

    let page = list_page(&client, &address, &token, "?search=RUST").await;
    assert_eq!(page["pagination"]["total"], 1);
    assert_eq!(titles(&page), vec!["Rust Book"]);
}

#[sqlx::test]
async fn test_search_no_matches(pool: PgPool) {
    let address = spawn_app(pool).await;
    let client = reqwest::Client::new();
    let token = get_access_token(&client, &address, "seeker@example.com", "a strong password").await;

    add_bookmarks(
        &client,
        &address,
        &token,
        &[("Rust Book", "https://doc.rust-lang.org/book/")],
    )
    .await;

    let page = list_page(&client, &address, &token, "?search=zebra").await;
    assert_eq!(page["items"].as_array().unwrap().len(), 0);
    assert_eq!(page["pagination"]["total"], 0);
    assert_eq!(page["pagination"]["page"], 1);
}

#[sqlx::test]
async fn test_search_empty_term_returns_all(pool: PgPool) {
    let address = spawn_app(pool).await;
    let client = reqwest::Client::new();
    let token = get_access_token(&client, &address, "blank@example.com", "a strong password").await;

    add_bookmarks(
        &client,
        &address,
        &token,
        &[
            ("One", "https://example.com/1"),
            ("Two", "https://example.com/2"),
            ("Three", "https://example.com/3"),
        ],
    )
    .await;

    let page = list_page(&client, &address, &token, "?search=").await;
    assert_eq!(page["pagination"]["total"], 3);
}

#[sqlx::test]
async fn test_search_treats_wildcards_literally(pool: PgPool) {
    let address = spawn_app(pool).await;
    let client = reqwest::Client::new();
    let token = get_access_token(&client, &address, "wild@example.com", "a strong password").await;

    add_bookmarks(
        &client,
        &address,
        &token,
        &[
            ("Progress 100%", "https://example.com/progress"),
            ("Plain Text", "https://example.com/plain"),
        ],
    )
    .await;

    // "%" in the term must match a percent sign, not act as a wildcard
    let page = list_page(&client, &address, &token, "?search=100%25").await;
    assert_eq!(page["pagination"]["total"], 1);
    assert_eq!(titles(&page), vec!["Progress 100%"]);
}

#[sqlx::test]
async fn test_list_only_shows_own_bookmarks(pool: PgPool) {
    let address = spawn_app(pool).await;
    let client = reqwest::Client::new();

    let mine = get_access_token(&client, &address, "mine@example.com", "a strong password").await;
    let theirs =
        get_access_token(&client, &address, "theirs@example.com", "a strong password").await;

    create_bookmark(&client, &address, &mine, "Mine", "https://example.com/mine").await;
    create_bookmark(
        &client,
        &address,
        &theirs,
        "Theirs",
        "https://example.com/theirs",
    )
    .await;

    let page = list_page(&client, &address, &mine, "").await;
    assert_eq!(page["pagination"]["total"], 1);
    assert_eq!(titles(&page), vec!["Mine"]);

    // Searching cannot reach across accounts either
    let page = list_page(&client, &address, &mine, "?search=Theirs").await;
    assert_eq!(page["pagination"]["total"], 0);
}
