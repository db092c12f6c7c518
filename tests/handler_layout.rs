mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use serde_json::json;
use storefront::api::handlers::layout_handler;
use storefront::domain::entities::NavVariant;

fn make_server(variant: NavVariant) -> TestServer {
    let app = Router::new()
        .route("/api/layout", get(layout_handler))
        .with_state(common::create_test_state(variant));
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_layout_regions_in_order() {
    let server = make_server(NavVariant::Simple);

    let response = server
        .get("/api/layout")
        .add_query_param("content", "<p>Welcome</p>")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let kinds: Vec<&str> = json["regions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["kind"].as_str().unwrap())
        .collect();

    assert_eq!(kinds, ["navigation", "content", "footer"]);
    assert_eq!(json["regions"][1]["html"], "<p>Welcome</p>");
    assert_eq!(json["regions"][2]["text"], "© Store Front 2024");
    assert_eq!(json["regions"][2]["year"], 2024);
}

#[tokio::test]
async fn test_layout_links_exact() {
    let server = make_server(NavVariant::Simple);

    let json = server.get("/api/layout").await.json::<serde_json::Value>();

    assert_eq!(
        json["regions"][0]["links"],
        json!([
            { "label": "Home", "target": "#home" },
            { "label": "Products", "target": "#products" }
        ])
    );
    assert_eq!(json["regions"][0]["brand"], "Store Front");
}

#[tokio::test]
async fn test_layout_without_content_has_empty_slot() {
    let server = make_server(NavVariant::Simple);

    let json = server.get("/api/layout").await.json::<serde_json::Value>();

    assert_eq!(json["regions"][1]["kind"], "content");
    assert_eq!(json["regions"][1]["html"], "");
}

#[tokio::test]
async fn test_layout_responsive_keeps_order_and_stylesheet() {
    let server = make_server(NavVariant::Responsive);

    let json = server.get("/api/layout").await.json::<serde_json::Value>();

    assert_eq!(json["nav_variant"], "responsive");
    assert_eq!(json["regions"][0]["kind"], "navigation");
    assert_eq!(json["regions"][2]["kind"], "footer");
    assert_eq!(
        json["stylesheets"],
        json!(["/static/responsive-navbar.css", "/static/footer.css"])
    );
}
