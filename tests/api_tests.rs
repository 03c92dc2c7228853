use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use foodgalaxy::config::AppConfig;
use foodgalaxy::menu::{Dish, MenuStore};
use foodgalaxy::server::{build_router, AppState};
use tempfile::tempdir;
use tower::ServiceExt; // for oneshot

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

fn test_app(dir: &tempfile::TempDir) -> Router {
    let mut cfg = AppConfig::default();
    cfg.data_path = dir.path().join("menu.json");
    let store = MenuStore::new(cfg.data_path.clone());
    build_router(AppState::new(store, cfg))
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap()
        .to_vec()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_form(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, FORM_CONTENT_TYPE);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Logs in with the default credentials and returns the session cookie
/// pair ("admin_session=...").
async fn log_in(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(post_form("/admin", "username=shirlyn&password=2806", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/admin/dashboard");

    let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    set_cookie.split(';').next().unwrap().to_string()
}

#[tokio::test]
async fn health_returns_ok() {
    let dir = tempdir().unwrap();
    let app = test_app(&dir);

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body, serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn api_menu_starts_empty() {
    let dir = tempdir().unwrap();
    let app = test_app(&dir);

    let response = app.oneshot(get("/api/menu")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let menu: Vec<Dish> = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert!(menu.is_empty());
}

#[tokio::test]
async fn customer_page_renders() {
    let dir = tempdir().unwrap();
    let app = test_app(&dir);

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(body.contains("FoodGalaxy"));
}

#[tokio::test]
async fn anonymous_admin_routes_redirect_to_login() {
    let dir = tempdir().unwrap();
    let app = test_app(&dir);

    for request in [
        get("/admin/dashboard"),
        get("/admin/logout"),
        post_form("/admin/add-dish", "name=Burger&price=5&category=Mains", None),
        post_form("/admin/dish/1/edit", "name=Sneaky", None),
        post_form("/admin/dish/1/delete", "", None),
    ] {
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/admin");
    }

    // None of the mutations above went through.
    let response = app.oneshot(get("/api/menu")).await.unwrap();
    let menu: Vec<Dish> = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert!(menu.is_empty());
}

#[tokio::test]
async fn bad_credentials_rerender_login_without_cookie() {
    let dir = tempdir().unwrap();
    let app = test_app(&dir);

    let response = app
        .clone()
        .oneshot(post_form("/admin", "username=shirlyn&password=wrong", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::SET_COOKIE).is_none());

    let body = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(body.contains("Invalid username or password"));

    // Still anonymous afterward.
    let response = app.oneshot(get("/admin/dashboard")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/admin");
}

#[tokio::test]
async fn login_form_redirects_when_already_authenticated() {
    let dir = tempdir().unwrap();
    let app = test_app(&dir);
    let cookie = log_in(&app).await;

    let mut request = get("/admin");
    request
        .headers_mut()
        .insert(header::COOKIE, cookie.parse().unwrap());
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/admin/dashboard");
}

#[tokio::test]
async fn forged_session_cookie_is_rejected() {
    let dir = tempdir().unwrap();
    let app = test_app(&dir);

    let mut request = get("/admin/dashboard");
    request
        .headers_mut()
        .insert(header::COOKIE, "admin_session=true".parse().unwrap());
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/admin");
}

#[tokio::test]
async fn admin_crud_round_trip() {
    let dir = tempdir().unwrap();
    let app = test_app(&dir);
    let cookie = log_in(&app).await;

    // Dashboard is reachable with the session cookie.
    let mut request = get("/admin/dashboard");
    request
        .headers_mut()
        .insert(header::COOKIE, cookie.parse().unwrap());
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Add a dish.
    let response = app
        .clone()
        .oneshot(post_form(
            "/admin/add-dish",
            "name=Burger&price=5&category=Mains",
            Some(&cookie),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/admin/dashboard");

    let response = app.clone().oneshot(get("/api/menu")).await.unwrap();
    let menu: Vec<Dish> = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(menu.len(), 1);
    assert_eq!(menu[0].id, 1);
    assert_eq!(menu[0].name, "Burger");
    assert_eq!(menu[0].price, 5);

    // Edit just the price.
    let response = app
        .clone()
        .oneshot(post_form("/admin/dish/1/edit", "price=7", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response = app.clone().oneshot(get("/api/menu")).await.unwrap();
    let menu: Vec<Dish> = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(menu[0].price, 7);
    assert_eq!(menu[0].name, "Burger");
    assert_eq!(menu[0].category, "Mains");

    // Delete it.
    let response = app
        .clone()
        .oneshot(post_form("/admin/dish/1/delete", "", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response = app.oneshot(get("/api/menu")).await.unwrap();
    let menu: Vec<Dish> = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert!(menu.is_empty());
}

#[tokio::test]
async fn logout_clears_the_session() {
    let dir = tempdir().unwrap();
    let app = test_app(&dir);
    let cookie = log_in(&app).await;

    let mut request = get("/admin/logout");
    request
        .headers_mut()
        .insert(header::COOKIE, cookie.parse().unwrap());
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/admin");

    // The removal cookie empties the session value; a client replaying the
    // old cookie still works until it honors the removal, so assert on the
    // server's Set-Cookie response instead.
    let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(set_cookie.starts_with("admin_session="));
    assert!(set_cookie.to_ascii_lowercase().contains("max-age=0") || set_cookie.contains("1970"));
}
