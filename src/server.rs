// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use axum::{
    extract::{FromRef, Path, Request, State},
    middleware::{from_fn_with_state, Next},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Json, Router,
};
use axum_extra::extract::cookie::{Key, SignedCookieJar};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;

use crate::api::{AddDishForm, EditDishForm, LoginForm};
use crate::config::AppConfig;
use crate::errors::AppError;
use crate::menu::{AddOutcome, DeleteOutcome, Dish, EditOutcome, MenuStore};
use crate::{pages, session};

pub type SharedStore = Arc<Mutex<MenuStore>>;

/// Shared application state. The store mutex is the critical section
/// around every load-mutate-save cycle; handlers hold it for the full
/// cycle so concurrent mutations cannot lose updates within this process.
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub config: Arc<AppConfig>,
    key: Key,
}

impl AppState {
    pub fn new(store: MenuStore, config: AppConfig) -> Self {
        let key = Key::derive_from(config.secret_key.as_bytes());
        Self {
            store: Arc::new(Mutex::new(store)),
            config: Arc::new(config),
            key,
        }
    }
}

// SignedCookieJar extraction pulls its signing key out of the state.
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Key {
        state.key.clone()
    }
}

pub fn build_router(state: AppState) -> Router {
    let admin_routes = Router::new()
        .route("/admin/dashboard", get(admin_dashboard))
        .route("/admin/add-dish", post(admin_add_dish))
        .route("/admin/dish/:id/edit", post(admin_edit_dish))
        .route("/admin/dish/:id/delete", post(admin_delete_dish))
        .route("/admin/logout", get(admin_logout))
        .route_layer(from_fn_with_state(state.clone(), require_admin));

    Router::new()
        .route("/", get(home))
        .route("/api/menu", get(api_menu))
        .route("/health", get(health))
        .route("/metrics", get(metrics_handler))
        .route("/admin", get(admin_login_form).post(admin_login))
        .merge(admin_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Gate for every admin-prefixed route past the login form. Anonymous
/// clients are redirected to the login page without the requested action
/// being performed; there is deliberately no 401/403 distinction.
async fn require_admin(jar: SignedCookieJar, request: Request, next: Next) -> Response {
    if session::is_admin(&jar) {
        next.run(request).await
    } else {
        Redirect::to("/admin").into_response()
    }
}

async fn home() -> Html<&'static str> {
    Html(pages::customer_page())
}

async fn api_menu(State(state): State<AppState>) -> Json<Vec<Dish>> {
    let store = state.store.lock().await;
    Json(store.list())
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn metrics_handler() -> String {
    crate::telemetry::get_metrics()
}

async fn admin_login_form(jar: SignedCookieJar) -> Response {
    if session::is_admin(&jar) {
        return Redirect::to("/admin/dashboard").into_response();
    }
    Html(pages::login_page(None)).into_response()
}

async fn admin_login(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    if form.username == state.config.admin_username && form.password == state.config.admin_password {
        tracing::info!("admin login succeeded");
        return (session::log_in(jar), Redirect::to("/admin/dashboard")).into_response();
    }
    tracing::warn!("admin login failed for username {:?}", form.username);
    metrics::increment_counter!("foodgalaxy_login_failures_total");
    Html(pages::login_page(Some("Invalid username or password"))).into_response()
}

async fn admin_logout(jar: SignedCookieJar) -> impl IntoResponse {
    (session::log_out(jar), Redirect::to("/admin"))
}

async fn admin_dashboard(State(state): State<AppState>) -> Html<String> {
    let store = state.store.lock().await;
    let menu = store.list_sorted();
    Html(pages::dashboard_page(&menu))
}

async fn admin_add_dish(
    State(state): State<AppState>,
    Form(form): Form<AddDishForm>,
) -> Result<Redirect, AppError> {
    let store = state.store.lock().await;
    match store.add_dish(form.into())? {
        AddOutcome::Added(dish) => {
            tracing::info!("added dish {} ({:?})", dish.id, dish.name);
            metrics::increment_counter!("foodgalaxy_dishes_added_total");
        }
        AddOutcome::Rejected(reason) => {
            // Rejections stay invisible to the browser; logs and the
            // rejected counter are the only trace.
            tracing::debug!("add-dish submission rejected: {:?}", reason);
            metrics::increment_counter!("foodgalaxy_dishes_rejected_total");
        }
    }
    Ok(Redirect::to("/admin/dashboard"))
}

async fn admin_edit_dish(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Form(form): Form<EditDishForm>,
) -> Result<Redirect, AppError> {
    let store = state.store.lock().await;
    match store.edit_dish(id, form.into())? {
        EditOutcome::Updated(dish) => {
            tracing::info!("edited dish {}", dish.id);
            metrics::increment_counter!("foodgalaxy_dishes_edited_total");
        }
        EditOutcome::NotFound => {
            tracing::debug!("edit requested for unknown dish {}", id);
        }
    }
    Ok(Redirect::to("/admin/dashboard"))
}

async fn admin_delete_dish(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Redirect, AppError> {
    let store = state.store.lock().await;
    match store.delete_dish(id)? {
        DeleteOutcome::Removed => {
            tracing::info!("deleted dish {}", id);
            metrics::increment_counter!("foodgalaxy_dishes_deleted_total");
        }
        DeleteOutcome::NotFound => {
            tracing::debug!("delete requested for unknown dish {}", id);
        }
    }
    Ok(Redirect::to("/admin/dashboard"))
}
