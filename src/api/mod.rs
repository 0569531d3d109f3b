//! API handlers for the Livros REST endpoints

pub mod books;
pub mod health;
pub mod middleware;
pub mod openapi;

use axum::{
    extract::DefaultBodyLimit,
    http::{header::LOCATION, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{any, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

const HEALTH: &str = "/health";
const BOOK_LIST: &str = "/Livros";
const BOOKS: &str = "/livros";
const BOOK: &str = "/livros/:id";

/// Routes a trailing-slash path may be redirected to
const REDIRECT_TARGETS: [&str; 4] = [HEALTH, BOOK_LIST, BOOKS, BOOK];

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let catalog = Router::new()
        .route("/", any(books::welcome))
        .route(BOOK_LIST, get(books::list_books))
        .route(BOOKS, post(books::create_book))
        .route(
            BOOK,
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        .layer(axum::middleware::from_fn(middleware::json_content_type))
        .layer(DefaultBodyLimit::max(state.config.server.body_limit))
        .with_state(state.clone());

    Router::new()
        .route(HEALTH, get(health::health_check))
        .with_state(state)
        .merge(catalog)
        .merge(openapi::create_openapi_router())
        .fallback(redirect_trailing_slash)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Segment-wise match against a route template; `:name` takes any
/// non-empty segment.
fn matches_route(template: &str, path: &str) -> bool {
    let mut expected = template.split('/');
    let mut actual = path.split('/');
    loop {
        match (expected.next(), actual.next()) {
            (None, None) => return true,
            (Some(e), Some(a)) if e.starts_with(':') && !a.is_empty() => {}
            (Some(e), Some(a)) if e == a => {}
            _ => return false,
        }
    }
}

/// Unmatched paths ending in `/` are redirected to their trimmed form when
/// that form is a known route; anything else is a 404.
async fn redirect_trailing_slash(uri: Uri) -> Response {
    let path = uri.path();
    let trimmed = path.trim_end_matches('/');
    let routable = path.ends_with('/')
        && !trimmed.is_empty()
        && REDIRECT_TARGETS
            .iter()
            .any(|template| matches_route(template, trimmed));
    if !routable {
        return StatusCode::NOT_FOUND.into_response();
    }

    let mut target = trimmed.to_string();
    if let Some(query) = uri.query() {
        target.push('?');
        target.push_str(query);
    }

    (StatusCode::MOVED_PERMANENTLY, [(LOCATION, target)]).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_route() {
        assert!(matches_route(BOOK, "/livros/7"));
        assert!(matches_route(BOOK, "/livros/abc"));
        assert!(matches_route(BOOK_LIST, "/Livros"));
        assert!(!matches_route(BOOK, "/livros"));
        assert!(!matches_route(BOOK, "/livros/7/capa"));
        assert!(!matches_route(BOOK, "/livros/"));
        assert!(!matches_route(BOOK_LIST, "/livros"));
        assert!(!matches_route(HEALTH, "/foo"));
    }
}
