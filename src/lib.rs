//! Livros book catalog server
//!
//! A small REST JSON API keeping a collection of books in memory, with
//! list, lookup, create, replace and delete operations.

use std::sync::Arc;

use axum::Router;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use repository::Repository;
use services::Services;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<Services>,
}

impl AppState {
    /// Build the state with an in-memory repository configured from `config`
    pub fn new(config: AppConfig) -> Self {
        let repository = Repository::in_memory(&config.books);
        Self::with_repository(config, repository)
    }

    pub fn with_repository(config: AppConfig, repository: Repository) -> Self {
        Self {
            config: Arc::new(config),
            services: Arc::new(Services::new(repository)),
        }
    }
}

/// Build the full application router
pub fn create_app(state: AppState) -> Router {
    api::create_router(state)
}
