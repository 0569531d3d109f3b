//! Repository layer for book storage

pub mod books;

use std::sync::Arc;

use async_trait::async_trait;

use crate::{config::BooksConfig, error::AppResult, models::{book::seed_books, Book}};

pub use books::InMemoryBookRepository;

/// Operations available on the book collection
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// All books in collection order
    async fn list(&self) -> AppResult<Vec<Book>>;

    async fn count(&self) -> AppResult<usize>;

    async fn find_by_id(&self, id: i64) -> AppResult<Book>;

    /// Append a book, overwriting its id with a freshly assigned one
    async fn insert(&self, book: Book) -> AppResult<Book>;

    /// Overwrite the book found under `id` with `book`, id included
    async fn replace(&self, id: i64, book: Book) -> AppResult<Book>;

    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// Main repository struct holding the storage backends
#[derive(Clone)]
pub struct Repository {
    pub books: Arc<dyn BookRepository>,
}

impl Repository {
    pub fn new(books: Arc<dyn BookRepository>) -> Self {
        Self { books }
    }

    /// In-memory storage configured from `[books]`
    pub fn in_memory(config: &BooksConfig) -> Self {
        let initial = if config.seed { seed_books() } else { Vec::new() };
        Self::new(Arc::new(InMemoryBookRepository::new(initial, config.id_strategy)))
    }
}
