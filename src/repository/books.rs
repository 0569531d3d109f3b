//! In-memory book storage

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::BookRepository;
use crate::{
    config::IdStrategy,
    error::{AppError, AppResult},
    models::Book,
};

struct Shelf {
    books: Vec<Book>,
    /// `None` once the monotonic counter has gone past `i64::MAX`
    next_id: Option<i64>,
    strategy: IdStrategy,
}

impl Shelf {
    fn position(&self, id: i64) -> Option<usize> {
        self.books.iter().position(|book| book.id == id)
    }

    fn assign_id(&mut self) -> AppResult<i64> {
        let exhausted = || AppError::Internal("Book id space exhausted".to_string());
        match self.strategy {
            IdStrategy::Count => i64::try_from(self.books.len())
                .ok()
                .and_then(|len| len.checked_add(1))
                .ok_or_else(exhausted),
            IdStrategy::Monotonic => {
                let id = self.next_id.ok_or_else(exhausted)?;
                self.next_id = id.checked_add(1);
                Ok(id)
            }
        }
    }

    fn reserve_id(&mut self, id: i64) {
        if self.next_id.is_some_and(|next| id >= next) {
            self.next_id = id.checked_add(1);
        }
    }
}

/// Ordered collection of books guarded by a single lock
pub struct InMemoryBookRepository {
    shelf: RwLock<Shelf>,
}

impl InMemoryBookRepository {
    pub fn new(books: Vec<Book>, strategy: IdStrategy) -> Self {
        let next_id = books.iter().map(|b| b.id).max().unwrap_or(0).checked_add(1);
        Self {
            shelf: RwLock::new(Shelf {
                books,
                next_id,
                strategy,
            }),
        }
    }
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Book {} not found", id))
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn list(&self) -> AppResult<Vec<Book>> {
        Ok(self.shelf.read().await.books.clone())
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.shelf.read().await.books.len())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Book> {
        self.shelf
            .read()
            .await
            .books
            .iter()
            .find(|book| book.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn insert(&self, mut book: Book) -> AppResult<Book> {
        let mut shelf = self.shelf.write().await;
        book.id = shelf.assign_id()?;
        shelf.books.push(book.clone());
        Ok(book)
    }

    async fn replace(&self, id: i64, book: Book) -> AppResult<Book> {
        let mut shelf = self.shelf.write().await;
        let index = shelf.position(id).ok_or_else(|| not_found(id))?;
        // The stored id is whatever the caller put in the replacement.
        shelf.reserve_id(book.id);
        shelf.books[index] = book.clone();
        Ok(book)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let mut shelf = self.shelf.write().await;
        let index = shelf.position(id).ok_or_else(|| not_found(id))?;
        shelf.books.remove(index);
        Ok(())
    }
}
