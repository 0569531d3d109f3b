//! Books service

use crate::{error::AppResult, models::Book, repository::Repository};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    pub async fn count(&self) -> AppResult<usize> {
        self.repository.books.count().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        self.repository.books.find_by_id(id).await
    }

    pub async fn create(&self, book: Book) -> AppResult<Book> {
        let book = self.repository.books.insert(book).await?;
        tracing::info!(id = book.id, title = %book.title, "Book created");
        Ok(book)
    }

    pub async fn update(&self, id: i64, book: Book) -> AppResult<Book> {
        let book = self.repository.books.replace(id, book).await?;
        if book.id != id {
            tracing::warn!(old_id = id, new_id = book.id, "Book replaced under a different id");
        } else {
            tracing::info!(id, "Book updated");
        }
        Ok(book)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.books.delete(id).await?;
        tracing::info!(id, "Book deleted");
        Ok(())
    }
}
