use crate::DbError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgPool;
use sqlx::FromRow;

/// A row from the `books` table, in the store's snake_case naming.
///
/// Serialization keeps the snake_case names; the web layer owns the
/// translation to the API's camelCase convention.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct BookRow {
    pub id: i32,
    pub title: String,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The five client-mutable columns, as written by create and update.
///
/// Every field is optional: an absent field writes NULL, matching the
/// pass-through contract (the store, not this layer, rejects bad writes).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookFields {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub cover_url: Option<String>,
}

/// The data-store collaborator for book records.
///
/// Handlers depend on this trait (behind `Arc<dyn BookStore>`) rather than on
/// the concrete Postgres repository, so tests can inject a double.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// All books, ordered by title ascending.
    async fn list_books(&self) -> Result<Vec<BookRow>, DbError>;

    /// A single book by id, or `None` when no row matches.
    async fn get_book(&self, id: i32) -> Result<Option<BookRow>, DbError>;

    /// Inserts a new book and returns the full stored row (id and timestamps
    /// assigned by the store).
    async fn insert_book(&self, fields: &BookFields) -> Result<BookRow, DbError>;

    /// Overwrites the five mutable columns of one row and returns the updated
    /// row, or `None` when no row matches the id.
    async fn update_book(&self, id: i32, fields: &BookFields) -> Result<Option<BookRow>, DbError>;

    /// Removes a row. Returns `true` when a row existed and was deleted.
    async fn delete_book(&self, id: i32) -> Result<bool, DbError>;
}

/// The `BookRepository` is the PostgreSQL implementation of [`BookStore`].
/// It encapsulates all SQL queries against the `books` table.
#[derive(Debug, Clone)]
pub struct BookRepository {
    pool: PgPool,
}

const BOOK_COLUMNS: &str = "id, title, author, genre, description, cover_url, created_at, updated_at";

impl BookRepository {
    /// Creates a new `BookRepository` with a shared database connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStore for BookRepository {
    async fn list_books(&self) -> Result<Vec<BookRow>, DbError> {
        let rows = sqlx::query_as::<_, BookRow>(&format!(
            "SELECT {BOOK_COLUMNS} FROM books ORDER BY title ASC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get_book(&self, id: i32) -> Result<Option<BookRow>, DbError> {
        let row = sqlx::query_as::<_, BookRow>(&format!(
            "SELECT {BOOK_COLUMNS} FROM books WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert_book(&self, fields: &BookFields) -> Result<BookRow, DbError> {
        let row = sqlx::query_as::<_, BookRow>(&format!(
            r#"
            INSERT INTO books (title, author, genre, description, cover_url)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {BOOK_COLUMNS}
            "#
        ))
        .bind(&fields.title)
        .bind(&fields.author)
        .bind(&fields.genre)
        .bind(&fields.description)
        .bind(&fields.cover_url)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(book_id = row.id, "inserted book");
        Ok(row)
    }

    async fn update_book(&self, id: i32, fields: &BookFields) -> Result<Option<BookRow>, DbError> {
        // updated_at is maintained by a trigger in the migration, not here.
        let row = sqlx::query_as::<_, BookRow>(&format!(
            r#"
            UPDATE books
            SET title = $1, author = $2, genre = $3, description = $4, cover_url = $5
            WHERE id = $6
            RETURNING {BOOK_COLUMNS}
            "#
        ))
        .bind(&fields.title)
        .bind(&fields.author)
        .bind(&fields.genre)
        .bind(&fields.description)
        .bind(&fields.cover_url)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete_book(&self, id: i32) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
