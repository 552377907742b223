//! # Bookstore Database Crate
//!
//! This crate is the application's only gateway to the PostgreSQL database
//! holding the `books` table.
//!
//! ## Architectural Principles
//!
//! - **Adapter:** Encapsulates all SQL and connection handling behind a small,
//!   application-specific API. Nothing outside this crate writes SQL.
//! - **Injectable:** The data-access surface is the [`BookStore`] trait, so the
//!   web layer receives its store as a constructor dependency and tests can
//!   substitute an in-memory double.
//! - **Asynchronous & Pooled:** All operations are asynchronous and go through
//!   a shared `PgPool`.
//!
//! ## Public API
//!
//! - `connect`: The async function to establish the database connection pool.
//! - `run_migrations`: Applies the bundled migrations, ensuring the `books`
//!   schema is up-to-date at startup.
//! - `BookStore` / `BookRepository`: the data-access trait and its Postgres
//!   implementation.
//! - `DbError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod repository;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, run_migrations};
pub use error::DbError;
pub use repository::{BookFields, BookRepository, BookRow, BookStore};
