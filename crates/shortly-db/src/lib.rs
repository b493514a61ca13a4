//! # shortly-db
//!
//! Database layer implementing the repository trait with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides the PostgreSQL implementation for the `UrlRepository`
//! trait defined in `shortly-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - The repository implementation
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shortly_db::pool::{create_pool, DatabaseConfig};
//! use shortly_db::PgUrlRepository;
//! use shortly_core::UrlRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig {
//!         url: std::env::var("DATABASE_URL")?,
//!         max_connections: 10,
//!         min_connections: 1,
//!     };
//!     let pool = create_pool(&config).await?;
//!     let repo = PgUrlRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, DatabaseConfig, PgPool};
pub use repositories::PgUrlRepository;
