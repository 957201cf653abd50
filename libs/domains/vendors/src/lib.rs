//! Vendors Domain
//!
//! This module provides a complete domain implementation for managing vendors using MongoDB.
//! It mirrors the categories domain: handlers delegate to a service, which
//! delegates to a repository trait with a MongoDB implementation.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_vendors::{
//!     handlers,
//!     mongodb::MongoVendorRepository,
//!     service::VendorService,
//! };
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("mydb");
//!
//! let repository = MongoVendorRepository::new(&db);
//! let service = VendorService::new(repository);
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{VendorError, VendorResult};
pub use handlers::ApiDoc;
pub use models::{CreateVendor, CreateVendorBatch, PatchVendor, UpsertVendor, Vendor};
pub use mongodb::MongoVendorRepository;
pub use repository::VendorRepository;
pub use service::VendorService;
