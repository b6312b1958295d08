//! Points Domain
//!
//! Collection points: physical locations that accept categories of
//! recyclable waste. Covers registration (a point plus its item
//! associations, atomically) and discovery (filtered search by accepted
//! items, city, and state).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Filter parsing, projection, placeholder image
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use core_config::media::MediaConfig;
//! use domain_points::{
//!     handlers,
//!     repository::InMemoryPointRepository,
//!     service::PointService,
//! };
//!
//! let repository = InMemoryPointRepository::new();
//! let service = PointService::new(repository, MediaConfig::default());
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{PointError, PointResult};
pub use models::{CreatePoint, Point, PointDetail, PointFilter, SearchCriteria};
pub use postgres::PgPointRepository;
pub use repository::{InMemoryPointRepository, PointRepository};
pub use service::PointService;
