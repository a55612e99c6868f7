//! HTTP API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations. It
//! talks to one external service, the Wise Old Man API, for competition results.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business logic and transaction boundaries
//! - **Data Layer** (`data/`) - Repositories over the `entity` crate
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Error types, store fault classification and HTTP mapping
//! - **Middleware** (`middleware/`) - Bearer token check and rate limit response shaping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool, WOM client, token)
//! - **Startup** (`startup`) - Tracing, database and HTTP client initialization
//! - **Router** (`router`) - Route table and middleware stack
//! - **Wise Old Man** (`wom`) - Competition API client
//!
//! # Request Flow
//!
//! 1. **Router** receives the request; trace, CORS, rate limit and timeout layers apply
//! 2. **Middleware** checks the bearer token on `/guilds` routes
//! 3. **Controller** extracts input, builds params, calls a service
//! 4. **Service** validates params, opens a transaction when more than one statement
//!    must succeed together, and calls repositories
//! 5. **Data** runs queries and returns entity models or classified store faults
//! 6. **Controller** converts the domain model to a DTO and responds

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
pub mod wom;
