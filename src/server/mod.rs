//! Server-side backend and business logic.
//!
//! The backend uses Axum as the web framework, SeaORM over SQLite for persistence and
//! tower-sessions for the admin session.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business rules between controllers and the data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrappers and the admin guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB pool, admin credentials)
//! - **Startup** (`startup`) - Database, migrations, and session layer initialization
//! - **Router** (`router`) - Route table and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** dispatches the request to a controller
//! 2. **Middleware** loads the session and, for admin routes, rejects anonymous visitors
//! 3. **Controller** converts form input to params and calls a service
//! 4. **Service** applies business rules and calls the data layer
//! 5. **Data** queries the database and returns domain models
//! 6. **Controller** converts domain models to DTOs or answers with a redirect

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
