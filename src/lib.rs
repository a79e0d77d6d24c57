//! # Coursebook API
//!
//! A read-only directory service for users, instructors and courses, built
//! with Axum. Records are loaded from JSON files at startup and served from
//! memory.
//!
//! ## Overview
//!
//! - **Filtering**: list endpoints accept repeated query parameters; a record
//!   is returned only if it carries every requested value (case-insensitive)
//! - **Lookup**: single records by integer id, 404 when absent
//! - **Authentication**: `GET /auth/test` requires a bearer token signed with
//!   the shared HMAC secret and echoes its `name` claim
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── middleware/       # Handler chain, request context, auth gate, log interceptors
//! ├── modules/          # Feature modules
//! │   ├── users/
//! │   ├── instructors/
//! │   ├── courses/
//! │   └── auth/
//! ├── logging.rs        # tracing subscriber setup
//! ├── metrics.rs        # Prometheus recorder and metrics interceptor
//! ├── router.rs         # Route table, global interceptors, CORS
//! └── state.rs          # Shared application state
//! ```
//!
//! Each feature module follows the same structure:
//!
//! - `controller.rs`: handlers taking a `RequestContext` (or `AuthContext`)
//! - `service.rs`: scans over the in-memory directory
//! - `router.rs`: `RouteTable` for the module
//!
//! ## Endpoints
//!
//! | Method | Path | Query |
//! |--------|------|-------|
//! | GET | `/api/v1/users` | `interest` (repeatable) |
//! | GET | `/api/v1/users/{id}` | |
//! | GET | `/api/v1/instructors` | `expertise` (repeatable) |
//! | GET | `/api/v1/instructors/{id}` | |
//! | GET | `/api/v1/courses` | `topic`, `attendee` (repeatable), `instructor` |
//! | GET | `/api/v1/courses/{id}` | |
//! | GET | `/auth/test` | |
//!
//! ## Quick Start
//!
//! ```bash
//! DATA_DIR=./data
//! JWT_SECRET=your-shared-secret
//! PORT=7999
//! ```
//!
//! Mint a token for `/auth/test`:
//!
//! ```bash
//! cargo run --bin coursebook-cli -- issue-token --name alice
//! ```

pub mod logging;
pub mod metrics;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;

// Re-export workspace crates for convenience
pub use coursebook_auth;
pub use coursebook_config;
pub use coursebook_core;
pub use coursebook_data;
pub use coursebook_models;
