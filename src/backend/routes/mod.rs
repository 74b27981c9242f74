//! Routes Module
//!
//! This module contains the HTTP route configuration:
//!
//! - **`router`** - top-level router assembly and middleware layers
//! - **`api_routes`** - the `/api` endpoints

/// Top-level router assembly
pub mod router;

/// API route configuration
pub mod api_routes;

pub use router::create_router;
