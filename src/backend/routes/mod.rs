//! Route Configuration Module
//!
//! Routes of the demo server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs         - Module exports and documentation
//! ├── router.rs      - Main router creation
//! └── page_routes.rs - Page handlers
//! ```
//!
//! # Routes
//!
//! - `GET /` - Home page with plain props
//! - `GET /users` - User list with concurrent and deferred props
//! - `POST /users` - Add a user, then 303 back to the list
//! - `GET /reports` - A page whose props fail, rendered as an error page
//! - `GET /billing` - External redirect through `X-Inertia-Location`
//! - `POST /logout` - Redirect back to the referring page

/// Main router creation
pub mod router;

/// Page handlers
pub mod page_routes;

pub use router::create_router;
