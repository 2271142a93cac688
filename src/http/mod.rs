//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (assign/propagate request ID)
//!     → script handler (one upstream fetch)
//!     → response.rs (200 text/plain or generic 500)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestIdExt, X_REQUEST_ID};
pub use response::{script_response, FETCH_ERROR_BODY, SCRIPT_CONTENT_TYPE};
pub use server::{build_router, AppState, ScriptServer};
