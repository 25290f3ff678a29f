//! Transport Boundary Module
//!
//! HTTP plumbing shared by every dataset's handlers.
//!
//! ## Responsibilities
//! - **`error`**: The error taxonomy exposed over HTTP. Client-caused binding
//!   failures map to 422 before any engine call; engine failures map to 500
//!   with the underlying message in the body.
//! - **`extract`**: Strict query-parameter binding. Unknown or malformed
//!   parameters reject the request instead of being silently ignored.

pub mod error;
pub mod extract;

pub use error::ApiError;
pub use extract::StrictQuery;
