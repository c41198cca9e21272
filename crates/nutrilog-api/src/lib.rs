//! nutrilog API crate - axum webhook server for the chat platform.
//!
//! Exposes a single POST endpoint that takes a skill request envelope,
//! answers the nutrition question in it, and always returns a well-formed
//! skill response envelope.

pub mod envelope;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use envelope::{SkillRequest, SkillResponse};
pub use error::{WebhookError, SERVER_ERROR_MESSAGE};
pub use routes::{create_router, start_server};
pub use state::AppState;
