//! Quiz Grader web server
//!
//! Serves the single-screen upload page and the process/download API.
//! Run with `quiz-grader-server`.

pub mod handlers;
pub mod server;

pub use server::{build_router, run_server, AppState, ServerConfig};
