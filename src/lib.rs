//! Tetrodrop (workspace facade crate).
//!
//! Re-exports the member crates under `tetrodrop::{core,input,term,types}` and
//! hosts the screen flow shared by the binary and the integration tests.

pub mod app;

pub use tetrodrop_core as core;
pub use tetrodrop_input as input;
pub use tetrodrop_term as term;
pub use tetrodrop_types as types;
