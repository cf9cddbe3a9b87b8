//! Terminal input module.
//!
//! Maps `crossterm` key events onto the game's [`crate::types::GameAction`],
//! the menu choices and the initials editor keys. Polling stays with the game
//! loop; this crate only interprets events that were already read.

pub mod map;

pub use tetrodrop_types as types;

pub use map::{game_action, initials_key, is_force_quit, menu_action};
