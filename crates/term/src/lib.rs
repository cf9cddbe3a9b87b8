//! Terminal rendering for the falling-block game.
//!
//! Everything draws into a [`FrameBuffer`] first; only [`TerminalRenderer`]
//! touches the terminal. Board cells are drawn two columns wide to make up
//! for the aspect ratio of terminal glyphs.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod screens;

pub use tetrodrop_core as core;
pub use tetrodrop_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{format_score, shape_color, BoardFrame, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use screens::{draw_game_over, draw_initials, render_rankings, render_title};
