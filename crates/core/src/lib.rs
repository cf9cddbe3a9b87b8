//! Core game logic - pure, deterministic and testable
//!
//! This crate holds the falling-block simulation: the occupancy grid, piece
//! geometry and movement, scoring and speed, plus the session state that a
//! game loop drives. It does no I/O, so every rule can be exercised in tests
//! with a fixed seed.
//!
//! # Module Structure
//!
//! - [`board`]: occupancy grid, collision classification, row clearing
//! - [`piece`]: shape templates, translation and rotation about a pivot
//! - [`scoring`]: line-clear points and the speed curve
//! - [`rng`]: seeded shape selection
//! - [`clock`]: drift-free drop cadence
//! - [`config`]: board/spawn/speed settings and their validation
//! - [`game`]: one play session (active + next piece, score, game over)
//! - [`rankings`]: in-memory top-10 table and the initials editor
//!
//! # Example
//!
//! ```
//! use tetrodrop_core::{Game, GameConfig, TickOutcome};
//! use tetrodrop_types::GameAction;
//!
//! let mut game = Game::new(GameConfig::default(), 12345).unwrap();
//!
//! game.apply_action(GameAction::MoveLeft);
//! game.apply_action(GameAction::Rotate);
//!
//! // Let gravity run until the first piece locks.
//! while game.tick() == TickOutcome::Moved {}
//! assert_eq!(game.pieces_locked(), 1);
//! ```

pub mod board;
pub mod clock;
pub mod config;
pub mod game;
pub mod piece;
pub mod rankings;
pub mod rng;
pub mod scoring;

pub use tetrodrop_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows};
pub use clock::{drop_interval, DropClock};
pub use config::{ConfigError, GameConfig};
pub use game::{Game, LockReport, TickOutcome};
pub use piece::{template, BoundingBox, Piece, Point};
pub use rankings::{InitialsEntry, Ranking, Rankings};
pub use rng::{random_shape, SimpleRng};
pub use scoring::{score_from_lines, speed_from_score, SpeedCurve};
