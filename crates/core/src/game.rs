//! Game session - ties the board, the active and next pieces, and the score
//!
//! A session owns one board, the falling piece and the preview piece. Each
//! gravity step moves the active piece down; when it cannot move, the piece
//! locks, the rows it spans are checked for clears, the score is updated and
//! the preview piece is promoted onto the board. If the promoted piece
//! already overlaps locked cells, the session is over.

use crate::board::{Board, ClearedRows};
use crate::config::{ConfigError, GameConfig};
use crate::piece::Piece;
use crate::rng::{random_shape, SimpleRng};
use crate::scoring::score_from_lines;
use crate::types::{GameAction, Shape};

/// What happened when a piece locked.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LockReport {
    /// Rows removed, in removal order (for line-clear animation).
    pub cleared_rows: ClearedRows,
    /// Points awarded for the clear.
    pub points: u64,
}

impl LockReport {
    pub fn lines(&self) -> usize {
        self.cleared_rows.len()
    }
}

/// Result of one gravity step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// The active piece fell one row.
    Moved,
    /// The active piece locked and the next piece took its place.
    Locked(LockReport),
    /// The active piece locked and the promoted piece had no room.
    GameOver(LockReport),
    /// The session had already ended; nothing changed.
    Idle,
}

#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    board: Board,
    active: Piece,
    next: Piece,
    rng: SimpleRng,
    score: u64,
    lines: u32,
    pieces_locked: u32,
    game_over: bool,
}

impl Game {
    /// Start a session with a fresh board and two random pieces.
    pub fn new(config: GameConfig, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = SimpleRng::new(seed);
        let board = Board::new(config.height, config.width);
        let active = Piece::spawn(random_shape(&mut rng), config.spawn_row, config.spawn_col);
        let next = Piece::spawn(
            random_shape(&mut rng),
            config.preview_row,
            config.preview_col,
        );
        tracing::debug!(seed, active = active.shape().as_str(), "new game");
        Ok(Self::with_parts(config, board, active, next, rng))
    }

    /// Assemble a session from explicit parts. The active piece is used as
    /// given; the next piece is moved to the preview pivot.
    pub fn with_parts(
        config: GameConfig,
        board: Board,
        active: Piece,
        mut next: Piece,
        rng: SimpleRng,
    ) -> Self {
        next.reposition(config.preview_row, config.preview_col);
        Self {
            config,
            board,
            active,
            next,
            rng,
            score: 0,
            lines: 0,
            pieces_locked: 0,
            game_over: false,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    /// The preview piece, positioned in preview-box coordinates.
    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn seed(&self) -> u32 {
        self.rng.seed()
    }

    /// Current drop speed in rows per second.
    pub fn speed(&self) -> f64 {
        self.config.speed.speed_from_score(self.score)
    }

    /// Forward a player request to the active piece.
    ///
    /// Returns whether the piece changed (a blocked move is not an error).
    /// Soft drop never locks; only [`Game::tick`] does.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.game_over {
            return false;
        }
        match action {
            GameAction::MoveLeft => self.active.translate(&self.board, 0, -1),
            GameAction::MoveRight => self.active.translate(&self.board, 0, 1),
            GameAction::SoftDrop => self.active.translate(&self.board, 1, 0),
            GameAction::Rotate => self.active.rotate(&self.board),
        }
    }

    /// One gravity step.
    pub fn tick(&mut self) -> TickOutcome {
        if self.game_over {
            return TickOutcome::Idle;
        }
        if self.active.translate(&self.board, 1, 0) {
            return TickOutcome::Moved;
        }

        let report = self.lock_active();
        let shape = random_shape(&mut self.rng);
        if self.promote_next(shape) {
            TickOutcome::Locked(report)
        } else {
            TickOutcome::GameOver(report)
        }
    }

    /// Lock the active piece and clear any rows it completed.
    fn lock_active(&mut self) -> LockReport {
        self.board.lock(&self.active);
        self.pieces_locked += 1;

        let bbox = self.active.bounding_box();
        let bottom = bbox.max_row.max(0) as usize;
        let top = bbox.min_row.max(0) as usize;
        let cleared_rows = self.board.clear_and_compact(bottom, top);

        let points = score_from_lines(cleared_rows.len());
        self.score += points;
        self.lines += cleared_rows.len() as u32;

        tracing::debug!(
            shape = self.active.shape().as_str(),
            lines = cleared_rows.len(),
            points,
            score = self.score,
            "piece locked"
        );

        LockReport {
            cleared_rows,
            points,
        }
    }

    /// Move the preview piece onto the board and draw a new preview.
    /// Returns false (and ends the session) when the spawn area is blocked.
    fn promote_next(&mut self, next_shape: Shape) -> bool {
        let mut promoted = self.next;
        promoted.reposition(self.config.spawn_row, self.config.spawn_col);
        self.active = promoted;
        self.next = Piece::spawn(next_shape, self.config.preview_row, self.config.preview_col);

        if !self.board.classify_piece(&self.active).is_free() {
            self.game_over = true;
            tracing::info!(
                score = self.score,
                lines = self.lines,
                pieces = self.pieces_locked,
                "game over"
            );
            return false;
        }
        true
    }

    /// Abandon the session (forced quit).
    pub fn abort(&mut self) {
        if !self.game_over {
            tracing::info!(score = self.score, "game aborted");
        }
        self.game_over = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Point;
    use crate::types::Collision;

    fn game_with(board: Board, active: Piece) -> Game {
        let config = GameConfig::with_board(board.height(), board.width());
        let next = Piece::spawn(Shape::O, 0, 0);
        Game::with_parts(config, board, active, next, SimpleRng::new(1))
    }

    #[test]
    fn test_new_game_state() {
        let game = Game::new(GameConfig::default(), 12345).unwrap();
        assert_eq!(game.score(), 0);
        assert_eq!(game.lines(), 0);
        assert!(!game.game_over());
        assert_eq!(game.active().center(), Point::new(1, 5));
        assert_eq!(game.next().center(), Point::new(2, 3));
        assert_eq!(game.board().occupied_count(), 0);
        assert_eq!(game.speed(), 1.0);
    }

    #[test]
    fn test_same_seed_same_pieces() {
        let a = Game::new(GameConfig::default(), 77).unwrap();
        let b = Game::new(GameConfig::default(), 77).unwrap();
        assert_eq!(a.active(), b.active());
        assert_eq!(a.next(), b.next());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GameConfig::with_board(0, 0);
        assert!(Game::new(config, 1).is_err());
    }

    #[test]
    fn test_tick_moves_down() {
        let board = Board::new(16, 10);
        let mut game = game_with(board, Piece::spawn(Shape::T, 1, 5));
        assert_eq!(game.tick(), TickOutcome::Moved);
        assert_eq!(game.active().center(), Point::new(2, 5));
    }

    #[test]
    fn test_tick_locks_and_promotes() {
        let board = Board::new(16, 10);
        let mut game = game_with(board, Piece::spawn(Shape::O, 15, 5));

        match game.tick() {
            TickOutcome::Locked(report) => {
                assert_eq!(report.lines(), 0);
                assert_eq!(report.points, 0);
            }
            other => panic!("expected lock, got {:?}", other),
        }
        assert_eq!(game.board().occupied_count(), 4);
        assert_eq!(game.pieces_locked(), 1);
        // The old preview O is now active at the spawn pivot.
        assert_eq!(game.active().shape(), Shape::O);
        assert_eq!(game.active().center(), Point::new(1, 5));
        assert_eq!(game.next().center(), Point::new(2, 3));
    }

    #[test]
    fn test_lock_clears_row_and_scores() {
        let mut board = Board::new(16, 10);
        for col in 0..10 {
            if col != 4 && col != 5 {
                board.set(15, col, true);
            }
        }
        // O pivot (15, 5) covers (14..=15, 4..=5).
        let mut game = game_with(board, Piece::spawn(Shape::O, 15, 5));

        match game.tick() {
            TickOutcome::Locked(report) => {
                assert_eq!(report.cleared_rows.as_slice(), &[15]);
                assert_eq!(report.points, 100);
            }
            other => panic!("expected lock, got {:?}", other),
        }
        assert_eq!(game.score(), 100);
        assert_eq!(game.lines(), 1);
        // Top half of the O dropped into the cleared row.
        assert!(game.board().is_occupied(15, 4));
        assert!(game.board().is_occupied(15, 5));
        assert_eq!(game.board().occupied_count(), 2);
    }

    #[test]
    fn test_game_over_when_spawn_blocked() {
        let mut board = Board::new(16, 10);
        board.set(1, 5, true);
        board.set(2, 5, true);
        // Active piece rests on the floor far from the spawn area.
        let mut game = game_with(board, Piece::spawn(Shape::O, 15, 1));

        assert!(matches!(game.tick(), TickOutcome::GameOver(_)));
        assert!(game.game_over());
        assert_eq!(
            game.board().classify_piece(game.active()),
            Collision::Locked
        );
        assert_eq!(game.tick(), TickOutcome::Idle);
        assert!(!game.apply_action(GameAction::MoveLeft));
    }

    #[test]
    fn test_apply_action_moves_and_rotates() {
        let board = Board::new(16, 10);
        let mut game = game_with(board, Piece::spawn(Shape::T, 5, 5));

        assert!(game.apply_action(GameAction::MoveLeft));
        assert_eq!(game.active().center(), Point::new(5, 4));
        assert!(game.apply_action(GameAction::MoveRight));
        assert!(game.apply_action(GameAction::SoftDrop));
        assert_eq!(game.active().center(), Point::new(6, 5));
        assert!(game.apply_action(GameAction::Rotate));
        assert_eq!(game.active().rotation_state(), 1);
    }

    #[test]
    fn test_soft_drop_never_locks() {
        let board = Board::new(16, 10);
        let mut game = game_with(board, Piece::spawn(Shape::O, 15, 5));
        assert!(!game.apply_action(GameAction::SoftDrop));
        assert_eq!(game.board().occupied_count(), 0);
        assert_eq!(game.pieces_locked(), 0);
    }

    #[test]
    fn test_abort_ends_session() {
        let mut game = Game::new(GameConfig::default(), 3).unwrap();
        game.abort();
        assert!(game.game_over());
        assert_eq!(game.tick(), TickOutcome::Idle);
    }

    #[test]
    fn test_four_row_clear_scores_bonus() {
        let mut board = Board::new(16, 10);
        for row in 12..16 {
            for col in 0..10 {
                if col != 0 {
                    board.set(row, col, true);
                }
            }
        }
        // Vertical I in column 0 completes four rows at once.
        let mut game = game_with(board, Piece::spawn(Shape::I, 13, 0));
        match game.tick() {
            TickOutcome::Locked(report) => assert_eq!(report.points, 1200),
            other => panic!("expected lock, got {:?}", other),
        }
        assert_eq!(game.board().occupied_count(), 0);
        assert_eq!(game.speed(), 1.0);
    }
}
