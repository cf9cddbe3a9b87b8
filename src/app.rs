//! Screen flow: title, play, initials entry, game over and rankings.
//!
//! [`App`] owns everything that outlives a single game (the rankings table
//! and the seed sequence). It is driven by key events and by the clock and
//! draws into a framebuffer; the binary supplies the terminal around it.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::KeyEvent;

use crate::core::{DropClock, Game, GameConfig, InitialsEntry, Rankings, TickOutcome};
use crate::input::{game_action, initials_key, is_force_quit, menu_action};
use crate::term::{
    draw_game_over, draw_initials, render_rankings, render_title, FrameBuffer, GameView, Viewport,
};
use crate::types::{InitialsKey, MenuAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Title,
    Scores,
    Playing,
    /// A finished game made the rankings; the player is typing initials.
    Initials,
    GameOver,
    Quit,
}

pub struct App {
    config: GameConfig,
    next_seed: u32,
    rankings: Rankings,
    screen: Screen,
    game: Option<Game>,
    clock: DropClock,
    initials: InitialsEntry,
    view: GameView,
}

impl App {
    /// Fails when `config` cannot host a game.
    pub fn new(config: GameConfig, seed: u32) -> Result<Self> {
        config.validate()?;
        let clock = DropClock::new(Instant::now(), config.speed.initial);
        Ok(Self {
            config,
            next_seed: seed,
            rankings: Rankings::new(),
            screen: Screen::Title,
            game: None,
            clock,
            initials: InitialsEntry::new(),
            view: GameView::default(),
        })
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    pub fn rankings(&self) -> &Rankings {
        &self.rankings
    }

    pub fn initials(&self) -> &InitialsEntry {
        &self.initials
    }

    pub fn should_quit(&self) -> bool {
        self.screen == Screen::Quit
    }

    fn start_game(&mut self, now: Instant) -> Result<()> {
        let seed = self.next_seed;
        self.next_seed = self.next_seed.wrapping_add(1);

        let game = Game::new(self.config.clone(), seed)?;
        self.clock.reset(now, game.speed());
        self.game = Some(game);
        self.screen = Screen::Playing;
        tracing::info!(seed, "game started");
        Ok(())
    }

    /// Leave play for initials entry or straight to the game-over popup.
    fn finish_game(&mut self, ranked: bool) {
        let score = self.game.as_ref().map_or(0, Game::score);
        tracing::info!(score, ranked, "game finished");
        if ranked && self.rankings.is_top_score(score) {
            self.initials = InitialsEntry::new();
            self.screen = Screen::Initials;
        } else {
            self.screen = Screen::GameOver;
        }
    }

    /// Apply one key press to the current screen.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Result<()> {
        match self.screen {
            Screen::Title => match menu_action(key) {
                Some(MenuAction::Play) => self.start_game(now)?,
                Some(MenuAction::Scores) => self.screen = Screen::Scores,
                Some(MenuAction::Quit) => self.screen = Screen::Quit,
                _ => {}
            },
            Screen::Scores | Screen::GameOver => match menu_action(key) {
                Some(MenuAction::Title) => {
                    self.game = None;
                    self.screen = Screen::Title;
                }
                Some(MenuAction::Quit) => self.screen = Screen::Quit,
                _ => {}
            },
            Screen::Playing => {
                let Some(game) = self.game.as_mut() else {
                    return Ok(());
                };
                if is_force_quit(key) {
                    game.abort();
                    self.finish_game(false);
                } else if let Some(action) = game_action(key) {
                    let moved = game.apply_action(action);
                    tracing::trace!(action = action.as_str(), moved, "player action");
                }
            }
            Screen::Initials => match initials_key(key) {
                Some(InitialsKey::Up) => self.initials.next_letter(),
                Some(InitialsKey::Down) => self.initials.prev_letter(),
                Some(InitialsKey::Left) => self.initials.move_left(),
                Some(InitialsKey::Right) => self.initials.move_right(),
                Some(InitialsKey::Done) => {
                    let score = self.game.as_ref().map_or(0, Game::score);
                    self.rankings.record(&self.initials.name(), score);
                    self.screen = Screen::GameOver;
                }
                None => {}
            },
            Screen::Quit => {}
        }
        Ok(())
    }

    /// Run gravity if a drop is due. Returns true when a piece locked, in
    /// which case input is skipped for the rest of the iteration.
    pub fn update(&mut self, now: Instant) -> bool {
        if self.screen != Screen::Playing {
            return false;
        }
        let Some(game) = self.game.as_mut() else {
            return false;
        };
        if !self.clock.is_due(now, game.speed()) {
            return false;
        }

        match game.tick() {
            TickOutcome::Moved | TickOutcome::Idle => false,
            TickOutcome::Locked(report) => {
                if report.lines() > 0 {
                    tracing::debug!(rows = ?report.cleared_rows, "rows cleared");
                }
                true
            }
            TickOutcome::GameOver(_) => {
                self.finish_game(true);
                true
            }
        }
    }

    /// How long the loop may sleep before the next drop is due, capped at
    /// `idle`.
    pub fn idle_for(&self, now: Instant, idle: Duration) -> Duration {
        if self.screen == Screen::Playing {
            self.clock.remaining(now).min(idle)
        } else {
            idle
        }
    }

    /// Draw the current screen.
    pub fn render(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        match (self.screen, self.game.as_ref()) {
            (Screen::Scores, _) => render_rankings(&self.rankings, viewport, fb),
            (Screen::Playing, Some(game)) => {
                self.view.render_into(game, viewport, fb);
            }
            (Screen::Initials, Some(game)) => {
                let frame = self.view.render_into(game, viewport, fb);
                draw_initials(fb, frame, &self.initials);
            }
            (Screen::GameOver, Some(game)) => {
                let frame = self.view.render_into(game, viewport, fb);
                draw_game_over(fb, frame, game.score());
            }
            _ => render_title(viewport, fb),
        }
    }
}
