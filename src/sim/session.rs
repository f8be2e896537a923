//! Session phase machine: Menu -> Playing -> {Won, Lost}

use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GameState};
use crate::input::{InputEdge, Key, KeyAction};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the confirm key
    Menu,
    /// Active gameplay
    Playing,
    /// Every block destroyed
    Won,
    /// Out of lives
    Lost,
}

impl GamePhase {
    /// Won and Lost only leave through [`GameState::reset`]
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}

impl GameState {
    fn set_phase(&mut self, phase: GamePhase) {
        if self.phase != phase {
            log::info!("Phase {:?} -> {:?} (score {})", self.phase, phase, self.score);
            self.phase = phase;
            self.push_event(GameEvent::PhaseChanged(phase));
        }
    }

    /// Leave the menu. Returns false if not in the menu.
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::Menu {
            return false;
        }
        self.set_phase(GamePhase::Playing);
        true
    }

    /// Check terminal conditions. Running out of lives takes precedence when
    /// both happen on the same tick.
    pub fn evaluate(&mut self) -> GamePhase {
        if self.phase == GamePhase::Playing {
            if self.player_life <= 0 {
                self.set_phase(GamePhase::Lost);
            } else if self.blocks_hit >= self.block_count() {
                self.set_phase(GamePhase::Won);
            }
        }
        self.phase
    }

    /// Apply one key edge
    pub fn handle_input(&mut self, edge: InputEdge) {
        match (edge.key, edge.action) {
            (Key::Exit, KeyAction::Pressed) => {
                log::info!("Exit requested");
                self.exit_requested = true;
            }
            (Key::Confirm, KeyAction::Pressed) => {
                self.start();
            }
            // Movement only latches once play has started
            (Key::Left, KeyAction::Pressed) if self.phase != GamePhase::Menu => {
                self.paddle_input.left = true;
            }
            (Key::Right, KeyAction::Pressed) if self.phase != GamePhase::Menu => {
                self.paddle_input.right = true;
            }
            (Key::Left, KeyAction::Released) => self.paddle_input.left = false,
            (Key::Right, KeyAction::Released) => self.paddle_input.right = false,
            _ => {}
        }
    }
}
