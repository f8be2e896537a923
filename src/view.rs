//! Read-only frame snapshot for drawing
//!
//! Whatever draws the game gets a [`Frame`] per tick: one [`Sprite`] per
//! visible entity plus the HUD counters. Sprites carry their block/gem index
//! so the host can look up its own handles instead of keeping parallel arrays.

use serde::Serialize;

use crate::sim::{Aabb, GamePhase, GameState};

/// What a sprite depicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpriteKind {
    Paddle,
    Ball,
    Block(usize),
    Gem(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub rect: Aabb,
}

/// HUD text values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hud {
    pub score: u64,
    pub player_life: i32,
    pub blocks_hit: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub phase: GamePhase,
    pub hud: Hud,
    /// Draw order: blocks, gems, paddle, ball. Empty in the menu.
    pub sprites: Vec<Sprite>,
}

impl Frame {
    pub fn capture(state: &GameState) -> Self {
        let hud = Hud {
            score: state.score,
            player_life: state.player_life,
            blocks_hit: state.blocks_hit,
        };

        let mut sprites = Vec::new();
        if state.phase != GamePhase::Menu {
            sprites.reserve(state.blocks.len() + state.gems.len() + 2);
            sprites.extend(
                state
                    .blocks
                    .iter()
                    .enumerate()
                    .filter(|(_, b)| b.visible)
                    .map(|(i, b)| Sprite {
                        kind: SpriteKind::Block(i),
                        rect: b.aabb(),
                    }),
            );
            sprites.extend(
                state
                    .gems
                    .iter()
                    .enumerate()
                    .filter(|(_, g)| g.visible)
                    .map(|(i, g)| Sprite {
                        kind: SpriteKind::Gem(i),
                        rect: g.aabb(),
                    }),
            );
            sprites.push(Sprite {
                kind: SpriteKind::Paddle,
                rect: state.paddle.aabb(),
            });
            sprites.push(Sprite {
                kind: SpriteKind::Ball,
                rect: state.ball.aabb(),
            });
        }

        Self {
            phase: state.phase,
            hud,
            sprites,
        }
    }

    /// Banner for non-playing phases
    pub fn banner(&self) -> Option<&'static str> {
        match self.phase {
            GamePhase::Menu => Some("Welcome to Breakout\nPress Enter to start game"),
            GamePhase::Playing => None,
            GamePhase::Won => Some("You win!"),
            GamePhase::Lost => Some("Game over"),
        }
    }

    /// Status line, e.g. "Score: 150  Lives: 3"
    pub fn status_line(&self) -> String {
        format!("Score: {}  Lives: {}", self.hud.score, self.hud.player_life)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn test_menu_frame_has_banner_only() {
        let state = GameState::new(GameConfig::default());
        let frame = Frame::capture(&state);
        assert!(frame.sprites.is_empty());
        assert!(frame.banner().is_some());
    }

    #[test]
    fn test_hidden_entities_skipped() {
        let mut state = GameState::new(GameConfig::default());
        state.start();
        state.blocks[7].visible = false;
        let frame = Frame::capture(&state);

        // 49 blocks + 1 active gem + paddle + ball
        assert_eq!(frame.sprites.len(), 52);
        assert!(!frame.sprites.iter().any(|s| s.kind == SpriteKind::Block(7)));
        assert!(frame.sprites.iter().any(|s| s.kind == SpriteKind::Gem(0)));
        assert_eq!(frame.sprites.last().map(|s| s.kind), Some(SpriteKind::Ball));
        assert_eq!(frame.banner(), None);
    }

    #[test]
    fn test_status_and_json() {
        let mut state = GameState::new(GameConfig::default());
        state.score = 150;
        let frame = Frame::capture(&state);
        assert_eq!(frame.status_line(), "Score: 150  Lives: 3");
        let json = frame.to_json().unwrap();
        assert!(json.contains("\"score\":150"));
    }
}
