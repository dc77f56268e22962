//! Phase transitions
//!
//! Menu --start--> Playing --lives exhausted--> GameOver --restart--> Playing.
//! Fire is handled here too since it is the only other discrete press that
//! does anything.

use super::input::Key;
use super::state::{GamePhase, GameState};

pub const START_KEY: Key = Key::Space;
pub const RESTART_KEY: Key = Key::R;
pub const FIRE_KEY: Key = Key::Space;

/// Apply a discrete key press. Returns the new phase if one was entered.
pub fn on_key_press(state: &mut GameState, key: Key) -> Option<GamePhase> {
    match (state.phase(), key) {
        (GamePhase::Menu, START_KEY) => {
            state.reset(GamePhase::Playing);
            log::info!("Game started (seed {})", state.seed);
            Some(GamePhase::Playing)
        }
        (GamePhase::GameOver, RESTART_KEY) => {
            state.reset(GamePhase::Playing);
            log::info!("Game restarted");
            Some(GamePhase::Playing)
        }
        (GamePhase::Playing, FIRE_KEY) => {
            state.fire_player_projectile();
            None
        }
        _ => None,
    }
}

/// End-of-step life check. Returns true when the game just ended.
pub fn check_game_over(state: &mut GameState) -> bool {
    if state.phase() != GamePhase::Playing || state.session.lives > 0 {
        return false;
    }
    state.session.phase = GamePhase::GameOver;
    state.session.fade_alpha = 0;
    log::info!("Game over, final score {}", state.session.score);
    true
}
