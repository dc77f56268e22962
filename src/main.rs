//! Space Shooter entry point
//!
//! Native headless shell: loads settings and sprites, plays a scripted
//! attract-mode session at the fixed tick rate and optionally saves the last
//! frame as a PNG. A windowed shell would feed real key events into the same
//! `Game` API and present `Game::tick`'s frame instead.

use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use space_shooter::consts::{TICK_DT, TICKS_PER_SECOND};
use space_shooter::settings::SETTINGS_FILE;
use space_shooter::sim::{GameEvent, GamePhase, Key};
use space_shooter::{Game, PLAYFIELD, Settings, SpriteTable};

/// Ticks between scripted shots
const FIRE_INTERVAL: u32 = 15;
/// Ticks spent sweeping in each direction
const SWEEP_TICKS: u32 = 45;
/// Ticks to let the game over screen fade in before restarting
const RESTART_DELAY: u32 = 60;

/// Scripted input for tick `n`
fn drive(game: &mut Game, n: u32, game_over_since: Option<u32>) {
    match game.state().phase() {
        GamePhase::Menu => game.key_down(Key::Space),
        GamePhase::Playing => {
            let leftward = (n / SWEEP_TICKS) % 2 == 0;
            if leftward {
                game.key_up(Key::Right);
                game.key_down(Key::Left);
            } else {
                game.key_up(Key::Left);
                game.key_down(Key::Right);
            }
            if n % FIRE_INTERVAL == 0 {
                game.key_down(Key::Space);
            }
        }
        GamePhase::GameOver => {
            if game_over_since.is_some_and(|since| n - since >= RESTART_DELAY) {
                game.key_down(Key::R);
            }
        }
    }
    game.key_up(Key::Space);
    game.key_up(Key::R);
}

fn main() {
    env_logger::init();

    let settings_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE));
    let settings = Settings::load(&settings_path);

    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    });
    log::info!(
        "Space Shooter starting: {}x{} playfield, {} ticks/s, seed {}",
        PLAYFIELD.0,
        PLAYFIELD.1,
        TICKS_PER_SECOND,
        seed
    );

    let sprites = SpriteTable::load_or_fallback(&settings.asset_dir);
    let mut game = Game::new(seed, sprites);

    let tick_duration = Duration::from_secs_f32(TICK_DT);
    let mut next_deadline = Instant::now();
    let mut last_phase = game.state().phase();
    let mut game_over_since = None;
    let mut games_played = 0u32;

    for n in 0..settings.demo_ticks {
        drive(&mut game, n, game_over_since);
        game.tick();

        for event in &game.state().events {
            if let GameEvent::PlayerHit { by } = event {
                log::info!("Hit by {:?}, {} lives left", by, game.state().session.lives);
            }
        }

        let phase = game.state().phase();
        if phase != last_phase {
            match phase {
                GamePhase::Playing => {
                    games_played += 1;
                    game_over_since = None;
                }
                GamePhase::GameOver => game_over_since = Some(n),
                GamePhase::Menu => {}
            }
            log::info!("Phase {:?} -> {:?} at tick {}", last_phase, phase, n);
            last_phase = phase;
        }

        if settings.realtime {
            next_deadline += tick_duration;
            let now = Instant::now();
            if next_deadline > now {
                std::thread::sleep(next_deadline - now);
            } else {
                // Fell behind; don't try to catch up
                next_deadline = now;
            }
        }
    }

    let session = game.state().session;
    log::info!(
        "Finished {} ticks: {} game(s), score {}, lives {}, phase {:?}",
        settings.demo_ticks,
        games_played,
        session.score,
        session.lives,
        session.phase
    );

    if let Some(path) = &settings.snapshot_path {
        match game.frame().save_png(path) {
            Ok(()) => log::info!("Saved frame to {}", path.display()),
            Err(e) => log::error!("Failed to save frame to {}: {e}", path.display()),
        }
    }
}
