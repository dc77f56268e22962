//! Frames produced through the `Game` entry points

use space_shooter::sim::{GamePhase, Key};
use space_shooter::{Game, PLAYFIELD, SpriteId, SpriteTable};

const WHITE: [u8; 4] = [255, 255, 255, 255];

/// Brightest pixel in a horizontal band of the frame
fn brightest_in_rows(game: &Game, rows: std::ops::Range<u32>) -> u32 {
    let frame = game.frame();
    rows.flat_map(|y| (0..frame.width).map(move |x| (x, y)))
        .map(|(x, y)| {
            let [r, g, b, _] = frame.pixel(x, y);
            r as u32 + g as u32 + b as u32
        })
        .max()
        .unwrap_or(0)
}

fn lose_every_life(game: &mut Game) {
    game.key_down(Key::Space);
    game.key_up(Key::Space);
    game.tick();
    // Park under the spawn lanes and wait for something to ram the ship
    game.key_down(Key::Up);
    for _ in 0..20_000 {
        game.tick();
        if game.state().phase() == GamePhase::GameOver {
            break;
        }
    }
    game.key_up(Key::Up);
}

#[test]
fn frame_matches_playfield_in_every_phase() {
    let mut game = Game::new(3, SpriteTable::procedural());
    let expected = (PLAYFIELD.0 * PLAYFIELD.1 * 4) as usize;

    game.tick();
    assert_eq!(game.frame().as_bytes().len(), expected);

    game.key_down(Key::Space);
    game.tick();
    assert_eq!(game.state().phase(), GamePhase::Playing);
    assert_eq!(game.frame().as_bytes().len(), expected);
    assert_eq!((game.frame().width, game.frame().height), PLAYFIELD);
}

#[test]
fn menu_shows_title_over_background() {
    let mut game = Game::new(3, SpriteTable::procedural());
    game.tick();
    let frame = game.frame();
    let center = PLAYFIELD.1 / 2;

    // Title glyphs sit above the vertical center
    let title_rows = (center - 70)..(center - 45);
    let white = title_rows
        .flat_map(|y| (0..frame.width).map(move |x| (x, y)))
        .filter(|&(x, y)| frame.pixel(x, y) == WHITE)
        .count();
    assert!(white > 0);

    // Corners are plain background
    let background = game.sprites().get(SpriteId::Background).pixel(0, 0);
    assert_eq!(frame.pixel(0, 0), background);
    assert_eq!(frame.pixel(frame.width - 1, frame.height - 1), background);
}

#[test]
fn game_over_title_fades_in() {
    let mut game = Game::new(11, SpriteTable::procedural());
    lose_every_life(&mut game);
    assert_eq!(game.state().phase(), GamePhase::GameOver);

    let center = PLAYFIELD.1 / 2;
    let title_rows = (center - 70)..(center - 45);

    let first = brightest_in_rows(&game, title_rows.clone());
    for _ in 0..10 {
        game.tick();
    }
    let later = brightest_in_rows(&game, title_rows.clone());
    assert!(later > first, "title should brighten: {first} -> {later}");

    for _ in 0..60 {
        game.tick();
    }
    assert_eq!(game.state().session.fade_alpha, 255);
    assert_eq!(brightest_in_rows(&game, title_rows), 255 * 3);

    // Restart goes straight back to the playfield with a fresh HUD
    game.key_down(Key::R);
    game.tick();
    assert_eq!(game.state().phase(), GamePhase::Playing);
    assert_eq!(game.state().session.score, 0);
    assert_eq!(game.state().session.fade_alpha, 0);
}

#[test]
fn snapshot_round_trips_through_png() {
    let mut game = Game::new(5, SpriteTable::procedural());
    game.key_down(Key::Space);
    for _ in 0..30 {
        game.tick();
    }

    let path = std::env::temp_dir().join(format!("space-shooter-frame-{}.png", std::process::id()));
    game.frame().save_png(&path).unwrap();
    let decoded = image::open(&path).unwrap().to_rgba8();
    let _ = std::fs::remove_file(&path);

    assert_eq!(decoded.dimensions(), PLAYFIELD);
    assert_eq!(decoded.as_raw().as_slice(), game.frame().as_bytes());
}
