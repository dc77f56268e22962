//! Frame composition
//!
//! Paints one complete frame per tick, whatever the phase. Layer order while
//! playing is fixed: background, player, exhaust, entities, projectiles,
//! particles, HUD. Later layers cover earlier ones.

use embedded_graphics::Drawable;
use embedded_graphics::geometry::{Dimensions, Point};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::{FONT_9X15, FONT_9X15_BOLD, FONT_10X20};
use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use embedded_graphics::primitives::{Circle, Primitive, PrimitiveStyle};
use embedded_graphics::text::Text;
use glam::Vec2;

use super::frame::Frame;
use crate::PLAYFIELD;
use crate::assets::{SpriteId, SpriteTable};
use crate::consts::*;
use crate::sim::{Entity, GamePhase, GameState};

pub const GRADIENT_TOP: [u8; 3] = [0, 0, 0];
pub const GRADIENT_BOTTOM: [u8; 3] = [64, 64, 64];

pub const MENU_TITLE: &str = "SPACE SHOOTER";
pub const GAME_OVER_TITLE: &str = "GAME OVER";
pub const START_PROMPT: &str = "Press SPACE to Start";
pub const RESTART_PROMPT: &str = "Press R to Restart";

/// HUD baselines
const HUD_X: i32 = 10;
const SCORE_BASELINE: i32 = 25;
const LIVES_BASELINE: i32 = 45;

/// Title screen baselines, relative to the vertical center
const TITLE_OFFSET: i32 = -50;
const SUBTEXT_OFFSET: i32 = 0;
const SECOND_SUBTEXT_OFFSET: i32 = 25;

/// Owns the off-screen frame and paints into it
#[derive(Debug, Clone)]
pub struct Compositor {
    frame: Frame,
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new()
    }
}

impl Compositor {
    pub fn new() -> Self {
        Self {
            frame: Frame::new(PLAYFIELD.0, PLAYFIELD.1),
        }
    }

    /// Last composed frame
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Compose a full frame from `state`. Steps the game over fade as a side effect.
    pub fn compose(&mut self, state: &mut GameState, sprites: &SpriteTable) -> &Frame {
        if state.phase() == GamePhase::GameOver {
            state.session.fade_in();
        }

        let frame = &mut self.frame;
        draw_background(frame, sprites);

        match state.phase() {
            GamePhase::Playing => {
                draw_playfield(frame, state, sprites);
                draw_hud(frame, state);
            }
            GamePhase::Menu => draw_title_screen(frame, MENU_TITLE, &[START_PROMPT], 255),
            GamePhase::GameOver => {
                let final_score = format!("Final Score: {}", state.session.score);
                draw_title_screen(
                    frame,
                    GAME_OVER_TITLE,
                    &[final_score.as_str(), RESTART_PROMPT],
                    state.session.fade_alpha,
                );
            }
        }

        &self.frame
    }
}

#[inline]
fn to_pixel(pos: Vec2) -> (i32, i32) {
    (pos.x.round() as i32, pos.y.round() as i32)
}

fn draw_background(frame: &mut Frame, sprites: &SpriteTable) {
    frame.fill_vertical_gradient(GRADIENT_TOP, GRADIENT_BOTTOM);
    frame.blit_scaled(sprites.get(SpriteId::Background), 0, 0, frame.width, frame.height);
}

/// Blit an entity's sprite at its rounded position; inactive or imageless entities draw nothing
pub fn draw_entity(frame: &mut Frame, entity: &Entity, sprites: &SpriteTable) {
    let Some(sprite) = entity.sprite else {
        return;
    };
    if !entity.active {
        return;
    }
    let (x, y) = to_pixel(entity.pos);
    let size = entity.size().round();
    frame.blit_scaled(sprites.get(sprite), x, y, size.x as u32, size.y as u32);
}

fn draw_playfield(frame: &mut Frame, state: &GameState, sprites: &SpriteTable) {
    let player = &state.player;
    draw_entity(frame, player, sprites);

    // Exhaust flickers between two frames under the ship
    let exhaust = if (state.session.spawn_tick / EXHAUST_FRAME_TICKS) % 2 == 0 {
        SpriteId::Exhaust1
    } else {
        SpriteId::Exhaust2
    };
    let exhaust_pos = Vec2::new(
        player.center().x - EXHAUST_WIDTH / 2.0,
        player.pos.y + player.size().y,
    );
    let (x, y) = to_pixel(exhaust_pos);
    frame.blit_scaled(
        sprites.get(exhaust),
        x,
        y,
        EXHAUST_WIDTH as u32,
        EXHAUST_HEIGHT as u32,
    );

    for entity in &state.entities {
        draw_entity(frame, entity, sprites);
    }
    for projectile in &state.projectiles {
        draw_entity(frame, projectile, sprites);
    }
    for particle in state.particles.iter() {
        let (x, y) = to_pixel(particle.pos);
        let [r, g, b] = particle.color;
        let Ok(()) = Circle::new(Point::new(x, y), PARTICLE_DIAMETER)
            .into_styled(PrimitiveStyle::with_fill(Rgb888::new(r, g, b)))
            .draw(&mut frame.painter(particle.alpha()));
    }
}

fn draw_hud(frame: &mut Frame, state: &GameState) {
    let style = MonoTextStyle::new(&FONT_9X15_BOLD, Rgb888::WHITE);
    let mut painter = frame.painter(255);
    let score = format!("Score: {}", state.session.score);
    let lives = format!("Lives: {}", state.session.lives);
    let Ok(_) = Text::new(&score, Point::new(HUD_X, SCORE_BASELINE), style).draw(&mut painter);
    let Ok(_) = Text::new(&lives, Point::new(HUD_X, LIVES_BASELINE), style).draw(&mut painter);
}

/// Horizontal position that centers `text` in the frame
pub fn centered_x(frame_width: u32, text: &str, style: MonoTextStyle<'_, Rgb888>) -> i32 {
    let width = Text::new(text, Point::zero(), style).bounding_box().size.width;
    (frame_width as i32 - width as i32) / 2
}

fn draw_title_screen(frame: &mut Frame, title: &str, lines: &[&str], alpha: u8) {
    let center_y = frame.height as i32 / 2;
    let width = frame.width;
    let title_style = MonoTextStyle::new(&FONT_10X20, Rgb888::WHITE);
    let text_style = MonoTextStyle::new(&FONT_9X15, Rgb888::WHITE);
    let mut painter = frame.painter(alpha);

    let x = centered_x(width, title, title_style);
    let title_at = Point::new(x, center_y + TITLE_OFFSET);
    let Ok(_) = Text::new(title, title_at, title_style).draw(&mut painter);

    for (line, offset) in lines.iter().zip([SUBTEXT_OFFSET, SECOND_SUBTEXT_OFFSET]) {
        let x = centered_x(width, line, text_style);
        let line_at = Point::new(x, center_y + offset);
        let Ok(_) = Text::new(line, line_at, text_style).draw(&mut painter);
    }
}
