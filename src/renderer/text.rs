//! Plain-text HUD renderer
//!
//! Produces the overlay text a graphical frontend would draw, which is also
//! all a headless run can show.

use super::Renderer;
use super::snapshot::{FrameSnapshot, Hud};

/// Renders the HUD to lines of text
#[derive(Debug, Default)]
pub struct TextRenderer {
    lines: Vec<String>,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines produced by the last `draw`
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Renderer for TextRenderer {
    fn draw(&mut self, frame: &FrameSnapshot<'_>) {
        self.lines = if frame.hud.game_over {
            game_over_lines(&frame.hud)
        } else {
            hud_lines(&frame.hud)
        };
    }
}

/// Score panel shown during a run
pub fn hud_lines(hud: &Hud) -> Vec<String> {
    let mut lines = vec![
        format!("Score: {}", hud.score),
        format!("Coins: {}", hud.coins),
        format!("High Score: {}", hud.high_score),
    ];
    for effect in &hud.effects {
        lines.push(format!("{}: {}s", effect.kind.label(), effect.seconds));
    }
    lines.push("Use A/D or Arrow Keys to move".to_string());
    lines
}

/// Panel shown once the run has ended
pub fn game_over_lines(hud: &Hud) -> Vec<String> {
    vec![
        "GAME OVER!".to_string(),
        format!("Final Score: {}", hud.score),
        format!("Coins Collected: {}", hud.coins),
        format!("High Score: {}", hud.high_score),
        "Press SPACE to restart".to_string(),
    ]
}
