use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::core::{Canvas, Fps, Rgba8},
    foundation::error::{PingalaError, PingalaResult},
    timeline::model::FontChoice,
};

/// Palette shared by the scene builders.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Clear color.
    pub background: Rgba8,
    /// Guru marks, results, highlights.
    pub gold: Rgba8,
    /// Laghu marks.
    pub orange: Rgba8,
    /// Guide paths and soft glows.
    pub glow: Rgba8,
    /// Scanners and HUD text.
    pub cyan: Rgba8,
    /// Even-step labels.
    pub even: Rgba8,
    /// Odd-step labels.
    pub odd: Rgba8,
    /// Body text.
    pub text: Rgba8,
    /// Secondary text.
    pub muted: Rgba8,
    /// `×2` operation label.
    pub double: Rgba8,
    /// `×2 − 1` operation label.
    pub double_minus_one: Rgba8,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Rgba8::BLACK,
            gold: Rgba8::rgb(0xFF, 0xD7, 0x00),
            orange: Rgba8::rgb(0xFF, 0x45, 0x00),
            glow: Rgba8::rgb(0xFF, 0x8C, 0x00),
            cyan: Rgba8::rgb(0x00, 0xFF, 0xFF),
            even: Rgba8::rgb(0x00, 0xF0, 0xFF),
            odd: Rgba8::rgb(0xFF, 0x2D, 0x55),
            text: Rgba8::WHITE,
            muted: Rgba8::rgb(0x88, 0x88, 0x88),
            double: Rgba8::rgb(0x83, 0xC1, 0x67),
            double_minus_one: Rgba8::rgb(0xFC, 0x62, 0x55),
        }
    }
}

/// Scene-wide settings every builder reads.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Frame rate.
    pub fps: Fps,
    /// Output size hint.
    pub canvas: Canvas,
    /// Seed for particle fields.
    pub seed: u64,
    /// Font preference.
    pub font: FontChoice,
    /// Palette.
    pub theme: Theme,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            fps: Fps { num: 30, den: 1 },
            canvas: Canvas {
                width: 1920,
                height: 1080,
            },
            seed: 0,
            font: FontChoice::default(),
            theme: Theme::default(),
        }
    }
}

impl SceneConfig {
    /// Reject zero fps parts or an empty canvas.
    pub fn validate(&self) -> PingalaResult<()> {
        Fps::new(self.fps.num, self.fps.den)?;
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(PingalaError::validation("canvas width/height must be > 0"));
        }
        Ok(())
    }

    /// Parse from JSON; missing fields take defaults.
    pub fn from_json(s: &str) -> PingalaResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: &Path) -> PingalaResult<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read scene config '{}'", path.display()))?;
        let cfg = Self::from_json(&raw)?;
        tracing::debug!(path = %path.display(), fps = cfg.fps.as_f64(), "loaded scene config");
        Ok(cfg)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/config.rs"]
mod tests;
