//! Scene builders: each turns generator output into a validated [`Timeline`].

pub(crate) mod config;
pub(crate) mod meru_pyramid;
pub(crate) mod meru_reveal;
pub(crate) mod pingala_decompose;
pub(crate) mod pingala_reconstruct;
pub(crate) mod prastaara_table;
pub(crate) mod snake_crawl;

use crate::{
    foundation::core::Vec2,
    foundation::error::PingalaResult,
    prosody::pingala::{Direction, WeightSequence},
    scenes::config::SceneConfig,
    timeline::model::Timeline,
};

pub(crate) const UP: Vec2 = Vec2::new(0.0, 1.0);
pub(crate) const DOWN: Vec2 = Vec2::new(0.0, -1.0);
pub(crate) const LEFT: Vec2 = Vec2::new(-1.0, 0.0);

/// Which scene to build, with its parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "scene", rename_all = "snake_case")]
pub enum SceneKind {
    /// [`meru_reveal::meru_reveal`].
    Meru {
        /// Triangle rows.
        rows: usize,
    },
    /// [`meru_pyramid::meru_pyramid`].
    Pyramid {
        /// Triangle rows.
        rows: usize,
    },
    /// [`pingala_decompose::pingala_decompose`].
    Decompose {
        /// Starting integer.
        n: u64,
    },
    /// [`pingala_reconstruct::pingala_reconstruct`].
    Reconstruct {
        /// Pattern to rebuild.
        symbols: WeightSequence,
        /// Traversal order.
        #[serde(default)]
        direction: Direction,
    },
    /// [`prastaara_table::prastaara_table`].
    Prastaara {
        /// Pattern width.
        width: usize,
    },
    /// [`snake_crawl::snake_crawl`].
    Snake {
        /// One period of the metre.
        pattern: WeightSequence,
        /// Periods in the body.
        repeats: usize,
    },
}

/// Build the timeline for `kind`.
pub fn build_scene(kind: &SceneKind, config: &SceneConfig) -> PingalaResult<Timeline> {
    config.validate()?;
    match kind {
        SceneKind::Meru { rows } => meru_reveal::meru_reveal(*rows, config),
        SceneKind::Pyramid { rows } => meru_pyramid::meru_pyramid(*rows, config),
        SceneKind::Decompose { n } => pingala_decompose::pingala_decompose(*n, config),
        SceneKind::Reconstruct { symbols, direction } => {
            pingala_reconstruct::pingala_reconstruct(symbols.symbols(), *direction, config)
        }
        SceneKind::Prastaara { width } => prastaara_table::prastaara_table(*width, config),
        SceneKind::Snake { pattern, repeats } => {
            snake_crawl::snake_crawl(pattern, *repeats, config)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/scenes.rs"]
mod tests;
