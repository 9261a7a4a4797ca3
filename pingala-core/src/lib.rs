//! Pingala is a library for Chandahshastra combinatorics and their presentation timelines.
//!
//! It covers three things:
//!
//! 1. **Prosody**: the Meru Prastaara (binomial triangle), Pingala's forward conversion of an
//!    integer into a laghu/guru pattern and its inverse, and the Prastaara enumeration of all
//!    patterns of one width.
//! 2. **Motion**: pure placement math for the scenes (triangle layout, row arrangement, the
//!    snake wave, seeded particle scatter).
//! 3. **Timeline**: a declarative animation model (`Timeline`), a choreography builder
//!    (`TimelineBuilder`) and a pure per-frame evaluator (`Evaluator`) whose snapshots a
//!    renderer can draw.
//!
//! Scene builders in [`build_scene`] combine all three.
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: generators, builders and the evaluator are pure for a given input and
//!   seed.
//! - **No rendering**: fonts and pixels belong to the consumer of [`Snapshot`].
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod animation;
mod foundation;
mod motion;
mod prosody;
mod scenes;
mod timeline;

pub use animation::anim::{InterpMode, Keyframe, Keyframes, Lerp};
pub use animation::ease::Ease;
pub use foundation::core::{
    Affine, Canvas, Fps, FrameIndex, FrameRange, Point, Rgba8, Transform2D, Vec2,
};
pub use foundation::error::{PingalaError, PingalaResult};
pub use foundation::math::Rng64;
pub use motion::layout::{MeruLayout, arrange_column, arrange_row, meru_edges};
pub use motion::particles::{Particle, ParticleField, ScatterBounds};
pub use motion::snake::{SegmentPose, SnakeParams};
pub use prosody::meru::{MAX_TRIANGLE_ROWS, Triangle, generate};
pub use prosody::pingala::{
    ConversionStep, Direction, Parity, ReconstructionStep, Symbol, WeightSequence, decompose,
    reconstruct, reconstruct_checked, reconstruct_trace, reconstruct_with, weight_sequence,
};
pub use prosody::prastaara::{MAX_PATTERN_WIDTH, MAX_TABLE_WIDTH, Prastaara, nashta, uddishta};
pub use scenes::config::{SceneConfig, Theme};
pub use scenes::meru_pyramid::{cube_id, cube_label_id, meru_pyramid};
pub use scenes::meru_reveal::{entry_id, meru_reveal};
pub use scenes::pingala_decompose::pingala_decompose;
pub use scenes::pingala_reconstruct::pingala_reconstruct;
pub use scenes::prastaara_table::{MAX_SCENE_WIDTH, cell_id, prastaara_table};
pub use scenes::snake_crawl::{segment_id, snake_crawl};
pub use scenes::{SceneKind, build_scene};
pub use timeline::dsl::{Play, TimelineBuilder};
pub use timeline::eval::{ElementSnapshot, Evaluator, Snapshot};
pub use timeline::model::{
    Action, AmbientRotation, Camera, CameraCue, CameraTrack, Cue, Element, ElementKind,
    ElementState, FontChoice, RevealStyle, Timeline,
};
