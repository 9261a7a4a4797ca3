use std::f64::consts::TAU;

use crate::{
    animation::anim::{InterpMode, Keyframe, Keyframes},
    animation::ease::Ease,
    foundation::core::{FrameIndex, Transform2D, Vec2},
    foundation::error::{PingalaError, PingalaResult},
    motion::layout::arrange_row,
    motion::particles::{ParticleField, ScatterBounds},
    motion::snake::SnakeParams,
    prosody::pingala::{Symbol, WeightSequence},
    scenes::{DOWN, LEFT, UP, config::SceneConfig},
    timeline::dsl::{Play, TimelineBuilder},
    timeline::model::{Element, Timeline},
};

const PARTICLES: usize = 25;
const CRAWL_SECS: f64 = 6.0;

/// Element id of body segment `i`.
pub fn segment_id(i: usize) -> String {
    format!("segment-{i}")
}

fn marker(symbol: Symbol) -> &'static str {
    match symbol {
        Symbol::L => "|",
        Symbol::G => "S",
    }
}

/// Per-frame pose track of segment `index` while the phase runs from `from` to `to` over
/// `frames` frames.
fn crawl_track(
    params: &SnakeParams,
    index: usize,
    from: f64,
    to: f64,
    frames: u64,
) -> Keyframes<Transform2D> {
    let frames = frames.max(1);
    let keys = (0..=frames)
        .map(|f| {
            let phase = from + (to - from) * (f as f64) / (frames as f64);
            Keyframe {
                frame: FrameIndex(f),
                value: params.segment_pose(index, phase).to_transform(),
                ease: Ease::Linear,
            }
        })
        .collect();
    Keyframes {
        keys,
        mode: InterpMode::Linear,
    }
}

/// A metre pattern riding a travelling sine wave: the pattern is introduced, repeated into a
/// body, and crawls two full wavelengths while dust drifts past.
#[tracing::instrument(skip(pattern, config), fields(pattern = %pattern))]
pub fn snake_crawl(
    pattern: &WeightSequence,
    repeats: usize,
    config: &SceneConfig,
) -> PingalaResult<Timeline> {
    if pattern.is_empty() || repeats == 0 {
        return Err(PingalaError::invalid_argument(
            "snake needs a non-empty pattern and at least one repeat",
        ));
    }
    let theme = &config.theme;
    let params = SnakeParams::default();
    let body: Vec<Symbol> = pattern
        .symbols()
        .iter()
        .copied()
        .cycle()
        .take(pattern.len() * repeats)
        .collect();

    let mut b = TimelineBuilder::new("snake_crawl", config);

    // intro: one period of the metre
    let demo_slots = arrange_row(pattern.len(), 1.4);
    let mut demo = Vec::with_capacity(pattern.len());
    for (i, (&symbol, at)) in pattern.symbols().iter().zip(&demo_slots).enumerate() {
        let id = format!("demo-{i}");
        b.declare(Element::text(id.clone(), marker(symbol), 60.0, *at, theme.orange))?;
        demo.push(Play::fade_in(id, UP));
    }
    let label = pattern
        .symbols()
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join("   -   ");
    b.declare(Element::text("demo-label", label, 36.0, DOWN * 1.0, theme.orange))?;
    b.lagged(2.0, 0.2, Ease::Smooth, demo)?;
    b.play(1.0, [Play::write("demo-label")])?;
    b.wait(1.0)?;
    b.play(
        1.0,
        (0..pattern.len())
            .map(|i| Play::fade_out(format!("demo-{i}"), Vec2::ZERO))
            .chain([Play::fade_out("demo-label", Vec2::ZERO)]),
    )?;

    // assembly
    let slots = arrange_row(body.len(), params.spacing);
    for (i, (&symbol, at)) in body.iter().zip(&slots).enumerate() {
        b.declare(Element::text(segment_id(i), marker(symbol), 40.0, *at, theme.gold).with_z(1))?;
    }
    b.lagged(
        3.0,
        0.1,
        Ease::Smooth,
        (0..body.len()).map(|i| Play::fade_in(segment_id(i), Vec2::ZERO)),
    )?;
    b.wait(1.0)?;

    b.declare(
        Element::path("guide", params.path_points(-7.0, 7.0, 141), theme.glow).with_opacity(0.5),
    )?;
    let settle = (0..body.len()).flat_map(|i| {
        let pose = params.segment_pose(i, 0.0);
        [
            Play::move_to(segment_id(i), pose.position),
            Play::rotate_to(segment_id(i), pose.angle_rad),
        ]
    });
    b.play(1.0, settle.chain([Play::create("guide")]))?;

    let frames = b.span_frames(CRAWL_SECS);
    b.play_with(
        CRAWL_SECS,
        Ease::Linear,
        (0..body.len()).map(|i| Play::follow(segment_id(i), crawl_track(&params, i, 0.0, -TAU, frames))),
    )?;

    let field = ParticleField::scatter(
        PARTICLES,
        ScatterBounds {
            min: Vec2::new(-5.0, -1.0),
            max: Vec2::new(5.0, 1.0),
            radius: (0.05, 0.05),
            opacity: (1.0, 1.0),
        },
        config.seed,
    )?;
    for (i, p) in field.particles.iter().enumerate() {
        b.declare(
            Element::dot(format!("dust-{i}"), p.radius, p.position, theme.orange)
                .with_opacity(p.opacity),
        )?;
    }
    b.play(1.0, (0..field.len()).map(|i| Play::fade_in(format!("dust-{i}"), Vec2::ZERO)))?;

    let frames = b.span_frames(CRAWL_SECS);
    let crawl = (0..body.len())
        .map(|i| Play::follow(segment_id(i), crawl_track(&params, i, -TAU, -2.0 * TAU, frames)));
    let drift = (0..field.len()).flat_map(|i| {
        let id = format!("dust-{i}");
        [Play::shift(id.clone(), LEFT * 3.0), Play::set_opacity(id, 0.0)]
    });
    b.play_with(CRAWL_SECS, Ease::Linear, crawl.chain(drift))?;
    b.wait(2.0)?;

    b.build()
}
