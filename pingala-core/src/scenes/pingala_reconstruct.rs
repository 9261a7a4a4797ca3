use crate::{
    animation::ease::Ease,
    foundation::core::{Rgba8, Vec2},
    foundation::error::{PingalaError, PingalaResult},
    motion::layout::arrange_row,
    prosody::pingala::{Direction, Symbol, reconstruct_checked, reconstruct_trace},
    scenes::{DOWN, UP, config::SceneConfig},
    timeline::dsl::{Play, TimelineBuilder},
    timeline::model::{Camera, Element, Timeline},
};

const LETTER_SIZE: f64 = 96.0;
const LETTER_SPACING: f64 = 1.6;
const LETTER_Y: f64 = 1.0;
const COUNTER_AT: Vec2 = Vec2::new(0.0, -1.8);
const SCANNER_SIZE: f64 = 1.2;
const FOCUS_SCALE: f64 = 1.2;

fn letter_id(i: usize) -> String {
    format!("letter-{i}")
}

/// Reverse Pingala conversion: a scanner walks the pattern in `direction`, and for each
/// symbol the accumulator doubles (`L`) or doubles and drops one (`G`).
#[tracing::instrument(skip(config))]
pub fn pingala_reconstruct(
    symbols: &[Symbol],
    direction: Direction,
    config: &SceneConfig,
) -> PingalaResult<Timeline> {
    if symbols.is_empty() {
        return Err(PingalaError::invalid_argument(
            "reconstruction needs at least one symbol",
        ));
    }
    reconstruct_checked(symbols, direction)?;
    let theme = &config.theme;
    let trace = reconstruct_trace(symbols, direction);
    let slots: Vec<Vec2> = arrange_row(symbols.len(), LETTER_SPACING)
        .into_iter()
        .map(|p| p + UP * LETTER_Y)
        .collect();

    let mut b = TimelineBuilder::new("pingala_reconstruct", config);
    b.set_camera_orientation(Camera::oriented(60.0, -45.0));

    b.declare(
        Element::text("title", "Pratiloma", 44.0, Vec2::new(-4.5, 3.4), theme.cyan).fixed(),
    )?;
    b.declare(
        Element::line(
            "underline",
            Vec2::new(-6.0, 3.0),
            Vec2::new(-3.0, 3.0),
            false,
            theme.cyan,
        )
        .fixed(),
    )?;
    b.play(1.0, [Play::fade_in("title", DOWN * 0.5)])?;
    b.play(0.5, [Play::create("underline")])?;
    b.play(0.6, [Play::flash("underline", theme.cyan)])?;

    for (i, (symbol, at)) in symbols.iter().zip(&slots).enumerate() {
        b.declare(Element::text(letter_id(i), symbol.to_string(), LETTER_SIZE, *at, theme.text))?;
    }
    b.play(2.0, (0..symbols.len()).map(|i| Play::fade_in(letter_id(i), UP)))?;
    b.wait(1.0)?;

    b.declare(Element::counter("accumulator", 1.0, 140.0, COUNTER_AT, theme.gold))?;
    b.play(1.0, [Play::fade_in("accumulator", Vec2::ZERO)])?;

    let first = trace.first().map_or(0, |s| s.index);
    b.declare(
        Element::block("scanner", SCANNER_SIZE, SCANNER_SIZE * 1.4, slots[first], theme.cyan)
            .with_opacity(0.25)
            .with_z(-1),
    )?;
    b.play(1.0, [Play::create("scanner")])?;
    b.wait(0.5)?;

    for (n, step) in trace.iter().enumerate() {
        let letter = letter_id(step.index);
        let op = format!("op-{n}");
        b.move_camera(1.0, Ease::Smooth, Camera::oriented(65.0, -45.0 + (n as f64) * 5.0))?;
        b.play(0.8, [Play::move_to("scanner", slots[step.index])])?;
        b.play(
            0.3,
            [
                Play::set_color(letter.clone(), theme.cyan),
                Play::scale_by(letter.clone(), FOCUS_SCALE),
            ],
        )?;

        let (label, color): (&str, Rgba8) = match step.symbol {
            Symbol::L => ("×2", theme.double),
            Symbol::G => ("×2 − 1", theme.double_minus_one),
        };
        b.declare(Element::text(
            op.clone(),
            label,
            54.0,
            slots[step.index] + UP * 1.3,
            color,
        ))?;
        b.play(0.5, [Play::fade_in(op.clone(), UP * 0.5)])?;
        b.play(
            0.8,
            [
                Play::set_value("accumulator", step.after as f64),
                Play::set_color("accumulator", theme.text),
                Play::flash("accumulator", theme.gold),
            ],
        )?;
        b.play(
            0.4,
            [
                Play::set_color(letter.clone(), theme.text),
                Play::scale_by(letter, 1.0 / FOCUS_SCALE),
                Play::fade_out(op, UP * 0.5),
                Play::set_color("accumulator", theme.gold),
            ],
        )?;
        b.wait(0.5)?;
    }

    b.move_camera(2.0, Ease::Smooth, Camera::oriented(45.0, -90.0).with_zoom(0.8))?;
    b.declare(Element::block("result-box", 3.2, 1.8, COUNTER_AT, theme.gold))?;
    b.declare(
        Element::block("result-glow", 3.4, 2.0, COUNTER_AT, theme.gold)
            .with_opacity(0.5)
            .with_z(-1),
    )?;
    b.play(1.0, [Play::create("result-box"), Play::fade_in("result-glow", Vec2::ZERO)])?;
    b.wait(3.0)?;

    b.build()
}
