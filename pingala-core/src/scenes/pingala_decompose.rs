use crate::{
    animation::ease::Ease,
    foundation::core::Vec2,
    foundation::error::PingalaResult,
    motion::layout::arrange_row,
    prosody::pingala::{Parity, decompose},
    scenes::{DOWN, LEFT, config::SceneConfig},
    timeline::dsl::{Play, TimelineBuilder},
    timeline::model::{Camera, Element, Timeline},
};

const NUMBER_ID: &str = "number";
const NUMBER_SIZE: f64 = 120.0;
const SYMBOL_SIZE: f64 = 90.0;
const SYMBOL_SPACING: f64 = 1.2;
const PULSE: f64 = 1.1;

/// Forward Pingala conversion: the number halves step by step, each step showing its parity
/// and arithmetic and dropping a laghu or guru into a row below; the row is finally
/// gathered to the centre.
#[tracing::instrument(skip(config))]
pub fn pingala_decompose(n: u64, config: &SceneConfig) -> PingalaResult<Timeline> {
    let steps = decompose(n)?;
    let theme = &config.theme;
    let number_at = Vec2::ZERO;

    let mut b = TimelineBuilder::new(format!("pingala_decompose_{n}"), config);
    b.set_camera_orientation(Camera::oriented(45.0, -20.0));

    b.declare(
        Element::counter(NUMBER_ID, n as f64, NUMBER_SIZE, number_at, theme.text).fixed(),
    )?;
    b.play(1.5, [Play::write(NUMBER_ID)])?;
    b.wait(0.5)?;

    let last = steps.len().saturating_sub(1);
    for (i, step) in steps.iter().enumerate() {
        b.move_camera(
            1.2,
            Ease::Smooth,
            Camera::oriented(45.0, -(20.0 + (i as f64) * 15.0)),
        )?;

        let color = match step.parity {
            Parity::Even => theme.even,
            Parity::Odd => theme.odd,
        };
        let label = format!("parity-{i}");
        let formula = format!("formula-{i}");
        let symbol = format!("symbol-{i}");
        let label_at = Vec2::new(2.0, 2.5);

        b.declare(Element::text(label.clone(), step.parity.to_string(), 40.0, label_at, color).fixed())?;
        b.declare(
            Element::text(
                formula.clone(),
                step.formula(),
                30.0,
                label_at + DOWN * 0.6,
                theme.text,
            )
            .fixed(),
        )?;
        b.play(
            0.8,
            [
                Play::fade_in(label.clone(), LEFT),
                Play::write(formula.clone()),
                Play::set_color(NUMBER_ID, color),
                Play::scale_by(NUMBER_ID, PULSE),
            ],
        )?;

        // starts on top of the number and drops into the result row
        let target = Vec2::new(-(2.0 - (i as f64) * SYMBOL_SPACING), -2.0);
        b.declare(
            Element::text(symbol.clone(), step.symbol.to_string(), SYMBOL_SIZE, number_at, theme.gold)
                .with_z(1),
        )?;
        b.play(
            1.0,
            [
                Play::fade_in(symbol.clone(), Vec2::ZERO),
                Play::move_to(symbol.clone(), target),
                Play::flash(symbol, theme.gold),
            ],
        )?;

        if i < last {
            b.play(
                0.8,
                [
                    Play::set_value(NUMBER_ID, step.next as f64),
                    Play::set_color(NUMBER_ID, theme.text),
                    Play::scale_by(NUMBER_ID, 1.0 / PULSE),
                    Play::fade_out(label, Vec2::ZERO),
                    Play::fade_out(formula, Vec2::ZERO),
                ],
            )?;
        } else {
            b.play(
                1.0,
                [
                    Play::fade_out(label, Vec2::ZERO),
                    Play::fade_out(formula, Vec2::ZERO),
                    Play::fade_out(NUMBER_ID, Vec2::ZERO),
                ],
            )?;
        }
    }

    if steps.is_empty() {
        // 1 has no halving steps; it is its own (empty) pattern
        b.play(1.0, [Play::indicate(NUMBER_ID, theme.gold, 1.2)])?;
        b.wait(2.0)?;
        return b.build();
    }

    b.move_camera(1.5, Ease::Smooth, Camera::default())?;
    let row = arrange_row(steps.len(), SYMBOL_SPACING * 1.5);
    b.play(
        2.0,
        row.iter().enumerate().flat_map(|(i, at)| {
            let id = format!("symbol-{i}");
            [Play::move_to(id.clone(), *at), Play::scale_by(id, 1.5)]
        }),
    )?;
    b.play(
        1.5,
        (0..steps.len()).flat_map(|i| {
            let id = format!("symbol-{i}");
            [
                Play::indicate(id.clone(), theme.gold, 1.2),
                Play::set_color(id, theme.text),
            ]
        }),
    )?;
    b.play(
        1.0,
        (0..steps.len()).map(|i| Play::set_color(format!("symbol-{i}"), theme.gold)),
    )?;
    b.wait(2.0)?;

    b.build()
}
