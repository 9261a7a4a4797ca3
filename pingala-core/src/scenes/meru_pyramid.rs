use crate::{
    animation::ease::Ease,
    foundation::core::Vec2,
    foundation::error::PingalaResult,
    motion::layout::{MeruLayout, arrange_column, arrange_row},
    prosody::meru::generate,
    scenes::config::SceneConfig,
    timeline::dsl::{Play, TimelineBuilder},
    timeline::model::{Camera, Element, Timeline},
};

const CUBE_SIZE: f64 = 0.8;
const CUBE_GAP: f64 = 0.2;
const CUBE_FILL_OPACITY: f64 = 0.2;
const LABEL_SIZE: f64 = 36.0;
const GRID_LINES: usize = 11;
const GRID_HALF_SPAN: f64 = 5.0;
const GRID_OPACITY: f64 = 0.3;
/// Radians per second, as a turntable rate.
const DRIFT_RATE: f64 = 0.15;

/// Element id of the cube for entry `(n, k)`.
pub fn cube_id(n: usize, k: usize) -> String {
    format!("cube-{n}-{k}")
}

/// Element id of the number on cube `(n, k)`.
pub fn cube_label_id(n: usize, k: usize) -> String {
    format!("cube-label-{n}-{k}")
}

/// The Meru Prastaara as a pyramid of glass cubes on a glowing grid.
///
/// The camera tilts over the table and drifts round it for the whole scene while the cubes
/// rise out of the centre one after another.
#[tracing::instrument(skip(config))]
pub fn meru_pyramid(rows: usize, config: &SceneConfig) -> PingalaResult<Timeline> {
    let triangle = generate(rows)?;
    let layout = MeruLayout::blocks(rows, CUBE_SIZE, CUBE_GAP);
    let positions = layout.positions(&triangle);
    let theme = &config.theme;

    let mut b = TimelineBuilder::new(format!("meru_pyramid_{rows}"), config);
    b.set_camera_orientation(Camera::oriented(70.0, -45.0));
    b.begin_ambient_rotation(DRIFT_RATE.to_degrees());

    let spacing = 2.0 * GRID_HALF_SPAN / ((GRID_LINES - 1) as f64);
    for (i, p) in arrange_row(GRID_LINES, spacing).into_iter().enumerate() {
        b.add(
            Element::line(
                format!("grid-x-{i}"),
                Vec2::new(p.x, -GRID_HALF_SPAN),
                Vec2::new(p.x, GRID_HALF_SPAN),
                false,
                theme.gold,
            )
            .with_opacity(GRID_OPACITY),
        )?;
    }
    for (i, p) in arrange_column(GRID_LINES, spacing).into_iter().enumerate() {
        b.add(
            Element::line(
                format!("grid-y-{i}"),
                Vec2::new(-GRID_HALF_SPAN, p.y),
                Vec2::new(GRID_HALF_SPAN, p.y),
                false,
                theme.gold,
            )
            .with_opacity(GRID_OPACITY),
        )?;
    }

    let mut groups = Vec::new();
    for (n, row) in triangle.rows().iter().enumerate() {
        for (k, value) in row.iter().enumerate() {
            let at = positions[n][k];
            b.declare(
                Element::block(cube_id(n, k), CUBE_SIZE, CUBE_SIZE, at, theme.glow)
                    .with_opacity(CUBE_FILL_OPACITY)
                    .with_z(1),
            )?;
            b.declare(
                Element::text(cube_label_id(n, k), value.to_string(), LABEL_SIZE, at, theme.gold)
                    .with_z(2),
            )?;
            // arrive at `at` from the table centre
            groups.push([
                Play::fade_in(cube_id(n, k), at),
                Play::fade_in(cube_label_id(n, k), at),
            ]);
        }
    }
    b.lagged_groups(4.0, 0.1, Ease::Smooth, groups)?;
    b.wait(5.0)?;

    b.build()
}
