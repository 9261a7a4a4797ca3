use crate::{
    animation::ease::Ease,
    foundation::core::Vec2,
    foundation::error::PingalaResult,
    motion::layout::{MeruLayout, meru_edges},
    prosody::meru::generate,
    scenes::{UP, config::SceneConfig},
    timeline::dsl::{Play, TimelineBuilder},
    timeline::model::{Element, Timeline},
};

const NUMBER_SIZE: f64 = 28.0;
/// Half the glyph height; links run from a parent's bottom to a child's top.
const LINK_INSET: f64 = 0.15;

/// Element id of triangle entry `(n, k)`.
pub fn entry_id(n: usize, k: usize) -> String {
    format!("meru-{n}-{k}")
}

/// Blueprint reveal of the Meru Prastaara: links drawn first, then numbers row by row, then a
/// brief dim-and-restore glow.
#[tracing::instrument(skip(config))]
pub fn meru_reveal(rows: usize, config: &SceneConfig) -> PingalaResult<Timeline> {
    let triangle = generate(rows)?;
    let layout = MeruLayout::default();
    let positions = layout.positions(&triangle);
    let theme = &config.theme;

    let mut b = TimelineBuilder::new(format!("meru_reveal_{rows}"), config);

    b.declare(
        Element::text("title", "MERU PRASTAARA", 40.0, Vec2::new(0.0, 3.4), theme.gold).fixed(),
    )?;
    b.play(1.0, [Play::write("title")])?;

    let mut links = Vec::new();
    for (i, ((pn, pk), (cn, ck))) in meru_edges(&triangle).into_iter().enumerate() {
        let id = format!("link-{i}");
        let from = positions[pn][pk] - UP * LINK_INSET;
        let to = positions[cn][ck] + UP * LINK_INSET;
        b.declare(Element::line(id.clone(), from, to, true, theme.gold).with_opacity(0.6))?;
        links.push(Play::create(id));
    }
    if !links.is_empty() {
        b.play_with(2.5, Ease::Smooth, links)?;
    }

    for (n, row) in triangle.rows().iter().enumerate() {
        let mut writes = Vec::with_capacity(row.len());
        for (k, value) in row.iter().enumerate() {
            let id = entry_id(n, k);
            b.declare(
                Element::text(id.clone(), value.to_string(), NUMBER_SIZE, positions[n][k], theme.glow)
                    .with_z(1),
            )?;
            writes.push(Play::write(id));
        }
        b.play(0.4, writes)?;
    }

    let all_entries = || {
        triangle
            .rows()
            .iter()
            .enumerate()
            .flat_map(|(n, row)| (0..row.len()).map(move |k| entry_id(n, k)))
    };
    b.play(0.5, all_entries().map(|id| Play::set_opacity(id, 0.6)))?;
    b.play(0.5, all_entries().map(|id| Play::set_opacity(id, 1.0)))?;
    b.wait(3.0)?;

    b.build()
}
