use crate::{
    animation::ease::Ease,
    foundation::core::{Rgba8, Vec2},
    foundation::error::{PingalaError, PingalaResult},
    prosody::pingala::Symbol,
    prosody::prastaara::Prastaara,
    scenes::{DOWN, UP, config::SceneConfig},
    timeline::dsl::{Play, TimelineBuilder},
    timeline::model::{Element, Timeline},
};

/// Widest table the scene lays out (64 rows).
pub const MAX_SCENE_WIDTH: usize = 6;

const TABLE_TOP: f64 = 3.0;
const TABLE_HEIGHT: f64 = 6.4;
const COLUMN_STEP: f64 = 0.8;

/// Element id of the cell at 0-based `row`, `col`.
pub fn cell_id(row: usize, col: usize) -> String {
    format!("cell-{row}-{col}")
}

struct Grid {
    width: usize,
    row_step: f64,
}

impl Grid {
    fn new(width: usize) -> Self {
        Self {
            width,
            row_step: TABLE_HEIGHT / (1usize << width) as f64,
        }
    }

    fn at(&self, row: usize, col: usize) -> Vec2 {
        let x = (col as f64 - (self.width as f64 - 1.0) / 2.0) * COLUMN_STEP;
        Vec2::new(x, TABLE_TOP - (row as f64) * self.row_step)
    }

    fn font_size(&self) -> f64 {
        (self.row_step * 60.0).clamp(10.0, 48.0)
    }
}

fn symbol_color(symbol: Symbol, config: &SceneConfig) -> Rgba8 {
    match symbol {
        Symbol::G => config.theme.gold,
        Symbol::L => config.theme.cyan,
    }
}

/// Builds the width-`width` Prastaara by column doubling: each step copies the table below
/// itself, then appends a guru column to the top half and a laghu column to the bottom half.
#[tracing::instrument(skip(config))]
pub fn prastaara_table(width: usize, config: &SceneConfig) -> PingalaResult<Timeline> {
    if width == 0 || width > MAX_SCENE_WIDTH {
        return Err(PingalaError::invalid_argument(format!(
            "scene table width must be in 1..={MAX_SCENE_WIDTH}, got {width}"
        )));
    }
    let table = Prastaara::by_doubling(width)?;
    let grid = Grid::new(width);
    let size = grid.font_size();
    let theme = &config.theme;

    let mut b = TimelineBuilder::new(format!("prastaara_table_{width}"), config);

    b.declare(Element::text("hud-width", "n = 1", 36.0, Vec2::new(5.2, 3.2), theme.text).fixed())?;
    b.declare(
        Element::text("hud-rows", "2^1 = 2", 36.0, Vec2::new(5.2, 2.5), theme.gold).fixed(),
    )?;
    b.play(1.0, [Play::write("hud-width"), Play::write("hud-rows")])?;

    // width-1 seed: G over L
    for (row, symbol) in [Symbol::G, Symbol::L].into_iter().enumerate() {
        b.declare(Element::text(
            cell_id(row, 0),
            symbol.to_string(),
            size,
            grid.at(row, 0),
            symbol_color(symbol, config),
        ))?;
    }
    b.play(1.0, [Play::fade_in(cell_id(0, 0), DOWN), Play::fade_in(cell_id(1, 0), UP)])?;
    b.wait(0.5)?;

    for w in 1..width {
        let half = 1usize << w;

        // copy of the current table slides into the lower half
        let mut copies = Vec::with_capacity(half * w);
        for row in 0..half {
            let source = &table.rows()[row].symbols()[..w];
            for (col, &symbol) in source.iter().enumerate() {
                let id = cell_id(row + half, col);
                b.declare(Element::text(
                    id.clone(),
                    symbol.to_string(),
                    size,
                    grid.at(row, col),
                    symbol_color(symbol, config),
                ))?;
                copies.push(Play::fade_in(id.clone(), Vec2::ZERO));
                copies.push(Play::move_to(id, grid.at(row + half, col)).with_ease(Ease::OutBack));
            }
        }
        b.play(1.2, copies)?;

        let mut column = Vec::with_capacity(2 * half);
        for row in 0..2 * half {
            let symbol = table.rows()[row].symbols()[w];
            let id = cell_id(row, w);
            b.declare(Element::text(
                id.clone(),
                symbol.to_string(),
                size,
                grid.at(row, w),
                symbol_color(symbol, config),
            ))?;
            let from = match symbol {
                Symbol::G => DOWN * 0.5,
                Symbol::L => UP * 0.5,
            };
            column.push(Play::fade_in(id, from));
        }
        b.lagged(1.5, 0.1, Ease::Smooth, column)?;

        let n = w + 1;
        b.play(
            0.6,
            [
                Play::set_text("hud-width", format!("n = {n}")),
                Play::set_text("hud-rows", format!("2^{n} = {}", 1u64 << n)),
                Play::indicate("hud-rows", theme.orange, 1.2),
            ],
        )?;
        b.wait(0.5)?;
    }

    let counts = table
        .laghu_counts()
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join("  ");
    b.declare(
        Element::text("laghu-counts", format!("laghu: {counts}"), 32.0, Vec2::new(0.0, -3.6), theme.gold)
            .fixed(),
    )?;
    b.play(1.0, [Play::fade_in("laghu-counts", UP * 0.3)])?;
    b.wait(3.0)?;

    b.build()
}
