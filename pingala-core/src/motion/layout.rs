use crate::{foundation::core::Vec2, prosody::meru::Triangle};

/// Centred horizontal positions for `count` items spaced `spacing` apart, on `y = 0`.
pub fn arrange_row(count: usize, spacing: f64) -> Vec<Vec2> {
    let mid = (count.saturating_sub(1) as f64) / 2.0;
    (0..count)
        .map(|i| Vec2::new(((i as f64) - mid) * spacing, 0.0))
        .collect()
}

/// Centred vertical positions for `count` items, top first, on `x = 0`.
pub fn arrange_column(count: usize, spacing: f64) -> Vec<Vec2> {
    arrange_row(count, spacing)
        .into_iter()
        .map(|p| Vec2::new(0.0, -p.x))
        .collect()
}

/// Placement of triangle entries: rows step down by `y_step` from `top`, each row centred on
/// `x = 0` with entries `x_step` apart.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MeruLayout {
    /// Horizontal distance between neighbours in a row.
    pub x_step: f64,
    /// Vertical distance between rows.
    pub y_step: f64,
    /// `y` of row 0.
    pub top: f64,
}

impl MeruLayout {
    /// Cube pyramid: `cell`-sized blocks separated by `gap`, bottom row resting near `y = -3`.
    pub fn blocks(rows: usize, cell: f64, gap: f64) -> Self {
        let step = cell + gap;
        Self {
            x_step: step,
            y_step: step,
            top: (rows as f64) * step - 3.0,
        }
    }

    /// Centre of entry `(n, k)`.
    pub fn position(&self, n: usize, k: usize) -> Vec2 {
        Vec2::new(
            ((k as f64) - (n as f64) / 2.0) * self.x_step,
            self.top - (n as f64) * self.y_step,
        )
    }

    /// Centres of every entry, row-major.
    pub fn positions(&self, triangle: &Triangle) -> Vec<Vec<Vec2>> {
        triangle
            .rows()
            .iter()
            .enumerate()
            .map(|(n, row)| (0..row.len()).map(|k| self.position(n, k)).collect())
            .collect()
    }
}

impl Default for MeruLayout {
    fn default() -> Self {
        Self {
            x_step: 0.6,
            y_step: 0.7,
            top: 2.0,
        }
    }
}

/// Parent-to-child links of the triangle: each entry `(n - 1, j)` feeds `(n, j)` and
/// `(n, j + 1)`. Returned as `((parent_row, parent_col), (child_row, child_col))`.
pub fn meru_edges(triangle: &Triangle) -> Vec<((usize, usize), (usize, usize))> {
    let mut out = Vec::new();
    for n in 1..triangle.len() {
        for j in 0..n {
            out.push(((n - 1, j), (n, j)));
            out.push(((n - 1, j), (n, j + 1)));
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/motion/layout.rs"]
mod tests;
