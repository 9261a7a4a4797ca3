use crate::{
    foundation::error::{PingalaError, PingalaResult},
    prosody::pingala::{Symbol, WeightSequence, reconstruct, weight_sequence},
};

/// Widest table [`Prastaara::build`] will materialize (`2^16` rows).
pub const MAX_TABLE_WIDTH: usize = 16;

/// Widest pattern [`nashta`] can address with a `u64` row number.
pub const MAX_PATTERN_WIDTH: usize = 63;

/// Pattern found at 1-based `row` of the width-`width` table.
///
/// The forward trace of `row`, padded on the right with `G` to `width` syllables.
pub fn nashta(row: u64, width: usize) -> PingalaResult<WeightSequence> {
    if width == 0 || width > MAX_PATTERN_WIDTH {
        return Err(PingalaError::invalid_argument(format!(
            "pattern width must be in 1..={MAX_PATTERN_WIDTH}, got {width}"
        )));
    }
    let rows = 1u64 << width;
    if row == 0 || row > rows {
        return Err(PingalaError::invalid_argument(format!(
            "row must be in 1..={rows} for width {width}, got {row}"
        )));
    }
    Ok(weight_sequence(row)?.padded(width))
}

/// 1-based row at which `pattern` sits in its table.
pub fn uddishta(pattern: &WeightSequence) -> u64 {
    reconstruct(pattern.symbols())
}

/// Full table of the `2^width` patterns of one width, in canonical order.
///
/// Row 1 is all guru and the last row is all laghu.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "PrastaaraRepr")]
pub struct Prastaara {
    width: usize,
    rows: Vec<WeightSequence>,
}

#[derive(serde::Deserialize)]
struct PrastaaraRepr {
    width: usize,
    rows: Vec<WeightSequence>,
}

impl TryFrom<PrastaaraRepr> for Prastaara {
    type Error = PingalaError;

    fn try_from(raw: PrastaaraRepr) -> Result<Self, Self::Error> {
        let table = Self::build(raw.width)?;
        if table.rows != raw.rows {
            return Err(PingalaError::validation(format!(
                "rows are not the canonical width-{} prastaara",
                raw.width
            )));
        }
        Ok(table)
    }
}

impl Prastaara {
    /// Enumerate every row via [`nashta`].
    #[tracing::instrument]
    pub fn build(width: usize) -> PingalaResult<Self> {
        check_table_width(width)?;
        let rows = (1..=(1u64 << width))
            .map(|row| nashta(row, width))
            .collect::<PingalaResult<Vec<_>>>()?;
        Ok(Self { width, rows })
    }

    /// Build by repeated doubling from the width-1 table `[G], [L]`.
    pub fn by_doubling(width: usize) -> PingalaResult<Self> {
        check_table_width(width)?;
        let mut table = Self {
            width: 1,
            rows: vec![
                WeightSequence::new(vec![Symbol::G]),
                WeightSequence::new(vec![Symbol::L]),
            ],
        };
        while table.width < width {
            table = table.expand()?;
        }
        Ok(table)
    }

    /// Next-wider table: the current rows stacked twice, the new rightmost column `G` for the
    /// top copy and `L` for the bottom copy.
    pub fn expand(&self) -> PingalaResult<Self> {
        check_table_width(self.width + 1)?;
        let suffixed = |sym: Symbol| {
            self.rows.iter().map(move |r| {
                let mut symbols = r.symbols().to_vec();
                symbols.push(sym);
                WeightSequence::new(symbols)
            })
        };
        let rows = suffixed(Symbol::G).chain(suffixed(Symbol::L)).collect();
        Ok(Self {
            width: self.width + 1,
            rows,
        })
    }

    /// Pattern width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Rows in canonical order (index 0 is row 1).
    pub fn rows(&self) -> &[WeightSequence] {
        &self.rows
    }

    /// Column `k` top to bottom.
    pub fn column(&self, k: usize) -> Option<Vec<Symbol>> {
        if k >= self.width {
            return None;
        }
        Some(self.rows.iter().map(|r| r.symbols()[k]).collect())
    }

    /// Number of rows with exactly `k` laghus, for `k` in `0..=width`.
    ///
    /// Matches row `width` of the Meru Prastaara.
    pub fn laghu_counts(&self) -> Vec<u64> {
        let mut counts = vec![0u64; self.width + 1];
        for r in &self.rows {
            counts[r.laghu_count()] += 1;
        }
        counts
    }
}

fn check_table_width(width: usize) -> PingalaResult<()> {
    if width == 0 || width > MAX_TABLE_WIDTH {
        return Err(PingalaError::invalid_argument(format!(
            "table width must be in 1..={MAX_TABLE_WIDTH}, got {width}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/prosody/prastaara.rs"]
mod tests;
