use crate::foundation::error::{PingalaError, PingalaResult};

/// Most rows [`generate`] will build. Row 68 would hold `C(68, 34)`, which does not fit a `u64`.
pub const MAX_TRIANGLE_ROWS: usize = 68;

/// The Meru Prastaara: Pascal's triangle of pattern counts.
///
/// Row `i` holds `i + 1` entries; entry `(i, k)` counts the width-`i` patterns with exactly
/// `k` laghu syllables. Built once by [`generate`] and read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<Vec<u64>>", into = "Vec<Vec<u64>>")]
pub struct Triangle {
    rows: Vec<Vec<u64>>,
}

impl Triangle {
    /// All rows, top first.
    pub fn rows(&self) -> &[Vec<u64>] {
        &self.rows
    }

    /// Row `i`, if present.
    pub fn row(&self, i: usize) -> Option<&[u64]> {
        self.rows.get(i).map(Vec::as_slice)
    }

    /// Entry `(i, j)`, if present.
    pub fn get(&self, i: usize, j: usize) -> Option<u64> {
        self.rows.get(i).and_then(|r| r.get(j)).copied()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always `false` for a generated triangle; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Bottom row.
    pub fn last_row(&self) -> &[u64] {
        self.rows.last().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Sum of row `i` (`2^i`, the number of patterns of width `i`).
    ///
    /// `None` past the last row, and for rows 64 and up where `2^i` overflows.
    pub fn row_sum(&self, i: usize) -> Option<u64> {
        self.row(i)?
            .iter()
            .try_fold(0u64, |acc, &x| acc.checked_add(x))
    }

    /// Consume into the nested row vectors.
    pub fn into_rows(self) -> Vec<Vec<u64>> {
        self.rows
    }
}

impl TryFrom<Vec<Vec<u64>>> for Triangle {
    type Error = PingalaError;

    /// Accepts only the exact rows [`generate`] produces for that length.
    fn try_from(rows: Vec<Vec<u64>>) -> Result<Self, Self::Error> {
        let expected = generate(rows.len())?;
        if expected.rows != rows {
            return Err(PingalaError::validation(
                "rows do not form a meru prastaara",
            ));
        }
        Ok(expected)
    }
}

impl From<Triangle> for Vec<Vec<u64>> {
    fn from(value: Triangle) -> Self {
        value.rows
    }
}

/// Build a triangle with exactly `rows` rows.
///
/// Row 0 is `[1]`; every later row brackets the adjacent pairwise sums of the row above with
/// `1` on each side.
#[tracing::instrument]
pub fn generate(rows: usize) -> PingalaResult<Triangle> {
    if rows == 0 {
        return Err(PingalaError::invalid_argument(
            "triangle row count must be >= 1",
        ));
    }
    if rows > MAX_TRIANGLE_ROWS {
        return Err(PingalaError::invalid_argument(format!(
            "triangle row count must be <= {MAX_TRIANGLE_ROWS}, got {rows}"
        )));
    }

    let mut out: Vec<Vec<u64>> = Vec::with_capacity(rows);
    out.push(vec![1]);
    for i in 1..rows {
        let prev = &out[i - 1];
        let mut row = Vec::with_capacity(i + 1);
        row.push(1);
        for w in prev.windows(2) {
            let sum = w[0].checked_add(w[1]).ok_or_else(|| {
                PingalaError::invalid_argument(format!("row {i} overflows u64"))
            })?;
            row.push(sum);
        }
        row.push(1);
        out.push(row);
    }

    tracing::debug!(rows, last = ?out.last(), "generated meru prastaara");
    Ok(Triangle { rows: out })
}

#[cfg(test)]
#[path = "../../tests/unit/prosody/meru.rs"]
mod tests;
