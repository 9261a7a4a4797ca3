use std::{fmt, str::FromStr};

use crate::foundation::error::{PingalaError, PingalaResult};

/// Syllable weight: laghu (short, 1 matra) or guru (long, 2 matras).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Symbol {
    /// Laghu, emitted by the halving step on even values.
    #[serde(rename = "L")]
    L,
    /// Guru, emitted by the `(n + 1) / 2` step on odd values.
    #[serde(rename = "G")]
    G,
}

impl Symbol {
    /// Metrical weight in matras.
    pub fn weight(self) -> u32 {
        match self {
            Self::L => 1,
            Self::G => 2,
        }
    }

    /// Single-letter name.
    pub fn as_char(self) -> char {
        match self {
            Self::L => 'L',
            Self::G => 'G',
        }
    }

    /// One reconstruction step applied to `acc`, clamping at `u64::MAX`.
    pub fn apply(self, acc: u64) -> u64 {
        match self {
            Self::L => acc.saturating_mul(2),
            // 2·acc − 1 as 2·(acc − 1) + 1 so 2^63 still lands on u64::MAX
            Self::G => acc.saturating_sub(1).saturating_mul(2).saturating_add(1),
        }
    }

    /// One reconstruction step, `None` when the result does not fit a `u64`.
    pub fn checked_apply(self, acc: u64) -> Option<u64> {
        match self {
            Self::L => acc.checked_mul(2),
            Self::G => acc.checked_sub(1)?.checked_mul(2)?.checked_add(1),
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            'L' | 'l' | '|' => Some(Self::L),
            'G' | 'g' | 'S' => Some(Self::G),
            _ => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
/// Parity of the value entering a conversion step.
pub enum Parity {
    /// Divisible by two.
    Even,
    /// Not divisible by two.
    Odd,
}

impl Parity {
    /// Parity of `n`.
    pub fn of(n: u64) -> Self {
        if n % 2 == 0 { Self::Even } else { Self::Odd }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Even => f.write_str("EVEN"),
            Self::Odd => f.write_str("ODD"),
        }
    }
}

/// One halving step of the forward trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ConversionStep {
    /// Value entering the step.
    pub current: u64,
    /// Parity of `current`.
    pub parity: Parity,
    /// `current / 2` when even, `(current + 1) / 2` when odd.
    pub next: u64,
    /// `L` when even, `G` when odd.
    pub symbol: Symbol,
}

impl ConversionStep {
    fn from_value(current: u64) -> Self {
        match Parity::of(current) {
            Parity::Even => Self {
                current,
                parity: Parity::Even,
                next: current / 2,
                symbol: Symbol::L,
            },
            // (n + 1) / 2 without overflowing at u64::MAX
            Parity::Odd => Self {
                current,
                parity: Parity::Odd,
                next: current / 2 + 1,
                symbol: Symbol::G,
            },
        }
    }

    /// Human-readable arithmetic, e.g. `22 / 2` or `(11+1) / 2`.
    pub fn formula(&self) -> String {
        match self.parity {
            Parity::Even => format!("{} / 2", self.current),
            Parity::Odd => format!("({}+1) / 2", self.current),
        }
    }
}

/// Order in which [`reconstruct_with`] consumes a symbol sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Rightmost symbol first. This is the inverse of [`decompose`].
    #[default]
    RightToLeft,
    /// Leftmost symbol first. Does not invert [`decompose`] in general.
    LeftToRight,
}

/// Ordered laghu/guru pattern.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct WeightSequence(Vec<Symbol>);

impl WeightSequence {
    /// Wrap an explicit symbol list.
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self(symbols)
    }

    /// Symbols emitted by a forward trace, in trace order.
    pub fn from_steps(steps: &[ConversionStep]) -> Self {
        Self(steps.iter().map(|s| s.symbol).collect())
    }

    /// Borrow the symbols.
    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    /// Number of syllables.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` for the empty pattern (the pattern of 1).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total weight in matras.
    pub fn matras(&self) -> u32 {
        self.0.iter().map(|s| s.weight()).sum()
    }

    /// Number of laghu syllables.
    pub fn laghu_count(&self) -> usize {
        self.0.iter().filter(|s| **s == Symbol::L).count()
    }

    /// Append `G` until the pattern is `width` long. Padding does not change the value.
    pub fn padded(mut self, width: usize) -> Self {
        if self.0.len() < width {
            self.0.resize(width, Symbol::G);
        }
        self
    }

    /// Integer this pattern encodes; see [`reconstruct`].
    pub fn value(&self) -> u64 {
        reconstruct(&self.0)
    }
}

impl From<Vec<Symbol>> for WeightSequence {
    fn from(value: Vec<Symbol>) -> Self {
        Self(value)
    }
}

impl fmt::Display for WeightSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, s) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{s}")?;
        }
        Ok(())
    }
}

impl FromStr for WeightSequence {
    type Err = PingalaError;

    /// Accepts `L`/`G` (either case) or the `|`/`S` marks, separated by nothing, whitespace,
    /// `-` or `,`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut out = Vec::new();
        for c in s.chars() {
            if c.is_whitespace() || c == '-' || c == ',' {
                continue;
            }
            let sym = Symbol::from_char(c).ok_or_else(|| {
                PingalaError::invalid_argument(format!(
                    "'{c}' is not a laghu/guru symbol in '{s}'"
                ))
            })?;
            out.push(sym);
        }
        Ok(Self(out))
    }
}

/// Forward trace of `n` down to 1.
///
/// Empty for `n == 1`; otherwise one step per halving, the last step being the one whose
/// `next` is 1.
#[tracing::instrument]
pub fn decompose(n: u64) -> PingalaResult<Vec<ConversionStep>> {
    if n == 0 {
        return Err(PingalaError::invalid_argument(
            "pingala conversion requires n >= 1",
        ));
    }

    let mut steps = Vec::new();
    let mut current = n;
    while current != 1 {
        let step = ConversionStep::from_value(current);
        tracing::trace!(current, next = step.next, symbol = %step.symbol, "halving step");
        current = step.next;
        steps.push(step);
    }
    Ok(steps)
}

/// Weight sequence of `n`: the symbols of [`decompose`].
pub fn weight_sequence(n: u64) -> PingalaResult<WeightSequence> {
    decompose(n).map(|steps| WeightSequence::from_steps(&steps))
}

/// Rebuild an integer from a pattern, rightmost symbol first.
///
/// Starts at 1; `L` doubles, `G` doubles and subtracts one. Total over any finite sequence.
/// Accumulators past `u64::MAX` saturate, which only happens for patterns longer than 63
/// symbols; use [`reconstruct_checked`] to reject those instead.
pub fn reconstruct(symbols: &[Symbol]) -> u64 {
    reconstruct_with(symbols, Direction::RightToLeft)
}

/// [`reconstruct`] with an explicit traversal order.
pub fn reconstruct_with(symbols: &[Symbol], direction: Direction) -> u64 {
    match direction {
        Direction::RightToLeft => symbols.iter().rev().fold(1, |acc, s| s.apply(acc)),
        Direction::LeftToRight => symbols.iter().fold(1, |acc, s| s.apply(acc)),
    }
}

/// [`reconstruct_with`] that fails with [`PingalaError::InvalidArgument`] when the value
/// does not fit a `u64`.
pub fn reconstruct_checked(symbols: &[Symbol], direction: Direction) -> PingalaResult<u64> {
    let step = |acc: u64, s: &Symbol| {
        s.checked_apply(acc).ok_or_else(|| {
            PingalaError::invalid_argument(format!(
                "pattern of {} symbols encodes a value past u64::MAX",
                symbols.len()
            ))
        })
    };
    match direction {
        Direction::RightToLeft => symbols.iter().rev().try_fold(1, step),
        Direction::LeftToRight => symbols.iter().try_fold(1, step),
    }
}

/// One symbol consumed during reconstruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ReconstructionStep {
    /// Position of the symbol in the input pattern.
    pub index: usize,
    /// The symbol.
    pub symbol: Symbol,
    /// Accumulator before the step.
    pub before: u64,
    /// Accumulator after the step.
    pub after: u64,
}

/// Per-symbol trace of [`reconstruct_with`], in processing order.
pub fn reconstruct_trace(symbols: &[Symbol], direction: Direction) -> Vec<ReconstructionStep> {
    let order: Box<dyn Iterator<Item = (usize, &Symbol)>> = match direction {
        Direction::RightToLeft => Box::new(symbols.iter().enumerate().rev()),
        Direction::LeftToRight => Box::new(symbols.iter().enumerate()),
    };

    let mut acc = 1u64;
    order
        .map(|(index, &symbol)| {
            let before = acc;
            acc = symbol.apply(acc);
            ReconstructionStep {
                index,
                symbol,
                before,
                after: acc,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/prosody/pingala.rs"]
mod tests;
