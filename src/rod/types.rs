//! Price tables, results and plan reconstruction.

use crate::error::{Error, Result};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which dynamic-programming strategy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DpStrategy {
    /// Top-down recursion with a per-call cache.
    Memoized,
    /// Bottom-up iteration over increasing lengths.
    Tabulated,
}

/// Validated prices for segment lengths `1..=len`.
#[derive(Debug, Clone, Copy)]
pub struct PriceTable<'a> {
    prices: &'a [f64],
}

impl<'a> PriceTable<'a> {
    /// Checks that `prices` has exactly `length` non-negative finite entries.
    pub fn for_rod(length: usize, prices: &'a [f64]) -> Result<Self> {
        if prices.len() != length {
            return Err(Error::invalid(
                "prices",
                format!(
                    "prices length must equal rod length: {} prices for length {length}",
                    prices.len()
                ),
            ));
        }
        if let Some((i, &p)) = prices
            .iter()
            .enumerate()
            .find(|(_, p)| !p.is_finite() || **p < 0.0)
        {
            return Err(Error::invalid(
                format!("prices[{i}]"),
                format!("price must be non-negative and finite, got {p}"),
            ));
        }
        Ok(Self { prices })
    }

    /// Rod length this table covers.
    pub fn rod_length(&self) -> usize {
        self.prices.len()
    }

    /// Price of one segment of `length` (1-based).
    #[inline]
    pub fn price(&self, length: usize) -> f64 {
        self.prices[length - 1]
    }
}

/// Output of a rod-cutting solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RodCuttingResult {
    /// Best achievable revenue.
    pub max_profit: f64,
    /// One optimal plan: segment lengths summing to the rod length.
    pub cuts: Vec<usize>,
    /// Cut points in the plan, `cuts.len() - 1` (0 for an empty plan).
    pub number_of_cuts: usize,
}

impl RodCuttingResult {
    pub(crate) fn from_plan(max_profit: f64, cuts: Vec<usize>) -> Self {
        let number_of_cuts = cuts.len().saturating_sub(1);
        Self {
            max_profit,
            cuts,
            number_of_cuts,
        }
    }
}

impl fmt::Display for RodCuttingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cuts: Vec<String> = self.cuts.iter().map(ToString::to_string).collect();
        writeln!(f, "max profit: {}", self.max_profit)?;
        writeln!(f, "cuts: [{}]", cuts.join(", "))?;
        write!(f, "number of cuts: {}", self.number_of_cuts)
    }
}

/// Rebuilds a plan from the chosen first segment of every sub-rod.
///
/// `first_cut(l)` is the segment chosen for a rod of length `l >= 1`.
pub(crate) fn walk_plan(length: usize, first_cut: impl Fn(usize) -> usize) -> Vec<usize> {
    let mut plan = Vec::new();
    let mut remaining = length;
    while remaining > 0 {
        let cut = first_cut(remaining);
        debug_assert!(cut >= 1 && cut <= remaining, "bad cut {cut} for {remaining}");
        plan.push(cut);
        remaining -= cut;
    }
    plan
}
