//! Strategy dispatch and batch solving.

use super::tabulation::ProfitTable;
use super::types::{DpStrategy, PriceTable, RodCuttingResult};
use super::{memo, tabulation};
use crate::error::Result;
use log::debug;
use rayon::prelude::*;

/// One rod-cutting instance: rod length and its price table.
pub type RodInstance = (usize, Vec<f64>);

/// Entry point for both rod-cutting strategies.
///
/// Every call owns its own cache or table, so independent calls may run
/// on different threads.
pub struct RodCutter;

impl RodCutter {
    /// Solves one instance with the given strategy.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_batchcut::rod::{DpStrategy, RodCutter};
    ///
    /// let prices = [2.0, 5.0, 7.0, 8.0, 10.0];
    /// let result = RodCutter::solve(DpStrategy::Tabulated, 5, &prices).unwrap();
    /// assert_eq!(result.max_profit, 12.0);
    /// assert_eq!(result.cuts, vec![1, 2, 2]);
    /// ```
    pub fn solve(
        strategy: DpStrategy,
        length: usize,
        prices: &[f64],
    ) -> Result<RodCuttingResult> {
        let table = PriceTable::for_rod(length, prices)?;
        let result = match strategy {
            DpStrategy::Memoized => memo::solve(&table),
            DpStrategy::Tabulated => tabulation::solve(&table),
        };
        debug!(
            "{strategy:?} rod of length {length}: profit {}, cuts {:?}",
            result.max_profit, result.cuts
        );
        Ok(result)
    }

    /// Best profit for every sub-rod length `0..=length`.
    pub fn profit_curve(length: usize, prices: &[f64]) -> Result<Vec<f64>> {
        let table = PriceTable::for_rod(length, prices)?;
        Ok(ProfitTable::build(&table).profits)
    }

    /// Solves independent instances, in input order.
    ///
    /// With `parallel`, instances are spread over the rayon thread pool.
    pub fn solve_many(
        strategy: DpStrategy,
        instances: &[RodInstance],
        parallel: bool,
    ) -> Vec<Result<RodCuttingResult>> {
        let solve_one = |(length, prices): &RodInstance| Self::solve(strategy, *length, prices);
        if parallel {
            instances.par_iter().map(solve_one).collect()
        } else {
            instances.iter().map(solve_one).collect()
        }
    }
}

/// Solves with top-down memoized recursion.
pub fn solve_memoized(length: usize, prices: &[f64]) -> Result<RodCuttingResult> {
    RodCutter::solve(DpStrategy::Memoized, length, prices)
}

/// Solves with bottom-up tabulation.
pub fn solve_tabulated(length: usize, prices: &[f64]) -> Result<RodCuttingResult> {
    RodCutter::solve(DpStrategy::Tabulated, length, prices)
}
