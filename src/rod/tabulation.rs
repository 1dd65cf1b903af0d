//! Bottom-up tabulated strategy.

use super::types::{walk_plan, PriceTable, RodCuttingResult};

/// Profit and chosen first cut for every length `0..=L`.
#[derive(Debug, Clone)]
pub(crate) struct ProfitTable {
    pub(crate) profits: Vec<f64>,
    first_cuts: Vec<usize>,
}

impl ProfitTable {
    pub(crate) fn build(prices: &PriceTable<'_>) -> Self {
        let length = prices.rod_length();
        let mut profits = vec![0.0; length + 1];
        let mut first_cuts = vec![0; length + 1];

        for l in 1..=length {
            let mut best_profit = prices.price(1) + profits[l - 1];
            let mut best_cut = 1;
            for cut in 2..=l {
                let candidate = prices.price(cut) + profits[l - cut];
                if candidate > best_profit {
                    best_profit = candidate;
                    best_cut = cut;
                }
            }
            profits[l] = best_profit;
            first_cuts[l] = best_cut;
        }

        Self {
            profits,
            first_cuts,
        }
    }
}

pub(crate) fn solve(prices: &PriceTable<'_>) -> RodCuttingResult {
    let length = prices.rod_length();
    let table = ProfitTable::build(prices);
    let cuts = walk_plan(length, |l| table.first_cuts[l]);
    RodCuttingResult::from_plan(table.profits[length], cuts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_contents() {
        let prices = [2.0, 5.0, 7.0, 8.0, 10.0];
        let table = ProfitTable::build(&PriceTable::for_rod(5, &prices).unwrap());
        assert_eq!(table.profits, vec![0.0, 2.0, 5.0, 7.0, 10.0, 12.0]);
        assert_eq!(table.first_cuts, vec![0, 1, 2, 1, 2, 1]);
    }

    #[test]
    fn test_no_cut_is_best() {
        let prices = [1.0, 3.0, 8.0];
        let result = solve(&PriceTable::for_rod(3, &prices).unwrap());
        assert_eq!(result.max_profit, 8.0);
        assert_eq!(result.cuts, vec![3]);
        assert_eq!(result.number_of_cuts, 0);
    }

    #[test]
    fn test_all_unit_cuts() {
        let prices = [3.0, 5.0, 6.0, 7.0];
        let result = solve(&PriceTable::for_rod(4, &prices).unwrap());
        assert_eq!(result.max_profit, 12.0);
        assert_eq!(result.cuts, vec![1, 1, 1, 1]);
        assert_eq!(result.number_of_cuts, 3);
    }

    #[test]
    fn test_zero_prices() {
        let prices = [0.0; 4];
        let result = solve(&PriceTable::for_rod(4, &prices).unwrap());
        assert_eq!(result.max_profit, 0.0);
        // every candidate ties at zero, so the first one (length 1) is kept
        assert_eq!(result.cuts, vec![1, 1, 1, 1]);
    }
}
