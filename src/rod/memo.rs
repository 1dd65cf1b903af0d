//! Top-down memoized strategy.

use super::types::{walk_plan, PriceTable, RodCuttingResult};
use log::trace;

/// Best known `(profit, first_cut)` per sub-rod length, owned by one solve.
#[derive(Debug, Clone)]
pub struct ProfitCache {
    entries: Vec<Option<(f64, usize)>>,
}

impl ProfitCache {
    /// Creates an empty cache for sub-rods of length `0..=length`.
    pub fn new(length: usize) -> Self {
        Self {
            entries: vec![None; length + 1],
        }
    }

    /// Cached `(profit, first_cut)` for `length`, if already computed.
    pub fn get(&self, length: usize) -> Option<(f64, usize)> {
        self.entries.get(length).copied().flatten()
    }

    /// Number of lengths computed so far.
    pub fn filled(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    fn insert(&mut self, length: usize, profit: f64, first_cut: usize) {
        if length >= self.entries.len() {
            self.entries.resize(length + 1, None);
        }
        trace!("cache fill: length {length} -> profit {profit}, first cut {first_cut}");
        self.entries[length] = Some((profit, first_cut));
    }

    /// Best profit for a rod of `length`, computing and caching on demand.
    ///
    /// Evaluates the top-down recursion with an explicit stack of pending
    /// sub-rods, so call depth stays constant for any `length`.
    pub fn profit(&mut self, length: usize, prices: &PriceTable<'_>) -> f64 {
        if let Some(profit) = self.known(length) {
            return profit;
        }

        let mut pending = vec![Frame::new(length)];
        while let Some(frame) = pending.last_mut() {
            if frame.next_cut > frame.length {
                let (length, profit, cut) = (frame.length, frame.best_profit, frame.best_cut);
                pending.pop();
                self.insert(length, profit, cut);
                continue;
            }

            let rest = frame.length - frame.next_cut;
            match self.known(rest) {
                Some(rest_profit) => {
                    let cut = frame.next_cut;
                    let candidate = prices.price(cut) + rest_profit;
                    // strictly greater: the smallest maximizing cut wins
                    if cut == 1 || candidate > frame.best_profit {
                        frame.best_profit = candidate;
                        frame.best_cut = cut;
                    }
                    frame.next_cut += 1;
                }
                None => pending.push(Frame::new(rest)),
            }
        }

        self.known(length).unwrap_or(0.0)
    }

    /// Profit of `length` if it is zero or already cached.
    fn known(&self, length: usize) -> Option<f64> {
        if length == 0 {
            return Some(0.0);
        }
        self.get(length).map(|(profit, _)| profit)
    }

    fn first_cut(&self, length: usize) -> usize {
        self.get(length).map_or(length, |(_, cut)| cut)
    }
}

/// A sub-rod whose candidate cuts are still being evaluated.
#[derive(Debug)]
struct Frame {
    length: usize,
    next_cut: usize,
    best_profit: f64,
    best_cut: usize,
}

impl Frame {
    fn new(length: usize) -> Self {
        Self {
            length,
            next_cut: 1,
            best_profit: 0.0,
            best_cut: 1,
        }
    }
}

pub(crate) fn solve(prices: &PriceTable<'_>) -> RodCuttingResult {
    let length = prices.rod_length();
    let mut cache = ProfitCache::new(length);
    let max_profit = cache.profit(length, prices);
    let cuts = walk_plan(length, |l| cache.first_cut(l));
    RodCuttingResult::from_plan(max_profit, cuts)
}
