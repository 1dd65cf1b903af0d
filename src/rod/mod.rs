//! Rod cutting by dynamic programming.
//!
//! Given a rod of integer length `L` and prices for segments of length
//! `1..=L`, finds the partition with the highest total price:
//!
//! ```text
//! profit(0) = 0
//! profit(l) = max_{1 <= i <= l} price(i) + profit(l - i)
//! ```
//!
//! Two equivalent strategies are provided:
//!
//! - **Memoized**: top-down recursion over a [`ProfitCache`] owned by the call.
//! - **Tabulated**: bottom-up iteration for `l = 1..=L`.
//!
//! Both scan `i` upward and only replace the incumbent on a strictly
//! greater profit, so the smallest maximizing first segment is kept and
//! the two strategies return the same plan. Plans are rebuilt by walking
//! the chosen first segments backwards from `L`. Time is O(L²), storage
//! O(L).
//!
//! # References
//!
//! Cormen, Leiserson, Rivest & Stein (2009), "Introduction to Algorithms",
//! 3rd ed., §15.1

mod cutter;
mod memo;
mod tabulation;
mod types;

pub use cutter::{solve_memoized, solve_tabulated, RodCutter, RodInstance};
pub use memo::ProfitCache;
pub use types::{DpStrategy, PriceTable, RodCuttingResult};
