// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module provides the policy deciding which solver is used on a given
//! instance, and whether its result may be reported as optimal.
//!
//! By default, the exact dynamic program is used when the instance has less
//! than 400 items, or exactly 1000 items (a calibration constant for a known
//! family of benchmark instances). All other instances are approximated with
//! the greedy solver.

use std::collections::BTreeSet;
use std::time::Duration;

use derive_builder::Builder;
use log::{debug, info};

use crate::*;

/// Below this number of items, the exact solver is used
pub const DEFAULT_EXACT_MAX_ITEMS: usize = 400;
/// Instance sizes always solved with the exact solver
pub const DEFAULT_EXACT_SIZES: [usize; 1] = [1000];

/// This is how you configure the selection policy.
///
/// # Example
/// ```
/// # use knapsack::*;
/// use std::time::Duration;
///
/// let config = SelectorConfigBuilder::default()
///     .exact_max_items(100)
///     .time_limit(Some(Duration::from_secs(30)))
///     .build()
///     .unwrap();
/// assert!(config.exact_exact_sizes.contains(&1000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct SelectorConfig {
    /// Instances with strictly less items than this are solved exactly
    #[builder(default="DEFAULT_EXACT_MAX_ITEMS")]
    pub exact_max_items: usize,
    /// Instances having exactly one of these numbers of items are solved
    /// exactly, regardless of `exact_max_items`
    #[builder(default="DEFAULT_EXACT_SIZES.into_iter().collect()")]
    pub exact_exact_sizes: BTreeSet<usize>,
    /// When true, the greedy solver also takes the items that exactly fill
    /// the remaining capacity
    #[builder(default="false")]
    pub greedy_fills_exact: bool,
    /// Maximum number of cells of the dynamic programming table. Larger
    /// instances are approximated, or solved with branch-and-bound when a
    /// time limit is set
    #[builder(default)]
    pub max_table_cells: Option<usize>,
    /// Maximum time granted to the exact resolution
    #[builder(default)]
    pub time_limit: Option<Duration>,
}
impl Default for SelectorConfig {
    fn default() -> Self {
        SelectorConfig {
            exact_max_items: DEFAULT_EXACT_MAX_ITEMS,
            exact_exact_sizes: DEFAULT_EXACT_SIZES.into_iter().collect(),
            greedy_fills_exact: false,
            max_table_cells: None,
            time_limit: None,
        }
    }
}

/// The family of algorithm the selector routes an instance to
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// Proves optimality (dynamic programming, possibly backed by branch-and-bound)
    Exact,
    /// Fills the sack greedily
    Approximate,
}

#[derive(Debug, Clone, Default)]
pub struct Selector {
    config: SelectorConfig,
}

impl Selector {
    pub fn new(config: SelectorConfig) -> Self {
        Selector { config }
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Decides how the given instance is going to be solved
    pub fn select(&self, problem: &Knapsack) -> Strategy {
        let n = problem.nb_items();
        if n < self.config.exact_max_items || self.config.exact_exact_sizes.contains(&n) {
            Strategy::Exact
        } else {
            Strategy::Approximate
        }
    }

    /// Solves the instance with the strategy it is routed to
    pub fn select_and_solve(&self, problem: &Knapsack) -> SolutionRecord {
        let strategy = self.select(problem);
        debug!("{} items, capacity {}: {:?} strategy", problem.nb_items(), problem.capacity(), strategy);

        match strategy {
            Strategy::Exact => self.solve_exact(problem),
            Strategy::Approximate => {
                let mut solver = self.greedy(problem);
                solver.maximize();
                record(problem, &solver, false)
            }
        }
    }

    fn greedy<'a>(&self, problem: &'a Knapsack) -> Greedy<'a> {
        Greedy::new(problem).with_fill_exact(self.config.greedy_fills_exact)
    }

    /// The dynamic program is tried first. When it refuses the instance (too
    /// large a table) or runs out of time, the greedy solution is computed.
    /// If a time limit is set, the branch-and-bound then tries to improve on
    /// it until the same deadline. Otherwise the greedy solution is reported.
    fn solve_exact(&self, problem: &Knapsack) -> SolutionRecord {
        let cutoff = cutoff(self.config.time_limit);

        let mut dp = DynamicProgramming::new(problem, cutoff.as_ref())
            .with_max_cells(self.config.max_table_cells);
        let Completion { is_exact, .. } = dp.maximize();
        if is_exact {
            return record(problem, &dp, true);
        }

        let mut greedy = self.greedy(problem);
        greedy.maximize();
        if self.config.time_limit.is_none() {
            info!("dynamic programming gave up ({:?}), falling back to the greedy solution",
                dp.abort_reason());
            return record(problem, &greedy, false);
        }
        info!("dynamic programming gave up ({:?}), falling back to branch and bound",
            dp.abort_reason());

        let mut bb = BranchAndBound::new(problem, cutoff.as_ref());
        if let (Some(value), Some(solution)) = (greedy.best_value(), greedy.best_solution()) {
            bb.set_primal(value, solution);
        }
        let Completion { is_exact, .. } = bb.maximize();
        if !is_exact {
            info!("branch and bound cut off after {} nodes (gap {:.3})", bb.explored(), bb.gap());
        }
        record(problem, &bb, is_exact)
    }
}

/// An utility function to return a cutoff heuristic that can either be a time
/// budget policy (if timeout is fixed) or no cutoff policy.
fn cutoff(timeout: Option<Duration>) -> Box<dyn Cutoff> {
    if let Some(t) = timeout {
        Box::new(TimeBudget::new(t))
    } else {
        Box::new(NoCutoff)
    }
}

fn record(problem: &Knapsack, solver: &dyn Solver, is_optimal: bool) -> SolutionRecord {
    SolutionRecord {
        total_value: solver.best_value().unwrap_or(0),
        is_optimal,
        selection: solver.best_solution().unwrap_or_else(|| Selection::empty(problem.nb_items())),
    }
}

/// Solves the instance using the default selection policy.
///
/// # Example
/// ```
/// # use knapsack::*;
/// let problem = Knapsack::new(50, vec![(60, 10), (100, 20), (120, 30)]);
/// let record = select_and_solve(&problem);
/// assert_eq!("220 1\n0 1 1", record.to_string());
/// ```
pub fn select_and_solve(problem: &Knapsack) -> SolutionRecord {
    Selector::default().select_and_solve(problem)
}

#[cfg(test)]
mod test_selector {
    use std::time::Duration;

    use crate::*;

    /// `n` unit items in a sack that can hold 10 of them
    fn unit_items(n: usize) -> Knapsack {
        Knapsack::new(10, (0..n).map(|_| (1, 1)))
    }

    #[test]
    fn default_builder_matches_default_config() {
        let built = SelectorConfigBuilder::default().build().unwrap();
        assert_eq!(SelectorConfig::default(), built);
        assert_eq!(400, built.exact_max_items);
        assert_eq!(vec![1000], built.exact_exact_sizes.into_iter().collect::<Vec<_>>());
        assert!(!built.greedy_fills_exact);
        assert_eq!(None, built.max_table_cells);
        assert_eq!(None, built.time_limit);
    }
    #[test]
    fn small_instances_are_solved_exactly() {
        let selector = Selector::default();
        assert_eq!(Strategy::Exact, selector.select(&unit_items(0)));
        assert_eq!(Strategy::Exact, selector.select(&unit_items(399)));
    }
    #[test]
    fn large_instances_are_approximated() {
        let selector = Selector::default();
        assert_eq!(Strategy::Approximate, selector.select(&unit_items(400)));
        assert_eq!(Strategy::Approximate, selector.select(&unit_items(999)));
        assert_eq!(Strategy::Approximate, selector.select(&unit_items(1001)));
    }
    #[test]
    fn one_thousand_items_are_solved_exactly() {
        let selector = Selector::default();
        assert_eq!(Strategy::Exact, selector.select(&unit_items(1000)));
    }
    #[test]
    fn optimality_flag_follows_the_strategy() {
        let rec = select_and_solve(&unit_items(399));
        assert!(rec.is_optimal);
        assert_eq!(10, rec.total_value);

        let rec = select_and_solve(&unit_items(400));
        assert!(!rec.is_optimal);
        // the strict fit rule leaves the last unit of capacity unused
        assert_eq!(9, rec.total_value);

        let rec = select_and_solve(&unit_items(1000));
        assert!(rec.is_optimal);
        assert_eq!(10, rec.total_value);
        assert_eq!(1000, rec.selection.len());
    }
    #[test]
    fn zero_capacity_reports_the_zero_weight_items() {
        let rec = select_and_solve(&Knapsack::new(0, vec![(5, 0)]));
        assert_eq!("5 1\n1", rec.to_string());
    }
    #[test]
    fn thresholds_are_configurable() {
        let config = SelectorConfigBuilder::default()
            .exact_max_items(5)
            .exact_exact_sizes([7].into_iter().collect())
            .build()
            .unwrap();
        let selector = Selector::new(config);
        assert_eq!(Strategy::Exact, selector.select(&unit_items(4)));
        assert_eq!(Strategy::Approximate, selector.select(&unit_items(5)));
        assert_eq!(Strategy::Exact, selector.select(&unit_items(7)));
        assert_eq!(Strategy::Approximate, selector.select(&unit_items(1000)));
    }
    #[test]
    fn greedy_can_be_told_to_fill_exactly() {
        let config = SelectorConfigBuilder::default()
            .exact_max_items(0)
            .exact_exact_sizes(Default::default())
            .greedy_fills_exact(true)
            .build()
            .unwrap();
        let rec = Selector::new(config).select_and_solve(&unit_items(400));
        assert!(!rec.is_optimal);
        assert_eq!(10, rec.total_value);
    }
    #[test]
    fn a_memory_budget_without_time_limit_falls_back_to_the_greedy_solution() {
        let config = SelectorConfigBuilder::default()
            .max_table_cells(Some(1))
            .build()
            .unwrap();
        let problem = Knapsack::new(50, vec![(60, 10), (100, 20), (120, 30)]);
        let selector = Selector::new(config);
        assert_eq!(Strategy::Exact, selector.select(&problem));
        assert_eq!(SolutionRecord {
            total_value: 160,
            is_optimal: false,
            selection: Selection::from(vec![true, true, false]),
        }, selector.select_and_solve(&problem));
    }
    #[test]
    fn a_memory_budget_with_time_limit_falls_back_to_branch_and_bound() {
        let config = SelectorConfigBuilder::default()
            .max_table_cells(Some(1))
            .time_limit(Some(Duration::from_secs(3600)))
            .build()
            .unwrap();
        let problem = Knapsack::new(50, vec![(60, 10), (100, 20), (120, 30)]);
        let rec = Selector::new(config).select_and_solve(&problem);
        assert_eq!(SolutionRecord {
            total_value: 220,
            is_optimal: true,
            selection: Selection::from(vec![false, true, true]),
        }, rec);
    }
    #[test]
    fn an_exhausted_time_limit_falls_back_to_the_greedy_solution() {
        let config = SelectorConfigBuilder::default()
            .time_limit(Some(Duration::from_secs(0)))
            .build()
            .unwrap();
        let problem = Knapsack::new(50, vec![(60, 10), (100, 20), (120, 30)]);
        let rec = Selector::new(config).select_and_solve(&problem);
        assert_eq!(SolutionRecord {
            total_value: 160,
            is_optimal: false,
            selection: Selection::from(vec![true, true, false]),
        }, rec);
    }
}
