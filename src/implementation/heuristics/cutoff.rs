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

//! This module provides the implementation of the cutoff heuristics that can
//! be used to bound the time spent by a solver.

use std::time::{Duration, Instant};

use crate::Cutoff;

/// _This is the default cutoff heuristic._ It imposes that the search goes
/// on until it proves optimality.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoCutoff;
impl Cutoff for NoCutoff {
    fn must_stop(&self) -> bool {false}
}

/// This cutoff allows one to specify a maximum time budget to solve the problem.
/// Once the time budget is elapsed, the optimization stops and the best solution
/// that has been found (so far) is returned.
///
/// The deadline is fixed when the budget is created; the clock is only read
/// when a solver polls `must_stop`. A budget too large to be represented as an
/// instant never expires.
///
/// # Example
/// ```
/// # use knapsack::*;
/// use std::time::Duration;
///
/// let problem = Knapsack::new(50, vec![(60, 10), (100, 20), (120, 30)]);
/// let cutoff  = TimeBudget::new(Duration::from_secs(10));
/// let mut solver = BranchAndBound::new(&problem, &cutoff);
/// let outcome = solver.maximize(); // will run for maximum 10 seconds
/// assert_eq!(Some(220), outcome.best_value);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct TimeBudget {
    deadline: Option<Instant>,
}
impl TimeBudget {
    pub fn new(budget: Duration) -> Self {
        TimeBudget { deadline: Instant::now().checked_add(budget) }
    }
}
impl Cutoff for TimeBudget {
    fn must_stop(&self) -> bool {
        self.deadline.map_or(false, |deadline| Instant::now() >= deadline)
    }
}
