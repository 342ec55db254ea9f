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

//! This module provides the implementation of the greedy solver. It walks the
//! items once, in decreasing value density order, and puts each item in the
//! sack when there is room enough for it. This is fast (`O(n log n)`) and
//! always feasible, but there is no guarantee on the quality of the result.

use log::debug;

use crate::{Completion, DensityOrder, Knapsack, Selection, Solver};

pub struct Greedy<'a> {
    /// The instance being solved
    problem: &'a Knapsack,
    /// When false (the default), an item is only taken when its weight is
    /// strictly less than the remaining capacity; an item that would exactly
    /// fill the sack is skipped. When true, such an item is taken as well.
    fill_exact: bool,

    best_value: usize,
    best_sol: Option<Selection>,
}

impl<'a> Greedy<'a> {
    pub fn new(problem: &'a Knapsack) -> Self {
        Greedy { problem, fill_exact: false, best_value: 0, best_sol: None }
    }
    /// Lets items exactly filling the remaining capacity go in the sack.
    pub fn with_fill_exact(mut self, fill_exact: bool) -> Self {
        self.fill_exact = fill_exact;
        self
    }

    fn fits(&self, weight: usize, remaining: usize) -> bool {
        if self.fill_exact {
            weight <= remaining
        } else {
            weight < remaining
        }
    }
}

impl Solver for Greedy<'_> {
    fn maximize(&mut self) -> Completion {
        let mut remaining = self.problem.capacity();
        let mut value = 0;
        let mut selection = Selection::empty(self.problem.nb_items());

        for item in DensityOrder.sorted(self.problem.items()) {
            if self.fits(item.weight, remaining) {
                remaining -= item.weight;
                value += item.value;
                selection.take(item.index);
            }
        }
        debug!("greedy filled the sack up to {} (value {})",
            self.problem.capacity() - remaining, value);

        self.set_primal(value, selection);
        Completion { is_exact: false, best_value: self.best_value() }
    }

    fn best_value(&self) -> Option<usize> {
        self.best_sol.as_ref().map(|_| self.best_value)
    }
    fn best_solution(&self) -> Option<Selection> {
        self.best_sol.clone()
    }
    fn best_lower_bound(&self) -> usize {
        self.best_value
    }
    /// The greedy never proves anything about the optimum
    fn best_upper_bound(&self) -> usize {
        usize::MAX
    }
    fn set_primal(&mut self, value: usize, solution: Selection) {
        if self.best_sol.is_none() || value > self.best_value {
            self.best_sol   = Some(solution);
            self.best_value = value;
        }
    }
}

/// Greedily fills the sack, using the strict fit rule.
///
/// # Example
/// ```
/// # use knapsack::*;
/// let problem = Knapsack::new(50, vec![(60, 10), (100, 20), (120, 30)]);
/// let (value, selection) = greedy(&problem);
/// assert_eq!(160, value);
/// assert_eq!("1 1 0", selection.to_string());
/// ```
pub fn greedy(problem: &Knapsack) -> (usize, Selection) {
    let mut solver = Greedy::new(problem);
    let Completion { best_value, .. } = solver.maximize();
    (
        best_value.unwrap_or(0),
        solver.best_solution().unwrap_or_else(|| Selection::empty(problem.nb_items())),
    )
}
