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

//! This module defines the `Solver` trait.

use crate::{Completion, Selection};

/// This is the solver abstraction. It is implemented by each of the algorithms
/// of this crate (dynamic programming, branch-and-bound and greedy) to find
/// the best possible selection of items for a given knapsack instance.
pub trait Solver {
    /// This method orders the solver to search for the best selection of
    /// items. It returns a structure standing for the outcome of the attempted
    /// maximization. Such a `Completion` may either be marked **exact** if the
    /// maximization has been carried out until optimality was proved. Or it
    /// can be inexact, in which case it means that the solver is a heuristic
    /// or that the maximization process was stopped because of the
    /// satisfaction of some cutoff criterion.
    ///
    /// Along with the `is_exact` exact flag, the completion provides an
    /// optional `best_value`. Four cases are thus to be distinguished:
    ///
    /// * When the `is_exact` flag is true, and a `best_value` is present: the
    ///   `best_value` is the maximum value of the objective function.
    /// * When the `is_exact` flag is false and a `best_value` is present, it
    ///   is the best value of the objective function that was known at the
    ///   time the solver stopped.
    /// * When the `is_exact` flag is false and no `best_value` is present: it
    ///   simply means that the solver gave up before finding anything.
    /// * The `is_exact` flag is never true without a `best_value` since the
    ///   empty selection is always feasible.
    fn maximize(&mut self) -> Completion;
    /// This method returns the value of the best selection that has been
    /// found. It returns `None` when no selection is known yet.
    fn best_value(&self) -> Option<usize>;
    /// This method returns the best selection that has been found. The
    /// flags are given in the original order of the items.
    fn best_solution(&self) -> Option<Selection>;

    /// Returns the best lower bound that has been identified so far.
    fn best_lower_bound(&self) -> usize;
    /// Returns the tightest upper bound that can be guaranteed so far.
    /// In case where no upper bound has been computed, it should return the
    /// maximum value that fits within an usize (+inf).
    fn best_upper_bound(&self) -> usize;

    /// Sets a primal (best known value and selection) of the problem.
    fn set_primal(&mut self, value: usize, solution: Selection);

    /// Computes the optimality gap
    fn gap(&self) -> f32 {
        let ub = self.best_upper_bound();
        let lb = self.best_lower_bound();
        if ub == usize::MAX {
            1.0
        } else if ub == 0 {
            0.0
        } else {
            (ub - lb.min(ub)) as f32 / ub as f32
        }
    }
}
