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

//! # Knapsack
//! This crate solves the 0/1 knapsack problem: given a set of items, each one
//! with a value and a weight, and the capacity of a sack, it selects the
//! subset of items maximizing the total value without exceeding the capacity.
//!
//! It comes with three solvers, all of which implement the `Solver` trait:
//!
//! * `DynamicProgramming` is exact. It fills an `(n + 1) x (capacity + 1)`
//!   table, hence its time and memory requirements grow with the capacity.
//! * `BranchAndBound` is exact as well. It explores the take/skip decision
//!   tree depth first and prunes it with the linear relaxation of the
//!   problem.
//! * `Greedy` fills the sack in decreasing value density order. It is fast,
//!   but offers no guarantee about the quality of its result.
//!
//! A `Selector` decides which one is used on a given instance, based on the
//! number of items, and produces a `SolutionRecord`.
//!
//! ## Quick Example
//! ```
//! # use knapsack::*;
//! // 1. Create an instance of the knapsack problem (value, weight)
//! let problem = Knapsack::new(50, vec![(60, 10), (100, 20), (120, 30)]);
//! // 2. Let the selector pick a solver and solve the instance
//! let record = select_and_solve(&problem);
//! // 3. Do whatever you like with the solution.
//! assert_eq!(220, record.total_value);
//! assert!(record.is_optimal);
//! for item in record.selection.taken() {
//!     println!("{}", item.id());
//! }
//! ```
//!
//! ## Using a solver directly
//! Each solver can also be driven on its own. The `Cutoff` you give it is
//! polled between units of work and lets you bound the time it spends.
//! ```
//! # use knapsack::*;
//! use std::time::Duration;
//!
//! let problem = Knapsack::new(50, vec![(60, 10), (100, 20), (120, 30)]);
//! let cutoff  = TimeBudget::new(Duration::from_secs(5));
//! let mut solver = BranchAndBound::new(&problem, &cutoff);
//! // a primal solution (here the greedy one) gives the search a head start
//! let (value, selection) = greedy(&problem);
//! solver.set_primal(value, selection);
//!
//! let Completion { is_exact, best_value } = solver.maximize();
//! assert!(is_exact);
//! assert_eq!(Some(220), best_value);
//! assert_eq!("0 1 1", solver.best_solution().unwrap().to_string());
//! ```

mod common;
mod abstraction;
mod implementation;
pub mod io_utils;

pub use common::*;
pub use abstraction::*;
pub use implementation::*;
pub use io_utils::{parse_instance, read_instance};
