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

//! This module provides the implementation of the exact dynamic programming
//! solver. It fills a table `cache[i][j]` holding the best value achievable
//! with the first `i` items (original order) and a capacity budget of `j`.
//! The table takes `O(n * capacity)` time and memory, which is what makes
//! this solver unfit for large capacities.

use log::debug;

use crate::{Completion, Cutoff, Knapsack, NoCutoff, Reason, Selection, Solver};

/// The 2-D table of the dynamic program, stored row by row in one flat vector.
struct Table {
    width: usize,
    cells: Vec<usize>,
}
impl Table {
    #[inline]
    fn get(&self, row: usize, col: usize) -> usize {
        self.cells[row * self.width + col]
    }
    #[inline]
    fn set(&mut self, row: usize, col: usize, value: usize) {
        self.cells[row * self.width + col] = value;
    }
}

pub struct DynamicProgramming<'a> {
    /// The instance being solved
    problem: &'a Knapsack,
    /// A cutoff heuristic meant to decide when to stop filling the table.
    /// It is consulted once per row.
    cutoff: &'a dyn Cutoff,
    /// The maximum number of cells the table may hold. When the instance
    /// needs more, the solver gives up without allocating anything.
    max_cells: Option<usize>,

    /// This is the value of the best known lower bound.
    best_lb: usize,
    /// This is the value of the best known upper bound.
    best_ub: usize,
    /// If set, this keeps the info about the best solution so far.
    best_sol: Option<Selection>,
    /// If we decide not to go through a complete proof of optimality, this is
    /// the reason why we took that decision.
    abort_proof: Option<Reason>,
}

impl<'a> DynamicProgramming<'a> {
    pub fn new(problem: &'a Knapsack, cutoff: &'a dyn Cutoff) -> Self {
        DynamicProgramming {
            problem,
            cutoff,
            max_cells: None,
            //
            best_lb: 0,
            best_ub: usize::MAX,
            best_sol: None,
            abort_proof: None,
        }
    }
    /// Caps the size of the table this solver is allowed to allocate.
    pub fn with_max_cells(mut self, max_cells: Option<usize>) -> Self {
        self.max_cells = max_cells;
        self
    }

    /// Number of cells `(n + 1) * (capacity + 1)` of the table for the
    /// given instance, or `None` when that number does not fit in an usize.
    pub fn table_size(problem: &Knapsack) -> Option<usize> {
        let rows = problem.nb_items().checked_add(1)?;
        let cols = problem.capacity().checked_add(1)?;
        rows.checked_mul(cols)
    }

    /// If a solution was obtained, the reason why it could not be proved optimal
    pub fn abort_reason(&self) -> Option<Reason> {
        self.abort_proof
    }

    fn fill(&self) -> Result<Table, Reason> {
        let size = Self::table_size(self.problem).ok_or(Reason::MemoryBudgetExceeded)?;
        if self.max_cells.map_or(false, |max| size > max) {
            return Err(Reason::MemoryBudgetExceeded);
        }

        let items = self.problem.items();
        let capacity = self.problem.capacity();
        let mut table = Table { width: capacity + 1, cells: vec![0; size] };

        // row 0 (no item at all) is all zeroes
        for i in 1..=items.len() {
            if self.cutoff.must_stop() {
                return Err(Reason::CutoffOccurred);
            }
            let item = &items[i - 1];
            for j in 0..=capacity {
                let skip = table.get(i - 1, j);
                let best = if item.weight <= j {
                    skip.max(item.value + table.get(i - 1, j - item.weight))
                } else {
                    skip
                };
                table.set(i, j, best);
            }
        }
        Ok(table)
    }

    /// Walks the table back from the bottom right corner. An item is taken
    /// iff it changed the value of the cell compared to the row above.
    fn reconstruct(&self, table: &Table) -> Selection {
        let items = self.problem.items();
        let mut selection = Selection::empty(items.len());

        let mut column = self.problem.capacity();
        for row in (1..=items.len()).rev() {
            if table.get(row, column) != table.get(row - 1, column) {
                let item = &items[row - 1];
                selection.take(item.index);
                column -= item.weight;
            }
        }
        selection
    }
}

impl Solver for DynamicProgramming<'_> {
    fn maximize(&mut self) -> Completion {
        match self.fill() {
            Err(reason) => {
                debug!("dynamic programming aborted: {:?}", reason);
                self.abort_proof = Some(reason);
                Completion { is_exact: false, best_value: self.best_value() }
            }
            Ok(table) => {
                let value = table.get(self.problem.nb_items(), self.problem.capacity());
                let selection = self.reconstruct(&table);
                debug!("dynamic programming filled {} cells, optimum {}", table.cells.len(), value);

                self.best_lb = value;
                self.best_ub = value;
                self.best_sol = Some(selection);
                self.abort_proof = None;
                Completion { is_exact: true, best_value: Some(value) }
            }
        }
    }

    fn best_value(&self) -> Option<usize> {
        self.best_sol.as_ref().map(|_| self.best_lb)
    }
    fn best_solution(&self) -> Option<Selection> {
        self.best_sol.clone()
    }
    fn best_lower_bound(&self) -> usize {
        self.best_lb
    }
    fn best_upper_bound(&self) -> usize {
        self.best_ub
    }
    fn set_primal(&mut self, value: usize, solution: Selection) {
        if self.best_sol.is_none() || value > self.best_lb {
            self.best_sol = Some(solution);
            self.best_lb  = value;
        }
    }
}

/// Solves the instance to optimality and returns the optimal value along with
/// a selection achieving it.
///
/// # Example
/// ```
/// # use knapsack::*;
/// let problem = Knapsack::new(50, vec![(60, 10), (100, 20), (120, 30)]);
/// let (value, selection) = dynamic_programming(&problem);
/// assert_eq!(220, value);
/// assert_eq!("0 1 1", selection.to_string());
/// ```
pub fn dynamic_programming(problem: &Knapsack) -> (usize, Selection) {
    let mut solver = DynamicProgramming::new(problem, &NoCutoff);
    let Completion { best_value, .. } = solver.maximize();
    (
        best_value.unwrap_or(0),
        solver.best_solution().unwrap_or_else(|| Selection::empty(problem.nb_items())),
    )
}
