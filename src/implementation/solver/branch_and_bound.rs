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

//! This module provides the implementation of a depth-first branch-and-bound
//! solver. The items are explored in decreasing value density order and every
//! node of the search tree decides whether the next item is taken or skipped.
//! Nodes whose linear relaxation cannot beat the incumbent are pruned.
//!
//! The tree is explored with an explicit stack of frames rather than through
//! recursion: the memory used by the search grows with the number of items
//! only, and the cutoff can interrupt the search between any two frames.

use log::debug;

use crate::{Completion, Cutoff, DensityOrder, Item, Knapsack, NoCutoff, Reason, Selection, Solver};

/// A node of the search tree which still needs to be explored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    /// Value of the items taken on the path from the root to this node
    value: usize,
    /// Capacity left once all these items are in the sack
    remaining: usize,
    /// Position (in density order) of the next item to decide on
    depth: usize,
    /// Whether the item at position `depth - 1` was taken to reach this node
    took: bool,
}

pub struct BranchAndBound<'a> {
    /// The instance being solved
    problem: &'a Knapsack,
    /// A cutoff heuristic meant to decide when to stop the resolution
    cutoff: &'a dyn Cutoff,
    /// The items of the problem, most dense first
    items: Vec<Item>,

    /// The open nodes. Last pushed is the first explored.
    stack: Vec<Frame>,
    /// The decisions on the path from the root to the last popped frame,
    /// indexed by position in density order. When a frame at depth `d` is
    /// popped, the subtrees of all deeper frames are done with, hence
    /// `path[..d - 1]` already holds the decisions of its ancestors.
    path: Vec<bool>,
    /// Number of frames that have been popped off the stack
    explored: usize,
    /// Number of frames discarded because of their bound
    pruned: usize,

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

impl<'a> BranchAndBound<'a> {
    pub fn new(problem: &'a Knapsack, cutoff: &'a dyn Cutoff) -> Self {
        BranchAndBound {
            problem,
            cutoff,
            items: DensityOrder.sorted(problem.items()),
            //
            stack: vec![],
            path: vec![false; problem.nb_items()],
            explored: 0,
            pruned: 0,
            best_lb: 0,
            best_ub: usize::MAX,
            best_sol: None,
            abort_proof: None,
        }
    }

    /// The number of search tree nodes that have been explored so far
    pub fn explored(&self) -> usize {
        self.explored
    }

    pub fn abort_reason(&self) -> Option<Reason> {
        self.abort_proof
    }

    fn initialize(&mut self) {
        self.stack.clear();
        self.path.iter_mut().for_each(|d| *d = false);
        self.explored = 0;
        self.pruned = 0;
        self.abort_proof = None;
        self.stack.push(Frame {
            value: 0,
            remaining: self.problem.capacity(),
            depth: 0,
            took: false,
        });
    }

    /// Linear relaxation of the subproblem rooted in `frame`: the remaining
    /// items are greedily added while they fit, then a fraction of the first
    /// one that does not fit fills the rest of the sack.
    ///
    /// Only the integer part of that bound is returned. Since the incumbent is
    /// an integer, comparing it with the floor of the bound is the same as
    /// comparing it with the bound itself. Zero-weight items always fit, hence
    /// the item used for the fractional part always has a positive weight.
    fn bound(&self, frame: &Frame) -> usize {
        let mut remaining = frame.remaining;
        let mut bound = frame.value;
        for item in &self.items[frame.depth..] {
            if item.weight <= remaining {
                remaining -= item.weight;
                bound += item.value;
            } else {
                let fraction = (item.value as u128 * remaining as u128) / item.weight as u128;
                bound += fraction as usize;
                break;
            }
        }
        bound
    }

    /// Nothing can be added to the sack anymore: either all items have been
    /// decided, or the sack is full and the next item (hence all the
    /// following ones, since free items come first) weighs something.
    fn is_terminal(&self, frame: &Frame) -> bool {
        match self.items.get(frame.depth) {
            None => true,
            Some(next) => frame.remaining == 0 && next.weight > 0,
        }
    }

    fn selection_of(&self, frame: &Frame) -> Selection {
        let mut selection = Selection::empty(self.problem.nb_items());
        for (item, taken) in self.items[..frame.depth].iter().zip(&self.path) {
            if *taken {
                selection.take(item.index);
            }
        }
        selection
    }

    fn maybe_update_best(&mut self, frame: &Frame) {
        if self.best_sol.is_none() || frame.value > self.best_lb {
            self.best_lb = frame.value;
            self.best_sol = Some(self.selection_of(frame));
        }
    }

    /// Pushes the two children of `frame`: first the one skipping the next
    /// item, then the one taking it (which is thus explored first). The take
    /// branch is only pushed when the item fits in the remaining capacity.
    fn branch(&mut self, frame: &Frame) {
        let item = self.items[frame.depth];
        self.stack.push(Frame { depth: frame.depth + 1, took: false, ..*frame });

        if item.weight <= frame.remaining {
            self.stack.push(Frame {
                value: frame.value + item.value,
                remaining: frame.remaining - item.weight,
                depth: frame.depth + 1,
                took: true,
            });
        }
    }

    fn process_one_frame(&mut self, frame: Frame) {
        if frame.depth > 0 {
            self.path[frame.depth - 1] = frame.took;
        }
        self.maybe_update_best(&frame);
        if self.is_terminal(&frame) {
            return;
        }

        let bound = self.bound(&frame);
        if self.explored == 1 {
            self.best_ub = bound;
        }
        if bound <= self.best_lb {
            self.pruned += 1;
            return;
        }
        self.branch(&frame);
    }

    fn abort_search(&mut self, reason: Reason) {
        self.abort_proof = Some(reason);
        self.stack.clear();
    }
}

impl Solver for BranchAndBound<'_> {
    fn maximize(&mut self) -> Completion {
        self.initialize();

        while let Some(frame) = self.stack.pop() {
            if self.cutoff.must_stop() {
                self.abort_search(Reason::CutoffOccurred);
                break;
            }
            self.explored += 1;
            self.process_one_frame(frame);
        }

        if self.abort_proof.is_none() {
            self.best_ub = self.best_lb;
        }
        debug!("branch and bound explored {} nodes, pruned {}, best {}",
            self.explored, self.pruned, self.best_lb);

        Completion { is_exact: self.abort_proof.is_none(), best_value: self.best_value() }
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

/// Returns the optimal value of the instance as computed by the bounding
/// search.
///
/// # Example
/// ```
/// # use knapsack::*;
/// let problem = Knapsack::new(50, vec![(60, 10), (100, 20), (120, 30)]);
/// assert_eq!(220, branch_and_bound(&problem));
/// ```
pub fn branch_and_bound(problem: &Knapsack) -> usize {
    let mut solver = BranchAndBound::new(problem, &NoCutoff);
    solver.maximize().best_value.unwrap_or(0)
}
