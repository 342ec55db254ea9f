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

//! This module defines the most basic data types that are used throughout all
//! the code of our library: the problem instance (`Knapsack`) along with the
//! items that compose it, the `Selection` of items a solver decides to take
//! and the records describing the outcome of a resolution.

use std::fmt;

// ----------------------------------------------------------------------------
// --- VARIABLE ---------------------------------------------------------------
// ----------------------------------------------------------------------------
/// This type denotes an item from the knapsack instance at hand. Each item is
/// identified with its position in the original (unsorted) input, ranging from
/// 0 until `problem.nb_items()`. This identity is stable: it survives all the
/// internal re-sortings performed by the solvers.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Variable(pub usize);
impl Variable {
    #[inline]
    /// This function returns the id (numeric value) of the variable.
    ///
    /// # Examples:
    /// ```
    /// # use knapsack::Variable;
    /// assert_eq!(0, Variable(0).id());
    /// assert_eq!(1, Variable(1).id());
    /// assert_eq!(2, Variable(2).id());
    /// ```
    pub fn id(self) -> usize {
        self.0
    }
}

// ----------------------------------------------------------------------------
// --- ITEM -------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// One of the objects that can be put in the sack.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Item {
    /// The position of this item in the original input
    pub index: Variable,
    /// The profit one gets when taking the item
    pub value: usize,
    /// The amount of capacity consumed when taking the item
    pub weight: usize,
}

// ----------------------------------------------------------------------------
// --- KNAPSACK ---------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A 0/1 knapsack instance. It is immutable once constructed: solvers only
/// ever borrow it and work on their own copies when they need to reorder
/// the items.
///
/// # Example
/// ```
/// # use knapsack::*;
/// let problem = Knapsack::new(50, vec![(60, 10), (100, 20), (120, 30)]);
/// assert_eq!(3, problem.nb_items());
/// assert_eq!(50, problem.capacity());
/// assert_eq!(Variable(2), problem.items()[2].index);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Knapsack {
    capacity: usize,
    items: Vec<Item>,
}
impl Knapsack {
    /// Creates a new instance from a sequence of `(value, weight)` pairs. The
    /// position of each pair in the sequence becomes the index of the item.
    pub fn new<I>(capacity: usize, items: I) -> Self
    where I: IntoIterator<Item = (usize, usize)>
    {
        let items = items.into_iter()
            .enumerate()
            .map(|(index, (value, weight))| Item { index: Variable(index), value, weight })
            .collect();
        Knapsack { capacity, items }
    }
    /// The total weight the sack can hold
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    /// The items in their original order
    pub fn items(&self) -> &[Item] {
        &self.items
    }
    pub fn nb_items(&self) -> usize {
        self.items.len()
    }
    pub fn item(&self, var: Variable) -> &Item {
        &self.items[var.id()]
    }
    /// Sum of the weights of all the items taken in the given selection
    pub fn weight_of(&self, selection: &Selection) -> usize {
        selection.taken().map(|v| self.item(v).weight).sum()
    }
    /// Sum of the values of all the items taken in the given selection
    pub fn value_of(&self, selection: &Selection) -> usize {
        selection.taken().map(|v| self.item(v).value).sum()
    }
    /// Returns true iff the selection covers all items and fits in the sack
    pub fn is_feasible(&self, selection: &Selection) -> bool {
        selection.len() == self.nb_items() && self.weight_of(selection) <= self.capacity
    }
}

// ----------------------------------------------------------------------------
// --- SELECTION --------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A per-item flag telling whether or not the item is in the sack. Flags are
/// always laid out in the original item order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Selection(Vec<bool>);
impl Selection {
    /// A selection where none of the `nb_items` items is taken
    pub fn empty(nb_items: usize) -> Self {
        Selection(vec![false; nb_items])
    }
    pub fn take(&mut self, var: Variable) {
        self.0[var.id()] = true;
    }
    pub fn is_taken(&self, var: Variable) -> bool {
        self.0[var.id()]
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Iterates over the flags of all items
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }
    /// Iterates over the items that are in the sack
    pub fn taken(&self) -> impl Iterator<Item = Variable> + '_ {
        self.0.iter().enumerate()
            .filter(|(_, taken)| **taken)
            .map(|(i, _)| Variable(i))
    }
}
impl From<Vec<bool>> for Selection {
    fn from(flags: Vec<bool>) -> Self {
        Selection(flags)
    }
}
impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, taken) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", taken as u8)?;
        }
        Ok(())
    }
}

// ----------------------------------------------------------------------------
// --- Results ----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A reason explaining why a solver stopped before proving optimality
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Reason {
    /// It stopped because the configured cutoff criterion was met
    CutoffOccurred,
    /// It refused to start because the memory it would need exceeds the
    /// configured budget
    MemoryBudgetExceeded,
}

/// The outcome of one solver run
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Completion {
    /// is the given solution exact (proved optimal for the given problem)?
    /// or is it an approximation ?
    pub is_exact: bool,
    /// if present the value of the best solution found by the solver
    pub best_value: Option<usize>,
}

/// This is what gets reported to the caller once an instance has been solved.
///
/// Its `Display` implementation produces the two lines output format: the
/// total value followed by the optimality flag (0 or 1) on the first line,
/// and the selection flags on the second one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionRecord {
    pub total_value: usize,
    pub is_optimal: bool,
    pub selection: Selection,
}
impl fmt::Display for SolutionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.total_value, self.is_optimal as u8)?;
        write!(f, "{}", self.selection)
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################


#[cfg(test)]
mod test_knapsack {
    use crate::*;

    #[test]
    fn items_are_indexed_in_input_order() {
        let pb = Knapsack::new(10, vec![(5, 4), (3, 2), (8, 9)]);
        for (i, item) in pb.items().iter().enumerate() {
            assert_eq!(Variable(i), item.index);
        }
        assert_eq!(&Item{index: Variable(1), value: 3, weight: 2}, pb.item(Variable(1)));
    }
    #[test]
    fn value_and_weight_only_account_for_taken_items() {
        let pb = Knapsack::new(10, vec![(5, 4), (3, 2), (8, 9)]);
        let sel = Selection::from(vec![true, false, true]);
        assert_eq!(13, pb.value_of(&sel));
        assert_eq!(13, pb.weight_of(&sel));
    }
    #[test]
    fn a_selection_is_feasible_when_it_fits_in_the_sack() {
        let pb = Knapsack::new(10, vec![(5, 4), (3, 2), (8, 9)]);
        assert!(pb.is_feasible(&Selection::from(vec![true, true, false])));
        assert!(!pb.is_feasible(&Selection::from(vec![true, false, true])));
    }
    #[test]
    fn a_selection_of_the_wrong_length_is_not_feasible() {
        let pb = Knapsack::new(10, vec![(5, 4), (3, 2), (8, 9)]);
        assert!(!pb.is_feasible(&Selection::empty(2)));
    }
}

#[cfg(test)]
mod test_display {
    use crate::*;

    #[test]
    fn selection_is_rendered_as_space_separated_flags() {
        let sel = Selection::from(vec![false, true, true]);
        assert_eq!("0 1 1", sel.to_string());
    }
    #[test]
    fn an_empty_selection_renders_as_an_empty_string() {
        assert_eq!("", Selection::empty(0).to_string());
    }
    #[test]
    fn record_spans_two_lines() {
        let rec = SolutionRecord {
            total_value: 220,
            is_optimal: true,
            selection: Selection::from(vec![false, true, true]),
        };
        assert_eq!("220 1\n0 1 1", rec.to_string());
    }
    #[test]
    fn inexact_record_is_flagged_with_zero() {
        let rec = SolutionRecord {
            total_value: 7,
            is_optimal: false,
            selection: Selection::from(vec![true]),
        };
        assert_eq!("7 0\n1", rec.to_string());
    }
}
