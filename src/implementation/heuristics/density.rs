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

//! Value density ordering shared by the branch-and-bound and greedy solvers.

use std::cmp::{Ordering, Reverse};

use ordered_float::OrderedFloat;

use crate::Item;

/// The value-to-weight ratio of an item. Items without weight are free: their
/// density is infinite.
pub fn density(item: &Item) -> OrderedFloat<f64> {
    if item.weight == 0 {
        OrderedFloat(f64::INFINITY)
    } else {
        OrderedFloat(item.value as f64 / item.weight as f64)
    }
}

/// Orders items by decreasing value density. Ties are broken by decreasing
/// value and then by increasing original index, so the resulting order is
/// total and does not depend on the input permutation.
#[derive(Debug, Default, Copy, Clone)]
pub struct DensityOrder;
impl DensityOrder {
    pub fn compare(&self, a: &Item, b: &Item) -> Ordering {
        let ka = (Reverse(density(a)), Reverse(a.value), a.index);
        let kb = (Reverse(density(b)), Reverse(b.value), b.index);
        ka.cmp(&kb)
    }
    /// Returns a copy of the given items, most promising first.
    pub fn sorted(&self, items: &[Item]) -> Vec<Item> {
        let mut sorted = items.to_vec();
        sorted.sort_unstable_by(|a, b| self.compare(a, b));
        sorted
    }
}

#[cfg(test)]
mod test_density {
    use crate::*;

    fn ids(items: &[Item]) -> Vec<usize> {
        items.iter().map(|i| i.index.id()).collect()
    }

    #[test]
    fn zero_weight_items_have_an_infinite_density() {
        let pb = Knapsack::new(0, vec![(5, 0), (0, 0)]);
        assert!(density(&pb.items()[0]).0.is_infinite());
        assert!(density(&pb.items()[1]).0.is_infinite());
    }
    #[test]
    fn densest_items_come_first() {
        let pb = Knapsack::new(50, vec![(60, 10), (100, 20), (120, 30)]);
        assert_eq!(vec![0, 1, 2], ids(&DensityOrder.sorted(pb.items())));
        let pb = Knapsack::new(50, vec![(120, 30), (60, 10), (100, 20)]);
        assert_eq!(vec![1, 2, 0], ids(&DensityOrder.sorted(pb.items())));
    }
    #[test]
    fn density_ties_are_broken_by_larger_value() {
        let pb = Knapsack::new(50, vec![(2, 1), (4, 2), (6, 3)]);
        assert_eq!(vec![2, 1, 0], ids(&DensityOrder.sorted(pb.items())));
    }
    #[test]
    fn full_ties_are_broken_by_original_index() {
        let pb = Knapsack::new(50, vec![(4, 2), (4, 2), (4, 2)]);
        assert_eq!(vec![0, 1, 2], ids(&DensityOrder.sorted(pb.items())));
    }
    #[test]
    fn free_items_precede_everything_else() {
        let pb = Knapsack::new(50, vec![(100, 1), (5, 0), (0, 0)]);
        assert_eq!(vec![1, 2, 0], ids(&DensityOrder.sorted(pb.items())));
    }
}
