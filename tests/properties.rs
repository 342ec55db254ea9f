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

//! These tests compare the solvers with one another (and with an exhaustive
//! enumeration of all subsets) on randomly generated small instances.

use rand::{rngs::StdRng, Rng, SeedableRng};

use knapsack::*;

/// Generates an instance of at most `max_items` items. Some items weigh
/// nothing and some are worthless, to exercise the corner cases.
fn random_instance(rng: &mut StdRng, max_items: usize) -> Knapsack {
    let n = rng.gen_range(0..=max_items);
    let items: Vec<(usize, usize)> = (0..n)
        .map(|_| (rng.gen_range(0..=50), rng.gen_range(0..=30)))
        .collect();
    let total: usize = items.iter().map(|(_, w)| *w).sum();
    let capacity = rng.gen_range(0..=total.max(1));
    Knapsack::new(capacity, items)
}

/// Maximum value over all the 2^n subsets that fit in the sack
fn brute_force(problem: &Knapsack) -> usize {
    let n = problem.nb_items();
    let mut best = 0;
    for mask in 0_usize..(1 << n) {
        let sel = Selection::from((0..n).map(|i| mask & (1 << i) != 0).collect::<Vec<_>>());
        if problem.is_feasible(&sel) {
            best = best.max(problem.value_of(&sel));
        }
    }
    best
}

fn for_each_instance(seed: u64, count: usize, max_items: usize, check: impl Fn(&Knapsack)) {
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..count {
        check(&random_instance(&mut rng, max_items));
    }
}

#[test]
fn dynamic_programming_is_optimal() {
    for_each_instance(42, 300, 12, |pb| {
        let (value, sel) = dynamic_programming(pb);
        assert_eq!(brute_force(pb), value, "{:?}", pb);
        assert!(pb.is_feasible(&sel));
        assert_eq!(value, pb.value_of(&sel));
    });
}

#[test]
fn branch_and_bound_agrees_with_dynamic_programming() {
    for_each_instance(7, 500, 16, |pb| {
        let mut solver = BranchAndBound::new(pb, &NoCutoff);
        let Completion { is_exact, best_value } = solver.maximize();
        let sel = solver.best_solution().unwrap();
        assert!(is_exact);
        assert_eq!(Some(dynamic_programming(pb).0), best_value, "{:?}", pb);
        assert!(pb.is_feasible(&sel));
        assert_eq!(best_value, Some(pb.value_of(&sel)));
        assert_eq!(branch_and_bound(pb), best_value.unwrap());
    });
}

#[test]
fn greedy_is_feasible_and_never_beats_the_optimum() {
    for_each_instance(3, 500, 16, |pb| {
        let (optimum, _) = dynamic_programming(pb);
        for fill_exact in [false, true] {
            let mut solver = Greedy::new(pb).with_fill_exact(fill_exact);
            let Completion { is_exact, best_value } = solver.maximize();
            let sel = solver.best_solution().unwrap();
            assert!(!is_exact);
            assert!(pb.is_feasible(&sel));
            assert_eq!(best_value, Some(pb.value_of(&sel)));
            assert!(best_value.unwrap() <= optimum);
        }
    });
}

#[test]
fn zero_capacity_without_free_items_yields_nothing() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..50 {
        let n = rng.gen_range(0..10);
        let pb = Knapsack::new(0, (0..n).map(|_| (rng.gen_range(0..50), rng.gen_range(1..30))).collect::<Vec<_>>());
        let empty = Selection::empty(n);

        assert_eq!((0, empty.clone()), dynamic_programming(&pb));
        assert_eq!((0, empty.clone()), greedy(&pb));
        let mut bb = BranchAndBound::new(&pb, &NoCutoff);
        assert_eq!(Some(0), bb.maximize().best_value);
        assert_eq!(Some(empty), bb.best_solution());
    }
}

#[test]
fn a_free_valuable_item_is_always_taken() {
    for_each_instance(9, 200, 10, |pb| {
        let mut items: Vec<(usize, usize)> = pb.items().iter().map(|i| (i.value, i.weight)).collect();
        items.push((5, 0));
        let pb = Knapsack::new(pb.capacity(), items);
        let free = Variable(pb.nb_items() - 1);

        let (_, sel) = dynamic_programming(&pb);
        assert!(sel.is_taken(free), "{:?}", pb);
        let mut bb = BranchAndBound::new(&pb, &NoCutoff);
        bb.maximize();
        assert!(bb.best_solution().unwrap().is_taken(free), "{:?}", pb);
    });
}

#[test]
fn resolution_is_deterministic() {
    for_each_instance(11, 100, 14, |pb| {
        assert_eq!(select_and_solve(pb).to_string(), select_and_solve(pb).to_string());
        assert_eq!(greedy(pb), greedy(pb));
        assert_eq!(dynamic_programming(pb), dynamic_programming(pb));

        let mut a = BranchAndBound::new(pb, &NoCutoff);
        let mut b = BranchAndBound::new(pb, &NoCutoff);
        assert_eq!(a.maximize(), b.maximize());
        assert_eq!(a.best_solution(), b.best_solution());
    });
}

#[test]
fn item_order_does_not_change_the_optimum() {
    for_each_instance(13, 200, 12, |pb| {
        let reversed = Knapsack::new(pb.capacity(), pb.items().iter().rev().map(|i| (i.value, i.weight)).collect::<Vec<_>>());
        assert_eq!(dynamic_programming(pb).0, dynamic_programming(&reversed).0);
        assert_eq!(branch_and_bound(pb), branch_and_bound(&reversed));
    });
}
