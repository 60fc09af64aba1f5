//! Property-based tests for the generator, piles and machine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use fast_hanoi::core::{
    apply_move, check_piles, generate, initial_piles, reverse_move, solution_length,
    BoundedCounter, Move, Peg,
};
use fast_hanoi::create_hanoi;
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_peg()(index in 0..3u8) -> Peg {
        Peg::try_from(index).unwrap()
    }
}

prop_compose! {
    fn arbitrary_move()(from in arbitrary_peg(), offset in 1..3usize) -> Move {
        let to = Peg::ALL[(from.index() + offset) % 3];
        Move::new(from, to).unwrap()
    }
}

proptest! {
    #[test]
    fn generated_length_is_two_to_the_n_minus_one(n in 1..=10usize) {
        let moves = generate(n, Peg::Left, Peg::Right, Peg::Middle).unwrap();
        prop_assert_eq!(moves.len(), (1usize << n) - 1);
        prop_assert_eq!(Some(moves.len()), solution_length(n));
    }

    #[test]
    fn full_replay_solves_the_puzzle(n in 1..=10usize) {
        let moves = generate(n, Peg::Left, Peg::Right, Peg::Middle).unwrap();
        let mut piles = initial_piles(n).unwrap();
        for mv in moves {
            piles = apply_move(&piles, mv).unwrap();
        }

        let expected: Vec<u32> = (1..=n as u32).rev().collect();
        prop_assert_eq!(piles.peg(Peg::Right), expected.as_slice());
        prop_assert!(piles.peg(Peg::Left).is_empty());
        prop_assert!(piles.peg(Peg::Middle).is_empty());
    }

    #[test]
    fn legal_move_then_reverse_is_identity(
        n in 1..=8usize,
        k in any::<prop::sample::Index>(),
        mv in arbitrary_move(),
    ) {
        let machine = create_hanoi(n).unwrap();
        let state = machine.piles_at(k.index(machine.total() + 1)).unwrap();

        if let Ok(next) = apply_move(state, mv) {
            let back = apply_move(&next, reverse_move(mv)).unwrap();
            prop_assert_eq!(&back, state);
        }
    }

    #[test]
    fn illegal_moves_never_break_invariants(
        n in 1..=6usize,
        moves in prop::collection::vec(arbitrary_move(), 0..40),
    ) {
        let mut piles = initial_piles(n).unwrap();
        for mv in moves {
            if let Ok(next) = apply_move(&piles, mv) {
                piles = next;
            }
            prop_assert!(check_piles(&piles, n).is_ok());
        }
    }

    #[test]
    fn seeking_matches_stepping(n in 1..=8usize, k in any::<prop::sample::Index>()) {
        let mut stepped = create_hanoi(n).unwrap();
        let target = k.index(stepped.total() + 1);
        for _ in 0..target {
            stepped.step();
        }

        let mut seeked = create_hanoi(n).unwrap();
        prop_assert_eq!(seeked.set_to(target), target);

        prop_assert_eq!(stepped.current_state(), seeked.current_state());
    }

    #[test]
    fn step_then_step_back_restores(n in 1..=8usize, k in any::<prop::sample::Index>()) {
        let mut machine = create_hanoi(n).unwrap();
        machine.set_to(k.index(machine.total()));
        let index = machine.cursor();
        let piles = machine.piles().clone();

        prop_assert!(machine.step());
        prop_assert!(machine.step_back());

        prop_assert_eq!(machine.cursor(), index);
        prop_assert_eq!(machine.piles(), &piles);
    }

    #[test]
    fn cursor_stays_in_range(
        n in 1..=6usize,
        actions in prop::collection::vec(0..4u8, 0..200),
        target in any::<usize>(),
    ) {
        let mut machine = create_hanoi(n).unwrap();
        for action in actions {
            match action {
                0 => { machine.step(); }
                1 => { machine.step_back(); }
                2 => { machine.set_to(target); }
                _ => machine.reset(),
            }
            prop_assert!(machine.cursor() <= machine.total());
            prop_assert_eq!(machine.can_step(), machine.cursor() < machine.total());
            prop_assert_eq!(machine.can_step_back(), machine.cursor() > 0);
        }
    }

    #[test]
    fn counter_never_leaves_bounds(
        min in 0..50i64,
        span in 0..50i64,
        ops in prop::collection::vec(any::<i64>(), 0..50),
    ) {
        let max = min + span;
        let mut counter = BoundedCounter::new(min, max, min).unwrap();
        for op in ops {
            match op.rem_euclid(3) {
                0 => { counter.increment(); }
                1 => { counter.decrement(); }
                _ => { counter.set_to(op); }
            }
            prop_assert!(counter.value() >= min && counter.value() <= max);
            prop_assert_eq!(counter.can_increment(), counter.value() < max);
            prop_assert_eq!(counter.can_decrement(), min < counter.value());
        }
    }
}
