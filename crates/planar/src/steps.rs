//! Step-by-step execution of the algorithms.
//!
//! Every algorithm is written once as a state machine implementing [`Stepper`].
//! The plain entry points (`graham`, `bentley_ottmann`, ...) drive the machine
//! to completion with [`run_to_end`]; the `*_steps` entry points wrap it in
//! [`Steps`], an iterator of owned snapshots.
//!
//! Snapshots are deep copies of the working state. Dropping a `Steps` early
//! leaves nothing behind; calling the entry point again starts from scratch.

use std::iter::FusedIterator;

/// Resumable algorithm state.
pub trait Stepper {
    /// Observable state between two steps.
    type Snapshot;
    /// Final result.
    type Output;

    /// Perform one step. Returns false once there is nothing left to do.
    fn advance(&mut self) -> bool;

    /// Owned copy of the current state.
    fn snapshot(&self) -> Self::Snapshot;

    /// Consume the machine and return the result of the steps taken so far.
    fn finish(self) -> Self::Output;
}

/// Drive `machine` until it stops and return its result.
pub fn run_to_end<M: Stepper>(mut machine: M) -> M::Output {
    while machine.advance() {}
    machine.finish()
}

/// Iterator over the snapshots of a [`Stepper`].
///
/// Yields the state before every step and, last, the final state.
#[derive(Clone, Debug)]
pub struct Steps<M> {
    machine: M,
    done: bool,
}

impl<M: Stepper> Steps<M> {
    pub(crate) fn new(machine: M) -> Self {
        Self {
            machine,
            done: false,
        }
    }

    /// Skip the remaining snapshots and return the final result.
    pub fn into_output(self) -> M::Output {
        run_to_end(self.machine)
    }
}

impl<M: Stepper> Iterator for Steps<M> {
    type Item = M::Snapshot;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let snap = self.machine.snapshot();
        if !self.machine.advance() {
            self.done = true;
        }
        Some(snap)
    }
}

impl<M: Stepper> FusedIterator for Steps<M> {}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts down from `n`, recording every value it passes.
    #[derive(Clone)]
    struct Countdown {
        n: u32,
        seen: Vec<u32>,
    }

    impl Stepper for Countdown {
        type Snapshot = Vec<u32>;
        type Output = Vec<u32>;

        fn advance(&mut self) -> bool {
            if self.n == 0 {
                return false;
            }
            self.seen.push(self.n);
            self.n -= 1;
            true
        }

        fn snapshot(&self) -> Vec<u32> {
            self.seen.clone()
        }

        fn finish(self) -> Vec<u32> {
            self.seen
        }
    }

    #[test]
    fn yields_before_each_step_and_final_state() {
        let snaps: Vec<_> = Steps::new(Countdown { n: 2, seen: vec![] }).collect();
        assert_eq!(snaps, vec![vec![], vec![2], vec![2, 1]]);
    }

    #[test]
    fn partial_consumption_does_not_change_result() {
        let m = Countdown { n: 5, seen: vec![] };
        let mut steps = Steps::new(m.clone());
        let first = steps.next().unwrap();
        assert!(first.is_empty());
        assert_eq!(steps.into_output(), run_to_end(m));
    }

    #[test]
    fn earlier_snapshots_are_not_mutated() {
        let mut steps = Steps::new(Countdown { n: 3, seen: vec![] });
        let _ = steps.next();
        let second = steps.next().unwrap();
        let _rest: Vec<_> = steps.by_ref().collect();
        assert_eq!(second, vec![3]);
        assert!(steps.next().is_none());
    }
}
