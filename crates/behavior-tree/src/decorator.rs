//! Decorator behavior nodes.
//!
//! Decorators wrap a single child behavior and modify its result.
//! This module provides [`Inverter`] (NOT logic).

use crate::{Behavior, Status};

/// Inverts the result of its child behavior.
///
/// # Semantics
///
/// - If the child returns `Success`, the inverter returns `Failure`
/// - If the child returns `Failure`, the inverter returns `Success`
///
/// This is analogous to a logical NOT (!) operation.
pub struct Inverter<N> {
    child: N,
}

impl<N> Inverter<N> {
    /// Creates a new inverter that wraps the given child behavior.
    pub fn new(child: N) -> Self {
        Self { child }
    }
}

impl<C: ?Sized, N: Behavior<C>> Behavior<C> for Inverter<N> {
    fn tick(&self, ctx: &mut C) -> Status {
        self.child.tick(ctx).invert()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestContext {
        value: i32,
    }

    struct IsPositive;
    impl Behavior<TestContext> for IsPositive {
        fn tick(&self, ctx: &mut TestContext) -> Status {
            if ctx.value > 0 {
                Status::Success
            } else {
                Status::Failure
            }
        }
    }

    #[test]
    fn inverter_inverts_success() {
        let inverter = Inverter::new(IsPositive);

        let mut ctx = TestContext { value: 10 };
        assert_eq!(inverter.tick(&mut ctx), Status::Failure);
    }

    #[test]
    fn inverter_inverts_failure() {
        let inverter = Inverter::new(IsPositive);

        let mut ctx = TestContext { value: -10 };
        assert_eq!(inverter.tick(&mut ctx), Status::Success);
    }
}
