//! Leaf behavior nodes built from closures.
//!
//! [`Condition`] wraps a read-only predicate, [`Action`] wraps a
//! side-effecting step. Both adapt a plain `bool` into a [`Status`].

use crate::{Behavior, Status};

/// Evaluates a predicate over the context without modifying it.
///
/// The predicate receives a shared reference, so a condition cannot change
/// the blackboard it inspects.
pub struct Condition<F> {
    predicate: F,
}

impl<F> Condition<F> {
    /// Wraps the given predicate.
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<C: ?Sized, F> Behavior<C> for Condition<F>
where
    F: Fn(&C) -> bool + Send + Sync,
{
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (self.predicate)(ctx).into()
    }
}

/// Executes a side-effecting step and reports whether it succeeded.
///
/// Effects are not rolled back when an enclosing [`crate::Sequence`] fails
/// later on, so actions must tolerate partial sequence execution.
pub struct Action<F> {
    step: F,
}

impl<F> Action<F> {
    /// Wraps the given step.
    pub fn new(step: F) -> Self {
        Self { step }
    }
}

impl<C: ?Sized, F> Behavior<C> for Action<F>
where
    F: Fn(&mut C) -> bool + Send + Sync,
{
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (self.step)(ctx).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        value: i32,
    }

    #[test]
    fn condition_maps_bool_to_status() {
        let positive = Condition::new(|ctx: &Counter| ctx.value > 0);

        let mut ctx = Counter { value: 1 };
        assert_eq!(positive.tick(&mut ctx), Status::Success);

        ctx.value = 0;
        assert_eq!(positive.tick(&mut ctx), Status::Failure);
    }

    #[test]
    fn action_runs_its_step() {
        let bump = Action::new(|ctx: &mut Counter| {
            ctx.value += 1;
            true
        });

        let mut ctx = Counter { value: 0 };
        assert_eq!(bump.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.value, 1);
    }
}
