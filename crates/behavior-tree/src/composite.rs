//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors.
//! This module provides the fundamental building blocks for creating complex
//! decision trees: [`Sequence`] (AND logic) and [`Selector`] (OR logic).
//!
//! Composites keep no cursor between ticks. Each tick starts again at the
//! first child, and children are always visited in declaration order, so a
//! selector's child order is its priority order.

use crate::{Behavior, Status};

/// Executes child behaviors in sequence until one fails.
///
/// # Semantics
///
/// A `Sequence` node evaluates its children from left to right:
/// - If a child returns `Failure`, the sequence **stops immediately** and returns `Failure`
/// - If a child returns `Success`, the sequence **continues** to the next child
/// - If all children return `Success`, the sequence returns `Success`
///
/// This is analogous to a short-circuited logical AND (&&) operation. An
/// empty sequence succeeds.
pub struct Sequence<N> {
    children: Vec<N>,
}

impl<N> Sequence<N> {
    /// Creates a new sequence with the given child behaviors.
    pub fn new(children: Vec<N>) -> Self {
        Self { children }
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if the sequence has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<C: ?Sized, N: Behavior<C>> Behavior<C> for Sequence<N> {
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            match child.tick(ctx) {
                Status::Success => continue,
                Status::Failure => return Status::Failure,
            }
        }
        Status::Success
    }
}

/// Executes child behaviors in sequence until one succeeds.
///
/// # Semantics
///
/// A `Selector` node evaluates its children from left to right:
/// - If a child returns `Success`, the selector **stops immediately** and returns `Success`
/// - If a child returns `Failure`, the selector **continues** to the next child
/// - If all children return `Failure`, the selector returns `Failure`
///
/// This is analogous to a short-circuited logical OR (||) operation. An
/// empty selector fails.
pub struct Selector<N> {
    children: Vec<N>,
}

impl<N> Selector<N> {
    /// Creates a new selector with the given child behaviors.
    pub fn new(children: Vec<N>) -> Self {
        Self { children }
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if the selector has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<C: ?Sized, N: Behavior<C>> Behavior<C> for Selector<N> {
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            match child.tick(ctx) {
                Status::Success => return Status::Success,
                Status::Failure => continue,
            }
        }
        Status::Failure
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Condition;

    type Node = Box<dyn Behavior<TestContext>>;

    struct TestContext {
        value: i32,
    }

    struct Increment;
    impl Behavior<TestContext> for Increment {
        fn tick(&self, ctx: &mut TestContext) -> Status {
            ctx.value += 1;
            Status::Success
        }
    }

    struct Decrement;
    impl Behavior<TestContext> for Decrement {
        fn tick(&self, ctx: &mut TestContext) -> Status {
            ctx.value -= 1;
            Status::Success
        }
    }

    struct FailAlways;
    impl Behavior<TestContext> for FailAlways {
        fn tick(&self, _ctx: &mut TestContext) -> Status {
            Status::Failure
        }
    }

    fn constant(result: bool) -> Node {
        Box::new(Condition::new(move |_: &TestContext| result))
    }

    #[test]
    fn sequence_all_success() {
        let seq = Sequence::new(vec![Increment, Increment]);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(seq.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.value, 2);
    }

    #[test]
    fn sequence_fails_on_first_failure() {
        let seq: Sequence<Node> = Sequence::new(vec![
            Box::new(Increment),
            Box::new(FailAlways),
            Box::new(Increment), // Should not execute
        ]);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(seq.tick(&mut ctx), Status::Failure);
        assert_eq!(ctx.value, 1); // First increment is not rolled back
    }

    #[test]
    fn selector_succeeds_on_first_success() {
        let sel: Selector<Node> = Selector::new(vec![
            Box::new(FailAlways),
            Box::new(Increment),
            Box::new(Decrement), // Should not execute
        ]);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(sel.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.value, 1);
    }

    #[test]
    fn selector_fails_when_all_fail() {
        let sel = Selector::new(vec![FailAlways, FailAlways]);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(sel.tick(&mut ctx), Status::Failure);
    }

    #[test]
    fn boolean_laws_over_conditions() {
        let mut ctx = TestContext { value: 0 };

        let seq = Sequence::new(vec![constant(true), constant(true)]);
        assert!(seq.tick(&mut ctx).is_success());

        let seq = Sequence::new(vec![constant(true), constant(false)]);
        assert!(seq.tick(&mut ctx).is_failure());

        let sel = Selector::new(vec![constant(false), constant(true)]);
        assert!(sel.tick(&mut ctx).is_success());

        let sel = Selector::new(vec![constant(false), constant(false)]);
        assert!(sel.tick(&mut ctx).is_failure());
    }

    #[test]
    fn empty_composites_are_identity_elements() {
        let mut ctx = TestContext { value: 0 };

        let seq: Sequence<Node> = Sequence::new(Vec::new());
        assert!(seq.is_empty());
        assert_eq!(seq.tick(&mut ctx), Status::Success);

        let sel: Selector<Node> = Selector::new(Vec::new());
        assert_eq!(sel.tick(&mut ctx), Status::Failure);
    }

    #[test]
    fn composites_restart_from_first_child_every_tick() {
        let seq: Sequence<Node> = Sequence::new(vec![Box::new(Increment), Box::new(FailAlways)]);

        let mut ctx = TestContext { value: 0 };
        seq.tick(&mut ctx);
        seq.tick(&mut ctx);
        seq.tick(&mut ctx);

        assert_eq!(ctx.value, 3);
    }
}
