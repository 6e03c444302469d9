//! Core behavior trait.
//!
//! This module defines the [`Behavior`] trait, which is the fundamental
//! abstraction for all behavior tree nodes. The trait is generic over a
//! context type `C`, allowing nodes to access agent and world state.

use crate::Status;

/// A behavior tree node that can be evaluated against a context.
pub trait Behavior<C: ?Sized>: Send + Sync {
    /// Evaluate this behavior node against the given context.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Mutable reference to the context/blackboard. Nodes can read
    ///   agent and world state and record intents through it.
    ///
    /// # Returns
    ///
    /// - `Status::Success` if the behavior succeeded
    /// - `Status::Failure` if the behavior failed
    fn tick(&self, ctx: &mut C) -> Status;
}

/// Blanket implementation for boxed behaviors.
///
/// This allows `Box<dyn Behavior<C>>` to also implement `Behavior<C>`,
/// enabling dynamic dispatch and heterogeneous collections of nodes. Because
/// the impl is generic over the boxed type, a box holding a node that works
/// for every lifetime of a borrowed context keeps that property.
impl<C: ?Sized, B: Behavior<C> + ?Sized> Behavior<C> for Box<B> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }
}
