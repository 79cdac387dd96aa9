use core::iter::FusedIterator;

use smallvec::SmallVec;

use super::Children;
use crate::core::{ClassType, Ty, TyBuilder, TyKind};

/// Capability of type nodes that contain nested type nodes.
pub trait CompositeType<B: TyBuilder> {
    /// Lazily enumerates every type nested inside `self`, depth-first and
    /// pre-order: each child is yielded before its own descendants.
    ///
    /// No work happens until the iterator is consumed, and each call starts a
    /// fresh walk.
    fn traverse(&self) -> Traverse<'_, B>;
}

/// Depth-first, pre-order walk over nested types.
///
/// Stack-based, so deeply nested types don't grow the call stack.
#[derive(Debug)]
pub struct Traverse<'a, B: TyBuilder> {
    stack: SmallVec<[&'a Ty<B>; 8]>,
}

impl<'a, B: TyBuilder> Traverse<'a, B> {
    pub fn new(children: Children<'a, B>) -> Self {
        let mut stack = SmallVec::new();
        stack.extend(children.rev());
        Self { stack }
    }
}

impl<B: TyBuilder> Clone for Traverse<'_, B> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, B: TyBuilder> Iterator for Traverse<'a, B> {
    type Item = &'a Ty<B>;

    fn next(&mut self) -> Option<Self::Item> {
        let ty = self.stack.pop()?;
        // Push children in reverse, so they pop in order.
        self.stack.extend(ty.kind().children().rev());
        Some(ty)
    }
}

impl<B: TyBuilder> FusedIterator for Traverse<'_, B> {}

impl<B: TyBuilder> CompositeType<B> for TyKind<B> {
    fn traverse(&self) -> Traverse<'_, B> {
        Traverse::new(self.children())
    }
}

impl<B: TyBuilder> CompositeType<B> for Ty<B> {
    fn traverse(&self) -> Traverse<'_, B> {
        self.kind().traverse()
    }
}

impl<B: TyBuilder> CompositeType<B> for ClassType<B> {
    fn traverse(&self) -> Traverse<'_, B> {
        Traverse::new(Children::Generics(self.generics().iter()))
    }
}
