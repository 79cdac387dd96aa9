use bumpalo::Bump;

use crate::core::{ClassType, Ident, Ty, TyBuilder, TyNode};

/// Builder that uses arena allocation.
///
/// Types are allocated in a `Bump` arena. We don't do actual interning
/// (deduplication), just allocation. Handles are plain references, so types
/// are `Copy` and live as long as the arena.
///
/// Bumpalo doesn't run destructors, which is fine: arena types own no heap
/// data outside the arena.
///
/// # Example
///
/// ```
/// use kindred_types::{ArenaBuilder, ClassType, TyKind, Scalar};
/// use bumpalo::Bump;
///
/// let arena = Bump::new();
/// let builder = ArenaBuilder::new(&arena);
///
/// let int_ty = TyKind::Scalar(Scalar::Int).alloc(&builder);
/// let list_ty = ClassType::new(&builder, "List", [("E", int_ty)], None).alloc(&builder);
/// assert_eq!(list_ty.to_string(), "List<int>");
/// ```
#[derive(Copy, Clone, Debug)]
pub struct ArenaBuilder<'arena> {
    arena: &'arena Bump,
}

// Manual implementations since Bump doesn't implement PartialEq/Eq/Hash
// We use pointer equality - two builders are equal if they point to the same arena
impl<'arena> PartialEq for ArenaBuilder<'arena> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.arena, other.arena)
    }
}

impl<'arena> Eq for ArenaBuilder<'arena> {}

impl<'arena> core::hash::Hash for ArenaBuilder<'arena> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        core::ptr::hash(self.arena, state)
    }
}

impl<'arena> ArenaBuilder<'arena> {
    /// Create a new arena builder.
    pub fn new(arena: &'arena Bump) -> Self {
        Self { arena }
    }
}

impl<'arena> TyBuilder for ArenaBuilder<'arena> {
    type TyHandle = &'arena TyNode<Self>;
    type IdentHandle = &'arena str;
    type TyListHandle = &'arena [Ty<Self>];
    type GenericListHandle = &'arena [(Ident<Self>, Ty<Self>)];
    type ClassHandle = &'arena ClassType<Self>;

    fn alloc(&self, node: TyNode<Self>) -> Self::TyHandle {
        self.arena.alloc(node)
    }

    fn alloc_ident(&self, ident: impl AsRef<str>) -> Self::IdentHandle {
        self.arena.alloc_str(ident.as_ref())
    }

    fn alloc_ty_list(
        &self,
        iter: impl IntoIterator<Item = Ty<Self>, IntoIter: ExactSizeIterator>,
    ) -> Self::TyListHandle {
        self.arena.alloc_slice_fill_iter(iter)
    }

    fn alloc_generic_list(
        &self,
        iter: impl IntoIterator<Item = (Ident<Self>, Ty<Self>), IntoIter: ExactSizeIterator>,
    ) -> Self::GenericListHandle {
        self.arena.alloc_slice_fill_iter(iter)
    }

    fn alloc_class(&self, class: ClassType<Self>) -> Self::ClassHandle {
        self.arena.alloc(class)
    }
}

#[cfg(test)]
mod tests {
    use static_assertions::{assert_eq_size, assert_impl_all};

    use super::*;

    // Arena handles are thin references.
    assert_eq_size!(Ty<ArenaBuilder<'static>>, usize);
    assert_impl_all!(Ty<ArenaBuilder<'static>>: Copy, Send, Sync);
    assert_impl_all!(ClassType<ArenaBuilder<'static>>: Send, Sync);

    #[test]
    fn test_builders_on_same_arena_are_equal() {
        let arena = Bump::new();
        let other = Bump::new();
        assert_eq!(ArenaBuilder::new(&arena), ArenaBuilder::new(&arena));
        assert_ne!(ArenaBuilder::new(&arena), ArenaBuilder::new(&other));
    }
}
