use alloc::sync::Arc;
use alloc::vec::Vec;
use string_cache::DefaultAtom;

use crate::core::{ClassType, Ident, Ty, TyBuilder, TyNode};

/// Builder that uses atomic reference counting.
///
/// Same as [`BoxBuilder`](super::BoxBuilder), but the resulting types are
/// `Send + Sync`: once built, they can be handed to any number of threads.
///
/// # Example
///
/// ```
/// use kindred_types::{ArcBuilder, ty};
///
/// let b = ArcBuilder::new();
/// let boxed = ty!(b, "Box"[T = "Item"]);
/// let rendered = std::thread::spawn(move || boxed.to_string()).join().unwrap();
/// assert_eq!(rendered, "Box<Item>");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ArcBuilder;

impl ArcBuilder {
    /// Create a new arc builder.
    pub fn new() -> Self {
        Self
    }
}

impl Default for ArcBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TyBuilder for ArcBuilder {
    type TyHandle = Arc<TyNode<Self>>;
    type IdentHandle = DefaultAtom;
    type TyListHandle = Vec<Ty<Self>>;
    type GenericListHandle = Vec<(Ident<Self>, Ty<Self>)>;
    type ClassHandle = Arc<ClassType<Self>>;

    fn alloc(&self, node: TyNode<Self>) -> Self::TyHandle {
        Arc::new(node)
    }

    fn alloc_ident(&self, ident: impl AsRef<str>) -> Self::IdentHandle {
        DefaultAtom::from(ident.as_ref())
    }

    fn alloc_ty_list(
        &self,
        iter: impl IntoIterator<Item = Ty<Self>, IntoIter: ExactSizeIterator>,
    ) -> Self::TyListHandle {
        iter.into_iter().collect()
    }

    fn alloc_generic_list(
        &self,
        iter: impl IntoIterator<Item = (Ident<Self>, Ty<Self>), IntoIter: ExactSizeIterator>,
    ) -> Self::GenericListHandle {
        iter.into_iter().collect()
    }

    fn alloc_class(&self, class: ClassType<Self>) -> Self::ClassHandle {
        Arc::new(class)
    }
}

#[cfg(test)]
mod tests {
    use static_assertions::{assert_impl_all, assert_not_impl_any};

    use super::*;
    use crate::builders::BoxBuilder;

    assert_impl_all!(Ty<ArcBuilder>: Send, Sync);
    assert_impl_all!(ClassType<ArcBuilder>: Send, Sync);
    assert_not_impl_any!(Ty<BoxBuilder>: Send, Sync);
}
