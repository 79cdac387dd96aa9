use alloc::rc::Rc;
use alloc::vec::Vec;
use string_cache::DefaultAtom;

use crate::core::{ClassType, Ident, Ty, TyBuilder, TyNode};

/// Builder backed by `Rc`.
///
/// Nodes, type lists and parent links are reference counted, so a class used
/// as a generic argument or parent in many places is stored once. Class and
/// parameter names are interned atoms. Nothing else is deduplicated.
///
/// Handles are not `Send`; see [`ArcBuilder`](super::ArcBuilder) for types
/// shared across threads.
///
/// # Example
///
/// ```
/// use kindred_types::{BoxBuilder, ClassType, TyKind, Scalar};
///
/// let builder = BoxBuilder::new();
/// let int_ty = TyKind::Scalar(Scalar::Int).alloc(&builder);
/// let list_ty = ClassType::new(&builder, "List", [("E", int_ty)], None).alloc(&builder);
/// assert_eq!(list_ty.to_string(), "List<int>");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BoxBuilder;

impl BoxBuilder {
    /// Create a new box builder.
    pub fn new() -> Self {
        Self
    }
}

impl Default for BoxBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TyBuilder for BoxBuilder {
    type TyHandle = Rc<TyNode<Self>>;
    type IdentHandle = DefaultAtom;
    type TyListHandle = Vec<Ty<Self>>;
    type GenericListHandle = Vec<(Ident<Self>, Ty<Self>)>;
    type ClassHandle = Rc<ClassType<Self>>;

    fn alloc(&self, node: TyNode<Self>) -> Self::TyHandle {
        Rc::new(node)
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
        Rc::new(class)
    }
}
