use super::builder::TyBuilder;
use super::class::ClassType;
use super::flags::TyFlags;
use super::traversal::Children;
use super::ty::{Ty, TyList};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TyKind<B: TyBuilder> {
    /// The universal top type. Every value belongs to it, and it is
    /// optimistically narrowed to whatever type is expected.
    Mixed,

    /// An object whose class could not be determined.
    ///
    /// Always considered compatible with any object type.
    UndefinedObject,

    /// Scalar types (Bool, Int, Float, Str, Bytes)
    Scalar(Scalar),

    /// Array type with element type
    Array(Ty<B>),

    /// One of several alternative types, in declaration order.
    ///
    /// The union owns its matching policy, see
    /// [`Relation::union_matched_by`](crate::relation::Relation::union_matched_by).
    Union(TyList<B>),

    /// Instance of a named class, possibly generic, possibly with a parent.
    Class(ClassType<B>),
}

impl<B: TyBuilder> TyKind<B> {
    pub fn compute_flags(&self) -> TyFlags {
        let own = match self {
            TyKind::Mixed | TyKind::UndefinedObject => TyFlags::HAS_UNRESOLVED,
            TyKind::Class(_) => TyFlags::HAS_CLASSES,
            TyKind::Scalar(_) | TyKind::Array(_) | TyKind::Union(_) => TyFlags::empty(),
        };
        // Children carry their own cached flags, so one level is enough.
        self.children()
            .fold(own, |acc, child| acc | child.node().flags())
    }

    pub fn alloc(self, builder: &B) -> Ty<B> {
        Ty::new(builder, self)
    }

    /// Immediate child types, in definition order:
    /// - `Array`: `[element]`
    /// - `Union`: `[member0, member1, ...]`
    /// - `Class`: `[generic0, generic1, ...]` (the parent is not a child)
    /// - Leaves (Mixed, UndefinedObject, Scalar): `[]`
    pub fn children(&self) -> Children<'_, B> {
        match self {
            TyKind::Mixed | TyKind::UndefinedObject | TyKind::Scalar(_) => Children::None,
            TyKind::Array(element) => Children::One(Some(element)),
            TyKind::Union(members) => Children::List(members.iter()),
            TyKind::Class(class) => Children::Generics(class.generics().iter()),
        }
    }

    /// Returns the object view of this kind, if it describes instances of a
    /// named class.
    pub fn as_object(&self) -> Option<&ClassType<B>> {
        match self {
            TyKind::Class(class) => Some(class),
            TyKind::Mixed
            | TyKind::UndefinedObject
            | TyKind::Scalar(_)
            | TyKind::Array(_)
            | TyKind::Union(_) => None,
        }
    }
}

/// Scalar type variants
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scalar {
    /// Boolean type
    Bool,

    /// Integer type
    Int,

    /// Floating-point type
    Float,

    /// String type
    Str,

    /// Bytes type
    Bytes,
}

impl Scalar {
    /// The canonical spelling used when rendering types.
    pub fn name(self) -> &'static str {
        match self {
            Scalar::Bool => "bool",
            Scalar::Int => "int",
            Scalar::Float => "float",
            Scalar::Str => "string",
            Scalar::Bytes => "bytes",
        }
    }
}
