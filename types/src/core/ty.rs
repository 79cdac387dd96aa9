use core::ops::Deref;

use super::builder::TyBuilder;
use super::class::ClassType;
use super::flags::TyFlags;
use super::kind::TyKind;

/// Lightweight wrapper around the builder's representation.
///
/// Equality and hashing are structural for every builder: two types built
/// separately from the same parts compare equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ty<B: TyBuilder>(B::TyHandle);

impl<B: TyBuilder> Ty<B> {
    pub fn new(builder: &B, kind: TyKind<B>) -> Self {
        Self(builder.alloc(TyNode::new(kind)))
    }

    pub fn node(&self) -> &TyNode<B> {
        self.0.as_ref()
    }

    pub fn kind(&self) -> &TyKind<B> {
        self.node().kind()
    }

    pub fn flags(&self) -> TyFlags {
        self.node().flags()
    }

    /// Returns the class type if this is a `Class` node.
    pub fn as_class(&self) -> Option<&ClassType<B>> {
        match self.kind() {
            TyKind::Class(class) => Some(class),
            _ => None,
        }
    }

    /// True when neither `mixed` nor an undetermined object appears anywhere
    /// in this type.
    pub fn is_resolved(&self) -> bool {
        !self.flags().contains(TyFlags::HAS_UNRESOLVED)
    }
}

// Implement Copy when TyHandle is Copy (e.g., for ArenaBuilder)
impl<B: TyBuilder> Copy for Ty<B> where B::TyHandle: Copy {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TyNode<B: TyBuilder>(TyFlags, TyKind<B>);

impl<B: TyBuilder> TyNode<B> {
    pub fn new(kind: TyKind<B>) -> Self {
        let flags = kind.compute_flags();
        Self(flags, kind)
    }

    pub fn flags(&self) -> TyFlags {
        self.0
    }

    pub fn kind(&self) -> &TyKind<B> {
        &self.1
    }
}

impl<B: TyBuilder> AsRef<TyNode<B>> for TyNode<B> {
    fn as_ref(&self) -> &TyNode<B> {
        self
    }
}

impl<B: TyBuilder> core::hash::Hash for TyNode<B> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        // Flags are computed from the kind, so we don't need to hash them.
        self.kind().hash(state);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ident<B: TyBuilder>(B::IdentHandle);

impl<B: TyBuilder> Ident<B> {
    pub fn new(builder: &B, name: impl AsRef<str>) -> Self {
        Self(builder.alloc_ident(name))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }
}

// Implement Copy when IdentHandle is Copy (e.g., for ArenaBuilder)
impl<B: TyBuilder> Copy for Ident<B> where B::IdentHandle: Copy {}

// === TyList ===

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TyList<B: TyBuilder>(B::TyListHandle);

impl<B: TyBuilder> TyList<B> {
    pub fn from_iter(
        builder: &B,
        iter: impl IntoIterator<Item = Ty<B>, IntoIter: ExactSizeIterator>,
    ) -> Self {
        Self(builder.alloc_ty_list(iter))
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Ty<B>> {
        self.0.iter()
    }
}

impl<B: TyBuilder> Deref for TyList<B> {
    type Target = [Ty<B>];

    fn deref(&self) -> &Self::Target {
        self.0.deref()
    }
}

impl<'a, B: TyBuilder> IntoIterator for &'a TyList<B> {
    type Item = &'a Ty<B>;
    type IntoIter = core::slice::Iter<'a, Ty<B>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// === GenericList ===

/// Generic arguments of a class, keyed by parameter name, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GenericList<B: TyBuilder>(B::GenericListHandle);

impl<B: TyBuilder> GenericList<B> {
    /// Builds the list with map semantics: a repeated name overwrites the
    /// earlier binding but keeps its original position.
    pub fn from_iter<N: AsRef<str>>(
        builder: &B,
        iter: impl IntoIterator<Item = (N, Ty<B>)>,
    ) -> Self {
        let mut bindings: alloc::vec::Vec<(Ident<B>, Ty<B>)> = alloc::vec::Vec::new();
        for (name, ty) in iter {
            let name = name.as_ref();
            match bindings.iter_mut().find(|(bound, _)| bound.as_str() == name) {
                Some(binding) => binding.1 = ty,
                None => bindings.push((Ident::new(builder, name), ty)),
            }
        }
        Self(builder.alloc_generic_list(bindings))
    }

    pub fn get(&self, name: &str) -> Option<&Ty<B>> {
        self.iter()
            .find(|(param, _)| param.as_str() == name)
            .map(|(_, ty)| ty)
    }

    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> + DoubleEndedIterator {
        self.iter().map(|(name, _)| name.as_str())
    }

    pub fn types(&self) -> impl ExactSizeIterator<Item = &Ty<B>> + DoubleEndedIterator {
        self.iter().map(|(_, ty)| ty)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, (Ident<B>, Ty<B>)> {
        self.0.iter()
    }
}

impl<B: TyBuilder> Deref for GenericList<B> {
    type Target = [(Ident<B>, Ty<B>)];

    fn deref(&self) -> &Self::Target {
        self.0.deref()
    }
}

impl<'a, B: TyBuilder> IntoIterator for &'a GenericList<B> {
    type Item = &'a (Ident<B>, Ty<B>);
    type IntoIter = core::slice::Iter<'a, (Ident<B>, Ty<B>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// === ClassRef ===

/// Shared reference to a class type, as stored in parent links.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassRef<B: TyBuilder>(B::ClassHandle);

impl<B: TyBuilder> ClassRef<B> {
    pub fn new(builder: &B, class: ClassType<B>) -> Self {
        Self(builder.alloc_class(class))
    }
}

impl<B: TyBuilder> Copy for ClassRef<B> where B::ClassHandle: Copy {}

impl<B: TyBuilder> Deref for ClassRef<B> {
    type Target = ClassType<B>;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
