//! Class types: instances of a named class, optionally generic, optionally
//! with a known parent class.

use crate::hierarchy::Hierarchy;
use crate::relation::{Relation, RuntimeValue};

use super::builder::TyBuilder;
use super::kind::TyKind;
use super::ty::{ClassRef, GenericList, Ident, Ty};

/// Separator between namespace segments of a fully-qualified class name.
///
/// Leading separators carry no meaning: `\App\User` and `App\User` name the
/// same class.
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Capability of types describing instances of a named entity, as opposed to
/// scalars or collections.
pub trait ObjectType {
    /// Fully-qualified name, without leading namespace separators.
    fn class_name(&self) -> &str;
}

/// An instance of class `C`, with generic arguments bound by parameter name and
/// the resolved parent class, if any.
///
/// Immutable once built. Generic arguments and the parent are shared handles,
/// so cloning a `ClassType` never deep-copies nested types.
///
/// # Example
///
/// ```
/// use kindred_types::{BoxBuilder, ClassType, ty};
///
/// let b = BoxBuilder::new();
/// let animal = ClassType::named(&b, "\\Zoo\\Animal");
/// let dog = ClassType::new(&b, "Zoo\\Dog", [("T", ty!(b, Int))], Some(animal));
///
/// assert_eq!(dog.class_name(), "Zoo\\Dog");
/// assert_eq!(dog.parent().class_name(), "Zoo\\Animal");
/// assert_eq!(dog.to_string(), "Zoo\\Dog<int>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassType<B: TyBuilder> {
    name: Ident<B>,
    generics: GenericList<B>,
    parent: Option<ClassRef<B>>,
}

impl<B: TyBuilder> ClassType<B> {
    /// Builds a class type.
    ///
    /// Leading namespace separators are stripped from `name`. A generic
    /// parameter given twice keeps the last type but its first position.
    /// Neither the class nor its parent chain is validated; an acyclic parent
    /// chain is the caller's responsibility.
    pub fn new<N: AsRef<str>>(
        builder: &B,
        name: impl AsRef<str>,
        generics: impl IntoIterator<Item = (N, Ty<B>)>,
        parent: Option<ClassType<B>>,
    ) -> Self {
        let name = normalize_class_name(name.as_ref());
        debug_assert!(!name.is_empty(), "class name must not be empty");

        Self {
            name: Ident::new(builder, name),
            generics: GenericList::from_iter(builder, generics),
            parent: parent.map(|parent| ClassRef::new(builder, parent)),
        }
    }

    /// Builds a non-generic class type without a parent.
    pub fn named(builder: &B, name: impl AsRef<str>) -> Self {
        Self::new::<&str>(builder, name, [], None)
    }

    pub fn class_name(&self) -> &str {
        self.name.as_str()
    }

    pub fn generics(&self) -> &GenericList<B> {
        &self.generics
    }

    /// The argument bound to generic parameter `name`.
    pub fn generic(&self, name: &str) -> Option<&Ty<B>> {
        self.generics.get(name)
    }

    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }

    pub fn try_parent(&self) -> Option<&ClassType<B>> {
        self.parent.as_deref()
    }

    /// The immediate parent class.
    ///
    /// # Panics
    ///
    /// Panics if this class has no parent. Check [`has_parent`](Self::has_parent)
    /// first, or use [`try_parent`](Self::try_parent).
    pub fn parent(&self) -> &ClassType<B> {
        match self.try_parent() {
            Some(parent) => parent,
            None => panic!("class `{}` has no parent", self.class_name()),
        }
    }

    /// The parent chain, nearest ancestor first. Does not include `self`.
    pub fn ancestors(&self) -> Ancestors<'_, B> {
        Ancestors {
            next: self.try_parent(),
        }
    }

    /// Whether `value` is an instance of this class or of one of its
    /// subclasses. Generic arguments are not checked.
    pub fn accepts<V: RuntimeValue>(&self, hierarchy: &impl Hierarchy, value: &V) -> bool {
        Relation::new(hierarchy).class_accepts(self, value)
    }

    /// Whether a value of type `other` can be used where this class is
    /// expected. Generic arguments are not compared.
    pub fn matches(&self, hierarchy: &impl Hierarchy, other: &Ty<B>) -> bool {
        Relation::new(hierarchy).class_matches(self, other)
    }

    pub fn alloc(self, builder: &B) -> Ty<B> {
        TyKind::Class(self).alloc(builder)
    }
}

impl<B: TyBuilder> ObjectType for ClassType<B> {
    fn class_name(&self) -> &str {
        self.name.as_str()
    }
}

impl<B: TyBuilder> AsRef<ClassType<B>> for ClassType<B> {
    fn as_ref(&self) -> &ClassType<B> {
        self
    }
}

/// Iterator over a class's parent chain. See [`ClassType::ancestors`].
#[derive(Debug)]
pub struct Ancestors<'a, B: TyBuilder> {
    next: Option<&'a ClassType<B>>,
}

impl<'a, B: TyBuilder> Iterator for Ancestors<'a, B> {
    type Item = &'a ClassType<B>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.try_parent();
        Some(current)
    }
}

impl<B: TyBuilder> core::iter::FusedIterator for Ancestors<'_, B> {}

/// Strips leading namespace separators.
pub fn normalize_class_name(name: &str) -> &str {
    name.trim_start_matches(NAMESPACE_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec::Vec;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::builders::BoxBuilder;
    use crate::ty;

    #[test]
    fn test_leading_separators_are_stripped() {
        let b = BoxBuilder::new();
        assert_eq!(ClassType::named(&b, "\\Foo").class_name(), "Foo");
        assert_eq!(ClassType::named(&b, "\\\\App\\Foo").class_name(), "App\\Foo");
        assert_eq!(ClassType::named(&b, "\\Foo"), ClassType::named(&b, "Foo"));
    }

    #[test]
    fn test_inner_separators_are_kept() {
        let b = BoxBuilder::new();
        assert_eq!(ClassType::named(&b, "App\\Foo\\").class_name(), "App\\Foo\\");
    }

    #[test]
    fn test_defaults() {
        let b = BoxBuilder::new();
        let foo = ClassType::named(&b, "Foo");
        assert!(foo.generics().is_empty());
        assert!(!foo.has_parent());
        assert!(foo.try_parent().is_none());
        assert_eq!(foo.ancestors().count(), 0);
    }

    #[test]
    #[should_panic(expected = "class `Foo` has no parent")]
    fn test_parent_of_root_class_panics() {
        let b = BoxBuilder::new();
        ClassType::named(&b, "Foo").parent();
    }

    #[test]
    fn test_parent_chain() {
        let b = BoxBuilder::new();
        let animal = ClassType::named(&b, "Animal");
        let dog = ClassType::new::<&str>(&b, "Dog", [], Some(animal.clone()));
        let puppy = ClassType::new::<&str>(&b, "Puppy", [], Some(dog.clone()));

        assert!(puppy.has_parent());
        assert_eq!(puppy.parent(), &dog);
        assert_eq!(puppy.parent().parent(), &animal);

        let names: Vec<_> = puppy.ancestors().map(|c| c.class_name()).collect();
        assert_eq!(names, ["Dog", "Animal"]);
    }

    #[test]
    fn test_generics_keep_insertion_order() {
        let b = BoxBuilder::new();
        let map = ClassType::new(
            &b,
            "Map",
            [("V", ty!(b, Int)), ("K", ty!(b, Str))],
            None,
        );
        let names: Vec<_> = map.generics().names().collect();
        assert_eq!(names, ["V", "K"]);
        assert_eq!(map.generic("K"), Some(&ty!(b, Str)));
        assert_eq!(map.generic("X"), None);
    }

    #[test]
    fn test_repeated_generic_overwrites_in_place() {
        let b = BoxBuilder::new();
        let map = ClassType::new(
            &b,
            "Map",
            [("K", ty!(b, Int)), ("V", ty!(b, Str)), ("K", ty!(b, Bool))],
            None,
        );
        assert_eq!(map.generics().len(), 2);
        assert_eq!(map.to_string(), "Map<bool, string>");
    }

    #[test]
    fn test_equality_is_structural() {
        let b = BoxBuilder::new();
        assert_eq!(ty!(b, "Box"[T = "Item"]), ty!(b, "\\Box"[T = "Item"]));
        assert_ne!(ty!(b, "Box"[T = "Item"]), ty!(b, "Box"[U = "Item"]));
        assert_ne!(ty!(b, "Box"[T = "Item"]), ty!(b, "Box"));
    }
}
