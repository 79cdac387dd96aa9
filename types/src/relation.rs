//! Membership (`accepts`) and compatibility (`matches`) between types.
//!
//! `matches(expected, actual)` answers "can a value described by `actual` be
//! used where `expected` is required?". The rules for class types:
//!
//! 1. `mixed` and undetermined objects match any class.
//! 2. A union matches a class only if every member does (the union decides,
//!    see [`Relation::union_matched_by`]).
//! 3. Non-object types never match a class.
//! 4. Otherwise the actual class, or a class along its resolved parent chain,
//!    must be the expected one or one of its subtypes in the hierarchy.
//!
//! Generic arguments are not compared, neither by `matches` nor by `accepts`.
//! A [`GenericsPolicy`] can be plugged in to add such a check.

use crate::core::{ClassType, ObjectType, Scalar, Ty, TyBuilder, TyFlags, TyKind, TyList};
use crate::hierarchy::Hierarchy;

/// View of a runtime value, as needed to test type membership.
pub trait RuntimeValue: Sized {
    /// Class of the value if it is an object instance.
    fn class_name(&self) -> Option<&str>;

    /// Scalar kind of the value, if it is a scalar.
    fn scalar(&self) -> Option<Scalar>;

    /// Elements of the value, if it is an array.
    fn elements(&self) -> Option<&[Self]>;
}

/// Extra check run on two classes that are already related by name.
pub trait GenericsPolicy {
    fn compatible<B: TyBuilder>(&self, expected: &ClassType<B>, actual: &ClassType<B>) -> bool;
}

/// Treats generic arguments as erased: related classes are always compatible.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct IgnoreGenerics;

impl GenericsPolicy for IgnoreGenerics {
    fn compatible<B: TyBuilder>(&self, _expected: &ClassType<B>, _actual: &ClassType<B>) -> bool {
        true
    }
}

/// Evaluates type relations against a class hierarchy.
///
/// # Example
///
/// ```
/// use kindred_types::{BoxBuilder, ty};
/// use kindred_types::hierarchy::ClassRegistry;
/// use kindred_types::relation::Relation;
///
/// let mut classes = ClassRegistry::new();
/// classes.declare("Animal", []).unwrap();
/// classes.declare("Dog", ["Animal"]).unwrap();
///
/// let b = BoxBuilder::new();
/// let relation = Relation::new(&classes);
/// assert!(relation.matches(&ty!(b, "Animal"), &ty!(b, "Dog")));
/// assert!(!relation.matches(&ty!(b, "Dog"), &ty!(b, "Animal")));
/// ```
#[derive(Debug)]
pub struct Relation<'h, H: ?Sized, P = IgnoreGenerics> {
    hierarchy: &'h H,
    generics: P,
}

impl<H: ?Sized, P: Clone> Clone for Relation<'_, H, P> {
    fn clone(&self) -> Self {
        Self {
            hierarchy: self.hierarchy,
            generics: self.generics.clone(),
        }
    }
}

impl<H: ?Sized, P: Copy> Copy for Relation<'_, H, P> {}

impl<'h, H: Hierarchy + ?Sized> Relation<'h, H> {
    pub fn new(hierarchy: &'h H) -> Self {
        Self {
            hierarchy,
            generics: IgnoreGenerics,
        }
    }
}

impl<'h, H: Hierarchy + ?Sized, P: GenericsPolicy> Relation<'h, H, P> {
    /// Replaces the generics policy.
    pub fn with_generics_policy<Q: GenericsPolicy>(self, generics: Q) -> Relation<'h, H, Q> {
        Relation {
            hierarchy: self.hierarchy,
            generics,
        }
    }

    /// Whether `class` names `ancestor` or one of its subtypes.
    ///
    /// The hierarchy is asked about `class` and about every class along its
    /// resolved parent chain, so a parent's interfaces count too.
    pub fn is_subclass<B: TyBuilder>(&self, class: &ClassType<B>, ancestor: &str) -> bool {
        let name = ObjectType::class_name(class);
        name == ancestor
            || self.hierarchy.is_a(name, ancestor)
            || class
                .ancestors()
                .any(|parent| self.hierarchy.is_a(parent.class_name(), ancestor))
    }

    /// Whether a value of type `other` can be used where `class` is expected.
    pub fn class_matches<B: TyBuilder>(&self, class: &ClassType<B>, other: &Ty<B>) -> bool {
        // Nothing in `other` can stand for an object.
        if other.is_resolved() && !other.flags().contains(TyFlags::HAS_CLASSES) {
            return false;
        }
        let result = match other.kind() {
            TyKind::Mixed | TyKind::UndefinedObject => true,
            TyKind::Union(members) => {
                self.union_matched_by(members, |member| self.class_matches(class, member))
            }
            kind => kind.as_object().is_some_and(|actual| {
                self.is_subclass(actual, class.class_name())
                    && self.generics.compatible(class, actual)
            }),
        };
        tracing::trace!(expected = %class, actual = %other, result, "Class match");
        result
    }

    /// Matching policy owned by unions: a union is matched when every one of
    /// its members is, since a value of the union may be any of them.
    ///
    /// `member_matched` tells whether the candidate matches a single member.
    pub fn union_matched_by<B: TyBuilder>(
        &self,
        members: &TyList<B>,
        member_matched: impl FnMut(&Ty<B>) -> bool,
    ) -> bool {
        members.iter().all(member_matched)
    }

    /// Whether a value of type `actual` can be used where `expected` is
    /// required.
    pub fn matches<B: TyBuilder>(&self, expected: &Ty<B>, actual: &Ty<B>) -> bool {
        let result = match (expected.kind(), actual.kind()) {
            (TyKind::Class(class), _) => return self.class_matches(class, actual),
            (_, TyKind::Mixed) => true,
            (_, TyKind::Union(members)) => {
                self.union_matched_by(members, |member| self.matches(expected, member))
            }
            (TyKind::Mixed, _) => true,
            (TyKind::Union(alternatives), _) => alternatives
                .iter()
                .any(|alternative| self.matches(alternative, actual)),
            (TyKind::UndefinedObject, TyKind::UndefinedObject | TyKind::Class(_)) => true,
            (TyKind::UndefinedObject, TyKind::Scalar(_) | TyKind::Array(_)) => false,
            (TyKind::Scalar(expected), TyKind::Scalar(actual)) => expected == actual,
            (TyKind::Scalar(_), TyKind::UndefinedObject | TyKind::Array(_) | TyKind::Class(_)) => {
                false
            }
            (TyKind::Array(expected), TyKind::Array(actual)) => self.matches(expected, actual),
            (TyKind::Array(_), TyKind::UndefinedObject | TyKind::Scalar(_) | TyKind::Class(_)) => {
                false
            }
        };
        tracing::trace!(%expected, %actual, result, "Type match");
        result
    }

    /// Whether `value` is an instance of `class` or one of its subtypes.
    ///
    /// Generic arguments are erased at runtime and never checked.
    pub fn class_accepts<B: TyBuilder, V: RuntimeValue>(
        &self,
        class: &ClassType<B>,
        value: &V,
    ) -> bool {
        value
            .class_name()
            .is_some_and(|name| self.hierarchy.is_a(name, class.class_name()))
    }

    /// Whether `value` belongs to `ty`.
    pub fn accepts<B: TyBuilder, V: RuntimeValue>(&self, ty: &Ty<B>, value: &V) -> bool {
        match ty.kind() {
            TyKind::Mixed => true,
            TyKind::UndefinedObject => value.class_name().is_some(),
            TyKind::Scalar(scalar) => value.scalar() == Some(*scalar),
            TyKind::Array(element) => value
                .elements()
                .is_some_and(|elements| elements.iter().all(|e| self.accepts(element, e))),
            TyKind::Union(members) => members.iter().any(|member| self.accepts(member, value)),
            TyKind::Class(class) => self.class_accepts(class, value),
        }
    }
}

impl<B: TyBuilder> Ty<B> {
    /// Whether `value` belongs to this type. See [`Relation::accepts`].
    pub fn accepts<V: RuntimeValue>(&self, hierarchy: &impl Hierarchy, value: &V) -> bool {
        Relation::new(hierarchy).accepts(self, value)
    }

    /// Whether a value of type `other` can be used where this type is
    /// expected. See [`Relation::matches`].
    pub fn matches(&self, hierarchy: &impl Hierarchy, other: &Ty<B>) -> bool {
        Relation::new(hierarchy).matches(self, other)
    }
}
