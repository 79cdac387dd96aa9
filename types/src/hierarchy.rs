//! The is-a relation between named classes.
//!
//! Class types only carry names and, at best, a resolved parent chain. Whether
//! `Dog` is an `Animal` through an interface or an unresolved ancestor is known
//! only to whoever loaded the classes, and is provided through [`Hierarchy`].

use alloc::collections::VecDeque;
use alloc::string::{String, ToString};

use hashbrown::{HashMap, HashSet};
use smallvec::SmallVec;
use thiserror::Error;

use crate::core::{ClassType, TyBuilder, normalize_class_name};

/// Answers whether one class is, or derives from, another.
pub trait Hierarchy {
    /// True if `class` is `ancestor`, extends it, or implements it.
    ///
    /// Names are fully-qualified, without leading namespace separators.
    /// Must be reflexive.
    fn is_a(&self, class: &str, ancestor: &str) -> bool;
}

impl<H: Hierarchy + ?Sized> Hierarchy for &H {
    fn is_a(&self, class: &str, ancestor: &str) -> bool {
        (**self).is_a(class, ancestor)
    }
}

/// A hierarchy where classes are only related to themselves.
///
/// Resolved parent chains on class types still count, since they are checked
/// before the hierarchy is consulted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NoHierarchy;

impl Hierarchy for NoHierarchy {
    fn is_a(&self, class: &str, ancestor: &str) -> bool {
        class == ancestor
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HierarchyError {
    #[error("class name is empty")]
    EmptyClassName,

    #[error("class `{0}` is already declared")]
    DuplicateClass(String),

    #[error("class `{0}` cannot inherit from itself")]
    SelfInheritance(String),

    #[error("declaring `{class}` as a subtype of `{supertype}` creates an inheritance cycle")]
    CyclicInheritance { class: String, supertype: String },
}

/// Registry of declared classes and their direct supertypes (parent class and
/// implemented interfaces).
///
/// # Example
///
/// ```
/// use kindred_types::hierarchy::{ClassRegistry, Hierarchy};
///
/// let mut classes = ClassRegistry::new();
/// classes.declare("Animal", []).unwrap();
/// classes.declare("Pet", []).unwrap();
/// classes.declare("Dog", ["Animal", "Pet"]).unwrap();
///
/// assert!(classes.is_a("Dog", "Pet"));
/// assert!(!classes.is_a("Animal", "Dog"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClassRegistry {
    supertypes: HashMap<String, SmallVec<[String; 2]>>,
}

impl ClassRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `class` with its direct supertypes.
    ///
    /// Supertypes don't need to be declared first. Declaring a class twice, or
    /// in a way that closes a cycle, is rejected and leaves the registry
    /// unchanged.
    pub fn declare<'s>(
        &mut self,
        class: &str,
        supertypes: impl IntoIterator<Item = &'s str>,
    ) -> Result<(), HierarchyError> {
        let class = normalize_class_name(class);
        if class.is_empty() {
            return Err(HierarchyError::EmptyClassName);
        }
        if self.supertypes.contains_key(class) {
            return Err(HierarchyError::DuplicateClass(class.to_string()));
        }

        let mut direct: SmallVec<[String; 2]> = SmallVec::new();
        for supertype in supertypes {
            let supertype = normalize_class_name(supertype);
            if supertype.is_empty() {
                return Err(HierarchyError::EmptyClassName);
            }
            if supertype == class {
                return Err(HierarchyError::SelfInheritance(class.to_string()));
            }
            // Earlier declarations may already reference `class` as a supertype.
            if self.is_a(supertype, class) {
                return Err(HierarchyError::CyclicInheritance {
                    class: class.to_string(),
                    supertype: supertype.to_string(),
                });
            }
            if !direct.iter().any(|known| known == supertype) {
                direct.push(supertype.to_string());
            }
        }

        tracing::debug!(class, supertypes = ?direct, "Declared class");
        self.supertypes.insert(class.to_string(), direct);
        Ok(())
    }

    /// Declares every class along a resolved parent chain, nearest first.
    ///
    /// Classes already present are kept as declared, so chains sharing
    /// ancestors can be registered one after the other. An existing entry
    /// that doesn't derive from the chain's parent is a
    /// [`DuplicateClass`](HierarchyError::DuplicateClass) error.
    pub fn declare_class_type<B: TyBuilder>(
        &mut self,
        class: &ClassType<B>,
    ) -> Result<(), HierarchyError> {
        let mut current = Some(class);
        while let Some(class) = current {
            let name = class.class_name();
            let parent = class.try_parent();
            if !self.contains(name) {
                self.declare(name, parent.map(|p| p.class_name()))?;
            } else if parent.is_some_and(|parent| !self.is_a(name, parent.class_name())) {
                return Err(HierarchyError::DuplicateClass(name.to_string()));
            }
            current = parent;
        }
        Ok(())
    }

    pub fn contains(&self, class: &str) -> bool {
        self.supertypes.contains_key(normalize_class_name(class))
    }

    /// Direct supertypes of `class`, in declaration order.
    pub fn supertypes(&self, class: &str) -> Option<impl ExactSizeIterator<Item = &str>> {
        self.supertypes
            .get(normalize_class_name(class))
            .map(|direct| direct.iter().map(String::as_str))
    }

    pub fn len(&self) -> usize {
        self.supertypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.supertypes.is_empty()
    }
}

impl Hierarchy for ClassRegistry {
    fn is_a(&self, class: &str, ancestor: &str) -> bool {
        if class == ancestor {
            return true;
        }

        let mut seen: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<&str> = VecDeque::new();
        queue.push_back(class);

        while let Some(current) = queue.pop_front() {
            if !seen.insert(current) {
                continue;
            }
            let Some(direct) = self.supertypes.get(current) else {
                continue;
            };
            for supertype in direct {
                if supertype == ancestor {
                    return true;
                }
                queue.push_back(supertype);
            }
        }

        false
    }
}
