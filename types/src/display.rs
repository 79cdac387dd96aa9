//! Canonical rendering of types.
//!
//! | Kind | Rendering |
//! |------|-----------|
//! | `Mixed` | `mixed` |
//! | `UndefinedObject` | `object` |
//! | `Scalar` | `bool`, `int`, `float`, `string`, `bytes` |
//! | `Array(T)` | `array<T>` |
//! | `Union[A, B]` | `A\|B` |
//! | `Class` | `Name` or `Name<A, B>` |

use core::fmt;

use crate::core::{ClassType, Ty, TyBuilder, TyKind};

impl<B: TyBuilder> fmt::Display for ClassType<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())?;
        if self.generics().is_empty() {
            return Ok(());
        }
        f.write_str("<")?;
        for (i, ty) in self.generics().types().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{ty}")?;
        }
        f.write_str(">")
    }
}

impl<B: TyBuilder> fmt::Display for TyKind<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TyKind::Mixed => f.write_str("mixed"),
            TyKind::UndefinedObject => f.write_str("object"),
            TyKind::Scalar(scalar) => f.write_str(scalar.name()),
            TyKind::Array(element) => write!(f, "array<{element}>"),
            TyKind::Union(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str("|")?;
                    }
                    write!(f, "{member}")?;
                }
                Ok(())
            }
            TyKind::Class(class) => fmt::Display::fmt(class, f),
        }
    }
}

impl<B: TyBuilder> fmt::Display for Ty<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.kind(), f)
    }
}
