//! Type construction macros for ergonomic type building.
//!
//! # Example
//!
//! ```
//! use kindred_types::{ty, ArenaBuilder};
//! use bumpalo::Bump;
//!
//! let arena = Bump::new();
//! let b = ArenaBuilder::new(&arena);
//!
//! // Scalar and open types
//! let int_ty = ty!(b, Int);
//! let mixed = ty!(b, Mixed);
//!
//! // Classes, with generic arguments bound by name
//! let item = ty!(b, "App\\Item");
//! let boxed = ty!(b, "Box"[T = ("List"[E = "App\\Item"])]);
//! assert_eq!(boxed.to_string(), "Box<List<App\\Item>>");
//!
//! // Compound types
//! let array = ty!(b, Array[Str]);
//! let union = ty!(b, Union[Int, "Foo", (Array[Bool])]);
//! assert_eq!(union.to_string(), "int|Foo|array<bool>");
//! ```

/// Macro for constructing types with a concise syntax.
///
/// # Syntax
///
/// | Pattern | Meaning |
/// |---------|---------|
/// | `Int`, `Str`, `Bool`, `Float`, `Bytes` | Scalar types |
/// | `Mixed` | Top type |
/// | `Object` | Object of undetermined class |
/// | `Array[T]` | Array type |
/// | `Union[A, B]` | Union type |
/// | `"Name"` | Class without generics |
/// | `"Name"[T = A, U = B]` | Class with generic arguments |
/// | `( ... )` | Grouping |
///
/// Union members and generic arguments are single token trees: wrap compound
/// types in parentheses, e.g. `"Box"[T = (Array[Int])]`.
#[macro_export]
macro_rules! ty {
    // === Entry point ===

    ($b:expr, $($rest:tt)+) => {{
        let __b = &$b;
        $crate::ty!(@ty __b ; $($rest)+)
    }};

    // === Open types ===

    (@ty $b:expr ; Mixed) => {
        $crate::TyKind::Mixed.alloc($b)
    };
    (@ty $b:expr ; Object) => {
        $crate::TyKind::UndefinedObject.alloc($b)
    };

    // === Scalar types ===

    (@ty $b:expr ; Int) => {
        $crate::TyKind::Scalar($crate::Scalar::Int).alloc($b)
    };
    (@ty $b:expr ; Float) => {
        $crate::TyKind::Scalar($crate::Scalar::Float).alloc($b)
    };
    (@ty $b:expr ; Bool) => {
        $crate::TyKind::Scalar($crate::Scalar::Bool).alloc($b)
    };
    (@ty $b:expr ; Str) => {
        $crate::TyKind::Scalar($crate::Scalar::Str).alloc($b)
    };
    (@ty $b:expr ; Bytes) => {
        $crate::TyKind::Scalar($crate::Scalar::Bytes).alloc($b)
    };

    // === Array[T] ===

    (@ty $b:expr ; Array[$($inner:tt)+]) => {{
        let elem = $crate::ty!(@ty $b ; $($inner)+);
        $crate::TyKind::Array(elem).alloc($b)
    }};

    // === Union[A, B, ...] ===

    (@ty $b:expr ; Union[$($member:tt),+ $(,)?]) => {{
        let members = [$($crate::ty!(@ty $b ; $member)),+];
        $crate::TyKind::Union($crate::TyList::from_iter($b, members)).alloc($b)
    }};

    // === Classes ===

    (@ty $b:expr ; $name:literal [$($param:ident = $arg:tt),+ $(,)?]) => {{
        let generics = [$((stringify!($param), $crate::ty!(@ty $b ; $arg))),+];
        $crate::ClassType::new($b, $name, generics, None).alloc($b)
    }};

    (@ty $b:expr ; $name:literal) => {
        $crate::ClassType::named($b, $name).alloc($b)
    };

    // === Grouping ===

    (@ty $b:expr ; ($($inner:tt)+)) => {
        $crate::ty!(@ty $b ; $($inner)+)
    };
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::builders::BoxBuilder;
    use crate::{ClassType, Scalar, TyKind, TyList};

    #[test]
    fn test_scalars() {
        let b = BoxBuilder::new();
        assert_eq!(ty!(b, Int), TyKind::Scalar(Scalar::Int).alloc(&b));
        assert_eq!(ty!(b, Bytes), TyKind::Scalar(Scalar::Bytes).alloc(&b));
    }

    #[test]
    fn test_open_types() {
        let b = BoxBuilder::new();
        assert_eq!(ty!(b, Mixed), TyKind::Mixed.alloc(&b));
        assert_eq!(ty!(b, Object), TyKind::UndefinedObject.alloc(&b));
    }

    #[test]
    fn test_class() {
        let b = BoxBuilder::new();
        let expected = ClassType::new(
            &b,
            "Map",
            [("K", ty!(b, Str)), ("V", ClassType::named(&b, "Item").alloc(&b))],
            None,
        )
        .alloc(&b);
        assert_eq!(ty!(b, "Map"[K = Str, V = "Item"]), expected);
    }

    #[test]
    fn test_union_and_grouping() {
        let b = BoxBuilder::new();
        let members = [ty!(b, Int), TyKind::Array(ty!(b, "Foo")).alloc(&b)];
        let expected = TyKind::Union(TyList::from_iter(&b, members)).alloc(&b);
        assert_eq!(ty!(b, Union[Int, (Array["Foo"])]), expected);
        assert_eq!(ty!(b, (Union[Int, (Array["Foo"])])), expected);
    }
}
