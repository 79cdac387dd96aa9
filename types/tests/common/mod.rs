#![allow(dead_code)]

use kindred_types::{Scalar, relation::RuntimeValue};

/// Generates `#[test]` wrappers that run a generic test function against
/// `BoxBuilder`, `ArcBuilder` and `ArenaBuilder`.
macro_rules! test_all_builders {
    ($name:ident) => {
        mod $name {
            #[test]
            fn box_builder() {
                super::$name(kindred_types::BoxBuilder::new());
            }

            #[test]
            fn arc_builder() {
                super::$name(kindred_types::ArcBuilder::new());
            }

            #[test]
            fn arena_builder() {
                let arena = bumpalo::Bump::new();
                super::$name(kindred_types::ArenaBuilder::new(&arena));
            }
        }
    };
}

/// Minimal runtime value for membership tests.
#[derive(Debug, Clone, PartialEq)]
pub enum TestValue {
    Int(i64),
    Str(&'static str),
    List(Vec<TestValue>),
    Instance(&'static str),
}

impl RuntimeValue for TestValue {
    fn class_name(&self) -> Option<&str> {
        match self {
            TestValue::Instance(class) => Some(*class),
            _ => None,
        }
    }

    fn scalar(&self) -> Option<Scalar> {
        match self {
            TestValue::Int(_) => Some(Scalar::Int),
            TestValue::Str(_) => Some(Scalar::Str),
            _ => None,
        }
    }

    fn elements(&self) -> Option<&[Self]> {
        match self {
            TestValue::List(elements) => Some(elements.as_slice()),
            _ => None,
        }
    }
}

/// Installs a test subscriber once. Set `RUST_LOG=kindred_types=trace` to see
/// relation decisions.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
