//! End-to-end scenarios: the checks a value mapper runs before assigning a
//! value or a type to a declared property.

use bumpalo::Bump;
use kindred::values::{Object, Value};
use kindred::{
    ArenaBuilder, BoxBuilder, ClassRegistry, ClassType, CompositeType, Relation, Ty, TyBuilder,
    TyKind, ty,
};
use pretty_assertions::assert_eq;

fn shop() -> ClassRegistry {
    let mut classes = ClassRegistry::new();
    classes.declare("Shop\\Entity", []).unwrap();
    classes.declare("Shop\\Priced", []).unwrap();
    classes.declare("Shop\\Product", ["Shop\\Entity", "Shop\\Priced"]).unwrap();
    classes.declare("Shop\\Book", ["Shop\\Product"]).unwrap();
    classes.declare("Shop\\Customer", ["Shop\\Entity"]).unwrap();
    classes.declare("Shop\\Collection", []).unwrap();
    classes
}

#[test]
fn property_accepts_subclass_instances() {
    let classes = shop();
    let b = BoxBuilder::new();
    let property = ClassType::named(&b, "\\Shop\\Product");

    let book = Value::object(Object::new("Shop\\Book", [("title", Value::str("Dune"))]));
    let customer = Value::object(Object::empty("Shop\\Customer"));

    assert!(property.accepts(&classes, &book));
    assert!(!property.accepts(&classes, &customer));
}

#[test]
fn declared_type_compatibility() {
    let classes = shop();
    let b = BoxBuilder::new();
    let relation = Relation::new(&classes);

    let products = ty!(b, "Shop\\Collection"[T = "Shop\\Product"]);
    let books = ty!(b, "Shop\\Collection"[T = "Shop\\Book"]);
    let customers = ty!(b, "Shop\\Collection"[T = "Shop\\Customer"]);

    // Generic arguments are not compared.
    assert!(relation.matches(&products, &books));
    assert!(relation.matches(&products, &customers));

    let entity = ty!(b, "Shop\\Entity");
    assert!(relation.matches(&entity, &ty!(b, Union["Shop\\Book", "Shop\\Customer"])));
    assert!(!relation.matches(&entity, &ty!(b, Union["Shop\\Book", Str])));
    assert!(relation.matches(&entity, &ty!(b, Mixed)));
    assert!(!relation.matches(&entity, &ty!(b, Array["Shop\\Book"])));
}

#[test]
fn collect_classes_referenced_by_a_type() {
    let arena = Bump::new();
    let b = ArenaBuilder::new(&arena);
    let ty = ty!(
        b,
        "Shop\\Collection"[K = Str, T = (Union["Shop\\Book", ("Shop\\Collection"[T = "Shop\\Customer"])])]
    );

    let classes: Vec<&str> = ty
        .traverse()
        .filter_map(|nested| nested.as_class())
        .map(|class| class.class_name())
        .collect();

    assert_eq!(classes, ["Shop\\Book", "Shop\\Collection", "Shop\\Customer"]);
}

fn rebuilt_from_parts<B: TyBuilder>(b: B, class: &ClassType<B>) -> Ty<B> {
    let generics: Vec<_> = class
        .generics()
        .iter()
        .map(|(name, ty)| (name.as_str(), ty.clone()))
        .collect();
    let parent = class.try_parent().cloned();
    TyKind::Class(ClassType::new(&b, class.class_name(), generics, parent)).alloc(&b)
}

#[test]
fn class_types_rebuild_from_their_accessors() {
    let b = BoxBuilder::new();
    let entity = ClassType::named(&b, "Shop\\Entity");
    let product = ClassType::new(&b, "Shop\\Product", [("P", ty!(b, Float))], Some(entity));

    let rebuilt = rebuilt_from_parts(b, &product);
    assert_eq!(rebuilt, product.clone().alloc(&b));
    assert_eq!(rebuilt.to_string(), "Shop\\Product<float>");
    assert_eq!(rebuilt.as_class().unwrap().parent().class_name(), "Shop\\Entity");
}

#[test]
fn registry_from_resolved_parent_chain() {
    let b = BoxBuilder::new();
    let entity = ClassType::named(&b, "Shop\\Entity");
    let product = ClassType::new::<&str>(&b, "Shop\\Product", [], Some(entity.clone()));
    let book = ClassType::new::<&str>(&b, "Shop\\Book", [], Some(product));

    let mut classes = ClassRegistry::new();
    classes.declare_class_type(&book).unwrap();

    let novel = Value::object(Object::empty("Shop\\Book"));
    assert!(entity.accepts(&classes, &novel));
}
