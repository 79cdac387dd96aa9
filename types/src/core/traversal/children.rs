use core::iter::FusedIterator;
use core::slice;

use crate::core::{Ident, Ty, TyBuilder};

/// Iterator over the immediate children of a type node.
///
/// See [`TyKind::children`](crate::TyKind::children) for the order.
#[derive(Debug)]
pub enum Children<'a, B: TyBuilder> {
    None,
    One(Option<&'a Ty<B>>),
    List(slice::Iter<'a, Ty<B>>),
    Generics(slice::Iter<'a, (Ident<B>, Ty<B>)>),
}

impl<B: TyBuilder> Clone for Children<'_, B> {
    fn clone(&self) -> Self {
        match self {
            Children::None => Children::None,
            Children::One(child) => Children::One(*child),
            Children::List(iter) => Children::List(iter.clone()),
            Children::Generics(iter) => Children::Generics(iter.clone()),
        }
    }
}

impl<'a, B: TyBuilder> Iterator for Children<'a, B> {
    type Item = &'a Ty<B>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Children::None => None,
            Children::One(child) => child.take(),
            Children::List(iter) => iter.next(),
            Children::Generics(iter) => iter.next().map(|(_, ty)| ty),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<B: TyBuilder> DoubleEndedIterator for Children<'_, B> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match self {
            Children::None => None,
            Children::One(child) => child.take(),
            Children::List(iter) => iter.next_back(),
            Children::Generics(iter) => iter.next_back().map(|(_, ty)| ty),
        }
    }
}

impl<B: TyBuilder> ExactSizeIterator for Children<'_, B> {
    fn len(&self) -> usize {
        match self {
            Children::None => 0,
            Children::One(child) => usize::from(child.is_some()),
            Children::List(iter) => iter.len(),
            Children::Generics(iter) => iter.len(),
        }
    }
}

impl<B: TyBuilder> FusedIterator for Children<'_, B> {}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;

    use crate::builders::BoxBuilder;
    use crate::ty;

    fn render<'a>(iter: impl Iterator<Item = &'a crate::Ty<BoxBuilder>>) -> Vec<String> {
        iter.map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_children_in_definition_order() {
        let b = BoxBuilder::new();

        assert!(render(ty!(b, Int).kind().children()).is_empty());
        assert_eq!(render(ty!(b, Array[Str]).kind().children()), ["string"]);
        assert_eq!(
            render(ty!(b, Union[Int, "Foo", Bool]).kind().children()),
            ["int", "Foo", "bool"]
        );
        assert_eq!(
            render(ty!(b, "Pair"[L = Int, R = "Foo"]).kind().children()),
            ["int", "Foo"]
        );
    }

    #[test]
    fn test_children_reversed_and_len() {
        let b = BoxBuilder::new();
        let pair = ty!(b, "Pair"[L = Int, R = Str]);
        let children = pair.kind().children();
        assert_eq!(children.len(), 2);
        assert_eq!(render(children.rev()), ["string", "int"]);

        let array = ty!(b, Array[Int]);
        let mut children = array.kind().children();
        assert_eq!(children.len(), 1);
        assert!(children.next_back().is_some());
        assert_eq!(children.len(), 0);
        assert!(children.next().is_none());
    }
}
