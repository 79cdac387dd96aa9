use alloc::rc::Rc;
use alloc::vec::Vec;

use kindred_types::core::normalize_class_name;
use string_cache::DefaultAtom;

use super::Value;

/// An instance of a named class with ordered properties.
///
/// The class name is normalized the same way class types normalize theirs,
/// so `\App\User` and `App\User` instances belong to the same class.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    class: DefaultAtom,
    properties: Rc<[(DefaultAtom, Value)]>,
}

impl Object {
    /// Create an object. A property given twice keeps the last value but its
    /// first position.
    pub fn new<N: AsRef<str>>(
        class: impl AsRef<str>,
        properties: impl IntoIterator<Item = (N, Value)>,
    ) -> Self {
        let mut fields: Vec<(DefaultAtom, Value)> = Vec::new();
        for (name, value) in properties {
            let name = name.as_ref();
            match fields.iter_mut().find(|(field, _)| &**field == name) {
                Some(field) => field.1 = value,
                None => fields.push((DefaultAtom::from(name), value)),
            }
        }

        Self {
            class: DefaultAtom::from(normalize_class_name(class.as_ref())),
            properties: fields.into(),
        }
    }

    /// Create an object without properties.
    pub fn empty(class: impl AsRef<str>) -> Self {
        Self::new::<&str>(class, [])
    }

    pub fn class_name(&self) -> &str {
        &self.class
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties
            .iter()
            .find(|(field, _)| &**field == name)
            .map(|(_, value)| value)
    }

    pub fn properties(&self) -> impl ExactSizeIterator<Item = (&str, &Value)> {
        self.properties
            .iter()
            .map(|(name, value)| (&**name, value))
    }
}
