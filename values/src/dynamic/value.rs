use alloc::rc::Rc;

use kindred_types::{Scalar, relation::RuntimeValue};

use super::Object;

/// A dynamically typed runtime value.
///
/// Compound values are reference counted, so cloning is cheap.
///
/// # Example
///
/// ```
/// use kindred_values::dynamic::Value;
///
/// let v = Value::int(42);
/// assert_eq!(v.as_int(), Some(42));
/// assert_eq!(v.as_str(), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Rc<str>),
    Bytes(Rc<[u8]>),
    Array(Rc<[Value]>),
    Object(Object),
}

impl Value {
    pub fn null() -> Self {
        Value::Null
    }

    pub fn bool(value: bool) -> Self {
        Value::Bool(value)
    }

    pub fn int(value: i64) -> Self {
        Value::Int(value)
    }

    pub fn float(value: f64) -> Self {
        Value::Float(value)
    }

    pub fn str(value: impl AsRef<str>) -> Self {
        Value::Str(Rc::from(value.as_ref()))
    }

    pub fn bytes(value: impl AsRef<[u8]>) -> Self {
        Value::Bytes(Rc::from(value.as_ref()))
    }

    /// Create an array value. Elements may be of different kinds.
    pub fn array(elements: impl IntoIterator<Item = Value>) -> Self {
        Value::Array(elements.into_iter().collect())
    }

    pub fn object(object: Object) -> Self {
        Value::Object(object)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(value) => Some(value.as_ref()),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(value) => Some(value.as_ref()),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(elements) => Some(elements.as_ref()),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::Object(object)
    }
}

impl RuntimeValue for Value {
    fn class_name(&self) -> Option<&str> {
        self.as_object().map(Object::class_name)
    }

    fn scalar(&self) -> Option<Scalar> {
        match self {
            Value::Bool(_) => Some(Scalar::Bool),
            Value::Int(_) => Some(Scalar::Int),
            Value::Float(_) => Some(Scalar::Float),
            Value::Str(_) => Some(Scalar::Str),
            Value::Bytes(_) => Some(Scalar::Bytes),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    fn elements(&self) -> Option<&[Self]> {
        self.as_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_match_kind() {
        assert_eq!(Value::bool(true).as_bool(), Some(true));
        assert_eq!(Value::float(1.5).as_float(), Some(1.5));
        assert_eq!(Value::str("hi").as_str(), Some("hi"));
        assert_eq!(Value::bytes(b"\x00\x01").as_bytes(), Some(&[0u8, 1][..]));
        assert!(Value::null().is_null());

        assert_eq!(Value::int(1).as_bool(), None);
        assert_eq!(Value::str("1").as_int(), None);
        assert!(Value::int(0).as_object().is_none());
    }

    #[test]
    fn test_runtime_view() {
        let dog = Value::object(Object::empty("\\Dog"));
        assert_eq!(dog.class_name(), Some("Dog"));
        assert_eq!(dog.scalar(), None);

        assert_eq!(Value::str("x").scalar(), Some(Scalar::Str));
        assert_eq!(Value::null().scalar(), None);
        assert_eq!(Value::null().class_name(), None);

        let list = Value::array([Value::int(1), dog.clone()]);
        assert_eq!(list.elements().map(<[Value]>::len), Some(2));
        assert_eq!(dog.elements(), None);
    }
}
