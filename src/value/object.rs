use std::rc::Rc;

use super::PropertyMap;

#[derive(Debug)]
/// A function or class. Two functions are the same only if they are the same
/// allocation, even if their names match.
pub struct Function {
    name: Rc<str>,
}

impl Function {
    /// Creates a new, distinct function with the given name.
    pub fn new(name: &str) -> Rc<Function> {
        Rc::new(Function {name: Rc::from(name)})
    }

    /// Returns the name of this function.
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone)]
/// Identifies how an object was constructed. Objects of different kinds are
/// never equal, whatever their properties.
pub enum ObjectKind {
    /// An object literal, constructed by `Object`.
    Plain,

    /// An object with no prototype, and hence no constructor.
    NullPrototype,

    /// An instance of a user-defined class.
    Instance(Rc<Function>),
}

impl ObjectKind {
    /// Indicates whether two objects of these kinds may be equal: both plain,
    /// both without a prototype, or instances of the same class.
    pub fn same_kind(&self, other: &ObjectKind) -> bool {
        match (self, other) {
            (ObjectKind::Plain, ObjectKind::Plain) => true,
            (ObjectKind::NullPrototype, ObjectKind::NullPrototype) => true,
            (ObjectKind::Instance(c1), ObjectKind::Instance(c2)) => Rc::ptr_eq(c1, c2),
            _ => false,
        }
    }

    /// Returns the name of the constructor, or `null` if there is no
    /// prototype.
    pub fn constructor_name(&self) -> &str {
        match self {
            ObjectKind::Plain => "Object",
            ObjectKind::NullPrototype => "null",
            ObjectKind::Instance(class) => class.name(),
        }
    }
}

#[derive(Debug, Clone)]
/// The contents of an object.
pub struct ObjectValue {
    /// How this object was constructed.
    pub kind: ObjectKind,

    /// Own enumerable properties, in insertion order.
    pub props: PropertyMap,
}
