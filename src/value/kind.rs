use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
/// The kind of a value, resolved once from its variant. Values of different
/// kinds are never structurally equal.
pub enum Kind {
    Undefined,
    Null,
    Boolean,
    Number,
    BigInt,
    String,
    Date,
    RegExp,
    Error,
    Array,
    Arguments,
    Map,
    Set,
    Object,
    Function,
    Matcher,
    Opaque,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Undefined => "undefined",
            Kind::Null => "null",
            Kind::Boolean => "Boolean",
            Kind::Number => "Number",
            Kind::BigInt => "BigInt",
            Kind::String => "String",
            Kind::Date => "Date",
            Kind::RegExp => "RegExp",
            Kind::Error => "Error",
            Kind::Array => "Array",
            Kind::Arguments => "Arguments",
            Kind::Map => "Map",
            Kind::Set => "Set",
            Kind::Object => "Object",
            Kind::Function => "Function",
            Kind::Matcher => "asymmetric matcher",
            Kind::Opaque => "host object",
        })
    }
}
