//! This module renders values as short, human-readable strings for failure
//! messages and diffs.

use std::fmt;
use chrono::SecondsFormat;

use crate::config::Config;
use crate::errors::ice;
use crate::matchers::AsymmetricMatcher;
use crate::utils::text;
use crate::value::{ArrayKind, ArrayValue, MapValue, ObjectValue, SetValue, Value};

/// Renders values for display.
pub trait PrettyPrinter {
    /// Renders the value as a string.
    fn pp(&self, value: &Value) -> String;
}

impl <F: Fn(&Value) -> String> PrettyPrinter for F {
    fn pp(&self, value: &Value) -> String {
        self(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// The standard pretty-printer, which renders values in a JavaScript-like
/// syntax, within the limits of its configuration.
pub struct DefaultPrettyPrinter {
    config: Config,
}

impl DefaultPrettyPrinter {
    /// Creates a pretty-printer with the given limits.
    pub fn new(config: Config) -> DefaultPrettyPrinter {
        DefaultPrettyPrinter {config}
    }

    /// Renders an asymmetric matcher, e.g. `<any(Number)>`.
    pub fn pp_matcher(&self, matcher: &AsymmetricMatcher) -> String {
        self.finish(Render {config: self.config, subject: Subject::Matcher(matcher)})
    }

    fn finish(&self, render: Render) -> String {
        let mut s = render.to_string();
        text::truncate(&mut s, self.config.max_chars);
        s
    }
}

impl PrettyPrinter for DefaultPrettyPrinter {
    fn pp(&self, value: &Value) -> String {
        self.finish(Render {config: self.config, subject: Subject::Value(value)})
    }
}

enum Subject<'a> {
    Value(&'a Value),
    Matcher(&'a AsymmetricMatcher),
}

struct Render<'a> {
    config: Config,
    subject: Subject<'a>,
}

/// The name a composite value is shown by, when its contents are not shown.
fn composite_name(value: &Value) -> String {
    match value {
        Value::Object(o) => o.borrow().kind.constructor_name().to_string(),
        v => v.kind().to_string(),
    }
}

/// Writes `, ` before every item except the first.
fn separate(f: &mut fmt::Formatter<'_>, first: &mut bool) -> fmt::Result {
    if !std::mem::take(first) {
        f.write_str(", ")?;
    }
    Ok(())
}

impl fmt::Display for Render<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut seen = Vec::new();
        match self.subject {
            Subject::Value(v) => self.write_value(f, v, &mut seen),
            Subject::Matcher(m) => self.write_matcher(f, m, &mut seen),
        }
    }
}

impl Render<'_> {
    fn write_value(&self, f: &mut fmt::Formatter<'_>, value: &Value, seen: &mut Vec<usize>) -> fmt::Result {
        match value {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => f.write_str(&text::format_number_signed(*n)),
            Value::BigInt(i) => write!(f, "{i}n"),
            Value::Str(s) => write!(f, "'{}'", s.replace('\'', "\\'")),
            Value::Date(d) => write!(f, "Date({})", d.to_rfc3339_opts(SecondsFormat::Millis, true)),
            Value::Regex(r) => write!(f, "/{}/{}", r.source(), r.flags()),
            Value::Error(e) if e.message().is_empty() => f.write_str(e.name()),
            Value::Error(e) => write!(f, "{}: {}", e.name(), e.message()),
            Value::Function(..) => f.write_str("Function"),
            Value::Opaque(o) => write!(f, "[object {}]", o.tag()),
            Value::Array(..) | Value::Map(..) | Value::Set(..) | Value::Object(..) | Value::Matcher(..) => {
                self.write_composite(f, value, seen)
            },
        }
    }

    fn write_composite(&self, f: &mut fmt::Formatter<'_>, value: &Value, seen: &mut Vec<usize>) -> fmt::Result {
        let Some(id) = value.identity() else { ice("composite value has no identity"); };
        if seen.contains(&id) {
            return write!(f, "<circular reference: {}>", composite_name(value));
        }
        if seen.len() >= self.config.max_depth {
            return f.write_str(&composite_name(value));
        }

        seen.push(id);
        let result = match value {
            Value::Array(a) => self.write_array(f, &a.borrow(), seen),
            Value::Map(m) => self.write_map(f, &m.borrow(), seen),
            Value::Set(s) => self.write_set(f, &s.borrow(), seen),
            Value::Object(o) => self.write_object(f, &o.borrow(), seen),
            Value::Matcher(m) => self.write_matcher(f, m, seen),
            _ => Ok(()),
        };
        seen.pop();
        result
    }

    fn write_array(&self, f: &mut fmt::Formatter<'_>, array: &ArrayValue, seen: &mut Vec<usize>) -> fmt::Result {
        let is_arguments = array.kind == ArrayKind::Arguments;
        if is_arguments { f.write_str("Arguments(")?; }
        f.write_str("[ ")?;

        let mut first = true;
        for item in array.items.iter().take(self.config.max_array_length) {
            separate(f, &mut first)?;
            self.write_value(f, item, seen)?;
        }
        if array.len() > self.config.max_array_length {
            separate(f, &mut first)?;
            f.write_str("...")?;
        }
        for (key, v) in array.props.iter() {
            separate(f, &mut first)?;
            write!(f, "{key}: ")?;
            self.write_value(f, v, seen)?;
        }

        f.write_str(" ]")?;
        if is_arguments { f.write_str(")")?; }
        Ok(())
    }

    fn write_map(&self, f: &mut fmt::Formatter<'_>, map: &MapValue, seen: &mut Vec<usize>) -> fmt::Result {
        f.write_str("Map( ")?;
        let mut first = true;
        for (key, v) in map.entries().iter().take(self.config.max_array_length) {
            separate(f, &mut first)?;
            f.write_str("[ ")?;
            self.write_value(f, key, seen)?;
            f.write_str(", ")?;
            self.write_value(f, v, seen)?;
            f.write_str(" ]")?;
        }
        if map.len() > self.config.max_array_length {
            separate(f, &mut first)?;
            f.write_str("...")?;
        }
        f.write_str(" )")
    }

    fn write_set(&self, f: &mut fmt::Formatter<'_>, set: &SetValue, seen: &mut Vec<usize>) -> fmt::Result {
        f.write_str("Set( ")?;
        let mut first = true;
        for item in set.items().iter().take(self.config.max_array_length) {
            separate(f, &mut first)?;
            self.write_value(f, item, seen)?;
        }
        if set.len() > self.config.max_array_length {
            separate(f, &mut first)?;
            f.write_str("...")?;
        }
        f.write_str(" )")
    }

    fn write_object(&self, f: &mut fmt::Formatter<'_>, object: &ObjectValue, seen: &mut Vec<usize>) -> fmt::Result {
        write!(f, "{}({{ ", object.kind.constructor_name())?;
        let mut first = true;
        for (key, v) in object.props.iter().take(self.config.max_array_length) {
            separate(f, &mut first)?;
            write!(f, "{key}: ")?;
            self.write_value(f, v, seen)?;
        }
        if object.props.len() > self.config.max_array_length {
            separate(f, &mut first)?;
            f.write_str("...")?;
        }
        f.write_str(" })")
    }

    fn write_matcher(&self, f: &mut fmt::Formatter<'_>, matcher: &AsymmetricMatcher, seen: &mut Vec<usize>) -> fmt::Result {
        let (name, sample) = match matcher {
            AsymmetricMatcher::Any(t) => return write!(f, "<any({t})>"),
            AsymmetricMatcher::Anything => return f.write_str("<anything>"),
            AsymmetricMatcher::StringMatching(r) => return write!(f, "<stringMatching(/{}/{})>", r.source(), r.flags()),
            AsymmetricMatcher::Custom(m) => return f.write_str(&m.describe()),
            AsymmetricMatcher::ObjectContaining(s) => ("objectContaining", s),
            AsymmetricMatcher::ArrayContaining(s) => ("arrayContaining", s),
            AsymmetricMatcher::MapContaining(s) => ("mapContaining", s),
            AsymmetricMatcher::SetContaining(s) => ("setContaining", s),
        };
        write!(f, "<{name}(")?;
        self.write_value(f, sample, seen)?;
        f.write_str(")>")
    }
}
