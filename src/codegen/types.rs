//! Declared parameter type -> generated Rust field type.

use std::fmt;

use crate::definition::Parameter;

/// Concrete representation of a parameter in generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RustType {
    String,
    Integer,
    Boolean,
    StringList,
    IntegerList,
    StringMap,
}

impl RustType {
    /// Type as spelled in generated source.
    pub fn as_str(&self) -> &'static str {
        match self {
            RustType::String => "String",
            RustType::Integer => "i64",
            RustType::Boolean => "bool",
            RustType::StringList => "Vec<String>",
            RustType::IntegerList => "Vec<i64>",
            RustType::StringMap => "BTreeMap<String, String>",
        }
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, RustType::StringList | RustType::IntegerList)
    }

    /// Condition (over `value`) under which a field holds a non-zero value.
    pub fn present_check(&self, value: &str) -> String {
        match self {
            RustType::String | RustType::StringList | RustType::IntegerList | RustType::StringMap => {
                format!("!{value}.is_empty()")
            }
            RustType::Integer => format!("{value} != 0"),
            RustType::Boolean => value.to_string(),
        }
    }
}

impl fmt::Display for RustType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a parameter's declared type. Unknown types fall back to `String`.
pub fn map_type(param: &Parameter) -> RustType {
    match param.kind.as_str() {
        "string" => RustType::String,
        "integer" => RustType::Integer,
        "boolean" => RustType::Boolean,
        "array" => match param.item_type.as_deref() {
            Some("integer") => RustType::IntegerList,
            _ => RustType::StringList,
        },
        "map" => RustType::StringMap,
        _ => RustType::String,
    }
}
