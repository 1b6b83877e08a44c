//! TypeScript IR for interface generation.
//!
//! The documentation tables are lowered into this small type system before
//! emission:
//! - `TsType`: field types (primitives, named API types, arrays, unions)
//! - `TsProp`: one field declaration with its doc comment
//! - `TsInterface`: one rendered interface block

/// TypeScript type representation.
#[derive(Debug, Clone, PartialEq)]
pub enum TsType {
    /// Primitive types: any, string, number, boolean, null
    Primitive(TsPrimitive),
    /// Named type reference: "APIDate", "APICode<string>"
    Ref(String),
    /// Array type: T[]
    Array(Box<TsType>),
    /// Union type: A | B
    Union(Vec<TsType>),
}

impl TsType {
    /// Shorthand for a named type reference.
    pub fn named(name: &str) -> Self {
        TsType::Ref(name.to_string())
    }

    /// Wrap this type into a union with `null`.
    pub fn nullable(self) -> Self {
        TsType::Union(vec![self, TsType::Primitive(TsPrimitive::Null)])
    }
}

/// TypeScript primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TsPrimitive {
    Any,
    String,
    Number,
    Boolean,
    Null,
}

/// One interface field, carrying the documentation text from the
/// "Parameter Description" column.
#[derive(Debug, Clone, PartialEq)]
pub struct TsProp {
    pub name: String,
    pub doc: String,
    pub ty: TsType,
    pub optional: bool,
}

/// A complete interface block for one documentation table.
///
/// `name` is `{Method}{ApiName}{RoleSuffix}`; `title` is the free-text API
/// title used in the surrounding region markers. Repeated (method, url, role)
/// triples in one document produce repeated blocks, there is no dedup.
#[derive(Debug, Clone, PartialEq)]
pub struct TsInterface {
    pub title: String,
    pub name: String,
    pub props: Vec<TsProp>,
}
