//! TypeScript code emission via the Emit trait.
//!
//! Each IR type implements `Emit` to produce its TypeScript string
//! representation. Emission is purely mechanical string building; all
//! classification decisions happen before the IR is constructed.

use super::types::{TsInterface, TsPrimitive, TsProp, TsType};

/// Trait for emitting TypeScript code from IR nodes.
pub trait Emit {
    /// Convert the IR node to its TypeScript string representation.
    fn emit(&self) -> String;
}

impl Emit for TsPrimitive {
    fn emit(&self) -> String {
        match self {
            TsPrimitive::Any => "any".to_string(),
            TsPrimitive::String => "string".to_string(),
            TsPrimitive::Number => "number".to_string(),
            TsPrimitive::Boolean => "boolean".to_string(),
            TsPrimitive::Null => "null".to_string(),
        }
    }
}

impl Emit for TsType {
    fn emit(&self) -> String {
        match self {
            TsType::Primitive(p) => p.emit(),
            TsType::Ref(name) => name.clone(),
            TsType::Array(inner) => {
                let inner_str = inner.emit();
                // Unions inside arrays need parentheses
                if matches!(**inner, TsType::Union(_)) {
                    format!("({inner_str})[]")
                } else {
                    format!("{inner_str}[]")
                }
            }
            TsType::Union(types) => types.iter().map(Emit::emit).collect::<Vec<_>>().join(" | "),
        }
    }
}

impl Emit for TsProp {
    fn emit(&self) -> String {
        let opt = if self.optional { "?" } else { "" };
        format!(
            "\t/** {} */\n\t{}{}: {};",
            self.doc,
            self.name,
            opt,
            self.ty.emit()
        )
    }
}

impl Emit for TsInterface {
    fn emit(&self) -> String {
        let fields = self
            .props
            .iter()
            .map(Emit::emit)
            .collect::<Vec<_>>()
            .join("\n\n");
        format!(
            "// #region {}\ninterface {} {{\n{}\n}}\n// #endregion",
            self.title, self.name, fields
        )
    }
}

/// Join interface blocks with a blank line, in document order.
pub fn emit_module(interfaces: &[TsInterface]) -> String {
    interfaces
        .iter()
        .map(Emit::emit)
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn emit_primitives() {
        assert_eq!(TsPrimitive::Any.emit(), "any");
        assert_eq!(TsPrimitive::String.emit(), "string");
        assert_eq!(TsPrimitive::Number.emit(), "number");
        assert_eq!(TsPrimitive::Boolean.emit(), "boolean");
        assert_eq!(TsPrimitive::Null.emit(), "null");
    }

    #[test]
    fn emit_nullable_union() {
        let ty = TsType::named("APIDate").nullable();
        assert_eq!(ty.emit(), "APIDate | null");
    }

    #[test]
    fn emit_array_of_named() {
        let ty = TsType::Array(Box::new(TsType::named("APICode<string>")));
        assert_eq!(ty.emit(), "APICode<string>[]");
    }

    #[test]
    fn emit_array_of_union_gets_parens() {
        let inner = TsType::Primitive(TsPrimitive::String).nullable();
        let ty = TsType::Array(Box::new(inner));
        assert_eq!(ty.emit(), "(string | null)[]");
    }

    #[test]
    fn emit_prop_with_optional_marker() {
        let prop = TsProp {
            name: "limit".into(),
            doc: "Page size".into(),
            ty: TsType::Primitive(TsPrimitive::Number),
            optional: true,
        };
        assert_eq!(prop.emit(), "\t/** Page size */\n\tlimit?: number;");
    }

    #[test]
    fn emit_interface_block() {
        let iface = TsInterface {
            title: "Create User".into(),
            name: "PostUserPayload".into(),
            props: vec![TsProp {
                name: "name".into(),
                doc: "User name".into(),
                ty: TsType::Primitive(TsPrimitive::String),
                optional: false,
            }],
        };
        let expected = "// #region Create User\n\
             interface PostUserPayload {\n\
             \t/** User name */\n\
             \tname: string;\n\
             }\n\
             // #endregion";
        assert_eq!(iface.emit(), expected);
    }

    #[test]
    fn emit_module_joins_blocks_with_blank_line() {
        let iface = TsInterface {
            title: "T".into(),
            name: "GetFooResponse".into(),
            props: vec![TsProp {
                name: "id".into(),
                doc: String::new(),
                ty: TsType::Primitive(TsPrimitive::Number),
                optional: false,
            }],
        };
        let out = emit_module(&[iface.clone(), iface]);
        assert_eq!(out.matches("// #region T").count(), 2);
        assert!(out.contains("// #endregion\n\n// #region T"));
    }
}
