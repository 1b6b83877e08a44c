//! Mapping from documentation type tokens to TypeScript types.

use crate::ir::types::{TsPrimitive, TsType};

/// Resolve a documentation type token to a TypeScript type.
///
/// Matching is case-insensitive. A leading `#` marks the field nullable and
/// widens the resolved type into a union with `null`. Unknown tokens degrade
/// to `any`; this function never fails.
pub fn resolve_type(token: &str) -> TsType {
    let token = token.to_lowercase();
    let (token, nullable) = match token.strip_prefix('#') {
        Some(rest) => (rest, true),
        None => (token.as_str(), false),
    };

    let ty = match token {
        "any" => TsType::Primitive(TsPrimitive::Any),
        "string" | "html" => TsType::Primitive(TsPrimitive::String),
        "number" | "float" => TsType::Primitive(TsPrimitive::Number),
        "boolean" => TsType::Primitive(TsPrimitive::Boolean),
        "date" => TsType::named("APIDate"),
        "datetime" => TsType::named("APIDateTime"),
        "enum" => TsType::named("APICode<string>"),
        "price" => TsType::named("APIMoney"),
        "array<enum>" => TsType::Array(Box::new(TsType::named("APICode<string>"))),
        _ => TsType::Primitive(TsPrimitive::Any),
    };

    if nullable { ty.nullable() } else { ty }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ir::Emit;

    #[test]
    fn fixed_mappings() {
        let cases = [
            ("any", "any"),
            ("string", "string"),
            ("html", "string"),
            ("number", "number"),
            ("float", "number"),
            ("boolean", "boolean"),
            ("date", "APIDate"),
            ("datetime", "APIDateTime"),
            ("enum", "APICode<string>"),
            ("price", "APIMoney"),
            ("array<enum>", "APICode<string>[]"),
        ];
        for (token, expected) in cases {
            assert_eq!(resolve_type(token).emit(), expected, "token {token}");
        }
    }

    #[test]
    fn unmapped_tokens_fall_back_to_any() {
        assert_eq!(resolve_type("object").emit(), "any");
        assert_eq!(resolve_type("").emit(), "any");
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(resolve_type("DATE"), resolve_type("date"));
        assert_eq!(resolve_type("Array<Enum>").emit(), "APICode<string>[]");
    }

    #[test]
    fn nullable_marker_widens_to_null_union() {
        assert_eq!(
            resolve_type("#date"),
            resolve_type("date").nullable()
        );
        assert_eq!(resolve_type("#string").emit(), "string | null");
        assert_eq!(resolve_type("#array<enum>").emit(), "APICode<string>[] | null");
    }
}
