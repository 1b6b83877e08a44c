//! Parsing of API documentation headings.
//!
//! Each documentation block carries a heading of the form
//! `<METHOD> <url> - <title>`, e.g. `GET /users/{id} - Get User`. The method
//! and URL drive interface naming; the title is used verbatim in the emitted
//! region markers.

use regex::Regex;
use std::sync::LazyLock;

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    let re = Regex::new(r"^(GET|POST|PUT|DELETE|PATCH)\s+(.*?)\s+-\s+(.*)$").unwrap();
    re
});

/// API metadata extracted from one documentation heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiDescriptor {
    /// HTTP method with only the first letter capitalized ("Get", "Post").
    pub http_method: String,
    pub api_url: String,
    pub api_title: String,
    /// PascalCase identifier derived from the last non-placeholder URL segment.
    pub api_name: String,
}

/// Parse a heading line into an [`ApiDescriptor`].
///
/// A heading that does not match the grammar is logged and produces a
/// degraded descriptor: empty method/url/name, with the full text kept as
/// the title so the block is still processed downstream.
pub fn parse_heading(text: &str) -> ApiDescriptor {
    let Some(caps) = HEADING_RE.captures(text) else {
        tracing::error!("Malformed API heading: {text}");
        return ApiDescriptor {
            http_method: String::new(),
            api_url: String::new(),
            api_title: text.to_string(),
            api_name: String::new(),
        };
    };

    let http_method = capitalize_first(&caps[1].to_lowercase());
    let api_url = caps[2].to_string();
    let api_title = caps[3].to_string();
    let api_name = api_name_from_url(&api_url);

    ApiDescriptor {
        http_method,
        api_url,
        api_title,
        api_name,
    }
}

/// Derive the API name from a URL path.
///
/// The last non-empty segment is used unless it is a `{placeholder}`, in
/// which case the segment before it is taken instead.
fn api_name_from_url(url: &str) -> String {
    let segments: Vec<&str> = url.split('/').filter(|s| !s.is_empty()).collect();
    let chosen = match segments.last() {
        Some(last) if last.starts_with('{') => segments.iter().rev().nth(1).copied(),
        Some(last) => Some(*last),
        None => None,
    };
    chosen.map(pascal_case).unwrap_or_default()
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Convert an arbitrary segment to a PascalCase identifier.
///
/// Splits on non-alphanumeric characters and lower-to-upper camel
/// boundaries, then capitalizes each word and lowercases the rest.
pub fn pascal_case(input: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for ch in input.chars() {
        if !ch.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if ch.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = ch.is_lowercase() || ch.is_numeric();
        current.push(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .into_iter()
        .map(|word| capitalize_first(&word.to_lowercase()))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_heading() {
        let api = parse_heading("GET /foo/{id} - Get Foo");
        assert_eq!(api.http_method, "Get");
        assert_eq!(api.api_url, "/foo/{id}");
        assert_eq!(api.api_title, "Get Foo");
        assert_eq!(api.api_name, "Foo");
    }

    #[test]
    fn placeholder_segment_falls_back_to_previous() {
        let api = parse_heading("DELETE /orders/items/{itemId} - Remove Item");
        assert_eq!(api.api_name, "Items");
    }

    #[test]
    fn name_from_last_segment() {
        let api = parse_heading("POST /users - Create User");
        assert_eq!(api.http_method, "Post");
        assert_eq!(api.api_name, "Users");
    }

    #[test]
    fn malformed_heading_degrades_without_failing() {
        let api = parse_heading("bogus text");
        assert_eq!(api.http_method, "");
        assert_eq!(api.api_url, "");
        assert_eq!(api.api_name, "");
        assert_eq!(api.api_title, "bogus text");
    }

    #[test]
    fn title_may_contain_separator_text() {
        let api = parse_heading("PUT /a/b - Update - with dash");
        assert_eq!(api.api_url, "/a/b");
        assert_eq!(api.api_title, "Update - with dash");
    }

    #[test]
    fn pascal_case_forms() {
        assert_eq!(pascal_case("users"), "Users");
        assert_eq!(pascal_case("create-user"), "CreateUser");
        assert_eq!(pascal_case("order_items"), "OrderItems");
        assert_eq!(pascal_case("orderItems"), "OrderItems");
        assert_eq!(pascal_case("USERS"), "Users");
        assert_eq!(pascal_case(""), "");
    }
}
