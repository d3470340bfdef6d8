//! Placeholder substitution with safe semantics.
//!
//! A deliberate minimal scanner rather than a templating language: the
//! engine is a blind substitution mechanism and must leave anything it does
//! not recognize byte-for-byte intact. Only `${identifier}` is placeholder
//! syntax; a bare `$name`, an unterminated `${`, or a placeholder whose key
//! is absent (or holds a list value) all pass through verbatim.

use crate::context::RenderContext;

/// Render `text` against `ctx`. Never fails; see module docs for semantics.
pub fn render(text: &str, ctx: &RenderContext) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        if let Some((ident, tail)) = split_identifier(after) {
            if let Some(value) = ctx.substitution(ident) {
                out.push_str(&value);
                rest = tail;
                continue;
            }
        }

        // Not a resolvable placeholder: emit the `${` and keep scanning so a
        // later placeholder on the same line still renders.
        out.push_str("${");
        rest = after;
    }

    out.push_str(rest);
    out
}

/// If `s` starts with `identifier}`, return the identifier and the text
/// after the closing brace.
fn split_identifier(s: &str) -> Option<(&str, &str)> {
    let end = s
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(s.len());
    let ident = &s[..end];
    let first = ident.chars().next()?;
    if !(first.is_ascii_alphabetic() || first == '_') {
        return None;
    }
    s[end..].strip_prefix('}').map(|tail| (ident, tail))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> RenderContext {
        RenderContext::new()
            .with("project_name", "shopapi")
            .with("enable_redis", true)
            .with("count", 3_i64)
            .with("deps", vec!["a".to_string()])
    }

    #[test]
    fn substitutes_known_placeholder() {
        assert_eq!(render("name: ${project_name}", &ctx()), "name: shopapi");
    }

    #[test]
    fn substitutes_multiple_on_one_line() {
        assert_eq!(
            render("${project_name}-${count}-${project_name}", &ctx()),
            "shopapi-3-shopapi"
        );
    }

    #[test]
    fn unknown_placeholder_left_verbatim() {
        assert_eq!(render("x ${missing} y", &ctx()), "x ${missing} y");
    }

    #[test]
    fn unknown_then_known_both_handled() {
        assert_eq!(
            render("${missing} ${project_name}", &ctx()),
            "${missing} shopapi"
        );
    }

    #[test]
    fn bool_and_int_values_stringify() {
        assert_eq!(render("${enable_redis}/${count}", &ctx()), "true/3");
    }

    #[test]
    fn list_value_left_verbatim() {
        assert_eq!(render("deps: ${deps}", &ctx()), "deps: ${deps}");
    }

    #[test]
    fn bare_dollar_is_not_syntax() {
        assert_eq!(render("cost $5 and $project_name", &ctx()), "cost $5 and $project_name");
    }

    #[test]
    fn unterminated_brace_left_verbatim() {
        assert_eq!(render("${project_name", &ctx()), "${project_name");
        assert_eq!(render("tail ${", &ctx()), "tail ${");
    }

    #[test]
    fn empty_and_malformed_identifiers_left_verbatim() {
        assert_eq!(render("${}", &ctx()), "${}");
        assert_eq!(render("${1abc}", &ctx()), "${1abc}");
        assert_eq!(render("${a-b}", &ctx()), "${a-b}");
    }

    #[test]
    fn empty_text_renders_empty() {
        assert_eq!(render("", &ctx()), "");
    }

    #[test]
    fn underscore_leading_identifier_is_valid() {
        let ctx = RenderContext::new().with("_private", "x");
        assert_eq!(render("${_private}", &ctx), "x");
    }
}
