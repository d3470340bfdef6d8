//! Name and version validation for user-supplied identifiers.
//!
//! Generated names become Python package names and filesystem paths, so the
//! rules are stricter than either alone: letter-first charset, bounded
//! length, no Python keywords, no Windows reserved device names.
//!
//! Validation errors are caller-recoverable — the user resupplies input.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Errors for rejected project/module names and API versions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{kind} name must not be empty")]
    Empty { kind: NameKind },

    #[error("{kind} name must be between {MIN_NAME_LEN} and {MAX_NAME_LEN} characters, got {len}")]
    Length { kind: NameKind, len: usize },

    #[error(
        "{kind} name '{name}' is invalid: must start with a letter and contain \
         only letters, digits, underscores and dashes"
    )]
    Charset { kind: NameKind, name: String },

    #[error("{kind} name '{name}' is a Python keyword")]
    PythonKeyword { kind: NameKind, name: String },

    #[error("{kind} name '{name}' is a reserved Windows device name")]
    WindowsReserved { kind: NameKind, name: String },

    #[error("API version '{version}' is invalid: expected v1, v2, ...")]
    Version { version: String },
}

/// What a name is for, used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Project,
    Module,
}

impl std::fmt::Display for NameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameKind::Project => write!(f, "project"),
            NameKind::Module => write!(f, "module"),
        }
    }
}

pub const MIN_NAME_LEN: usize = 2;
pub const MAX_NAME_LEN: usize = 50;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9_-]*$").expect("name pattern"));

static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v\d+$").expect("version pattern"));

/// Python keywords as of 3.12. A generated package with one of these names
/// would be unimportable.
const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break",
    "class", "continue", "def", "del", "elif", "else", "except", "finally",
    "for", "from", "global", "if", "import", "in", "is", "lambda", "nonlocal",
    "not", "or", "pass", "raise", "return", "try", "while", "with", "yield",
];

/// Windows reserved device names (case-insensitive).
const WINDOWS_RESERVED: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5",
    "COM6", "COM7", "COM8", "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5",
    "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Validate a project or module name, returning the trimmed form.
pub fn validate_name(name: &str, kind: NameKind) -> Result<String, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::Empty { kind });
    }
    if name.len() < MIN_NAME_LEN || name.len() > MAX_NAME_LEN {
        return Err(ValidationError::Length { kind, len: name.len() });
    }
    // Also excludes '..', '/' and '\' — the charset has no path characters.
    if !NAME_RE.is_match(name) {
        return Err(ValidationError::Charset { kind, name: name.to_owned() });
    }
    if PYTHON_KEYWORDS.contains(&name) {
        return Err(ValidationError::PythonKeyword { kind, name: name.to_owned() });
    }
    if WINDOWS_RESERVED.iter().any(|r| r.eq_ignore_ascii_case(name)) {
        return Err(ValidationError::WindowsReserved { kind, name: name.to_owned() });
    }
    Ok(name.to_owned())
}

/// Validate an API version string (`v1`, `v2`, ...).
pub fn validate_version(version: &str) -> Result<String, ValidationError> {
    if VERSION_RE.is_match(version) {
        Ok(version.to_owned())
    } else {
        Err(ValidationError::Version { version: version.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("shopapi")]
    #[case("shop-api")]
    #[case("shop_api_2")]
    #[case("Ab")]
    fn accepts_valid_names(#[case] name: &str) {
        assert_eq!(validate_name(name, NameKind::Project).unwrap(), name);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(validate_name("  order  ", NameKind::Module).unwrap(), "order");
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn rejects_empty(#[case] name: &str) {
        assert!(matches!(
            validate_name(name, NameKind::Project),
            Err(ValidationError::Empty { .. })
        ));
    }

    #[test]
    fn rejects_single_character() {
        assert!(matches!(
            validate_name("a", NameKind::Project),
            Err(ValidationError::Length { len: 1, .. })
        ));
    }

    #[test]
    fn rejects_over_fifty_characters() {
        let name = "a".repeat(51);
        assert!(matches!(
            validate_name(&name, NameKind::Project),
            Err(ValidationError::Length { len: 51, .. })
        ));
    }

    #[rstest]
    #[case("1project")]
    #[case("_leading")]
    #[case("has space")]
    #[case("dot.dot")]
    #[case("sub/dir")]
    #[case("back\\slash")]
    #[case("dots..name")]
    fn rejects_bad_charset(#[case] name: &str) {
        assert!(matches!(
            validate_name(name, NameKind::Project),
            Err(ValidationError::Charset { .. })
        ));
    }

    #[rstest]
    #[case("import")]
    #[case("class")]
    #[case("lambda")]
    fn rejects_python_keywords(#[case] name: &str) {
        assert!(matches!(
            validate_name(name, NameKind::Module),
            Err(ValidationError::PythonKeyword { .. })
        ));
    }

    #[rstest]
    #[case("con")]
    #[case("NUL")]
    #[case("Com1")]
    fn rejects_windows_reserved(#[case] name: &str) {
        assert!(matches!(
            validate_name(name, NameKind::Project),
            Err(ValidationError::WindowsReserved { .. })
        ));
    }

    #[rstest]
    #[case("v1")]
    #[case("v12")]
    fn accepts_valid_versions(#[case] version: &str) {
        assert_eq!(validate_version(version).unwrap(), version);
    }

    #[rstest]
    #[case("1")]
    #[case("V1")]
    #[case("v")]
    #[case("v1.2")]
    #[case("version1")]
    fn rejects_bad_versions(#[case] version: &str) {
        assert!(matches!(
            validate_version(version),
            Err(ValidationError::Version { .. })
        ));
    }

    #[test]
    fn error_messages_name_the_kind() {
        let err = validate_name("1x", NameKind::Module).unwrap_err();
        assert!(err.to_string().contains("module name"));
    }
}
