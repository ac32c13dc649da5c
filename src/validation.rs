//! Checks that the pieces of a name conform to the naming grammar before a
//! name is built from them.

use crate::grammar::Grammar;
use crate::{CloudNameError, CloudNameResult};

/// Returns `value` if it is present and non-empty.
pub fn not_empty<'a>(value: Option<&'a str>, field: &'static str) -> CloudNameResult<&'a str> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(CloudNameError::EmptyField { field }),
    }
}

/// Letters, digits, dots and underscores only.
pub fn check_name(name: &str) -> bool {
    Grammar::global().matches_name_chars(name)
}

/// Like [`check_name`], additionally allowing hyphens and the extended
/// characters. Keeps other code free to assume no spaces, hash marks, percent
/// or dollar signs in details.
pub fn check_detail(detail: &str) -> bool {
    Grammar::global().matches_detail_chars(detail)
}

/// Whether `name` ends with a `-vNNN` push token or contains a hyphen
/// separated token shaped like a labeled variable. Either would be taken
/// apart differently when the built name is parsed again.
pub fn uses_reserved_format(name: &str) -> bool {
    uses_reserved_format_with(Grammar::global(), name)
}

pub fn uses_reserved_format_with(grammar: &Grammar, name: &str) -> bool {
    grammar.ends_with_push(name) || grammar.contains_labeled_variable(name)
}

/// Validates an optional name field against [`check_name`].
pub(crate) fn validate_name_field(
    grammar: &Grammar,
    field: &'static str,
    value: Option<&str>,
) -> CloudNameResult<()> {
    match value {
        Some(v) if !v.is_empty() && !grammar.matches_name_chars(v) => {
            Err(CloudNameError::IllegalCharacters {
                field,
                value: v.to_string(),
            })
        }
        _ => Ok(()),
    }
}

/// Validates an optional detail against [`check_detail`].
pub(crate) fn validate_detail_field(
    grammar: &Grammar,
    field: &'static str,
    value: Option<&str>,
) -> CloudNameResult<()> {
    match value {
        Some(v) if !v.is_empty() && !grammar.matches_detail_chars(v) => {
            Err(CloudNameError::IllegalCharacters {
                field,
                value: v.to_string(),
            })
        }
        _ => Ok(()),
    }
}

pub(crate) fn validate_unreserved(
    grammar: &Grammar,
    field: &'static str,
    value: Option<&str>,
) -> CloudNameResult<()> {
    match value {
        Some(v) if !v.is_empty() && uses_reserved_format_with(grammar, v) => {
            Err(CloudNameError::ReservedFormat {
                field,
                value: v.to_string(),
            })
        }
        _ => Ok(()),
    }
}
