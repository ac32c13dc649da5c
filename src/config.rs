//! # Naming Configuration
//!
//! The character classes and the labeled variable separator that the name
//! grammar is compiled from. A configuration is loaded once (from defaults, the
//! process environment, or a JSON file) and handed to [`Grammar::new`]; nothing
//! in the parser reads the environment on its own.
//!
//! [`Grammar::new`]: crate::grammar::Grammar::new

use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

use crate::{CloudNameError, CloudNameResult};

pub const NAME_CHARS_ENV: &str = "CLOUDNAME_NAME_CHARS";
pub const EXTENDED_CHARS_ENV: &str = "CLOUDNAME_EXTENDED_CHARS";
pub const LABELED_VAR_SEPARATOR_ENV: &str = "CLOUDNAME_LABELED_VAR_SEPARATOR";

/// Static configuration of the name grammar.
///
/// `name_chars` and `extended_chars` are regex character class bodies (the
/// part between `[` and `]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Characters legal in app and stack.
    #[serde(default = "default_name_chars")]
    pub name_chars: String,

    /// Characters that are additionally legal in detail, on top of
    /// `name_chars` and the hyphen.
    #[serde(default = "default_extended_chars")]
    pub extended_chars: String,

    #[serde(default = "default_labeled_var_separator")]
    pub labeled_var_separator: char,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            name_chars: default_name_chars(),
            extended_chars: default_extended_chars(),
            labeled_var_separator: default_labeled_var_separator(),
        }
    }
}

impl NamingConfig {
    /// Reads overrides from the process environment. Unset variables keep
    /// their defaults.
    pub fn from_env() -> CloudNameResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`NamingConfig::from_env`], reading through `lookup` instead
    /// of the process environment.
    pub fn from_lookup<F>(lookup: F) -> CloudNameResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(name_chars) = lookup(NAME_CHARS_ENV) {
            config.name_chars = name_chars;
        }
        if let Some(extended_chars) = lookup(EXTENDED_CHARS_ENV) {
            config.extended_chars = extended_chars;
        }
        if let Some(separator) = lookup(LABELED_VAR_SEPARATOR_ENV) {
            config.labeled_var_separator = parse_separator(&separator)?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> CloudNameResult<Self> {
        let file = File::open(path)
            .map_err(|e| CloudNameError::config(format!("Failed to open config file: {}", e)))?;
        let reader = BufReader::new(file);
        let config: Self = serde_json::from_reader(reader)
            .map_err(|e| CloudNameError::config(format!("Failed to parse config file: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(s: &str) -> CloudNameResult<Self> {
        let config: Self = serde_json::from_str(s)
            .map_err(|e| CloudNameError::config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations the grammar cannot be built from.
    pub fn validate(&self) -> CloudNameResult<()> {
        if self.name_chars.is_empty() {
            return Err(CloudNameError::config("name_chars must not be empty"));
        }
        check_class_body("name_chars", &self.name_chars)?;
        check_class_body("extended_chars", &self.extended_chars)?;
        if self.labeled_var_separator == '-' || !self.labeled_var_separator.is_ascii_graphic() {
            return Err(CloudNameError::config(format!(
                "labeled_var_separator '{}' must be a printable ASCII character other than '-'",
                self.labeled_var_separator
            )));
        }
        Ok(())
    }
}

/// A class body must stay inside the `[...]` it is pasted into: no unescaped
/// brackets and no trailing backslash.
fn check_class_body(field: &str, body: &str) -> CloudNameResult<()> {
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if chars.next().is_none() {
                    return Err(CloudNameError::config(format!(
                        "{} '{}' ends with a dangling escape",
                        field, body
                    )));
                }
            }
            '[' | ']' => {
                return Err(CloudNameError::config(format!(
                    "{} '{}' must not contain an unescaped '{}'",
                    field, body, c
                )));
            }
            _ => {}
        }
    }
    Ok(())
}

fn parse_separator(value: &str) -> CloudNameResult<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(CloudNameError::config(format!(
            "{} must be a single character, got '{}'",
            LABELED_VAR_SEPARATOR_ENV, value
        ))),
    }
}

fn default_name_chars() -> String {
    "a-zA-Z0-9._".to_string()
}

fn default_extended_chars() -> String {
    "~\\^".to_string()
}

fn default_labeled_var_separator() -> char {
    '0'
}
