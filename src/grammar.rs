//! # Name Grammar
//!
//! Character classes, token formats, and the compiled regular grammar used to
//! take compound names apart and to validate the pieces a name is built from.
//!
//! ```text
//! group     = cluster ["-" push]
//! push      = "v" 3DIGIT
//! cluster   = app ["-" stack ["-" detail]] *("-" labeled-variable)
//! app       = 1*name-char
//! stack     = *name-char
//! detail    = *name-hyphen-char
//! labeled-variable = ALPHA separator 1*(ALPHA / DIGIT)
//!
//! name-char        = ALPHA / DIGIT / "." / "_"
//! name-hyphen-char = name-char / "-" / "~" / "^"
//! separator        = "0"
//! ```
//!
//! A [`Grammar`] is compiled from a [`NamingConfig`]. [`Grammar::standard`]
//! uses the built-in constants; [`Grammar::global`] uses the configuration
//! read from the process environment the first time it is requested.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::warn;

use crate::config::NamingConfig;
use crate::conventions::LabeledVariablesNamingConvention;
use crate::CloudNameResult;

pub const NAME_CHARS: &str = "a-zA-Z0-9._";
pub const EXTENDED_NAME_CHARS: &str = "a-zA-Z0-9._~\\^";
pub const NAME_HYPHEN_CHARS: &str = "-a-zA-Z0-9._~\\^";
pub const PUSH_FORMAT: &str = "v([0-9]{3})";
pub const LABELED_VAR_SEPARATOR: char = '0';
pub const LABELED_VAR_KEY: &str = "[a-zA-Z]";
pub const LABELED_VAR_VALUES: &str = "[a-zA-Z0-9]";

/// Push sequences are three digits, so they wrap at this value.
pub const PUSH_SEQUENCE_LIMIT: u32 = 1000;

lazy_static! {
    static ref STANDARD_GRAMMAR: Grammar =
        Grammar::new(NamingConfig::default()).expect("standard name grammar must compile");
    static ref GLOBAL_GRAMMAR: Grammar = load_global_grammar();
}

fn load_global_grammar() -> Grammar {
    match NamingConfig::from_env().and_then(Grammar::new) {
        Ok(grammar) => grammar,
        Err(e) => {
            warn!("Ignoring naming configuration from environment: {}", e);
            Grammar::standard().clone()
        }
    }
}

/// A single labeled variable token, `[a-zA-Z]<separator>[a-zA-Z0-9]+`.
pub fn labeled_variable(separator: char) -> String {
    format!(
        "{}{}{}+",
        LABELED_VAR_KEY,
        regex::escape(&separator.to_string()),
        LABELED_VAR_VALUES
    )
}

#[derive(Debug, Clone)]
pub struct Grammar {
    config: NamingConfig,
    push: Regex,
    labeled_split: Regex,
    name: Regex,
    name_chars: Regex,
    detail_chars: Regex,
    reserved_push: Regex,
    reserved_label: Regex,
    labeled_variables: LabeledVariablesNamingConvention,
}

impl Grammar {
    pub fn new(config: NamingConfig) -> CloudNameResult<Self> {
        config.validate()?;
        let name_chars = config.name_chars.as_str();
        let hyphen_chars = format!("-{}{}", config.name_chars, config.extended_chars);
        let labeled = labeled_variable(config.labeled_var_separator);

        let push = Regex::new(&format!("^([{}]*)-({})$", hyphen_chars, PUSH_FORMAT))?;
        let labeled_split = Regex::new(&format!(
            "^([{}]*?)((?:-{})*)$",
            hyphen_chars, labeled
        ))?;
        let name = Regex::new(&format!(
            "^([{nc}]+)(?:-([{nc}]*)(?:-([{hc}]*?))?)?$",
            nc = name_chars,
            hc = hyphen_chars
        ))?;
        let name_chars_check = Regex::new(&format!("^[{}]+$", name_chars))?;
        let detail_chars = Regex::new(&format!("^[{}]+$", hyphen_chars))?;
        let reserved_push = Regex::new(&format!("(?:^|-){}$", PUSH_FORMAT))?;
        let reserved_label = Regex::new(&format!("(?:^|-){}(?:-|$)", labeled))?;
        let labeled_variables =
            LabeledVariablesNamingConvention::new(config.labeled_var_separator)?;

        Ok(Self {
            config,
            push,
            labeled_split,
            name,
            name_chars: name_chars_check,
            detail_chars,
            reserved_push,
            reserved_label,
            labeled_variables,
        })
    }

    pub fn standard() -> &'static Grammar {
        &STANDARD_GRAMMAR
    }

    pub fn global() -> &'static Grammar {
        &GLOBAL_GRAMMAR
    }

    pub fn config(&self) -> &NamingConfig {
        &self.config
    }

    pub fn labeled_variables(&self) -> &LabeledVariablesNamingConvention {
        &self.labeled_variables
    }

    /// Splits `<cluster>-v<NNN>` into the cluster, the push token and its
    /// sequence number.
    pub fn split_push<'a>(&self, name: &'a str) -> Option<(&'a str, &'a str, &'a str)> {
        let caps = self.push.captures(name)?;
        Some((
            caps.get(1)?.as_str(),
            caps.get(2)?.as_str(),
            caps.get(3)?.as_str(),
        ))
    }

    /// Splits a cluster into its unlabeled lead and the trailing run of
    /// labeled variables (possibly empty).
    pub fn split_labeled<'a>(&self, cluster: &'a str) -> Option<(&'a str, &'a str)> {
        let caps = self.labeled_split.captures(cluster)?;
        Some((caps.get(1)?.as_str(), caps.get(2).map_or("", |m| m.as_str())))
    }

    /// Splits an unlabeled cluster into app, stack and detail.
    pub fn split_name<'a>(
        &self,
        unlabeled: &'a str,
    ) -> Option<(&'a str, Option<&'a str>, Option<&'a str>)> {
        let caps = self.name.captures(unlabeled)?;
        let non_empty = |idx: usize| caps.get(idx).map(|m| m.as_str()).filter(|s| !s.is_empty());
        Some((caps.get(1)?.as_str(), non_empty(2), non_empty(3)))
    }

    pub fn is_push_name(&self, name: &str) -> bool {
        self.push.is_match(name)
    }

    pub fn matches_name_chars(&self, value: &str) -> bool {
        self.name_chars.is_match(value)
    }

    pub fn matches_detail_chars(&self, value: &str) -> bool {
        self.detail_chars.is_match(value)
    }

    pub fn ends_with_push(&self, value: &str) -> bool {
        self.reserved_push.is_match(value)
    }

    pub fn contains_labeled_variable(&self, value: &str) -> bool {
        self.reserved_label.is_match(value)
    }
}
