//! # Names Parser Strategies
//!
//! Organisations that decorate names (for example with a `failover_` prefix)
//! plug in a [`NamesParser`] instead of changing how [`Names`] parses.

use std::ops::Deref;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::grammar::Grammar;
use crate::Names;

pub trait NamesParser {
    type Output;

    fn parse_name(&self, name: &str) -> Self::Output;
}

/// Parses names exactly as [`Names::parse`] does.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultNamesParser;

impl NamesParser for DefaultNamesParser {
    type Output = Names;

    fn parse_name(&self, name: &str) -> Names {
        Names::parse(name)
    }
}

/// [`Names`] parsed from a name that may carry a prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrefixedNames {
    names: Names,
    prefixed: bool,
}

impl PrefixedNames {
    pub fn names(&self) -> &Names {
        &self.names
    }

    pub fn into_names(self) -> Names {
        self.names
    }

    /// Whether the parsed name started with the prefix.
    pub fn is_prefixed(&self) -> bool {
        self.prefixed
    }
}

impl Deref for PrefixedNames {
    type Target = Names;

    fn deref(&self) -> &Names {
        &self.names
    }
}

/// Strips `prefix` before parsing and records whether it was there.
#[derive(Debug, Clone)]
pub struct PrefixedNamesParser<'g> {
    prefix: String,
    grammar: &'g Grammar,
}

impl PrefixedNamesParser<'static> {
    pub fn new<S: Into<String>>(prefix: S) -> Self {
        Self::with_grammar(Grammar::global(), prefix)
    }
}

impl<'g> PrefixedNamesParser<'g> {
    pub fn with_grammar<S: Into<String>>(grammar: &'g Grammar, prefix: S) -> Self {
        Self {
            prefix: prefix.into(),
            grammar,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl NamesParser for PrefixedNamesParser<'_> {
    type Output = PrefixedNames;

    fn parse_name(&self, name: &str) -> PrefixedNames {
        let (base, prefixed) = match name.strip_prefix(self.prefix.as_str()) {
            Some(base) if !self.prefix.is_empty() => (base, true),
            _ => (name, false),
        };
        if prefixed {
            debug!("stripped prefix {} from {}", self.prefix, name);
        }
        PrefixedNames {
            names: Names::parse_with(self.grammar, base),
            prefixed,
        }
    }
}
