//! # Labeled Variables
//!
//! Labeled variables are single letter keyed tokens (`c0US`, `d0prod`, ...)
//! appended to the end of a cluster name. Only a run of such tokens sitting at
//! the very end of a component is recognised; everything before the run is left
//! unprocessed.
//!
//! ```text
//! component = unprocessed labeled-run
//! labeled-run = (("^" / "-") key separator 1*value-char)+
//! key = one of c d h p r u w z (any letter is tolerated, unknown keys are ignored)
//! ```

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::debug;

use super::{NamingConvention, NamingResult};
use crate::grammar::{labeled_variable, LABELED_VAR_SEPARATOR, LABELED_VAR_VALUES};
use crate::{CloudNameError, CloudNameResult};

lazy_static! {
    static ref STANDARD_CONVENTION: LabeledVariablesNamingConvention =
        LabeledVariablesNamingConvention::new(LABELED_VAR_SEPARATOR)
            .expect("standard labeled variable grammar must compile");
}

/// The eight known labeled variable keys, in canonical order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
pub enum Label {
    #[strum(serialize = "c")]
    Countries,
    #[strum(serialize = "d")]
    DevPhase,
    #[strum(serialize = "h")]
    Hardware,
    #[strum(serialize = "p")]
    Partners,
    #[strum(serialize = "r")]
    Revision,
    #[strum(serialize = "u")]
    UsedBy,
    #[strum(serialize = "w")]
    RedBlackSwap,
    #[strum(serialize = "z")]
    Zone,
}

impl Label {
    pub fn key(self) -> char {
        match self {
            Label::Countries => 'c',
            Label::DevPhase => 'd',
            Label::Hardware => 'h',
            Label::Partners => 'p',
            Label::Revision => 'r',
            Label::UsedBy => 'u',
            Label::RedBlackSwap => 'w',
            Label::Zone => 'z',
        }
    }

    pub fn from_key(key: char) -> CloudNameResult<Self> {
        key.to_string()
            .parse::<Label>()
            .map_err(|_| CloudNameError::UnknownLabel {
                key: key.to_string(),
                expected: Label::iter()
                    .map(|label| label.as_ref().to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// The labeled variables extracted from, or to be encoded into, a name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabeledVariables {
    countries: Option<String>,
    dev_phase: Option<String>,
    hardware: Option<String>,
    partners: Option<String>,
    revision: Option<String>,
    used_by: Option<String>,
    red_black_swap: Option<String>,
    zone: Option<String>,
}

impl LabeledVariables {
    /// Sets `label`. Empty values are stored as absent.
    pub fn with<S: Into<String>>(mut self, label: Label, value: S) -> Self {
        self.set(label, value);
        self
    }

    pub fn set<S: Into<String>>(&mut self, label: Label, value: S) {
        let value = value.into();
        *self.slot_mut(label) = (!value.is_empty()).then_some(value);
    }

    pub fn get(&self, label: Label) -> Option<&str> {
        let slot = match label {
            Label::Countries => &self.countries,
            Label::DevPhase => &self.dev_phase,
            Label::Hardware => &self.hardware,
            Label::Partners => &self.partners,
            Label::Revision => &self.revision,
            Label::UsedBy => &self.used_by,
            Label::RedBlackSwap => &self.red_black_swap,
            Label::Zone => &self.zone,
        };
        slot.as_deref()
    }

    fn slot_mut(&mut self, label: Label) -> &mut Option<String> {
        match label {
            Label::Countries => &mut self.countries,
            Label::DevPhase => &mut self.dev_phase,
            Label::Hardware => &mut self.hardware,
            Label::Partners => &mut self.partners,
            Label::Revision => &mut self.revision,
            Label::UsedBy => &mut self.used_by,
            Label::RedBlackSwap => &mut self.red_black_swap,
            Label::Zone => &mut self.zone,
        }
    }

    /// Present variables in canonical key order.
    pub fn iter(&self) -> impl Iterator<Item = (Label, &str)> + '_ {
        Label::iter().filter_map(move |label| self.get(label).map(|value| (label, value)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    pub fn countries(&self) -> Option<&str> {
        self.countries.as_deref()
    }

    pub fn dev_phase(&self) -> Option<&str> {
        self.dev_phase.as_deref()
    }

    pub fn hardware(&self) -> Option<&str> {
        self.hardware.as_deref()
    }

    pub fn partners(&self) -> Option<&str> {
        self.partners.as_deref()
    }

    pub fn revision(&self) -> Option<&str> {
        self.revision.as_deref()
    }

    pub fn used_by(&self) -> Option<&str> {
        self.used_by.as_deref()
    }

    pub fn red_black_swap(&self) -> Option<&str> {
        self.red_black_swap.as_deref()
    }

    pub fn zone(&self) -> Option<&str> {
        self.zone.as_deref()
    }
}

/// Matches a single known key inside a run of labeled variables.
#[derive(Debug, Clone)]
pub struct LabelPattern {
    label: Label,
    regex: Regex,
}

impl LabelPattern {
    /// Fails with [`CloudNameError::UnknownLabel`] unless `key` is one of the
    /// eight known keys.
    pub fn new(key: char, separator: char) -> CloudNameResult<Self> {
        let label = Label::from_key(key)?;
        let regex = Regex::new(&format!(
            "(?:^|-){}{}({}+)",
            regex::escape(&key.to_string()),
            regex::escape(&separator.to_string()),
            LABELED_VAR_VALUES
        ))?;
        Ok(Self { label, regex })
    }

    pub fn label(&self) -> Label {
        self.label
    }

    /// The value of the last token for this key, if any.
    pub fn extract<'a>(&self, labeled: &'a str) -> Option<&'a str> {
        self.regex
            .captures_iter(labeled)
            .last()
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

/// Extracts [`LabeledVariables`] from the trailing run of a component.
#[derive(Debug, Clone)]
pub struct LabeledVariablesNamingConvention {
    separator: char,
    labeled_vars: Regex,
    patterns: Vec<LabelPattern>,
}

impl Default for LabeledVariablesNamingConvention {
    fn default() -> Self {
        Self::standard().clone()
    }
}

impl LabeledVariablesNamingConvention {
    pub fn new(separator: char) -> CloudNameResult<Self> {
        let labeled_vars = Regex::new(&format!(
            "^(.*?)((?:(?:^|-){})+)$",
            labeled_variable(separator)
        ))?;
        let patterns = Label::iter()
            .map(|label| LabelPattern::new(label.key(), separator))
            .collect::<CloudNameResult<Vec<_>>>()?;
        Ok(Self {
            separator,
            labeled_vars,
            patterns,
        })
    }

    /// The convention for the built-in `0` separator.
    pub fn standard() -> &'static Self {
        &STANDARD_CONVENTION
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// Decomposes a run of labeled variable tokens key by key.
    pub fn decompose(&self, labeled: &str) -> LabeledVariables {
        let mut variables = LabeledVariables::default();
        if labeled.is_empty() {
            return variables;
        }
        for pattern in &self.patterns {
            if let Some(value) = pattern.extract(labeled) {
                variables.set(pattern.label(), value);
            }
        }
        variables
    }
}

impl NamingConvention for LabeledVariablesNamingConvention {
    type Output = LabeledVariables;

    #[tracing::instrument(level = "debug", skip(self))]
    fn extract_naming_convention(&self, component: &str) -> NamingResult<LabeledVariables> {
        if component.is_empty() {
            return NamingResult::empty();
        }
        let Some(caps) = self.labeled_vars.captures(component) else {
            debug!("no trailing labeled variables");
            return NamingResult::empty();
        };
        let unprocessed = caps.get(1).map_or("", |m| m.as_str());
        let labeled = caps.get(2).map_or("", |m| m.as_str());
        NamingResult::new(Some(self.decompose(labeled)), unprocessed)
    }
}
