//! # Compound Name Parsing
//!
//! Breaks the name of an auto scaling group, cluster, load balancer or security
//! group into its parts:
//!
//! ```text
//! helloapp-prod-useast-c0US-v003
//! |        |    |      |    `- push (sequence 3)
//! |        |    |      `------ labeled variables (countries = US)
//! |        |    `------------- detail
//! |        `------------------ stack
//! `--------------------------- app
//! ```
//!
//! Parsing is all or nothing: a name that does not fit the grammar yields an
//! empty [`Names`] rather than a partially filled one. Use [`Names::try_parse`]
//! to get an error instead.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::conventions::{LabeledVariables, NamingConvention, NamingResult};
use crate::grammar::Grammar;
use crate::{CloudNameError, CloudNameResult};

/// The parts of a compound name. Every field is absent when the input was
/// empty or did not parse.
///
/// Deserializing reads only `group` and parses it again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "SerializedNames")]
pub struct Names {
    group: Option<String>,
    cluster: Option<String>,
    app: Option<String>,
    stack: Option<String>,
    detail: Option<String>,
    push: Option<String>,
    sequence: Option<u32>,
    labeled_variables: LabeledVariables,
}

impl Names {
    /// Parses `name` with the process wide grammar.
    pub fn parse<'a, N: Into<Option<&'a str>>>(name: N) -> Self {
        Self::parse_with(Grammar::global(), name)
    }

    #[tracing::instrument(level = "debug", skip(grammar, name))]
    pub fn parse_with<'a, N: Into<Option<&'a str>>>(grammar: &Grammar, name: N) -> Self {
        let Some(name) = name.into().filter(|n| !n.trim().is_empty()) else {
            return Self::default();
        };

        let (cluster, push, sequence) = match grammar.split_push(name) {
            Some((cluster, push, digits)) => match digits.parse::<u32>() {
                Ok(sequence) => (cluster, Some(push), Some(sequence)),
                Err(_) => return Self::default(),
            },
            None => (name, None, None),
        };

        let Some((unlabeled, labeled)) = grammar.split_labeled(cluster) else {
            debug!("{} does not fit the labeled variable grammar", name);
            return Self::default();
        };

        let Some((app, stack, detail)) = grammar.split_name(unlabeled) else {
            debug!("{} does not fit the app-stack-detail grammar", name);
            return Self::default();
        };

        Self {
            group: Some(name.to_string()),
            cluster: Some(cluster.to_string()),
            app: Some(app.to_string()),
            stack: stack.map(str::to_string),
            detail: detail.map(str::to_string),
            push: push.map(str::to_string),
            sequence,
            labeled_variables: grammar.labeled_variables().decompose(labeled),
        }
    }

    /// Same as [`Names::parse`], but rejects names that do not parse.
    pub fn try_parse<'a, N: Into<Option<&'a str>>>(name: N) -> CloudNameResult<Self> {
        Self::try_parse_with(Grammar::global(), name)
    }

    pub fn try_parse_with<'a, N: Into<Option<&'a str>>>(
        grammar: &Grammar,
        name: N,
    ) -> CloudNameResult<Self> {
        let name = name.into();
        let names = Self::parse_with(grammar, name);
        if names.is_empty() {
            return Err(CloudNameError::invalid_name(name.unwrap_or_default()));
        }
        Ok(names)
    }

    /// True when nothing was parsed.
    pub fn is_empty(&self) -> bool {
        self.group.is_none()
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    pub fn cluster(&self) -> Option<&str> {
        self.cluster.as_deref()
    }

    pub fn app(&self) -> Option<&str> {
        self.app.as_deref()
    }

    pub fn stack(&self) -> Option<&str> {
        self.stack.as_deref()
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub fn push(&self) -> Option<&str> {
        self.push.as_deref()
    }

    pub fn sequence(&self) -> Option<u32> {
        self.sequence
    }

    pub fn labeled_variables(&self) -> &LabeledVariables {
        &self.labeled_variables
    }

    pub fn countries(&self) -> Option<&str> {
        self.labeled_variables.countries()
    }

    pub fn dev_phase(&self) -> Option<&str> {
        self.labeled_variables.dev_phase()
    }

    pub fn hardware(&self) -> Option<&str> {
        self.labeled_variables.hardware()
    }

    pub fn partners(&self) -> Option<&str> {
        self.labeled_variables.partners()
    }

    pub fn revision(&self) -> Option<&str> {
        self.labeled_variables.revision()
    }

    pub fn used_by(&self) -> Option<&str> {
        self.labeled_variables.used_by()
    }

    pub fn red_black_swap(&self) -> Option<&str> {
        self.labeled_variables.red_black_swap()
    }

    pub fn zone(&self) -> Option<&str> {
        self.labeled_variables.zone()
    }

    /// Applies `convention` to the detail. Empty when there is no detail.
    pub fn apply_to_detail<C: NamingConvention>(&self, convention: &C) -> NamingResult<C::Output> {
        match self.detail() {
            Some(detail) => convention.extract_naming_convention(detail),
            None => NamingResult::empty(),
        }
    }

    /// Applies `convention` to the cluster. Empty when nothing was parsed.
    pub fn apply_to_cluster<C: NamingConvention>(&self, convention: &C) -> NamingResult<C::Output> {
        match self.cluster() {
            Some(cluster) => convention.extract_naming_convention(cluster),
            None => NamingResult::empty(),
        }
    }
}

#[derive(Deserialize)]
struct SerializedNames {
    #[serde(default)]
    group: Option<String>,
}

impl From<SerializedNames> for Names {
    fn from(serialized: SerializedNames) -> Self {
        Names::parse(serialized.group.as_deref())
    }
}

impl fmt::Display for Names {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.group().unwrap_or_default())
    }
}

/// The cluster of an auto scaling group, or an empty string.
pub fn cluster_from_group_name(group_name: &str) -> String {
    Names::parse(group_name)
        .cluster()
        .unwrap_or_default()
        .to_string()
}

/// The stack of an auto scaling group, or an empty string.
pub fn stack_name_from_group_name(group_name: &str) -> String {
    Names::parse(group_name)
        .stack()
        .unwrap_or_default()
        .to_string()
}
