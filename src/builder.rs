//! # Name Builders
//!
//! The inverse of [`Names::parse`]: assemble app, stack, detail and labeled
//! variables into a compound name.
//!
//! ```text
//! app ["-" stack] ["-" detail] *("-" key "0" value) ["-v" NNN]
//! ```
//!
//! A detail is always preceded by a stack slot, which is left empty when no
//! stack is given (`app--detail`). Labeled variables are appended in the
//! canonical key order `c d h p r u w z`.
//!
//! [`Names::parse`]: crate::Names::parse

use tracing::debug;

use crate::conventions::{Label, LabeledVariables};
use crate::grammar::{Grammar, PUSH_SEQUENCE_LIMIT};
use crate::validation::{
    not_empty, validate_detail_field, validate_name_field, validate_unreserved,
};
use crate::{CloudNameError, CloudNameResult, Names};

/// Joins app, stack and detail. Only the app is required.
pub fn combine_app_stack_detail(
    app: Option<&str>,
    stack: Option<&str>,
    detail: Option<&str>,
) -> CloudNameResult<String> {
    let app = not_empty(app, "appName")?;
    let stack = stack.unwrap_or_default();
    match detail {
        Some(detail) if !detail.is_empty() => Ok(format!("{}-{}-{}", app, stack, detail)),
        _ if !stack.is_empty() => Ok(format!("{}-{}", app, stack)),
        _ => Ok(app.to_string()),
    }
}

/// Builds a cluster name without validating the parts.
pub fn build(
    app: &str,
    stack: Option<&str>,
    detail: Option<&str>,
    labeled_variables: Option<&LabeledVariables>,
) -> CloudNameResult<String> {
    let mut name = combine_app_stack_detail(Some(app), stack, detail)?;
    if let Some(vars) = labeled_variables {
        append_labeled_variables(&mut name, vars, Grammar::global().config().labeled_var_separator);
    }
    Ok(name)
}

fn append_labeled_variables(name: &mut String, vars: &LabeledVariables, separator: char) {
    for (label, value) in vars.iter() {
        name.push('-');
        name.push(label.key());
        name.push(separator);
        name.push_str(value);
    }
}

/// Returns the name of the next auto scaling group in the cluster of `asg`,
/// with the push sequence incremented. The sequence wraps from 999 to 000 and
/// starts at 000 when `asg` has no push.
pub fn next_group_name(asg: &str) -> CloudNameResult<String> {
    next_group_name_with(Grammar::global(), asg)
}

pub fn next_group_name_with(grammar: &Grammar, asg: &str) -> CloudNameResult<String> {
    let names = Names::try_parse_with(grammar, asg)?;
    let cluster = names
        .cluster()
        .ok_or_else(|| CloudNameError::invalid_name(asg))?;
    let next = names
        .sequence()
        .map_or(0, |sequence| (sequence + 1) % PUSH_SEQUENCE_LIMIT);
    Ok(format!("{}-v{:03}", cluster, next))
}

/// Builds the name of a new auto scaling group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutoScalingGroupNameBuilder {
    app_name: Option<String>,
    stack: Option<String>,
    detail: Option<String>,
    labeled_variables: LabeledVariables,
}

impl AutoScalingGroupNameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn app_name<S: Into<String>>(mut self, app_name: S) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn stack<S: Into<String>>(mut self, stack: S) -> Self {
        self.stack = Some(stack.into());
        self
    }

    pub fn detail<S: Into<String>>(mut self, detail: S) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn labeled_variable<S: Into<String>>(mut self, label: Label, value: S) -> Self {
        self.labeled_variables.set(label, value);
        self
    }

    pub fn labeled_variables(mut self, labeled_variables: LabeledVariables) -> Self {
        self.labeled_variables = labeled_variables;
        self
    }

    pub fn countries<S: Into<String>>(self, countries: S) -> Self {
        self.labeled_variable(Label::Countries, countries)
    }

    pub fn dev_phase<S: Into<String>>(self, dev_phase: S) -> Self {
        self.labeled_variable(Label::DevPhase, dev_phase)
    }

    pub fn hardware<S: Into<String>>(self, hardware: S) -> Self {
        self.labeled_variable(Label::Hardware, hardware)
    }

    pub fn partners<S: Into<String>>(self, partners: S) -> Self {
        self.labeled_variable(Label::Partners, partners)
    }

    pub fn revision<S: Into<String>>(self, revision: S) -> Self {
        self.labeled_variable(Label::Revision, revision)
    }

    pub fn used_by<S: Into<String>>(self, used_by: S) -> Self {
        self.labeled_variable(Label::UsedBy, used_by)
    }

    pub fn red_black_swap<S: Into<String>>(self, red_black_swap: S) -> Self {
        self.labeled_variable(Label::RedBlackSwap, red_black_swap)
    }

    pub fn zone<S: Into<String>>(self, zone: S) -> Self {
        self.labeled_variable(Label::Zone, zone)
    }

    /// Builds the group name without validating the parts.
    pub fn build_group_name(&self) -> CloudNameResult<String> {
        self.build_group_name_with(Grammar::global(), false)
    }

    /// Builds the group name after checking every part against the grammar.
    pub fn build_validated_group_name(&self) -> CloudNameResult<String> {
        self.build_group_name_with(Grammar::global(), true)
    }

    #[tracing::instrument(level = "debug", skip(self, grammar))]
    pub fn build_group_name_with(&self, grammar: &Grammar, validate: bool) -> CloudNameResult<String> {
        let app = not_empty(self.app_name.as_deref(), "appName")?;

        if validate {
            self.validate(grammar, app)?;
        }

        let mut name = combine_app_stack_detail(
            Some(app),
            self.stack.as_deref(),
            self.detail.as_deref(),
        )?;
        append_labeled_variables(
            &mut name,
            &self.labeled_variables,
            grammar.config().labeled_var_separator,
        );
        debug!("built group name {}", name);
        Ok(name)
    }

    fn validate(&self, grammar: &Grammar, app: &str) -> CloudNameResult<()> {
        validate_name_field(grammar, "appName", Some(app))?;
        validate_name_field(grammar, "stack", self.stack.as_deref())?;
        validate_detail_field(grammar, "detail", self.detail.as_deref())?;
        validate_unreserved(grammar, "stack", self.stack.as_deref())?;
        validate_unreserved(grammar, "detail", self.detail.as_deref())?;
        for (label, value) in self.labeled_variables.iter() {
            if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(CloudNameError::IllegalCharacters {
                    field: label_field(label),
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}

fn label_field(label: Label) -> &'static str {
    match label {
        Label::Countries => "countries",
        Label::DevPhase => "devPhase",
        Label::Hardware => "hardware",
        Label::Partners => "partners",
        Label::Revision => "revision",
        Label::UsedBy => "usedBy",
        Label::RedBlackSwap => "redBlackSwap",
        Label::Zone => "zone",
    }
}

/// Builds the name of a new load balancer. Load balancer names carry no
/// labeled variables or push.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadBalancerNameBuilder {
    app_name: Option<String>,
    stack: Option<String>,
    detail: Option<String>,
}

impl LoadBalancerNameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn app_name<S: Into<String>>(mut self, app_name: S) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn stack<S: Into<String>>(mut self, stack: S) -> Self {
        self.stack = Some(stack.into());
        self
    }

    pub fn detail<S: Into<String>>(mut self, detail: S) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn build_load_balancer_name(&self) -> CloudNameResult<String> {
        combine_app_stack_detail(
            self.app_name.as_deref(),
            self.stack.as_deref(),
            self.detail.as_deref(),
        )
    }
}
