//! # Naming Conventions
//!
//! A naming convention is a secondary grammar applied to one component of an
//! already parsed name (usually the cluster or the detail). Each convention
//! extracts a typed value and hands back whatever it did not consume, so
//! conventions can be layered without the compound name parser knowing about
//! them.
//!
//! Two conventions ship with the crate:
//!
//! * [`LabeledVariablesNamingConvention`]: trailing `-<key>0<value>` tokens
//! * [`ShardingNamingConvention`]: leading `x<id><value>` shard tokens
//!
//! Anomalies that do not prevent a result are reported as warnings. Errors mark
//! a result as unusable; check [`NamingResult::is_valid`] before trusting
//! [`NamingResult::result`].

pub mod labeled_variables;
pub mod sharding;

pub use labeled_variables::{
    Label, LabelPattern, LabeledVariables, LabeledVariablesNamingConvention,
};
pub use sharding::{Shard, ShardingNamingConvention, Shards};

/// Extracts an encoded value out of a name component.
pub trait NamingConvention {
    type Output;

    /// Examines `component` and returns what was found. Never fails: problems
    /// are carried in the result's warnings and errors.
    fn extract_naming_convention(&self, component: &str) -> NamingResult<Self::Output>;
}

impl<C: NamingConvention + ?Sized> NamingConvention for &C {
    type Output = C::Output;

    fn extract_naming_convention(&self, component: &str) -> NamingResult<Self::Output> {
        (**self).extract_naming_convention(component)
    }
}

/// The outcome of applying a [`NamingConvention`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingResult<T> {
    result: Option<T>,
    unprocessed: String,
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl<T> Default for NamingResult<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> NamingResult<T> {
    pub fn new<S: Into<String>>(result: Option<T>, unprocessed: S) -> Self {
        Self {
            result,
            unprocessed: unprocessed.into(),
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// No result, nothing left over, no warnings or errors.
    pub fn empty() -> Self {
        Self::new(None, String::new())
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings = warnings;
        self
    }

    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors = errors;
        self
    }

    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    pub fn into_result(self) -> Option<T> {
        self.result
    }

    /// The part of the component the convention did not consume.
    pub fn unprocessed(&self) -> &str {
        &self.unprocessed
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> NamingResult<U> {
        NamingResult {
            result: self.result.map(f),
            unprocessed: self.unprocessed,
            warnings: self.warnings,
            errors: self.errors,
        }
    }
}
