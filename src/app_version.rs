//! Parses build artifact version tags of the form
//! `package-version-commit[.hBUILD][/job/build]`, e.g.
//! `subscriberha-1.0.0-586499.h150/WE-WAPP-subscriberha/150`.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::grammar::NAME_HYPHEN_CHARS;

lazy_static! {
    static ref APP_VERSION: Regex = Regex::new(&format!(
        r"^([{}]+)-([0-9.]+)-([A-Za-z0-9_]{{1,40}})(?:[.]h([0-9]+))?(?:/([-a-zA-Z0-9]+)/([0-9]+))?$",
        NAME_HYPHEN_CHARS
    ))
    .expect("app version pattern must compile");
}

/// Ordered by package name, version, build job name, build number and
/// commit. Absent fields sort first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AppVersion {
    package_name: String,
    version: String,
    build_job_name: Option<String>,
    build_number: Option<String>,
    commit: String,
}

impl AppVersion {
    /// Returns `None` when `tag` is not an app version tag.
    pub fn parse(tag: &str) -> Option<Self> {
        let caps = APP_VERSION.captures(tag)?;
        let group = |idx: usize| caps.get(idx).map(|m| m.as_str().to_string());
        Some(Self {
            package_name: group(1)?,
            version: group(2)?,
            commit: group(3)?,
            build_number: group(4).or_else(|| group(6)),
            build_job_name: group(5),
        })
    }

    /// The package the artifact was built from.
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// The CI job that produced the artifact.
    pub fn build_job_name(&self) -> Option<&str> {
        self.build_job_name.as_deref()
    }

    /// The `.h` build number, or the job build number when there is none.
    pub fn build_number(&self) -> Option<&str> {
        self.build_number.as_deref()
    }

    /// Changelist or git hash.
    pub fn commit(&self) -> &str {
        &self.commit
    }
}
