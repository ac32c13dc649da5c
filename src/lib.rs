//! # cloudname
//!
//! Parses and builds the compound names given to cloud resources such as auto
//! scaling groups, clusters, load balancers and security groups.
//!
//! ```
//! use cloudname::{AutoScalingGroupNameBuilder, Names};
//!
//! let names = Names::parse("helloapp-prod-useast-c0US-v003");
//! assert_eq!(names.app(), Some("helloapp"));
//! assert_eq!(names.countries(), Some("US"));
//! assert_eq!(names.sequence(), Some(3));
//!
//! let cluster = AutoScalingGroupNameBuilder::new()
//!     .app_name("helloapp")
//!     .stack("prod")
//!     .countries("US")
//!     .build_validated_group_name()
//!     .unwrap();
//! assert_eq!(cluster, "helloapp-prod-c0US");
//! ```
//!
//! Secondary grammars layered on top of a parsed name live in
//! [`conventions`].
pub mod app_version;
pub mod builder;
pub mod config;
pub mod conventions;
pub mod error;
pub mod grammar;
pub mod names;
pub mod provider;
pub mod validation;

// Re-exports
pub use app_version::AppVersion;
pub use builder::{
    combine_app_stack_detail, next_group_name, AutoScalingGroupNameBuilder,
    LoadBalancerNameBuilder,
};
pub use config::NamingConfig;
pub use conventions::{
    Label, LabeledVariables, LabeledVariablesNamingConvention, NamingConvention, NamingResult,
    Shard, ShardingNamingConvention, Shards,
};
pub use error::*;
pub use grammar::Grammar;
pub use names::{cluster_from_group_name, stack_name_from_group_name, Names};
pub use provider::{DefaultNamesParser, NamesParser, PrefixedNames, PrefixedNamesParser};
