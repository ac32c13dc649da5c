//! Round-trip properties between the builders and the parser.

use cloudname::validation::uses_reserved_format;
use cloudname::{
    next_group_name, AutoScalingGroupNameBuilder, CloudNameError, Label, Names, NamingConvention,
    ShardingNamingConvention,
};
use proptest::prelude::*;
use strum::IntoEnumIterator;

fn app_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9._]{1,12}"
}

fn stack_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9._]{0,8}"
}

fn detail_strategy() -> impl Strategy<Value = String> {
    "[-a-zA-Z0-9._~^]{0,16}"
}

fn label_strategy() -> impl Strategy<Value = Label> {
    prop::sample::select(Label::iter().collect::<Vec<_>>())
}

/// Shard tokens joined by hyphens, followed by arbitrary detail text.
fn shard_details_strategy() -> impl Strategy<Value = String> {
    (
        prop::collection::vec((1u32..100, "[a-zA-Z._^~][a-zA-Z0-9]{0,4}"), 0..4),
        "[-a-z0-9x]{0,10}",
    )
        .prop_map(|(shards, tail)| {
            let mut details = shards
                .iter()
                .map(|(id, value)| format!("x{}{}", id, value))
                .collect::<Vec<_>>()
                .join("-");
            details.push_str(&tail);
            details
        })
}

proptest! {
    #[test]
    fn test_app_only_round_trip(app in app_strategy()) {
        let name = AutoScalingGroupNameBuilder::new()
            .app_name(app.as_str())
            .build_group_name()
            .unwrap();
        let names = Names::parse(name.as_str());
        prop_assert_eq!(names.app(), Some(app.as_str()));
        prop_assert_eq!(names.stack(), None);
        prop_assert_eq!(names.detail(), None);
        prop_assert!(names.labeled_variables().is_empty());
    }

    #[test]
    fn test_cluster_round_trip(
        app in app_strategy(),
        stack in stack_strategy(),
        detail in detail_strategy(),
    ) {
        prop_assume!(!uses_reserved_format(&stack));
        prop_assume!(!uses_reserved_format(&detail));

        let name = AutoScalingGroupNameBuilder::new()
            .app_name(app.as_str())
            .stack(stack.as_str())
            .detail(detail.as_str())
            .build_group_name()
            .unwrap();
        let names = Names::parse(name.as_str());
        prop_assert_eq!(names.cluster(), Some(name.as_str()));
        prop_assert_eq!(names.push(), None);
    }

    #[test]
    fn test_validated_names_parse_back_to_their_parts(
        app in app_strategy(),
        stack in stack_strategy(),
        detail in detail_strategy(),
    ) {
        let built = AutoScalingGroupNameBuilder::new()
            .app_name(app.as_str())
            .stack(stack.as_str())
            .detail(detail.as_str())
            .build_validated_group_name();
        let reserved = uses_reserved_format(&stack) || uses_reserved_format(&detail);
        match built {
            Ok(name) => {
                prop_assert!(!reserved, "accepted reserved parts in {}", name);
                let names = Names::parse(name.as_str());
                prop_assert_eq!(names.app(), Some(app.as_str()));
                prop_assert_eq!(names.stack(), Some(stack.as_str()).filter(|s| !s.is_empty()));
                prop_assert_eq!(names.detail(), Some(detail.as_str()).filter(|d| !d.is_empty()));
            }
            Err(e) => {
                prop_assert!(reserved, "rejected legal parts: {}", e);
                let is_reserved_format = matches!(e, CloudNameError::ReservedFormat { .. });
                prop_assert!(is_reserved_format);
            }
        }
    }

    #[test]
    fn test_labeled_variable_round_trip(
        app in "[a-z]{1,8}",
        label in label_strategy(),
        value in "[a-zA-Z0-9]{1,8}",
    ) {
        let name = AutoScalingGroupNameBuilder::new()
            .app_name(app.as_str())
            .labeled_variable(label, value.as_str())
            .build_validated_group_name()
            .unwrap();
        let names = Names::parse(name.as_str());
        prop_assert_eq!(names.app(), Some(app.as_str()));
        for other in Label::iter() {
            let expected = (other == label).then_some(value.as_str());
            prop_assert_eq!(names.labeled_variables().get(other), expected);
        }
    }

    #[test]
    fn test_shard_extraction_is_idempotent(details in shard_details_strategy()) {
        let first = ShardingNamingConvention.extract_naming_convention(&details);
        let second = ShardingNamingConvention.extract_naming_convention(first.unprocessed());
        prop_assert!(second.result().is_none());
    }

    #[test]
    fn test_next_group_name_increments(app in "[a-z]{1,8}", sequence in 0u32..1000) {
        let asg = format!("{}-v{:03}", app, sequence);
        let expected = format!("{}-v{:03}", app, (sequence + 1) % 1000);
        prop_assert_eq!(next_group_name(&asg).unwrap(), expected);
    }
}
