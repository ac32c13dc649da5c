use cloudname::conventions::sharding::{duplicate_shard_warning, shard_in_remaining_warning};
use cloudname::{
    LabeledVariables, LabeledVariablesNamingConvention, Names, NamesParser, NamingConvention,
    NamingResult, PrefixedNamesParser, Shard, ShardingNamingConvention,
};
use pretty_assertions::assert_eq;

#[test]
fn test_shards_from_detail() {
    let names = Names::parse("wowza-test-x1useast1-x2uswest2-cdn-v012");
    assert_eq!(names.detail(), Some("x1useast1-x2uswest2-cdn"));

    let result = names.apply_to_detail(&ShardingNamingConvention);
    let shards = result.result().unwrap();
    assert_eq!(shards[&1].shard_value(), "useast1");
    assert_eq!(shards[&2].shard_value(), "uswest2");
    assert_eq!(result.unprocessed(), "cdn");
}

#[test]
fn test_shard_scenarios() {
    let result = ShardingNamingConvention.extract_naming_convention("x1foo-x2bar-extra");
    let shards = result.result().unwrap();
    assert_eq!(shards.len(), 2);
    assert_eq!(shards[&1], Shard::new(1, "foo").unwrap());
    assert_eq!(shards[&2], Shard::new(2, "bar").unwrap());
    assert_eq!(result.unprocessed(), "extra");
    assert!(result.warnings().is_empty());

    let result = ShardingNamingConvention.extract_naming_convention("x1foo-x1bar");
    let shards = result.result().unwrap();
    assert_eq!(shards.len(), 1);
    assert_eq!(shards[&1].shard_value(), "bar");
    assert_eq!(
        result.warnings(),
        [duplicate_shard_warning(
            &Shard::new(1, "foo").unwrap(),
            &Shard::new(1, "bar").unwrap()
        )]
    );
}

#[test]
fn test_leftover_shard_warning() {
    let result = ShardingNamingConvention.extract_naming_convention("x1foo-junk-x3baz");
    assert_eq!(result.unprocessed(), "junk-x3baz");
    assert_eq!(
        result.warnings(),
        [shard_in_remaining_warning("junk-x3baz", 3, "baz")]
    );
    assert!(result.is_valid());
}

#[test]
fn test_labeled_variables_on_cluster() {
    let names = Names::parse("app-stack-c0US-z0useast1a-v001");
    let result = names.apply_to_cluster(LabeledVariablesNamingConvention::standard());
    assert_eq!(result.unprocessed(), "app-stack");
    assert_eq!(result.result(), Some(names.labeled_variables()));
}

#[test]
fn test_labeled_variables_absent() {
    let names = Names::parse("app-stack");
    let result = names.apply_to_cluster(LabeledVariablesNamingConvention::standard());
    assert_eq!(result, NamingResult::<LabeledVariables>::empty());
}

/// Reads a trailing `_<digits>` build marker.
struct BuildSuffixConvention;

impl NamingConvention for BuildSuffixConvention {
    type Output = u32;

    fn extract_naming_convention(&self, component: &str) -> NamingResult<u32> {
        match component.rsplit_once('_') {
            Some((head, tail)) => match tail.parse() {
                Ok(build) => NamingResult::new(Some(build), head),
                Err(_) => NamingResult::new(None, component)
                    .with_errors(vec![format!("bad build marker {}", tail)]),
            },
            None => NamingResult::new(None, component),
        }
    }
}

#[test]
fn test_custom_convention_layers_on_names() {
    let names = Names::parse("app-stack-canary_42");
    let result = names.apply_to_detail(&BuildSuffixConvention);
    assert_eq!(result.result(), Some(&42));
    assert_eq!(result.unprocessed(), "canary");

    let result = names.apply_to_cluster(&BuildSuffixConvention);
    assert_eq!(result.result(), Some(&42));
    assert_eq!(result.unprocessed(), "app-stack-canary");

    let broken = Names::parse("app-stack-canary_x").apply_to_detail(&BuildSuffixConvention);
    assert!(!broken.is_valid());
    assert_eq!(broken.errors(), ["bad build marker x".to_string()]);
}

#[test]
fn test_prefixed_parser_strategy() {
    let parser = PrefixedNamesParser::new("failover_");
    let parsed = parser.parse_name("failover_app-stack-x1east-v005");
    assert!(parsed.is_prefixed());
    assert_eq!(parsed.cluster(), Some("app-stack-x1east"));
    let shards = parsed.apply_to_detail(&ShardingNamingConvention).into_result().unwrap();
    assert_eq!(shards[&1].shard_value(), "east");
}
