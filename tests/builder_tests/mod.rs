use cloudname::builder::{build, next_group_name_with};
use cloudname::{
    combine_app_stack_detail, next_group_name, AutoScalingGroupNameBuilder, CloudNameError,
    Grammar, Label, LabeledVariables, LoadBalancerNameBuilder, Names, NamingConfig,
};
use pretty_assertions::assert_eq;

#[test]
fn test_build_and_parse_back() {
    let name = AutoScalingGroupNameBuilder::new()
        .app_name("cass")
        .stack("nccpintegration")
        .detail("random-junk")
        .countries("northamerica")
        .dev_phase("prod")
        .hardware("gamesystems")
        .partners("vizio")
        .revision("27")
        .used_by("nccp")
        .red_black_swap("A")
        .zone("useast1a")
        .build_validated_group_name()
        .unwrap();
    assert_eq!(
        name,
        "cass-nccpintegration-random-junk-c0northamerica-d0prod-h0gamesystems-p0vizio-r027-u0nccp-w0A-z0useast1a"
    );

    let names = Names::parse(name.as_str());
    assert_eq!(names.cluster(), Some(name.as_str()));
    assert_eq!(names.detail(), Some("random-junk"));
    assert_eq!(names.zone(), Some("useast1a"));
}

#[test]
fn test_build_with_detail_and_no_stack() {
    let name = AutoScalingGroupNameBuilder::new()
        .app_name("cass")
        .detail("my-stuff")
        .build_group_name()
        .unwrap();
    assert_eq!(name, "cass--my-stuff");
    assert_eq!(Names::parse(name.as_str()).detail(), Some("my-stuff"));
}

#[test]
fn test_build_with_labeled_variables_value() {
    let vars = LabeledVariables::default()
        .with(Label::Zone, "useast1a")
        .with(Label::Countries, "US");
    let name = AutoScalingGroupNameBuilder::new()
        .app_name("app")
        .labeled_variables(vars)
        .build_group_name()
        .unwrap();
    assert_eq!(name, "app-c0US-z0useast1a");
}

#[test]
fn test_validation_failures() {
    let cases = [
        (
            AutoScalingGroupNameBuilder::new(),
            CloudNameError::EmptyField { field: "appName" },
        ),
        (
            AutoScalingGroupNameBuilder::new().app_name("my-app"),
            CloudNameError::IllegalCharacters {
                field: "appName",
                value: "my-app".to_string(),
            },
        ),
        (
            AutoScalingGroupNameBuilder::new().app_name("app").detail("a%b"),
            CloudNameError::IllegalCharacters {
                field: "detail",
                value: "a%b".to_string(),
            },
        ),
        (
            AutoScalingGroupNameBuilder::new().app_name("app").stack("v001"),
            CloudNameError::ReservedFormat {
                field: "stack",
                value: "v001".to_string(),
            },
        ),
        (
            AutoScalingGroupNameBuilder::new().app_name("app").detail("x-d0prod"),
            CloudNameError::ReservedFormat {
                field: "detail",
                value: "x-d0prod".to_string(),
            },
        ),
    ];
    for (builder, expected) in cases {
        assert_eq!(builder.build_validated_group_name(), Err(expected));
    }
}

#[test]
fn test_build_with_custom_separator() {
    let config = NamingConfig {
        labeled_var_separator: '9',
        ..NamingConfig::default()
    };
    let grammar = Grammar::new(config).unwrap();
    let name = AutoScalingGroupNameBuilder::new()
        .app_name("app")
        .countries("US")
        .build_group_name_with(&grammar, true)
        .unwrap();
    assert_eq!(name, "app-c9US");
    assert_eq!(Names::parse_with(&grammar, name.as_str()).countries(), Some("US"));
}

#[test]
fn test_next_group_name_sequence() {
    assert_eq!(next_group_name("discovery-dev-v031").unwrap(), "discovery-dev-v032");
    assert_eq!(next_group_name("foo-v007").unwrap(), "foo-v008");
    assert_eq!(next_group_name("foo-v999").unwrap(), "foo-v000");
    assert_eq!(next_group_name("foo").unwrap(), "foo-v000");
    assert!(next_group_name_with(Grammar::standard(), "bad name").is_err());
}

#[test]
fn test_free_function_builders() {
    assert_eq!(
        combine_app_stack_detail(Some("app"), Some("stack"), Some("detail")).unwrap(),
        "app-stack-detail"
    );
    let vars = LabeledVariables::default().with(Label::DevPhase, "test");
    assert_eq!(
        build("app", None, Some("detail"), Some(&vars)).unwrap(),
        "app--detail-d0test"
    );
}

#[test]
fn test_load_balancer_names() {
    let name = LoadBalancerNameBuilder::new()
        .app_name("app")
        .detail("frontend")
        .build_load_balancer_name()
        .unwrap();
    assert_eq!(name, "app--frontend");
    let names = Names::parse(name.as_str());
    assert_eq!(names.app(), Some("app"));
    assert_eq!(names.detail(), Some("frontend"));
}
