use committee_ranker::config::CommitteeConfig;
use committee_ranker::CommitteeError;

const BASE: &str = r#"
team_size = 2

[field_weights]
IR = 2
HCI = 1

[measure_weights]
field = 3
field_diversity = 1
seniority = 2
gender_diversity = 1
geo_diversity = 1
community_extension = 3

[[candidates]]
id = "A"
fields = ["IR"]
senior = true
geo = "EU"
gender = "m"
community_ext = 0

[[candidates]]
id = "B"
fields = ["HCI", "IR"]
senior = false
geo = "US"
gender = "f"
community_ext = 2
"#;

#[test]
fn parses_toml_config() {
    let config = CommitteeConfig::from_toml_str(BASE).unwrap();

    assert_eq!(config.team_size, 2);
    assert_eq!(config.field_weights.get("IR"), Some(&2));
    assert!((config.measure_weights.community_extension - 3.0).abs() < 1e-9);
    assert_eq!(config.candidates.len(), 2);
    assert_eq!(config.candidates[1].fields, vec!["HCI", "IR"]);
    assert_eq!(config.candidates[1].community_ext, 2);

    let roster = config.validate().unwrap();
    assert!(!roster.is_empty());
    assert_eq!(roster.len(), 2);
}

#[test]
fn unknown_measure_weight_is_rejected() {
    let contents = BASE.replace("community_extension = 3", "community_extension = 3\nreviewing = 5");
    let err = CommitteeConfig::from_toml_str(&contents).unwrap_err();

    assert!(matches!(err, CommitteeError::Parse(_)));
    assert!(err.to_string().contains("reviewing"));
}

#[test]
fn missing_measure_weight_is_rejected() {
    let contents = BASE.replace("seniority = 2\n", "");
    let err = CommitteeConfig::from_toml_str(&contents).unwrap_err();

    assert!(matches!(err, CommitteeError::Parse(_)));
    assert!(err.to_string().contains("seniority"));
}

#[test]
fn unweighted_field_tag_is_rejected() {
    let contents = BASE.replace(r#"fields = ["IR"]"#, r#"fields = ["IR", "IIR"]"#);
    let config = CommitteeConfig::from_toml_str(&contents).unwrap();

    match config.validate().unwrap_err() {
        CommitteeError::UnknownField { candidate, field } => {
            assert_eq!(candidate, "A");
            assert_eq!(field, "IIR");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn zero_field_weight_is_rejected() {
    let contents = BASE.replace("HCI = 1", "HCI = 0");
    let config = CommitteeConfig::from_toml_str(&contents).unwrap();

    assert!(matches!(
        config.validate(),
        Err(CommitteeError::NonPositiveFieldWeight { weight: 0, .. })
    ));
}

#[test]
fn duplicate_candidate_is_rejected() {
    let contents = BASE.replace(r#"id = "B""#, r#"id = "A""#);
    let config = CommitteeConfig::from_toml_str(&contents).unwrap();

    match config.validate().unwrap_err() {
        CommitteeError::DuplicateCandidate(id) => assert_eq!(id, "A"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn team_size_bounds_are_checked() {
    for team_size in [0usize, 3] {
        let contents = BASE.replace("team_size = 2", &format!("team_size = {}", team_size));
        let config = CommitteeConfig::from_toml_str(&contents).unwrap();
        assert!(matches!(
            config.validate(),
            Err(CommitteeError::TeamSize { roster_size: 2, .. })
        ));
    }
}

#[test]
fn empty_roster_is_rejected() {
    let mut config = CommitteeConfig::default();
    config.candidates.clear();

    assert!(matches!(config.validate(), Err(CommitteeError::EmptyRoster)));
}

#[test]
fn non_finite_measure_weight_is_rejected() {
    let mut config = CommitteeConfig::default();
    config.measure_weights.geo_diversity = f64::NAN;

    match config.validate().unwrap_err() {
        CommitteeError::InvalidMeasureWeight { measure, .. } => assert_eq!(measure, "geo_diversity"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn written_default_config_loads_back() {
    let dir = std::env::temp_dir().join(format!("committee-ranker-test-{}", std::process::id()));
    let path = dir.join("nested").join("committee.toml");

    let config = CommitteeConfig::default();
    config.write(&path).unwrap();
    let (loaded, source) = CommitteeConfig::load(Some(path.clone())).unwrap();

    assert_eq!(source, Some(path));
    assert_eq!(loaded, config);
    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn missing_explicit_config_is_a_read_error() {
    let path = std::env::temp_dir().join("committee-ranker-does-not-exist.toml");
    assert!(matches!(
        CommitteeConfig::load(Some(path)),
        Err(CommitteeError::Read { .. })
    ));
}

#[test]
fn shipped_sample_config_matches_defaults() {
    let contents = include_str!("../config/committee.toml");
    let config = CommitteeConfig::from_toml_str(contents).unwrap();
    assert_eq!(config, CommitteeConfig::default());
}
