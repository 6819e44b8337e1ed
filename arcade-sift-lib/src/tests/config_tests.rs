use super::*;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_default_options_validate_to_default_config() {
    let config = FilterConfig::try_from(FilterOptions::default()).unwrap();
    assert_eq!(config, FilterConfig::default());
    assert_eq!(config.max_players(), None);
    assert_eq!(config.max_buttons(), None);
    assert!(config.working_only());
    assert_eq!(config.orientation(), Orientation::Both);
}

#[test]
fn test_limits_below_sentinel_are_kept() {
    let options = FilterOptions {
        max_players: 2,
        max_buttons: 0,
        ..Default::default()
    };
    let config = FilterConfig::try_from(options).unwrap();
    assert_eq!(config.max_players(), Some(2));
    assert_eq!(config.max_buttons(), Some(0));
}

#[test]
fn test_limits_at_or_above_sentinel_are_unrestricted() {
    let options = FilterOptions {
        max_players: 99,
        max_buttons: 150,
        ..Default::default()
    };
    let config = FilterConfig::try_from(options).unwrap();
    assert_eq!(config.max_players(), None);
    assert_eq!(config.max_buttons(), None);
}

#[test]
fn test_validation_collects_every_issue() {
    let options = FilterOptions {
        max_players: 0,
        max_buttons: -1,
        orientation: "diagonal".to_string(),
        ..Default::default()
    };
    let err = FilterConfig::try_from(options).unwrap_err();
    assert_eq!(
        err.issues,
        vec![
            ConfigIssue::OutOfRange {
                field: "players",
                value: 0,
                min: 1
            },
            ConfigIssue::OutOfRange {
                field: "max_buttons",
                value: -1,
                min: 0
            },
            ConfigIssue::UnknownOrientation("diagonal".to_string()),
        ]
    );
    let message = err.to_string();
    assert!(message.contains("players must be at least 1, got 0"));
    assert!(message.contains("; "));
}

#[test]
fn test_orientation_is_case_insensitive() {
    let options = FilterOptions {
        orientation: " Vertical ".to_string(),
        ..Default::default()
    };
    let config = FilterConfig::try_from(options).unwrap();
    assert_eq!(config.orientation(), Orientation::Vertical);
}

#[test]
fn test_all_label_clears_choice_lists() {
    let options = FilterOptions {
        controls: strings(&["joystick", "All"]),
        directions: strings(&["all"]),
        ..Default::default()
    };
    let config = FilterConfig::try_from(options).unwrap();
    assert!(config.controls().is_empty());
    assert!(config.directions().is_empty());
}

#[test]
fn test_tokens_are_trimmed_and_lowercased() {
    let options = FilterOptions {
        controls: strings(&[" Trackball ", ""]),
        region_order: strings(&["USA", "  ", "Europe"]),
        language_order: strings(&["English"]),
        ..Default::default()
    };
    let config = FilterConfig::try_from(options).unwrap();
    assert_eq!(config.controls(), ["trackball"]);
    assert_eq!(config.region_order(), ["usa", "europe"]);
    assert_eq!(config.language_order(), ["english"]);
}

#[test]
fn test_config_to_options_round_trip() {
    let options = FilterOptions {
        max_players: 2,
        max_buttons: 6,
        controls: strings(&["joystick"]),
        directions: strings(&["8-way"]),
        orientation: "horizontal".to_string(),
        working_only: false,
        include_mature: true,
        include_clones: true,
        include_bootlegs: false,
        include_prototypes: true,
        region_order: strings(&["usa", "japan"]),
        language_order: strings(&["english"]),
    };
    let config = FilterConfig::try_from(options.clone()).unwrap();
    let back = FilterOptions::from(&config);
    assert_eq!(back, options);
    assert_eq!(FilterConfig::try_from(back).unwrap(), config);
}

#[test]
fn test_unrestricted_limits_serialize_as_sentinel() {
    let back = FilterOptions::from(&FilterConfig::default());
    assert_eq!(back.max_players, UNRESTRICTED);
    assert_eq!(back.max_buttons, UNRESTRICTED);
}

#[test]
fn test_options_use_preset_key_names() {
    let json = r#"{"players": 4, "mature": true, "orientation": "vertical"}"#;
    let options: FilterOptions = serde_json::from_str(json).unwrap();
    assert_eq!(options.max_players, 4);
    assert!(options.include_mature);
    assert_eq!(options.orientation, "vertical");
    // unspecified keys fall back to defaults
    assert_eq!(options.max_buttons, UNRESTRICTED);
    assert!(options.working_only);
}
