use super::*;

fn sample_preset() -> Preset {
    Preset {
        full_xml: Some(PathBuf::from("/mame/full.xml")),
        rom_dir: Some(PathBuf::from("/mame/roms")),
        sample_dir: None,
        output_path: Some(PathBuf::from("cab_set")),
        options: FilterOptions {
            max_players: 2,
            max_buttons: 6,
            controls: vec!["joystick".to_string()],
            directions: vec!["8-way".to_string()],
            orientation: "horizontal".to_string(),
            include_clones: true,
            region_order: vec!["usa".to_string(), "world".to_string()],
            language_order: vec!["english".to_string()],
            ..Default::default()
        },
    }
}

#[test]
fn test_json_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cab.json");
    let preset = sample_preset();

    save_preset(&path, &preset).unwrap();
    let loaded = load_preset(&path).unwrap();

    assert_eq!(loaded, preset);
    assert_eq!(
        loaded.filter_config().unwrap(),
        preset.filter_config().unwrap()
    );
    assert!(!dir.path().join("cab.json.tmp").exists());
}

#[test]
fn test_toml_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("cab.toml");
    let preset = sample_preset();

    save_preset(&path, &preset).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("players = 2"));

    let loaded = load_preset(&path).unwrap();
    assert_eq!(loaded, preset);
}

#[test]
fn test_loads_flat_json_with_original_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.json");
    std::fs::write(
        &path,
        r#"{
  "full_xml": "full.xml",
  "rom_dir": "roms",
  "sample_dir": "",
  "output_path": "filtered_mame_set",
  "players": 99,
  "max_buttons": 4,
  "controls": [],
  "directions": ["4-way"],
  "orientation": "vertical",
  "working_only": true,
  "mature": false,
  "include_clones": false,
  "include_bootlegs": true,
  "include_prototypes": false,
  "region_order": ["usa"],
  "language_order": []
}"#,
    )
    .unwrap();

    let preset = load_preset(&path).unwrap();
    assert_eq!(preset.catalog(), Some(Path::new("full.xml")));
    assert_eq!(preset.sample_dir(), None);
    assert_eq!(preset.output_dir(), Some(Path::new("filtered_mame_set")));

    let config = preset.filter_config().unwrap();
    assert_eq!(config.max_players(), None);
    assert_eq!(config.max_buttons(), Some(4));
    assert!(config.include_bootlegs());
    assert_eq!(config.directions(), ["4-way"]);
}

#[test]
fn test_missing_keys_use_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sparse.json");
    std::fs::write(&path, r#"{"players": 2}"#).unwrap();

    let preset = load_preset(&path).unwrap();
    assert_eq!(preset.rom_dir(), None);
    let config = preset.filter_config().unwrap();
    assert_eq!(config.max_players(), Some(2));
    assert!(config.working_only());
}

#[test]
fn test_invalid_options_are_rejected() {
    let preset = Preset {
        options: FilterOptions {
            max_players: -3,
            ..Default::default()
        },
        ..Default::default()
    };
    let err = preset.filter_config().unwrap_err();
    assert!(matches!(err, PresetError::Config(_)));
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let json = dir.path().join("bad.json");
    std::fs::write(&json, "{ not json").unwrap();
    assert!(matches!(load_preset(&json), Err(PresetError::Json(_))));

    let toml = dir.path().join("bad.toml");
    std::fs::write(&toml, "players = [").unwrap();
    assert!(matches!(load_preset(&toml), Err(PresetError::TomlParse(_))));

    let missing = dir.path().join("missing.json");
    assert!(matches!(load_preset(&missing), Err(PresetError::Io(_))));
}
