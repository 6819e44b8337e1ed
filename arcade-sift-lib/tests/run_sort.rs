use std::cell::RefCell;
use std::path::Path;

use arcade_sift_lib::{FilterConfig, FilterOptions, RunPaths, SortError, SortProgress, run_sort};

const CATALOG: &str = r#"<?xml version="1.0"?>
<mame build="0.262">
  <machine name="neogeo" isbios="yes">
    <description>Neo-Geo MV-6F</description>
  </machine>
  <machine name="mslug" romof="neogeo" sourcefile="neogeo/neogeo.cpp">
    <description>Metal Slug - Super Vehicle-001</description>
    <display rotate="0"/>
    <input players="2" buttons="3">
      <control type="joy" ways="8"/>
    </input>
    <driver status="good"/>
  </machine>
  <machine name="mslugb" cloneof="mslug" romof="mslug" sourcefile="neogeo/neogeo.cpp">
    <description>Metal Slug (bootleg)</description>
    <driver status="good"/>
  </machine>
  <machine name="kinst" sourcefile="midway/kinst.cpp">
    <description>Killer Instinct (v1.5d)</description>
    <disk name="kinst"/>
    <input players="2" buttons="6">
      <control type="joy" ways="8"/>
    </input>
    <driver status="good"/>
  </machine>
  <machine name="invaders" sampleof="invaders" sourcefile="mw8080bw.cpp">
    <description>Space Invaders / Space Invaders M</description>
    <display rotate="270"/>
    <input players="2" buttons="1">
      <control type="joy" ways="2way"/>
    </input>
    <driver status="good"/>
  </machine>
  <machine name="nes" sourcefile="nes.cpp">
    <description>Nintendo Entertainment System / Famicom</description>
  </machine>
</mame>
"#;

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, b"data").unwrap();
}

fn setup() -> (tempfile::TempDir, RunPaths) {
    let root = tempfile::tempdir().unwrap();
    let catalog = root.path().join("full.xml");
    std::fs::write(&catalog, CATALOG).unwrap();

    let roms = root.path().join("roms");
    touch(&roms.join("mslug.zip"));
    touch(&roms.join("neogeo.zip"));
    touch(&roms.join("kinst.zip"));
    touch(&roms.join("kinst").join("kinst.chd"));
    touch(&roms.join("invaders.7z"));
    let samples = root.path().join("samples");
    touch(&samples.join("invaders.zip"));

    let paths = RunPaths {
        catalog,
        rom_dir: roms,
        sample_dir: Some(samples),
        output_dir: root.path().join("out"),
    };
    (root, paths)
}

#[test]
fn run_copies_selected_sets_and_writes_log() {
    let (_root, paths) = setup();
    let config = FilterConfig::try_from(FilterOptions {
        max_buttons: 4,
        ..Default::default()
    })
    .unwrap();

    let events = RefCell::new(Vec::new());
    let summary = run_sort(&paths, &config, false, &|e| events.borrow_mut().push(e)).unwrap();

    assert_eq!(summary.selection.total_parsed, 6);
    assert_eq!(summary.selection.kept_names(), vec!["invaders", "mslug"]);

    let copy = summary.copy.expect("copy summary");
    // mslug, neogeo, invaders and the invaders sample set
    assert_eq!(copy.copied, 4);
    assert_eq!(copy.missing, 0);

    let out = &paths.output_dir;
    assert!(out.join("roms/mslug.zip").is_file());
    assert!(out.join("roms/neogeo.zip").is_file());
    assert!(out.join("roms/invaders.7z").is_file());
    assert!(out.join("samples/invaders.zip").is_file());
    assert!(!out.join("roms/kinst.zip").exists());

    let log = std::fs::read_to_string(&summary.report_path).unwrap();
    assert!(log.starts_with("Total parsed: 6\nMatched unique: 2\n"));
    assert!(log.contains("Skipped buttons: 1"));
    assert!(log.contains("Skipped clone_type: 1"));
    assert!(log.contains("Skipped not_arcade: 2"));

    let events = events.into_inner();
    assert_eq!(events.first(), Some(&SortProgress::CatalogLoaded { entries: 6 }));
    assert!(matches!(events.last(), Some(SortProgress::ReportWritten { .. })));
    assert!(events.iter().any(|e| matches!(e, SortProgress::AssetsPlanned { total: 4, .. })));
}

#[test]
fn run_includes_disk_images() {
    let (_root, paths) = setup();
    let summary = run_sort(&paths, &FilterConfig::default(), false, &|_| {}).unwrap();

    assert!(summary.selection.disks.contains("kinst/kinst.chd"));
    assert!(paths.output_dir.join("roms/kinst/kinst.chd").is_file());
}

#[test]
fn dry_run_writes_log_only() {
    let (_root, mut paths) = setup();
    paths.rom_dir = paths.rom_dir.join("does-not-exist");

    let summary = run_sort(&paths, &FilterConfig::default(), true, &|_| {}).unwrap();

    assert!(summary.copy.is_none());
    assert!(summary.report_path.is_file());
    assert!(!paths.output_dir.join("roms").exists());
}

#[test]
fn missing_catalog_fails_before_selection() {
    let (_root, mut paths) = setup();
    paths.catalog = paths.catalog.with_file_name("nope.xml");

    let err = run_sort(&paths, &FilterConfig::default(), false, &|_| {}).unwrap_err();
    assert!(matches!(err, SortError::MissingPath { what: "Catalog", .. }));
    assert!(!paths.output_dir.exists());
}

#[test]
fn missing_rom_dir_fails() {
    let (_root, mut paths) = setup();
    paths.rom_dir = paths.rom_dir.join("does-not-exist");

    let err = run_sort(&paths, &FilterConfig::default(), false, &|_| {}).unwrap_err();
    assert!(matches!(err, SortError::MissingPath { what: "ROM directory", .. }));
}

#[test]
fn malformed_catalog_is_fatal() {
    let (_root, paths) = setup();
    std::fs::write(&paths.catalog, "<mame><machine name=\"x\">").unwrap();

    let err = run_sort(&paths, &FilterConfig::default(), false, &|_| {}).unwrap_err();
    assert!(matches!(err, SortError::Catalog(_)));
}
