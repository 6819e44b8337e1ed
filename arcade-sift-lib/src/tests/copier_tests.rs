use std::cell::RefCell;

use super::*;

fn selection(roms: &[&str], disks: &[&str], samples: &[&str]) -> Selection {
    Selection {
        roms: roms.iter().map(|s| s.to_string()).collect(),
        disks: disks.iter().map(|s| s.to_string()).collect(),
        samples: samples.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, b"data").unwrap();
}

#[test]
fn test_copies_roms_disks_and_samples() {
    let src = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let roms = src.path().join("roms");
    let samples = src.path().join("samples");
    touch(&roms.join("mslug.zip"));
    touch(&roms.join("neogeo.7z"));
    touch(&roms.join("kinst").join("kinst.chd"));
    touch(&samples.join("invaders.zip"));

    let paths = CopyPaths {
        rom_dir: roms,
        sample_dir: Some(samples),
        output_dir: out.path().to_path_buf(),
    };
    let summary = copy_assets(
        &selection(&["mslug", "neogeo"], &["kinst/kinst.chd"], &["invaders"]),
        &paths,
        &|_| {},
    );

    assert_eq!(summary.copied, 4);
    assert_eq!(summary.missing, 0);
    assert!(summary.failed.is_empty());
    assert!(out.path().join("roms/mslug.zip").is_file());
    assert!(out.path().join("roms/neogeo.7z").is_file());
    assert!(out.path().join("roms/kinst/kinst.chd").is_file());
    assert!(out.path().join("samples/invaders.zip").is_file());
}

#[test]
fn test_zip_is_preferred_over_7z() {
    let src = tempfile::tempdir().unwrap();
    touch(&src.path().join("pacman.zip"));
    touch(&src.path().join("pacman.7z"));
    assert_eq!(
        find_archive(src.path(), "pacman"),
        Some(src.path().join("pacman.zip"))
    );
    assert_eq!(find_archive(src.path(), "galaga"), None);
}

#[test]
fn test_missing_sources_are_counted_not_fatal() {
    let src = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    touch(&src.path().join("pacman.zip"));

    let events = RefCell::new(Vec::new());
    let paths = CopyPaths {
        rom_dir: src.path().to_path_buf(),
        sample_dir: None,
        output_dir: out.path().to_path_buf(),
    };
    let summary = copy_assets(
        &selection(&["pacman", "galaga"], &["kinst/kinst.chd"], &["invaders"]),
        &paths,
        &|e| events.borrow_mut().push(e),
    );

    assert_eq!(summary.copied, 1);
    // samples are skipped without a sample directory, not counted missing
    assert_eq!(summary.missing, 2);
    assert_eq!(
        events.into_inner(),
        vec![SortProgress::CopyFinished {
            copied: 1,
            missing: 2,
            failed: 0
        }]
    );
}

#[test]
fn test_absent_sample_dir_skips_samples() {
    let src = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let paths = CopyPaths {
        rom_dir: src.path().to_path_buf(),
        sample_dir: Some(src.path().join("no-such-dir")),
        output_dir: out.path().to_path_buf(),
    };
    let summary = copy_assets(&selection(&[], &[], &["invaders"]), &paths, &|_| {});
    assert_eq!(summary, CopySummary::default());
}

#[test]
fn test_copy_failure_is_reported_and_batch_continues() {
    let src = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    touch(&src.path().join("aaa.zip"));
    touch(&src.path().join("bbb.zip"));
    // a directory where the destination file should go makes the copy fail
    std::fs::create_dir_all(out.path().join("roms").join("aaa.zip")).unwrap();

    let events = RefCell::new(Vec::new());
    let paths = CopyPaths {
        rom_dir: src.path().to_path_buf(),
        sample_dir: None,
        output_dir: out.path().to_path_buf(),
    };
    let summary = copy_assets(
        &selection(&["aaa", "bbb"], &[], &[]),
        &paths,
        &|e| events.borrow_mut().push(e),
    );

    assert_eq!(summary.copied, 1);
    assert_eq!(summary.failed.len(), 1);
    assert!(out.path().join("roms/bbb.zip").is_file());

    let events = events.into_inner();
    assert!(matches!(
        events[0],
        SortProgress::CopyFailed {
            kind: AssetKind::Rom,
            ref name,
            ..
        } if name == "aaa"
    ));
    assert_eq!(
        events[1],
        SortProgress::CopyFinished {
            copied: 1,
            missing: 0,
            failed: 1
        }
    );
}
