//! Seal determinism and collision handling

use crate::integration::test_utils::{list_dir, Fixture};
use fsbaseline::api::create_baseline;
use fsbaseline::config::ScanConfig;
use fsbaseline::error::{BaselineError, SealError};
use fsbaseline::snapshot::{seal, verify_seal};
use std::fs;

/// Test that identical snapshot bytes give identical seal suffixes
#[test]
fn test_seal_determinism() {
    let fixture = Fixture::new();
    fixture.file("one.txt", b"1");
    fixture.file("sub/two.txt", b"2");

    let first = create_baseline(
        &fixture.root(),
        &fixture.output("run1/baseline.csv"),
        &ScanConfig::default(),
    )
    .unwrap();
    let second = create_baseline(
        &fixture.root(),
        &fixture.output("run2/baseline.csv"),
        &ScanConfig::default(),
    )
    .unwrap();

    assert_eq!(first.seal.suffix(), second.seal.suffix());
    assert_eq!(
        fs::read(first.sealed_path()).unwrap(),
        fs::read(second.sealed_path()).unwrap()
    );
}

/// Test that a seal never overwrites an existing snapshot
#[test]
fn test_seal_refuses_to_overwrite() {
    let fixture = Fixture::new();
    fixture.file("one.txt", b"1");
    let output = fixture.output("baseline.csv");

    let first = create_baseline(&fixture.root(), &output, &ScanConfig::default()).unwrap();
    let err = create_baseline(&fixture.root(), &output, &ScanConfig::default()).unwrap_err();

    assert!(matches!(
        err,
        BaselineError::Seal(SealError::TargetExists(_))
    ));
    // Unsealed second copy stays next to the first sealed one
    assert!(output.exists());
    assert!(first.sealed_path().exists());
    assert_eq!(list_dir(output.parent().unwrap()).len(), 2);
}

/// Test that editing a sealed snapshot is detected
#[test]
fn test_tampered_snapshot_breaks_seal() {
    let fixture = Fixture::new();
    let path = fixture.dir.path().join("manual.csv");
    fs::write(&path, "File Path,Filename,SHA256 Hash\r\n").unwrap();

    let sealed = seal(&path).unwrap();
    assert!(verify_seal(&sealed.path).unwrap().is_intact());

    fs::write(&sealed.path, "File Path,Filename,SHA256 Hash\r\nx,x,\r\n").unwrap();
    assert!(!verify_seal(&sealed.path).unwrap().is_intact());
}
