//! Full pipeline tests: scan, write, seal, read back

use crate::integration::test_utils::{list_dir, Fixture};
use fsbaseline::api::create_baseline;
use fsbaseline::config::ScanConfig;
use fsbaseline::snapshot::{read_snapshot, recheck, verify_seal};
use fsbaseline::tree::hasher::compute_content_hash;
use std::fs;

/// Test the single-file scenario end to end
#[test]
fn test_notes_txt_end_to_end() {
    let fixture = Fixture::new();
    let notes = fixture.file("notes.txt", b"hello");
    let output = fixture.output("baseline.csv");

    let report = create_baseline(&fixture.root(), &output, &ScanConfig::default()).unwrap();

    let expected = format!(
        "File Path,Filename,SHA256 Hash\r\n{},notes.txt,{}\r\n",
        notes.display(),
        "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
    );
    let written = fs::read(report.sealed_path()).unwrap();
    assert_eq!(written, expected.as_bytes());

    let prefix = &hex::encode(compute_content_hash(expected.as_bytes()).as_bytes())[..8];
    assert_eq!(
        list_dir(output.parent().unwrap()),
        vec![format!("baseline_{}.csv", prefix)]
    );
}

/// Test that an empty root still produces a sealed, header-only snapshot
#[test]
fn test_empty_tree_is_sealed() {
    let fixture = Fixture::new();
    let output = fixture.output("empty.csv");

    let report = create_baseline(&fixture.root(), &output, &ScanConfig::default()).unwrap();

    assert_eq!(report.records, 0);
    assert_eq!(
        fs::read(report.sealed_path()).unwrap(),
        b"File Path,Filename,SHA256 Hash\r\n"
    );
    assert!(!output.exists());
}

/// Test that a sealed snapshot reads back into the same records and rechecks clean
#[test]
fn test_read_back_and_recheck() {
    let fixture = Fixture::new();
    fixture.file("a.txt", b"alpha");
    fixture.file("nested/b, with comma.txt", b"beta");
    fixture.file("nested/deeper/c.bin", &[0u8, 1, 2, 255]);
    let output = fixture.output("baseline.csv");

    let report = create_baseline(&fixture.root(), &output, &ScanConfig::default()).unwrap();
    let records = read_snapshot(report.sealed_path()).unwrap();

    assert_eq!(records.len(), 3);
    assert!(records.iter().any(|r| r.name == "b, with comma.txt"));
    assert!(verify_seal(report.sealed_path()).unwrap().is_intact());

    let clean = recheck(&records, 4096);
    assert_eq!(clean.unchanged(), 3);
    assert!(clean.is_clean());

    fs::write(fixture.root().join("a.txt"), b"changed").unwrap();
    fs::remove_file(fixture.root().join("nested/deeper/c.bin")).unwrap();
    let drifted = recheck(&records, 4096);
    assert_eq!(drifted.unchanged(), 1);
    assert_eq!(drifted.drifted(), 2);
}

/// Test that unreadable files keep their row with an empty digest
#[cfg(unix)]
#[test]
fn test_unreadable_file_recorded_without_digest() {
    use std::os::unix::fs::PermissionsExt;

    let fixture = Fixture::new();
    fixture.file("open.txt", b"open");
    let secret = fixture.file("secret.txt", b"secret");
    fs::set_permissions(&secret, fs::Permissions::from_mode(0o000)).unwrap();
    // Privileged users read through permission bits
    let readable = fs::File::open(&secret).is_ok();

    let report =
        create_baseline(&fixture.root(), &fixture.output("b.csv"), &ScanConfig::default())
            .unwrap();
    fs::set_permissions(&secret, fs::Permissions::from_mode(0o644)).unwrap();

    assert_eq!(report.records, 2);
    if !readable {
        assert_eq!(report.unreadable, vec![secret.clone()]);
        let text = fs::read_to_string(report.sealed_path()).unwrap();
        assert!(text.contains(&format!("{},secret.txt,\r\n", secret.display())));
        let records = read_snapshot(report.sealed_path()).unwrap();
        assert!(records.iter().any(|r| r.name == "secret.txt" && r.digest.is_none()));
    }
}

/// Test that a non-UTF-8 name is reported at scan time and does not read as drift
#[cfg(unix)]
#[test]
fn test_non_utf8_name_round_trip() {
    use fsbaseline::snapshot::RecheckStatus;
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let fixture = Fixture::new();
    let odd = fixture.root().join(OsStr::from_bytes(b"bad\xffname.txt"));
    fs::write(&odd, b"odd").unwrap();
    fixture.file("plain.txt", b"plain");

    let report =
        create_baseline(&fixture.root(), &fixture.output("b.csv"), &ScanConfig::default())
            .unwrap();
    assert_eq!(report.lossy_paths, vec![odd]);

    let records = read_snapshot(report.sealed_path()).unwrap();
    let checked = recheck(&records, 4096);

    assert_eq!(checked.unchanged(), 1);
    assert_eq!(checked.drifted(), 0);
    assert!(checked
        .entries
        .iter()
        .any(|e| e.status == RecheckStatus::Unrepresentable));
    assert!(checked.is_clean());
}
