//! Drive the `fsbaseline` binary the way a user would

use crate::integration::test_utils::{list_dir, Fixture};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn fsbaseline(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fsbaseline"))
        .args(args)
        // Keep the user's global config out of the run
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("FSBASELINE_LOG")
        .env_remove("FSBASELINE__SCAN__CHUNK_SIZE")
        .env_remove("FSBASELINE__SCAN__FOLLOW_SYMLINKS")
        .output()
        .unwrap()
}

fn scan(fixture: &Fixture, output: &Path) -> PathBuf {
    let root = fixture.root();
    let result = fsbaseline(
        fixture.dir.path(),
        &[
            "--quiet",
            "scan",
            root.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ],
    );
    assert!(
        result.status.success(),
        "{}",
        String::from_utf8_lossy(&result.stderr)
    );
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Scan completed. CSV file created and renamed to:"));

    let dir = output.parent().unwrap();
    let names = list_dir(dir);
    assert_eq!(names.len(), 1, "{:?}", names);
    dir.join(&names[0])
}

#[test]
fn test_scan_writes_sealed_csv() {
    let fixture = Fixture::new();
    fixture.file("notes.txt", b"hello");
    let output = fixture.output("baseline.csv");

    let sealed = scan(&fixture, &output);

    let name = sealed.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("baseline_") && name.ends_with(".csv"));
    let text = fs::read_to_string(&sealed).unwrap();
    assert!(text.starts_with("File Path,Filename,SHA256 Hash\r\n"));
    assert!(text.contains(
        ",notes.txt,2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824\r\n"
    ));
}

#[test]
fn test_verify_exit_codes() {
    let fixture = Fixture::new();
    fixture.file("notes.txt", b"hello");
    let sealed = scan(&fixture, &fixture.output("baseline.csv"));
    let sealed_arg = sealed.to_str().unwrap();

    let clean = fsbaseline(
        fixture.dir.path(),
        &["--quiet", "verify", sealed_arg, "--recheck"],
    );
    assert_eq!(clean.status.code(), Some(0));

    fs::write(fixture.root().join("notes.txt"), b"tampered").unwrap();
    let drifted = fsbaseline(
        fixture.dir.path(),
        &["--quiet", "verify", sealed_arg, "--recheck"],
    );
    assert_eq!(drifted.status.code(), Some(2));

    // Seal alone still holds: the snapshot file itself is untouched
    let seal_only = fsbaseline(fixture.dir.path(), &["--quiet", "verify", sealed_arg]);
    assert_eq!(seal_only.status.code(), Some(0));
}

#[test]
fn test_missing_root_fails() {
    let fixture = Fixture::new();
    let missing = fixture.dir.path().join("nope");
    let output = fixture.output("baseline.csv");

    let result = fsbaseline(
        fixture.dir.path(),
        &[
            "--quiet",
            "scan",
            missing.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ],
    );

    assert_eq!(result.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&result.stderr).contains("error:"));
    assert!(!output.exists());
}

#[test]
fn test_verify_json_output() {
    let fixture = Fixture::new();
    fixture.file("a.txt", b"a");
    let sealed = scan(&fixture, &fixture.output("baseline.csv"));

    let result = fsbaseline(
        fixture.dir.path(),
        &[
            "--quiet",
            "verify",
            sealed.to_str().unwrap(),
            "--recheck",
            "--format",
            "json",
        ],
    );
    assert!(result.status.success());
    let value: serde_json::Value = serde_json::from_slice(&result.stdout).unwrap();
    assert_eq!(value["seal_intact"], true);
    assert_eq!(value["recheck"]["unchanged"], 1);
    assert_eq!(value["recheck"]["drifted"], 0);
}
