//! Digest Engine Verification Tests
//!
//! Checks that streamed file digests are plain SHA-256 of the file bytes.

use fsbaseline::tree::hasher;
use sha2::{Digest, Sha256};
use std::fs;
use tempfile::TempDir;

/// Test that a streamed digest matches sha2 directly
#[test]
fn test_file_digest_matches_sha2() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("blob.bin");
    let content: Vec<u8> = (0..300_000u32).map(|i| (i * 7 % 256) as u8).collect();
    fs::write(&path, &content).unwrap();

    let ours = hasher::digest_file(&path).unwrap();
    let direct = Sha256::digest(&content);

    assert_eq!(ours.as_bytes().as_slice(), direct.as_slice());
    assert_eq!(ours.to_hex(), hex::encode(direct));
}

/// Test the reference value from the end-to-end scenario
#[test]
fn test_hello_digest() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("notes.txt");
    fs::write(&path, "hello").unwrap();

    assert_eq!(
        hasher::digest_file(&path).unwrap().to_hex(),
        "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
    );
}

/// Test that 1-byte and 1 MiB reads agree on a file larger than one default chunk
#[test]
fn test_streaming_equivalence_across_chunk_sizes() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("large.bin");
    let content = vec![0x5au8; hasher::DEFAULT_CHUNK_SIZE * 3 + 17];
    fs::write(&path, &content).unwrap();

    let tiny = hasher::digest_file_with_chunk_size(&path, 1).unwrap();
    let big = hasher::digest_file_with_chunk_size(&path, 1024 * 1024).unwrap();

    assert_eq!(tiny, big);
    assert_eq!(tiny, hasher::compute_content_hash(&content));
}
