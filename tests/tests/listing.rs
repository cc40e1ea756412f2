use tokio::io::AsyncReadExt;

use lanscout_common::error::DiscoveryError;
use lanscout_integration_tests::file_only_service;

/// Share root from the contract example: `notes.txt` (12 bytes) plus
/// `docs/` containing `a.pdf`.
fn example_share() -> tempfile::TempDir {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("notes.txt"), b"hello shares").unwrap();
    std::fs::create_dir(tmp.path().join("docs")).unwrap();
    std::fs::write(tmp.path().join("docs").join("a.pdf"), b"%PDF-1.4").unwrap();
    tmp
}

#[tokio::test]
async fn top_level_listing_matches_the_contract_example() {
    let share = example_share();
    let service = file_only_service();
    let root = share.path().to_string_lossy().into_owned();

    let files = service.list_files(&root, "").await.unwrap();

    assert_eq!(files.len(), 2);

    let docs = &files[0];
    assert_eq!(docs.name, "docs");
    assert!(docs.is_directory);
    assert_eq!(docs.path, "docs");
    // lazy listing: one level per call, no eager expansion
    assert_eq!(docs.children, None);

    let notes = &files[1];
    assert_eq!(notes.name, "notes.txt");
    assert!(!notes.is_directory);
    assert_eq!(notes.size, 12);
    assert_eq!(notes.path, "notes.txt");
}

#[tokio::test]
async fn deeper_levels_are_fetched_with_a_longer_relative_path() {
    let share = example_share();
    let service = file_only_service();
    let root = share.path().to_string_lossy().into_owned();

    let files = service.list_files(&root, "docs").await.unwrap();

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].name, "a.pdf");
    assert_eq!(files[0].path, "docs/a.pdf");
    assert!(!files[0].path.contains('\\'));
}

#[tokio::test]
async fn listing_is_idempotent_over_an_unchanged_tree() {
    let share = example_share();
    let service = file_only_service();
    let root = share.path().to_string_lossy().into_owned();

    let first = service.list_files(&root, "").await.unwrap();
    let second = service.list_files(&root, "").await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn missing_relative_path_is_not_found() {
    let share = example_share();
    let service = file_only_service();
    let root = share.path().to_string_lossy().into_owned();

    let err = service.list_files(&root, "no/such/dir").await.unwrap_err();
    assert!(matches!(err, DiscoveryError::PathNotFound(_)));
    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn fetching_a_directory_is_an_invalid_operation() {
    let share = example_share();
    let service = file_only_service();
    let root = share.path().to_string_lossy().into_owned();

    let err = service.fetch_file(&root, "docs").await.unwrap_err();
    assert!(matches!(err, DiscoveryError::NotAFile(_)));
    assert_eq!(err.status_code(), 400);
}

#[tokio::test]
async fn fetching_a_missing_file_is_not_found() {
    let share = example_share();
    let service = file_only_service();
    let root = share.path().to_string_lossy().into_owned();

    let err = service.fetch_file(&root, "gone.txt").await.unwrap_err();
    assert!(matches!(err, DiscoveryError::PathNotFound(_)));
}

#[tokio::test]
async fn upload_then_fetch_round_trips_the_bytes() {
    let share = tempfile::tempdir().unwrap();
    let service = file_only_service();
    let root = share.path().to_string_lossy().into_owned();
    let payload: Vec<u8> = (0u8..=255).cycle().take(4096).collect();

    service
        .upload(&root, "incoming/today", "blob.bin", &payload)
        .await
        .unwrap();

    let mut file = service
        .fetch_file(&root, "incoming/today/blob.bin")
        .await
        .unwrap();
    let mut fetched = Vec::new();
    file.read_to_end(&mut fetched).await.unwrap();

    assert_eq!(fetched, payload);
}

#[tokio::test]
async fn reupload_wins_over_the_previous_contents() {
    let share = tempfile::tempdir().unwrap();
    let service = file_only_service();
    let root = share.path().to_string_lossy().into_owned();

    service.upload(&root, "", "note.txt", b"first").await.unwrap();
    service.upload(&root, "", "note.txt", b"second").await.unwrap();

    let mut file = service.fetch_file(&root, "note.txt").await.unwrap();
    let mut fetched = Vec::new();
    file.read_to_end(&mut fetched).await.unwrap();
    assert_eq!(fetched, b"second");
}
