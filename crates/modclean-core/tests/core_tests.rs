use modclean_core::{
    DeleteError, DeletionOutcome, DirectoryEntry, ScanError, SelectionError, SelectionSet,
    SweepConfig, format_size,
};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[test]
fn test_directory_entry_properties() {
    let entry = DirectoryEntry::new("/projects/app/node_modules", 1500);

    assert_eq!(entry.path(), Path::new("/projects/app/node_modules"));
    assert_eq!(entry.size(), 1500);
    assert_eq!(entry.label(), "/projects/app/node_modules (1.5 KB)");

    let same = DirectoryEntry::new(PathBuf::from("/projects/app/node_modules"), 1500);
    assert_eq!(entry, same);
}

#[test]
fn test_format_size_reference_values() {
    assert_eq!(format_size(0), "0 B");
    assert_eq!(format_size(1023), "1023 B");
    assert_eq!(format_size(1024), "1.0 KB");
    assert_eq!(format_size(1536), "1.5 KB");
    assert_eq!(format_size(1024 * 1024), "1.0 MB");
}

#[test]
fn test_format_size_never_drops_a_tier() {
    let tiers = ["B", "KB", "MB", "GB", "TB", "PB", "EB"];
    let tier_of = |s: &str| {
        let unit = s.rsplit(' ').next().unwrap();
        tiers.iter().position(|t| *t == unit).unwrap()
    };

    let mut previous = 0;
    let mut bytes: u64 = 1;
    while let Some(next) = bytes.checked_mul(3) {
        let tier = tier_of(&format_size(bytes));
        assert!(tier >= previous, "{bytes} formatted to a smaller unit");
        previous = tier;
        bytes = next;
    }
}

#[test]
fn test_selection_total_matches_confirmation_sum() {
    let entries = vec![
        DirectoryEntry::new("/a/node_modules", 500),
        DirectoryEntry::new("/b/node_modules", 1500),
        DirectoryEntry::new("/c/node_modules", 7),
    ];

    let selection = SelectionSet::new([1, 0], entries.len()).unwrap();
    let selected = selection.selected(&entries);
    let summed: u64 = selected.iter().map(DirectoryEntry::size).sum();

    assert_eq!(selection.total_size(&entries), summed);
    assert_eq!(format_size(summed), "2.0 KB");
}

#[test]
fn test_selection_rejects_invalid_index() {
    assert!(matches!(
        SelectionSet::new([5], 2),
        Err(SelectionError::OutOfRange { index: 5, len: 2 })
    ));
}

#[test]
fn test_deletion_outcome_classification() {
    let entry = DirectoryEntry::new("/a/node_modules", 10);

    let ok = DeletionOutcome::success(entry.clone(), Duration::from_millis(3));
    assert!(ok.is_success());
    assert!(ok.error.is_none());

    let failed = DeletionOutcome::failure(
        entry,
        DeleteError::Io {
            path: PathBuf::from("/a/node_modules"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        },
        Duration::from_millis(1),
    );
    assert!(!failed.is_success());
    assert!(failed
        .error
        .as_ref()
        .unwrap()
        .to_string()
        .contains("/a/node_modules"));
}

#[test]
fn test_scan_error_classification() {
    let not_found = ScanError::io(
        "/missing",
        std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    );
    assert!(matches!(not_found, ScanError::NotFound { .. }));

    let other = ScanError::io("/x", std::io::Error::new(std::io::ErrorKind::Other, "boom"));
    assert!(matches!(other, ScanError::Io { .. }));
}

#[test]
fn test_sweep_config_builder_defaults() {
    let config = SweepConfig::builder()
        .root("/test/path")
        .size_concurrency(2usize)
        .build()
        .unwrap();

    assert_eq!(config.root.to_str().unwrap(), "/test/path");
    assert_eq!(config.target_name, "node_modules");
    assert_eq!(config.delete_concurrency, 3);
    assert_eq!(config.effective_size_concurrency(), 2);
    assert_eq!(config.page_size, 50);
}
