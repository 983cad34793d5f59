use std::{collections::HashSet, path::PathBuf};

use assert_matches::assert_matches;
use scratch_tree::{
    directory::{
        allocate_unique_directory,
        allocate_unique_directory_with_callback,
        DirectoryAllocationOptions,
        DirectoryPattern,
        DEFAULT_DIRECTORY_NAME_PREFIX,
        UNIQUE_TOKEN_LENGTH,
    },
    error::AllocateDirectoryError,
};
use scratch_tree_test_harness::prelude::*;


const MISSING_PATTERN_MESSAGE: &str = "invalid `options.pattern` value: please add pattern value";



#[test]
fn allocate_with_default_options_creates_empty_directory_in_system_temp_dir() -> TestResult {
    initialize_test_logging();

    let directory_path = allocate_unique_directory(&DirectoryAllocationOptions::default())?;

    directory_path.assert_is_directory_and_empty();
    assert!(directory_path.is_absolute());
    assert!(directory_path.starts_with(std::env::temp_dir()));

    let directory_name = directory_path.file_name().unwrap().to_string_lossy();
    let token = directory_name
        .strip_prefix(DEFAULT_DIRECTORY_NAME_PREFIX)
        .expect("directory name does not start with the default prefix");

    assert_eq!(token.len(), UNIQUE_TOKEN_LENGTH);
    assert!(token.chars().all(|character| character.is_ascii_alphanumeric()));

    std::fs::remove_dir(&directory_path)?;
    Ok(())
}


#[test]
fn allocate_with_callback_creates_empty_directory_in_system_temp_dir() {
    let mut allocated_path: Option<PathBuf> = None;

    allocate_unique_directory_with_callback(&DirectoryAllocationOptions::default(), |result| {
        allocated_path = Some(result.unwrap());
    });

    let directory_path = allocated_path.expect("callback was not called");

    directory_path.assert_is_directory_and_empty();
    assert!(directory_path.starts_with(std::env::temp_dir()));

    std::fs::remove_dir(&directory_path).unwrap();
}


#[test]
fn allocate_in_custom_base_directory_creates_a_direct_child() -> TestResult {
    let base = TemporaryBaseDirectory::new();

    let directory_path = allocate_unique_directory(&DirectoryAllocationOptions {
        base_directory: Some(base.as_path().to_path_buf()),
        ..Default::default()
    })?;

    directory_path.assert_is_directory_and_empty();
    directory_path.assert_is_child_of(base.as_path());

    base.destroy();
    Ok(())
}


#[test]
fn allocate_with_trailing_pattern_appends_token() -> TestResult {
    let base = TemporaryBaseDirectory::new();
    let pattern = DirectoryPattern::new("test-").unwrap();

    let directory_path = allocate_unique_directory(&DirectoryAllocationOptions {
        base_directory: Some(base.as_path().to_path_buf()),
        pattern: Some(pattern.clone()),
        ..Default::default()
    })?;

    directory_path.assert_is_directory_and_empty();
    directory_path.assert_file_name_matches(&directory_name_regex(&pattern));

    base.destroy();
    Ok(())
}


#[test]
fn allocate_with_wildcard_pattern_replaces_wildcard() -> TestResult {
    let base = TemporaryBaseDirectory::new();
    let pattern = DirectoryPattern::new("test-*-folder").unwrap();

    let directory_path = allocate_unique_directory(&DirectoryAllocationOptions {
        base_directory: Some(base.as_path().to_path_buf()),
        pattern: Some(pattern.clone()),
        ..Default::default()
    })?;

    directory_path.assert_is_directory_and_empty();
    directory_path.assert_is_child_of(base.as_path());
    directory_path.assert_file_name_matches(&directory_name_regex(&pattern));

    let directory_name = directory_path.file_name().unwrap().to_string_lossy();
    assert!(directory_name.ends_with("-folder"));

    base.destroy();
    Ok(())
}


#[test]
fn repeated_pattern_allocations_never_collide() -> TestResult {
    let base = TemporaryBaseDirectory::new();

    let options = DirectoryAllocationOptions {
        base_directory: Some(base.as_path().to_path_buf()),
        pattern: Some(DirectoryPattern::new("tempjs-*").unwrap()),
        ..Default::default()
    };

    let mut allocated_paths = HashSet::new();
    for _ in 0..200 {
        let directory_path = allocate_unique_directory(&options)?;
        assert!(
            allocated_paths.insert(directory_path.clone()),
            "allocated the same directory twice: {}",
            directory_path.display()
        );
    }

    assert_eq!(count_tree_entries(base.as_path())?.directories, 1 + 200);

    base.destroy();
    Ok(())
}


#[test]
fn requiring_pattern_without_one_fails_without_creating_anything() -> TestResult {
    let base = TemporaryBaseDirectory::new();

    let result = allocate_unique_directory(&DirectoryAllocationOptions {
        base_directory: Some(base.as_path().to_path_buf()),
        require_pattern: true,
        ..Default::default()
    });

    let error = result.unwrap_err();
    assert_matches!(error, AllocateDirectoryError::MissingPattern);
    assert_eq!(error.to_string(), MISSING_PATTERN_MESSAGE);

    base.as_path().assert_is_directory_and_empty();

    base.destroy();
    Ok(())
}


#[test]
fn requiring_pattern_without_one_fails_in_callback_style_too() {
    let base = TemporaryBaseDirectory::new();
    let mut callback_error: Option<AllocateDirectoryError> = None;

    allocate_unique_directory_with_callback(
        &DirectoryAllocationOptions {
            base_directory: Some(base.as_path().to_path_buf()),
            require_pattern: true,
            ..Default::default()
        },
        |result| {
            callback_error = result.err();
        },
    );

    let error = callback_error.expect("callback did not receive an error");
    assert_matches!(error, AllocateDirectoryError::MissingPattern);
    assert_eq!(error.to_string(), MISSING_PATTERN_MESSAGE);

    base.as_path().assert_is_directory_and_empty();
    base.destroy();
}


#[test]
fn requiring_pattern_with_one_allocates_normally() -> TestResult {
    let base = TemporaryBaseDirectory::new();
    let pattern = DirectoryPattern::new("test-").unwrap();

    let directory_path = allocate_unique_directory(&DirectoryAllocationOptions {
        base_directory: Some(base.as_path().to_path_buf()),
        pattern: Some(pattern.clone()),
        require_pattern: true,
    })?;

    directory_path.assert_is_directory_and_empty();
    directory_path.assert_file_name_matches(&directory_name_regex(&pattern));

    base.destroy();
    Ok(())
}


#[test]
fn base_directory_that_is_a_file_is_rejected() -> TestResult {
    let base = TemporaryBaseDirectory::new();
    let file_path = base.child_path("not-a-directory.txt");
    std::fs::write(&file_path, b"hello")?;

    let error = allocate_unique_directory(&DirectoryAllocationOptions {
        base_directory: Some(file_path.clone()),
        ..Default::default()
    })
    .unwrap_err();

    assert_matches!(
        error,
        AllocateDirectoryError::BaseDirectoryNotADirectory { path } if path == file_path
    );

    base.destroy();
    Ok(())
}


#[test]
fn missing_base_directory_is_rejected() {
    let base = TemporaryBaseDirectory::new();
    let missing_path = base.child_path("does-not-exist");

    let error = allocate_unique_directory(&DirectoryAllocationOptions {
        base_directory: Some(missing_path.clone()),
        ..Default::default()
    })
    .unwrap_err();

    assert_matches!(
        error,
        AllocateDirectoryError::BaseDirectoryNotFound { path } if path == missing_path
    );

    missing_path.assert_not_exists();
    base.destroy();
}


#[cfg(unix)]
#[test]
fn unwritable_base_directory_reports_unable_to_create_directory() -> TestResult {
    use std::os::unix::fs::PermissionsExt;

    let base = TemporaryBaseDirectory::new();
    let read_only_base_path = base.child_path("read-only");
    std::fs::create_dir(&read_only_base_path)?;
    std::fs::set_permissions(&read_only_base_path, std::fs::Permissions::from_mode(0o555))?;

    // Privileged users ignore directory permissions, in which case there is nothing to observe.
    if std::fs::create_dir(read_only_base_path.join("writable")).is_ok() {
        std::fs::set_permissions(&read_only_base_path, std::fs::Permissions::from_mode(0o755))?;
        base.destroy();
        return Ok(());
    }

    let error = allocate_unique_directory(&DirectoryAllocationOptions {
        base_directory: Some(read_only_base_path.clone()),
        pattern: Some(DirectoryPattern::new("test-").unwrap()),
        ..Default::default()
    })
    .unwrap_err();

    assert!(!error.is_configuration_error());
    assert_matches!(
        &error,
        AllocateDirectoryError::UnableToCreateDirectory { path, .. } if path == &read_only_base_path
    );

    std::fs::set_permissions(&read_only_base_path, std::fs::Permissions::from_mode(0o755))?;
    read_only_base_path.assert_is_directory_and_empty();

    base.destroy();
    Ok(())
}
