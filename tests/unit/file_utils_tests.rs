/*!
 * Tests for file and folder utilities
 */

use std::path::PathBuf;
use anyhow::Result;
use reblocker::file_utils::FileManager;
use crate::common;

/// Test output path construction from input stem and directory
#[test]
fn test_generate_output_path_withSrtInput_shouldAppendSuffix() {
    let output = FileManager::generate_output_path(
        PathBuf::from("/media/subs/episode.srt"),
        PathBuf::from("/media/subs"),
    );

    assert_eq!(output, PathBuf::from("/media/subs/episode_reblocker.srt"));
}

/// Test output path can target a different directory
#[test]
fn test_generate_output_path_withSeparateOutputDir_shouldUseIt() {
    let output = FileManager::generate_output_path(
        PathBuf::from("/media/subs/episode.srt"),
        PathBuf::from("/tmp/transcripts"),
    );

    assert_eq!(output, PathBuf::from("/tmp/transcripts/episode_reblocker.srt"));
}

/// Test detection of files this tool already produced
#[test]
fn test_is_reblocker_output_withVariousNames_shouldDetectOutputs() {
    assert!(FileManager::is_reblocker_output("episode_reblocker.srt"));
    assert!(!FileManager::is_reblocker_output("episode.srt"));
    assert!(!FileManager::is_reblocker_output("reblocker_notes.srt"));
}

/// Test finding subtitle files recursively
#[test]
fn test_find_files_withNestedSrtFiles_shouldFindAll() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    common::create_test_subtitle(&dir, "a.srt")?;
    common::create_test_file(&dir, "notes.txt", "not a subtitle")?;
    let nested = dir.join("season1");
    FileManager::ensure_dir(&nested)?;
    common::create_test_subtitle(&nested, "b.srt")?;

    let mut found = FileManager::find_files(&dir, "srt")?;
    found.sort();

    assert_eq!(found.len(), 2);
    assert!(found.iter().any(|p| p.ends_with("a.srt")));
    assert!(found.iter().any(|p| p.ends_with("season1/b.srt")));

    Ok(())
}

/// Test write creates parent directories and read round-trips
#[test]
fn test_write_to_file_withMissingParent_shouldCreateIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("deep/nested/out.srt");

    FileManager::write_to_file(&path, "content")?;

    assert!(FileManager::file_exists(&path));
    assert_eq!(FileManager::read_to_string(&path)?, "content");

    Ok(())
}
