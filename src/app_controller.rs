use anyhow::{Result, anyhow};
use log::{error, warn, info, debug};
use std::path::{Path, PathBuf};
use crate::app_config::Config;
use crate::block_merger::BlockMerger;
use crate::file_utils::FileManager;
use crate::subtitle_processor::SubtitleCollection;

// @module: Application controller for subtitle reblocking

/// Main application controller for subtitle reblocking
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    /// Reblock SRT content in memory: parse, merge, serialize.
    ///
    /// Pure with respect to the filesystem; errors discard all work.
    pub fn reblock_content(&self, content: &str, source_file: PathBuf) -> Result<SubtitleCollection> {
        let entries = SubtitleCollection::parse_srt_string(content)?;
        debug!("Parsed {} subtitle entries from {:?}", entries.len(), source_file);

        let merger = BlockMerger::new(self.config.target_duration_ms())?;
        let blocks = merger.merge(&entries);

        Ok(SubtitleCollection::from_merged_blocks(source_file, blocks))
    }

    /// Reblock a single subtitle file into the given output directory
    pub fn run(&self, input_file: PathBuf, output_dir: PathBuf, force_overwrite: bool) -> Result<()> {
        if !FileManager::file_exists(&input_file) {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        let output_file = FileManager::generate_output_path(&input_file, &output_dir);
        if FileManager::file_exists(&output_file) && !force_overwrite {
            warn!("Output file already exists: {:?}. Use -f to force overwrite.", output_file);
            return Ok(());
        }

        info!("Reblocking: {:?}", input_file);

        let content = FileManager::read_to_string(&input_file)?;
        let merged = self.reblock_content(&content, input_file.clone())?;

        // Nothing is written until the whole pipeline has succeeded
        merged.write_to_srt(&output_file)?;

        info!(
            "Wrote {} blocks (target {} min): {:?}",
            merged.entries.len(),
            self.config.block_length_minutes,
            output_file
        );

        Ok(())
    }

    /// Reblock every subtitle file found under a directory
    pub fn run_folder(&self, input_dir: PathBuf, force_overwrite: bool) -> Result<()> {
        if !FileManager::dir_exists(&input_dir) {
            return Err(anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        info!("Processing directory: {:?}", input_dir);

        let mut processed_count = 0;
        for file in FileManager::find_files(&input_dir, "srt")? {
            // Skip our own previous outputs
            if FileManager::is_reblocker_output(&file) {
                debug!("Skipping reblocker output: {:?}", file);
                continue;
            }

            let output_dir = file.parent().unwrap_or(Path::new(".")).to_path_buf();
            if let Err(e) = self.run(file.clone(), output_dir, force_overwrite) {
                error!("Error processing {:?}: {}", file, e);
            } else {
                processed_count += 1;
            }
        }

        info!("Finished processing {} files", processed_count);

        Ok(())
    }
}
