use once_cell::sync::Lazy;
use regex::Regex;
use log::debug;
use crate::errors::ConfigError;
use crate::subtitle_processor::SubtitleEntry;

// @module: Greedy merging of subtitle entries into transcript blocks

// @const: Trailing ellipsis run (3+ dots, optional trailing whitespace)
static TRAILING_ELLIPSIS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\.{3,}\s*$").unwrap()
});

/// One merged transcript block spanning one or more consecutive entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedBlock {
    /// Start time of the first constituent entry, in ms
    pub start_time_ms: u64,

    /// End time of the last constituent entry, in ms
    pub end_time_ms: u64,

    /// Single-line merged text
    pub text: String,
}

impl MergedBlock {
    /// Span covered by the block, in ms
    pub fn duration_ms(&self) -> u64 {
        self.end_time_ms.saturating_sub(self.start_time_ms)
    }
}

/// Merges consecutive subtitle entries until a target duration is reached.
///
/// Grouping is greedy and forward-only: entries are appended to the open
/// group until the group's span reaches the target, the entry that crossed
/// the threshold is kept in the group, and the next entry opens a new one.
/// The final group closes at end-of-input whatever its span.
#[derive(Debug)]
pub struct BlockMerger {
    // @field: Minimum span per block in ms, except possibly the last
    target_duration_ms: u64,
}

impl BlockMerger {
    /// Create a merger with a target duration in milliseconds
    pub fn new(target_duration_ms: u64) -> Result<Self, ConfigError> {
        if target_duration_ms == 0 {
            return Err(ConfigError::ZeroBlockDuration);
        }

        Ok(BlockMerger { target_duration_ms })
    }

    /// Create a merger from a block length in minutes
    pub fn from_minutes(block_length_minutes: u64) -> Result<Self, ConfigError> {
        Self::new(block_length_minutes * 60_000)
    }

    /// Target duration in milliseconds
    pub fn target_duration_ms(&self) -> u64 {
        self.target_duration_ms
    }

    /// Merge entries into blocks of at least the target duration.
    ///
    /// Empty input produces empty output. A single entry that alone exceeds
    /// the target still forms its own one-entry block, never split.
    pub fn merge(&self, entries: &[SubtitleEntry]) -> Vec<MergedBlock> {
        let mut blocks = Vec::new();
        let mut group: Vec<&SubtitleEntry> = Vec::new();
        let mut group_start_ms = 0;

        for entry in entries {
            if group.is_empty() {
                group_start_ms = entry.start_time_ms;
            }
            group.push(entry);

            // Close once the span reaches the target, keeping the entry
            // that crossed it
            if entry.end_time_ms.saturating_sub(group_start_ms) >= self.target_duration_ms {
                blocks.push(Self::close_group(&group));
                group.clear();
            }
        }

        // The last group always closes, even under target
        if !group.is_empty() {
            blocks.push(Self::close_group(&group));
        }

        debug!(
            "Merged {} entries into {} blocks (target {} ms)",
            entries.len(),
            blocks.len(),
            self.target_duration_ms
        );

        blocks
    }

    // @builds: One block from a non-empty group of consecutive entries
    fn close_group(group: &[&SubtitleEntry]) -> MergedBlock {
        let start_time_ms = group[0].start_time_ms;
        let end_time_ms = group[group.len() - 1].end_time_ms;

        let joined = group
            .iter()
            .map(|entry| Self::flatten_lines(&entry.text))
            .collect::<Vec<_>>()
            .join(" ");

        MergedBlock {
            start_time_ms,
            end_time_ms,
            text: Self::strip_trailing_ellipsis(&joined),
        }
    }

    // @collapses: Multi-line entry text into a single space-joined line
    fn flatten_lines(text: &str) -> String {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Strip a trailing ellipsis run from the merged text.
    ///
    /// Only a run of three or more dots at the very end of the concatenated
    /// text (optionally followed by whitespace) is removed; ellipses inside
    /// the text are left alone.
    fn strip_trailing_ellipsis(text: &str) -> String {
        TRAILING_ELLIPSIS.replace(text, "").trim_end().to_string()
    }
}
