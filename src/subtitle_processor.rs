use std::fs;
use std::fs::File;
use std::fmt;
use regex::Regex;
use once_cell::sync::Lazy;
use anyhow::{Result, Context, anyhow};
use std::io::Write;
use std::path::{Path, PathBuf};
use log::warn;
use crate::block_merger::MergedBlock;
use crate::errors::ParseError;

// @module: SRT parsing and serialization

// @const: SRT timing line regex
static TIMING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2}):(\d{2}):(\d{2}),(\d{3}) --> (\d{2}):(\d{2}):(\d{2}),(\d{3})$").unwrap()
});

// @struct: Single subtitle entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleEntry {
    // @field: Sequence number
    pub seq_num: usize,

    // @field: Start time in ms
    pub start_time_ms: u64,

    // @field: End time in ms
    pub end_time_ms: u64,

    // @field: Subtitle text, original lines joined with '\n'
    pub text: String,
}

impl SubtitleEntry {
    /// Creates a new subtitle entry
    pub fn new(seq_num: usize, start_time_ms: u64, end_time_ms: u64, text: String) -> Self {
        SubtitleEntry {
            seq_num,
            start_time_ms,
            end_time_ms,
            text,
        }
    }

    /// Parse an SRT timestamp to milliseconds - used by tests and external consumers
    #[allow(dead_code)]
    pub fn parse_timestamp(timestamp: &str) -> Result<u64> {
        // Parse HH:MM:SS,mmm format
        let parts: Vec<&str> = timestamp.split(&[':', ','][..]).collect();

        if parts.len() != 4 {
            return Err(anyhow!("Invalid timestamp format: {}", timestamp));
        }

        let hours: u64 = parts[0].parse().context("Failed to parse hours")?;
        let minutes: u64 = parts[1].parse().context("Failed to parse minutes")?;
        let seconds: u64 = parts[2].parse().context("Failed to parse seconds")?;
        let millis: u64 = parts[3].parse().context("Failed to parse milliseconds")?;

        // Validate time components
        if minutes >= 60 || seconds >= 60 || millis >= 1000 {
            return Err(anyhow!("Invalid time components in timestamp: {}", timestamp));
        }

        Ok(hours * 3_600_000 + minutes * 60_000 + seconds * 1_000 + millis)
    }

    /// Convert start time to formatted SRT timestamp
    pub fn format_start_time(&self) -> String {
        Self::format_timestamp(self.start_time_ms)
    }

    /// Convert end time to formatted SRT timestamp
    pub fn format_end_time(&self) -> String {
        Self::format_timestamp(self.end_time_ms)
    }

    /// Format a timestamp in milliseconds to SRT format (HH:MM:SS,mmm)
    pub fn format_timestamp(ms: u64) -> String {
        let hours = ms / 3_600_000;
        let minutes = (ms % 3_600_000) / 60_000;
        let seconds = (ms % 60_000) / 1_000;
        let millis = ms % 1_000;

        format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
    }
}

impl fmt::Display for SubtitleEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.seq_num)?;
        writeln!(f, "{} --> {}", self.format_start_time(), self.format_end_time())?;
        writeln!(f, "{}", self.text)?;
        writeln!(f)
    }
}

// @enum: Parser scan state, one blank-line-separated block at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    // @state: Waiting for the index line of the next block
    ExpectIndex,
    // @state: Index seen, waiting for the timing line
    ExpectTiming,
    // @state: Timing seen, collecting text lines until a blank line or EOF
    InText,
}

/// Collection of subtitle entries tied to a source file
#[derive(Debug)]
pub struct SubtitleCollection {
    /// Source filename
    pub source_file: PathBuf,

    /// List of subtitle entries
    pub entries: Vec<SubtitleEntry>,
}

impl SubtitleCollection {
    /// Create a new subtitle collection
    pub fn new(source_file: PathBuf) -> Self {
        SubtitleCollection {
            source_file,
            entries: Vec::new(),
        }
    }

    /// Parse an SRT file into a collection
    pub fn parse_srt_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read subtitle file: {}", path.display()))?;
        let entries = Self::parse_srt_string(&content)?;

        Ok(SubtitleCollection {
            source_file: path.to_path_buf(),
            entries,
        })
    }

    /// Parse SRT format string into subtitle entries.
    ///
    /// Runs an explicit line scanner over blank-line-separated blocks:
    /// `ExpectIndex -> ExpectTiming -> InText -> (blank|EOF)`. Trailing
    /// whitespace-only content after the last block is ignored. Entries are
    /// sorted by start time so downstream grouping can rely on the order.
    pub fn parse_srt_string(content: &str) -> Result<Vec<SubtitleEntry>, ParseError> {
        let mut entries = Vec::new();
        let mut state = ScanState::ExpectIndex;
        let mut block_num = 0;

        let mut seq_num = 0;
        let mut start_time_ms = 0;
        let mut end_time_ms = 0;
        let mut text = String::new();

        for line in content.lines() {
            let trimmed = line.trim();

            match state {
                ScanState::ExpectIndex => {
                    // Blank lines between blocks (and before the first one) carry no meaning
                    if trimmed.is_empty() {
                        continue;
                    }

                    block_num += 1;
                    seq_num = trimmed
                        .parse::<usize>()
                        .ok()
                        .filter(|n| *n > 0)
                        .ok_or_else(|| ParseError::InvalidIndex {
                            block: block_num,
                            line: trimmed.to_string(),
                        })?;
                    state = ScanState::ExpectTiming;
                }
                ScanState::ExpectTiming => {
                    if trimmed.is_empty() {
                        return Err(ParseError::MissingTimingLine { block: block_num });
                    }

                    let caps = TIMING_REGEX.captures(trimmed).ok_or_else(|| {
                        ParseError::InvalidTimingLine {
                            block: block_num,
                            line: trimmed.to_string(),
                        }
                    })?;
                    start_time_ms = Self::timestamp_from_captures(&caps, 1);
                    end_time_ms = Self::timestamp_from_captures(&caps, 5);
                    text.clear();
                    state = ScanState::InText;
                }
                ScanState::InText => {
                    if trimmed.is_empty() {
                        Self::close_block(&mut entries, seq_num, start_time_ms, end_time_ms, &text);
                        state = ScanState::ExpectIndex;
                    } else {
                        if !text.is_empty() {
                            text.push('\n');
                        }
                        text.push_str(trimmed);
                    }
                }
            }
        }

        // Finalize whatever state EOF left us in
        match state {
            ScanState::ExpectIndex => {}
            ScanState::ExpectTiming => {
                return Err(ParseError::MissingTimingLine { block: block_num });
            }
            ScanState::InText => {
                Self::close_block(&mut entries, seq_num, start_time_ms, end_time_ms, &text);
            }
        }

        // Sort by start time to ensure correct order
        entries.sort_by_key(|entry| entry.start_time_ms);

        Ok(entries)
    }

    // @adds: Completed block as an entry, skipping text-less blocks
    fn close_block(
        entries: &mut Vec<SubtitleEntry>,
        seq_num: usize,
        start_time_ms: u64,
        end_time_ms: u64,
        text: &str,
    ) {
        if text.is_empty() {
            warn!("Skipping subtitle entry {} with no text lines", seq_num);
            return;
        }
        entries.push(SubtitleEntry::new(
            seq_num,
            start_time_ms,
            end_time_ms,
            text.to_string(),
        ));
    }

    // @converts: Matched timing groups to milliseconds, 4 groups from start_idx
    fn timestamp_from_captures(caps: &regex::Captures, start_idx: usize) -> u64 {
        // Groups are \d{2}/\d{3} so the parses cannot fail
        let component = |idx: usize| -> u64 {
            caps.get(idx).map_or(0, |m| m.as_str().parse().unwrap_or(0))
        };

        let hours = component(start_idx);
        let minutes = component(start_idx + 1);
        let seconds = component(start_idx + 2);
        let millis = component(start_idx + 3);

        (hours * 3600 + minutes * 60 + seconds) * 1000 + millis
    }

    /// Build a collection from merged blocks, renumbering entries 1-based.
    ///
    /// The merged blocks keep their original timing; indices from the source
    /// cues are not inherited.
    pub fn from_merged_blocks(source_file: PathBuf, blocks: Vec<MergedBlock>) -> Self {
        let entries = blocks
            .into_iter()
            .enumerate()
            .map(|(i, block)| {
                SubtitleEntry::new(i + 1, block.start_time_ms, block.end_time_ms, block.text)
            })
            .collect();

        SubtitleCollection {
            source_file,
            entries,
        }
    }

    /// Render the collection to SRT format text
    pub fn to_srt_string(&self) -> String {
        let mut output = String::new();
        for entry in &self.entries {
            // Display on SubtitleEntry emits the trailing blank separator
            output.push_str(&entry.to_string());
        }
        output
    }

    /// Write the collection to an SRT file
    pub fn write_to_srt<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let mut file = File::create(path)
            .with_context(|| format!("Failed to create subtitle file: {}", path.display()))?;

        for entry in &self.entries {
            write!(file, "{}", entry)?;
        }

        Ok(())
    }
}

impl fmt::Display for SubtitleCollection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Subtitle Collection")?;
        writeln!(f, "Source: {:?}", self.source_file)?;
        writeln!(f, "Entries: {}", self.entries.len())?;
        Ok(())
    }
}
