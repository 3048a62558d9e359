//! Configuration types for parsing, filtering and sentiment annotation.
//!
//! Chat exports differ by locale and platform: the date order, the bracket
//! around the timestamp and the time notation all change. Every pattern the
//! parser relies on therefore lives here instead of being scattered through
//! the code.
//!
//! - [`TranscriptConfig`] - line patterns, date/time formats, assembly policy
//! - [`NoiseFilterConfig`] - system-message patterns removed before analysis
//! - [`SentimentConfig`] - settings for a remote sentiment model
//! - [`PipelineConfig`] - parse + filter settings bundled together
//!
//! # Example
//!
//! ```rust
//! use chatmood::config::TranscriptConfig;
//! use chatmood::parser::TranscriptParser;
//!
//! let config = TranscriptConfig::new()
//!     .with_flush_trailing(false)
//!     .with_skip_invalid(true);
//!
//! let parser = TranscriptParser::with_config(config)?;
//! # Ok::<(), chatmood::ChatmoodError>(())
//! ```

use serde::{Deserialize, Serialize};

/// Default pattern recognizing a line that opens a new message.
pub const DEFAULT_TIMESTAMP_PATTERN: &str = r"([0-9]+)/([0-9]+)/([0-9]+), ([0-9]+):([0-9]+)";

/// Default system-message patterns removed by the noise filter.
pub const DEFAULT_NOISE_PATTERNS: &[&str] = &[
    "joined using this",
    "added",
    "message was deleted",
    "changed the group description",
    "attached",
    r"\d+ left",
];

/// Default sentiment model, a three-class RoBERTa classifier.
pub const DEFAULT_SENTIMENT_MODEL: &str = "j-hartmann/sentiment-roberta-large-english-3-classes";

/// Configuration for transcript parsing and record assembly.
///
/// # Example
///
/// ```rust
/// use chatmood::config::TranscriptConfig;
///
/// // US exports put the month first.
/// let config = TranscriptConfig::new()
///     .with_date_formats(vec!["%m/%d/%y".into(), "%m/%d/%Y".into()]);
/// assert_eq!(config.skip_header_lines, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptConfig {
    /// Regex that marks a line as opening a new message (unanchored).
    pub timestamp_pattern: String,

    /// Separates the timestamp prefix from the rest of the line (default: `-`).
    pub message_separator: char,

    /// Separates the date from the time inside the prefix (default: `", "`).
    pub datetime_separator: String,

    /// Separates the author from the message body (default: `:`).
    pub author_separator: char,

    /// Characters stripped from the date string (default: `[`).
    pub bracket_chars: Vec<char>,

    /// chrono formats tried in order when normalizing dates.
    pub date_formats: Vec<String>,

    /// chrono formats tried in order when normalizing times.
    pub time_formats: Vec<String>,

    /// Number of leading lines discarded as header (default: 1).
    pub skip_header_lines: usize,

    /// Emit the last buffered message at end of input (default: true).
    ///
    /// When `false` the final message is dropped, matching exports processed
    /// by older tooling that only committed a message once the next one began.
    pub flush_trailing: bool,

    /// Treat malformed timestamp lines as continuation text instead of
    /// failing the whole parse (default: false).
    pub skip_invalid: bool,
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        Self {
            timestamp_pattern: DEFAULT_TIMESTAMP_PATTERN.to_string(),
            message_separator: '-',
            datetime_separator: ", ".to_string(),
            author_separator: ':',
            bracket_chars: vec!['['],
            // %y first: chrono's %Y happily reads "23" as year 23.
            date_formats: vec!["%d/%m/%y".to_string(), "%d/%m/%Y".to_string()],
            time_formats: vec![
                "%H:%M".to_string(),
                "%H:%M:%S".to_string(),
                "%I:%M %p".to_string(),
                "%I:%M:%S %p".to_string(),
            ],
            skip_header_lines: 1,
            flush_trailing: true,
            skip_invalid: false,
        }
    }
}

impl TranscriptConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration that drops the final buffered message at end of input.
    pub fn legacy() -> Self {
        Self {
            flush_trailing: false,
            ..Self::default()
        }
    }

    /// Sets the timestamp line pattern.
    #[must_use]
    pub fn with_timestamp_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.timestamp_pattern = pattern.into();
        self
    }

    /// Sets the date/time separator inside the timestamp prefix.
    #[must_use]
    pub fn with_datetime_separator(mut self, separator: impl Into<String>) -> Self {
        self.datetime_separator = separator.into();
        self
    }

    /// Sets the characters stripped from the date string.
    #[must_use]
    pub fn with_bracket_chars(mut self, chars: Vec<char>) -> Self {
        self.bracket_chars = chars;
        self
    }

    /// Sets the date formats tried during normalization.
    #[must_use]
    pub fn with_date_formats(mut self, formats: Vec<String>) -> Self {
        self.date_formats = formats;
        self
    }

    /// Sets the time formats tried during normalization.
    #[must_use]
    pub fn with_time_formats(mut self, formats: Vec<String>) -> Self {
        self.time_formats = formats;
        self
    }

    /// Sets how many header lines are discarded.
    #[must_use]
    pub fn with_skip_header_lines(mut self, lines: usize) -> Self {
        self.skip_header_lines = lines;
        self
    }

    /// Sets whether the final buffered message is emitted.
    #[must_use]
    pub fn with_flush_trailing(mut self, flush: bool) -> Self {
        self.flush_trailing = flush;
        self
    }

    /// Sets whether malformed timestamp lines are tolerated.
    #[must_use]
    pub fn with_skip_invalid(mut self, skip: bool) -> Self {
        self.skip_invalid = skip;
        self
    }
}

/// Configuration for the noise filter.
///
/// Patterns are regular expressions matched anywhere in the message body,
/// case-sensitively. Plain words are valid patterns; use
/// [`with_literal`](Self::with_literal) for text containing metacharacters.
///
/// # Example
///
/// ```rust
/// use chatmood::config::NoiseFilterConfig;
///
/// let config = NoiseFilterConfig::new()
///     .with_literal("<Media omitted>");
/// assert_eq!(config.patterns.len(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseFilterConfig {
    /// Patterns whose presence marks a record as noise.
    pub patterns: Vec<String>,
}

impl Default for NoiseFilterConfig {
    fn default() -> Self {
        Self {
            patterns: DEFAULT_NOISE_PATTERNS
                .iter()
                .map(|p| (*p).to_string())
                .collect(),
        }
    }
}

impl NoiseFilterConfig {
    /// Creates a configuration with the default patterns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration with no patterns.
    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Adds a regex pattern.
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.patterns.push(pattern.into());
        self
    }

    /// Adds a literal substring, escaping any regex metacharacters.
    #[must_use]
    pub fn with_literal(mut self, text: &str) -> Self {
        self.patterns.push(regex::escape(text));
        self
    }
}

/// Configuration for a remote sentiment model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentimentConfig {
    /// Model identifier on the inference host.
    pub model: String,

    /// Base URL of the inference host; the model id is appended.
    pub endpoint: String,

    /// Bearer token, if the host requires one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,

    /// Number of labels requested per message (1 = top label only).
    pub top_k: usize,

    /// Messages are cut to this many characters before submission.
    pub max_input_chars: usize,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_SENTIMENT_MODEL.to_string(),
            endpoint: "https://api-inference.huggingface.co/models".to_string(),
            api_token: None,
            top_k: 1,
            max_input_chars: 512,
            timeout_secs: 60,
        }
    }
}

impl SentimentConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the model identifier.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the inference host base URL.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Sets the bearer token.
    #[must_use]
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Requests the full label distribution instead of the top label.
    #[must_use]
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k.max(1);
        self
    }

    /// Sets the per-message truncation length.
    #[must_use]
    pub fn with_max_input_chars(mut self, max: usize) -> Self {
        self.max_input_chars = max;
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Full URL for the configured model.
    pub fn model_url(&self) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), self.model)
    }
}

/// Parse and filter settings for the whole pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Transcript parsing settings.
    pub transcript: TranscriptConfig,

    /// Noise filter settings; `None` disables filtering.
    pub noise: Option<NoiseFilterConfig>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            transcript: TranscriptConfig::default(),
            noise: Some(NoiseFilterConfig::default()),
        }
    }
}

impl PipelineConfig {
    /// Parses with defaults and filters with the default noise patterns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the transcript configuration.
    #[must_use]
    pub fn with_transcript(mut self, transcript: TranscriptConfig) -> Self {
        self.transcript = transcript;
        self
    }

    /// Sets the noise filter configuration.
    #[must_use]
    pub fn with_noise_filter(mut self, noise: NoiseFilterConfig) -> Self {
        self.noise = Some(noise);
        self
    }

    /// Disables the noise filter.
    #[must_use]
    pub fn without_noise_filter(mut self) -> Self {
        self.noise = None;
        self
    }
}
