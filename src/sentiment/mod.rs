//! Sentiment annotation through an external text classifier.
//!
//! The model itself is not part of this crate. Anything that maps a batch
//! of texts to sentiment labels can implement [`SentimentClassifier`]; the
//! crate ships `HuggingFaceClassifier` behind the `hf-inference` feature.
//!
//! Classifiers answer in one of two shapes depending on how they are asked:
//! one top label per message, or a list of scored labels per message. Both
//! are captured by [`ClassifierOutput`] and normalized once, in
//! [`ClassifierOutput::into_results`], before anything touches the
//! transcript.
//!
//! # Example
//!
//! ```rust
//! use chatmood::sentiment::{
//!     ClassifierOutput, LabelScore, SentimentClassifier, SentimentLabel, annotate_sentiment,
//! };
//! use chatmood::{MessageRecord, Result, Transcript};
//!
//! struct AlwaysNeutral;
//!
//! impl SentimentClassifier for AlwaysNeutral {
//!     fn name(&self) -> &str {
//!         "always-neutral"
//!     }
//!
//!     fn classify(&self, texts: &[&str]) -> Result<ClassifierOutput> {
//!         Ok(ClassifierOutput::TopOne(
//!             texts.iter().map(|_| LabelScore::new(SentimentLabel::Neutral, 1.0)).collect(),
//!         ))
//!     }
//! }
//!
//! let mut transcript = Transcript::new(vec![MessageRecord::new("ok")]);
//! annotate_sentiment(&mut transcript, &AlwaysNeutral)?;
//! assert_eq!(transcript[0].sentiment.as_ref().unwrap().label, SentimentLabel::Neutral);
//! # Ok::<(), chatmood::ChatmoodError>(())
//! ```

#[cfg(feature = "hf-inference")]
mod huggingface;

#[cfg(feature = "hf-inference")]
pub use huggingface::HuggingFaceClassifier;

use std::fmt;
use std::str::FromStr;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{ChatmoodError, Result};
use crate::message::Transcript;

/// The fixed sentiment classes.
///
/// Deserialization is case-insensitive, so `"POSITIVE"` and `"positive"`
/// both parse; serialization is always lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// All labels, in a stable order.
    pub fn all() -> &'static [SentimentLabel] {
        &[
            SentimentLabel::Positive,
            SentimentLabel::Neutral,
            SentimentLabel::Negative,
        ]
    }

    /// Lowercase name as used by most models.
    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SentimentLabel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positive" | "pos" => Ok(SentimentLabel::Positive),
            "neutral" | "neu" => Ok(SentimentLabel::Neutral),
            "negative" | "neg" => Ok(SentimentLabel::Negative),
            _ => Err(format!(
                "Unknown sentiment label: '{}'. Expected one of: positive, neutral, negative",
                s
            )),
        }
    }
}

impl TryFrom<String> for SentimentLabel {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

/// A label with its score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelScore {
    /// Sentiment class.
    pub label: SentimentLabel,
    /// Model probability for that class.
    pub score: f64,
}

impl LabelScore {
    /// Creates a label score.
    pub fn new(label: SentimentLabel, score: f64) -> Self {
        Self { label, score }
    }
}

/// Sentiment attached to one message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Top-scoring label.
    pub label: SentimentLabel,
    /// Score of the top label.
    pub score: f64,
    /// Full distribution when the classifier returned one, highest first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scores: Vec<LabelScore>,
}

impl SentimentResult {
    /// Builds a result from a single top label.
    pub fn top(label_score: LabelScore) -> Self {
        Self {
            label: label_score.label,
            score: label_score.score,
            scores: Vec::new(),
        }
    }

    /// Builds a result from a distribution. `None` if it is empty.
    pub fn from_distribution(mut scores: Vec<LabelScore>) -> Option<Self> {
        scores.sort_by(|a, b| b.score.total_cmp(&a.score));
        let best = *scores.first()?;
        if scores.len() == 1 {
            return Some(Self::top(best));
        }
        Some(Self {
            label: best.label,
            score: best.score,
            scores,
        })
    }

    /// Score for a specific label, if known.
    pub fn score_for(&self, label: SentimentLabel) -> Option<f64> {
        if self.scores.is_empty() {
            return (self.label == label).then_some(self.score);
        }
        self.scores
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.score)
    }
}

/// Raw classifier output in either observed shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClassifierOutput {
    /// One top label per message.
    TopOne(Vec<LabelScore>),
    /// A list of scored labels per message (top-1 batches come back as
    /// single-element lists).
    Distribution(Vec<Vec<LabelScore>>),
}

impl ClassifierOutput {
    /// Number of per-message entries.
    pub fn len(&self) -> usize {
        match self {
            ClassifierOutput::TopOne(v) => v.len(),
            ClassifierOutput::Distribution(v) => v.len(),
        }
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Normalizes either shape into one result per message.
    ///
    /// # Errors
    ///
    /// An empty per-message list is a classifier error.
    pub fn into_results(self) -> Result<Vec<SentimentResult>> {
        match self {
            ClassifierOutput::TopOne(v) => Ok(v.into_iter().map(SentimentResult::top).collect()),
            ClassifierOutput::Distribution(v) => v
                .into_iter()
                .enumerate()
                .map(|(i, scores)| {
                    SentimentResult::from_distribution(scores).ok_or_else(|| {
                        ChatmoodError::classifier(
                            "output",
                            format!("no labels returned for message {}", i),
                        )
                    })
                })
                .collect(),
        }
    }
}

/// A text classifier mapping messages to sentiment.
///
/// Implementations are loaded once and reused for the whole batch; anything
/// expensive (model weights, HTTP clients) belongs in the constructor.
pub trait SentimentClassifier {
    /// Short name used in errors and logs.
    fn name(&self) -> &str;

    /// Longest input, in characters, the model accepts.
    fn max_input_chars(&self) -> usize {
        512
    }

    /// Classifies a batch of texts, one entry per text, in order.
    fn classify(&self, texts: &[&str]) -> Result<ClassifierOutput>;
}

/// Cuts `text` to at most `max` characters, on a char boundary.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Classifies every message and attaches the results positionally.
///
/// Messages are truncated to the classifier's limit and sent as a single
/// batch. On any failure (classifier error, malformed output, or a result
/// count that differs from the record count) the transcript is left
/// unchanged.
pub fn annotate_sentiment(
    transcript: &mut Transcript,
    classifier: &dyn SentimentClassifier,
) -> Result<()> {
    if transcript.is_empty() {
        return Ok(());
    }

    let max = classifier.max_input_chars();
    let texts: Vec<&str> = transcript
        .iter()
        .map(|r| truncate_chars(&r.message, max))
        .collect();

    debug!(
        "Classifying {} messages with '{}'",
        texts.len(),
        classifier.name()
    );
    let results = classifier.classify(&texts)?.into_results()?;

    if results.len() != texts.len() {
        return Err(ChatmoodError::ClassifierMismatch {
            expected: texts.len(),
            actual: results.len(),
        });
    }

    for (record, result) in transcript.records_mut().iter_mut().zip(results) {
        record.sentiment = Some(result);
    }
    info!(
        "Attached sentiment to {} messages using '{}'",
        transcript.len(),
        classifier.name()
    );

    Ok(())
}
