//! Remote classifier on a hosted inference endpoint.

use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use serde::Serialize;

use super::{ClassifierOutput, SentimentClassifier};
use crate::config::SentimentConfig;
use crate::error::{ChatmoodError, Result};

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a [&'a str],
    parameters: InferenceParameters,
    options: InferenceOptions,
}

#[derive(Serialize)]
struct InferenceParameters {
    top_k: usize,
    truncation: bool,
}

#[derive(Serialize)]
struct InferenceOptions {
    wait_for_model: bool,
}

/// Text-classification model served over HTTP.
///
/// The HTTP client is built once in [`new`](Self::new) and reused for every
/// batch; dropping the classifier releases it.
///
/// # Example
///
/// ```rust,no_run
/// use chatmood::config::SentimentConfig;
/// use chatmood::sentiment::{HuggingFaceClassifier, annotate_sentiment};
/// use chatmood::parser::TranscriptParser;
///
/// let classifier = HuggingFaceClassifier::new(
///     SentimentConfig::new().with_api_token("hf_..."),
/// )?;
/// let mut transcript = TranscriptParser::new().parse("chat.txt".as_ref())?;
/// annotate_sentiment(&mut transcript, &classifier)?;
/// # Ok::<(), chatmood::ChatmoodError>(())
/// ```
pub struct HuggingFaceClassifier {
    client: Client,
    config: SentimentConfig,
    url: String,
}

impl HuggingFaceClassifier {
    /// Builds the classifier and its HTTP client.
    pub fn new(config: SentimentConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("chatmood/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let url = config.model_url();

        Ok(Self {
            client,
            config,
            url,
        })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SentimentConfig {
        &self.config
    }
}

impl SentimentClassifier for HuggingFaceClassifier {
    fn name(&self) -> &str {
        &self.config.model
    }

    fn max_input_chars(&self) -> usize {
        self.config.max_input_chars
    }

    fn classify(&self, texts: &[&str]) -> Result<ClassifierOutput> {
        let request = InferenceRequest {
            inputs: texts,
            parameters: InferenceParameters {
                top_k: self.config.top_k,
                truncation: true,
            },
            options: InferenceOptions {
                wait_for_model: true,
            },
        };

        debug!("POST {} ({} inputs)", self.url, texts.len());
        let mut builder = self.client.post(&self.url).json(&request);
        if let Some(token) = &self.config.api_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send()?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            return Err(ChatmoodError::classifier(
                &self.config.model,
                format!("API error {}: {}", status, body),
            ));
        }

        let body = response.text()?;
        let output: ClassifierOutput = serde_json::from_str(&body).map_err(|e| {
            ChatmoodError::classifier(
                &self.config.model,
                format!("Failed to parse response: {}", e),
            )
        })?;
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{MessageRecord, Transcript};
    use crate::sentiment::{LabelScore, SentimentLabel, annotate_sentiment};
    use mockito::{Matcher, Server, ServerGuard};
    use serde_json::json;

    const MODEL: &str = "test/sentiment";
    const MODEL_PATH: &str = "/models/test/sentiment";

    fn config_for(server: &ServerGuard) -> SentimentConfig {
        SentimentConfig::new()
            .with_endpoint(format!("{}/models", server.url()))
            .with_model(MODEL)
            .with_timeout_secs(5)
    }

    #[test]
    fn test_request_shape() {
        let inputs = ["hello", "bye"];
        let request = InferenceRequest {
            inputs: &inputs,
            parameters: InferenceParameters {
                top_k: 3,
                truncation: true,
            },
            options: InferenceOptions {
                wait_for_model: true,
            },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["inputs"][1], "bye");
        assert_eq!(json["parameters"]["top_k"], 3);
        assert_eq!(json["options"]["wait_for_model"], true);
    }

    #[test]
    fn test_client_builds_and_names_model() {
        let classifier = HuggingFaceClassifier::new(SentimentConfig::new()).unwrap();
        assert_eq!(classifier.name(), crate::config::DEFAULT_SENTIMENT_MODEL);
        assert_eq!(classifier.max_input_chars(), 512);
        assert!(classifier.url.ends_with(crate::config::DEFAULT_SENTIMENT_MODEL));
    }

    #[test]
    fn test_classify_posts_batch_and_decodes_top_one() {
        let mut server = Server::new();
        let mock = server
            .mock("POST", MODEL_PATH)
            .match_header("content-type", "application/json")
            .match_header("authorization", Matcher::Missing)
            .match_body(Matcher::Json(json!({
                "inputs": ["great day", "awful"],
                "parameters": {"top_k": 1, "truncation": true},
                "options": {"wait_for_model": true}
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"label":"positive","score":0.9},{"label":"NEGATIVE","score":0.8}]"#)
            .create();

        let classifier = HuggingFaceClassifier::new(config_for(&server)).unwrap();
        let output = classifier.classify(&["great day", "awful"]).unwrap();

        mock.assert();
        assert_eq!(
            output,
            ClassifierOutput::TopOne(vec![
                LabelScore::new(SentimentLabel::Positive, 0.9),
                LabelScore::new(SentimentLabel::Negative, 0.8),
            ])
        );
    }

    #[test]
    fn test_classify_decodes_nested_distribution() {
        let mut server = Server::new();
        let mock = server
            .mock("POST", MODEL_PATH)
            .match_body(Matcher::PartialJson(json!({"parameters": {"top_k": 3}})))
            .with_status(200)
            .with_body(
                r#"[[{"label":"neutral","score":0.2},{"label":"positive","score":0.7},{"label":"negative","score":0.1}]]"#,
            )
            .create();

        let classifier =
            HuggingFaceClassifier::new(config_for(&server).with_top_k(3)).unwrap();
        let results = classifier
            .classify(&["see you soon"])
            .unwrap()
            .into_results()
            .unwrap();

        mock.assert();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].label, SentimentLabel::Positive);
        assert_eq!(results[0].scores.len(), 3);
        assert_eq!(results[0].score_for(SentimentLabel::Neutral), Some(0.2));
    }

    #[test]
    fn test_classify_sends_bearer_token() {
        let mut server = Server::new();
        let mock = server
            .mock("POST", MODEL_PATH)
            .match_header("authorization", "Bearer hf_secret")
            .with_status(200)
            .with_body(r#"[{"label":"neutral","score":0.5}]"#)
            .create();

        let classifier =
            HuggingFaceClassifier::new(config_for(&server).with_api_token("hf_secret")).unwrap();
        classifier.classify(&["ok"]).unwrap();

        mock.assert();
    }

    #[test]
    fn test_error_status_becomes_classifier_error_with_body() {
        let mut server = Server::new();
        let mock = server
            .mock("POST", MODEL_PATH)
            .with_status(503)
            .with_body(r#"{"error":"Model test/sentiment is currently loading"}"#)
            .create();

        let classifier = HuggingFaceClassifier::new(config_for(&server)).unwrap();
        let err = classifier.classify(&["hello"]).unwrap_err();

        mock.assert();
        assert!(matches!(err, ChatmoodError::Classifier { ref classifier, .. } if classifier == MODEL));
        let message = err.to_string();
        assert!(message.contains("503"));
        assert!(message.contains("currently loading"));
    }

    #[test]
    fn test_malformed_body_becomes_classifier_error() {
        let mut server = Server::new();
        let mock = server
            .mock("POST", MODEL_PATH)
            .with_status(200)
            .with_body(r#"{"unexpected":"shape"}"#)
            .create();

        let classifier = HuggingFaceClassifier::new(config_for(&server)).unwrap();
        let err = classifier.classify(&["hello"]).unwrap_err();

        mock.assert();
        assert!(matches!(err, ChatmoodError::Classifier { .. }));
        assert!(err.to_string().contains("Failed to parse response"));
    }

    #[test]
    fn test_failed_request_leaves_transcript_untouched() {
        let mut server = Server::new();
        let mock = server
            .mock("POST", MODEL_PATH)
            .with_status(500)
            .with_body("internal error")
            .create();

        let classifier = HuggingFaceClassifier::new(config_for(&server)).unwrap();
        let mut transcript = Transcript::new(vec![
            MessageRecord::new("first").with_author("Alice"),
            MessageRecord::new("second").with_author("Bob"),
        ]);
        let before = transcript.clone();

        let err = annotate_sentiment(&mut transcript, &classifier).unwrap_err();

        mock.assert();
        assert!(err.is_classifier());
        assert_eq!(transcript, before);
    }

    #[test]
    fn test_annotates_transcript_from_server_response() {
        let mut server = Server::new();
        let mock = server
            .mock("POST", MODEL_PATH)
            .match_body(Matcher::PartialJson(json!({"inputs": ["first", "second"]})))
            .with_status(200)
            .with_body(r#"[[{"label":"positive","score":0.6}],[{"label":"negative","score":0.7}]]"#)
            .create();

        let classifier = HuggingFaceClassifier::new(config_for(&server)).unwrap();
        let mut transcript = Transcript::new(vec![
            MessageRecord::new("first"),
            MessageRecord::new("second"),
        ]);

        annotate_sentiment(&mut transcript, &classifier).unwrap();

        mock.assert();
        assert_eq!(
            transcript[0].sentiment.as_ref().map(|s| s.label),
            Some(SentimentLabel::Positive)
        );
        assert_eq!(
            transcript[1].sentiment.as_ref().map(|s| s.score),
            Some(0.7)
        );
    }
}
