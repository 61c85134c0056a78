//! Rule help text for agents
//!
//! Loaded once per session from a JSON object of `{topic: {title, content}}`
//! and passed around explicitly. Nothing here is global.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{InsightError, Result};

/// Topic used when the caller names none
pub const DEFAULT_TOPIC: &str = "basic";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpEntry {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleHelp {
    topics: BTreeMap<String, HelpEntry>,
}

impl RuleHelp {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let help = Self::from_json_str(&contents)?;
        tracing::debug!("Loaded {} help topics from {:?}", help.topics.len(), path);
        Ok(help)
    }

    /// Topic names in sorted order
    pub fn topics(&self) -> Vec<String> {
        self.topics.keys().cloned().collect()
    }

    /// Help text for `topic` (case-insensitive), `basic` when absent
    pub fn lookup(&self, topic: Option<&str>) -> Result<String> {
        let topic = topic.unwrap_or(DEFAULT_TOPIC).to_lowercase();
        match self.topics.get(&topic) {
            Some(entry) => Ok(format!("{}\n\n{}", entry.title, entry.content)),
            None => Err(InsightError::UnknownHelpTopic {
                topic,
                available: self.topics(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELP: &str = r#"{
        "basic": {"title": "Basic Rules", "content": "Form rules from text."},
        "stop": {"title": "STOP", "content": "Stop objects block movement."},
        "push": {"title": "PUSH", "content": "Push objects move when walked into."}
    }"#;

    #[test]
    fn test_lookup_defaults_to_basic() {
        let help = RuleHelp::from_json_str(HELP).unwrap();
        assert_eq!(
            help.lookup(None).unwrap(),
            "Basic Rules\n\nForm rules from text."
        );
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let help = RuleHelp::from_json_str(HELP).unwrap();
        assert!(help.lookup(Some("STOP")).unwrap().starts_with("STOP\n\n"));
    }

    #[test]
    fn test_unknown_topic_lists_sorted_topics() {
        let help = RuleHelp::from_json_str(HELP).unwrap();
        let err = help.lookup(Some("sink")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown help topic 'sink'. Available topics are: basic, push, stop"
        );
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            RuleHelp::from_json_str("[1, 2]"),
            Err(InsightError::SerdeError(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = RuleHelp::load(Path::new("does/not/exist.json"));
        assert!(matches!(result, Err(InsightError::IoError(_))));
    }
}
