//! Rule values and the deduplicated rule set

use std::fmt;

use ahash::AHashSet;
use serde::{Deserialize, Serialize, Serializer};

/// An active `SUBJECT IS PROPERTY` rule
///
/// Rules are plain values: two rules with equal fields are the same rule no
/// matter which scan produced them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rule {
    pub subject: String,
    pub property: String,
}

impl Rule {
    pub fn new(subject: impl Into<String>, property: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            property: property.into(),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is {}", self.subject, self.property)
    }
}

/// Set of active rules, deduplicated structurally, in first-seen order
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
    seen: AHashSet<Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a rule. Returns false if an equal rule was already present.
    pub fn insert(&mut self, rule: Rule) -> bool {
        if self.seen.contains(&rule) {
            return false;
        }
        self.seen.insert(rule.clone());
        self.rules.push(rule);
        true
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn contains(&self, subject: &str, property: &str) -> bool {
        self.rules
            .iter()
            .any(|r| r.subject == subject && r.property == property)
    }

    /// Subjects holding `property`, in insertion order
    pub fn subjects_with<'a>(&'a self, property: &'a str) -> impl Iterator<Item = &'a str> {
        self.rules
            .iter()
            .filter(move |r| r.property == property)
            .map(|r| r.subject.as_str())
    }

    /// Subject of the first rule holding `property`
    pub fn first_subject_with(&self, property: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|r| r.property == property)
            .map(|r| r.subject.as_str())
    }
}

impl PartialEq for RuleSet {
    fn eq(&self, other: &Self) -> bool {
        self.rules == other.rules
    }
}

impl Eq for RuleSet {}

impl Extend<Rule> for RuleSet {
    fn extend<I: IntoIterator<Item = Rule>>(&mut self, iter: I) {
        for rule in iter {
            self.insert(rule);
        }
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl Serialize for RuleSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.rules)
    }
}
