//! Rule inference from word-tile adjacency
//!
//! Each row, and then each column, is turned into a scan line of tokens, one
//! per cell. A token is the cell's word-tile names joined by the stacking
//! separator; cells without word tiles give an empty token, so ordinary
//! objects never take part in a rule. A token containing the link substring
//! with non-empty neighbors on both sides forms `left IS right`, taking the
//! topmost stacked name of each neighbor.

use crate::board::{Board, Cell};
use crate::core::config::AnalyzerConfig;
use crate::rules::rule::{Rule, RuleSet};

pub struct RuleExtractor<'a> {
    config: &'a AnalyzerConfig,
}

impl<'a> RuleExtractor<'a> {
    pub fn new(config: &'a AnalyzerConfig) -> Self {
        Self { config }
    }

    /// All active rules on the board. Row results come before column results.
    pub fn extract(&self, board: &Board) -> RuleSet {
        let mut rules = RuleSet::new();

        for row in board.rows() {
            let tokens = self.scan_tokens(row.iter());
            rules.extend(self.scan_line(&tokens));
        }
        for column in board.columns() {
            let tokens = self.scan_tokens(column.into_iter());
            rules.extend(self.scan_line(&tokens));
        }

        tracing::debug!("Extracted {} active rules", rules.len());
        rules
    }

    fn scan_tokens<'c>(&self, cells: impl Iterator<Item = &'c Cell>) -> Vec<String> {
        let separator = self.config.format.stack_separator.to_string();
        cells
            .map(|cell| {
                cell.word_tiles()
                    .map(|t| t.name.as_str())
                    .collect::<Vec<_>>()
                    .join(&separator)
            })
            .collect()
    }

    /// Rules formed along one scan line
    pub fn scan_line(&self, tokens: &[String]) -> Vec<Rule> {
        let link = self.config.link_token.as_str();
        let mut rules = Vec::new();

        for window in tokens.windows(3) {
            let [left, middle, right] = window else {
                continue;
            };
            if !middle.contains(link) || left.is_empty() || right.is_empty() {
                continue;
            }
            let rule = Rule::new(self.tail(left), self.tail(right));
            tracing::trace!("Found rule '{}'", rule);
            rules.push(rule);
        }

        rules
    }

    /// Last stacked name in a token. Word-tile names are already unmarked.
    fn tail<'t>(&self, token: &'t str) -> &'t str {
        token
            .rsplit(self.config.format.stack_separator)
            .next()
            .unwrap_or(token)
    }
}
