//! Compliance handbook and the keyword search behind `/chat`.
//!
//! DESIGN
//! ======
//! The handbook is a YAML document (embedded at build time, optionally
//! overridden by `HANDBOOK_PATH`) holding handbook sections and a list of
//! curated question/answer pairs.
//!
//! Search runs in three tiers and returns only the top hit:
//! 1. Curated pairs, ranked by how many of their question keywords appear in
//!    the query.
//! 2. Sections ranked by how many query keywords their title and body
//!    mention. The answer is stitched from the first three matching
//!    sentences of the best section.
//! 3. A fixed fallback that lists the topics the handbook covers.

#[cfg(test)]
#[path = "handbook_test.rs"]
mod handbook_test;

use std::path::Path;

use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

const EMBEDDED_HANDBOOK: &str = include_str!("../../data/handbook.yaml");

const MAX_ANSWER_SENTENCES: usize = 3;
const MIN_KEYWORD_CHARS: usize = 3;

pub const FALLBACK_SOURCE: &str = "Compliance Handbook";
pub const FALLBACK_ANSWER: &str = "I couldn't find specific information about that topic in the compliance handbook. \
Please try rephrasing your question or ask about SOC 2, GDPR, HIPAA, ISO 27001, encryption, access control, \
audit logging, disaster recovery, vendor management, or incident response.";

/// Words too common in questions to say anything about the topic.
const STOP_WORDS: &[&str] = &[
    "about", "and", "any", "are", "can", "does", "for", "from", "have", "how", "the", "their", "there", "this",
    "that", "tell", "use", "what", "when", "where", "which", "who", "why", "with", "you", "your", "vaultlogic",
];

#[derive(Debug, thiserror::Error)]
pub enum HandbookError {
    #[error("failed to read handbook {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse handbook: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("handbook has no sections")]
    Empty,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    pub title: String,
    pub page: u32,
    #[serde(default)]
    pub subsections: Vec<String>,
    pub content: String,
}

impl Section {
    /// Citation label, e.g. `"GDPR Data Protection Compliance - Page 2"`.
    #[must_use]
    pub fn citation(&self) -> String {
        format!("{} - Page {}", self.title, self.page)
    }
}

/// Curated question with its canned answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaPair {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<String>,
}

/// A search hit returned to the chat endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer {
    pub answer: String,
    pub sources: Vec<String>,
}

impl From<&QaPair> for Answer {
    fn from(qa: &QaPair) -> Self {
        Self { answer: qa.answer.clone(), sources: qa.sources.clone() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Handbook {
    sections: Vec<Section>,
    #[serde(default)]
    predefined: Vec<QaPair>,
}

impl Handbook {
    /// Load the handbook from `path`, or the embedded copy when `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid YAML, or
    /// contains no sections.
    pub fn load(path: Option<&Path>) -> Result<Self, HandbookError> {
        match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .map_err(|source| HandbookError::Io { path: path.display().to_string(), source })?;
                Self::from_yaml(&raw)
            }
            None => Self::embedded(),
        }
    }

    /// Parse the handbook compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded YAML is invalid.
    pub fn embedded() -> Result<Self, HandbookError> {
        Self::from_yaml(EMBEDDED_HANDBOOK)
    }

    /// Parse a handbook from YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error if `raw` is not a valid handbook document.
    pub fn from_yaml(raw: &str) -> Result<Self, HandbookError> {
        let handbook: Self = serde_yaml::from_str(raw)?;
        if handbook.sections.is_empty() {
            return Err(HandbookError::Empty);
        }
        Ok(handbook)
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    pub fn predefined(&self) -> &[QaPair] {
        &self.predefined
    }

    #[must_use]
    pub fn random_predefined(&self) -> Option<&QaPair> {
        self.predefined.choose(&mut rand::rng())
    }

    /// Answer `query` from the handbook. `None` only for blank queries.
    #[must_use]
    pub fn search(&self, query: &str) -> Option<Answer> {
        let query_lower = query.trim().to_lowercase();
        if query_lower.is_empty() {
            return None;
        }

        if let Some(qa) = self.best_predefined(&query_lower) {
            return Some(Answer::from(qa));
        }

        let words = keywords(&query_lower);
        let mut ranked: Vec<(usize, &Section)> = self
            .sections
            .iter()
            .map(|section| (section_score(section, &words), section))
            .filter(|(score, _)| *score > 0)
            .collect();
        // Stable sort keeps handbook order between equally scored sections.
        ranked.sort_by(|a, b| b.0.cmp(&a.0));
        if let Some(answer) = ranked.into_iter().find_map(|(_, section)| section_answer(section, &words)) {
            return Some(answer);
        }

        Some(Answer { answer: FALLBACK_ANSWER.to_owned(), sources: vec![FALLBACK_SOURCE.to_owned()] })
    }

    fn best_predefined(&self, query_lower: &str) -> Option<&QaPair> {
        let mut best: Option<(usize, &QaPair)> = None;
        for qa in &self.predefined {
            let hits = keywords(&qa.question)
                .iter()
                .filter(|kw| query_lower.contains(kw.as_str()))
                .count();
            if hits > 0 && best.map_or(true, |(top, _)| hits > top) {
                best = Some((hits, qa));
            }
        }
        best.map(|(_, qa)| qa)
    }
}

/// Distinct query keywords mentioned by the section; title mentions count double.
fn section_score(section: &Section, words: &[String]) -> usize {
    let title = section.title.to_lowercase();
    let content = section.content.to_lowercase();
    words
        .iter()
        .map(|w| 2 * usize::from(title.contains(w.as_str())) + usize::from(content.contains(w.as_str())))
        .sum()
}

fn section_answer(section: &Section, words: &[String]) -> Option<Answer> {
    let mentions = |text: &str| {
        let lower = text.to_lowercase();
        words.iter().any(|w| lower.contains(w.as_str()))
    };

    let relevant: Vec<&str> = section
        .content
        .split('.')
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty() && mentions(sentence))
        .take(MAX_ANSWER_SENTENCES)
        .collect();
    if relevant.is_empty() {
        return None;
    }

    Some(Answer { answer: format!("{}.", relevant.join(". ")), sources: vec![section.citation()] })
}

/// Lowercased topic words of `text`, punctuation stripped, stop words dropped.
pub(crate) fn keywords(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| {
            let word = word.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase();
            word.strip_suffix("'s").map(str::to_owned).unwrap_or(word)
        })
        .filter(|word| word.chars().count() >= MIN_KEYWORD_CHARS && !STOP_WORDS.contains(&word.as_str()))
        .collect()
}
