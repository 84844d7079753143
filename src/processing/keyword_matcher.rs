//! Case-insensitive keyword containment over a resume document

use crate::processing::document::ResumeDocument;
use aho_corasick::AhoCorasick;
use log::warn;
use serde::{Deserialize, Serialize};

/// Which parts of a resume the industry keyword test searches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordScope {
    /// Skills plus the whole document serialized as JSON, field names included.
    #[default]
    Document,
    /// Skills, summary, experience descriptions and achievements only.
    Fields,
}

impl std::fmt::Display for KeywordScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeywordScope::Document => write!(f, "document"),
            KeywordScope::Fields => write!(f, "fields"),
        }
    }
}

impl std::str::FromStr for KeywordScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "document" | "doc" => Ok(KeywordScope::Document),
            "fields" => Ok(KeywordScope::Fields),
            _ => Err(format!("Invalid keyword scope: {}. Supported: document, fields", s)),
        }
    }
}

/// Multi-keyword matcher reporting, per keyword, whether it occurs anywhere
/// in a set of texts.
pub struct KeywordMatcher<'k> {
    keywords: &'k [&'k str],
    automaton: Option<AhoCorasick>,
}

impl<'k> KeywordMatcher<'k> {
    pub fn new(keywords: &'k [&'k str]) -> Self {
        let automaton = match AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(keywords)
        {
            Ok(automaton) => Some(automaton),
            Err(e) => {
                warn!("Falling back to plain substring search: {}", e);
                None
            }
        };

        Self { keywords, automaton }
    }

    /// One flag per keyword, in keyword order: `true` if it occurs in any text.
    pub fn find_matches<S: AsRef<str>>(&self, texts: &[S]) -> Vec<bool> {
        let mut found = vec![false; self.keywords.len()];
        if self.keywords.is_empty() {
            return found;
        }

        match &self.automaton {
            Some(automaton) => {
                for text in texts {
                    for mat in automaton.find_overlapping_iter(text.as_ref()) {
                        found[mat.pattern().as_usize()] = true;
                    }
                }
            }
            None => {
                let lowered: Vec<String> = texts.iter().map(|t| t.as_ref().to_lowercase()).collect();
                for (flag, keyword) in found.iter_mut().zip(self.keywords) {
                    let keyword = keyword.to_lowercase();
                    *flag = lowered.iter().any(|text| text.contains(&keyword));
                }
            }
        }

        found
    }

    pub fn keywords(&self) -> &[&'k str] {
        self.keywords
    }
}

/// The texts searched for industry keywords under the given scope.
pub fn searchable_texts(resume: &ResumeDocument, scope: KeywordScope) -> Vec<String> {
    let mut texts: Vec<String> = resume.skills.clone();

    match scope {
        KeywordScope::Document => match serde_json::to_string(resume) {
            Ok(json) => texts.push(json),
            Err(e) => warn!("Could not serialize resume for keyword search: {}", e),
        },
        KeywordScope::Fields => {
            texts.push(resume.summary.clone());
            for entry in &resume.experience {
                texts.push(entry.description.clone());
                texts.extend(entry.achievements.iter().cloned());
            }
        }
    }

    texts
}
