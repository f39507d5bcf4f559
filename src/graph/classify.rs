// src/graph/classify.rs
//! Decides whether a link title denotes a person worth keeping.

use std::collections::HashSet;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Classification strategy selected by configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ClassifyMode {
    /// Title-case, contains a space, no `(` or `,`.
    Heuristic,
    /// Exact, case-sensitive presence in the reference dataset.
    #[default]
    Membership,
}

/// A classifier bound to its inputs.
#[derive(Debug, Clone, Copy)]
pub enum Classifier<'a> {
    Heuristic,
    Membership(&'a HashSet<String>),
}

impl<'a> Classifier<'a> {
    /// Binds `mode` to the known-people set. Membership without a set
    /// accepts nothing.
    #[must_use]
    pub fn new(mode: ClassifyMode, known_people: Option<&'a HashSet<String>>) -> Self {
        match (mode, known_people) {
            (ClassifyMode::Heuristic, _) => Self::Heuristic,
            (ClassifyMode::Membership, Some(known)) => Self::Membership(known),
            (ClassifyMode::Membership, None) => Self::Membership(empty()),
        }
    }

    #[must_use]
    pub fn is_candidate(&self, title: &str) -> bool {
        match self {
            Self::Heuristic => looks_like_person(title),
            Self::Membership(known) => known.contains(title),
        }
    }
}

/// Free-function form of [`Classifier::is_candidate`].
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn is_candidate(
    title: &str,
    known_people: Option<&HashSet<String>>,
    mode: ClassifyMode,
) -> bool {
    Classifier::new(mode, known_people).is_candidate(title)
}

/// Cheap person-name heuristic. Over-accepts title-cased concepts and
/// rejects mononyms and comma-inverted names.
#[must_use]
pub fn looks_like_person(title: &str) -> bool {
    title.contains(' ') && !title.contains('(') && !title.contains(',') && is_title_case(title)
}

/// Every cased run starts with an uppercase letter followed only by
/// lowercase letters, and at least one cased letter exists.
fn is_title_case(s: &str) -> bool {
    let mut any_cased = false;
    let mut prev_cased = false;
    for c in s.chars() {
        if c.is_uppercase() {
            if prev_cased {
                return false;
            }
            prev_cased = true;
            any_cased = true;
        } else if c.is_lowercase() {
            if !prev_cased {
                return false;
            }
            prev_cased = true;
            any_cased = true;
        } else {
            prev_cased = false;
        }
    }
    any_cased
}

fn empty() -> &'static HashSet<String> {
    static EMPTY: std::sync::OnceLock<HashSet<String>> = std::sync::OnceLock::new();
    EMPTY.get_or_init(HashSet::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heuristic_accepts_names() {
        assert!(looks_like_person("Jorge Luis Borges"));
        assert!(looks_like_person("Gabriela Mistral"));
        assert!(looks_like_person("José Martí"));
    }

    #[test]
    fn test_heuristic_rejects() {
        assert!(!looks_like_person("Borges, Jorge"));
        assert!(!looks_like_person("surrealism (art)"));
        assert!(!looks_like_person("Paris"));
        assert!(!looks_like_person("Nobel Prize in Literature"));
        assert!(!looks_like_person("ALL CAPS"));
        assert!(!looks_like_person("1968 "));
    }

    #[test]
    fn test_heuristic_over_accepts_concepts() {
        assert!(looks_like_person("Magical Realism"));
    }

    #[test]
    fn test_membership_is_exact() {
        let known: HashSet<String> = ["Pablo Neruda".to_string()].into_iter().collect();
        let c = Classifier::new(ClassifyMode::Membership, Some(&known));
        assert!(c.is_candidate("Pablo Neruda"));
        assert!(!c.is_candidate("pablo neruda"));
        assert!(!c.is_candidate("Pablo Neruda "));
    }

    #[test]
    fn test_membership_without_dataset() {
        assert!(!is_candidate("Pablo Neruda", None, ClassifyMode::Membership));
        assert!(is_candidate("Pablo Neruda", None, ClassifyMode::Heuristic));
    }
}
