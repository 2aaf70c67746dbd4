//! Denylist scans over the serialized document.
//!
//! The scans match against a full-document serialization rather than walking
//! individual fields. This tolerates arbitrary document shapes at the cost of
//! occasional false positives on unrelated prose; that tradeoff is accepted.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::Findings;

/// Placeholder tokens that must never survive into a finished document.
///
/// Matched case-insensitively as whole tokens, so `TODO` fires but
/// `TODOLIST` does not.
const PLACEHOLDER_TERMS: &[&str] = &["qwe", "asd", "undefined", "미정", "TBD", "TODO"];

/// Technology tokens the product mandates away, with their replacements.
const FORBIDDEN_TECH: &[(&str, &str)] = &[("jquery", "React"), ("bootstrap", "Tailwind CSS")];

static PLACEHOLDER_DENYLIST: LazyLock<DenyList> =
    LazyLock::new(|| DenyList::word_bounded(PLACEHOLDER_TERMS));

static FORBIDDEN_TECH_DENYLIST: LazyLock<DenyList> =
    LazyLock::new(|| DenyList::substring(FORBIDDEN_TECH.iter().map(|(token, _)| *token)));

/// One denylist scan: a fixed term list and the matching policy compiled for
/// each term. Built once per process and never mutated.
#[derive(Debug)]
struct DenyList {
    entries: Vec<(&'static str, Matcher)>,
}

#[derive(Debug)]
enum Matcher {
    /// Case-insensitive whole-token regex.
    Word(Regex),
    /// Plain substring test; callers lower-case the haystack.
    Substring,
}

impl DenyList {
    fn word_bounded(terms: &'static [&'static str]) -> Self {
        let entries = terms
            .iter()
            .map(|&term| {
                let pattern = format!(r"(?i)\b{}\b", regex::escape(term));
                let regex = Regex::new(&pattern).expect("escaped literal terms always compile");
                (term, Matcher::Word(regex))
            })
            .collect();
        Self { entries }
    }

    fn substring(terms: impl Iterator<Item = &'static str>) -> Self {
        Self {
            entries: terms.map(|term| (term, Matcher::Substring)).collect(),
        }
    }

    /// Returns the terms present in `text`, in denylist order, at most once
    /// each regardless of occurrence count.
    fn matches(&self, text: &str) -> Vec<&'static str> {
        self.entries
            .iter()
            .filter(|(term, matcher)| match matcher {
                Matcher::Word(regex) => regex.is_match(text),
                Matcher::Substring => text.contains(term),
            })
            .map(|(term, _)| *term)
            .collect()
    }
}

/// Serializes the document for scanning.
fn serialize(document: &Value) -> String {
    serde_json::to_string(document).expect("in-memory JSON values always serialize")
}

/// Scans for forbidden placeholder tokens anywhere in the document.
pub(super) fn placeholders(document: &Value, findings: &mut Findings) {
    let text = serialize(document);
    let matched = PLACEHOLDER_DENYLIST.matches(&text);
    if !matched.is_empty() {
        findings.error(format!("금지된 placeholder 발견: {}", matched.join(", ")));
    }
}

/// Scans for disallowed technology tokens anywhere in the document.
pub(super) fn forbidden_tech(document: &Value, findings: &mut Findings) {
    let text = serialize(document).to_lowercase();
    for term in FORBIDDEN_TECH_DENYLIST.matches(&text) {
        let (_, replacement) = FORBIDDEN_TECH
            .iter()
            .find(|(token, _)| *token == term)
            .expect("matched term comes from the same table");
        findings.error(format!(
            "금지된 기술 발견: '{term}'은(는) 사용할 수 없습니다. {replacement}를 사용하세요"
        ));
    }
}
