//! Static construction knowledge: canonical topics, synonym groups, and
//! greeting triggers, validated once at startup and immutable afterwards.

mod tables;

use std::fmt;

/// Raised when the tables violate a startup invariant. Surfaced once at
/// process start, never per request.
#[derive(Debug)]
pub enum KnowledgeError {
    /// A synonym group names a canonical key with no knowledge entry.
    SynonymKeyMissing(String),
    /// A greeting trigger has no knowledge entry to draw its reply from.
    GreetingKeyMissing(String),
    /// The same canonical key appears twice in the knowledge table.
    DuplicateKey(String),
}

impl fmt::Display for KnowledgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KnowledgeError::SynonymKeyMissing(key) => {
                write!(f, "synonym group references unknown topic: {}", key)
            }
            KnowledgeError::GreetingKeyMissing(key) => {
                write!(f, "greeting trigger has no knowledge entry: {}", key)
            }
            KnowledgeError::DuplicateKey(key) => {
                write!(f, "duplicate canonical key: {}", key)
            }
        }
    }
}

impl std::error::Error for KnowledgeError {}

fn answer_of<'a>(entries: &'a [(&str, &str)], key: &str) -> Option<&'a str> {
    entries.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Immutable knowledge tables in definition order.
///
/// `topic_groups` is the stage-3 lookup order: the explicit synonym groups
/// first, then one implicit single-phrase group per canonical key the
/// synonym table does not cover, so every topic key matches itself.
#[derive(Debug)]
pub struct KnowledgeBase {
    entries: Vec<(String, String)>,
    topic_groups: Vec<(String, Vec<String>)>,
    synonym_group_count: usize,
    greetings: Vec<(String, String)>,
    identity_probes: Vec<String>,
    attribution: String,
}

impl KnowledgeBase {
    /// Builds the built-in construction tables.
    pub fn builtin() -> Result<Self, KnowledgeError> {
        Self::from_tables(
            tables::KNOWLEDGE_ENTRIES,
            tables::SYNONYM_GROUPS,
            tables::GREETINGS,
            tables::IDENTITY_PROBES,
            tables::ATTRIBUTION,
        )
    }

    /// Builds and validates a knowledge base from raw tables.
    pub fn from_tables(
        entries: &[(&str, &str)],
        synonyms: &[(&str, &[&str])],
        greetings: &[&str],
        identity_probes: &[&str],
        attribution: &str,
    ) -> Result<Self, KnowledgeError> {
        let mut seen = std::collections::HashSet::new();
        for (key, _) in entries {
            if !seen.insert(*key) {
                return Err(KnowledgeError::DuplicateKey((*key).to_string()));
            }
        }

        let mut resolved_greetings = Vec::with_capacity(greetings.len());
        for trigger in greetings {
            let reply = answer_of(entries, trigger)
                .ok_or_else(|| KnowledgeError::GreetingKeyMissing((*trigger).to_string()))?;
            resolved_greetings.push(((*trigger).to_string(), reply.to_string()));
        }

        let mut topic_groups = Vec::with_capacity(synonyms.len() + entries.len());
        for (canonical, phrases) in synonyms {
            if answer_of(entries, canonical).is_none() {
                return Err(KnowledgeError::SynonymKeyMissing((*canonical).to_string()));
            }
            topic_groups.push((
                (*canonical).to_string(),
                phrases.iter().map(|p| (*p).to_string()).collect(),
            ));
        }
        // Implicit one-phrase groups for keys the synonym table leaves out,
        // in entry definition order.
        for (key, _) in entries {
            if !synonyms.iter().any(|(canonical, _)| canonical == key) {
                topic_groups.push(((*key).to_string(), vec![(*key).to_string()]));
            }
        }

        Ok(Self {
            entries: entries
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
            topic_groups,
            synonym_group_count: synonyms.len(),
            greetings: resolved_greetings,
            identity_probes: identity_probes.iter().map(|p| (*p).to_string()).collect(),
            attribution: attribution.to_string(),
        })
    }

    /// Answer stored under a canonical key, if any.
    pub fn answer_for(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All (key, answer) pairs in definition order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Stage-3 lookup order: explicit synonym groups, then implicit
    /// single-phrase groups.
    pub fn topic_groups(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.topic_groups
            .iter()
            .map(|(k, phrases)| (k.as_str(), phrases.as_slice()))
    }

    /// (trigger, reply) pairs in check order.
    pub fn greetings(&self) -> impl Iterator<Item = (&str, &str)> {
        self.greetings.iter().map(|(t, r)| (t.as_str(), r.as_str()))
    }

    pub fn identity_probes(&self) -> impl Iterator<Item = &str> {
        self.identity_probes.iter().map(|p| p.as_str())
    }

    pub fn attribution(&self) -> &str {
        &self.attribution
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn synonym_group_count(&self) -> usize {
        self.synonym_group_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_pass_validation() {
        let kb = KnowledgeBase::builtin().expect("built-in tables must validate");
        assert!(kb.entry_count() > 70);
        assert_eq!(kb.synonym_group_count(), 22);
        assert_eq!(kb.greetings().count(), 9);
    }

    #[test]
    fn dangling_synonym_key_fails_startup() {
        let err = KnowledgeBase::from_tables(
            &[("cement", "about cement")],
            &[("grout", &["grout", "joint filler"])],
            &[],
            &[],
            "made by tests",
        )
        .unwrap_err();
        assert!(matches!(err, KnowledgeError::SynonymKeyMissing(ref k) if k == "grout"));
    }

    #[test]
    fn greeting_without_entry_fails_startup() {
        let err = KnowledgeBase::from_tables(
            &[("cement", "about cement")],
            &[],
            &["hi"],
            &[],
            "made by tests",
        )
        .unwrap_err();
        assert!(matches!(err, KnowledgeError::GreetingKeyMissing(ref k) if k == "hi"));
    }

    #[test]
    fn duplicate_key_fails_startup() {
        let err = KnowledgeBase::from_tables(
            &[("cement", "one"), ("cement", "two")],
            &[],
            &[],
            &[],
            "made by tests",
        )
        .unwrap_err();
        assert!(matches!(err, KnowledgeError::DuplicateKey(ref k) if k == "cement"));
    }

    #[test]
    fn uncovered_keys_get_implicit_groups_after_explicit_ones() {
        let kb = KnowledgeBase::from_tables(
            &[("bridge", "about bridges"), ("cement", "about cement")],
            &[("cement", &["cement", "cment"])],
            &[],
            &[],
            "made by tests",
        )
        .unwrap();
        let groups: Vec<(&str, &[String])> = kb.topic_groups().collect();
        assert_eq!(groups[0].0, "cement");
        assert_eq!(groups[1].0, "bridge");
        assert_eq!(groups[1].1, &["bridge".to_string()][..]);
    }

    #[test]
    fn greeting_replies_come_from_entries() {
        let kb = KnowledgeBase::builtin().unwrap();
        for (trigger, reply) in kb.greetings() {
            assert_eq!(kb.answer_for(trigger), Some(reply));
        }
    }
}
