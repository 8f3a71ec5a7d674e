//! Four-stage query matcher: greetings, identity probes, synonym/topic
//! substring match, then fuzzy nearest-neighbor suggestion.

use crate::knowledge::KnowledgeBase;

/// Minimum similarity ratio a topic key must reach before it is offered as a
/// "did you mean" suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.5;

const DEFAULT_FALLBACK: &str = "I'm sorry, I don't have information on that topic yet. \
     Please ask about construction materials, structural elements, or processes.";

/// Stateless matcher over an immutable [`KnowledgeBase`]. Every call is a
/// pure function of the query and the tables, so one instance can be shared
/// across any number of concurrent callers without coordination.
pub struct Responder {
    knowledge: KnowledgeBase,
    threshold: f64,
}

impl Responder {
    pub fn new(knowledge: KnowledgeBase) -> Self {
        Self::with_threshold(knowledge, SUGGESTION_THRESHOLD)
    }

    pub fn with_threshold(knowledge: KnowledgeBase, threshold: f64) -> Self {
        Self { knowledge, threshold }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Produces exactly one answer for any input. Matching is substring
    /// containment at every stage except the fuzzy fallback, and the first
    /// match in table order wins, so a short phrase inside a longer
    /// unrelated word is accepted ("hi" inside "architecture" greets).
    pub fn answer(&self, query: &str) -> String {
        let query = query.to_lowercase();

        for (trigger, reply) in self.knowledge.greetings() {
            if query.contains(trigger) {
                return reply.to_string();
            }
        }

        for probe in self.knowledge.identity_probes() {
            if query.contains(probe) {
                return self.knowledge.attribution().to_string();
            }
        }

        for (canonical, phrases) in self.knowledge.topic_groups() {
            for phrase in phrases {
                if query.contains(phrase.as_str()) {
                    if let Some(answer) = self.knowledge.answer_for(canonical) {
                        return answer.to_string();
                    }
                }
            }
        }

        if let Some((key, answer)) = self.closest_topic(&query) {
            return format!(
                "I'm not sure, but did you mean **{}**? Here's what I know:\n\n{}",
                key, answer
            );
        }

        DEFAULT_FALLBACK.to_string()
    }

    /// Highest-scoring topic key at or above the threshold, comparing the
    /// whole query against whole keys. Ties keep the earliest key.
    fn closest_topic(&self, query: &str) -> Option<(&str, &str)> {
        let mut best: Option<(&str, &str, f64)> = None;
        for (key, answer) in self.knowledge.entries() {
            let score = strsim::normalized_levenshtein(query, key);
            if score < self.threshold {
                continue;
            }
            if best.map_or(true, |(_, _, top)| score > top) {
                best = Some((key, answer, score));
            }
        }
        best.map(|(key, answer, _)| (key, answer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn responder() -> Responder {
        Responder::new(KnowledgeBase::builtin().expect("built-in tables"))
    }

    /// Keys whose lookup is claimed by an earlier table row under
    /// first-match-wins; pinned in `substring_shadowing_is_first_match_wins`.
    const SHADOWED_KEYS: &[&str] = &[
        "architecture",
        "highway",
        "aac block",
        "bitumen",
        "pile foundation",
        "shuttering",
        "precast concrete",
        "green building",
        "site mobilization",
    ];

    #[test]
    fn canonical_keys_answer_themselves() {
        let r = responder();
        for (key, expected) in r.knowledge().entries() {
            if SHADOWED_KEYS.contains(&key) {
                continue;
            }
            assert_eq!(r.answer(key), expected, "self-match failed for {:?}", key);
        }
    }

    #[test]
    fn synonym_phrases_resolve_to_their_canonical_answer() {
        // Phrases containing an earlier group's phrase resolve there instead;
        // pinned in `substring_shadowing_is_first_match_wins`.
        const SHADOWED_PHRASES: &[&str] = &[
            "brick work",
            "reinforcement bar",
            "steel bar",
            "precast concrete",
            "pile foundation",
            "deep foundation",
        ];
        let r = responder();
        let groups: Vec<(String, Vec<String>)> = r
            .knowledge()
            .topic_groups()
            .map(|(k, ps)| (k.to_string(), ps.to_vec()))
            .collect();
        for (canonical, phrases) in groups {
            for phrase in phrases {
                if SHADOWED_PHRASES.contains(&phrase.as_str()) {
                    continue;
                }
                let expected = r.knowledge().answer_for(&canonical).unwrap();
                assert_eq!(
                    r.answer(&phrase),
                    expected,
                    "phrase {:?} should resolve to {:?}",
                    phrase,
                    canonical
                );
            }
        }
    }

    #[test]
    fn substring_shadowing_is_first_match_wins() {
        let r = responder();
        let entry = |key: &str| r.knowledge().answer_for(key).unwrap().to_string();

        // "hi" occurs inside both words, so the greeting tier answers first.
        assert_eq!(r.answer("architecture"), entry("hi"));
        assert_eq!(r.answer("highway"), entry("hi"));

        // An earlier group's phrase occurs inside the query.
        assert_eq!(r.answer("aac block"), entry("brick"));
        assert_eq!(r.answer("bitumen"), entry("asphalt"));
        assert_eq!(r.answer("shuttering"), entry("formwork"));
        assert_eq!(r.answer("precast concrete"), entry("concrete"));
        assert_eq!(r.answer("pile foundation"), entry("foundation"));
        assert_eq!(r.answer("deep foundation"), entry("foundation"));
        assert_eq!(r.answer("brick work"), entry("brick"));
        assert_eq!(r.answer("reinforcement bar"), entry("steel"));
        assert_eq!(r.answer("steel bar"), entry("steel"));

        // An earlier key occurs inside a longer key.
        assert_eq!(r.answer("green building"), entry("building"));
        assert_eq!(r.answer("site mobilization"), entry("site"));
    }

    #[test]
    fn greetings_win_over_topic_keywords() {
        let r = responder();
        let hi_reply = r.knowledge().answer_for("hi").unwrap();
        assert_eq!(r.answer("hi, what is cement"), hi_reply);
        assert_eq!(r.answer("well hi there, tell me about slabs"), hi_reply);

        let morning = r.knowledge().answer_for("good morning").unwrap();
        assert_eq!(r.answer("a very good morning to you"), morning);
    }

    #[test]
    fn every_greeting_matches_embedded_in_surrounding_text() {
        let r = responder();
        let greetings: Vec<(String, String)> = r
            .knowledge()
            .greetings()
            .map(|(t, reply)| (t.to_string(), reply.to_string()))
            .collect();
        for (trigger, reply) in greetings {
            let query = format!("so then, {} everyone", trigger);
            assert_eq!(r.answer(&query), reply, "greeting {:?} did not match", trigger);
        }
    }

    #[test]
    fn identity_probes_return_the_attribution() {
        let r = responder();
        let attribution = r.knowledge().attribution();
        assert_eq!(r.answer("who made you"), attribution);
        assert_eq!(r.answer("tell me, who is your owner exactly?"), attribution);
        assert_eq!(r.answer("WHO CREATED YOU"), attribution);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let r = responder();
        assert_eq!(
            r.answer("What Is CEMENT?"),
            r.knowledge().answer_for("cement").unwrap()
        );
    }

    #[test]
    fn near_miss_spelling_gets_a_suggestion() {
        let r = responder();
        let answer = r.answer("waterprofing");
        assert!(answer.contains("did you mean **waterproofing**"), "got: {}", answer);
        assert!(answer.contains(r.knowledge().answer_for("waterproofing").unwrap()));
    }

    #[test]
    fn empty_and_nonsense_queries_get_the_fallback() {
        let r = responder();
        assert_eq!(r.answer(""), DEFAULT_FALLBACK);
        assert_eq!(r.answer("xyzzy nonsense"), DEFAULT_FALLBACK);
    }

    #[test]
    fn long_queries_score_below_threshold_against_short_keys() {
        let r = responder();
        assert_eq!(
            r.answer("explain everything regarding underwater basket weaving techniques overseas"),
            DEFAULT_FALLBACK
        );
    }

    #[test]
    fn repeated_calls_are_idempotent() {
        let r = responder();
        for query in ["waterprofing", "hi, what is cement", "xyzzy nonsense", "bridge"] {
            assert_eq!(r.answer(query), r.answer(query));
        }
    }

    #[test]
    fn fuzzy_ties_keep_the_first_key_in_table_order() {
        let kb = KnowledgeBase::from_tables(
            &[("abcd", "first answer"), ("abce", "second answer")],
            &[],
            &[],
            &[],
            "made by tests",
        )
        .unwrap();
        let r = Responder::new(kb);
        // Both keys score 0.75 against "abcf"; the earlier row wins.
        let answer = r.answer("abcf");
        assert!(answer.contains("**abcd**"), "got: {}", answer);
        assert!(answer.contains("first answer"));
    }

    #[test]
    fn threshold_override_suppresses_suggestions() {
        let kb = KnowledgeBase::builtin().unwrap();
        let strict = Responder::with_threshold(kb, 1.0);
        assert_eq!(strict.answer("waterprofing"), DEFAULT_FALLBACK);
    }
}
