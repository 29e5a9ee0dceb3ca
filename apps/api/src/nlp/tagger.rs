//! Rule-based tagger and lemmatiser.
//!
//! Resume and job-description text is short, keyword-dense English, which a
//! small rule system handles well: closed-class words come from a static
//! lexicon, vowel-free tokens and tokens with digits are treated as named
//! technologies, and open-class words are lemmatised with suffix rules plus
//! irregular-form tables. Matching only needs both sides of a comparison to
//! normalise the same way, so the rules favour consistency over linguistic
//! completeness.

use std::collections::{HashMap, HashSet};

use unicode_segmentation::UnicodeSegmentation;

use super::lexicon;
use super::{LinguisticTagger, PosTag, TaggedToken};

/// Dictionary-and-suffix tagger. Cheap to build, no model files, no I/O.
pub struct HeuristicTagger {
    closed_class: HashMap<&'static str, PosTag>,
    irregular_verbs: HashMap<&'static str, &'static str>,
    irregular_nouns: HashMap<&'static str, &'static str>,
    e_restored_stems: HashMap<&'static str, &'static str>,
    at_stems_without_e: HashSet<&'static str>,
    non_adverb_ly: HashSet<&'static str>,
}

impl HeuristicTagger {
    pub fn new() -> Self {
        let mut closed_class = HashMap::new();
        for &word in lexicon::DETERMINERS {
            closed_class.insert(word, PosTag::Determiner);
        }
        for &word in lexicon::PRONOUNS {
            closed_class.insert(word, PosTag::Pronoun);
        }
        for &word in lexicon::PREPOSITIONS {
            closed_class.insert(word, PosTag::Preposition);
        }
        for &word in lexicon::CONJUNCTIONS {
            closed_class.insert(word, PosTag::Conjunction);
        }
        for &word in lexicon::AUXILIARIES {
            closed_class.insert(word, PosTag::Auxiliary);
        }
        for &word in lexicon::COMMON_ADVERBS {
            closed_class.insert(word, PosTag::Adverb);
        }
        for &word in lexicon::PARTICLES {
            closed_class.insert(word, PosTag::Particle);
        }

        Self {
            closed_class,
            irregular_verbs: lexicon::IRREGULAR_VERBS.iter().copied().collect(),
            irregular_nouns: lexicon::IRREGULAR_NOUNS.iter().copied().collect(),
            e_restored_stems: lexicon::E_RESTORED_STEMS.iter().copied().collect(),
            at_stems_without_e: lexicon::AT_STEMS_WITHOUT_E.iter().copied().collect(),
            non_adverb_ly: lexicon::NON_ADVERB_LY.iter().copied().collect(),
        }
    }

    /// Assigns a role and lemma to one lowercased token.
    ///
    /// Rule order matters: closed-class lookup first, then shape-based rules
    /// (digits, vowel-free acronyms), then irregular tables, and only then
    /// the generic suffix rules.
    fn classify(&self, word: &str) -> (PosTag, String) {
        if let Some(tag) = self.closed_class.get(word) {
            return (*tag, word.to_string());
        }
        if word.chars().all(|c| c.is_ascii_digit()) {
            return (PosTag::Numeral, word.to_string());
        }
        // "python3", "s3", "ec2": version and product names keep their form.
        if word.chars().any(|c| c.is_ascii_digit()) {
            return (PosTag::ProperNoun, word.to_string());
        }
        // "ml", "nlp", "sql": no vowel means acronym, not an English word.
        if !has_vowel(word) {
            return (PosTag::ProperNoun, word.to_string());
        }
        if let Some(lemma) = self.irregular_verbs.get(word) {
            return (PosTag::Verb, (*lemma).to_string());
        }
        if let Some(lemma) = self.irregular_nouns.get(word) {
            return (PosTag::Noun, (*lemma).to_string());
        }
        if word.len() > 4 && word.ends_with("ly") && !self.non_adverb_ly.contains(word) {
            return (PosTag::Adverb, word.to_string());
        }
        if let Some(lemma) = self.verb_lemma(word) {
            return (PosTag::Verb, lemma);
        }
        if word.len() >= 5
            && lexicon::ADJECTIVE_SUFFIXES
                .iter()
                .any(|suffix| word.ends_with(suffix))
        {
            return (PosTag::Adjective, word.to_string());
        }
        (PosTag::Noun, noun_lemma(word))
    }

    /// Strips -ing/-ed inflection and repairs the stem. `None` means the
    /// word does not look like an inflected verb and should be classified
    /// by the later rules instead.
    fn verb_lemma(&self, word: &str) -> Option<String> {
        if word.len() >= 5 {
            if let Some(stem) = word.strip_suffix("ing") {
                return self.repair_stem(stem);
            }
        }
        if let Some(stem) = word.strip_suffix("ied") {
            // applied -> apply, studied -> study
            if stem.len() >= 2 {
                return Some(format!("{stem}y"));
            }
        }
        if word.ends_with("eed") {
            // agreed -> agree
            return Some(word[..word.len() - 1].to_string());
        }
        if word.len() >= 4 {
            if let Some(stem) = word.strip_suffix("ed") {
                return self.repair_stem(stem);
            }
        }
        None
    }

    /// Undoes the spelling changes that -ing/-ed stripping leaves behind:
    /// doubled final consonants (plann -> plan) and dropped final "e"
    /// (manag -> manage). An undoubled stem never takes back an "e".
    fn repair_stem(&self, stem: &str) -> Option<String> {
        if let Some(lemma) = self.e_restored_stems.get(stem) {
            return Some((*lemma).to_string());
        }
        if stem.len() < 3 {
            // "th" from "thing": too short to be a verb stem.
            return None;
        }
        let bytes = stem.as_bytes();
        let n = bytes.len();
        if n >= 4
            && bytes[n - 1] == bytes[n - 2]
            && is_consonant(bytes[n - 1])
            && !matches!(bytes[n - 1], b'l' | b's' | b'z')
        {
            return Some(stem[..n - 1].to_string());
        }
        if self.wants_final_e(stem) {
            return Some(format!("{stem}e"));
        }
        Some(stem.to_string())
    }

    fn wants_final_e(&self, stem: &str) -> bool {
        if stem.ends_with("at") {
            // creat -> create, automat -> automate; but treat stays treat.
            return stem.len() >= 5 && !self.at_stems_without_e.contains(stem);
        }
        const E_DROPPING_ENDINGS: &[&str] = &["iz", "yz", "is", "ys", "uc", "ud", "as", "ur", "ag"];
        if E_DROPPING_ENDINGS.iter().any(|s| stem.ends_with(s)) {
            return true;
        }
        if stem.ends_with('v') {
            // improv -> improve, serv -> serve
            return true;
        }
        // cod -> code, writ -> write; longer stems (develop, design) keep
        // their form, so the consonant-vowel-consonant rule stays short-only.
        stem.len() <= 4 && ends_cvc(stem)
    }
}

impl Default for HeuristicTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl LinguisticTagger for HeuristicTagger {
    fn tag_tokens(&self, text: &str) -> Vec<TaggedToken> {
        text.unicode_words()
            .filter_map(|raw| {
                let word = raw
                    .strip_suffix("'s")
                    .or_else(|| raw.strip_suffix("\u{2019}s"))
                    .unwrap_or(raw);
                if word.is_empty() {
                    return None;
                }
                let lowered = word.to_lowercase().replace('\u{2019}', "'");
                let (tag, lemma) = self.classify(&lowered);
                Some(TaggedToken {
                    surface: word.to_string(),
                    lemma,
                    tag,
                })
            })
            .collect()
    }
}

/// Singularises regular noun plurals, leaving words whose final "s" is part
/// of the lemma (status, analysis, business) untouched.
fn noun_lemma(word: &str) -> String {
    if word.ends_with("ss")
        || word.ends_with("us")
        || word.ends_with("sis")
        || word.ends_with("xis")
    {
        return word.to_string();
    }
    if word.len() >= 5 {
        if let Some(stem) = word.strip_suffix("ies") {
            // technologies -> technology
            return format!("{stem}y");
        }
        if word.ends_with("oes") {
            // heroes -> hero
            return word[..word.len() - 2].to_string();
        }
    }
    if word.ends_with("ches")
        || word.ends_with("shes")
        || word.ends_with("xes")
        || word.ends_with("sses")
    {
        return word[..word.len() - 2].to_string();
    }
    if word.len() >= 3 {
        if let Some(stem) = word.strip_suffix('s') {
            return stem.to_string();
        }
    }
    word.to_string()
}

fn has_vowel(word: &str) -> bool {
    word.chars().any(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'))
}

fn is_ascii_vowel(byte: u8) -> bool {
    matches!(byte, b'a' | b'e' | b'i' | b'o' | b'u')
}

fn is_consonant(byte: u8) -> bool {
    byte.is_ascii_lowercase() && !is_ascii_vowel(byte)
}

/// Consonant-vowel-consonant ending, excluding w/x/y as the final letter.
fn ends_cvc(stem: &str) -> bool {
    let bytes = stem.as_bytes();
    let n = bytes.len();
    if n < 3 {
        return false;
    }
    is_consonant(bytes[n - 3])
        && is_ascii_vowel(bytes[n - 2])
        && is_consonant(bytes[n - 1])
        && !matches!(bytes[n - 1], b'w' | b'x' | b'y')
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn tag_one(tagger: &HeuristicTagger, word: &str) -> TaggedToken {
        let mut tokens = tagger.tag_tokens(word);
        assert_eq!(tokens.len(), 1, "expected a single token for {word:?}");
        tokens.remove(0)
    }

    fn lemma_of(tagger: &HeuristicTagger, word: &str) -> String {
        tag_one(tagger, word).lemma
    }

    #[test]
    fn test_closed_class_words_are_not_content() {
        let tagger = HeuristicTagger::new();
        for word in ["the", "and", "of", "with", "we", "are", "is", "not"] {
            let token = tag_one(&tagger, word);
            assert!(
                !token.tag.is_content_word(),
                "{word:?} should be a function word, got {:?}",
                token.tag
            );
        }
    }

    #[test]
    fn test_vowel_free_tokens_are_proper_nouns() {
        let tagger = HeuristicTagger::new();
        for word in ["ml", "nlp", "sql", "css"] {
            let token = tag_one(&tagger, word);
            assert_eq!(token.tag, PosTag::ProperNoun, "{word:?} should be a proper noun");
            assert_eq!(token.lemma, word, "{word:?} should keep its surface form");
        }
    }

    #[test]
    fn test_tokens_with_digits_keep_their_form() {
        let tagger = HeuristicTagger::new();
        assert_eq!(tag_one(&tagger, "python3").tag, PosTag::ProperNoun);
        assert_eq!(lemma_of(&tagger, "python3"), "python3");
        assert_eq!(tag_one(&tagger, "s3").tag, PosTag::ProperNoun);
        assert_eq!(
            tag_one(&tagger, "2023").tag,
            PosTag::Numeral,
            "bare year should be a numeral, not a keyword"
        );
    }

    #[test]
    fn test_regular_plurals_singularise() {
        let tagger = HeuristicTagger::new();
        assert_eq!(lemma_of(&tagger, "apis"), "api");
        assert_eq!(lemma_of(&tagger, "skills"), "skill");
        assert_eq!(lemma_of(&tagger, "databases"), "database");
        assert_eq!(lemma_of(&tagger, "technologies"), "technology");
        assert_eq!(lemma_of(&tagger, "matches"), "match");
        assert_eq!(lemma_of(&tagger, "boxes"), "box");
        assert_eq!(lemma_of(&tagger, "heroes"), "hero");
    }

    #[test]
    fn test_protected_endings_are_not_singularised() {
        let tagger = HeuristicTagger::new();
        for word in ["status", "plus", "business", "analysis", "axis", "class"] {
            assert_eq!(lemma_of(&tagger, word), word, "{word:?} is not a plural");
        }
    }

    #[test]
    fn test_progressive_verbs_lemmatise() {
        let tagger = HeuristicTagger::new();
        assert_eq!(lemma_of(&tagger, "looking"), "look");
        assert_eq!(lemma_of(&tagger, "learning"), "learn");
        assert_eq!(lemma_of(&tagger, "running"), "run");
        assert_eq!(lemma_of(&tagger, "coding"), "code");
        assert_eq!(lemma_of(&tagger, "writing"), "write");
        assert_eq!(lemma_of(&tagger, "managing"), "manage");
        assert_eq!(lemma_of(&tagger, "creating"), "create");
        assert_eq!(lemma_of(&tagger, "using"), "use");
    }

    #[test]
    fn test_short_ing_nouns_are_not_mangled() {
        let tagger = HeuristicTagger::new();
        let token = tag_one(&tagger, "thing");
        assert_eq!(token.tag, PosTag::Noun);
        assert_eq!(token.lemma, "thing");
    }

    #[test]
    fn test_past_tense_verbs_lemmatise() {
        let tagger = HeuristicTagger::new();
        assert_eq!(lemma_of(&tagger, "managed"), "manage");
        assert_eq!(lemma_of(&tagger, "developed"), "develop");
        assert_eq!(lemma_of(&tagger, "delivered"), "deliver");
        assert_eq!(lemma_of(&tagger, "created"), "create");
        assert_eq!(lemma_of(&tagger, "applied"), "apply");
        assert_eq!(lemma_of(&tagger, "improved"), "improve");
        assert_eq!(lemma_of(&tagger, "optimized"), "optimize");
        assert_eq!(lemma_of(&tagger, "planned"), "plan");
        assert_eq!(lemma_of(&tagger, "treated"), "treat");
    }

    #[test]
    fn test_irregular_forms_use_their_tables() {
        let tagger = HeuristicTagger::new();
        assert_eq!(lemma_of(&tagger, "led"), "lead");
        assert_eq!(lemma_of(&tagger, "built"), "build");
        assert_eq!(lemma_of(&tagger, "wrote"), "write");
        assert_eq!(lemma_of(&tagger, "people"), "people");
        assert_eq!(lemma_of(&tagger, "analyses"), "analysis");
        assert_eq!(lemma_of(&tagger, "data"), "data");
    }

    #[test]
    fn test_ly_adverbs_are_dropped_but_ly_nouns_kept() {
        let tagger = HeuristicTagger::new();
        assert_eq!(tag_one(&tagger, "quickly").tag, PosTag::Adverb);
        assert_eq!(tag_one(&tagger, "family").tag, PosTag::Noun);
        assert_eq!(lemma_of(&tagger, "family"), "family");
    }

    #[test]
    fn test_adjective_suffixes_tag_as_adjectives() {
        let tagger = HeuristicTagger::new();
        for word in ["successful", "scalable", "proficient", "technical"] {
            let token = tag_one(&tagger, word);
            assert_eq!(token.tag, PosTag::Adjective, "{word:?} should be an adjective");
            assert!(token.tag.is_content_word());
        }
    }

    #[test]
    fn test_possessive_suffix_is_stripped() {
        let tagger = HeuristicTagger::new();
        assert_eq!(lemma_of(&tagger, "team's"), "team");
    }

    #[test]
    fn test_job_description_tokens_normalise_as_expected() {
        let tagger = HeuristicTagger::new();
        let text = "We are looking for a Python developer with experience in \
                    Flask, REST APIs, machine learning, and teamwork. \
                    Knowledge of NLP is a plus.";
        let mut lemmas: Vec<String> = tagger
            .tag_tokens(text)
            .into_iter()
            .filter(|token| token.tag.is_content_word())
            .map(|token| token.lemma)
            .collect();
        lemmas.sort();
        lemmas.dedup();
        assert_eq!(
            lemmas,
            vec![
                "api",
                "developer",
                "experience",
                "flask",
                "knowledge",
                "learn",
                "look",
                "machine",
                "nlp",
                "plus",
                "python",
                "rest",
                "teamwork",
            ],
            "content lemmas of the sample posting"
        );
    }
}
