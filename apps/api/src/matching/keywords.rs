//! Content-keyword extraction from free text.

use std::collections::BTreeSet;

use crate::nlp::LinguisticTagger;

/// Reduces text to its set of content-word lemmas.
///
/// The text is lowercased before tagging; only nouns, proper nouns,
/// adjectives and verbs contribute. Duplicates collapse, and the sorted set
/// keeps downstream JSON arrays in a stable order.
pub fn extract_keywords(text: &str, tagger: &dyn LinguisticTagger) -> BTreeSet<String> {
    let lowered = text.to_lowercase();
    tagger
        .tag_tokens(&lowered)
        .into_iter()
        .filter(|token| token.tag.is_content_word())
        .map(|token| token.lemma)
        .collect()
}
