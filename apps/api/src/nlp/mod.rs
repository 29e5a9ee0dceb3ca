//! Linguistic tagging boundary for keyword extraction.
//!
//! Keyword extraction only needs two things from a tagger: which grammatical
//! role a token plays, and its lemma. The trait keeps handlers independent of
//! the concrete implementation; `HeuristicTagger` is the in-process default.

mod lexicon;
mod tagger;

pub use tagger::HeuristicTagger;

/// Part-of-speech classes assigned by the tagger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    Noun,
    ProperNoun,
    Adjective,
    Verb,
    Adverb,
    Pronoun,
    Determiner,
    Preposition,
    Conjunction,
    Auxiliary,
    Numeral,
    Particle,
}

impl PosTag {
    /// Whether keyword extraction keeps this class.
    /// Content words carry meaning; everything else is grammatical glue.
    pub fn is_content_word(self) -> bool {
        matches!(
            self,
            PosTag::Noun | PosTag::ProperNoun | PosTag::Adjective | PosTag::Verb
        )
    }
}

/// One token as seen by the tagger: surface form, normalized lemma, role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub surface: String,
    pub lemma: String,
    pub tag: PosTag,
}

/// Annotates text with part-of-speech tags and lemmas.
///
/// Constructed once at startup and carried in `AppState` as
/// `Arc<dyn LinguisticTagger>` rather than as process-global state.
pub trait LinguisticTagger: Send + Sync {
    fn tag_tokens(&self, text: &str) -> Vec<TaggedToken>;
}
