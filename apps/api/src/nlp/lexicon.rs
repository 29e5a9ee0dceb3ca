//! Closed-class word lists and irregular-form tables for the heuristic tagger.
//!
//! Grammatical function words form a nearly closed set in English, so a
//! static lexicon is enough to assign their roles without a trained model.
//! Words that belong to more than one class (like "that") sit in a single
//! bucket; every closed-class bucket is filtered out of keyword sets anyway.

pub(crate) const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "either", "neither",
    "some", "any", "no", "another", "such", "both", "all", "several", "enough", "much", "many",
    "more", "most", "few", "fewer", "little", "less", "least", "own", "same", "which", "whose",
];

pub(crate) const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my", "your",
    "his", "its", "our", "their", "mine", "yours", "hers", "ours", "theirs", "myself", "yourself",
    "himself", "herself", "itself", "ourselves", "yourselves", "themselves", "who", "whom",
    "what", "someone", "anyone", "everyone", "something", "anything", "everything", "nothing",
    "nobody",
];

pub(crate) const PREPOSITIONS: &[&str] = &[
    "of", "in", "to", "for", "with", "on", "at", "from", "by", "about", "as", "into", "through",
    "after", "over", "between", "against", "during", "without", "before", "under", "around",
    "among", "across", "behind", "beyond", "within", "along", "near", "above", "below", "off",
    "onto", "upon", "toward", "towards", "via", "per", "since", "until", "like",
];

pub(crate) const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "so", "yet", "if", "while", "although", "though", "because",
    "unless", "whereas", "than", "whether", "once", "when", "where",
];

pub(crate) const AUXILIARIES: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "do", "does", "did", "done", "have",
    "has", "had", "having", "will", "would", "shall", "should", "can", "could", "may", "might",
    "must", "ought", "cannot", "don't", "doesn't", "didn't", "isn't", "aren't", "wasn't",
    "weren't", "can't", "won't", "wouldn't", "couldn't", "shouldn't", "haven't", "hasn't",
    "hadn't",
];

pub(crate) const COMMON_ADVERBS: &[&str] = &[
    "not", "very", "too", "also", "just", "well", "then", "there", "here", "how", "why", "again",
    "further", "ever", "never", "always", "often", "sometimes", "usually", "really", "quite",
    "rather", "almost", "already", "still", "even", "only", "now", "soon", "thus", "however",
    "therefore", "instead", "please",
];

pub(crate) const PARTICLES: &[&str] = &["up", "down", "out", "away", "back", "forth"];

/// Common irregular verb forms mapped to their lemma. Resume prose leans
/// heavily on past-tense action verbs.
pub(crate) const IRREGULAR_VERBS: &[(&str, &str)] = &[
    ("led", "lead"),
    ("built", "build"),
    ("wrote", "write"),
    ("written", "write"),
    ("made", "make"),
    ("grew", "grow"),
    ("grown", "grow"),
    ("ran", "run"),
    ("held", "hold"),
    ("won", "win"),
    ("took", "take"),
    ("taken", "take"),
    ("drove", "drive"),
    ("driven", "drive"),
    ("sold", "sell"),
    ("taught", "teach"),
    ("brought", "bring"),
    ("kept", "keep"),
    ("left", "leave"),
    ("met", "meet"),
    ("sent", "send"),
    ("spent", "spend"),
    ("gave", "give"),
    ("given", "give"),
    ("began", "begin"),
    ("begun", "begin"),
    ("found", "find"),
    ("got", "get"),
    ("saw", "see"),
    ("seen", "see"),
    ("went", "go"),
    ("goes", "go"),
    ("rose", "rise"),
    ("risen", "rise"),
];

/// Irregular noun plurals (and invariant nouns) mapped to their lemma.
pub(crate) const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("people", "people"),
    ("data", "data"),
    ("media", "media"),
    ("series", "series"),
    ("analyses", "analysis"),
    ("theses", "thesis"),
    ("hypotheses", "hypothesis"),
    ("criteria", "criterion"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("vertices", "vertex"),
];

/// Stems left after -ed/-ing stripping that need a final "e" restored but
/// are not covered by the general suffix rules in the tagger.
pub(crate) const E_RESTORED_STEMS: &[(&str, &str)] = &[
    ("us", "use"),
    ("merg", "merge"),
    ("schedul", "schedule"),
    ("provid", "provide"),
    ("decid", "decide"),
    ("guid", "guide"),
    ("divid", "divide"),
    ("experienc", "experience"),
    ("advanc", "advance"),
    ("influenc", "influence"),
    ("enhanc", "enhance"),
    ("chang", "change"),
    ("challeng", "challenge"),
];

/// Stems ending in "at" whose lemma does NOT take a final "e"
/// (counterexamples to the `-at` restoration rule: treat, repeat, ...).
pub(crate) const AT_STEMS_WITHOUT_E: &[&str] =
    &["treat", "repeat", "defeat", "heat", "float", "seat", "beat"];

/// Suffixes that mark a word as an adjective. Only used for role labelling;
/// adjectives keep their surface form as the lemma.
pub(crate) const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ful", "less", "ous", "ive", "able", "ible", "ish", "ical", "ant", "ent",
];

/// Words ending in "ly" that are not adverbs.
pub(crate) const NON_ADVERB_LY: &[&str] = &[
    "apply", "supply", "rely", "reply", "family", "assembly", "multiply", "monopoly", "anomaly",
    "july", "italy",
];
