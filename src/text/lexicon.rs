// Embedded English lexicon: tag hints, irregular forms and known base words.
//
// This is a compact stand-in for a full dictionary. It is weighted toward the
// vocabulary of resumes and job postings: common action verbs, role nouns and
// skill adjectives. Words missing here still get tagged and lemmatized through
// suffix and orthographic rules; the lexicon only settles cases those rules
// would get wrong.

use std::collections::{HashMap, HashSet};

use super::traits::Pos::{self, Adjective as J, Adverb as R, Noun as N, Verb as V};

/// Words with known categories, most likely category first.
const TAG_HINTS: &[(&str, &[Pos])] = &[
    // Noun/verb ambiguous words common in job postings
    ("lead", &[V, N]),
    ("design", &[N, V]),
    ("test", &[N, V]),
    ("build", &[V, N]),
    ("support", &[V, N]),
    ("work", &[N, V]),
    ("plan", &[N, V]),
    ("process", &[N, V]),
    ("report", &[N, V]),
    ("review", &[N, V]),
    ("release", &[N, V]),
    ("deploy", &[V]),
    ("change", &[N, V]),
    ("drive", &[V, N]),
    ("manage", &[V]),
    ("develop", &[V]),
    ("implement", &[V]),
    ("maintain", &[V]),
    ("collaborate", &[V]),
    ("communicate", &[V]),
    ("improve", &[V]),
    ("analyze", &[V]),
    ("analyse", &[V]),
    ("create", &[V]),
    ("deliver", &[V]),
    ("ensure", &[V]),
    ("optimize", &[V]),
    ("own", &[V, J]),
    ("mentor", &[N, V]),
    ("scale", &[N, V]),
    ("need", &[N, V]),
    ("use", &[V, N]),
    ("experience", &[N, V]),
    ("program", &[N, V]),
    ("code", &[N, V]),
    ("model", &[N, V]),
    ("research", &[N, V]),
    ("contract", &[N, V]),
    ("monitor", &[V, N]),
    ("debug", &[V]),
    ("apply", &[V]),
    ("embed", &[V]),
    ("proceed", &[V]),
    // Nouns the suffix rules would mistag
    ("engineer", &[N, V]),
    ("family", &[N]),
    ("assembly", &[N]),
    ("supply", &[N, V]),
    ("logic", &[N]),
    ("topic", &[N]),
    ("music", &[N]),
    ("clinic", &[N]),
    ("graphic", &[N, J]),
    ("string", &[N]),
    ("thing", &[N]),
    ("spring", &[N]),
    ("king", &[N]),
    ("morning", &[N]),
    ("evening", &[N]),
    ("ceiling", &[N]),
    ("wedding", &[N]),
    ("speed", &[N]),
    ("seed", &[N]),
    ("feed", &[N]),
    ("bed", &[N]),
    ("shed", &[N]),
    ("hundred", &[N]),
    ("kindred", &[N]),
    ("ability", &[N]),
    ("reply", &[N, V]),
    ("ally", &[N]),
    ("rally", &[N]),
    ("belly", &[N]),
    // Adjectives
    ("senior", &[J, N]),
    ("junior", &[J, N]),
    ("strong", &[J]),
    ("good", &[J]),
    ("great", &[J]),
    ("large", &[J]),
    ("small", &[J]),
    ("big", &[J]),
    ("fast", &[J, R]),
    ("new", &[J]),
    ("early", &[J, R]),
    ("daily", &[J, R]),
    ("weekly", &[J, R]),
    ("monthly", &[J, R]),
    ("friendly", &[J]),
    ("likely", &[J, R]),
    ("technical", &[J]),
    ("remote", &[J]),
    ("agile", &[J]),
    ("excellent", &[J]),
    ("independent", &[J]),
    ("efficient", &[J]),
    ("proficient", &[J]),
    ("fluent", &[J]),
    ("complex", &[J, N]),
    ("hard", &[J, R]),
    ("high", &[J]),
    ("low", &[J]),
    ("simple", &[J]),
    ("clear", &[J, V]),
    ("deep", &[J]),
    ("broad", &[J]),
    ("solid", &[J]),
    ("cloud", &[N]),
    ("backend", &[N, J]),
    ("frontend", &[N, J]),
    ("full", &[J]),
    // Adverbs without the -ly suffix
    ("well", &[R]),
    ("also", &[R]),
    ("often", &[R]),
    ("always", &[R]),
    ("never", &[R]),
    ("together", &[R]),
];

/// Irregular noun plurals.
const NOUN_EXCEPTIONS: &[(&str, &str)] = &[
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("people", "person"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("mice", "mouse"),
    ("analyses", "analysis"),
    ("bases", "basis"),
    ("crises", "crisis"),
    ("diagnoses", "diagnosis"),
    ("hypotheses", "hypothesis"),
    ("theses", "thesis"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("vertices", "vertex"),
    ("appendices", "appendix"),
    ("curricula", "curriculum"),
    ("leaves", "leaf"),
    ("lives", "life"),
    ("wives", "wife"),
    ("knives", "knife"),
    ("halves", "half"),
    ("shelves", "shelf"),
    ("selves", "self"),
    ("wolves", "wolf"),
    ("geese", "goose"),
    ("oxen", "ox"),
    ("alumni", "alumnus"),
    ("syllabi", "syllabus"),
    ("stimuli", "stimulus"),
];

/// Irregular verb forms.
const VERB_EXCEPTIONS: &[(&str, &str)] = &[
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("is", "be"),
    ("are", "be"),
    ("am", "be"),
    ("had", "have"),
    ("has", "have"),
    ("did", "do"),
    ("done", "do"),
    ("does", "do"),
    ("went", "go"),
    ("gone", "go"),
    ("led", "lead"),
    ("built", "build"),
    ("ran", "run"),
    ("wrote", "write"),
    ("written", "write"),
    ("made", "make"),
    ("took", "take"),
    ("taken", "take"),
    ("gave", "give"),
    ("given", "give"),
    ("got", "get"),
    ("gotten", "get"),
    ("began", "begin"),
    ("begun", "begin"),
    ("brought", "bring"),
    ("bought", "buy"),
    ("thought", "think"),
    ("taught", "teach"),
    ("caught", "catch"),
    ("sought", "seek"),
    ("fought", "fight"),
    ("found", "find"),
    ("held", "hold"),
    ("kept", "keep"),
    ("left", "leave"),
    ("lent", "lend"),
    ("sent", "send"),
    ("spent", "spend"),
    ("meant", "mean"),
    ("met", "meet"),
    ("paid", "pay"),
    ("said", "say"),
    ("sold", "sell"),
    ("told", "tell"),
    ("stood", "stand"),
    ("understood", "understand"),
    ("won", "win"),
    ("grew", "grow"),
    ("grown", "grow"),
    ("knew", "know"),
    ("known", "know"),
    ("drew", "draw"),
    ("drawn", "draw"),
    ("drove", "drive"),
    ("driven", "drive"),
    ("chose", "choose"),
    ("chosen", "choose"),
    ("rose", "rise"),
    ("risen", "rise"),
    ("spoke", "speak"),
    ("spoken", "speak"),
    ("saw", "see"),
    ("seen", "see"),
    ("became", "become"),
    ("came", "come"),
    ("oversaw", "oversee"),
    ("overseen", "oversee"),
    ("undertook", "undertake"),
    ("undertaken", "undertake"),
    ("shipped", "ship"),
    ("felt", "feel"),
    ("fed", "feed"),
    ("sped", "speed"),
    ("dealt", "deal"),
    ("learnt", "learn"),
    ("rebuilt", "rebuild"),
    ("rewrote", "rewrite"),
    ("rewritten", "rewrite"),
    ("set", "set"),
    ("put", "put"),
    ("cut", "cut"),
    ("let", "let"),
];

/// Irregular comparatives and superlatives.
const ADJECTIVE_EXCEPTIONS: &[(&str, &str)] = &[
    ("better", "good"),
    ("best", "good"),
    ("worse", "bad"),
    ("worst", "bad"),
    ("further", "far"),
    ("farther", "far"),
    ("furthest", "far"),
    ("farthest", "far"),
    ("elder", "old"),
    ("eldest", "old"),
];

/// Adverbs only change through this table.
const ADVERB_EXCEPTIONS: &[(&str, &str)] = &[
    ("best", "well"),
    ("better", "well"),
    ("deeper", "deeply"),
    ("farther", "far"),
    ("further", "far"),
    ("harder", "hard"),
    ("hardest", "hard"),
];

/// Nouns that look plural but must never be reduced.
const INVARIANT_NOUNS: &[&str] = &[
    "kubernetes",
    "analytics",
    "physics",
    "mathematics",
    "economics",
    "statistics",
    "ethics",
    "logistics",
    "electronics",
    "graphics",
    "robotics",
    "metrics",
    "news",
    "series",
    "species",
    "status",
    "bus",
    "campus",
    "bonus",
    "focus",
    "corpus",
    "virus",
    "canvas",
    "aws",
    "gps",
    "ios",
    "macos",
    "devops",
    "mlops",
    "sales",
    "nodejs",
    "js",
    "redis",
    "postgres",
    "jenkins",
    "pandas",
    "express",
    "less",
    "sass",
    "css",
    "always",
    "perhaps",
];

/// Known verb base forms. Used to choose between candidate stems.
const VERB_BASES: &[&str] = &[
    "manage", "develop", "design", "test", "build", "lead", "deploy", "support", "implement",
    "maintain", "collaborate", "communicate", "improve", "analyze", "analyse", "create",
    "deliver", "ensure", "optimize", "optimise", "own", "mentor", "scale", "use", "code",
    "model", "program", "release", "review", "report", "plan", "drive", "write", "run",
    "architect", "automate", "integrate", "migrate", "refactor", "document", "monitor", "debug",
    "configure", "coordinate", "execute", "evaluate", "facilitate", "identify", "increase",
    "reduce", "produce", "introduce", "achieve", "serve", "solve", "resolve", "involve",
    "require", "prefer", "refer", "occur", "commit", "submit", "ship", "plan", "train",
    "learn", "teach", "research", "publish", "present", "negotiate", "organize", "organise",
    "prioritize", "prioritise", "define", "establish", "launch", "streamline", "enable",
    "operate", "validate", "verify", "investigate", "troubleshoot", "upgrade", "update",
    "handle", "engage", "change", "challenge", "contribute", "collect", "consult", "advise",
    "assist", "help", "hire", "interview", "onboard", "recruit", "sell", "market", "grow",
    "expand", "secure", "protect", "host", "store", "cache", "query", "process", "compute",
    "visualize", "engineer", "craft", "shape", "influence", "partner", "care", "love",
    "excite", "base", "focus", "cause", "refuse", "pause", "raise", "close", "practice",
    "apply", "supply", "reply", "rely", "embed", "proceed", "succeed", "exceed", "need",
    "work", "make", "take", "move", "save", "give", "live", "prove", "approve", "remove",
    "achieve", "receive", "perceive", "believe", "relieve", "observe", "preserve", "reserve",
    "leverage", "measure", "structure", "capture", "feature", "ensure", "assure",
    "experience", "type", "pipe", "scope", "prototype", "combine", "determine", "examine",
    "write", "rewrite", "quote", "vote", "note", "promote", "remote", "compete", "complete",
    "delete", "generate", "operate", "iterate", "translate", "estimate", "educate",
    "stop", "drop", "map", "tag", "log", "plot", "chat", "fit", "split", "admit", "permit",
    "transmit", "control", "patrol", "compel", "excel", "label", "model", "travel", "cancel",
];

/// Known noun base forms that end in letters the plural rules can mangle.
const NOUN_BASES: &[&str] = &[
    "cache", "niche", "headache", "database", "course", "case", "base", "release", "service",
    "device", "interface", "practice", "license", "response", "expense", "purpose", "phase",
    "use", "house", "cause", "excuse", "browse", "clause", "nurse", "horse", "verse", "pulse",
    "response", "increase", "purchase", "showcase", "testcase", "codebase", "warehouse",
    "lakehouse", "enterprise", "franchise", "premise", "expertise", "promise", "exercise",
    "microservice", "process", "address", "business", "class", "access", "success",
    "progress", "stress", "loss", "boss", "glass", "pass", "approach", "branch", "search",
    "match", "batch", "patch", "switch", "launch", "speech", "coach", "dash", "flash",
    "crash", "hash", "bash", "push", "mesh", "box", "tax", "index", "suffix", "prefix",
    "fix", "mix", "matrix", "fax", "buzz", "quiz", "skill", "tool", "api", "sdk", "team",
];

/// Known adjective base forms, used to validate comparative stripping.
const ADJECTIVE_BASES: &[&str] = &[
    "good", "great", "large", "small", "big", "fast", "new", "old", "strong", "high", "low",
    "hard", "easy", "simple", "clear", "deep", "broad", "quick", "late", "early", "long",
    "short", "wide", "close", "fine", "safe", "smart", "cheap", "rich", "young", "busy",
    "tight", "light", "heavy", "clean", "lean", "slow", "bright", "wise", "nice", "hot",
    "thin", "fat", "wet", "sad", "red", "flat", "happy", "healthy", "steady", "tidy",
    "friendly", "lively",
];

/// Immutable lookup tables backing the tagger and lemmatizer.
#[derive(Debug, Clone)]
pub struct Lexicon {
    tag_hints: HashMap<&'static str, &'static [Pos]>,
    noun_exceptions: HashMap<&'static str, &'static str>,
    verb_exceptions: HashMap<&'static str, &'static str>,
    adjective_exceptions: HashMap<&'static str, &'static str>,
    adverb_exceptions: HashMap<&'static str, &'static str>,
    invariant_nouns: HashSet<&'static str>,
    verb_bases: HashSet<&'static str>,
    noun_bases: HashSet<&'static str>,
    adjective_bases: HashSet<&'static str>,
}

impl Lexicon {
    /// The bundled English lexicon.
    pub fn english() -> Self {
        Self {
            tag_hints: TAG_HINTS.iter().copied().collect(),
            noun_exceptions: NOUN_EXCEPTIONS.iter().copied().collect(),
            verb_exceptions: VERB_EXCEPTIONS.iter().copied().collect(),
            adjective_exceptions: ADJECTIVE_EXCEPTIONS.iter().copied().collect(),
            adverb_exceptions: ADVERB_EXCEPTIONS.iter().copied().collect(),
            invariant_nouns: INVARIANT_NOUNS.iter().copied().collect(),
            verb_bases: VERB_BASES.iter().copied().collect(),
            noun_bases: NOUN_BASES.iter().copied().collect(),
            adjective_bases: ADJECTIVE_BASES.iter().copied().collect(),
        }
    }

    /// Candidate categories for `word`, most likely first.
    pub fn tags(&self, word: &str) -> Option<&'static [Pos]> {
        self.tag_hints.get(word).copied()
    }

    /// Irregular base form of `word` for `pos`, if listed.
    pub fn exception(&self, word: &str, pos: Pos) -> Option<&'static str> {
        let table = match pos {
            Pos::Noun => &self.noun_exceptions,
            Pos::Verb => &self.verb_exceptions,
            Pos::Adjective => &self.adjective_exceptions,
            Pos::Adverb => &self.adverb_exceptions,
        };
        table.get(word).copied()
    }

    pub fn is_invariant_noun(&self, word: &str) -> bool {
        self.invariant_nouns.contains(word)
    }

    /// Whether `word` is a known base form for `pos`.
    ///
    /// Words with a tag hint for `pos` count as known bases too.
    pub fn is_base(&self, word: &str, pos: Pos) -> bool {
        let listed = match pos {
            Pos::Verb => self.verb_bases.contains(word),
            Pos::Noun => self.noun_bases.contains(word),
            Pos::Adjective => self.adjective_bases.contains(word),
            Pos::Adverb => false,
        };
        listed || self.tags(word).is_some_and(|tags| tags.contains(&pos))
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exception_lookup_is_per_category() {
        let lex = Lexicon::english();
        assert_eq!(lex.exception("better", Pos::Adjective), Some("good"));
        assert_eq!(lex.exception("better", Pos::Adverb), Some("well"));
        assert_eq!(lex.exception("better", Pos::Noun), None);
    }

    #[test]
    fn test_tag_hint_counts_as_base() {
        let lex = Lexicon::english();
        assert!(lex.is_base("design", Pos::Noun));
        assert!(lex.is_base("design", Pos::Verb));
        assert!(!lex.is_base("design", Pos::Adverb));
    }
}
