//! Language-aware sentence splitting.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Sentence-final punctuation, optional closing quotes or brackets, then
/// whitespace; or a blank line.
static BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?P<term>[.!?…]+["'”’»)\]]*)\s+|(?P<para>\s*\n[ \t]*\n\s*)"#)
        .expect("Valid sentence boundary regex")
});

static BLANK_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]*\n").expect("Valid blank line regex"));

/// Languages with a sentence tokenizer.
///
/// Parsed case-insensitively from the English name or the ISO 639-1 code.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use storyteller_pipeline::Language;
///
/// assert_eq!(Language::from_str("English").unwrap(), Language::English);
/// assert_eq!(Language::from_str("de").unwrap(), Language::German);
/// assert!(Language::from_str("klingon").is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Language {
    /// English
    #[default]
    #[strum(to_string = "english", serialize = "en")]
    English,
    /// German
    #[strum(to_string = "german", serialize = "de")]
    German,
    /// French
    #[strum(to_string = "french", serialize = "fr")]
    French,
    /// Spanish
    #[strum(to_string = "spanish", serialize = "es")]
    Spanish,
}

impl Language {
    /// Lowercase abbreviations (without the trailing period) that do not
    /// end a sentence.
    pub fn abbreviations(self) -> &'static [&'static str] {
        match self {
            Self::English => &[
                "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "ft", "vs", "etc",
                "inc", "ltd", "co", "corp", "no", "gen", "col", "capt", "lt", "sgt", "rev",
                "gov", "sen", "rep", "fig", "approx", "dept", "est", "jan", "feb", "mar", "apr",
                "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
            ],
            Self::German => &[
                "dr", "prof", "hr", "fr", "bzw", "usw", "ca", "nr", "str", "evtl", "ggf", "vgl",
                "sog", "inkl", "zzgl", "bspw", "abs", "jh", "mio", "mrd", "st",
            ],
            Self::French => &[
                "m", "mm", "mme", "mmes", "mlle", "dr", "pr", "me", "av", "bd", "etc", "cf",
                "env", "st", "ste", "vol", "chap", "p",
            ],
            Self::Spanish => &[
                "sr", "sra", "srta", "sres", "dr", "dra", "d", "dña", "ud", "uds", "etc", "av",
                "núm", "pág", "aprox", "lic", "ing", "prof", "sto", "sta",
            ],
        }
    }
}

/// Splits text into sentences.
///
/// Terminal punctuation followed by a lowercase word never ends a sentence.
/// A period additionally needs the word before it to be neither a known
/// abbreviation nor an initial or dotted acronym. Blank lines always end a
/// sentence.
///
/// # Examples
///
/// ```
/// use storyteller_pipeline::SentenceSplitter;
///
/// let splitter = SentenceSplitter::default();
/// assert_eq!(
///     splitter.split("Mr. Smith arrived. He was late! Was he?"),
///     vec!["Mr. Smith arrived.", "He was late!", "Was he?"]
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SentenceSplitter {
    language: Language,
}

impl SentenceSplitter {
    /// Splitter for `language`.
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Language in use.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Split `text` into trimmed, non-empty sentences in order.
    pub fn split(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut start = 0;

        for caps in BOUNDARY.captures_iter(text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };

            let end = match caps.name("term") {
                Some(term) => {
                    let gap = &text[term.end()..whole.end()];
                    let rest = &text[whole.end()..];
                    if !BLANK_LINE.is_match(gap)
                        && !self.ends_sentence(&text[start..term.start()], term.as_str(), rest)
                    {
                        continue;
                    }
                    term.end()
                }
                None => whole.start(),
            };

            push_trimmed(&mut sentences, &text[start..end]);
            start = whole.end();
        }
        push_trimmed(&mut sentences, &text[start..]);

        debug!(
            language = %self.language,
            sentences = sentences.len(),
            "Text split into sentences"
        );
        sentences
    }

    fn ends_sentence(&self, before: &str, term: &str, rest: &str) -> bool {
        // A lowercase continuation belongs to the same sentence
        if rest.chars().next().is_some_and(char::is_lowercase) {
            return false;
        }
        if !term.starts_with('.') || term.starts_with("..") {
            return true;
        }

        let word = before
            .split_whitespace()
            .next_back()
            .unwrap_or_default()
            .trim_start_matches(|c: char| !c.is_alphanumeric());
        if word.is_empty() {
            return true;
        }

        let is_initial = word.chars().count() == 1 && word.chars().all(char::is_alphabetic);
        let is_dotted = word.contains('.');
        let lower = word.to_lowercase();

        !(is_initial || is_dotted || self.language.abbreviations().contains(&lower.as_str()))
    }
}

fn push_trimmed(sentences: &mut Vec<String>, candidate: &str) {
    let sentence = candidate.trim();
    if !sentence.is_empty() {
        sentences.push(sentence.to_string());
    }
}
