//! Sentence segmentation and filler injection
//!
//! Sentences end at `.`, `!` or `?` followed by whitespace. The terminator
//! stays with its sentence; the whitespace after it is dropped and restored
//! as a single space on rejoin.

use humanizer_core::RandomSource;
use once_cell::sync::Lazy;
use regex::Regex;

/// Conversational openers prepended to sentences
pub const FILLERS: [&str; 8] = [
    "Well, ",
    "Actually, ",
    "You know, ",
    "I mean, ",
    "Honestly, ",
    "To be fair, ",
    "Look, ",
    "Here's the thing - ",
];

/// A sentence already opening with one of these gets no extra filler
static FILLER_OPENING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(Well|Actually|You know|I mean|Honestly|To be fair|Look|Here's)").unwrap()
});

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Split `text` into sentences.
///
/// Text ending in a terminator plus whitespace yields a trailing empty
/// segment, so `join(segment(t))` only differs from `t` in separator width.
pub fn segment(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_terminator(c) {
            continue;
        }
        let end = i + c.len_utf8();
        if !chars.peek().is_some_and(|&(_, next)| next.is_whitespace()) {
            continue;
        }

        sentences.push(&text[start..end]);
        start = end;
        while let Some(&(j, next)) = chars.peek() {
            if !next.is_whitespace() {
                break;
            }
            start = j + next.len_utf8();
            chars.next();
        }
    }

    sentences.push(&text[start..]);
    sentences
}

/// Rejoin sentences with single spaces, in order
pub fn join<S: AsRef<str>>(sentences: &[S]) -> String {
    sentences
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether `sentence` already starts with a filler
pub fn starts_with_filler(sentence: &str) -> bool {
    FILLER_OPENING.is_match(sentence)
}

/// Result of a filler pass
#[derive(Debug, Clone)]
pub struct InjectedFillers {
    pub text: String,
    pub sentences: usize,
    /// Fillers actually prepended
    pub injected: usize,
}

/// Prepends conversational fillers to sentences at random
#[derive(Debug, Clone, Copy)]
pub struct FillerInjector {
    probability: f64,
}

impl FillerInjector {
    /// `probability` is the independent per-sentence injection chance
    pub fn new(probability: f64) -> Self {
        Self { probability }
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Possibly prepend a filler to one sentence.
    ///
    /// A filler is picked whenever the injection draw succeeds, even if the
    /// sentence already opens with a filler and is left alone. Empty
    /// sentences take no draws.
    pub fn inject(&self, sentence: &str, rng: &mut dyn RandomSource) -> Option<String> {
        if sentence.is_empty() || !rng.chance(self.probability) {
            return None;
        }

        let filler = FILLERS[rng.pick_index(FILLERS.len())];
        if starts_with_filler(sentence) {
            return None;
        }

        let mut chars = sentence.chars();
        let first = chars.next()?;
        let mut out = String::with_capacity(filler.len() + sentence.len());
        out.push_str(filler);
        out.extend(first.to_lowercase());
        out.push_str(chars.as_str());
        Some(out)
    }

    /// Segment `text`, inject fillers, rejoin
    pub fn apply(&self, text: &str, rng: &mut dyn RandomSource) -> InjectedFillers {
        let sentences = segment(text);
        let mut injected = 0;

        let rewritten: Vec<String> = sentences
            .iter()
            .map(|sentence| match self.inject(sentence, rng) {
                Some(with_filler) => {
                    injected += 1;
                    with_filler
                },
                None => sentence.to_string(),
            })
            .collect();

        InjectedFillers {
            text: join(&rewritten),
            sentences: sentences.len(),
            injected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{ScriptedRandom, StdRandom};

    #[test]
    fn test_segment_basic() {
        assert_eq!(
            segment("Hello there. How are you? Great!"),
            vec!["Hello there.", "How are you?", "Great!"]
        );
    }

    #[test]
    fn test_segment_requires_whitespace_after_terminator() {
        assert_eq!(segment("Version 2.5 is out."), vec!["Version 2.5 is out."]);
        assert_eq!(segment("Wait...what? Yes."), vec!["Wait...what?", "Yes."]);
    }

    #[test]
    fn test_segment_discards_whitespace_runs() {
        assert_eq!(segment("One.  \n\tTwo."), vec!["One.", "Two."]);
    }

    #[test]
    fn test_segment_trailing_whitespace() {
        assert_eq!(segment("Done. "), vec!["Done.", ""]);
        assert_eq!(segment(""), vec![""]);
        assert_eq!(segment("no terminator"), vec!["no terminator"]);
    }

    #[test]
    fn test_join_restores_single_spaces() {
        assert_eq!(join(&segment("A.   B!  C?")), "A. B! C?");
    }

    #[test]
    fn test_starts_with_filler() {
        assert!(starts_with_filler("Well, that's it."));
        assert!(starts_with_filler("honestly I agree"));
        assert!(starts_with_filler("Here's why."));
        assert!(!starts_with_filler("The well is deep."));
    }

    #[test]
    fn test_inject_lowercases_first_char() {
        let injector = FillerInjector::new(1.0);
        // 0.0 passes the chance draw and picks the first filler
        let mut rng = ScriptedRandom::constant(0.0);
        assert_eq!(
            injector.inject("This works.", &mut rng).as_deref(),
            Some("Well, this works.")
        );
    }

    #[test]
    fn test_inject_picks_uniformly_by_draw() {
        let injector = FillerInjector::new(1.0);
        let mut rng = ScriptedRandom::new([0.0, 0.9]);
        assert_eq!(
            injector.inject("Cats purr.", &mut rng).as_deref(),
            Some("Here's the thing - cats purr.")
        );
    }

    #[test]
    fn test_inject_skips_existing_filler_but_draws() {
        let injector = FillerInjector::new(1.0);
        let mut rng = ScriptedRandom::constant(0.0);
        assert!(injector.inject("Actually, no.", &mut rng).is_none());
        assert_eq!(rng.draws(), 2);
    }

    #[test]
    fn test_inject_probability_zero() {
        let injector = FillerInjector::new(0.0);
        let mut rng = StdRandom::seeded(5);
        let result = injector.apply("One. Two. Three.", &mut rng);
        assert_eq!(result.text, "One. Two. Three.");
        assert_eq!(result.injected, 0);
        assert_eq!(result.sentences, 3);
    }

    #[test]
    fn test_apply_preserves_order() {
        let injector = FillerInjector::new(1.0);
        let mut rng = ScriptedRandom::constant(0.0);
        let result = injector.apply("First one. Second one.", &mut rng);
        assert_eq!(result.text, "Well, first one. Well, second one.");
        assert_eq!(result.injected, 2);
    }

    #[test]
    fn test_apply_skips_empty_trailing_segment() {
        let injector = FillerInjector::new(1.0);
        let mut rng = ScriptedRandom::constant(0.0);
        let result = injector.apply("Only one. ", &mut rng);
        assert_eq!(result.text, "Well, only one. ");
        assert_eq!(result.injected, 1);
    }
}
