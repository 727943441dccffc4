use crate::domain::model::Stage;
use crate::domain::ports::TextStage;
use crate::utils::error::Result;
use regex::Regex;
use std::sync::OnceLock;

/// ASCII whitespace only; NBSP and other Unicode spaces are kept.
const WHITESPACE_RUN: &str = r"[ \t\n\x0B\x0C\r]+";

static WHITESPACE: OnceLock<Regex> = OnceLock::new();

fn whitespace() -> Result<&'static Regex> {
    if let Some(re) = WHITESPACE.get() {
        return Ok(re);
    }
    let re = Regex::new(WHITESPACE_RUN)?;
    Ok(WHITESPACE.get_or_init(|| re))
}

/// Strips leading and trailing chars at or below U+0020, control chars included.
pub fn trim(input: &str) -> String {
    input.trim_matches(|c: char| c <= ' ').to_string()
}

/// Replaces each maximal run of whitespace with a single space.
pub fn collapse(input: &str) -> Result<String> {
    Ok(whitespace()?.replace_all(input, " ").into_owned())
}

/// Reverses by `char`, not by word or grapheme.
pub fn reverse(input: &str) -> String {
    input.chars().rev().collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Trim;

impl TextStage for Trim {
    fn stage(&self) -> Stage {
        Stage::Trim
    }

    fn apply(&self, input: &str) -> String {
        trim(input)
    }
}

#[derive(Debug, Clone)]
pub struct Collapse {
    whitespace: Regex,
}

impl Collapse {
    pub fn new() -> Result<Self> {
        Ok(Self {
            whitespace: whitespace()?.clone(),
        })
    }
}

impl TextStage for Collapse {
    fn stage(&self) -> Stage {
        Stage::Collapse
    }

    fn apply(&self, input: &str) -> String {
        self.whitespace.replace_all(input, " ").into_owned()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Reverse;

impl TextStage for Reverse {
    fn stage(&self) -> Stage {
        Stage::Reverse
    }

    fn apply(&self, input: &str) -> String {
        reverse(input)
    }
}

/// Builds the stage for `stage`.
pub fn stage_for(stage: Stage) -> Result<Box<dyn TextStage>> {
    Ok(match stage {
        Stage::Trim => Box::new(Trim),
        Stage::Collapse => Box::new(Collapse::new()?),
        Stage::Reverse => Box::new(Reverse),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim() {
        assert_eq!(trim("The sky is    blue  "), "The sky is    blue");
        assert_eq!(trim("\t\n word \r\n"), "word");
        assert_eq!(trim("   "), "");
        assert_eq!(trim(""), "");
    }

    #[test]
    fn test_collapse() {
        assert_eq!(collapse("The sky is    blue").unwrap(), "The sky is blue");
        assert_eq!(collapse("a\t\tb\n\nc").unwrap(), "a b c");
        assert_eq!(collapse("nowhitespace").unwrap(), "nowhitespace");
        assert_eq!(collapse("").unwrap(), "");
    }

    #[test]
    fn test_trim_strips_control_chars_but_not_unicode_spaces() {
        assert_eq!(trim("\u{1}ab\u{1}"), "ab");
        assert_eq!(trim("\u{0}\u{1f} ab\u{b}"), "ab");
        assert_eq!(trim("\u{a0}ab\u{2003}"), "\u{a0}ab\u{2003}");
    }

    #[test]
    fn test_collapse_keeps_unicode_spaces() {
        assert_eq!(collapse("a\u{a0}\u{a0}b").unwrap(), "a\u{a0}\u{a0}b");
        assert_eq!(collapse("a\u{2003} \u{2003}b").unwrap(), "a\u{2003} \u{2003}b");
        assert_eq!(collapse("a\u{b}\u{c} \r\nb").unwrap(), "a b");
        assert_eq!(collapse("a\u{1}\u{1}b").unwrap(), "a\u{1}\u{1}b");
    }

    #[test]
    fn test_stages_with_unicode_spaces() {
        let input = "\u{a0}a\u{2003}b\u{a0}";
        let result = reverse(&collapse(&trim(input)).unwrap());
        assert_eq!(result, "\u{a0}b\u{2003}a\u{a0}");
    }

    #[test]
    fn test_collapse_stage_matches_free_function() {
        let stage = Collapse::new().unwrap();
        for input in ["x  y", "a\t\n b", "\u{a0} \u{a0}"] {
            assert_eq!(stage.apply(input), collapse(input).unwrap());
        }
    }

    #[test]
    fn test_collapse_is_idempotent() {
        for input in ["The sky is    blue", "  a  b  ", "x\t \ny", "", "single"] {
            let once = collapse(input).unwrap();
            let twice = collapse(&once).unwrap();
            assert_eq!(once, twice, "collapse not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_reverse() {
        assert_eq!(reverse("The sky is blue"), "eulb si yks ehT");
        assert_eq!(reverse(""), "");
        assert_eq!(reverse("a"), "a");
    }

    #[test]
    fn test_reverse_is_self_inverse() {
        for input in ["The sky is blue", "ab cd", "héllo wörld", "", "x"] {
            assert_eq!(reverse(&reverse(input)), input);
        }
    }

    #[test]
    fn test_stage_for_matches_stage() {
        for stage in Stage::ALL {
            assert_eq!(stage_for(stage).unwrap().stage(), stage);
        }
    }
}
