use std::sync::LazyLock;

use regex::Regex;

use crate::models::stance::Stance;

// Case folding is ASCII only: `[Diſagree]` is not a tag.
static STANCE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\[(?i-u:(agree|disagree|question|insight|resource|prayer))\]\s*")
        .expect("stance tag pattern is valid")
});

/// A comment body split into its declared stance and the text to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StanceClassification<'a> {
    /// `None` when the body carries no recognised tag. That is a valid,
    /// permanent state: the comment simply shows without a badge.
    pub stance: Option<Stance>,
    pub display_body: &'a str,
}

/// Extracts a leading `[Tag]` (ASCII case ignored, surrounding whitespace allowed).
///
/// The tag and the whitespace after it are removed; nothing else is trimmed.
/// Without a tag the input is returned untouched.
pub fn parse_stance(input: &str) -> StanceClassification<'_> {
    let tagged = STANCE_TAG.captures(input).and_then(|caps| {
        let (prefix, [tag]) = caps.extract();
        Some((tag.parse::<Stance>().ok()?, prefix.len()))
    });
    let Some((stance, tag_len)) = tagged else {
        return StanceClassification {
            stance: None,
            display_body: input,
        };
    };

    StanceClassification {
        stance: Some(stance),
        display_body: &input[tag_len..],
    }
}

/// True when `input` opens with a recognised stance tag.
pub fn has_stance_tag(input: &str) -> bool {
    parse_stance(input).stance.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("agree", Stance::Agree)]
    #[case("disagree", Stance::Disagree)]
    #[case("question", Stance::Question)]
    #[case("insight", Stance::Insight)]
    #[case("resource", Stance::Resource)]
    #[case("prayer", Stance::Prayer)]
    fn tag_round_trip(#[case] tag: &str, #[case] stance: Stance) {
        let body = "Grace abounds here.";
        let raw = format!("[{tag}] {body}");

        let first = parse_stance(&raw);
        assert_eq!(first.stance, Some(stance));
        assert_eq!(first.display_body, body);

        let second = parse_stance(first.display_body);
        assert_eq!(second.stance, None);
        assert_eq!(second.display_body, body);
    }

    #[test]
    fn tag_is_case_insensitive() {
        let parsed = parse_stance("[DisAgree]Not so.");
        assert_eq!(parsed.stance, Some(Stance::Disagree));
        assert_eq!(parsed.display_body, "Not so.");
    }

    #[test]
    fn leading_whitespace_before_tag_is_consumed() {
        let parsed = parse_stance("  \n[Prayer]\n  Lord, hear us.  ");
        assert_eq!(parsed.stance, Some(Stance::Prayer));
        assert_eq!(parsed.display_body, "Lord, hear us.  ");
    }

    #[rstest]
    #[case("No tag at all")]
    #[case("I [agree] mid-sentence")]
    #[case("[rant] unknown tag")]
    #[case("agree] missing bracket")]
    #[case("[Diſagree] long s is not an ASCII s")]
    #[case("")]
    #[case("   ")]
    fn untagged_input_is_returned_unchanged(#[case] input: &str) {
        let parsed = parse_stance(input);
        assert_eq!(parsed.stance, None);
        assert_eq!(parsed.display_body, input);
    }

    #[test]
    fn has_stance_tag_matches_parse() {
        assert!(has_stance_tag("[Insight] Look at the Greek."));
        assert!(!has_stance_tag("Look at the Greek."));
        assert!(!has_stance_tag("[Diſagree] Look at the Greek."));
    }
}
