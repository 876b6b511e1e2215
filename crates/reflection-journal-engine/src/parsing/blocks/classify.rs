use std::sync::LazyLock;

use regex::Regex;

use super::types::Section;

static WHY_I_AGREE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?i-u:why i agree):").expect("heading pattern is valid"));
static WHY_I_WRESTLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?i-u:why i wrestle):").expect("heading pattern is valid"));
static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*]\s+").expect("bullet pattern is valid"));

/// Classification of a single line, on local facts only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// A section heading. Anything after the colon is dropped.
    Heading(Section),
    /// A bullet item; holds the text after the marker and its whitespace.
    Bullet(&'a str),
    /// Empty or whitespace only.
    Blank,
    /// Any other line, kept whole.
    Text(&'a str),
}

/// Classifies a line. Headings win over bullets, bullets over blanks.
pub fn classify_line(line: &str) -> LineClass<'_> {
    if WHY_I_AGREE.is_match(line) {
        return LineClass::Heading(Section::WhyIAgree);
    }
    if WHY_I_WRESTLE.is_match(line) {
        return LineClass::Heading(Section::WhyIWrestle);
    }
    if let Some(marker) = BULLET.find(line) {
        return LineClass::Bullet(&line[marker.end()..]);
    }
    if line.trim().is_empty() {
        return LineClass::Blank;
    }
    LineClass::Text(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Why I agree:", LineClass::Heading(Section::WhyIAgree))]
    #[case("   WHY I AGREE: and more", LineClass::Heading(Section::WhyIAgree))]
    #[case("why i wrestle:", LineClass::Heading(Section::WhyIWrestle))]
    #[case("Why I agree", LineClass::Text("Why I agree"))]
    #[case("Why I wreſtle:", LineClass::Text("Why I wreſtle:"))]
    #[case("- point", LineClass::Bullet("point"))]
    #[case("  *\tstarred", LineClass::Bullet("starred"))]
    #[case("- ", LineClass::Bullet(""))]
    #[case("-dash without space", LineClass::Text("-dash without space"))]
    #[case("", LineClass::Blank)]
    #[case(" \t ", LineClass::Blank)]
    #[case("It's hard.", LineClass::Text("It's hard."))]
    fn classify_cases(#[case] line: &str, #[case] expected: LineClass<'_>) {
        assert_eq!(classify_line(line), expected);
    }
}
