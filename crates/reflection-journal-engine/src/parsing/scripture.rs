//! Bible reference recognition.
//!
//! The book list is a closed set of canonical names and common abbreviations.
//! A reference is a book, whitespace, a chapter of one to three digits, an
//! optional `:verse` with an optional `-verse`, and an optional second range
//! segment (`John 3:16 – 18`, `John 3:16 - 4:1`). Cross-chapter ranges are
//! accepted as written and not checked for sense.
//!
//! A reference never ends inside a longer number. When the longest match runs
//! into a fourth digit it is cut back to the longest shorter reference that
//! does not (`John 3:16-2024` links `John 3:16`); when there is none the
//! candidate is dropped (`John 1234`).

use std::sync::LazyLock;

use regex::Regex;

const BOOK: &str = r"(?:(?:1|2|3)\s*)?(?:Genesis|Gen|Exodus|Exod|Leviticus|Lev|Numbers|Num|Deuteronomy|Deut|Dt|Joshua|Josh|Judges|Judg|Ruth|1\s*Samuel|2\s*Samuel|1\s*Kings|2\s*Kings|1\s*Chronicles|2\s*Chronicles|Ezra|Nehemiah|Neh|Esther|Job|Psalms?|Ps|Proverbs?|Prov|Ecclesiastes|Ecc|Song(?:\s+of\s+(?:Songs|Solomon))?|Isaiah|Isa|Jeremiah|Jer|Lamentations|Lam|Ezekiel|Ezek|Daniel|Dan|Hosea|Hos|Joel|Amos|Obadiah|Obad|Jonah|Micah|Nahum|Nah|Habakkuk|Hab|Zephaniah|Zeph|Haggai|Hag|Zechariah|Zech|Malachi|Mal|Matthew|Matt|Mt|Mark|Mk|Luke|Lk|John|Jn|Acts|Romans|Rom|1\s*Corinthians|2\s*Corinthians|Galatians|Gal|Ephesians|Eph|Philippians|Phil|Colossians|Col|1\s*Thessalonians|2\s*Thessalonians|1\s*Timothy|2\s*Timothy|Titus|Philemon|Hebrews|Heb|James|Jas|1\s*Peter|2\s*Peter|1\s*John|2\s*John|3\s*John|Jude|Revelation|Rev)";
const CHAPTER_VERSE: &str = r"\s+[0-9]{1,3}(?::[0-9]{1,3}(?:[–-][0-9]{1,3})?)?";
const RANGE: &str = r"(?:\s*[–-]\s*[0-9]{1,3}(?::[0-9]{1,3})?)?";

static REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?i){BOOK}{CHAPTER_VERSE}{RANGE}"))
        .expect("scripture reference pattern is valid")
});
static WHOLE_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^(?i:{BOOK}{CHAPTER_VERSE}{RANGE})$"))
        .expect("scripture reference pattern is valid")
});

/// Default passage lookup site.
pub const DEFAULT_LOOKUP_URL: &str = "https://www.biblegateway.com/passage/";
/// Default translation passed to the lookup site.
pub const DEFAULT_VERSION: &str = "KJV";

/// Builds external lookup URLs for matched references. No network access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptureLookup {
    pub base_url: String,
    pub version: String,
}

impl ScriptureLookup {
    pub fn new(base_url: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            version: version.into(),
        }
    }

    /// `<base>?search=<reference>&version=<version>`, with internal whitespace
    /// of the reference collapsed and both values percent-encoded.
    pub fn url_for(&self, reference: &str) -> String {
        let query = reference.split_whitespace().collect::<Vec<_>>().join(" ");
        format!(
            "{}?search={}&version={}",
            self.base_url,
            urlencoding::encode(&query),
            urlencoding::encode(&self.version)
        )
    }
}

impl Default for ScriptureLookup {
    fn default() -> Self {
        Self::new(DEFAULT_LOOKUP_URL, DEFAULT_VERSION)
    }
}

/// One recognised reference: byte offsets into the scanned text and the
/// matched slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptureMatch<'t> {
    pub start: usize,
    pub end: usize,
    pub text: &'t str,
}

impl ScriptureMatch<'_> {
    pub fn lookup_url(&self, lookup: &ScriptureLookup) -> String {
        lookup.url_for(self.text)
    }
}

/// Lazy, leftmost, non-overlapping scan of `text` for references.
///
/// Each call starts a fresh scan; the iterator holds no state beyond its own
/// position.
pub fn find_references(text: &str) -> ScriptureMatches<'_> {
    ScriptureMatches { text, pos: 0 }
}

pub struct ScriptureMatches<'t> {
    text: &'t str,
    pos: usize,
}

impl<'t> Iterator for ScriptureMatches<'t> {
    type Item = ScriptureMatch<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.text.len() {
            let m = REFERENCE.find_at(self.text, self.pos)?;

            let end = if followed_by_digit(self.text, m.end()) {
                shorter_reference(self.text, m.start(), m.end())
            } else {
                Some(m.end())
            };
            let Some(end) = end else {
                let first = self.text[m.start()..].chars().next().map_or(1, char::len_utf8);
                self.pos = m.start() + first;
                continue;
            };

            self.pos = end;
            return Some(ScriptureMatch {
                start: m.start(),
                end,
                text: &self.text[m.start()..end],
            });
        }
        None
    }
}

fn followed_by_digit(text: &str, at: usize) -> bool {
    text[at..].starts_with(|c: char| c.is_ascii_digit())
}

/// End of the longest reference inside `text[start..end]` that starts at
/// `start` and is not followed by a digit.
fn shorter_reference(text: &str, start: usize, end: usize) -> Option<usize> {
    (start + 1..end).rev().find(|&cut| {
        text.is_char_boundary(cut)
            && !followed_by_digit(text, cut)
            && WHOLE_REFERENCE.is_match(&text[start..cut])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn matched(text: &str) -> Vec<&str> {
        find_references(text).map(|m| m.text).collect()
    }

    #[rstest]
    #[case("John 3:16")]
    #[case("1 John 4:7–8")]
    #[case("Gen 1:1-3")]
    #[case("Rev 21:1")]
    #[case("john 3:16")]
    #[case("PSALM 23")]
    #[case("Song of Solomon 2:4")]
    #[case("2 Corinthians 5:17")]
    #[case("John 3:16–18")]
    #[case("John 3:16 – 4:1")]
    #[case("1Corinthians 13")]
    fn whole_reference_matches(#[case] reference: &str) {
        assert_eq!(matched(reference), vec![reference]);
    }

    #[rstest]
    #[case("John")]
    #[case("John wrote this")]
    #[case("John 1234")]
    #[case("")]
    fn no_reference(#[case] text: &str) {
        assert!(matched(text).is_empty(), "unexpected match in {text:?}");
    }

    #[test]
    fn adjacent_cross_chapter_range_stops_at_chapter() {
        // The verse range claims "–4" before the second segment gets a chance.
        assert_eq!(matched("John 3:16–4:1"), vec!["John 3:16–4"]);
    }

    #[rstest]
    #[case("John 3:16-2024 says", vec!["John 3:16"])]
    #[case("Romans 3:2300", vec!["Romans 3"])]
    #[case("Gen 1:1 - 20000 and more", vec!["Gen 1:1"])]
    fn overlong_number_falls_back_to_shorter_reference(
        #[case] text: &str,
        #[case] expected: Vec<&str>,
    ) {
        assert_eq!(matched(text), expected);
    }

    #[test]
    fn offsets_point_into_text() {
        let text = "See Rom 8:28 and Heb 11:1 today.";
        let found: Vec<_> = find_references(text).collect();
        assert_eq!(found.len(), 2);
        for m in &found {
            assert_eq!(&text[m.start..m.end], m.text);
        }
        assert_eq!(found[0].text, "Rom 8:28");
        assert_eq!(found[1].text, "Heb 11:1");
    }

    #[test]
    fn scan_is_restartable() {
        let text = "Mark 1:1 then Luke 2:1";
        assert_eq!(matched(text), matched(text));
    }

    #[test]
    fn lookup_url_collapses_whitespace_and_encodes() {
        let lookup = ScriptureLookup::default();
        assert_eq!(
            lookup.url_for("1  John\t4:7–8"),
            "https://www.biblegateway.com/passage/?search=1%20John%204%3A7%E2%80%938&version=KJV"
        );
    }

    #[test]
    fn lookup_url_uses_configured_version() {
        let lookup = ScriptureLookup::new("https://example.org/p", "ESV");
        let m = find_references("Job 38").next().unwrap();
        assert_eq!(
            m.lookup_url(&lookup),
            "https://example.org/p?search=Job%2038&version=ESV"
        );
    }
}
