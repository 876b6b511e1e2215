//! Stance facets over a fetched batch of comments.
//!
//! Every comment is classified once when the view is built. Counts and the
//! "at a glance" preview are computed over the whole batch; only the visible
//! list depends on the active facet.

use url::form_urlencoded;

use crate::models::{
    comment::Comment,
    entry::{EXCERPT_CHARS, truncate},
    stance::Stance,
};

/// How many items each glance list holds at most.
pub const GLANCE_SIZE: usize = 3;

/// Query parameter carrying the active facet in a shareable location.
pub const FACET_PARAM: &str = "stance";

/// Shown in place of the list when the active facet matches nothing.
pub const EMPTY_FILTER_MESSAGE: &str = "No comments in this filter.";

/// The active stance filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facet {
    #[default]
    All,
    Stance(Stance),
}

impl Facet {
    /// Interprets a raw selector. Missing, empty or unknown values mean `All`.
    pub fn parse(value: Option<&str>) -> Facet {
        let Some(value) = value.filter(|v| !v.is_empty()) else {
            return Facet::All;
        };
        if value.eq_ignore_ascii_case("all") {
            return Facet::All;
        }
        match value.parse::<Stance>() {
            Ok(stance) => Facet::Stance(stance),
            Err(e) => {
                log::warn!("ignoring facet selector: {e}");
                Facet::All
            }
        }
    }

    /// Reads the facet from a query string such as `?stance=question&x=1`.
    pub fn from_query(query: &str) -> Facet {
        let query = query.strip_prefix('?').unwrap_or(query);
        let value = form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == FACET_PARAM)
            .map(|(_, value)| value.into_owned());
        Facet::parse(value.as_deref())
    }

    /// Writes this facet into `query`, keeping every other parameter.
    ///
    /// `All` removes the parameter. A stance replaces the first existing
    /// `stance` pair in place, or is appended when there was none.
    pub fn to_query(self, query: &str) -> String {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut out = form_urlencoded::Serializer::new(String::new());
        let mut written = false;

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            if key != FACET_PARAM {
                out.append_pair(&key, &value);
                continue;
            }
            if let Facet::Stance(stance) = self
                && !written
            {
                out.append_pair(FACET_PARAM, stance.as_str());
                written = true;
            }
        }

        if let Facet::Stance(stance) = self
            && !written
        {
            out.append_pair(FACET_PARAM, stance.as_str());
        }
        out.finish()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Facet::All => "all",
            Facet::Stance(stance) => stance.as_str(),
        }
    }

    /// Chip label.
    pub fn label(self) -> &'static str {
        match self {
            Facet::All => "All",
            Facet::Stance(stance) => stance.label(),
        }
    }

    pub fn matches(self, stance: Option<Stance>) -> bool {
        match self {
            Facet::All => true,
            Facet::Stance(wanted) => stance == Some(wanted),
        }
    }

    /// `All`, then every stance in chip order.
    pub fn choices() -> impl Iterator<Item = Facet> {
        std::iter::once(Facet::All).chain(Stance::ALL.into_iter().map(Facet::Stance))
    }

    /// Next facet in chip order, wrapping back to `All`.
    pub fn cycle(self) -> Facet {
        match self {
            Facet::All => Facet::Stance(Stance::ALL[0]),
            Facet::Stance(stance) => Stance::ALL
                .get(stance.index() + 1)
                .copied()
                .map_or(Facet::All, Facet::Stance),
        }
    }
}

/// Number of comments per facet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FacetCounts {
    all: usize,
    by_stance: [usize; Stance::ALL.len()],
}

impl FacetCounts {
    pub fn tally(stances: impl IntoIterator<Item = Option<Stance>>) -> Self {
        let mut counts = FacetCounts::default();
        for stance in stances {
            counts.all += 1;
            if let Some(stance) = stance {
                counts.by_stance[stance.index()] += 1;
            }
        }
        counts
    }

    pub fn all(&self) -> usize {
        self.all
    }

    pub fn stance(&self, stance: Stance) -> usize {
        self.by_stance[stance.index()]
    }

    pub fn get(&self, facet: Facet) -> usize {
        match facet {
            Facet::All => self.all,
            Facet::Stance(stance) => self.stance(stance),
        }
    }

    /// Comments counted under `All` only.
    pub fn untagged(&self) -> usize {
        self.all - self.by_stance.iter().sum::<usize>()
    }
}

/// A comment paired with its classification, computed once per view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedComment<'a> {
    pub comment: &'a Comment,
    pub stance: Option<Stance>,
    pub display_body: &'a str,
}

impl<'a> ClassifiedComment<'a> {
    pub fn new(comment: &'a Comment) -> Self {
        let classification = comment.classify();
        Self {
            comment,
            stance: classification.stance,
            display_body: classification.display_body,
        }
    }

    /// Shortened body for glance lists.
    pub fn preview(&self) -> String {
        truncate(self.display_body, EXCERPT_CHARS)
    }
}

/// Most recent disagreements and questions, independent of the facet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glance<'v, 'a> {
    pub disagreements: Vec<&'v ClassifiedComment<'a>>,
    pub questions: Vec<&'v ClassifiedComment<'a>>,
}

impl Glance<'_, '_> {
    /// Nothing to preview; the glance panel is not shown.
    pub fn is_empty(&self) -> bool {
        self.disagreements.is_empty() && self.questions.is_empty()
    }
}

/// A faceted view over one batch of comments.
#[derive(Debug, Clone)]
pub struct CommentView<'a> {
    comments: Vec<ClassifiedComment<'a>>,
    counts: FacetCounts,
    facet: Facet,
}

impl<'a> CommentView<'a> {
    pub fn new(comments: &'a [Comment], facet: Facet) -> Self {
        let comments: Vec<_> = comments.iter().map(ClassifiedComment::new).collect();
        let counts = FacetCounts::tally(comments.iter().map(|c| c.stance));
        log::debug!(
            "classified {} comments ({} untagged)",
            counts.all(),
            counts.untagged()
        );
        Self {
            comments,
            counts,
            facet,
        }
    }

    pub fn facet(&self) -> Facet {
        self.facet
    }

    pub fn set_facet(&mut self, facet: Facet) {
        self.facet = facet;
    }

    pub fn counts(&self) -> &FacetCounts {
        &self.counts
    }

    /// Every classified comment, in the order given.
    pub fn comments(&self) -> &[ClassifiedComment<'a>] {
        &self.comments
    }

    /// Comments matching the active facet, order preserved.
    pub fn visible(&self) -> Vec<&ClassifiedComment<'a>> {
        self.comments
            .iter()
            .filter(|c| self.facet.matches(c.stance))
            .collect()
    }

    /// Newest-first disagreements and questions, [`GLANCE_SIZE`] each.
    ///
    /// Comments without a timestamp sort as oldest.
    pub fn glance(&self) -> Glance<'_, 'a> {
        let mut newest: Vec<&ClassifiedComment<'a>> = self.comments.iter().collect();
        newest.sort_by(|a, b| b.comment.created_at.cmp(&a.comment.created_at));

        let take = |stance: Stance| -> Vec<&ClassifiedComment<'a>> {
            newest
                .iter()
                .copied()
                .filter(|c| c.stance == Some(stance))
                .take(GLANCE_SIZE)
                .collect()
        };

        Glance {
            disagreements: take(Stance::Disagree),
            questions: take(Stance::Question),
        }
    }
}
