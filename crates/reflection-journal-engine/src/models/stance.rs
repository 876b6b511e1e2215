use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The rhetorical stance a commenter declares with a leading `[Tag]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stance {
    Agree,
    Disagree,
    Question,
    Insight,
    Resource,
    Prayer,
}

impl Stance {
    /// Every stance, in the order filter chips are shown.
    pub const ALL: [Stance; 6] = [
        Stance::Agree,
        Stance::Disagree,
        Stance::Question,
        Stance::Insight,
        Stance::Resource,
        Stance::Prayer,
    ];

    /// Lowercase tag name, as used in `?stance=` and inside the brackets.
    pub fn as_str(self) -> &'static str {
        match self {
            Stance::Agree => "agree",
            Stance::Disagree => "disagree",
            Stance::Question => "question",
            Stance::Insight => "insight",
            Stance::Resource => "resource",
            Stance::Prayer => "prayer",
        }
    }

    /// Capitalised badge label.
    pub fn label(self) -> &'static str {
        match self {
            Stance::Agree => "Agree",
            Stance::Disagree => "Disagree",
            Stance::Question => "Question",
            Stance::Insight => "Insight",
            Stance::Resource => "Resource",
            Stance::Prayer => "Prayer",
        }
    }

    /// Position within [`Stance::ALL`].
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Stance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown stance: {0}")]
pub struct UnknownStance(pub String);

impl FromStr for Stance {
    type Err = UnknownStance;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stance::ALL
            .into_iter()
            .find(|stance| stance.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownStance(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_any_casing() {
        assert_eq!("DISAGREE".parse::<Stance>(), Ok(Stance::Disagree));
        assert_eq!("Prayer".parse::<Stance>(), Ok(Stance::Prayer));
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(
            "rant".parse::<Stance>(),
            Err(UnknownStance("rant".to_string()))
        );
    }

    #[test]
    fn index_follows_chip_order() {
        for (i, stance) in Stance::ALL.into_iter().enumerate() {
            assert_eq!(stance.index(), i);
        }
    }

    #[test]
    fn label_capitalises_name() {
        for stance in Stance::ALL {
            let name = stance.as_str();
            let expected = format!("{}{}", name[..1].to_uppercase(), &name[1..]);
            assert_eq!(stance.label(), expected);
        }
    }
}
