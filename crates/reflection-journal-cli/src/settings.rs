//! Maps the configuration file onto engine types.

use chrono::Duration;
use reflection_journal_config::{CommentRules, ScriptureConfig};
use reflection_journal_engine::{ScriptureLookup, ValidationRules};

pub fn validation_rules(rules: &CommentRules) -> ValidationRules {
    ValidationRules {
        min_chars: rules.min_chars,
        max_chars: rules.max_chars,
        max_links: rules.max_links,
        cooldown: Duration::seconds(i64::from(rules.cooldown_secs)),
    }
}

pub fn scripture_lookup(scripture: &ScriptureConfig) -> ScriptureLookup {
    ScriptureLookup::new(&scripture.lookup_url, &scripture.version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_agree_with_engine() {
        assert_eq!(
            validation_rules(&CommentRules::default()),
            ValidationRules::default()
        );
        assert_eq!(
            scripture_lookup(&ScriptureConfig::default()),
            ScriptureLookup::default()
        );
    }
}
