//! `check` subcommand: runs a comment through the pre-submit checks.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use reflection_journal_engine::{
    CommentDraft, FileLastSubmission, Journal, NewComment, Rejection, SubmissionValidator,
};

pub const USAGE: &str =
    "check <entry-slug> <text> [--name <display-name>] [--honeypot <value>] [--journal <path>]";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckArgs {
    pub slug: String,
    pub text: String,
    pub name: String,
    pub honeypot: String,
    pub journal: Option<PathBuf>,
}

impl CheckArgs {
    /// Parses the arguments following `check`.
    pub fn parse(args: &[String]) -> Result<Self> {
        let mut positional = Vec::new();
        let mut parsed = CheckArgs::default();
        let mut args = args.iter();

        while let Some(arg) = args.next() {
            let mut value = |flag: &str| {
                args.next()
                    .cloned()
                    .with_context(|| format!("{flag} needs a value"))
            };
            match arg.as_str() {
                "--name" => parsed.name = value("--name")?,
                "--honeypot" => parsed.honeypot = value("--honeypot")?,
                "--journal" => parsed.journal = Some(PathBuf::from(value("--journal")?)),
                flag if flag.starts_with("--") => bail!("unknown option {flag}"),
                _ => positional.push(arg.clone()),
            }
        }

        let [slug, text] = <[String; 2]>::try_from(positional)
            .map_err(|_| anyhow::anyhow!("expected an entry slug and the comment text"))?;
        parsed.slug = slug;
        parsed.text = text;
        Ok(parsed)
    }
}

/// Checks one submission against `journal`, recording it in `store` when it
/// passes. The outer error is for problems with the request itself.
pub fn check(
    args: &CheckArgs,
    journal: &Journal,
    validator: &SubmissionValidator,
    store: &mut FileLastSubmission,
) -> Result<Result<NewComment, Rejection>> {
    let public = journal.public_view();
    let Some(entry) = public.entry_by_slug(&args.slug) else {
        bail!("no published entry with slug '{}'", args.slug);
    };

    let draft = CommentDraft {
        entry_id: entry.id,
        body: &args.text,
        display_name: &args.name,
        honeypot: &args.honeypot,
    };
    let outcome = validator.submit(&draft, store, Utc::now());
    match &outcome {
        Ok(_) => log::info!("comment on '{}' accepted", entry.slug),
        Err(rejection) => log::info!("comment on '{}' rejected: {rejection:?}", entry.slug),
    }
    Ok(outcome)
}
