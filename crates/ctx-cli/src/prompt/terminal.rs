//! `cliclack` prompts on the controlling terminal.

use std::io;

use super::{Prompter, matching};

const SEARCH_AGAIN: &str = "(search again)";

/// Prompter backed by `cliclack`.
pub struct TerminalPrompter {
    quiet: bool,
}

impl TerminalPrompter {
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

/// Items for the match picker: the matches, then an entry that hands the typed
/// term back unchanged.
fn match_items(term: &str, matches: &[&String]) -> Vec<(String, String)> {
    matches
        .iter()
        .map(|candidate| ((*candidate).clone(), (*candidate).clone()))
        .chain(std::iter::once((term.to_string(), SEARCH_AGAIN.to_string())))
        .collect()
}

/// Backing out of the match picker returns the typed term instead of aborting.
fn settle_pick(term: &str, picked: io::Result<String>) -> io::Result<String> {
    match picked {
        Err(error) if error.kind() == io::ErrorKind::Interrupted => Ok(term.to_string()),
        other => other,
    }
}

impl Prompter for TerminalPrompter {
    fn select(&mut self, prompt: &str, options: &[String]) -> anyhow::Result<String> {
        let mut select = cliclack::select(prompt);
        for option in options {
            select = select.item(option.clone(), option, "");
        }
        Ok(select.interact()?)
    }

    fn multiselect(
        &mut self,
        prompt: &str,
        options: &[String],
        defaults: &[String],
    ) -> anyhow::Result<Vec<String>> {
        if options.is_empty() {
            return Ok(Vec::new());
        }

        let mut select = cliclack::multiselect(prompt).required(false);
        for option in options {
            select = select.item(option.clone(), option, "");
        }
        Ok(select.initial_values(defaults.to_vec()).interact()?)
    }

    fn suggest(&mut self, prompt: &str, candidates: &[String]) -> anyhow::Result<String> {
        let term: String = cliclack::input(prompt)
            .placeholder("part of a path")
            .required(false)
            .interact()?;
        let term = term.trim().to_string();
        if term.is_empty() || candidates.contains(&term) {
            return Ok(term);
        }

        let matches = matching(candidates, &term);
        if matches.is_empty() {
            return Ok(term);
        }

        let mut select = cliclack::select(format!("Files matching '{term}'")).filter_mode();
        for (value, label) in match_items(&term, &matches) {
            select = select.item(value, label, "");
        }
        Ok(settle_pick(&term, select.interact())?)
    }

    fn info(&mut self, message: &str) {
        if !self.quiet {
            let _ = cliclack::log::info(message);
        }
    }

    fn warn(&mut self, message: &str) {
        let _ = cliclack::log::warning(message);
    }

    fn success(&mut self, message: &str) {
        if !self.quiet {
            let _ = cliclack::log::success(message);
        }
    }

    fn note(&mut self, title: &str, body: &str) {
        if !self.quiet && !body.is_empty() {
            let _ = cliclack::note(title, body);
        }
    }
}
