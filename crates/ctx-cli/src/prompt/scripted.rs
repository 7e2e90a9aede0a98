//! Prompter that replays canned answers and records what it was shown.

use std::collections::VecDeque;

use super::Prompter;

#[derive(Debug, Clone)]
pub enum Answer {
    Select(String),
    MultiSelect(Vec<String>),
    Suggest(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Said {
    Info(String),
    Warn(String),
    Success(String),
    Note(String, String),
}

#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    /// Console output, in order.
    pub said: Vec<Said>,
    /// Options of every `select`, in order.
    pub select_options: Vec<Vec<String>>,
    /// Defaults of every `multiselect`, in order.
    pub multiselect_defaults: Vec<Vec<String>>,
    /// Candidates of every `suggest`, in order.
    pub suggest_candidates: Vec<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn remaining_answers(&self) -> usize {
        self.answers.len()
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.said
            .iter()
            .filter_map(|said| match said {
                Said::Warn(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn infos(&self) -> Vec<&str> {
        self.said
            .iter()
            .filter_map(|said| match said {
                Said::Info(message) | Said::Success(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    fn next(&mut self) -> anyhow::Result<Answer> {
        self.answers
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("script ran out of answers"))
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, _prompt: &str, options: &[String]) -> anyhow::Result<String> {
        self.select_options.push(options.to_vec());
        match self.next()? {
            Answer::Select(choice) => Ok(choice),
            other => anyhow::bail!("expected a select answer, got {other:?}"),
        }
    }

    fn multiselect(
        &mut self,
        _prompt: &str,
        _options: &[String],
        defaults: &[String],
    ) -> anyhow::Result<Vec<String>> {
        self.multiselect_defaults.push(defaults.to_vec());
        match self.next()? {
            Answer::MultiSelect(choice) => Ok(choice),
            other => anyhow::bail!("expected a multiselect answer, got {other:?}"),
        }
    }

    fn suggest(&mut self, _prompt: &str, candidates: &[String]) -> anyhow::Result<String> {
        self.suggest_candidates.push(candidates.to_vec());
        match self.next()? {
            Answer::Suggest(input) => Ok(input),
            other => anyhow::bail!("expected a suggest answer, got {other:?}"),
        }
    }

    fn info(&mut self, message: &str) {
        self.said.push(Said::Info(message.to_string()));
    }

    fn warn(&mut self, message: &str) {
        self.said.push(Said::Warn(message.to_string()));
    }

    fn success(&mut self, message: &str) {
        self.said.push(Said::Success(message.to_string()));
    }

    fn note(&mut self, title: &str, body: &str) {
        self.said.push(Said::Note(title.to_string(), body.to_string()));
    }
}
