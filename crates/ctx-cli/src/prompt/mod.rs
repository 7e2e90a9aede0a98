//! Interactive prompt primitives the session is written against.

mod terminal;

#[cfg(test)]
pub mod scripted;

pub use terminal::TerminalPrompter;

/// Prompt and console surface of an interactive run.
///
/// Output methods are best-effort; a failed write never aborts the session.
pub trait Prompter {
    /// Pick one of `options`.
    fn select(&mut self, prompt: &str, options: &[String]) -> anyhow::Result<String>;

    /// Pick any subset of `options`, with `defaults` pre-checked.
    fn multiselect(
        &mut self,
        prompt: &str,
        options: &[String],
        defaults: &[String],
    ) -> anyhow::Result<Vec<String>>;

    /// Free-text input with suggestions drawn from `candidates`.
    ///
    /// Returns the empty string when the user submits nothing.
    fn suggest(&mut self, prompt: &str, candidates: &[String]) -> anyhow::Result<String>;

    fn info(&mut self, message: &str);
    fn warn(&mut self, message: &str);
    fn success(&mut self, message: &str);
    fn note(&mut self, title: &str, body: &str);
}

/// Case-insensitive substring matches of `term` among `candidates`, in order.
#[must_use]
pub fn matching<'a>(candidates: &'a [String], term: &str) -> Vec<&'a String> {
    let term = term.to_lowercase();
    candidates
        .iter()
        .filter(|candidate| candidate.to_lowercase().contains(&term))
        .collect()
}
