//! File selection state threaded through the search loop.

/// Result of offering one input to a [`FileSelection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Added(String),
    AlreadySelected(String),
    Invalid(String),
    /// Empty input; the loop is over.
    Done,
}

/// Selected files plus the candidates still open for selection.
///
/// `remaining` is always the candidate list minus `selected`, in candidate
/// order.
#[derive(Debug, Clone, Default)]
pub struct FileSelection {
    selected: Vec<String>,
    remaining: Vec<String>,
}

impl FileSelection {
    #[must_use]
    pub const fn new(candidates: Vec<String>) -> Self {
        Self {
            selected: Vec::new(),
            remaining: candidates,
        }
    }

    /// Select `paths` up front, e.g. from a stored setup.
    ///
    /// Returns the paths that are no longer candidates; those are dropped.
    pub fn preselect(&mut self, paths: &[String]) -> Vec<String> {
        paths
            .iter()
            .filter_map(|path| match self.offer(path) {
                FileOutcome::Invalid(path) => Some(path),
                _ => None,
            })
            .collect()
    }

    /// Apply one line of user input.
    pub fn offer(&mut self, input: &str) -> FileOutcome {
        let input = input.trim();
        if input.is_empty() {
            return FileOutcome::Done;
        }
        if self.selected.iter().any(|path| path == input) {
            return FileOutcome::AlreadySelected(input.to_string());
        }

        match self.remaining.iter().position(|path| path == input) {
            Some(index) => {
                let path = self.remaining.remove(index);
                self.selected.push(path.clone());
                FileOutcome::Added(path)
            }
            None => FileOutcome::Invalid(input.to_string()),
        }
    }

    #[must_use]
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    #[must_use]
    pub fn remaining(&self) -> &[String] {
        &self.remaining
    }

    #[must_use]
    pub fn into_selected(self) -> Vec<String> {
        self.selected
    }
}
