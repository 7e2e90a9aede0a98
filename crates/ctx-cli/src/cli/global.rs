/// Flags shared by the command handler and the UI layer.
#[derive(Clone, Debug, Default)]
pub struct GlobalFlags {
    pub quiet: bool,
    pub verbose: bool,
    pub project: Option<String>,
    pub output: Option<String>,
    pub store: Option<String>,
}
