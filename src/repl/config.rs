use std::path::PathBuf;


/// Options shared by the interactive and batch front-ends.
#[derive(Clone, Debug, Default)]
pub struct ReplConfig {
    /// File to load prompt history from and save it to on exit.
    pub history: Option<PathBuf>,
    /// Print each parse tree before evaluating it.
    pub show_ast: bool,
}

impl ReplConfig {
    pub fn with_history<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.history = Some(path.into());
        self
    }

    pub fn with_ast(mut self, show_ast: bool) -> Self {
        self.show_ast = show_ast;
        self
    }
}
