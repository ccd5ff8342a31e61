//! Colored terminal output utilities.

use console::{Style, Term};

/// Terminal output formatter.
///
/// Command results go to stdout; diagnostics go to stderr.
pub(crate) struct Output {
    out: Term,
    err: Term,
    red: Style,
    cyan_bold: Style,
    dim: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            red: Style::new().red(),
            cyan_bold: Style::new().cyan().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Print a result line to stdout.
    pub(crate) fn result(&self, msg: &str) {
        let _ = self.out.write_line(msg);
    }

    /// Print an info message.
    pub(crate) fn info(&self, msg: &str) {
        let _ = self.err.write_line(msg);
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.err.write_line(&self.red.apply_to(msg).to_string());
    }

    /// Style a directory name (cyan bold).
    pub(crate) fn directory(&self, name: &str) -> String {
        self.cyan_bold.apply_to(name).to_string()
    }

    /// Style secondary detail such as ids (dim).
    pub(crate) fn detail(&self, text: &str) -> String {
        self.dim.apply_to(text).to_string()
    }
}
