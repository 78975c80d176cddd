//! Which of the three output shapes a command prints.

use crate::cli::ListFormat;

use super::context::Terminal;

/// Output shape for one command run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// A single JSON document on stdout
    Json,
    /// `key=value` lines and bare item rows for scripts
    #[default]
    Plain,
    /// Headers, checkbox tables and badges
    Pretty,
}

impl OutputMode {
    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}

/// Output flags a command was invoked with.
///
/// Only `list` takes `--format`; every other command just has `--json`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputRequest {
    pub json: bool,
    pub format: Option<ListFormat>,
}

impl OutputRequest {
    pub fn json(json: bool) -> Self {
        Self { json, format: None }
    }

    pub fn list(json: bool, format: Option<ListFormat>) -> Self {
        Self { json, format }
    }

    /// `--json` beats `--format`; an explicit format beats the terminal.
    /// Without either, pretty output needs a real (non-dumb) terminal.
    pub fn mode(&self, term: &Terminal) -> OutputMode {
        if self.json {
            return OutputMode::Json;
        }
        match self.format {
            Some(ListFormat::Table) => OutputMode::Pretty,
            Some(ListFormat::Plain) => OutputMode::Plain,
            None if term.stdout_tty && !term.dumb => OutputMode::Pretty,
            None => OutputMode::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tty() -> Terminal {
        Terminal {
            stdout_tty: true,
            ..Terminal::default()
        }
    }

    #[test]
    fn test_json_beats_format() {
        let request = OutputRequest::list(true, Some(ListFormat::Table));
        assert_eq!(request.mode(&tty()), OutputMode::Json);
    }

    #[test]
    fn test_terminal_decides_without_flags() {
        let request = OutputRequest::default();
        assert_eq!(request.mode(&tty()), OutputMode::Pretty);
        assert_eq!(request.mode(&Terminal::default()), OutputMode::Plain);

        let dumb = Terminal {
            dumb: true,
            ..tty()
        };
        assert_eq!(request.mode(&dumb), OutputMode::Plain);
    }

    #[test]
    fn test_table_format_works_when_piped() {
        let request = OutputRequest::list(false, Some(ListFormat::Table));
        assert_eq!(request.mode(&Terminal::default()), OutputMode::Pretty);
    }

    #[test]
    fn test_plain_format_on_terminal() {
        let request = OutputRequest::list(false, Some(ListFormat::Plain));
        assert_eq!(request.mode(&tty()), OutputMode::Plain);
    }
}
