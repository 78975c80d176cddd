//! Terminal facts and the rendering choices derived from them.

use std::io::IsTerminal;

use super::mode::{OutputMode, OutputRequest};

const FALLBACK_WIDTH: usize = 80;

/// What the process learned about its stdout and environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Terminal {
    pub stdout_tty: bool,
    /// `TERM=dumb`
    pub dumb: bool,
    /// `NO_COLOR` is set
    pub no_color: bool,
    /// Columns from `COLUMNS` or the tty itself
    pub width: Option<usize>,
}

impl Terminal {
    pub fn detect() -> Self {
        let stdout_tty = std::io::stdout().is_terminal();
        let width = columns_from_env().or_else(|| {
            if stdout_tty {
                columns_from_tty()
            } else {
                None
            }
        });
        Self {
            stdout_tty,
            dumb: std::env::var("TERM").is_ok_and(|term| term == "dumb"),
            no_color: std::env::var_os("NO_COLOR").is_some(),
            width,
        }
    }
}

/// Rendering choices shared by every command's output.
#[derive(Debug, Clone)]
pub struct UiContext {
    pub color: bool,
    /// Checkbox glyphs and emoji rather than `[x]`
    pub unicode: bool,
    /// Table width in columns
    pub width: usize,
    pub mode: OutputMode,
}

impl UiContext {
    /// Combine the terminal with a command's flags and `--no-color`/`--ascii`.
    ///
    /// Color is only used for pretty output on a real terminal, so a table
    /// forced with `--format table` into a pipe stays free of escapes.
    pub fn new(term: &Terminal, request: OutputRequest, no_color: bool, ascii: bool) -> Self {
        let mode = request.mode(term);
        let color = mode.is_pretty() && term.stdout_tty && !term.dumb && !term.no_color && !no_color;
        Self {
            color,
            unicode: !ascii,
            width: term.width.unwrap_or(FALLBACK_WIDTH),
            mode,
        }
    }
}

fn columns_from_env() -> Option<usize> {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|&cols| cols > 0)
}

#[cfg(unix)]
fn columns_from_tty() -> Option<usize> {
    let mut size = std::mem::MaybeUninit::<libc::winsize>::uninit();
    // SAFETY: TIOCGWINSZ fills the winsize struct and touches nothing else
    let rc = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, size.as_mut_ptr()) };
    if rc != 0 {
        return None;
    }
    // SAFETY: ioctl returned 0, so the struct was written
    let size = unsafe { size.assume_init() };
    (size.ws_col > 0).then_some(usize::from(size.ws_col))
}

#[cfg(not(unix))]
fn columns_from_tty() -> Option<usize> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ListFormat;

    fn tty() -> Terminal {
        Terminal {
            stdout_tty: true,
            width: Some(120),
            ..Terminal::default()
        }
    }

    #[test]
    fn test_pretty_terminal_gets_color() {
        let ui = UiContext::new(&tty(), OutputRequest::default(), false, false);
        assert!(ui.mode.is_pretty());
        assert!(ui.color);
        assert!(ui.unicode);
        assert_eq!(ui.width, 120);
    }

    #[test]
    fn test_color_switches() {
        let ui = UiContext::new(&tty(), OutputRequest::default(), true, false);
        assert!(!ui.color);

        let no_color_env = Terminal {
            no_color: true,
            ..tty()
        };
        let ui = UiContext::new(&no_color_env, OutputRequest::default(), false, false);
        assert!(!ui.color);
    }

    #[test]
    fn test_forced_table_in_pipe_is_uncolored() {
        let request = OutputRequest::list(false, Some(ListFormat::Table));
        let ui = UiContext::new(&Terminal::default(), request, false, true);
        assert!(ui.mode.is_pretty());
        assert!(!ui.color);
        assert!(!ui.unicode);
        assert_eq!(ui.width, FALLBACK_WIDTH);
    }

    #[test]
    fn test_json_is_never_colored() {
        let ui = UiContext::new(&tty(), OutputRequest::json(true), false, false);
        assert!(ui.mode.is_json());
        assert!(!ui.color);
    }
}
