//! Operator console abstraction.
//!
//! The visual-code and manual resolvers both talk to a human. This trait
//! narrows that interaction to two blocking prompts and models end-of-file
//! as `None` — the "operator walked away" signal the engine turns into a
//! clean shutdown.

use crate::error::{ResolveError, Result};
use dialoguer::{Confirm, Input};
use std::io;

/// Blocking prompts toward the human operator.
///
/// `None` results mean end-of-file at the prompt, which callers map to
/// [`Resolution::Cancelled`](crate::traits::Resolution::Cancelled).
pub trait OperatorConsole: Send {
    /// Ask a yes/no question (defaulting to yes on plain Enter).
    fn confirm(&mut self, prompt: &str) -> Result<Option<bool>>;

    /// Prompt for one line of input (empty input is allowed).
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

fn is_eof(e: &io::Error) -> bool {
    e.kind() == io::ErrorKind::UnexpectedEof
}

/// Terminal-backed console using dialoguer.
///
/// Blocking by design: the whole system is interactive and processes one
/// card at a time, so suspending on operator input is the accepted model.
#[derive(Debug, Default)]
pub struct TermConsole {
    _private: (),
}

impl TermConsole {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl OperatorConsole for TermConsole {
    fn confirm(&mut self, prompt: &str) -> Result<Option<bool>> {
        match Confirm::new().with_prompt(prompt).default(true).interact() {
            Ok(answer) => Ok(Some(answer)),
            Err(dialoguer::Error::IO(e)) if is_eof(&e) => Ok(None),
            Err(e) => Err(ResolveError::console(e.to_string())),
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
        {
            Ok(line) => Ok(Some(line)),
            Err(dialoguer::Error::IO(e)) if is_eof(&e) => Ok(None),
            Err(e) => Err(ResolveError::console(e.to_string())),
        }
    }
}

/// Scripted console for tests.
///
/// Answers are consumed in push order, one queue per prompt kind; an
/// exhausted queue is a scripting mistake and errors out loudly.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    confirms: std::collections::VecDeque<Option<bool>>,
    lines: std::collections::VecDeque<Option<String>>,
}

impl ScriptedConsole {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a confirm answer (`None` = end-of-file).
    #[must_use]
    pub fn with_confirm(mut self, answer: Option<bool>) -> Self {
        self.confirms.push_back(answer);
        self
    }

    /// Queue a line answer (`None` = end-of-file).
    #[must_use]
    pub fn with_line(mut self, line: Option<&str>) -> Self {
        self.lines.push_back(line.map(str::to_string));
        self
    }
}

impl OperatorConsole for ScriptedConsole {
    fn confirm(&mut self, _prompt: &str) -> Result<Option<bool>> {
        self.confirms
            .pop_front()
            .ok_or_else(|| ResolveError::console("scripted console: confirm queue exhausted"))
    }

    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>> {
        self.lines
            .pop_front()
            .ok_or_else(|| ResolveError::console("scripted console: line queue exhausted"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_console_replays_in_order() {
        let mut console = ScriptedConsole::new()
            .with_confirm(Some(true))
            .with_confirm(None)
            .with_line(Some("a@b.org"))
            .with_line(None);

        assert_eq!(console.confirm("?").unwrap(), Some(true));
        assert_eq!(console.confirm("?").unwrap(), None);
        assert_eq!(console.read_line("?").unwrap(), Some("a@b.org".to_string()));
        assert_eq!(console.read_line("?").unwrap(), None);
    }

    #[test]
    fn test_scripted_console_exhaustion_is_loud() {
        let mut console = ScriptedConsole::new();
        assert!(console.confirm("?").is_err());
        assert!(console.read_line("?").is_err());
    }
}
