//! Manual resolver: last-resort operator entry.

use crate::console::OperatorConsole;
use crate::error::Result;
use crate::traits::{IdentityResolver, Resolution};
use colored::Colorize;
use tagsync_core::{CardUid, UserLogin};

/// Prompts the operator to type the identity directly.
///
/// Sits last in the chain: by the time it runs, every automatic strategy
/// has declined. Empty input declines (the card stays unmatched),
/// end-of-file cancels the run.
pub struct ManualResolver {
    console: Box<dyn OperatorConsole>,
}

impl ManualResolver {
    pub fn new(console: Box<dyn OperatorConsole>) -> Self {
        Self { console }
    }
}

impl IdentityResolver for ManualResolver {
    async fn find_user(&mut self, _card: &CardUid) -> Result<Resolution> {
        println!("{}", "User could not automatically be determined".bold());

        match self
            .console
            .read_line("User email to associate to the card")?
        {
            None => Ok(Resolution::Cancelled),
            Some(input) => match UserLogin::new(&input) {
                Ok(login) => Ok(Resolution::Matched(login)),
                // Empty input: the operator chose to skip this card.
                Err(_) => Ok(Resolution::Declined),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;

    fn card() -> CardUid {
        CardUid::new("04a1b2c3").unwrap()
    }

    #[tokio::test]
    async fn test_typed_identity_matches() {
        let console = ScriptedConsole::new().with_line(Some("a@b.org"));
        let mut resolver = ManualResolver::new(Box::new(console));

        assert_eq!(
            resolver.find_user(&card()).await.unwrap(),
            Resolution::Matched(UserLogin::new("a@b.org").unwrap())
        );
    }

    #[tokio::test]
    async fn test_empty_input_declines() {
        let console = ScriptedConsole::new().with_line(Some(""));
        let mut resolver = ManualResolver::new(Box::new(console));

        assert_eq!(
            resolver.find_user(&card()).await.unwrap(),
            Resolution::Declined
        );
    }

    #[tokio::test]
    async fn test_eof_cancels_run() {
        let console = ScriptedConsole::new().with_line(None);
        let mut resolver = ManualResolver::new(Box::new(console));

        assert_eq!(
            resolver.find_user(&card()).await.unwrap(),
            Resolution::Cancelled
        );
    }
}
