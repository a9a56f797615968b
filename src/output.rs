use anyhow::Result;
use console::Term;
use serde::Serialize;

use crate::rank::ScoredCandidate;

pub struct Output {
    term: Term,
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self {
            term: Term::stdout(),
            json,
        }
    }

    fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let output = serde_json::to_string_pretty(value)?;
        self.term.write_line(&output)?;
        Ok(())
    }

    /// Prints ranked suggestions, one per line, best match first.
    /// Zero suggestions prints nothing; that is still a successful run.
    pub fn suggestions(&self, suggestions: &[ScoredCandidate]) -> Result<()> {
        if self.json {
            return self.print_json(suggestions);
        }

        for suggestion in suggestions {
            self.term.write_line(&suggestion.text)?;
        }
        Ok(())
    }
}
