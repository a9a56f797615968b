#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod cli;
pub mod distance;
pub mod output;
pub mod rank;
pub mod source;

use anyhow::Result;

use cli::Cli;
use output::Output;
use rank::{LENGTH_SLACK, Ranker};

pub fn run(cli: Cli) -> Result<()> {
    let candidates = if cli.stdin {
        source::stdin_candidates()?
    } else {
        source::path_commands()?
    };

    let mut ranker = Ranker::new();
    if cli.fast {
        ranker = ranker.with_length_filter(LENGTH_SLACK);
    }

    let suggestions = ranker.rank(&cli.query, candidates);
    Output::new(cli.json).suggestions(&suggestions)
}
