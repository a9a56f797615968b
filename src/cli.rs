use clap::Parser;

#[derive(Parser)]
#[command(name = "correct")]
#[command(about = "Suggests the closest matching command names", long_about = None)]
pub struct Cli {
    /// The mistyped command name to find suggestions for
    pub query: String,

    /// Read candidate names from stdin (one per line) instead of scanning $PATH
    #[arg(long)]
    pub stdin: bool,

    /// Skip candidates much longer or shorter than the query before scoring
    /// (faster, but may miss a match)
    #[arg(long)]
    pub fast: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
