/*!
Clap-derive argument definitions for the CLI surface.

`clap` derive is the natural fit for a subcommand-shaped surface
(`tell`/`ask`/`repl`/`batch`), over a hand-rolled `--flag=value` loop, which
exists to serve a large flat options surface this crate does not have.
*/

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "nmms", about = "An NMMS sequent-calculus reasoner", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Add an atom or a base consequence to a material base.
    Tell(TellArgs),

    /// Ask whether a sequent is derivable from a material base.
    Ask(AskArgs),

    /// Start an interactive session.
    Repl(ReplArgs),

    /// Apply one statement per line from a file.
    Batch(BatchArgs),
}

#[derive(Args)]
pub struct TellArgs {
    /// Path to the material base's JSON file.
    #[arg(short = 'b', long = "base")]
    pub base: PathBuf,

    /// Create the base file if it does not already exist.
    #[arg(long)]
    pub create: bool,

    /// Parse atoms using the restricted-quantifier grammar.
    #[arg(long)]
    pub rq: bool,

    /// `atom X [description]` or `Γ |~ Δ`.
    pub statement: String,
}

#[derive(Args)]
pub struct AskArgs {
    #[arg(short = 'b', long = "base")]
    pub base: PathBuf,

    #[arg(long)]
    pub rq: bool,

    /// Print the full proof trace.
    #[arg(long)]
    pub trace: bool,

    #[arg(long = "max-depth")]
    pub max_depth: Option<usize>,

    /// Emit the `ProofResult` as JSON instead of plain text.
    #[arg(long)]
    pub json: bool,

    /// Suppress all output; only the exit code reports the result.
    #[arg(long)]
    pub quiet: bool,

    /// `Γ => Δ`.
    pub sequent: String,
}

#[derive(Args)]
pub struct ReplArgs {
    #[arg(short = 'b', long = "base")]
    pub base: Option<PathBuf>,

    #[arg(long)]
    pub rq: bool,
}

#[derive(Args)]
pub struct BatchArgs {
    #[arg(short = 'b', long = "base")]
    pub base: PathBuf,

    #[arg(long)]
    pub create: bool,

    #[arg(long)]
    pub rq: bool,

    /// File with one `tell` statement per line; `#` introduces a comment.
    pub file: PathBuf,
}
