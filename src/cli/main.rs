/*!
A thin CLI binary wrapping `nmms_core`. Subcommands: `tell`, `ask`,
`repl`, `batch`. The binary owns argument parsing, file I/O, and exit-code
conventions; all reasoning happens in the library.
*/

use clap::Parser as ClapParser;

mod args;
mod ask;
mod base_io;
mod batch;
mod repl;
mod statement;
mod tell;

use args::{Cli, Command};

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let cli = Cli::parse();

    let code = match &cli.command {
        Command::Tell(args) => tell::run(args),
        Command::Ask(args) => ask::run(args),
        Command::Repl(args) => repl::run(args),
        Command::Batch(args) => batch::run(args),
    };

    std::process::exit(code);
}
