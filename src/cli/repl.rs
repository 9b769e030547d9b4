/*!
The interactive session: `tell`, `ask`, `show`, `trace on|off`, `save
FILE`, `load FILE`, `help`, `quit`. Line editing and history come from
`reedline`, grounded on the same crate's use for an interactive
logic-engine shell in the `dhilipsiva-lojban-NeSy` example pack.
*/

use std::path::PathBuf;

use nmms_core::base::MaterialBase;
use nmms_core::config::SearchConfig;
use nmms_core::engine::Reasoner;
use nmms_core::sentence::{Mode, Parser};
use reedline::{DefaultPrompt, Reedline, Signal};

use crate::args::ReplArgs;
use crate::base_io::{load, mode_of, save};
use crate::statement::{apply_statement, StatementOutcome};

struct Session {
    mode: Mode,
    base: MaterialBase,
    path: Option<PathBuf>,
    trace: bool,
}

pub fn run(args: &ReplArgs) -> i32 {
    let mode = mode_of(args.rq);

    let (base, path) = match &args.base {
        Some(path) if path.exists() => match load(path, mode) {
            Ok(base) => (base, Some(path.clone())),
            Err(e) => {
                eprintln!("{e}");
                return 1;
            }
        },
        Some(path) => (MaterialBase::new(mode), Some(path.clone())),
        None => (MaterialBase::new(mode), None),
    };

    let mut session = Session { mode, base, path, trace: false };

    println!("nmms repl ({} mode). Type 'help' for commands.", if args.rq { "RQ" } else { "propositional" });

    let mut line_editor = Reedline::create();
    let prompt = DefaultPrompt::default();

    loop {
        match line_editor.read_line(&prompt) {
            Ok(Signal::Success(buffer)) => {
                let input = buffer.trim();
                if input.is_empty() {
                    continue;
                }
                if matches!(input, "quit" | "exit") {
                    break;
                }
                dispatch(&mut session, input);
            }
            Ok(Signal::CtrlC) | Ok(Signal::CtrlD) => break,
            Err(e) => {
                eprintln!("{e}");
                break;
            }
        }
    }

    0
}

fn dispatch(session: &mut Session, input: &str) {
    let (command, rest) = match input.split_once(char::is_whitespace) {
        Some((c, r)) => (c, r.trim()),
        None => (input, ""),
    };

    match command {
        "tell" => match apply_statement(&mut session.base, session.mode, rest) {
            Ok(StatementOutcome::Atom(atom)) => println!("ok: atom {atom}"),
            Ok(StatementOutcome::Consequence) => println!("ok: consequence recorded"),
            Err(e) => eprintln!("{e}"),
        },

        "ask" => match Parser::parse_sequent_complete(rest, session.mode) {
            Ok((ante, succ)) => {
                let reasoner = Reasoner::with_config(&session.base, SearchConfig::default());
                let result = reasoner.derives(ante, succ);
                println!("{}", if result.derivable { "DERIVABLE" } else { "NOT DERIVABLE" });
                if session.trace {
                    for line in &result.trace {
                        println!("{line}");
                    }
                }
            }
            Err(e) => eprintln!("{e}"),
        },

        "show" => {
            println!("language: {}", nmms_core::sentence::render_set(session.base.language()));
            for (ante, succ) in session.base.consequences() {
                println!(
                    "  {} |~ {}",
                    nmms_core::sentence::render_set(ante),
                    nmms_core::sentence::render_set(succ)
                );
            }
            for schema in session.base.schemas() {
                println!("  schema: {schema:?}");
            }
        }

        "trace" => match rest {
            "on" => {
                session.trace = true;
                println!("trace on");
            }
            "off" => {
                session.trace = false;
                println!("trace off");
            }
            _ => eprintln!("usage: trace on|off"),
        },

        "save" => {
            let path = if rest.is_empty() { session.path.clone() } else { Some(PathBuf::from(rest)) };
            match path {
                Some(path) => match save(&path, &session.base) {
                    Ok(()) => {
                        println!("saved to {}", path.display());
                        session.path = Some(path);
                    }
                    Err(e) => eprintln!("{e}"),
                },
                None => eprintln!("usage: save FILE (no base path is set)"),
            }
        }

        "load" => {
            if rest.is_empty() {
                eprintln!("usage: load FILE");
                return;
            }
            let path = PathBuf::from(rest);
            match load(&path, session.mode) {
                Ok(base) => {
                    session.base = base;
                    session.path = Some(path);
                    println!("loaded");
                }
                Err(e) => eprintln!("{e}"),
            }
        }

        "help" => {
            println!("commands: tell STATEMENT | ask SEQUENT | show | trace on|off | save [FILE] | load FILE | help | quit");
        }

        other => eprintln!("unknown command '{other}' (try 'help')"),
    }
}
