use crate::args::BatchArgs;
use crate::base_io::{load_or_create, mode_of, save};
use crate::statement::{apply_statement, StatementOutcome};

/// Reads one statement per line; `#` introduces a comment, blank lines are
/// skipped. The first malformed line aborts the batch, leaving the base
/// file as it was before the run.
pub fn run(args: &BatchArgs) -> i32 {
    let mode = mode_of(args.rq);

    let mut base = match load_or_create(&args.base, mode, args.create) {
        Ok(base) => base,
        Err(e) => {
            eprintln!("{e}");
            return 1;
        }
    };

    let text = match std::fs::read_to_string(&args.file) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("failed to read {}: {e}", args.file.display());
            return 1;
        }
    };

    let mut applied = 0usize;
    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match apply_statement(&mut base, mode, line) {
            Ok(StatementOutcome::Atom(atom)) => {
                println!("{}: ok: atom {atom}", line_no + 1);
                applied += 1;
            }
            Ok(StatementOutcome::Consequence) => {
                println!("{}: ok: consequence recorded", line_no + 1);
                applied += 1;
            }
            Err(e) => {
                eprintln!("{}: {e}", line_no + 1);
                return 1;
            }
        }
    }

    if let Err(e) = save(&args.base, &base) {
        eprintln!("{e}");
        return 1;
    }

    println!("applied {applied} statement(s)");
    0
}
