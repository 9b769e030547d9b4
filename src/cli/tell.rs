use crate::args::TellArgs;
use crate::base_io::{load_or_create, mode_of, save};
use crate::statement::{apply_statement, StatementOutcome};

pub fn run(args: &TellArgs) -> i32 {
    let mode = mode_of(args.rq);

    let mut base = match load_or_create(&args.base, mode, args.create) {
        Ok(base) => base,
        Err(e) => {
            eprintln!("{e}");
            return 1;
        }
    };

    match apply_statement(&mut base, mode, &args.statement) {
        Ok(StatementOutcome::Atom(atom)) => println!("ok: atom {atom}"),
        Ok(StatementOutcome::Consequence) => println!("ok: consequence recorded"),
        Err(e) => {
            eprintln!("{e}");
            return 1;
        }
    }

    if let Err(e) = save(&args.base, &base) {
        eprintln!("{e}");
        return 1;
    }

    0
}
