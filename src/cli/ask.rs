use nmms_core::config::SearchConfig;
use nmms_core::engine::Reasoner;
use nmms_core::sentence::Parser;

use crate::args::AskArgs;
use crate::base_io::{load, mode_of};

/// Exit codes follow grep's convention: 0 derivable, 2 not derivable, 1 error.
pub fn run(args: &AskArgs) -> i32 {
    let mode = mode_of(args.rq);

    let base = match load(&args.base, mode) {
        Ok(base) => base,
        Err(e) => {
            eprintln!("{e}");
            return 1;
        }
    };

    let (ante, succ) = match Parser::parse_sequent_complete(&args.sequent, mode) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{e}");
            return 1;
        }
    };

    let mut config = SearchConfig::default();
    if let Some(max_depth) = args.max_depth {
        config.max_depth = max_depth;
    }

    let reasoner = Reasoner::with_config(&base, config);
    let result = reasoner.derives(ante, succ);

    if args.json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("failed to serialize result: {e}");
                return 1;
            }
        }
    } else if !args.quiet {
        println!("{}", if result.derivable { "DERIVABLE" } else { "NOT DERIVABLE" });
        if args.trace {
            for line in &result.trace {
                println!("{line}");
            }
        }
        println!("depth_reached={} cache_hits={}", result.depth_reached, result.cache_hits);
    }

    if result.derivable {
        0
    } else {
        2
    }
}
