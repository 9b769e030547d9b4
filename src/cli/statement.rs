/*!
Applying a single `tell`-shaped line to a base: either `atom X
[description]` or a `Γ |~ Δ` consequence. Shared by the `tell` subcommand,
batch mode, and the REPL's own `tell` command.
*/

use nmms_core::base::MaterialBase;
use nmms_core::sentence::{Mode, Parser};

pub enum StatementOutcome {
    Atom(String),
    Consequence,
}

pub fn apply_statement(base: &mut MaterialBase, mode: Mode, statement: &str) -> Result<StatementOutcome, String> {
    let statement = statement.trim();

    if let Some(rest) = statement.strip_prefix("atom ") {
        let mut parts = rest.trim().splitn(2, char::is_whitespace);
        let atom_text = parts.next().unwrap_or("").trim();
        // The optional trailing description is accepted but not stored.
        let atom = Parser::parse_sentence_complete(atom_text, mode).map_err(|e| e.to_string())?;
        base.add_atom(atom.clone()).map_err(|e| e.to_string())?;
        return Ok(StatementOutcome::Atom(atom.to_string()));
    }

    let (ante, succ) = Parser::parse_tell_complete(statement, mode).map_err(|e| e.to_string())?;
    base.add_consequence(ante, succ).map_err(|e| e.to_string())?;
    Ok(StatementOutcome::Consequence)
}
