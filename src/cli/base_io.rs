/*!
Small adapters between the filesystem and [`nmms_core::persist`]: a thin
function returning a local, `Display`-only error, not a library-grade
error type.
*/

use std::path::Path;

use nmms_core::base::MaterialBase;
use nmms_core::persist;
use nmms_core::sentence::Mode;

pub fn mode_of(rq: bool) -> Mode {
    if rq { Mode::Rq } else { Mode::Propositional }
}

pub fn load(path: &Path, mode: Mode) -> Result<MaterialBase, String> {
    let text = std::fs::read_to_string(path).map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    persist::from_json(mode, &text).map_err(|e| format!("failed to load base from {}: {e}", path.display()))
}

pub fn load_or_create(path: &Path, mode: Mode, create: bool) -> Result<MaterialBase, String> {
    if path.exists() {
        load(path, mode)
    } else if create {
        Ok(MaterialBase::new(mode))
    } else {
        Err(format!("base file {} does not exist (pass --create to start one)", path.display()))
    }
}

pub fn save(path: &Path, base: &MaterialBase) -> Result<(), String> {
    let json = persist::to_json(base).map_err(|e| format!("failed to serialize base: {e}"))?;
    std::fs::write(path, json).map_err(|e| format!("failed to write {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nmms_core::sentence::Sentence;
    use tempfile::TempDir;

    #[test]
    fn save_then_load_round_trips_a_base_on_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("base.json");

        let mut base = MaterialBase::new(Mode::Propositional);
        base.add_consequence(
            [Sentence::atom("rain")].into_iter().collect(),
            [Sentence::atom("wet")].into_iter().collect(),
        )
        .unwrap();
        save(&path, &base).unwrap();

        let reloaded = load(&path, Mode::Propositional).unwrap();
        assert_eq!(reloaded.consequences(), base.consequences());
    }

    #[test]
    fn load_or_create_refuses_a_missing_file_without_create() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.json");
        assert!(load_or_create(&path, Mode::Propositional, false).is_err());
        assert!(load_or_create(&path, Mode::Propositional, true).is_ok());
    }
}
