//! Source boundaries for the hanger crate.
//!
//! The rope core must stay runnable off the browser and free of panics, so
//! these tests read `src/` and pin where the risky things are allowed to
//! live: browser bindings, the physics crate, numeric casts, and anything
//! that can abort a frame.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Production sources keyed by file name (`world.rs`), tests excluded.
fn sources() -> BTreeMap<String, String> {
    let mut out = BTreeMap::new();
    let Ok(entries) = fs::read_dir("src") else {
        return out;
    };
    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(body) = fs::read_to_string(entry.path()) {
            out.insert(name, body);
        }
    }
    out
}

/// Code lines only: doc and line comments are skipped so prose may mention
/// the tokens being policed.
fn code_lines(body: &str) -> impl Iterator<Item = &str> {
    body.lines().filter(|line| !line.trim_start().starts_with("//"))
}

fn occurrences(body: &str, token: &str) -> usize {
    code_lines(body).map(|line| line.matches(token).count()).sum()
}

fn files_using(token: &str) -> Vec<String> {
    sources()
        .into_iter()
        .filter(|(_, body)| occurrences(body, token) > 0)
        .map(|(name, _)| name)
        .collect()
}

#[test]
fn sources_are_found() {
    let files = sources();
    for expected in ["engine.rs", "gesture.rs", "world.rs", "render.rs"] {
        assert!(files.contains_key(expected), "missing src/{expected}; run from the crate root");
    }
}

// --- Boundaries ---

#[test]
fn browser_bindings_stay_in_engine_and_render() {
    for token in ["web_sys", "wasm_bindgen"] {
        let users = files_using(token);
        assert!(
            users.iter().all(|f| f == "engine.rs" || f == "render.rs"),
            "{token} used outside engine.rs/render.rs: {users:?}"
        );
    }
}

#[test]
fn physics_crate_stays_in_world() {
    let users = files_using("rapier2d");
    assert_eq!(users, ["world.rs"], "rapier2d must only be touched by world.rs");
}

#[test]
fn logging_goes_through_log_facade() {
    for token in ["println!", "eprintln!", "print!(", "dbg!", "tracing::"] {
        let users = files_using(token);
        assert!(users.is_empty(), "{token} found in {users:?}; use log:: instead");
    }
}

// --- Numeric casts ---

#[test]
fn f64_to_real_narrowing_has_one_home() {
    let per_file: BTreeMap<String, usize> = sources()
        .into_iter()
        .map(|(name, body)| (name, occurrences(&body, "as Real")))
        .filter(|(_, n)| *n > 0)
        .collect();
    assert_eq!(
        per_file,
        BTreeMap::from([("world.rs".to_owned(), 1)]),
        "narrow to rapier's Real only through world::real()"
    );
}

#[test]
fn cast_lint_escapes_stay_within_budget() {
    let budget = BTreeMap::from([("config.rs", 1_usize), ("viewport.rs", 1), ("world.rs", 2)]);
    for (name, body) in sources() {
        let found = occurrences(&body, "allow(clippy::cast_");
        let allowed = budget.get(name.as_str()).copied().unwrap_or(0);
        assert!(found <= allowed, "{name}: {found} cast lint escapes, budget {allowed}");
    }
}

// --- Frame safety ---

#[test]
fn nothing_can_abort_a_frame() {
    let forbidden = [
        ".unwrap()",
        ".expect(",
        "panic!(",
        "unreachable!(",
        "todo!(",
        "unimplemented!(",
    ];
    let mut hits = Vec::new();
    for (name, body) in sources() {
        for token in forbidden {
            let n = occurrences(&body, token);
            if n > 0 {
                hits.push(format!("{name}: {token} x{n}"));
            }
        }
    }
    assert!(hits.is_empty(), "panicking calls in production code:\n  {}", hits.join("\n  "));
}

#[test]
fn canvas_errors_are_not_swallowed() {
    for token in ["let _ =", ".ok()"] {
        let users = files_using(token);
        assert!(users.is_empty(), "{token} discards an error in {users:?}; log it or propagate it");
    }
}

// --- Test wiring ---

#[test]
fn every_sibling_test_file_is_wired_in() {
    let Ok(entries) = fs::read_dir("src") else {
        panic!("src/ unreadable");
    };
    let files = sources();
    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().into_owned();
        let Some(stem) = name.strip_suffix("_test.rs") else {
            continue;
        };
        let owner = format!("{stem}.rs");
        let wired = files
            .get(&owner)
            .is_some_and(|body| body.contains(&format!("#[path = \"{name}\"]")));
        assert!(wired, "{name} is not included by {owner}");
        assert!(Path::new("src").join(&owner).exists());
    }
}
