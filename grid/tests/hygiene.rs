//! Hygiene — enforces coding standards at test time.
//!
//! Scans the grid crate's production sources for antipatterns. Every budget
//! is zero and never grows: if you must add an occurrence, remove an
//! existing one first.

use std::fs;
use std::path::Path;

/// `(needle, budget, why)` — lines containing `needle` may appear at most
/// `budget` times across production sources.
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics crash the editor"),
    (".expect(", 0, "panics crash the editor"),
    ("panic!(", 0, "panics crash the editor"),
    ("unreachable!(", 0, "panics crash the editor"),
    ("todo!(", 0, "stubs must not ship"),
    ("unimplemented!(", 0, "stubs must not ship"),
    ("let _ =", 0, "errors must be inspected, not discarded"),
    (".ok()", 0, "errors must be inspected, not discarded"),
    ("#[allow(dead_code)]", 0, "dead code must be removed"),
];

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `src/`, excluding `*_test.rs`.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

#[test]
fn antipattern_budgets() {
    let files = source_files();
    assert!(!files.is_empty(), "no production sources found; run from the crate root");

    let mut report = String::new();
    for (needle, budget, why) in BUDGETS {
        let hits: Vec<(String, usize)> = files
            .iter()
            .filter_map(|file| {
                let count = file
                    .content
                    .lines()
                    .filter(|line| line.contains(needle))
                    .count();
                (count > 0).then(|| (file.path.clone(), count))
            })
            .collect();
        let total: usize = hits.iter().map(|(_, c)| c).sum();
        if total > *budget {
            report.push_str(&format!("`{needle}` budget exceeded ({total} > {budget}): {why}\n"));
            for (path, count) in hits {
                report.push_str(&format!("  {path}: {count}\n"));
            }
        }
    }
    assert!(report.is_empty(), "\n{report}");
}
