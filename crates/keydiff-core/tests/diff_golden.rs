use std::fs;
use std::path::Path;

use keydiff_core::Node;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Fixture {
    reference: String,
    target: String,
    missing: Vec<String>,
    extra: Vec<String>,
}

fn load_fixture(path: &Path) -> Fixture {
    let data = fs::read_to_string(path).expect("fixture should be readable");
    serde_json::from_str(&data).expect("fixture should deserialize")
}

#[test]
fn diff_golden_parity() {
    let fixtures_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/diff");
    let mut entries: Vec<_> = fs::read_dir(&fixtures_root)
        .expect("fixtures directory must exist")
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    entries.sort();

    assert!(!entries.is_empty(), "expected at least one diff fixture under tests/fixtures/diff");

    for path in entries {
        let fixture = load_fixture(&path);
        let reference = Node::from_json_str(&fixture.reference).expect("reference parses");
        let target = Node::from_json_str(&fixture.target).expect("target parses");
        let diff = reference.diff(&target);
        assert_eq!(diff.missing_strings(), fixture.missing, "missing in fixture {path:?}");
        assert_eq!(diff.extra_strings(), fixture.extra, "extra in fixture {path:?}");
    }
}
