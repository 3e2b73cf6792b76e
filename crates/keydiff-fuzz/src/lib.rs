//! Fuzzing harnesses for `keydiff`.
//!
//! The helpers accept raw bytes so they can be driven both from `cargo fuzz`
//! targets and from ordinary tests. Loading failures are swallowed; broken
//! diff invariants panic so the fuzzer records them.
//!
//! ```
//! keydiff_fuzz::fuzz_load(b"{\"a\":1}");
//! keydiff_fuzz::fuzz_diff(&[1, 2, 3, 4]);
//! ```
#![forbid(unsafe_code)]
#![warn(missing_docs)]

use arbitrary::Unstructured;
use keydiff_core::{Node, RenderConfig, Report};
use serde_json::{Map as JsonMap, Number as JsonNumber, Value as JsonValue};

const MAX_DEPTH: usize = 4;
const MAX_ARRAY_LEN: u8 = 6;
const MAX_OBJECT_LEN: u8 = 6;
const MAX_STRING_LEN: u8 = 12;

/// Feeds arbitrary bytes through the JSON and YAML loaders and diffs whatever
/// loads against itself.
///
/// ```
/// keydiff_fuzz::fuzz_load(b"greeting: hello");
/// ```
pub fn fuzz_load(data: &[u8]) {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    for node in [Node::from_json_str(text), Node::from_yaml_str(text)].into_iter().flatten() {
        assert!(node.diff(&node).is_empty(), "document differs from itself");
    }
}

/// Diffs two randomly generated documents and checks the result's invariants.
///
/// ```
/// keydiff_fuzz::fuzz_diff(b"seed");
/// ```
pub fn fuzz_diff(data: &[u8]) {
    let mut unstructured = Unstructured::new(data);
    let Some(reference) = random_node(&mut unstructured) else {
        return;
    };
    let Some(target) = random_node(&mut unstructured) else {
        return;
    };

    let diff = reference.diff(&target);
    for list in [diff.missing_strings(), diff.extra_strings()] {
        assert!(list.windows(2).all(|pair| pair[0] <= pair[1]), "paths are not sorted");
    }
    assert!(
        diff.missing().len() <= reference.leaves().len() + count_containers(&reference),
        "more missing paths than reference locations"
    );

    let report = Report::compare(&reference, &target);
    let _ = report.render(&RenderConfig::default().with_limit(3).with_color(true));
    let _ = report.render_json();
}

fn count_containers(node: &Node) -> usize {
    match node {
        Node::Array(values) => 1 + values.iter().map(count_containers).sum::<usize>(),
        Node::Object(map) => 1 + map.values().map(count_containers).sum::<usize>(),
        _ => 0,
    }
}

fn random_node(unstructured: &mut Unstructured<'_>) -> Option<Node> {
    json_value_from_unstructured(unstructured, 0).ok().map(Node::from_json_value)
}

fn json_value_from_unstructured(
    unstructured: &mut Unstructured<'_>,
    depth: usize,
) -> Result<JsonValue, arbitrary::Error> {
    if depth >= MAX_DEPTH {
        return json_leaf(unstructured);
    }

    let choice = unstructured.int_in_range::<u8>(0..=5)?;
    match choice {
        0 => Ok(JsonValue::Null),
        1 => Ok(JsonValue::Bool(unstructured.arbitrary()?)),
        2 => Ok(JsonValue::Number(random_number(unstructured)?)),
        3 => Ok(JsonValue::String(random_string(unstructured)?)),
        4 => {
            let len = usize::from(unstructured.int_in_range::<u8>(0..=MAX_ARRAY_LEN)?);
            let mut items = Vec::with_capacity(len);
            for _ in 0..len {
                items.push(json_value_from_unstructured(unstructured, depth + 1)?);
            }
            Ok(JsonValue::Array(items))
        }
        _ => {
            let len = usize::from(unstructured.int_in_range::<u8>(0..=MAX_OBJECT_LEN)?);
            let mut map = JsonMap::new();
            for _ in 0..len {
                let key = random_string(unstructured)?;
                let value = json_value_from_unstructured(unstructured, depth + 1)?;
                map.insert(key, value);
            }
            Ok(JsonValue::Object(map))
        }
    }
}

fn json_leaf(unstructured: &mut Unstructured<'_>) -> Result<JsonValue, arbitrary::Error> {
    let choice = unstructured.int_in_range::<u8>(0..=3)?;
    match choice {
        0 => Ok(JsonValue::Null),
        1 => Ok(JsonValue::Bool(unstructured.arbitrary()?)),
        2 => Ok(JsonValue::Number(random_number(unstructured)?)),
        _ => Ok(JsonValue::String(random_string(unstructured)?)),
    }
}

fn random_number(unstructured: &mut Unstructured<'_>) -> Result<JsonNumber, arbitrary::Error> {
    Ok(JsonNumber::from(unstructured.arbitrary::<i64>()?))
}

// Keys draw from a small alphabet so reference and target collide often.
fn random_string(unstructured: &mut Unstructured<'_>) -> Result<String, arbitrary::Error> {
    const ALPHABET: &[u8] = b"abc.[]0";
    let len = usize::from(unstructured.int_in_range::<u8>(0..=MAX_STRING_LEN)?);
    let mut string = String::with_capacity(len);
    for _ in 0..len {
        let byte = *unstructured.choose(ALPHABET)?;
        string.push(char::from(byte));
    }
    Ok(string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_harness_handles_utf8() {
        fuzz_load(br#"{"a":[1,{"b":null}]}"#);
        fuzz_load(b"a:\n  - 1\n");
    }

    #[test]
    fn load_harness_ignores_invalid_utf8() {
        fuzz_load(&[0xff, 0xfe, 0x00]);
    }

    #[test]
    fn diff_harness_runs() {
        fuzz_diff(b"diff");
        fuzz_diff(&[5, 3, 5, 2, 0, 1, 4, 2, 9, 9, 9, 9, 1, 0, 5, 5, 5]);
    }
}
