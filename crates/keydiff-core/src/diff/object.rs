use std::collections::BTreeMap;

use super::{diff_impl, Collector, Path, PathSegment};
use crate::Node;

pub(super) fn diff_objects(
    reference: &BTreeMap<String, Node>,
    target: &BTreeMap<String, Node>,
    path: &Path,
    out: &mut Collector,
) {
    for (key, value) in reference {
        let sub_path = path.clone().with_segment(PathSegment::key(key.as_str()));
        match target.get(key) {
            Some(other) => diff_impl(value, other, &sub_path, out),
            None => out.missing(sub_path),
        }
    }

    for key in target.keys() {
        if reference.contains_key(key) {
            continue;
        }
        out.extra(path.clone().with_segment(PathSegment::key(key.as_str())));
    }
}
