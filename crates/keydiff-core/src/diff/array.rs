use super::{diff_impl, Collector, Path, PathSegment};
use crate::Node;

pub(super) fn diff_arrays(reference: &[Node], target: &[Node], path: &Path, out: &mut Collector) {
    for (index, value) in reference.iter().enumerate() {
        let sub_path = path.clone().with_segment(PathSegment::index(index));
        match target.get(index) {
            Some(other) => diff_impl(value, other, &sub_path, out),
            None => out.missing(sub_path),
        }
    }

    for index in reference.len()..target.len() {
        out.extra(path.clone().with_segment(PathSegment::index(index)));
    }
}
