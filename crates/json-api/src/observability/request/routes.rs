//! Route labels for request metrics.

const JOBS_SEGMENT: &str = "jobs";
const JOB_PLACEHOLDER: &str = "{job}";

/// Replaces the record id that follows `/jobs/` with `{job}` so every record
/// shares one label.
pub(super) fn route_label(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let mut label = String::from("/");
    let mut previous = None;

    for (index, segment) in path.trim_start_matches('/').split('/').enumerate() {
        if index > 0 {
            label.push('/');
        }

        if previous == Some(JOBS_SEGMENT) && !segment.is_empty() {
            label.push_str(JOB_PLACEHOLDER);
        } else {
            label.push_str(segment);
        }

        previous = Some(segment);
    }

    label
}
