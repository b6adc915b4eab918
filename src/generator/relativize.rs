//! Shortest relative references between a generated URL and a current URL.

use url::Url;

use crate::core::is_external_link;

/// Compute the shortest relative reference from `current` to `target`.
///
/// `None` means the current URL cannot serve as a base: it is empty, the
/// bare root, or an absolute URL that does not parse. An absolute target
/// on a different scheme/host/port is returned unchanged.
pub(crate) fn relativize(target: &str, current: &str) -> Option<String> {
    let current = current.trim();
    // A bare root carries no path context to ascend from.
    if current.is_empty() || current == "/" {
        return None;
    }

    if is_external_link(current) {
        let base = Url::parse(current).ok()?;
        if is_external_link(target) {
            let target_url = Url::parse(target).ok()?;
            if target_url.scheme() != base.scheme()
                || target_url.host_str() != base.host_str()
                || target_url.port_or_known_default() != base.port_or_known_default()
            {
                // Foreign location: no relative form exists.
                return Some(target.to_owned());
            }
            return Some(relative_path(target_url.path(), base.path()));
        }
        // Root-relative target on the current URL's own host.
        return Some(relative_path(target, base.path()));
    }

    if !current.starts_with('/') {
        return None;
    }
    if is_external_link(target) {
        return Some(target.to_owned());
    }
    Some(relative_path(target, current))
}

/// Relative path from `base` to `target`: longest common leading segment
/// sequence, one `../` per remaining base segment, then the target's
/// non-common segments. Equal paths yield the empty string.
fn relative_path(target: &str, base: &str) -> String {
    let target_segments: Vec<&str> = target.split('/').filter(|s| !s.is_empty()).collect();
    let base_segments: Vec<&str> = base.split('/').filter(|s| !s.is_empty()).collect();

    let common = target_segments
        .iter()
        .zip(base_segments.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = String::new();
    for _ in common..base_segments.len() {
        relative.push_str("../");
    }
    relative.push_str(&target_segments[common..].join("/"));
    relative
}
