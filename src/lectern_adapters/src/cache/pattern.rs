/// Matches `key` against a glob pattern where `*` stands for any run of
/// characters, the subset of Redis `MATCH` syntax the cache keys rely on.
pub fn glob_matches(pattern: &str, key: &str) -> bool {
    let mut parts = pattern.split('*');
    let Some(first) = parts.next() else {
        return key.is_empty();
    };
    let Some(mut rest) = key.strip_prefix(first) else {
        return false;
    };

    let segments: Vec<&str> = parts.collect();
    let Some((last, middle)) = segments.split_last() else {
        // no wildcard at all
        return rest.is_empty();
    };

    for segment in middle {
        match rest.find(segment) {
            Some(index) => rest = &rest[index + segment.len()..],
            None => return false,
        }
    }
    rest.ends_with(last)
}
