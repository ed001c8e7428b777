/// Split an MSBuild-style comma-separated prefix list.
///
/// A blank string yields no prefixes. Otherwise every comma-separated entry is
/// trimmed and kept, including empty entries: `"a, ,b"` keeps `""`, which as a
/// known hint path prefix accepts every hint path.
pub fn parse_prefix_list(input: &str) -> Vec<String> {
    if input.trim().is_empty() {
        return Vec::new();
    }
    input.split(',').map(|s| s.trim().to_string()).collect()
}
