use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a reference finding.
///
/// Identity fields:
/// - check_id
/// - code
/// - project path (repo-relative)
/// - reference id
/// - hint path (if present)
pub fn fingerprint_for_reference(
    check_id: &str,
    code: &str,
    project_path: &str,
    reference: &str,
    hint_path: Option<&str>,
) -> String {
    let mut parts = vec![check_id, code, project_path, reference];
    if let Some(p) = hint_path {
        parts.push(p);
    }
    let canonical = parts.join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_stable_and_sensitive_to_hint_path() {
        let a = fingerprint_for_reference("c", "x", "App.csproj", "Foo", Some("lib\\Foo.dll"));
        let b = fingerprint_for_reference("c", "x", "App.csproj", "Foo", Some("lib\\Foo.dll"));
        let c = fingerprint_for_reference("c", "x", "App.csproj", "Foo", None);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 64);
    }
}
