//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after project file snippets.
    pub examples: ExamplePair,
}

/// Before and after project file snippets.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Snippet that would trigger a finding.
    pub before: &'static str,
    /// Snippet that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Check IDs
        ids::CHECK_HINTPATH_MISSING => Some(explain_missing()),
        ids::CHECK_HINTPATH_KNOWN_PREFIX => Some(explain_known_prefix()),
        ids::CHECK_HINTPATH_CONTAINS_REFERENCE_ID => Some(explain_contains_reference_id()),
        ids::CHECK_HINTPATH_EXISTS => Some(explain_exists()),

        // Codes
        ids::CODE_MISSING_HINT_PATH => Some(explain_missing_hint_path()),
        ids::CODE_WRONG_PREFIX => Some(explain_wrong_prefix()),
        ids::CODE_REFERENCE_ID_NOT_IN_HINT_PATH => Some(explain_reference_id_not_in_hint_path()),
        ids::CODE_FILE_NOT_FOUND => Some(explain_file_not_found()),

        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[
        ids::CHECK_HINTPATH_MISSING,
        ids::CHECK_HINTPATH_KNOWN_PREFIX,
        ids::CHECK_HINTPATH_CONTAINS_REFERENCE_ID,
        ids::CHECK_HINTPATH_EXISTS,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_MISSING_HINT_PATH,
        ids::CODE_WRONG_PREFIX,
        ids::CODE_REFERENCE_ID_NOT_IN_HINT_PATH,
        ids::CODE_FILE_NOT_FOUND,
    ]
}

// --- Check-level explanations ---

fn explain_missing() -> Explanation {
    Explanation {
        title: "Reference Requires HintPath",
        description: "\
Detects `<Reference>` items that do not declare a `<HintPath>`.

Without a hint path MSBuild probes the GAC, the output directory and a list of
framework folders. The binary that ends up being referenced then depends on
the machine running the build:
- Developer machines and build agents may resolve different versions
- A missing assembly only shows up as a compiler error much later
- The project gives no hint where the binary is supposed to come from

References whose id starts with an excluded prefix (for example `System`)
are skipped.",
        remediation: "\
Add a `<HintPath>` pointing at the binary checked into the repository or
restored into a known folder:

    <Reference Include=\"Foo\">
      <HintPath>..\\packages\\Foo\\lib\\Foo.dll</HintPath>
    </Reference>

Framework assemblies should be excluded via `excluded_reference_prefixes`.",
        examples: ExamplePair {
            before: r#"<ItemGroup>
  <Reference Include="Foo" />
</ItemGroup>"#,
            after: r#"<ItemGroup>
  <Reference Include="Foo">
    <HintPath>..\packages\Foo\lib\Foo.dll</HintPath>
  </Reference>
</ItemGroup>"#,
        },
    }
}

fn explain_known_prefix() -> Explanation {
    Explanation {
        title: "HintPath Uses Known Prefix",
        description: "\
Detects hint paths that do not start with any of the configured
`known_hint_path_prefixes`.

Binaries should come from a small set of well-known locations (a packages
folder, a checked-in `lib` folder). A hint path outside those locations usually
means:
- The reference was added through a file dialog pointing at a local build output
- The path depends on the directory layout of one developer's machine
- The binary bypasses the package restore that the rest of the build relies on

Configuring an empty prefix (`\"\"`) accepts every hint path.",
        remediation: "\
Move the binary into one of the known locations and update the hint path, or
extend `known_hint_path_prefixes` if the location is legitimate:

    known_hint_path_prefixes = [\"..\\\\packages\\\\\", \"..\\\\lib\\\\\"]",
        examples: ExamplePair {
            before: r#"<Reference Include="Foo">
  <HintPath>..\..\other-repo\bin\Debug\Foo.dll</HintPath>
</Reference>"#,
            after: r#"<Reference Include="Foo">
  <HintPath>..\packages\Foo\lib\Foo.dll</HintPath>
</Reference>"#,
        },
    }
}

fn explain_contains_reference_id() -> Explanation {
    Explanation {
        title: "HintPath Contains Reference Id",
        description: "\
Detects hint paths that do not contain the reference id (the `Include`
attribute) anywhere in the path.

Package folders and binaries are named after the assembly they contain. A hint
path that does not mention the reference id usually points at the wrong
binary, for example after copying a reference block and only changing the
`Include` attribute.

The comparison is a case-sensitive substring match.",
        remediation: "\
Point the hint path at the folder or file named after the referenced assembly:

    <Reference Include=\"Foo\">
      <HintPath>..\\packages\\Foo\\lib\\Foo.dll</HintPath>
    </Reference>",
        examples: ExamplePair {
            before: r#"<Reference Include="Foo">
  <HintPath>..\packages\Bar\lib\Bar.dll</HintPath>
</Reference>"#,
            after: r#"<Reference Include="Foo">
  <HintPath>..\packages\Foo\lib\Foo.dll</HintPath>
</Reference>"#,
        },
    }
}

fn explain_exists() -> Explanation {
    Explanation {
        title: "HintPath Exists On Disk",
        description: "\
Detects hint paths that do not resolve to an existing file.

The hint path is joined onto the project folder (relative segments such as
`..` are kept) and checked on the file system. A dangling hint path makes
MSBuild silently fall back to probing other locations, which hides broken
package restores and stale references.",
        remediation: "\
Restore the missing package, fix the path, or remove the reference if it is no
longer needed. Run hintguard after package restore so restored binaries are
present on disk.",
        examples: ExamplePair {
            before: r#"<Reference Include="Foo">
  <HintPath>..\packages\Foo.1.0.0\lib\Foo.dll</HintPath>
</Reference>
<!-- packages/ only contains Foo.2.0.0 -->"#,
            after: r#"<Reference Include="Foo">
  <HintPath>..\packages\Foo.2.0.0\lib\Foo.dll</HintPath>
</Reference>"#,
        },
    }
}

// --- Code-level explanations ---

fn explain_missing_hint_path() -> Explanation {
    let mut exp = explain_missing();
    exp.title = "Missing HintPath";
    exp
}

fn explain_wrong_prefix() -> Explanation {
    let mut exp = explain_known_prefix();
    exp.title = "HintPath With Wrong Prefix";
    exp
}

fn explain_reference_id_not_in_hint_path() -> Explanation {
    let mut exp = explain_contains_reference_id();
    exp.title = "Reference Id Not In HintPath";
    exp
}

fn explain_file_not_found() -> Explanation {
    let mut exp = explain_exists();
    exp.title = "HintPath File Not Found";
    exp
}
