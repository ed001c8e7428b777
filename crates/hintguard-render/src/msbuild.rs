//! MSBuild-style log lines, one per violation.

use std::fmt;

/// Level a violation line is logged at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildLevel {
    Warning,
    Error,
}

impl BuildLevel {
    pub fn from_treat_warnings_as_errors(treat: bool) -> Self {
        if treat {
            BuildLevel::Error
        } else {
            BuildLevel::Warning
        }
    }
}

/// Settings echoed at the end of every line so a build log is self-explanatory.
#[derive(Clone, Copy, Debug)]
pub struct BuildLogContext<'a> {
    pub project_folder: &'a str,
    pub excluded_reference_prefixes: &'a [String],
    pub known_hint_path_prefixes: &'a [String],
    pub treat_warnings_as_errors: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildMessage {
    pub level: BuildLevel,
    pub text: String,
}

impl fmt::Display for BuildMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Format one violation as a build log line.
///
/// A missing hint path renders as an empty string.
pub fn render_build_message(
    message: &str,
    project_file: &str,
    reference: &str,
    hint_path: Option<&str>,
    ctx: &BuildLogContext<'_>,
) -> BuildMessage {
    let text = format!(
        "{} in .csproj {} for reference {} and HintPath {}. ProjectFolder {}. ExcludedReferencePrefixes {}. KnownHintPathPrefixes {}",
        message,
        project_file,
        reference,
        hint_path.unwrap_or(""),
        ctx.project_folder,
        ctx.excluded_reference_prefixes.join(","),
        ctx.known_hint_path_prefixes.join(","),
    );

    BuildMessage {
        level: BuildLevel::from_treat_warnings_as_errors(ctx.treat_warnings_as_errors),
        text,
    }
}
