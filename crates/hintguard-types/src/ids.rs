//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_HINTPATH_MISSING: &str = "hintpath.missing";
pub const CHECK_HINTPATH_KNOWN_PREFIX: &str = "hintpath.known_prefix";
pub const CHECK_HINTPATH_CONTAINS_REFERENCE_ID: &str = "hintpath.contains_reference_id";
pub const CHECK_HINTPATH_EXISTS: &str = "hintpath.exists";

// Codes: hintpath.missing
pub const CODE_MISSING_HINT_PATH: &str = "missing_hint_path";

// Codes: hintpath.known_prefix
pub const CODE_WRONG_PREFIX: &str = "wrong_prefix";

// Codes: hintpath.contains_reference_id
pub const CODE_REFERENCE_ID_NOT_IN_HINT_PATH: &str = "reference_id_not_in_hint_path";

// Codes: hintpath.exists
pub const CODE_FILE_NOT_FOUND: &str = "file_not_found";

// Tool-level
pub const CHECK_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
