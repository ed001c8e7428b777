use hintguard_types::ids;
use std::fmt;

pub const MISSING_HINT_PATH: &str = "missing HintPath";
pub const HINT_PATH_DOES_NOT_CONTAIN_REFERENCE_ID: &str = "HintPath does not contain reference id";
pub const HINT_PATH_WITH_WRONG_PREFIX: &str = "HintPath does not start with known prefix";
pub const HINT_PATH_DOES_NOT_EXIST_ON_FILE_SYSTEM: &str =
    "the file referenced by the HintPath does not exist";

/// The closed set of rule failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ViolationKind {
    MissingHintPath,
    HintPathWithWrongPrefix,
    HintPathDoesNotContainReferenceId,
    HintPathDoesNotExistOnFileSystem,
}

impl ViolationKind {
    /// All kinds, in rule evaluation order.
    pub const ALL: [ViolationKind; 4] = [
        ViolationKind::MissingHintPath,
        ViolationKind::HintPathWithWrongPrefix,
        ViolationKind::HintPathDoesNotContainReferenceId,
        ViolationKind::HintPathDoesNotExistOnFileSystem,
    ];

    pub fn message(self) -> &'static str {
        match self {
            ViolationKind::MissingHintPath => MISSING_HINT_PATH,
            ViolationKind::HintPathWithWrongPrefix => HINT_PATH_WITH_WRONG_PREFIX,
            ViolationKind::HintPathDoesNotContainReferenceId => {
                HINT_PATH_DOES_NOT_CONTAIN_REFERENCE_ID
            }
            ViolationKind::HintPathDoesNotExistOnFileSystem => {
                HINT_PATH_DOES_NOT_EXIST_ON_FILE_SYSTEM
            }
        }
    }

    pub fn check_id(self) -> &'static str {
        match self {
            ViolationKind::MissingHintPath => ids::CHECK_HINTPATH_MISSING,
            ViolationKind::HintPathWithWrongPrefix => ids::CHECK_HINTPATH_KNOWN_PREFIX,
            ViolationKind::HintPathDoesNotContainReferenceId => {
                ids::CHECK_HINTPATH_CONTAINS_REFERENCE_ID
            }
            ViolationKind::HintPathDoesNotExistOnFileSystem => ids::CHECK_HINTPATH_EXISTS,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            ViolationKind::MissingHintPath => ids::CODE_MISSING_HINT_PATH,
            ViolationKind::HintPathWithWrongPrefix => ids::CODE_WRONG_PREFIX,
            ViolationKind::HintPathDoesNotContainReferenceId => {
                ids::CODE_REFERENCE_ID_NOT_IN_HINT_PATH
            }
            ViolationKind::HintPathDoesNotExistOnFileSystem => ids::CODE_FILE_NOT_FOUND,
        }
    }

    pub fn help(self) -> &'static str {
        match self {
            ViolationKind::MissingHintPath => {
                "Add a <HintPath> to the reference, or exclude its id prefix."
            }
            ViolationKind::HintPathWithWrongPrefix => {
                "Reference binaries from one of the known hint path prefixes."
            }
            ViolationKind::HintPathDoesNotContainReferenceId => {
                "Point the HintPath at the folder or file named after the reference."
            }
            ViolationKind::HintPathDoesNotExistOnFileSystem => {
                "Restore the referenced binary or fix the HintPath."
            }
        }
    }

    pub fn from_check_id(check_id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.check_id() == check_id)
    }
}

/// A single rule failure for one reference.
///
/// Equality is structural: two violations are equal when reference, hint path
/// and kind all match.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Violation {
    pub reference: String,
    /// `None` only for [`ViolationKind::MissingHintPath`].
    pub hint_path: Option<String>,
    pub kind: ViolationKind,
}

impl Violation {
    pub fn new(reference: &str, hint_path: Option<&str>, kind: ViolationKind) -> Self {
        Self {
            reference: reference.to_string(),
            hint_path: hint_path.map(str::to_string),
            kind,
        }
    }

    pub fn message(&self) -> &'static str {
        self.kind.message()
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.hint_path {
            Some(hint_path) => write!(
                f,
                "{} (reference '{}', HintPath '{}')",
                self.message(),
                self.reference,
                hint_path
            ),
            None => write!(f, "{} (reference '{}')", self.message(), self.reference),
        }
    }
}
