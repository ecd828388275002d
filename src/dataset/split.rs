//! Dataset split type.

use serde::{Deserialize, Serialize};

/// Dataset split type.
///
/// There is no `Undefined` variant: the undefined state — a dataset whose
/// split has not been fixed yet — is the
/// [`DatasetLoader`](crate::dataset::DatasetLoader), which carries no data
/// and is the only type that derives concrete splits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Split {
    /// Training split
    Train,
    /// Validation split
    Validation,
    /// Test split
    Test,
    /// Every record the dataset defines, across all concrete splits
    All,
}

impl std::fmt::Display for Split {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Train => write!(f, "train"),
            Self::Validation => write!(f, "validation"),
            Self::Test => write!(f, "test"),
            Self::All => write!(f, "all"),
        }
    }
}
