//! Core error types (deterministic only)

use std::fmt;

use thiserror::Error;

use crate::chars::NameKind;

/// The kind of cluster that could not be attached to a syllable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// A shureq following an already finalized syllable
    Shureq,
    /// A mater lectionis with no cluster to attach to
    Mater,
    /// A vowelless aleph with no cluster to attach to
    QuiescedAleph,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::Shureq => write!(f, "shureq"),
            ViolationKind::Mater => write!(f, "mater"),
            ViolationKind::QuiescedAleph => write!(f, "quiesced aleph"),
        }
    }
}

/// Core algorithm errors (no I/O, no external failures)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Strict mode found a cluster that cannot be grouped
    #[error("cannot syllabify '{word}': {kind} '{cluster}' has no valid preceding cluster")]
    StructuralViolation {
        kind: ViolationKind,
        cluster: String,
        word: String,
    },

    /// A name query used a name outside the fixed tables
    #[error("'{name}' is not a valid {kind} name")]
    InvalidNameQuery { kind: NameKind, name: String },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
