//! Invalid-argument errors raised before any script is scheduled.

use std::fmt;

use thiserror::Error;

/// Which side of the link an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The component whose click is forwarded.
    Trigger,
    /// The upload widget receiving the forwarded click.
    UploadTarget,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Trigger => write!(f, "component"),
            Role::UploadTarget => write!(f, "uploader"),
        }
    }
}

/// Precondition violation, raised synchronously at call time. The caller must
/// fix its configuration; these are never retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LinkError {
    /// The component has no id, or an empty one.
    #[error("{role} id must not be empty")]
    MissingId { role: Role },
    /// The component is not part of the rendered view tree, so its DOM node
    /// cannot exist yet.
    #[error("{role} '{id}' must be visible")]
    NotVisible { role: Role, id: String },
}
