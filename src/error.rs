use serde::Serialize;

/// Coarse classification every component error maps onto, so the rendering
/// layer can pick a status code without inspecting messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    /// Bad input from the caller; show the messages and carry on.
    Validation,
    /// The referenced record does not exist.
    NotFound,
    /// Not a failure: send the user elsewhere (e.g. checkout of an empty cart).
    Redirect,
    /// Storage or actor plumbing failed.
    Infrastructure,
}
