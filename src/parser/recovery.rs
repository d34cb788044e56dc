//! Error recovery policy.

/// What the parser does after recording a diagnostic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Recovery {
    /// Skip through the next `.` and keep parsing clauses.
    #[default]
    Synchronize,
    /// Stop at the first diagnostic and return the clauses parsed so far.
    ///
    /// Remaining tokens are still drained so a threaded producer can finish.
    Abort,
}
