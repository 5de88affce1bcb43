/// Crate result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Contract violations around absent values.
///
/// Neither variant is a recoverable runtime condition: both signal a caller
/// mistake and are returned as-is, never logged or replaced with a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Tried to construct a value-carrying container from an absent source
    #[error("cannot construct an option with a value from an absent value")]
    AbsentValue,
    /// Tried to read the value of a container without a value
    #[error("cannot access the value of an option without a value")]
    NoValue,
}
