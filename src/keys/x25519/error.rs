/// Errors that can occur during X25519 key agreement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum X25519Error {
    /// A 32-byte input was expected but a different length was received.
    ///
    /// Carries the name of the operation that rejected the input and the
    /// actual length received, so callers can tell which boundary failed.
    InvalidLength {
        operation: &'static str,
        length: usize,
    },
    /// A field element produced internally was not in `[0, p)`.
    ///
    /// The ladder always produces a reduced value, so this indicates an
    /// internal bug rather than a user-facing error.
    OutOfRange,
}
