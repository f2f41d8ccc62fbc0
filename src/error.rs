use thiserror::Error;

/// Alias for results produced while decoding a pickle stream.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong while decoding.
///
/// All errors are fatal; the decoder reports the first one it hits and
/// consumes nothing. Variants that arise at a particular point of the
/// stream carry the opcode name and the byte offset of that opcode.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The `PROTO` opcode announced a protocol this decoder doesn't speak.
    #[error("unsupported pickle protocol: {0}")]
    UnsupportedProtocol(u8),

    /// The stream used an opcode whose machinery is deliberately out of
    /// scope (the extension registry, out-of-band buffers).
    #[error("{feature} ({opcode} at offset {offset})")]
    UnsupportedFeature {
        feature: &'static str,
        opcode: &'static str,
        offset: usize,
    },

    /// A persistent-id opcode was hit without a configured resolver.
    #[error("encountered persistent id: {id}, but no resolver was specified")]
    MissingResolver { id: String },

    /// A user-supplied resolver failed instead of resolving or passing.
    #[error("{kind} resolver error: {message}")]
    ResolverContract {
        kind: &'static str,
        message: String,
    },

    /// The input ended in the middle of an opcode's operand (or before
    /// any `STOP` was seen).
    #[error("input truncated in {opcode} at offset {offset}")]
    Truncated { opcode: &'static str, offset: usize },

    /// An operand was present but unusable: a number that doesn't parse,
    /// a string missing its quotes or terminator, a negative length, an
    /// undefined memo index.
    #[error("malformed operand for {opcode} at offset {offset}: {message}")]
    MalformedOperand {
        opcode: &'static str,
        offset: usize,
        message: String,
    },

    /// A byte outside the defined opcode set.
    #[error("unknown opcode 0x{opcode:02x} at offset {offset}")]
    UnknownOpcode { opcode: u8, offset: usize },

    /// The operand or mark stack didn't have the shape the opcode needs:
    /// popping an empty stack, popping to a mark that was never set, or
    /// `STOP` with leftovers.
    #[error("stack underflow in {opcode} at offset {offset}: {message}")]
    StackUnderflow {
        opcode: &'static str,
        offset: usize,
        message: &'static str,
    },

    /// The value at the head of the stack (or just popped) is of a kind
    /// the opcode can't work with.
    #[error("type mismatch in {opcode} at offset {offset}: expected {expected}, found {found}")]
    TypeMismatch {
        opcode: &'static str,
        offset: usize,
        expected: &'static str,
        found: String,
    },
}
