//! Decoder for Python's pickle serialization format, protocols 0
//! through 5.
//!
//! The decoder runs the pickle virtual machine over a byte buffer and
//! hands back a [`Value`]: native Rust data where pickle carried
//! native data (numbers, strings, bytes, lists, tuples, dicts, sets),
//! and an [`Object`] descriptor where the stream reconstructs a Python
//! object that has no native counterpart. Nothing is ever imported or
//! executed; class references stay symbolic ([`Global`]) unless a
//! caller-supplied resolver turns a descriptor into something else.
//!
//! Something to get you started:
//!
//! ```rust
//! use depickle::{load, DecodeOptions, Value};
//!
//! fn main() -> Result<(), depickle::Error> {
//!     // pickle.dumps((1, "two"), protocol=4)
//!     let data = b"\x80\x04\x95\x0b\x00\x00\x00\x00\x00\x00\x00K\x01\x8c\x03two\x94\x86\x94.";
//!     let (value, rest) = load(data, &DecodeOptions::new())?;
//!     assert!(rest.is_empty());
//!     match value {
//!         Value::Tuple(items) => assert_eq!(items[0], Value::Int(1)),
//!         other => panic!("unexpected value: {other}"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Decoding is one synchronous pass. Whatever follows the `STOP`
//! opcode is returned untouched, so concatenated pickle streams can be
//! peeled off one `load` at a time.
//!
//! Two things the value model deliberately does not do: represent
//! cyclic object graphs (a pickle can memoize a container and append
//! the container to itself; the result here holds a snapshot, not a
//! cycle), and distinguish reference identity in the output (slots
//! that shared a memo entry decode to equal values, not to one shared
//! allocation).

/// The typed decode error.
pub mod error;

/// The pickle virtual machine.
mod machine;

/// Pickle operations and opcode bytes.
pub mod ops;

/// Parsers for turning `&[u8]` into pickle operations.
pub mod parsers;

/// Resolver callbacks and decoder configuration.
pub mod resolve;

/// The decoded value model.
pub mod value;

pub use crate::error::{Error, Result};
pub use crate::ops::Op;
pub use crate::parsers::{parse_op, parse_ops};
pub use crate::resolve::{DecodeOptions, ObjectResolver, PersistentIdResolver, Resolution};
pub use crate::value::{Global, Object, Scope, Value};

/// Decode one pickle value from the front of `input`.
///
/// On success returns the value and the unconsumed suffix of `input`
/// (everything after the `STOP` opcode). Trailing bytes are not an
/// error; an empty suffix is the common case.
///
/// The returned value borrows text and byte payloads from `input`
/// where possible.
pub fn load<'a>(
    input: &'a [u8],
    options: &DecodeOptions<'a>,
) -> Result<(Value<'a>, &'a [u8])> {
    machine::Machine::new(input, options).run()
}
