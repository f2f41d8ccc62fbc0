use std::str::Utf8Error;

use nom::{
    bytes::complete::{tag, take, take_till},
    combinator::{map, map_res},
    error::{ErrorKind, FromExternalError, ParseError},
    multi::length_data,
    number::complete::{be_f64, le_i32, le_u16, le_u32, le_u64, u8},
    IResult,
};

use crate::ops::{code, Op};

/// Parser-level error: where it happened and what kind of trouble it was.
///
/// The machine turns this into a crate [`Error`](crate::Error) with the
/// opcode name and byte offset filled in; on its own it only knows the
/// slice it choked on.
#[derive(Debug, Clone, PartialEq)]
pub struct OpError<'a> {
    pub input: &'a [u8],
    pub cause: OpErrorCause,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OpErrorCause {
    Nom(ErrorKind),
    Utf8,
    NegativeLength,
    UnknownOpcode(u8),
}

impl<'a> ParseError<&'a [u8]> for OpError<'a> {
    fn from_error_kind(input: &'a [u8], kind: ErrorKind) -> Self {
        OpError {
            input,
            cause: OpErrorCause::Nom(kind),
        }
    }

    fn append(_input: &'a [u8], _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<'a> FromExternalError<&'a [u8], Utf8Error> for OpError<'a> {
    fn from_external_error(input: &'a [u8], _kind: ErrorKind, _e: Utf8Error) -> Self {
        OpError {
            input,
            cause: OpErrorCause::Utf8,
        }
    }
}

pub type OpResult<'a, T> = IResult<&'a [u8], T, OpError<'a>>;

/// A newline-terminated line of UTF-8 text, newline excluded. The
/// terminator is mandatory; an unterminated tail is an error.
fn line(i: &[u8]) -> OpResult<'_, &str> {
    let (i, s) = map_res(take_till(|c| c == b'\n'), std::str::from_utf8)(i)?;
    let (i, _) = tag(b"\n")(i)?;
    Ok((i, s))
}

/// Counted payload whose length prefix is a signed 32-bit integer
/// (`BINSTRING`, `LONG4`). A negative count never comes out of a real
/// pickler and is rejected rather than reinterpreted.
fn signed_length_data(i: &[u8]) -> OpResult<'_, &[u8]> {
    let (rest, n) = le_i32(i)?;
    match usize::try_from(n) {
        Ok(n) => take(n)(rest),
        Err(_) => Err(nom::Err::Failure(OpError {
            input: i,
            cause: OpErrorCause::NegativeLength,
        })),
    }
}

/// Parse a single op from the front of `i`, returning the rest.
///
/// `UNICODE` lines are kept verbatim (they must be valid UTF-8); the
/// raw-unicode-escape decoding Python applies to this long-obsolete
/// opcode is deliberately not reproduced.
pub fn parse_op(i: &[u8]) -> OpResult<'_, Op<'_>> {
    let (i, opcode) = u8(i)?;
    Ok((
        i,
        match opcode {
            code::MARK => Op::Mark,
            code::STOP => Op::Stop,
            code::POP => Op::Pop,
            code::POP_MARK => Op::PopMark,
            code::DUP => Op::Dup,
            code::FLOAT => return map(line, Op::Float)(i),
            code::INT => return map(line, Op::Int)(i),
            code::BININT => return map(le_i32, Op::BinInt)(i),
            code::BININT1 => return map(u8, Op::BinInt1)(i),
            code::BININT2 => return map(le_u16, Op::BinInt2)(i),
            code::LONG => return map(line, Op::Long)(i),
            code::LONG1 => return map(length_data(u8), Op::Long1)(i),
            code::LONG4 => return map(signed_length_data, Op::Long4)(i),
            code::BINFLOAT => return map(be_f64, Op::BinFloat)(i),
            code::NONE => Op::None,
            code::NEWTRUE => Op::NewTrue,
            code::NEWFALSE => Op::NewFalse,
            code::STRING => return map(line, Op::String)(i),
            code::BINSTRING => return map(signed_length_data, Op::BinString)(i),
            code::SHORT_BINSTRING => return map(length_data(u8), Op::ShortBinString)(i),
            code::UNICODE => return map(line, Op::Unicode)(i),
            code::BINUNICODE => {
                return map(
                    map_res(length_data(le_u32), std::str::from_utf8),
                    Op::BinUnicode,
                )(i)
            }
            code::SHORT_BINUNICODE => {
                return map(
                    map_res(length_data(u8), std::str::from_utf8),
                    Op::ShortBinUnicode,
                )(i)
            }
            code::BINUNICODE8 => {
                return map(
                    map_res(length_data(le_u64), std::str::from_utf8),
                    Op::BinUnicode8,
                )(i)
            }
            code::BINBYTES => return map(length_data(le_u32), Op::BinBytes)(i),
            code::SHORT_BINBYTES => return map(length_data(u8), Op::ShortBinBytes)(i),
            code::BINBYTES8 => return map(length_data(le_u64), Op::BinBytes8)(i),
            code::BYTEARRAY8 => return map(length_data(le_u64), Op::ByteArray8)(i),
            code::EMPTY_LIST => Op::EmptyList,
            code::EMPTY_TUPLE => Op::EmptyTuple,
            code::EMPTY_DICT => Op::EmptyDict,
            code::EMPTY_SET => Op::EmptySet,
            code::LIST => Op::List,
            code::DICT => Op::Dict,
            code::TUPLE => Op::Tuple,
            code::TUPLE1 => Op::Tuple1,
            code::TUPLE2 => Op::Tuple2,
            code::TUPLE3 => Op::Tuple3,
            code::FROZENSET => Op::FrozenSet,
            code::APPEND => Op::Append,
            code::APPENDS => Op::Appends,
            code::SETITEM => Op::SetItem,
            code::SETITEMS => Op::SetItems,
            code::ADDITEMS => Op::AddItems,
            code::GET => return map(line, Op::Get)(i),
            code::BINGET => return map(u8, Op::BinGet)(i),
            code::LONG_BINGET => return map(le_u32, Op::LongBinGet)(i),
            code::PUT => return map(line, Op::Put)(i),
            code::BINPUT => return map(u8, Op::BinPut)(i),
            code::LONG_BINPUT => return map(le_u32, Op::LongBinPut)(i),
            code::MEMOIZE => Op::Memoize,
            code::GLOBAL => {
                let (i, module) = line(i)?;
                return map(line, move |name| Op::Global(module, name))(i);
            }
            code::STACK_GLOBAL => Op::StackGlobal,
            code::REDUCE => Op::Reduce,
            code::BUILD => Op::Build,
            code::INST => {
                let (i, module) = line(i)?;
                return map(line, move |name| Op::Inst(module, name))(i);
            }
            code::OBJ => Op::Obj,
            code::NEWOBJ => Op::NewObj,
            code::NEWOBJ_EX => Op::NewObjEx,
            code::PERSID => return map(line, Op::PersId)(i),
            code::BINPERSID => Op::BinPersId,
            code::PROTO => return map(u8, Op::Proto)(i),
            code::FRAME => return map(le_u64, Op::Frame)(i),
            code::EXT1 => return map(u8, Op::Ext1)(i),
            code::EXT2 => return map(le_u16, Op::Ext2)(i),
            code::EXT4 => return map(le_i32, Op::Ext4)(i),
            code::NEXT_BUFFER => Op::NextBuffer,
            code::READONLY_BUFFER => Op::ReadonlyBuffer,
            other => {
                return Err(nom::Err::Failure(OpError {
                    input: i,
                    cause: OpErrorCause::UnknownOpcode(other),
                }))
            }
        },
    ))
}

/// Parse ops up to and including `STOP`, returning the unconsumed
/// suffix. Handy for looking at a stream without running it.
pub fn parse_ops(mut i: &[u8]) -> OpResult<'_, Vec<Op<'_>>> {
    let mut ops = Vec::new();
    loop {
        let (rest, op) = parse_op(i)?;
        i = rest;
        let done = matches!(op, Op::Stop);
        ops.push(op);
        if done {
            return Ok((i, ops));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_byte_and_counted_ops() {
        assert_eq!(parse_op(b"N rest"), Ok((&b" rest"[..], Op::None)));
        assert_eq!(parse_op(b"K\x2a"), Ok((&b""[..], Op::BinInt1(42))));
        assert_eq!(
            parse_op(b"\x8c\x02hi tail"),
            Ok((&b" tail"[..], Op::ShortBinUnicode("hi")))
        );
        assert_eq!(
            parse_op(b"J\xfe\xff\xff\xff"),
            Ok((&b""[..], Op::BinInt(-2)))
        );
    }

    #[test]
    fn line_ops_require_the_newline() {
        assert_eq!(parse_op(b"I42\nX"), Ok((&b"X"[..], Op::Int("42"))));
        assert!(parse_op(b"I42").is_err());
    }

    #[test]
    fn global_reads_two_lines() {
        assert_eq!(
            parse_op(b"cdatetime\ndate\n."),
            Ok((&b"."[..], Op::Global("datetime", "date")))
        );
    }

    #[test]
    fn negative_binstring_count_is_rejected() {
        let err = parse_op(b"T\xff\xff\xff\xffzzzz").unwrap_err();
        match err {
            nom::Err::Failure(e) => assert_eq!(e.cause, OpErrorCause::NegativeLength),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unknown_opcode_is_a_failure() {
        let err = parse_op(b"\xff").unwrap_err();
        match err {
            nom::Err::Failure(e) => assert_eq!(e.cause, OpErrorCause::UnknownOpcode(0xff)),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_ops_stops_at_stop() {
        let (rest, ops) = parse_ops(b"\x80\x04K\x01.garbage").unwrap();
        assert_eq!(rest, b"garbage");
        assert_eq!(
            ops,
            vec![Op::Proto(4), Op::BinInt1(1), Op::Stop]
        );
    }
}
