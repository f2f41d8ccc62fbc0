use std::borrow::Cow;
use std::collections::HashMap;
use std::mem;

use nom::error::ErrorKind;
use num_bigint::BigInt;

use crate::error::{Error, Result};
use crate::ops::{self, Op};
use crate::parsers::{self, OpError, OpErrorCause};
use crate::resolve::{self, DecodeOptions, Resolution};
use crate::value::{self, Global, Object, Scope, Value};

const HIGHEST_PROTOCOL: u8 = 5;

/// The memo, split in two so that sharing survives mutation.
///
/// `slots` maps a stream-level memo index to a handle; `store` maps the
/// handle to the live value. Memoizing swaps the stack top for a
/// `Value::Ref(handle)` and parks the real value in the store, so every
/// later `GET` of that index pushes the same handle and mutating
/// opcodes that land on a handle write through to the one stored copy.
/// Re-binding an index (a second `PUT` at the same slot) mints a fresh
/// handle; holders of the old one keep the old value.
///
/// A stored value can itself be a handle (memoizing an already
/// memoized top). Chains are finite because a handle can only refer to
/// older store entries, so both lookups just walk them.
struct Memo<'a> {
    slots: HashMap<u32, usize>,
    store: Vec<Value<'a>>,
}

impl<'a> Memo<'a> {
    fn new() -> Self {
        Memo {
            slots: HashMap::new(),
            store: Vec::new(),
        }
    }

    fn value(&self, mut handle: usize) -> &Value<'a> {
        loop {
            match &self.store[handle] {
                Value::Ref(next) => handle = *next,
                other => return other,
            }
        }
    }

    fn value_mut(&mut self, mut handle: usize) -> &mut Value<'a> {
        loop {
            match self.store[handle] {
                Value::Ref(next) => handle = next,
                _ => break,
            }
        }
        &mut self.store[handle]
    }
}

/// The pickle virtual machine: an operand stack, a stack of stacks
/// saved by `MARK`, and the memo.
///
/// Values are finalized the moment they leave the operand stack:
/// handles are swapped for their stored value and object descriptors
/// run through the resolvers. Container-building opcodes pop their
/// inputs before pushing the container, so by the time anything is
/// nested its pieces are already in final form and resolution is
/// post-order without ever walking a tree.
pub(crate) struct Machine<'a, 'o> {
    data: &'a [u8],
    options: &'o DecodeOptions<'a>,
    stack: Vec<Value<'a>>,
    metastack: Vec<Vec<Value<'a>>>,
    memo: Memo<'a>,
    /// Name and offset of the opcode being executed, for diagnostics.
    opcode: &'static str,
    offset: usize,
}

impl<'a, 'o> Machine<'a, 'o> {
    pub(crate) fn new(data: &'a [u8], options: &'o DecodeOptions<'a>) -> Self {
        Machine {
            data,
            options,
            stack: Vec::new(),
            metastack: Vec::new(),
            memo: Memo::new(),
            opcode: "",
            offset: 0,
        }
    }

    /// Drive the stream to `STOP` and return the result along with the
    /// unconsumed suffix.
    pub(crate) fn run(mut self) -> Result<(Value<'a>, &'a [u8])> {
        let mut rest = self.data;
        loop {
            let at = rest;
            self.offset = self.data.len() - at.len();
            let (next, op) = match parsers::parse_op(at) {
                Ok(parsed) => parsed,
                Err(err) => return Err(self.parse_error(err, at)),
            };
            self.opcode = ops::name(at[0]);
            rest = next;
            if matches!(op, Op::Stop) {
                let value = self.pop()?;
                if !self.stack.is_empty() {
                    return Err(self.underflow("operand stack not empty at STOP"));
                }
                if !self.metastack.is_empty() {
                    return Err(self.underflow("mark stack not empty at STOP"));
                }
                return Ok((value, rest));
            }
            self.exec(op)?;
        }
    }

    fn exec(&mut self, op: Op<'a>) -> Result<()> {
        match op {
            Op::Stop => unreachable!("STOP is handled by the driver loop"),

            // Stack manipulation.
            Op::Mark => {
                let saved = mem::take(&mut self.stack);
                self.metastack.push(saved);
            }
            Op::Pop => {
                // An empty stack means the top is a mark; discard it.
                if self.stack.is_empty() {
                    self.pop_mark()?;
                } else {
                    self.pop()?;
                }
            }
            Op::PopMark => {
                self.pop_mark()?;
            }
            Op::Dup => match self.stack.last() {
                Some(top) => {
                    let copy = top.clone();
                    self.stack.push(copy);
                }
                None => return Err(self.underflow("DUP on empty stack")),
            },

            // Literals.
            Op::None => self.stack.push(Value::None),
            Op::NewTrue => self.stack.push(Value::Bool(true)),
            Op::NewFalse => self.stack.push(Value::Bool(false)),

            // Integers.
            Op::Int(text) => {
                let value = self.parse_int_line(text)?;
                self.stack.push(value);
            }
            Op::BinInt(n) => self.stack.push(Value::Int(n.into())),
            Op::BinInt1(n) => self.stack.push(Value::Int(n.into())),
            Op::BinInt2(n) => self.stack.push(Value::Int(n.into())),
            Op::Long(text) => {
                let value = self.parse_long_line(text)?;
                self.stack.push(value);
            }
            Op::Long1(payload) | Op::Long4(payload) => {
                let n = BigInt::from_signed_bytes_le(payload);
                self.stack.push(value::int_value(n));
            }

            // Floats.
            Op::Float(text) => {
                let value: f64 = text
                    .trim()
                    .parse()
                    .map_err(|_| self.malformed(format!("{text:?} is not a float literal")))?;
                self.stack.push(Value::Float(value));
            }
            Op::BinFloat(value) => self.stack.push(Value::Float(value)),

            // Text and bytes.
            Op::String(text) => {
                let payload = self.decode_string_literal(text)?;
                self.stack.push(Value::Bytes(payload));
            }
            Op::BinString(payload) | Op::ShortBinString(payload) => {
                self.stack.push(Value::Bytes(Cow::Borrowed(payload)));
            }
            Op::Unicode(text) => self.stack.push(Value::Text(Cow::Borrowed(text))),
            Op::BinUnicode(text) | Op::ShortBinUnicode(text) | Op::BinUnicode8(text) => {
                self.stack.push(Value::Text(Cow::Borrowed(text)));
            }
            Op::BinBytes(payload)
            | Op::ShortBinBytes(payload)
            | Op::BinBytes8(payload)
            | Op::ByteArray8(payload) => {
                self.stack.push(Value::Bytes(Cow::Borrowed(payload)));
            }

            // Container constructors.
            Op::EmptyList => self.stack.push(Value::List(Vec::new())),
            Op::EmptyTuple => self.stack.push(Value::Tuple(Vec::new())),
            Op::EmptyDict => self.stack.push(Value::Dict(Vec::new())),
            Op::EmptySet => self.stack.push(Value::Set(Vec::new())),
            Op::List => {
                let items = self.pop_mark()?;
                self.stack.push(Value::List(items));
            }
            Op::Tuple => {
                let items = self.pop_mark()?;
                self.stack.push(Value::Tuple(items));
            }
            Op::Tuple1 => {
                let a = self.pop()?;
                self.stack.push(Value::Tuple(vec![a]));
            }
            Op::Tuple2 => {
                let b = self.pop()?;
                let a = self.pop()?;
                self.stack.push(Value::Tuple(vec![a, b]));
            }
            Op::Tuple3 => {
                let c = self.pop()?;
                let b = self.pop()?;
                let a = self.pop()?;
                self.stack.push(Value::Tuple(vec![a, b, c]));
            }
            Op::Dict => {
                let items = self.pop_mark()?;
                let pairs = self.pair_up(items)?;
                let mut entries = Vec::with_capacity(pairs.len());
                for (key, val) in pairs {
                    value::dict_insert(&mut entries, key, val);
                }
                self.stack.push(Value::Dict(entries));
            }
            Op::FrozenSet => {
                let items = self.pop_mark()?;
                let mut set = Vec::with_capacity(items.len());
                for item in items {
                    value::set_insert(&mut set, item);
                }
                self.stack.push(Value::FrozenSet(set));
            }

            // Container mutators.
            Op::Append => {
                let item = self.pop()?;
                self.extend_sequence(vec![item])?;
            }
            Op::Appends => {
                let items = self.pop_mark()?;
                self.extend_sequence(items)?;
            }
            Op::SetItem => {
                let val = self.pop()?;
                let key = self.pop()?;
                self.insert_pairs(vec![(key, val)])?;
            }
            Op::SetItems => {
                let items = self.pop_mark()?;
                let pairs = self.pair_up(items)?;
                self.insert_pairs(pairs)?;
            }
            Op::AddItems => {
                let items = self.pop_mark()?;
                self.add_items(items)?;
            }

            // Memo.
            Op::Get(text) => {
                let index = self.parse_memo_index(text)?;
                self.push_memo_ref(index)?;
            }
            Op::BinGet(index) => self.push_memo_ref(index.into())?,
            Op::LongBinGet(index) => self.push_memo_ref(index)?,
            Op::Put(text) => {
                let index = self.parse_memo_index(text)?;
                self.memoize_at(index)?;
            }
            Op::BinPut(index) => self.memoize_at(index.into())?,
            Op::LongBinPut(index) => self.memoize_at(index)?,
            Op::Memoize => {
                let index = self.memo.slots.len() as u32;
                self.memoize_at(index)?;
            }

            // Globals.
            Op::Global(module, name) => {
                let global = Global::module(module, name);
                self.stack.push(Value::Global(Box::new(global)));
            }
            Op::StackGlobal => {
                let name = match self.pop()? {
                    Value::Text(name) => name,
                    other => return Err(self.mismatch("str name", &other)),
                };
                let scope = match self.pop()? {
                    Value::Text(module) => Scope::Module(module),
                    Value::Global(global) => Scope::Global(global),
                    other => return Err(self.mismatch("str or global scope", &other)),
                };
                self.stack
                    .push(Value::Global(Box::new(Global { scope, name })));
            }

            // Reductions.
            Op::Reduce => {
                let args = self.pop_args_tuple()?;
                let constructor = self.pop_constructor_path()?;
                self.stack
                    .push(Value::Object(Box::new(Object::new(constructor, args))));
            }
            Op::Build => {
                let state = self.pop()?;
                let (opcode, offset) = (self.opcode, self.offset);
                match self.top_target()? {
                    Value::Object(object) => object.state = Some(state),
                    other => {
                        return Err(Error::TypeMismatch {
                            opcode,
                            offset,
                            expected: "object",
                            found: value::kind(other).to_string(),
                        })
                    }
                }
            }
            Op::Inst(module, name) => {
                let args = self.pop_mark()?;
                let constructor = Global::module(module, name).path();
                self.stack
                    .push(Value::Object(Box::new(Object::new(constructor, args))));
            }
            Op::Obj => {
                let mut items = self.pop_mark()?;
                if items.is_empty() {
                    return Err(self.underflow("OBJ with no class after the mark"));
                }
                let class = items.remove(0);
                let constructor = match class {
                    Value::Global(global) => global.path(),
                    other => return Err(self.mismatch("global class", &other)),
                };
                self.stack
                    .push(Value::Object(Box::new(Object::new(constructor, items))));
            }
            Op::NewObj => {
                let args = self.pop()?;
                let class = self.pop()?;
                self.push_newobj(class, args, Vec::new())?;
            }
            Op::NewObjEx => {
                let kwargs = match self.pop()? {
                    Value::Dict(entries) => entries
                        .into_iter()
                        .map(|(key, val)| match key {
                            Value::Text(name) => Ok((name, val)),
                            other => Err(self.mismatch("str keyword name", &other)),
                        })
                        .collect::<Result<Vec<_>>>()?,
                    other => return Err(self.mismatch("dict of keywords", &other)),
                };
                let args = self.pop()?;
                let class = self.pop()?;
                self.push_newobj(class, args, kwargs)?;
            }

            // Persistent ids.
            Op::PersId(text) => {
                self.push_persistent(Value::Text(Cow::Borrowed(text)))?;
            }
            Op::BinPersId => {
                let id = self.pop()?;
                self.push_persistent(id)?;
            }

            // Machine control.
            Op::Proto(n) => {
                if n > HIGHEST_PROTOCOL {
                    return Err(Error::UnsupportedProtocol(n));
                }
            }
            // A length hint for streaming consumers; irrelevant here.
            Op::Frame(_) => {}
            Op::Ext1(_) | Op::Ext2(_) | Op::Ext4(_) => {
                return Err(self.unsupported("extension registry not supported"))
            }
            Op::NextBuffer => {
                return Err(self.unsupported("out-of-band buffers not supported"))
            }
            Op::ReadonlyBuffer => {}
        }
        Ok(())
    }

    // Stack plumbing. Every value that leaves the stack is finalized on
    // the way out.

    fn pop(&mut self) -> Result<Value<'a>> {
        match self.stack.pop() {
            Some(value) => self.finalize(value),
            None => Err(self.underflow("pop on empty stack")),
        }
    }

    fn pop_mark(&mut self) -> Result<Vec<Value<'a>>> {
        let saved = match self.metastack.pop() {
            Some(saved) => saved,
            None => return Err(self.underflow("pop to mark with no mark set")),
        };
        let items = mem::replace(&mut self.stack, saved);
        items.into_iter().map(|item| self.finalize(item)).collect()
    }

    fn finalize(&self, value: Value<'a>) -> Result<Value<'a>> {
        let value = match value {
            Value::Ref(handle) => self.memo.value(handle).clone(),
            other => other,
        };
        match value {
            Value::Object(object) => self.resolve_object(*object),
            other => Ok(other),
        }
    }

    fn resolve_object(&self, object: Object<'a>) -> Result<Value<'a>> {
        if let Some(replacement) = resolve::builtin(&object) {
            return Ok(replacement);
        }
        if let Some(resolver) = &self.options.object_resolver {
            match resolver(&object) {
                Ok(Resolution::Resolved(replacement)) => return Ok(replacement),
                Ok(Resolution::Unresolved) => {}
                Err(err) => {
                    return Err(Error::ResolverContract {
                        kind: "object",
                        message: format!("{err:#}"),
                    })
                }
            }
        }
        Ok(Value::Object(Box::new(object)))
    }

    /// The stack top as a mutation target, reaching through a memo
    /// handle to the stored value if that's what is on top.
    fn top_target(&mut self) -> Result<&mut Value<'a>> {
        if self.stack.is_empty() {
            return Err(self.underflow("no stack top"));
        }
        if let Some(Value::Ref(handle)) = self.stack.last() {
            let handle = *handle;
            return Ok(self.memo.value_mut(handle));
        }
        Ok(self.stack.last_mut().expect("stack checked non-empty"))
    }

    // Mutator dispatch: containers take the items directly, object
    // descriptors accumulate them for whoever reconstructs the object.

    fn extend_sequence(&mut self, items: Vec<Value<'a>>) -> Result<()> {
        let (opcode, offset) = (self.opcode, self.offset);
        match self.top_target()? {
            Value::List(elems) => elems.extend(items),
            Value::Object(object) => object.append_items.extend(items),
            other => {
                return Err(Error::TypeMismatch {
                    opcode,
                    offset,
                    expected: "list or object",
                    found: value::kind(other).to_string(),
                })
            }
        }
        Ok(())
    }

    fn insert_pairs(&mut self, pairs: Vec<(Value<'a>, Value<'a>)>) -> Result<()> {
        let (opcode, offset) = (self.opcode, self.offset);
        match self.top_target()? {
            Value::Dict(entries) => {
                for (key, val) in pairs {
                    value::dict_insert(entries, key, val);
                }
            }
            Value::Object(object) => object.set_items.extend(pairs),
            other => {
                return Err(Error::TypeMismatch {
                    opcode,
                    offset,
                    expected: "dict or object",
                    found: value::kind(other).to_string(),
                })
            }
        }
        Ok(())
    }

    fn add_items(&mut self, items: Vec<Value<'a>>) -> Result<()> {
        let (opcode, offset) = (self.opcode, self.offset);
        match self.top_target()? {
            Value::Set(set) => {
                for item in items {
                    value::set_insert(set, item);
                }
            }
            Value::Object(object) => object.append_items.extend(items),
            other => {
                return Err(Error::TypeMismatch {
                    opcode,
                    offset,
                    expected: "set or object",
                    found: value::kind(other).to_string(),
                })
            }
        }
        Ok(())
    }

    // Memo plumbing.

    fn push_memo_ref(&mut self, index: u32) -> Result<()> {
        match self.memo.slots.get(&index) {
            Some(&handle) => {
                self.stack.push(Value::Ref(handle));
                Ok(())
            }
            None => Err(self.malformed(format!("memo index {index} is not defined"))),
        }
    }

    fn memoize_at(&mut self, index: u32) -> Result<()> {
        if self.stack.is_empty() {
            return Err(self.underflow("no stack top to memoize"));
        }
        let handle = self.memo.store.len();
        let top = self.stack.last_mut().expect("stack checked non-empty");
        let parked = mem::replace(top, Value::Ref(handle));
        self.memo.store.push(parked);
        self.memo.slots.insert(index, handle);
        Ok(())
    }

    // Reduction helpers.

    fn pop_args_tuple(&mut self) -> Result<Vec<Value<'a>>> {
        match self.pop()? {
            Value::Tuple(items) => Ok(items),
            other => Err(self.mismatch("tuple of arguments", &other)),
        }
    }

    fn pop_constructor_path(&mut self) -> Result<String> {
        match self.pop()? {
            Value::Global(global) => Ok(global.path()),
            other => Err(self.mismatch("global callable", &other)),
        }
    }

    fn push_newobj(
        &mut self,
        class: Value<'a>,
        args: Value<'a>,
        kwargs: Vec<(Cow<'a, str>, Value<'a>)>,
    ) -> Result<()> {
        let args = match args {
            Value::Tuple(items) => items,
            other => return Err(self.mismatch("tuple of arguments", &other)),
        };
        let global = match class {
            Value::Global(global) => global,
            other => return Err(self.mismatch("global class", &other)),
        };
        let mut object = Object::new(
            format!("{}.__new__", global.path()),
            Vec::with_capacity(args.len() + 1),
        );
        object.args.push(Value::Global(global));
        object.args.extend(args);
        object.kwargs = kwargs;
        self.stack.push(Value::Object(Box::new(object)));
        Ok(())
    }

    fn push_persistent(&mut self, id: Value<'a>) -> Result<()> {
        match &self.options.persistent_id_resolver {
            Some(resolver) => match resolver(id) {
                Ok(value) => {
                    self.stack.push(value);
                    Ok(())
                }
                Err(err) => Err(Error::ResolverContract {
                    kind: "persistent id",
                    message: format!("{err:#}"),
                }),
            },
            None => Err(Error::MissingResolver { id: id.to_string() }),
        }
    }

    // Operand interpretation.

    fn parse_int_line(&self, text: &str) -> Result<Value<'a>> {
        // Exactly "00"/"01" are the protocol-0 spellings of the bools.
        match text {
            "00" => return Ok(Value::Bool(false)),
            "01" => return Ok(Value::Bool(true)),
            _ => {}
        }
        self.parse_decimal(text)
    }

    fn parse_long_line(&self, text: &str) -> Result<Value<'a>> {
        let text = text.trim();
        let text = text.strip_suffix('L').unwrap_or(text);
        if text.is_empty() {
            return Err(self.malformed("empty integer literal"));
        }
        self.parse_decimal(text)
    }

    fn parse_decimal(&self, text: &str) -> Result<Value<'a>> {
        let text = text.trim();
        if let Ok(small) = text.parse::<i64>() {
            return Ok(Value::Int(small));
        }
        text.parse::<BigInt>()
            .map(value::int_value)
            .map_err(|_| self.malformed(format!("{text:?} is not a decimal integer")))
    }

    fn parse_memo_index(&self, text: &str) -> Result<u32> {
        text.trim()
            .parse()
            .map_err(|_| self.malformed(format!("{text:?} is not a memo index")))
    }

    /// Strip the quotes off a protocol-0 `STRING` argument and decode
    /// Python's escape syntax. The result is bytes: this opcode carries
    /// a Python 2 8-bit string, not text.
    fn decode_string_literal(&self, text: &'a str) -> Result<Cow<'a, [u8]>> {
        let bytes = text.as_bytes();
        if bytes.len() < 2 {
            return Err(self.malformed("the STRING argument must be quoted"));
        }
        let quote = bytes[0];
        if (quote != b'\'' && quote != b'"') || bytes[bytes.len() - 1] != quote {
            return Err(self.malformed("mismatched quotes around the STRING argument"));
        }
        let inner = &bytes[1..bytes.len() - 1];
        if !inner.contains(&b'\\') {
            return Ok(Cow::Borrowed(inner));
        }

        let mut out = Vec::with_capacity(inner.len());
        let mut i = 0;
        while i < inner.len() {
            let b = inner[i];
            i += 1;
            if b != b'\\' {
                out.push(b);
                continue;
            }
            let esc = match inner.get(i) {
                Some(&esc) => esc,
                None => return Err(self.malformed("trailing backslash in STRING argument")),
            };
            i += 1;
            match esc {
                b'\\' => out.push(b'\\'),
                b'\'' => out.push(b'\''),
                b'"' => out.push(b'"'),
                b'a' => out.push(0x07),
                b'b' => out.push(0x08),
                b'f' => out.push(0x0c),
                b'n' => out.push(b'\n'),
                b'r' => out.push(b'\r'),
                b't' => out.push(b'\t'),
                b'v' => out.push(0x0b),
                b'x' => {
                    let digits = inner
                        .get(i..i + 2)
                        .and_then(|pair| std::str::from_utf8(pair).ok())
                        .and_then(|pair| u8::from_str_radix(pair, 16).ok());
                    match digits {
                        Some(byte) => {
                            out.push(byte);
                            i += 2;
                        }
                        None => {
                            return Err(
                                self.malformed("invalid \\x escape in STRING argument")
                            )
                        }
                    }
                }
                b'0'..=b'7' => {
                    let mut val = u32::from(esc - b'0');
                    let mut digits = 1;
                    while digits < 3 {
                        match inner.get(i) {
                            Some(&d @ b'0'..=b'7') => {
                                val = val * 8 + u32::from(d - b'0');
                                i += 1;
                                digits += 1;
                            }
                            _ => break,
                        }
                    }
                    out.push((val & 0xff) as u8);
                }
                // Python keeps unrecognized escapes verbatim.
                other => {
                    out.push(b'\\');
                    out.push(other);
                }
            }
        }
        Ok(Cow::Owned(out))
    }

    fn pair_up(&self, items: Vec<Value<'a>>) -> Result<Vec<(Value<'a>, Value<'a>)>> {
        if items.len() % 2 != 0 {
            return Err(self.malformed("odd number of key/value items"));
        }
        let mut pairs = Vec::with_capacity(items.len() / 2);
        let mut iter = items.into_iter();
        while let (Some(key), Some(val)) = (iter.next(), iter.next()) {
            pairs.push((key, val));
        }
        Ok(pairs)
    }

    // Error construction.

    fn underflow(&self, message: &'static str) -> Error {
        Error::StackUnderflow {
            opcode: self.opcode,
            offset: self.offset,
            message,
        }
    }

    fn mismatch(&self, expected: &'static str, found: &Value<'a>) -> Error {
        Error::TypeMismatch {
            opcode: self.opcode,
            offset: self.offset,
            expected,
            found: value::kind(found).to_string(),
        }
    }

    fn malformed(&self, message: impl Into<String>) -> Error {
        Error::MalformedOperand {
            opcode: self.opcode,
            offset: self.offset,
            message: message.into(),
        }
    }

    fn unsupported(&self, feature: &'static str) -> Error {
        Error::UnsupportedFeature {
            feature,
            opcode: self.opcode,
            offset: self.offset,
        }
    }

    fn parse_error(&self, err: nom::Err<OpError<'a>>, at: &'a [u8]) -> Error {
        let offset = self.data.len() - at.len();
        let opcode = match at.first() {
            Some(&byte) => ops::name(byte),
            None => "pickle stream",
        };
        match err {
            nom::Err::Incomplete(_) => Error::Truncated { opcode, offset },
            nom::Err::Error(e) | nom::Err::Failure(e) => match e.cause {
                OpErrorCause::UnknownOpcode(byte) => Error::UnknownOpcode {
                    opcode: byte,
                    offset,
                },
                OpErrorCause::NegativeLength => Error::MalformedOperand {
                    opcode,
                    offset,
                    message: "negative byte count".to_string(),
                },
                OpErrorCause::Utf8 => Error::MalformedOperand {
                    opcode,
                    offset,
                    message: "invalid UTF-8".to_string(),
                },
                OpErrorCause::Nom(kind) => match kind {
                    ErrorKind::Eof | ErrorKind::Tag => Error::Truncated { opcode, offset },
                    other => Error::MalformedOperand {
                        opcode,
                        offset,
                        message: format!("unreadable operand ({})", other.description()),
                    },
                },
            },
        }
    }
}
