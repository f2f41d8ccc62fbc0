use std::borrow::Cow;
use std::fmt::{self, Write};

use num_bigint::BigInt;

/// A decoded pickle value.
///
/// Payloads borrow from the input buffer whenever the wire bytes are
/// usable as-is; only values that need rewriting (escape-decoded
/// protocol-0 strings, say) own their storage.
///
/// Integers are split across two variants purely by magnitude: anything
/// that fits an `i64` is `Int`, the rest is `BigInt`. Every integer
/// producer normalizes through the same helper, so a given number has
/// exactly one representation regardless of which opcode carried it.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// Python `None`.
    None,
    Bool(bool),
    Int(i64),
    /// An integer that can't fit in `i64`.
    BigInt(BigInt),
    Float(f64),
    /// A unicode string.
    Text(Cow<'a, str>),
    /// `bytes`, `bytearray`, or a legacy 8-bit string.
    Bytes(Cow<'a, [u8]>),
    List(Vec<Value<'a>>),
    Tuple(Vec<Value<'a>>),
    /// Insertion-ordered pairs, keyed by structural equality. A repeated
    /// key replaces the value in place and keeps its original position.
    Dict(Vec<(Value<'a>, Value<'a>)>),
    /// Insertion-ordered, deduplicated by structural equality.
    Set(Vec<Value<'a>>),
    FrozenSet(Vec<Value<'a>>),
    /// A reference to a Python class or function by dotted path.
    Global(Box<Global<'a>>),
    /// A Python object reconstruction that has no native counterpart.
    Object(Box<Object<'a>>),
    /// Opaque memo handle. Lives only inside the machine; a finished
    /// decode never contains one.
    Ref(usize),
}

/// A reference to a Python class or function.
///
/// The scope is usually a module name, but `getattr`-style references
/// nest: `getattr(datetime.date, "today")` becomes a `Global` whose
/// scope is itself the `datetime.date` global.
#[derive(Debug, Clone, PartialEq)]
pub struct Global<'a> {
    pub scope: Scope<'a>,
    pub name: Cow<'a, str>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Scope<'a> {
    Module(Cow<'a, str>),
    Global(Box<Global<'a>>),
}

impl<'a> Global<'a> {
    /// A top-level `module.name` reference.
    pub fn module(module: impl Into<Cow<'a, str>>, name: impl Into<Cow<'a, str>>) -> Self {
        Global {
            scope: Scope::Module(module.into()),
            name: name.into(),
        }
    }

    /// The dotted path, e.g. `datetime.date` or `datetime.date.today`.
    pub fn path(&self) -> String {
        let mut out = String::new();
        self.write_path(&mut out);
        out
    }

    fn write_path(&self, out: &mut String) {
        match &self.scope {
            Scope::Module(module) => out.push_str(module),
            Scope::Global(global) => global.write_path(out),
        }
        out.push('.');
        out.push_str(&self.name);
    }
}

/// The normalized form of a Python object reconstruction.
///
/// Produced by the `REDUCE`/`INST`/`OBJ`/`NEWOBJ`/`NEWOBJ_EX` opcodes
/// and fleshed out by `BUILD` and the append/setitem opcodes. `state`
/// is `None` only when `BUILD` never ran; an object whose pickled state
/// happens to be Python `None` carries `Some(Value::None)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Object<'a> {
    /// Dotted path of the callable that rebuilds the object. The
    /// `NEWOBJ` family appends `.__new__`.
    pub constructor: String,
    pub args: Vec<Value<'a>>,
    pub kwargs: Vec<(Cow<'a, str>, Value<'a>)>,
    pub state: Option<Value<'a>>,
    pub append_items: Vec<Value<'a>>,
    pub set_items: Vec<(Value<'a>, Value<'a>)>,
}

impl<'a> Object<'a> {
    pub fn new(constructor: String, args: Vec<Value<'a>>) -> Self {
        Object {
            constructor,
            args,
            kwargs: Vec::new(),
            state: None,
            append_items: Vec::new(),
            set_items: Vec::new(),
        }
    }
}

/// Normalize an arbitrary-precision integer into the smallest variant.
pub(crate) fn int_value<'a>(n: BigInt) -> Value<'a> {
    match i64::try_from(&n) {
        Ok(small) => Value::Int(small),
        Err(_) => Value::BigInt(n),
    }
}

/// Dict insertion: replace in place on an equal key, append otherwise.
pub(crate) fn dict_insert<'a>(
    entries: &mut Vec<(Value<'a>, Value<'a>)>,
    key: Value<'a>,
    value: Value<'a>,
) {
    match entries.iter_mut().find(|(k, _)| *k == key) {
        Some(entry) => entry.1 = value,
        None => entries.push((key, value)),
    }
}

/// Set insertion: drop the item if an equal one is already present.
pub(crate) fn set_insert<'a>(items: &mut Vec<Value<'a>>, item: Value<'a>) {
    if !items.contains(&item) {
        items.push(item);
    }
}

/// Short kind name used in type-mismatch diagnostics.
pub(crate) fn kind(value: &Value<'_>) -> &'static str {
    match value {
        Value::None => "None",
        Value::Bool(_) => "bool",
        Value::Int(_) | Value::BigInt(_) => "int",
        Value::Float(_) => "float",
        Value::Text(_) => "str",
        Value::Bytes(_) => "bytes",
        Value::List(_) => "list",
        Value::Tuple(_) => "tuple",
        Value::Dict(_) => "dict",
        Value::Set(_) => "set",
        Value::FrozenSet(_) => "frozenset",
        Value::Global(_) => "global",
        Value::Object(_) => "object",
        Value::Ref(_) => "memo ref",
    }
}

fn write_seq<'v, 'a: 'v>(
    f: &mut fmt::Formatter<'_>,
    items: impl Iterator<Item = &'v Value<'a>>,
    prefix: &str,
    suffix: &str,
) -> fmt::Result {
    f.write_str(prefix)?;
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str(suffix)
}

fn write_bytes(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    f.write_str("b\"")?;
    for &b in bytes {
        match b {
            b'"' => f.write_str("\\\"")?,
            b'\\' => f.write_str("\\\\")?,
            b'\n' => f.write_str("\\n")?,
            b'\r' => f.write_str("\\r")?,
            b'\t' => f.write_str("\\t")?,
            0x20..=0x7e => f.write_char(b as char)?,
            _ => write!(f, "\\x{b:02x}")?,
        }
    }
    f.write_str("\"")
}

/// Python-flavored literal rendering, close to what `repr` would show.
impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => f.write_str("None"),
            Value::Bool(b) => f.write_str(if *b { "True" } else { "False" }),
            Value::Int(i) => write!(f, "{i}"),
            Value::BigInt(i) => write!(f, "{i}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Text(s) => write!(f, "{s:?}"),
            Value::Bytes(b) => write_bytes(f, b),
            Value::List(items) => write_seq(f, items.iter(), "[", "]"),
            Value::Tuple(items) if items.len() == 1 => write!(f, "({},)", items[0]),
            Value::Tuple(items) => write_seq(f, items.iter(), "(", ")"),
            Value::Dict(entries) => {
                f.write_str("{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                f.write_str("}")
            }
            Value::Set(items) if items.is_empty() => f.write_str("set()"),
            Value::Set(items) => write_seq(f, items.iter(), "{", "}"),
            Value::FrozenSet(items) => write_seq(f, items.iter(), "frozenset([", "])"),
            Value::Global(global) => write!(f, "{}", global.path()),
            Value::Object(object) => write!(f, "<{}>", object.constructor),
            Value::Ref(handle) => write!(f, "<memo #{handle}>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_paths_nest() {
        let date = Global::module("datetime", "date");
        assert_eq!(date.path(), "datetime.date");

        let today = Global {
            scope: Scope::Global(Box::new(date)),
            name: "today".into(),
        };
        assert_eq!(today.path(), "datetime.date.today");
    }

    #[test]
    fn integers_normalize_by_magnitude() {
        assert_eq!(int_value(BigInt::from(7)), Value::Int(7));
        assert_eq!(int_value(BigInt::from(i64::MIN)), Value::Int(i64::MIN));
        let big: BigInt = BigInt::from(i64::MAX) + 1;
        assert_eq!(int_value(big.clone()), Value::BigInt(big));
    }

    #[test]
    fn dict_insert_replaces_in_place() {
        let mut entries = Vec::new();
        dict_insert(&mut entries, Value::Int(1), Value::Text("a".into()));
        dict_insert(&mut entries, Value::Int(2), Value::Text("b".into()));
        dict_insert(&mut entries, Value::Int(1), Value::Text("c".into()));
        assert_eq!(
            entries,
            vec![
                (Value::Int(1), Value::Text("c".into())),
                (Value::Int(2), Value::Text("b".into())),
            ]
        );
    }

    #[test]
    fn set_insert_deduplicates() {
        let mut items = Vec::new();
        set_insert(&mut items, Value::Int(1));
        set_insert(&mut items, Value::Int(2));
        set_insert(&mut items, Value::Int(1));
        assert_eq!(items, vec![Value::Int(1), Value::Int(2)]);
    }

    #[test]
    fn display_is_python_flavored() {
        assert_eq!(Value::None.to_string(), "None");
        assert_eq!(Value::Bool(true).to_string(), "True");
        assert_eq!(Value::Tuple(vec![Value::Int(1)]).to_string(), "(1,)");
        assert_eq!(
            Value::Bytes(Cow::Borrowed(b"a\x00")).to_string(),
            "b\"a\\x00\""
        );
        assert_eq!(Value::Set(vec![]).to_string(), "set()");
        assert_eq!(
            Value::Dict(vec![(Value::Text("k".into()), Value::Int(1))]).to_string(),
            "{\"k\": 1}"
        );
    }
}
