use std::borrow::Cow;

use crate::value::{Global, Object, Scope, Value};

/// What a user-supplied object resolver decided about a descriptor.
///
/// "Didn't match" is a real outcome, distinct from resolving to some
/// value that happens to be `None`, so it gets its own variant instead
/// of an `Option`.
pub enum Resolution<'a> {
    /// Replace the descriptor with this value.
    Resolved(Value<'a>),
    /// Not a descriptor this resolver knows; keep it as-is.
    Unresolved,
}

pub type ObjectResolver<'a> = Box<dyn Fn(&Object<'a>) -> anyhow::Result<Resolution<'a>> + 'a>;
pub type PersistentIdResolver<'a> = Box<dyn Fn(Value<'a>) -> anyhow::Result<Value<'a>> + 'a>;

/// Decoder configuration.
///
/// Both knobs are callbacks. The object resolver sees every
/// [`Object`] descriptor as it leaves the machine and may replace it
/// with a native value; the persistent-id resolver maps the opaque ids
/// of `PERSID`/`BINPERSID` to whatever they stand for. Without the
/// former, descriptors pass through untouched; without the latter,
/// persistent ids are a hard error.
#[derive(Default)]
pub struct DecodeOptions<'a> {
    pub(crate) object_resolver: Option<ObjectResolver<'a>>,
    pub(crate) persistent_id_resolver: Option<PersistentIdResolver<'a>>,
}

impl<'a> DecodeOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn object_resolver(
        mut self,
        resolver: impl Fn(&Object<'a>) -> anyhow::Result<Resolution<'a>> + 'a,
    ) -> Self {
        self.object_resolver = Some(Box::new(resolver));
        self
    }

    pub fn persistent_id_resolver(
        mut self,
        resolver: impl Fn(Value<'a>) -> anyhow::Result<Value<'a>> + 'a,
    ) -> Self {
        self.persistent_id_resolver = Some(Box::new(resolver));
        self
    }
}

/// The built-in resolver, applied before any user resolver.
///
/// Two reconstruction patterns are common enough, and mechanical
/// enough, to rewrite unconditionally:
///
/// * `builtins.getattr(global, "name")` is how picklers spell a
///   reference to a class attribute (a classmethod, usually). It
///   collapses into a nested [`Global`].
/// * `builtins.bytearray()` / `builtins.bytearray(b"...")` is the
///   reduce form of a bytearray; the payload is just bytes.
///
/// Anything carrying kwargs, BUILD state, or accumulated items is left
/// for the caller to interpret.
pub(crate) fn builtin<'a>(object: &Object<'a>) -> Option<Value<'a>> {
    if !object.kwargs.is_empty()
        || object.state.is_some()
        || !object.append_items.is_empty()
        || !object.set_items.is_empty()
    {
        return None;
    }
    match object.constructor.as_str() {
        "builtins.getattr" => match object.args.as_slice() {
            [Value::Global(target), Value::Text(attr)] => Some(Value::Global(Box::new(Global {
                scope: Scope::Global(target.clone()),
                name: attr.clone(),
            }))),
            _ => None,
        },
        "builtins.bytearray" => match object.args.as_slice() {
            [] => Some(Value::Bytes(Cow::Borrowed(&[]))),
            [Value::Bytes(payload)] => Some(Value::Bytes(payload.clone())),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn getattr_collapses_into_a_nested_global() {
        let object = Object::new(
            "builtins.getattr".to_string(),
            vec![
                Value::Global(Box::new(Global::module("datetime", "date"))),
                Value::Text("today".into()),
            ],
        );
        match builtin(&object) {
            Some(Value::Global(global)) => assert_eq!(global.path(), "datetime.date.today"),
            other => panic!("expected a global, got {other:?}"),
        }
    }

    #[test]
    fn bytearray_reduce_forms_become_bytes() {
        let empty = Object::new("builtins.bytearray".to_string(), vec![]);
        assert_eq!(builtin(&empty), Some(Value::Bytes(Cow::Borrowed(&[]))));

        let filled = Object::new(
            "builtins.bytearray".to_string(),
            vec![Value::Bytes(Cow::Borrowed(b"abc"))],
        );
        assert_eq!(builtin(&filled), Some(Value::Bytes(Cow::Borrowed(b"abc"))));
    }

    #[test]
    fn descriptors_with_state_are_left_alone() {
        let mut object = Object::new("builtins.bytearray".to_string(), vec![]);
        object.state = Some(Value::None);
        assert_eq!(builtin(&object), None);
    }

    #[test]
    fn unknown_constructors_are_left_alone() {
        let object = Object::new("collections.OrderedDict".to_string(), vec![]);
        assert_eq!(builtin(&object), None);
    }
}
