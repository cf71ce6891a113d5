/// PDF indirect object number. Every object this crate emits has
/// generation number 0, so only the object number is tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u32);

/// The subset of PDF object types the emitter produces
/// (PDF 32000-1:2008 Section 7.3).
#[derive(Debug, Clone)]
pub enum Object {
    Integer(i64),
    Real(f64),
    /// Name object, stored without the leading `/`.
    Name(String),
    /// Literal string, stored as already-encoded bytes without the
    /// enclosing parentheses.
    Text(Vec<u8>),
    Array(Vec<Object>),
    /// Key-value pairs in insertion order, so output is deterministic.
    Dict(Vec<(String, Object)>),
    Stream {
        dict: Vec<(String, Object)>,
        data: Vec<u8>,
    },
    Ref(ObjectId),
}

impl Object {
    pub fn name(s: &str) -> Self {
        Object::Name(s.to_owned())
    }

    /// Literal string from text, WinAnsi-encoded with `?` standing in
    /// for characters outside the encoding. Used for info entries,
    /// where substitution beats failing the whole document.
    pub fn text_lossy(s: &str) -> Self {
        Object::Text(crate::fonts::winansi::encode_lossy(s))
    }

    pub fn dict(entries: Vec<(&str, Object)>) -> Self {
        Object::Dict(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_owned(), v))
                .collect(),
        )
    }

    pub fn stream(dict: Vec<(&str, Object)>, data: Vec<u8>) -> Self {
        Object::Stream {
            dict: dict
                .into_iter()
                .map(|(k, v)| (k.to_owned(), v))
                .collect(),
            data,
        }
    }
}
