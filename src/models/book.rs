//! Book model

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
use utoipa::ToSchema;

/// Book record, as stored and as exchanged on the wire
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct Book {
    pub id: i64,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "autor")]
    pub author: String,
}

/// Why a book payload could not be decoded
#[derive(Debug, Error)]
pub enum BookDecodeError {
    #[error("malformed JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error("expected a JSON object")]
    NotAnObject,

    #[error("field `{0}` has the wrong type")]
    FieldType(&'static str),
}

/// Field lookup: exact key first, then the first key equal ignoring ASCII case.
fn lookup<'a>(fields: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    fields.get(name).or_else(|| {
        fields
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    })
}

/// Store a field when present and well typed. `null` leaves the default in
/// place; a wrong type is remembered while the other fields keep decoding.
fn decode_field<T>(
    fields: &Map<String, Value>,
    name: &'static str,
    convert: impl Fn(&Value) -> Option<T>,
    slot: &mut T,
    error: &mut Option<BookDecodeError>,
) {
    match lookup(fields, name) {
        None | Some(Value::Null) => {}
        Some(value) => match convert(value) {
            Some(decoded) => *slot = decoded,
            None => {
                error.get_or_insert(BookDecodeError::FieldType(name));
            }
        },
    }
}

impl Book {
    pub fn new(id: i64, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
        }
    }

    /// Decode as much of the payload as possible, along with the first error met.
    fn decode(bytes: &[u8]) -> (Self, Option<BookDecodeError>) {
        let mut book = Self::default();
        let fields = match serde_json::from_slice::<Value>(bytes) {
            Ok(Value::Object(fields)) => fields,
            Ok(Value::Null) => return (book, None),
            Ok(_) => return (book, Some(BookDecodeError::NotAnObject)),
            Err(e) => return (book, Some(e.into())),
        };

        let text = |value: &Value| value.as_str().map(str::to_owned);
        let mut error = None;
        decode_field(&fields, "id", Value::as_i64, &mut book.id, &mut error);
        decode_field(&fields, "titulo", text, &mut book.title, &mut error);
        decode_field(&fields, "autor", text, &mut book.author, &mut error);
        (book, error)
    }

    /// Decode a replacement payload.
    ///
    /// Missing or `null` fields stay empty/zero, a top-level `null` is an
    /// empty book, and keys match regardless of case. Malformed JSON, a
    /// non-object payload or a wrongly typed field is an error.
    pub fn from_json(bytes: &[u8]) -> Result<Self, BookDecodeError> {
        match Self::decode(bytes) {
            (book, None) => Ok(book),
            (_, Some(error)) => Err(error),
        }
    }

    /// Decode a creation payload without ever failing.
    ///
    /// Whatever decodes is kept and the rest stays empty. The id is left at
    /// zero since the repository assigns it.
    pub fn from_lenient_json(bytes: &[u8]) -> Self {
        let (book, _) = Self::decode(bytes);
        Self { id: 0, ..book }
    }
}

/// Records present when the server starts
pub fn seed_books() -> Vec<Book> {
    vec![
        Book::new(1, "O Guarani", "José de Alencar"),
        Book::new(2, "A Carne", "Juliano Ribeiro"),
        Book::new(3, "Dom Casmurro", "Machado de Assis"),
    ]
}
