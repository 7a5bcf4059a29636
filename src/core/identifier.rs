use uuid::Uuid;

/// Length of a catalog surrogate key (hex characters)
const KEY_LEN: usize = 24;

/// A path identifier that is either a surrogate key or a display-name query.
///
/// Lookup endpoints accept both forms in the same position: a 24-character
/// hexadecimal string is treated as a key, anything else as a case-insensitive
/// name substring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identifier<'a> {
    Key(&'a str),
    Name(&'a str),
}

impl<'a> Identifier<'a> {
    pub fn classify(raw: &'a str) -> Self {
        if raw.len() == KEY_LEN && raw.bytes().all(|b| b.is_ascii_hexdigit()) {
            Identifier::Key(raw)
        } else {
            Identifier::Name(raw)
        }
    }
}

/// Generate a new surrogate key: 24 lowercase hex characters.
///
/// Derived from a v4 UUID, truncated to key length; ~90 bits of randomness
/// remain, which is plenty for catalog-sized data sets.
pub fn new_entity_id() -> String {
    let mut hex = Uuid::new_v4().simple().to_string();
    hex.truncate(KEY_LEN);
    hex
}
