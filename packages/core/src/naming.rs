//! The accessor naming convention.
//!
//! A record exposes attribute `x` through methods named `getX` (reader),
//! `isX` (boolean reader) and `setX` (writer). The attribute name is the
//! method name with its prefix stripped and the first remaining character
//! lower-cased. Encode and decode both go through this module so the keys
//! they produce and consume stay identical.

pub const GETTER_PREFIX: &str = "get";
pub const PREDICATE_PREFIX: &str = "is";
pub const SETTER_PREFIX: &str = "set";

/// Which side of the convention a method name falls on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessorKind {
    /// `getX`
    Getter,
    /// `isX`
    Predicate,
    /// `setX`
    Setter,
}

impl AccessorKind {
    pub const fn prefix(self) -> &'static str {
        match self {
            AccessorKind::Getter => GETTER_PREFIX,
            AccessorKind::Predicate => PREDICATE_PREFIX,
            AccessorKind::Setter => SETTER_PREFIX,
        }
    }

    /// Build the method name for `attribute` with this accessor's prefix.
    pub fn method_name(self, attribute: &str) -> String {
        let mut name = String::with_capacity(self.prefix().len() + attribute.len());
        name.push_str(self.prefix());
        name.push_str(&capitalize(attribute));
        name
    }
}

/// A method name parsed against the convention.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Accessor {
    pub kind: AccessorKind,
    pub attribute: String,
}

/// Parse a method name into its accessor kind and attribute name.
///
/// Returns `None` for names that carry no prefix or nothing after it, so
/// `get`, `is` and `set` on their own are not accessors. Note that any name
/// starting with `is` parses as a predicate (`isolate` yields `olate`); the
/// encoder filters those by their result type.
pub fn parse_accessor(method: &str) -> Option<Accessor> {
    [
        AccessorKind::Getter,
        AccessorKind::Setter,
        AccessorKind::Predicate,
    ]
    .into_iter()
    .find_map(|kind| {
        let rest = method.strip_prefix(kind.prefix())?;
        if rest.is_empty() {
            return None;
        }
        Some(Accessor {
            kind,
            attribute: decapitalize(rest),
        })
    })
}

/// The writer method name for a mapping key: `name` becomes `setName`.
pub fn setter_name(attribute: &str) -> String {
    AccessorKind::Setter.method_name(attribute)
}

pub fn getter_name(attribute: &str) -> String {
    AccessorKind::Getter.method_name(attribute)
}

pub fn predicate_name(attribute: &str) -> String {
    AccessorKind::Predicate.method_name(attribute)
}

/// Lower-case the first character only.
///
/// There is no acronym rule: `URL` becomes `uRL`.
pub fn decapitalize(s: &str) -> String {
    map_first(s, |c| c.to_lowercase().collect())
}

/// Upper-case the first character only.
pub fn capitalize(s: &str) -> String {
    map_first(s, |c| c.to_uppercase().collect())
}

fn map_first(s: &str, f: impl FnOnce(char) -> String) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = f(first);
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}
