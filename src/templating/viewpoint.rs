use super::{bindings::BindingSet, template::Token};

/// First/second person swaps applied to bound values before they are echoed back.
const VIEWPOINT: &[(&str, &str)] = &[
    ("i", "you"),
    ("you", "I"),
    ("me", "you"),
    ("am", "are"),
];

/// Result of the first pass over a token.
enum Pass<'a> {
    /// Matched the `VIEWPOINT` entry at this index.
    Mapped(usize),
    Kept(&'a str),
}

/// Rewrites the pronouns in every bound value (`I am sad` becomes `you are sad`).
///
/// Each token goes through two passes: first to a marker naming the mapping
/// entry it matched, then from the marker to that entry's replacement. A token
/// produced by one entry is therefore never fed into another, and markers can
/// never be confused with user text.
pub fn switch_viewpoint(bindings: &BindingSet) -> BindingSet {
    bindings.map_tokens(|token| resolve(mark(token)))
}

fn mark(token: &str) -> Pass<'_> {
    VIEWPOINT
        .iter()
        .position(|(source, _)| token.eq_ignore_ascii_case(source))
        .map_or(Pass::Kept(token), Pass::Mapped)
}

fn resolve(pass: Pass<'_>) -> Token {
    match pass {
        Pass::Mapped(index) => String::from(VIEWPOINT[index].1),
        Pass::Kept(token) => String::from(token),
    }
}
