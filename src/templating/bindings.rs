use std::fmt;

use super::template::Token;

/// Variable bindings produced by a successful match. Entries are unique by
/// name and keep the order in which variables were first bound.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct BindingSet {
    entries: Vec<(String, Vec<Token>)>,
}

impl BindingSet {
    /// The start state of every match: success with nothing bound yet.
    pub fn new() -> Self {
        BindingSet {
            entries: Vec::new(),
        }
    }

    pub fn lookup(&self, var: &str) -> Option<&[Token]> {
        self.entries
            .iter()
            .find(|(name, _)| name == var)
            .map(|(_, value)| value.as_slice())
    }

    /// Returns a set with `(var, value)` appended. The receiver is consumed, so
    /// callers holding another copy never observe the new entry. If `var` is
    /// already bound the first binding is kept.
    pub fn extend(mut self, var: &str, value: Vec<Token>) -> Self {
        if self.lookup(var).is_none() {
            self.entries.push((String::from(var), value));
        }
        self
    }

    /// Binds `var` to `value`, or checks `value` against an existing binding.
    pub fn bind(self, var: &str, value: &[Token]) -> MatchOutcome {
        let agrees = self.lookup(var).map(|existing| existing == value);
        match agrees {
            None => MatchOutcome::Matched(self.extend(var, value.to_vec())),
            Some(true) => MatchOutcome::Matched(self),
            Some(false) => MatchOutcome::Fail,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Token])> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value.as_slice()))
    }

    /// Applies `f` to every token of every bound value.
    pub fn map_tokens<F>(&self, f: F) -> Self
    where
        F: Fn(&str) -> Token,
    {
        BindingSet {
            entries: self
                .entries
                .iter()
                .map(|(name, value)| (name.clone(), value.iter().map(|t| f(t.as_str())).collect()))
                .collect(),
        }
    }
}

impl fmt::Display for BindingSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .entries
            .iter()
            .map(|(name, value)| format!("{}=({})", name, value.join(" ")))
            .collect();
        write!(f, "{{{}}}", parts.join(", "))
    }
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub enum MatchOutcome {
    Matched(BindingSet),
    Fail,
}

impl MatchOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Matched(_))
    }

    pub fn bindings(self) -> Option<BindingSet> {
        match self {
            MatchOutcome::Matched(bindings) => Some(bindings),
            MatchOutcome::Fail => None,
        }
    }
}
