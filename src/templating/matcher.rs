use std::slice;

use super::{bindings::{BindingSet, MatchOutcome}, template::{Pattern, PatternElement, Token}};

pub struct PatternMatcher;

impl PatternMatcher {
    pub fn try_match(pattern: &Pattern, input: &[Token]) -> MatchOutcome {
        Self::match_with(pattern.elements(), input, MatchOutcome::Matched(BindingSet::new()))
    }

    /// Matches `pattern` against the whole of `input`, left to right. Walks both
    /// sequences with cursors instead of recursing per element.
    pub fn match_with(pattern: &[PatternElement], input: &[Token], outcome: MatchOutcome) -> MatchOutcome {
        let mut bindings = match outcome {
            MatchOutcome::Matched(bindings) => bindings,
            MatchOutcome::Fail => return MatchOutcome::Fail,
        };
        let mut p = 0;
        let mut i = 0;
        loop {
            match (pattern.get(p), input.get(i)) {
                (None, None) => return MatchOutcome::Matched(bindings),
                (Some(PatternElement::SegmentVar(name)), _) => {
                    match Self::match_segment(name, &pattern[p + 1..], &input[i..], bindings) {
                        Some((extended, consumed)) => {
                            bindings = extended;
                            p += 1;
                            i += consumed;
                        },
                        None => return MatchOutcome::Fail,
                    }
                },
                (Some(PatternElement::SimpleVar(name)), Some(token)) => {
                    match bindings.bind(name, slice::from_ref(token)) {
                        MatchOutcome::Matched(extended) => {
                            bindings = extended;
                            p += 1;
                            i += 1;
                        },
                        MatchOutcome::Fail => return MatchOutcome::Fail,
                    }
                },
                (Some(PatternElement::Literal(literal)), Some(token)) => {
                    if literal != token {
                        return MatchOutcome::Fail;
                    }
                    p += 1;
                    i += 1;
                },
                // One side ran out before the other
                (None, Some(_)) | (Some(_), None) => return MatchOutcome::Fail,
            }
        }
    }

    /// Binds segment variable `var` to the input that precedes the anchor (the
    /// literal at the head of `rest`) and reports how many tokens it consumed.
    /// Only the first occurrence of the anchor is tried; if the remainder then
    /// fails, later occurrences are not considered.
    fn match_segment(var: &str, rest: &[PatternElement], input: &[Token], bindings: BindingSet) -> Option<(BindingSet, usize)> {
        let end = match rest.first() {
            None => input.len(),
            Some(PatternElement::Literal(anchor)) => input.iter().position(|t| t == anchor)?,
            Some(_) => return None,
        };
        bindings.bind(var, &input[..end]).bindings().map(|b| (b, end))
    }
}
