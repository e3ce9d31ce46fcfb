use rand::{seq::SliceRandom, Rng};
use thiserror::Error;

use super::{bindings::BindingSet, template::{Pattern, PatternElement, Rule, Token}, viewpoint::switch_viewpoint};

#[derive(Error, Debug)]
pub enum ResponseError {
    #[error("Rule has no response templates")]
    NoTemplates,
    #[error("Template references unbound variable \"{0}\"")]
    UnboundVariable(String),
}

/// A piece of a substituted template: a literal token, or the whole value of
/// a variable reference.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum Fragment {
    Token(Token),
    Segment(Vec<Token>),
}

/// Builds a reply from one of `rule`'s templates, chosen uniformly with `rng`.
pub fn generate<R: Rng + ?Sized>(rule: &Rule, bindings: &BindingSet, rng: &mut R) -> Result<Vec<Token>, ResponseError> {
    let switched = switch_viewpoint(bindings);
    let template = rule.responses().choose(rng).ok_or(ResponseError::NoTemplates)?;
    let fragments = substitute(template, &switched)?;
    Ok(flatten(fragments))
}

pub fn substitute(template: &Pattern, bindings: &BindingSet) -> Result<Vec<Fragment>, ResponseError> {
    template
        .elements()
        .iter()
        .map(|element| match element {
            PatternElement::Literal(token) => Ok(Fragment::Token(token.clone())),
            PatternElement::SimpleVar(name) | PatternElement::SegmentVar(name) => bindings
                .lookup(name)
                .map(|value| Fragment::Segment(value.to_vec()))
                .ok_or_else(|| ResponseError::UnboundVariable(name.clone())),
        })
        .collect()
}

pub fn flatten(fragments: Vec<Fragment>) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(fragments.len());
    for fragment in fragments {
        match fragment {
            Fragment::Token(token) => tokens.push(token),
            Fragment::Segment(segment) => tokens.extend(segment),
        }
    }
    tokens
}
