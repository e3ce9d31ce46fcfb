use pest::{iterators::Pair, Parser};
use pest_derive::Parser;
use thiserror::Error;

use super::template::{Pattern, PatternElement};

#[derive(Parser)]
#[grammar = "templating/grammar.pest"] // relative to src
struct PestPatternParser;

pub struct TemplateParser;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to parse pattern: {0}")]
    FailPattern(String),
    #[error("Failed to parse element: {0}")]
    FailElement(String),
}

impl TemplateParser {
    /// Parses the matching side of a rule. Literals are lowercased so they
    /// compare equal to tokenized input.
    pub fn parse_pattern(input: &str) -> Result<Pattern, ParseError> {
        Self::parse_elements(input, true)
    }

    /// Parses a response template. Literals are kept exactly as written.
    pub fn parse_template(input: &str) -> Result<Pattern, ParseError> {
        Self::parse_elements(input, false)
    }

    fn parse_elements(input: &str, normalize: bool) -> Result<Pattern, ParseError> {
        let mut pairs = PestPatternParser::parse(Rule::topPattern, input.trim())
            .map_err(|_| ParseError::FailPattern(String::from(input)))?;
        let top = pairs.next().ok_or_else(|| ParseError::FailPattern(String::from(input)))?;

        let mut elements = Vec::new();
        for p in top.into_inner() {
            if !matches!(p.as_rule(), Rule::EOI) {
                elements.push(Self::parse_element(p, normalize)?);
            }
        }
        Ok(Pattern::new(elements))
    }

    fn parse_element(pair: Pair<Rule>, normalize: bool) -> Result<PatternElement, ParseError> {
        let pair_str = pair.as_str();
        let element = match pair.as_rule() {
            Rule::segmentVar => PatternElement::segment(Self::inner_str(pair)?),
            Rule::simpleVar => PatternElement::simple(Self::inner_str(pair)?),
            Rule::escaped => PatternElement::Literal(Self::normalize(Self::inner_str(pair)?, normalize)),
            Rule::literal => PatternElement::Literal(Self::normalize(pair_str, normalize)),
            _ => return Err(ParseError::FailElement(String::from(pair_str))),
        };
        Ok(element)
    }

    fn inner_str<'i>(pair: Pair<'i, Rule>) -> Result<&'i str, ParseError> {
        let pair_str = pair.as_str();
        pair.into_inner()
            .next()
            .map(|p| p.as_str())
            .ok_or_else(|| ParseError::FailElement(String::from(pair_str)))
    }

    fn normalize(text: &str, normalize: bool) -> String {
        if normalize {
            text.to_lowercase()
        } else {
            String::from(text)
        }
    }
}
