use std::error::Error;

use rogerian::templating::{bindings::MatchOutcome, matcher::PatternMatcher, parser::TemplateParser, template::Token};

#[test]
fn binding_consistency_tests() -> Result<(), Box<dyn Error>> {
    assert_match("?*x and ?*x", "a b and a b", vec![("x", "a b")])?;
    assert_no_match("?*x and ?*x", "a b and c d")?;
    assert_match("?x is ?x", "rose is rose", vec![("x", "rose")])?;
    assert_no_match("?x is ?x", "rose is tulip")?;
    Ok(())
}

#[test]
fn segment_matching_tests() -> Result<(), Box<dyn Error>> {
    assert_match("?*x hello ?*y", "well hello there friend", vec![("x", "well"), ("y", "there friend")])?;
    assert_match("?*x hello ?*y", "hello there", vec![("x", ""), ("y", "there")])?;
    assert_match("?*x i want ?*y", "i want a pony", vec![("x", ""), ("y", "a pony")])?;
    assert_match("?*x i ?*y you ?*z", "why do i love you so", vec![("x", "why do"), ("y", "love"), ("z", "so")])?;
    assert_no_match("?*x hello ?*y", "goodbye now")?;
    Ok(())
}

#[test]
fn first_anchor_only_tests() -> Result<(), Box<dyn Error>> {
    // A backtracking matcher would bind x = (p a c); this one stops at the first `a`
    assert_no_match("?*x a b ?*y", "p a c a b")?;
    assert_no_match("?*x a b", "a c a b")?;
    assert_match("?*x a ?*y b", "c a a b", vec![("x", "c"), ("y", "a")])?;
    Ok(())
}

#[test]
fn exact_length_tests() -> Result<(), Box<dyn Error>> {
    assert_match("bye", "bye", vec![])?;
    assert_no_match("bye", "bye bye")?;
    assert_no_match("bye bye", "bye")?;
    assert_match("?*x", "", vec![("x", "")])?;
    Ok(())
}

fn toks(s: &str) -> Vec<Token> {
    s.split_whitespace().map(String::from).collect()
}

fn assert_match(pattern: &str, statement: &str, bindings: Vec<(&str, &str)>) -> Result<(), Box<dyn Error>> {
    let pattern = TemplateParser::parse_pattern(pattern)?;
    let outcome = PatternMatcher::try_match(&pattern, &toks(statement));
    let matched = outcome.bindings().ok_or("expected a match")?;
    assert_eq!(bindings.len(), matched.len());
    for b in bindings {
        let bound = matched.lookup(b.0).ok_or("missing binding")?;
        assert_eq!(toks(b.1).as_slice(), bound);
    }
    Ok(())
}

fn assert_no_match(pattern: &str, statement: &str) -> Result<(), Box<dyn Error>> {
    let pattern = TemplateParser::parse_pattern(pattern)?;
    let outcome = PatternMatcher::try_match(&pattern, &toks(statement));
    assert_eq!(MatchOutcome::Fail, outcome);
    Ok(())
}
