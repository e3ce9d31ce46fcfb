use std::error::Error;

use rogerian::templating::{parser::TemplateParser, template::{Pattern, PatternElement}};

#[test]
fn pattern_parsing_tests() -> Result<(), Box<dyn Error>> {
    run_pattern_test("hello", Pattern::single(PatternElement::literal("hello")))?;
    run_pattern_test("?x", Pattern::single(PatternElement::simple("x")))?;
    run_pattern_test("?*x", Pattern::single(PatternElement::segment("x")))?;
    run_pattern_test("", Pattern::new(vec![]))?;

    run_pattern_test("?*x hello ?*y", Pattern::new(vec![
        PatternElement::segment("x"),
        PatternElement::literal("hello"),
        PatternElement::segment("y"),
    ]))?;

    run_pattern_test("  I   Want\t?*what ", Pattern::new(vec![
        PatternElement::literal("i"),
        PatternElement::literal("want"),
        PatternElement::segment("what"),
    ]))?;

    run_pattern_test(r"\?x \?*y", Pattern::new(vec![
        PatternElement::literal("?x"),
        PatternElement::literal("?*y"),
    ]))?;

    Ok(())
}

#[test]
fn template_parsing_tests() -> Result<(), Box<dyn Error>> {
    run_template_test("Sup?", Pattern::single(PatternElement::literal("Sup?")))?;
    run_template_test("Why do you want ?*y", Pattern::new(vec![
        PatternElement::literal("Why"),
        PatternElement::literal("do"),
        PatternElement::literal("you"),
        PatternElement::literal("want"),
        PatternElement::segment("y"),
    ]))?;
    run_template_test("Really-- if ?*y", Pattern::new(vec![
        PatternElement::literal("Really--"),
        PatternElement::literal("if"),
        PatternElement::segment("y"),
    ]))?;

    Ok(())
}

#[test]
fn rejected_notation_tests() {
    assert!(TemplateParser::parse_pattern("?").is_err());
    assert!(TemplateParser::parse_pattern("?*").is_err());
    assert!(TemplateParser::parse_pattern("?x!").is_err());
    assert!(TemplateParser::parse_template("so ?*y?").is_err());
}

#[test]
fn display_round_trip() -> Result<(), Box<dyn Error>> {
    let pattern = TemplateParser::parse_pattern(r"?*x said \?y ?z")?;
    assert_eq!(r"(?*x said \?y ?z)", pattern.to_string());
    Ok(())
}

fn run_pattern_test(input: &str, expected: Pattern) -> Result<(), Box<dyn Error>> {
    let pattern = TemplateParser::parse_pattern(input)?;
    assert_eq!(expected, pattern);
    Ok(())
}

fn run_template_test(input: &str, expected: Pattern) -> Result<(), Box<dyn Error>> {
    let template = TemplateParser::parse_template(input)?;
    assert_eq!(expected, template);
    Ok(())
}
