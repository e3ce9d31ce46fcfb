use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, trace};

use super::{bindings::BindingSet, matcher::PatternMatcher, parser::{ParseError, TemplateParser}, template::{Pattern, PatternElement, Rule, Token}};

const DEFAULT_RULES: &str = include_str!("../../rules.txt");

#[derive(Error, Debug)]
pub enum RuleSetError {
    #[error("Illegal Line: {0}")]
    IllegalLine(String),
    #[error("Unexpected end of input (while {0})")]
    UnexpectedEof(&'static str),
    #[error("Rule set contains no rules")]
    NoRules,
    #[error("Last rule {0} is not a lone segment variable")]
    MissingCatchAll(String),
    #[error("Rule {0} has no response templates")]
    EmptyTemplateList(String),
    #[error("Template {template} of rule {rule} references unbound variable \"{var}\"")]
    UnboundVariable { rule: String, template: String, var: String },
    #[error("Segment variable \"{var}\" in rule {rule} must be followed by a literal")]
    UnanchoredSegment { rule: String, var: String },
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize, Deserialize, Debug)]
struct RuleFile {
    rules: Vec<RuleEntry>,
}

#[derive(Serialize, Deserialize, Debug)]
struct RuleEntry {
    pattern: String,
    responses: Vec<String>,
}

/// The first rule whose pattern matched an input line, with its bindings.
#[derive(Debug)]
pub struct Selection<'a> {
    pub index: usize,
    pub rule: &'a Rule,
    pub bindings: BindingSet,
}

/// An ordered, validated set of rules. The last rule is always a catch-all,
/// so every input selects some rule.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
    catch_all: Rule,
    catch_all_var: String,
}

impl RuleSet {
    pub fn new(mut rules: Vec<Rule>) -> Result<Self, RuleSetError> {
        for (i, rule) in rules.iter().enumerate() {
            Self::validate_rule(i, rule)?;
        }

        let catch_all = rules.pop().ok_or(RuleSetError::NoRules)?;
        let catch_all_var = match catch_all.pattern.elements() {
            [PatternElement::SegmentVar(name)] => name.clone(),
            _ => return Err(RuleSetError::MissingCatchAll(Self::label(rules.len(), &catch_all))),
        };

        Ok(RuleSet {
            rules: rules,
            catch_all: catch_all,
            catch_all_var: catch_all_var,
        })
    }

    /// The rule set bundled with the crate.
    pub fn default_rules() -> Result<Self, RuleSetError> {
        Self::parse_text(DEFAULT_RULES)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, RuleSetError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        let is_json = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let rule_set = if is_json {
            Self::parse_json(&source)?
        } else {
            Self::parse_text(&source)?
        };
        info!(rules = rule_set.len(), path = %path.display(), "loaded rule set");
        Ok(rule_set)
    }

    pub fn parse_json(source: &str) -> Result<Self, RuleSetError> {
        let file: RuleFile = serde_json::from_str(source)?;
        let mut rules = Vec::new();
        for entry in file.rules {
            let pattern = TemplateParser::parse_pattern(&entry.pattern)?;
            let responses = entry
                .responses
                .iter()
                .map(|r| TemplateParser::parse_template(r))
                .collect::<Result<Vec<_>, _>>()?;
            rules.push(Rule::new(pattern, responses));
        }
        Self::new(rules)
    }

    pub fn parse_text(source: &str) -> Result<Self, RuleSetError> {
        let mut lines = source.lines();
        let mut rules = Vec::new();
        while let Some(line) = lines.next() {
            let line = line.trim();
            if line.is_empty() || line.starts_with("//") {
                continue;
            }
            if line.starts_with("% rule") {
                rules.push(Self::read_rule(&mut lines)?);
            } else {
                return Err(RuleSetError::IllegalLine(String::from(line)));
            }
        }
        Self::new(rules)
    }

    fn read_rule<'a>(lines: &mut impl Iterator<Item = &'a str>) -> Result<Rule, RuleSetError> {
        let pattern_line = loop {
            let line = lines.next().ok_or(RuleSetError::UnexpectedEof("reading rule pattern"))?;
            let line = line.trim();
            if line.is_empty() || line.starts_with("//") {
                continue;
            }
            if line.starts_with('%') {
                return Err(RuleSetError::IllegalLine(String::from(line)));
            }
            break line;
        };
        let pattern = TemplateParser::parse_pattern(pattern_line)?;

        let mut responses = Vec::new();
        loop {
            let line = lines.next().ok_or(RuleSetError::UnexpectedEof("reading rule responses"))?;
            let line = line.trim();
            if line.starts_with("% end") {
                break;
            }
            if line.is_empty() || line.starts_with("//") {
                continue;
            }
            responses.push(TemplateParser::parse_template(line)?);
        }
        Ok(Rule::new(pattern, responses))
    }

    fn validate_rule(index: usize, rule: &Rule) -> Result<(), RuleSetError> {
        if rule.responses.is_empty() {
            return Err(RuleSetError::EmptyTemplateList(Self::label(index, rule)));
        }

        let elements = rule.pattern.elements();
        for (i, element) in elements.iter().enumerate() {
            if let PatternElement::SegmentVar(var) = element {
                let anchored = matches!(elements.get(i + 1), None | Some(PatternElement::Literal(_)));
                if !anchored {
                    return Err(RuleSetError::UnanchoredSegment {
                        rule: Self::label(index, rule),
                        var: var.clone(),
                    });
                }
            }
        }

        for template in &rule.responses {
            if let Some(var) = Self::first_unbound(&rule.pattern, template) {
                return Err(RuleSetError::UnboundVariable {
                    rule: Self::label(index, rule),
                    template: template.to_string(),
                    var: String::from(var),
                });
            }
        }
        Ok(())
    }

    fn first_unbound<'t>(pattern: &Pattern, template: &'t Pattern) -> Option<&'t str> {
        template.variables().find(|var| !pattern.variables().any(|bound| bound == *var))
    }

    fn label(index: usize, rule: &Rule) -> String {
        format!("#{} {}", index + 1, rule.pattern)
    }

    /// Returns the first rule, in declared order, whose pattern matches all of
    /// `input`. Falls through to the catch-all when nothing else matches.
    pub fn select(&self, input: &[Token]) -> Selection<'_> {
        for (index, rule) in self.rules.iter().enumerate() {
            if let Some(bindings) = PatternMatcher::try_match(&rule.pattern, input).bindings() {
                debug!(rule = index + 1, pattern = %rule.pattern, bindings = %bindings, "selected rule");
                return Selection {
                    index: index,
                    rule: rule,
                    bindings: bindings,
                };
            }
            trace!(rule = index + 1, pattern = %rule.pattern, "no match");
        }

        let bindings = BindingSet::new().extend(&self.catch_all_var, input.to_vec());
        debug!(rule = self.len(), bindings = %bindings, "selected catch-all rule");
        Selection {
            index: self.rules.len(),
            rule: &self.catch_all,
            bindings: bindings,
        }
    }

    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter().chain(std::iter::once(&self.catch_all))
    }

    pub fn len(&self) -> usize {
        self.rules.len() + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}
