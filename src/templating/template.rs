use std::fmt;

pub type Token = String;

#[derive(PartialEq, Eq, Debug, Clone)]
pub enum PatternElement {
    Literal(Token),
    SimpleVar(String),
    SegmentVar(String),
}
impl PatternElement {
    pub fn literal(text: &str) -> Self {
        PatternElement::Literal(String::from(text))
    }
    pub fn simple(name: &str) -> Self {
        PatternElement::SimpleVar(String::from(name))
    }
    pub fn segment(name: &str) -> Self {
        PatternElement::SegmentVar(String::from(name))
    }

    pub fn var_name(&self) -> Option<&str> {
        match self {
            PatternElement::Literal(_) => None,
            PatternElement::SimpleVar(name) | PatternElement::SegmentVar(name) => Some(name),
        }
    }
}
impl fmt::Display for PatternElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternElement::Literal(t) if t.starts_with('?') => write!(f, "\\{}", t),
            PatternElement::Literal(t) => write!(f, "{}", t),
            PatternElement::SimpleVar(name) => write!(f, "?{}", name),
            PatternElement::SegmentVar(name) => write!(f, "?*{}", name),
        }
    }
}

/// An ordered sequence of elements. Used both for the matching side of a rule
/// and for its response templates.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct Pattern {
    pub(crate) elements: Vec<PatternElement>,
}
impl Pattern {
    pub fn new(elements: Vec<PatternElement>) -> Self {
        Self {
            elements: elements,
        }
    }
    pub fn single(element: PatternElement) -> Self {
        Self {
            elements: vec![element],
        }
    }

    pub fn elements(&self) -> &[PatternElement] {
        &self.elements
    }
    pub fn len(&self) -> usize {
        self.elements.len()
    }
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// True when the pattern is a lone segment variable, which matches any input.
    pub fn is_catch_all(&self) -> bool {
        matches!(self.elements.as_slice(), [PatternElement::SegmentVar(_)])
    }

    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().filter_map(|e| e.var_name())
    }
}
impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.elements.iter().map(|e| e.to_string()).collect();
        write!(f, "({})", parts.join(" "))
    }
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Rule {
    pub(crate) pattern: Pattern,
    pub(crate) responses: Vec<Pattern>,
}
impl Rule {
    pub fn new(pattern: Pattern, responses: Vec<Pattern>) -> Self {
        Self {
            pattern: pattern,
            responses: responses,
        }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }
    pub fn responses(&self) -> &[Pattern] {
        &self.responses
    }
}
