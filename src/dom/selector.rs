use thiserror::Error;

use super::element::Element;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,
    #[error("unsupported selector '{0}'")]
    Unsupported(String),
    #[error("selector '{0}' must be a single class such as '.fade'")]
    NotAClass(String),
}

/// One compound selector such as `button.prev`, `#slide-1` or `*`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Compound {
    fn matches(&self, element: &Element) -> bool {
        if let Some(tag) = &self.tag {
            if !element.tag().eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if element.id().as_deref() != Some(id.as_str()) {
                return false;
            }
        }
        self.classes.iter().all(|class| element.has_class(class))
    }
}

/// Comma separated list of compound selectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    alternatives: Vec<Compound>,
}

impl Selector {
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        if input.trim().is_empty() {
            return Err(SelectorError::Empty);
        }

        let alternatives = input
            .split(',')
            .map(|part| {
                parse_compound(part.trim())
                    .ok_or_else(|| SelectorError::Unsupported(input.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { alternatives })
    }

    pub fn matches(&self, element: &Element) -> bool {
        self.alternatives.iter().any(|compound| compound.matches(element))
    }

    /// The class name when the selector is exactly one bare class (`.fade`).
    pub fn single_class(&self) -> Option<&str> {
        match self.alternatives.as_slice() {
            [Compound { tag: None, id: None, classes }] if classes.len() == 1 => {
                Some(classes[0].as_str())
            }
            _ => None,
        }
    }
}

/// Parses `selector` and returns its class name, or `NotAClass` for anything
/// a freshly built element could not be given by class alone.
pub fn class_of(selector: &str) -> Result<String, SelectorError> {
    Selector::parse(selector)?
        .single_class()
        .map(str::to_string)
        .ok_or_else(|| SelectorError::NotAClass(selector.to_string()))
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn parse_compound(input: &str) -> Option<Compound> {
    if input.is_empty() {
        return None;
    }

    let mut compound = Compound::default();
    let mut rest = input;

    // Leading type selector or universal selector
    if let Some(stripped) = rest.strip_prefix('*') {
        rest = stripped;
    } else {
        let end = rest.find(|c: char| !is_name_char(c)).unwrap_or(rest.len());
        if end > 0 {
            compound.tag = Some(rest[..end].to_ascii_lowercase());
            rest = &rest[end..];
        }
    }

    while let Some(marker) = rest.chars().next() {
        if marker != '.' && marker != '#' {
            return None;
        }
        let body = &rest[1..];
        let end = body.find(|c: char| !is_name_char(c)).unwrap_or(body.len());
        if end == 0 {
            return None;
        }
        let name = body[..end].to_string();
        if marker == '.' {
            compound.classes.push(name);
        } else if compound.id.is_none() {
            compound.id = Some(name);
        } else {
            return None;
        }
        rest = &body[end..];
    }

    Some(compound)
}
