use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

use crate::error::{Result, ScaffoldError};
use crate::params::ParameterSet;

/// The pattern a placeholder name must match.
const PLACEHOLDER_NAME: &str = r"^[A-Za-z_][A-Za-z0-9_]*$";

fn placeholder_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PLACEHOLDER_NAME).expect("placeholder name pattern is valid"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A string with `{name}` placeholders, checked for well-formedness once at
/// parse time.
///
/// `{{` and `}}` stand for literal braces. Substituted values are inserted
/// as-is and are never scanned again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parses a template string.
    ///
    /// # Errors
    ///
    /// Returns `ScaffoldError::MalformedTemplate` for an unterminated or empty
    /// placeholder, a placeholder name outside `[A-Za-z_][A-Za-z0-9_]*`, or a
    /// lone `}`.
    pub fn parse(source: &str) -> Result<Self> {
        let malformed = |position: usize, reason: &str| ScaffoldError::MalformedTemplate {
            template: source.to_string(),
            position,
            reason: reason.to_string(),
        };

        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.char_indices().peekable();

        while let Some((pos, c)) = chars.next() {
            match c {
                '{' => {
                    if chars.next_if(|&(_, next)| next == '{').is_some() {
                        literal.push('{');
                        continue;
                    }

                    let mut name = String::new();
                    let mut closed = false;
                    for (_, inner) in chars.by_ref() {
                        match inner {
                            '}' => {
                                closed = true;
                                break;
                            }
                            '{' => return Err(malformed(pos, "nested '{' inside placeholder")),
                            _ => name.push(inner),
                        }
                    }

                    if !closed {
                        return Err(malformed(pos, "unterminated placeholder"));
                    }
                    if name.is_empty() {
                        return Err(malformed(pos, "empty placeholder"));
                    }
                    if !placeholder_name_re().is_match(&name) {
                        return Err(malformed(pos, &format!("invalid placeholder name '{}'", name)));
                    }

                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder(name));
                }
                '}' => {
                    if chars.next_if(|&(_, next)| next == '}').is_none() {
                        return Err(malformed(pos, "unmatched '}'"));
                    }
                    literal.push('}');
                }
                _ => literal.push(c),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// Substitutes every placeholder with its value from `params`.
    ///
    /// Fails on the first placeholder without a binding; nothing is returned
    /// for a partially rendered template.
    pub fn render(&self, params: &ParameterSet) -> Result<String> {
        let mut rendered = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => rendered.push_str(text),
                Segment::Placeholder(name) => {
                    let value = params.get(name).ok_or_else(|| ScaffoldError::UnknownParameter {
                        name: name.clone(),
                        template: self.source.clone(),
                    })?;
                    rendered.push_str(value);
                }
            }
        }
        Ok(rendered)
    }

    /// Placeholder names in order of appearance, repeats included.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// The unparsed template text.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Parses `template` and renders it against `params` in one step.
pub fn substitute(template: &str, params: &ParameterSet) -> Result<String> {
    Template::parse(template)?.render(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ParameterSet {
        ParameterSet::from_iter([("name", "alpha"), ("provider", "acme")])
    }

    #[test]
    fn test_substitute_without_placeholders() {
        let text = "plain text, no markup at all\n";
        assert_eq!(substitute(text, &params()).unwrap(), text);
        assert_eq!(substitute("", &ParameterSet::new()).unwrap(), "");
    }

    #[test]
    fn test_substitute_every_occurrence() {
        let result = substitute("Hello {name} from {provider}, bye {name}", &params()).unwrap();
        assert_eq!(result, "Hello alpha from acme, bye alpha");
    }

    #[test]
    fn test_substitute_escaped_braces() {
        let result = substitute("namespace {name} {{ int x; }}", &params()).unwrap();
        assert_eq!(result, "namespace alpha { int x; }");

        let result = substitute("${{HEADERS}}", &params()).unwrap();
        assert_eq!(result, "${HEADERS}");

        let result = substitute("{{{name}}}", &params()).unwrap();
        assert_eq!(result, "{alpha}");
    }

    #[test]
    fn test_substitute_unknown_parameter() {
        let only_provider = ParameterSet::from_iter([("provider", "acme")]);
        let err = substitute("Hello {name} from {provider}", &only_provider).unwrap_err();
        match err {
            ScaffoldError::UnknownParameter { name, template } => {
                assert_eq!(name, "name");
                assert_eq!(template, "Hello {name} from {provider}");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let tricky = ParameterSet::from_iter([("name", "{provider}"), ("provider", "acme")]);
        assert_eq!(substitute("<{name}>", &tricky).unwrap(), "<{provider}>");
    }

    #[test]
    fn test_values_with_separators_are_literal() {
        let nested = ParameterSet::from_iter([("name", "a/b")]);
        assert_eq!(substitute("out/{name}.txt", &nested).unwrap(), "out/a/b.txt");
    }

    #[test]
    fn test_parse_malformed() {
        for source in [
            "open {name",
            "empty {} here",
            "lone } brace",
            "{na{me}",
            "{bad-name}",
            "{1st}",
            "{ name }",
            "trailing {",
        ] {
            let err = Template::parse(source).unwrap_err();
            assert!(
                matches!(err, ScaffoldError::MalformedTemplate { .. }),
                "expected malformed for {:?}, got {:?}",
                source,
                err
            );
        }
    }

    #[test]
    fn test_parse_reports_position() {
        match Template::parse("abc {x").unwrap_err() {
            ScaffoldError::MalformedTemplate { position, .. } => assert_eq!(position, 4),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_placeholders() {
        let template = Template::parse("{a}/{b}_{a}.txt {{c}}").unwrap();
        let names: Vec<&str> = template.placeholders().collect();
        assert_eq!(names, vec!["a", "b", "a"]);
        assert_eq!(template.as_str(), "{a}/{b}_{a}.txt {{c}}");
        assert_eq!(template.to_string(), "{a}/{b}_{a}.txt {{c}}");
    }
}
