//! Text produced by counting labels and the seams that consume it

pub mod format;
pub mod styled;

use std::rc::Rc;

pub use styled::{Color, StyledText, TextSpan, TextStyle};

/// What a label currently shows
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LabelContent {
    #[default]
    Empty,
    Plain(String),
    Styled(StyledText),
}

impl LabelContent {
    /// The displayed text without styling
    pub fn as_plain_text(&self) -> String {
        match self {
            LabelContent::Empty => String::new(),
            LabelContent::Plain(text) => text.clone(),
            LabelContent::Styled(text) => text.plain_text(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            LabelContent::Empty => true,
            LabelContent::Plain(text) => text.is_empty(),
            LabelContent::Styled(text) => text.is_empty(),
        }
    }
}

/// Turns the current numeric value into displayable content.
///
/// At most one form is active. Rendering through [`Formatter::Unset`] is a
/// programmer error.
#[derive(Clone, Default)]
pub enum Formatter {
    #[default]
    Unset,
    Plain(Rc<dyn Fn(f64) -> String>),
    Styled(Rc<dyn Fn(f64) -> StyledText>),
}

impl Formatter {
    pub fn plain<F>(f: F) -> Self
    where
        F: Fn(f64) -> String + 'static,
    {
        Formatter::Plain(Rc::new(f))
    }

    pub fn styled<F>(f: F) -> Self
    where
        F: Fn(f64) -> StyledText + 'static,
    {
        Formatter::Styled(Rc::new(f))
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, Formatter::Unset)
    }

    /// Format `value`, or `None` when no formatter is configured
    pub fn format(&self, value: f64) -> Option<LabelContent> {
        match self {
            Formatter::Unset => None,
            Formatter::Plain(f) => Some(LabelContent::Plain(f(value))),
            Formatter::Styled(f) => Some(LabelContent::Styled(f(value))),
        }
    }
}

impl std::fmt::Debug for Formatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Formatter::Unset => f.write_str("Formatter::Unset"),
            Formatter::Plain(_) => f.write_str("Formatter::Plain(..)"),
            Formatter::Styled(_) => f.write_str("Formatter::Styled(..)"),
        }
    }
}

/// Surface that displays label content
pub trait RenderTarget {
    fn display(&mut self, content: &LabelContent);
}

impl<F> RenderTarget for F
where
    F: FnMut(&LabelContent),
{
    fn display(&mut self, content: &LabelContent) {
        self(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_formats_nothing() {
        assert!(Formatter::Unset.format(1.0).is_none());
        assert!(!Formatter::default().is_set());
    }

    #[test]
    fn test_plain_and_styled() {
        let plain = Formatter::plain(format::integer);
        assert_eq!(plain.format(7.9), Some(LabelContent::Plain("7".into())));

        let styled = Formatter::styled(|v| StyledText::from(format::grouped(v)));
        let content = styled.format(12345.0).unwrap();
        assert_eq!(content.as_plain_text(), "12,345");
    }

    #[test]
    fn test_closure_render_target() {
        let mut seen = Vec::new();
        {
            let mut target = |content: &LabelContent| seen.push(content.as_plain_text());
            target.display(&LabelContent::Plain("1".into()));
            target.display(&LabelContent::Empty);
        }
        assert_eq!(seen, vec!["1".to_string(), String::new()]);
    }
}
