use serde::{Deserialize, Serialize};

/// RGBA color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Visual attributes applied to a run of text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub color: Option<Color>,
    pub font_size: Option<f32>,
    pub italic: bool,
    pub underline: bool,
}

impl TextStyle {
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSpan {
    pub text: String,
    pub style: TextStyle,
}

/// Text made of independently styled spans
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyledText {
    spans: Vec<TextSpan>,
}

impl StyledText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a span, builder style
    pub fn span(mut self, text: impl Into<String>, style: TextStyle) -> Self {
        self.push(text, style);
        self
    }

    pub fn push(&mut self, text: impl Into<String>, style: TextStyle) {
        self.spans.push(TextSpan {
            text: text.into(),
            style,
        });
    }

    pub fn spans(&self) -> &[TextSpan] {
        &self.spans
    }

    pub fn is_empty(&self) -> bool {
        self.spans.iter().all(|span| span.text.is_empty())
    }

    /// The text with all styling dropped
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }
}

impl From<String> for StyledText {
    fn from(text: String) -> Self {
        StyledText::new().span(text, TextStyle::default())
    }
}

impl From<&str> for StyledText {
    fn from(text: &str) -> Self {
        StyledText::from(text.to_string())
    }
}
