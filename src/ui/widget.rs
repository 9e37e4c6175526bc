use egui::{Response, RichText, Ui, Widget};

use crate::label::CountingLabel;
use crate::text::LabelContent;
use crate::ui::style;

/// Shows a counting label's current content.
///
/// The widget does not advance the animation; the host ticks the label's
/// display link once per frame. While the label is animating the widget asks
/// egui for another frame.
pub struct CountingLabelWidget<'a> {
    label: &'a CountingLabel,
    size: Option<f32>,
}

impl<'a> CountingLabelWidget<'a> {
    pub fn new(label: &'a CountingLabel) -> Self {
        Self { label, size: None }
    }

    /// Font size for plain content and for styled spans without their own size
    pub fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }
}

impl Widget for CountingLabelWidget<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        if self.label.is_animating() {
            ui.ctx().request_repaint();
        }

        match self.label.content() {
            LabelContent::Empty => ui.label(""),
            LabelContent::Plain(text) => match self.size {
                Some(size) => ui.label(RichText::new(text).size(size)),
                None => ui.label(text),
            },
            LabelContent::Styled(text) => {
                let mut font = egui::TextStyle::Body.resolve(ui.style());
                if let Some(size) = self.size {
                    font.size = size;
                }
                let color = ui.visuals().text_color();
                ui.label(style::layout_job(&text, &font, color))
            }
        }
    }
}
