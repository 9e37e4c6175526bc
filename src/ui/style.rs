use egui::text::LayoutJob;
use egui::{Color32, FontId, Stroke, TextFormat};

use crate::text::{Color, StyledText, TextStyle};

pub fn color32(color: Color) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

/// egui text format for one span; unset attributes fall back to the defaults
pub fn text_format(style: &TextStyle, default_font: &FontId, default_color: Color32) -> TextFormat {
    let color = style.color.map(color32).unwrap_or(default_color);
    let font_id = match style.font_size {
        Some(size) => FontId::new(size, default_font.family.clone()),
        None => default_font.clone(),
    };

    TextFormat {
        font_id,
        color,
        italics: style.italic,
        underline: if style.underline {
            Stroke::new(1.0, color)
        } else {
            Stroke::NONE
        },
        ..Default::default()
    }
}

/// Lay out styled text as a single egui layout job
pub fn layout_job(text: &StyledText, default_font: &FontId, default_color: Color32) -> LayoutJob {
    let mut job = LayoutJob::default();
    for span in text.spans() {
        job.append(
            &span.text,
            0.0,
            text_format(&span.style, default_font, default_color),
        );
    }
    job
}
