pub mod style;
pub mod widget;

pub use widget::CountingLabelWidget;

use crate::label::CountingLabel;

pub trait UiCountingLabelExt {
    fn counting_label(&mut self, label: &CountingLabel) -> egui::Response;

    fn counting_label_sized(&mut self, label: &CountingLabel, size: f32) -> egui::Response;
}

impl UiCountingLabelExt for egui::Ui {
    fn counting_label(&mut self, label: &CountingLabel) -> egui::Response {
        self.add(CountingLabelWidget::new(label))
    }

    fn counting_label_sized(&mut self, label: &CountingLabel, size: f32) -> egui::Response {
        self.add(CountingLabelWidget::new(label).size(size))
    }
}
