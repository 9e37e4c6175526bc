use std::rc::Rc;

use counting_label::{
    prelude::*,
    runtime::drive_until_idle,
    ui::UiCountingLabelExt,
};

/// Counting label demo: a window by default, stdout with `--headless`
fn main() -> anyhow::Result<()> {
    counting_label::init_logging();

    if std::env::args().any(|arg| arg == "--headless") {
        return run_headless();
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([360.0, 200.0])
            .with_title("Counting Label"),
        ..Default::default()
    };

    eframe::run_native(
        "counting-label-app",
        options,
        Box::new(|cc| Box::new(CountingApp::new(cc))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run window: {e}"))?;

    Ok(())
}

fn hi_formatter() -> impl Fn(f64) -> String {
    format::with_suffix(format::integer, " Hi")
}

/// Count 0 -> 99 printing every frame, ticking the clock from a tokio interval
fn run_headless() -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let link = Rc::new(DisplayLink::new());
    let label = CountingLabel::new(link.clone());
    label.set_formatter(hi_formatter());
    label.set_render_target(Box::new(|content: &LabelContent| {
        println!("{}", content.as_plain_text())
    }));
    label.set_completion(|| log::info!("counting finished"));
    label.count_from(0.0, 99.0);

    let timing = FrameTimingConfig::default();
    let frames = runtime.block_on(drive_until_idle(&link, timing.frame_interval()));
    log::info!("delivered {} frames", frames);

    Ok(())
}

struct CountingApp {
    link: Rc<DisplayLink>,
    label: CountingLabel,
    easing: EasingOption,
    target: f64,
}

impl CountingApp {
    fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let link = Rc::new(DisplayLink::new());
        let label = CountingLabel::new(link.clone());
        label.set_formatter(hi_formatter());
        label.count_from(0.0, 99.0);

        Self {
            link,
            label,
            easing: EasingOption::Linear,
            target: 500.0,
        }
    }
}

impl eframe::App for CountingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.link.tick();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.counting_label_sized(&self.label, 32.0);
            ui.separator();

            ui.horizontal(|ui| {
                for easing in EasingOption::ALL {
                    if ui
                        .selectable_label(self.easing == easing, easing.name())
                        .clicked()
                    {
                        self.easing = easing;
                        self.label.set_easing(easing);
                    }
                }
            });

            ui.add(egui::Slider::new(&mut self.target, 0.0..=1000.0).text("target"));

            ui.horizontal(|ui| {
                if ui.button("Count").clicked() {
                    self.label.count_from_current_value_to(self.target);
                }
                if ui.button("Reset").clicked() {
                    self.label.count_from_with_duration(self.label.current_value(), 0.0, 0.0);
                }
            });
        });
    }
}
