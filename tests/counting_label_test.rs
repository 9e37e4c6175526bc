use std::cell::{Cell, RefCell};
use std::rc::Rc;

use counting_label::prelude::*;

/// Integration tests driving labels through a hand-ticked display link
#[cfg(test)]
mod counting_label_tests {
    use super::*;

    fn setup() -> (Rc<DisplayLink<ManualTime>>, CountingLabel) {
        counting_label::init_logging();
        let link = Rc::new(DisplayLink::manual());
        let label = CountingLabel::new(link.clone());
        (link, label)
    }

    fn record_renders(label: &CountingLabel) -> Rc<RefCell<Vec<String>>> {
        let renders = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&renders);
        label.set_render_target(Box::new(move |content: &LabelContent| {
            sink.borrow_mut().push(content.as_plain_text())
        }));
        renders
    }

    fn count_completions(label: &CountingLabel) -> Rc<Cell<u32>> {
        let completions = Rc::new(Cell::new(0));
        let hits = Rc::clone(&completions);
        label.set_completion(move || hits.set(hits.get() + 1));
        completions
    }

    #[test]
    fn test_zero_duration_completes_synchronously() {
        let (link, label) = setup();
        label.set_formatter(format::integer);
        let renders = record_renders(&label);
        let completions = count_completions(&label);

        label.count_from_with_duration(0.0, 100.0, 0.0);

        assert_eq!(*renders.borrow(), vec!["100".to_string()]);
        assert_eq!(completions.get(), 1);
        assert!(!link.has_subscribers());
        assert!(!label.is_animating());
        assert_eq!(label.current_value(), 100.0);
    }

    #[test]
    fn test_run_finishes_exactly_once() {
        let (link, label) = setup();
        label.set_formatter(format::fixed(3));
        let renders = record_renders(&label);
        let completions = count_completions(&label);

        label.count_from_with_duration(0.0, 100.0, 2.0);
        for _ in 0..4 {
            link.advance(0.5);
        }

        assert_eq!(renders.borrow().last().map(String::as_str), Some("100.000"));
        assert_eq!(renders.borrow().len(), 4);
        assert_eq!(completions.get(), 1);
        assert!(!link.has_subscribers());

        link.advance(0.5);
        link.advance(0.5);
        assert_eq!(renders.borrow().len(), 4);
        assert_eq!(completions.get(), 1);
    }

    #[test]
    fn test_irregular_ticks_are_measured() {
        let (link, label) = setup();
        label.set_formatter(format::fixed(0));
        let renders = record_renders(&label);

        label.count_from_with_duration(0.0, 1000.0, 1.0);
        link.advance(0.1);
        link.advance(0.05);
        link.advance(0.35);
        link.advance(3.0);

        assert_eq!(*renders.borrow(), vec!["100", "150", "500", "1000"]);
    }

    #[test]
    fn test_overshooting_tick_clamps_to_end_value() {
        let (link, label) = setup();
        label.set_easing(EasingOption::EaseOut);
        label.set_formatter(format::integer);
        let completions = count_completions(&label);

        label.count_from_with_duration(10.0, 20.0, 0.5);
        link.advance(10.0);

        assert_eq!(label.text(), "20");
        assert_eq!(label.progress(), 1.0);
        assert_eq!(completions.get(), 1);
    }

    #[test]
    fn test_count_from_current_value_supersedes_run() {
        let (link, label) = setup();
        label.set_formatter(format::fixed(1));
        let renders = record_renders(&label);

        label.count_from_with_duration(0.0, 100.0, 2.0);
        link.advance(1.0);
        assert_eq!(label.current_value(), 50.0);

        label.count_from_current_value_to_with_duration(0.0, 1.0);
        assert_eq!(link.subscriber_count(), 1);

        link.advance(0.5);
        assert_eq!(label.current_value(), 25.0);
        link.advance(0.5);

        assert_eq!(*renders.borrow(), vec!["50.0", "25.0", "0.0"]);
        assert!(!link.has_subscribers());
    }

    #[test]
    fn test_count_from_current_value_uses_default_duration() {
        let (link, label) = setup();
        label.set_formatter(format::integer);

        label.count_from_with_duration(0.0, 100.0, 4.0);
        link.advance(1.0);
        label.count_from_current_value_to(50.0);
        link.advance(1.0);

        // 25 -> 50 over the default 2 seconds, half way through
        assert_eq!(label.current_value(), 37.5);
    }

    #[test]
    #[should_panic(expected = "No formatter set")]
    fn test_missing_formatter_panics() {
        let (_link, label) = setup();
        label.count_from_with_duration(0.0, 100.0, 0.0);
    }

    #[test]
    #[should_panic(expected = "No formatter set")]
    fn test_missing_formatter_panics_on_tick() {
        let (link, label) = setup();
        label.count_from(0.0, 100.0);
        link.advance(0.1);
    }

    #[test]
    fn test_non_positive_animation_duration_falls_back_to_default() {
        let (link, label) = setup();
        label.set_formatter(format::integer);
        label.set_animation_duration(-1.0);

        label.count_from(0.0, 100.0);
        assert_eq!(label.animation_duration(), 2.0);

        link.advance(1.0);
        assert_eq!(label.text(), "50");
        link.advance(1.0);
        assert_eq!(label.text(), "100");
        assert!(!label.is_animating());
    }

    #[test]
    fn test_count_from_zero() {
        let (link, label) = setup();
        label.set_formatter(format::integer);
        label.set_animation_duration(1.0);

        label.count_from_zero_to(10.0);
        link.advance(0.5);
        assert_eq!(label.text(), "5");

        label.count_from_zero_to_with_duration(40.0, 0.0);
        assert_eq!(label.text(), "40");
        assert!(!link.has_subscribers());
    }

    #[test]
    fn test_styled_formatter() {
        let (link, label) = setup();
        label.set_formatter(format::integer);
        label.set_styled_formatter(|value| {
            StyledText::new()
                .span(format::grouped(value), TextStyle::default().color(Color::rgb(0, 160, 0)))
                .span(" pts", TextStyle::default().italic())
        });

        label.count_from_with_duration(0.0, 20000.0, 1.0);
        link.advance(1.0);

        match label.content() {
            LabelContent::Styled(text) => {
                assert_eq!(text.plain_text(), "20,000 pts");
                assert_eq!(text.spans()[0].style.color, Some(Color::rgb(0, 160, 0)));
            }
            other => panic!("expected styled content, got {:?}", other),
        }
    }

    #[test]
    fn test_completion_cleared_before_next_run() {
        let (link, label) = setup();
        label.set_formatter(format::integer);
        let completions = count_completions(&label);

        label.count_from_with_duration(0.0, 1.0, 0.0);
        label.count_from_with_duration(0.0, 1.0, 0.0);
        label.count_from_with_duration(0.0, 1.0, 0.5);
        link.advance(0.5);

        assert_eq!(completions.get(), 1);
    }

    #[test]
    fn test_superseded_run_does_not_complete() {
        let (link, label) = setup();
        label.set_formatter(format::integer);
        let completions = count_completions(&label);

        label.count_from_with_duration(0.0, 10.0, 1.0);
        link.advance(0.5);
        label.count_from_with_duration(0.0, 10.0, 1.0);
        link.advance(0.5);
        assert_eq!(completions.get(), 0);

        link.advance(0.5);
        assert_eq!(completions.get(), 1);
    }

    #[test]
    fn test_completion_can_chain_runs() {
        let (link, label) = setup();
        label.set_formatter(format::integer);

        let weak = label.downgrade();
        label.set_completion(move || {
            if let Some(label) = weak.upgrade() {
                label.count_from_current_value_to_with_duration(0.0, 1.0);
            }
        });

        label.count_from_with_duration(0.0, 10.0, 1.0);
        link.advance(1.0);
        assert_eq!(label.text(), "10");
        assert!(label.is_animating());
        assert_eq!(link.subscriber_count(), 1);

        link.advance(1.0);
        assert_eq!(label.text(), "0");
        assert!(!link.has_subscribers());
    }

    #[test]
    fn test_independent_labels_share_a_clock() {
        let (link, first) = setup();
        let second = CountingLabel::new(link.clone());
        first.set_formatter(format::integer);
        second.set_formatter(format::integer);

        first.count_from_with_duration(0.0, 10.0, 1.0);
        second.count_from_with_duration(100.0, 0.0, 2.0);
        assert_eq!(link.subscriber_count(), 2);

        link.advance(1.0);
        assert_eq!(first.text(), "10");
        assert_eq!(second.text(), "50");
        assert_eq!(link.subscriber_count(), 1);
    }

    #[test]
    fn test_label_from_config() {
        counting_label::init_logging();
        let link = Rc::new(DisplayLink::manual());
        let config = CountingLabelConfig::from_json(
            r#"{ "animation_duration": 1.0, "easing": "ease_in" }"#,
        )
        .unwrap();
        let label = CountingLabel::with_config(link.clone(), &config);
        label.set_formatter(format::fixed(2));

        label.count_from_zero_to(8.0);
        link.advance(0.5);
        assert_eq!(label.text(), "1.00");
    }
}
