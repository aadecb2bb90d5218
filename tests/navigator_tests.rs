// Integration tests for panel navigation and highlight synchronization

use std::time::Instant;

use pretty_assertions::assert_eq;
use serde_json::json;
use surveydeck::navigator::{
    ClickTarget, PanelNavigator, SurveyDocument, UiEvent, SMOOTH_SCROLL_DURATION,
};
use surveydeck::survey::{load_questions, parse_questions, QuestionDescriptor};

const VIEWPORT: u16 = 24;

fn questions(n: usize) -> Vec<QuestionDescriptor> {
    (0..n)
        .map(|i| QuestionDescriptor::new(format!("Q{}", i)))
        .collect()
}

fn navigator(n: usize) -> PanelNavigator {
    let mut nav = PanelNavigator::new(questions(n), VIEWPORT);
    nav.attach();
    nav
}

fn scroll_to_panel(nav: &mut PanelNavigator, index: usize) {
    let now = Instant::now();
    nav.handle_event(UiEvent::Click(ClickTarget::MenuItem(index)), now);
    nav.handle_event(UiEvent::Tick, now + SMOOTH_SCROLL_DURATION);
}

#[test]
fn test_exactly_one_active_panel_and_menu_item() {
    for n in 1..=6 {
        let mut nav = navigator(n);
        for i in 0..n {
            scroll_to_panel(&mut nav, i);
            assert_eq!(nav.current_index(), i, "n={} i={}", n, i);
            assert_eq!(nav.document().active_panels(), vec![i]);
            assert_eq!(nav.document().active_menu_items(), vec![i]);
        }
        // and back up again
        for i in (0..n).rev() {
            scroll_to_panel(&mut nav, i);
            assert_eq!(nav.document().active_panels(), vec![i]);
            assert_eq!(nav.document().active_menu_items(), vec![i]);
        }
    }
}

#[test]
fn test_nav_button_visibility() {
    for n in 1..=5 {
        let mut nav = navigator(n);
        for i in 0..n {
            scroll_to_panel(&mut nav, i);
            let doc = nav.document();
            assert_eq!(doc.up_button.hidden, i == 0, "up n={} i={}", n, i);
            assert_eq!(doc.down_button.hidden, i == n - 1, "down n={} i={}", n, i);
        }
    }

    let single = navigator(1);
    assert!(single.document().up_button.hidden);
    assert!(single.document().down_button.hidden);
}

#[test]
fn test_out_of_range_navigation_is_noop() {
    let n = 4;
    let mut nav = navigator(n);
    scroll_to_panel(&mut nav, 2);
    let offset = nav.scroll_offset();
    let now = Instant::now();

    nav.navigate_to(-1, now);
    nav.navigate_to(n as isize, now);
    nav.handle_event(UiEvent::Tick, now + SMOOTH_SCROLL_DURATION);

    assert_eq!(nav.current_index(), 2);
    assert_eq!(nav.scroll_offset(), offset);
    assert!(!nav.container().is_animating());
}

#[test]
fn test_nav_buttons_at_edges_do_nothing() {
    let mut nav = navigator(3);
    let now = Instant::now();
    nav.handle_event(UiEvent::Click(ClickTarget::NavUp), now);
    nav.handle_event(UiEvent::Tick, now + SMOOTH_SCROLL_DURATION);
    assert_eq!(nav.current_index(), 0);
    assert_eq!(nav.scroll_offset(), 0);

    scroll_to_panel(&mut nav, 2);
    nav.handle_event(UiEvent::Click(ClickTarget::NavDown), now);
    nav.handle_event(UiEvent::Tick, now + SMOOTH_SCROLL_DURATION);
    assert_eq!(nav.current_index(), 2);
}

#[test]
fn test_navigation_is_asynchronous() {
    let mut nav = navigator(5);
    let now = Instant::now();
    nav.navigate_to(3, now);
    assert_eq!(nav.current_index(), 0);
    assert!(nav.container().is_animating());

    // Intermediate frames pass through the panels in between
    let mut seen = vec![nav.current_index()];
    for step in 1..=10 {
        nav.handle_event(UiEvent::Tick, now + SMOOTH_SCROLL_DURATION * step / 10);
        if seen.last() != Some(&nav.current_index()) {
            seen.push(nav.current_index());
        }
    }
    assert_eq!(seen, vec![0, 1, 2, 3]);
    assert_eq!(nav.scroll_offset(), 3 * u32::from(VIEWPORT));
}

#[test]
fn test_wheel_scroll_snaps_to_next_panel() {
    let mut nav = navigator(3);
    let now = Instant::now();
    nav.handle_event(UiEvent::Wheel(3), now);
    assert_eq!(nav.current_index(), 0);
    nav.handle_event(UiEvent::Tick, now + SMOOTH_SCROLL_DURATION);
    assert_eq!(nav.scroll_offset(), u32::from(VIEWPORT));
    assert_eq!(nav.current_index(), 1);
}

#[test]
fn test_render_is_idempotent() {
    let qs = questions(4);
    assert_eq!(SurveyDocument::build(&qs), SurveyDocument::build(&qs));

    let mut nav = PanelNavigator::new(qs.clone(), VIEWPORT);
    let first = nav.document().clone();
    nav.render();
    assert_eq!(nav.document(), &first);
}

#[test]
fn test_menu_toggle_twice_restores_state() {
    let mut nav = navigator(2);
    let now = Instant::now();
    let original = nav.menu_open();

    nav.handle_event(UiEvent::Click(ClickTarget::MenuButton), now);
    assert_eq!(nav.menu_open(), !original);
    assert_eq!(nav.document().menu.open, nav.menu_open());

    nav.handle_event(UiEvent::Click(ClickTarget::MenuButton), now);
    assert_eq!(nav.menu_open(), original);
    assert_eq!(nav.document().menu.open, original);
    assert_eq!(nav.current_index(), 0);
}

#[test]
fn test_empty_survey_does_not_panic() {
    let mut nav = navigator(0);
    let now = Instant::now();
    for event in [
        UiEvent::Click(ClickTarget::NavUp),
        UiEvent::Click(ClickTarget::NavDown),
        UiEvent::Click(ClickTarget::MenuItem(0)),
        UiEvent::Wheel(10),
        UiEvent::Tick,
    ] {
        nav.handle_event(event, now);
    }
    nav.on_scroll();
    assert!(nav.document().panels.is_empty());
    assert!(nav.document().menu.items.is_empty());
}

#[test]
fn test_attributes_forwarded_to_input_element() {
    let qs = parse_questions(
        &json!([{
            "title": "Attrs",
            "componentTag": "custom-input",
            "attributes": {"a": null, "b": 5, "c": {"x": 1}}
        }])
        .to_string(),
    )
    .unwrap();
    let nav = PanelNavigator::new(qs, VIEWPORT);
    let input = &nav.document().panels[0].input;
    let attrs = input.attribute_string();
    assert!(attrs.contains(r#"a="""#));
    assert!(attrs.contains(r#"b="5""#));
    assert!(attrs.contains(r#"c="{&quot;x&quot;:1}""#));
    assert_eq!(
        input.to_markup(),
        r#"<custom-input a="" b="5" c="{&quot;x&quot;:1}"></custom-input>"#
    );
}

#[test]
fn test_demo_questions_load() {
    let qs = load_questions(std::path::Path::new("demos/questions.json")).expect("demo file");
    assert_eq!(qs.len(), 4);
    let nav = PanelNavigator::new(qs, VIEWPORT);
    assert_eq!(nav.document().panels[3].title, "Untitled Question");
    assert_eq!(nav.document().panels[1].input.tag, "choice-input");
    assert!(nav.document().panels[0]
        .input
        .attribute_string()
        .contains(r#"placeholder="e.g. &quot;Sam&quot;""#));
}
