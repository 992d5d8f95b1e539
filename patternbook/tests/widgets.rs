use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use htmldom::{find_class, render, ClickHandler};
use patternbook::widgets::{Button, Card, Header, Hero};
use patternbook::ButtonSize;

fn counter() -> (Arc<AtomicUsize>, ClickHandler) {
    let count = Arc::new(AtomicUsize::new(0));
    let sink = count.clone();
    let handler = ClickHandler::new(move |_| {
        sink.fetch_add(1, Ordering::SeqCst);
    });
    (count, handler)
}

// ============================================================================
// Button Tests
// ============================================================================

#[test]
fn test_button_carries_base_and_modifier_classes_only() {
    let el = Button::new()
        .label("Go")
        .primary(true)
        .size(ButtonSize::Large)
        .build();

    assert_eq!(
        el.classes,
        vec!["btn", "btn--large", "btn--primary"],
        "classes must be exactly base, size modifier, mode modifier"
    );
}

#[test]
fn test_button_defaults_to_medium_secondary() {
    let el = Button::new().label("Go").build();

    assert_eq!(el.classes, vec!["btn", "btn--medium", "btn--secondary"]);
}

#[test]
fn test_button_renders_as_typed_button_element() {
    let el = Button::new().label("Go").build();

    assert_eq!(
        render(&el),
        "<button class=\"btn btn--medium btn--secondary\" type=\"button\">Go</button>"
    );
}

#[test]
fn test_button_background_color_is_inline_only_when_supplied() {
    let plain = Button::new().label("Go").build();
    assert!(
        plain.get_style_prop("background-color").is_none(),
        "no override means no inline style"
    );

    let colored = Button::new().label("Go").background_color("#1ea7fd").build();
    assert_eq!(colored.get_style_prop("background-color"), Some("#1ea7fd"));
}

#[test]
fn test_button_missing_label_renders_empty_content() {
    let el = Button::new().build();

    assert_eq!(
        render(&el),
        "<button class=\"btn btn--medium btn--secondary\" type=\"button\"></button>"
    );
}

#[test]
fn test_button_click_invokes_callback_exactly_once() {
    let (count, handler) = counter();
    let el = Button::new().label("Go").on_click(handler).build();

    assert!(el.click());
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn test_button_without_callback_attaches_no_handler() {
    let el = Button::new().label("Go").build();

    assert!(el.on_click.is_none());
    assert!(!el.click(), "click with no handler must be a no-op");
}

// ============================================================================
// Card Tests
// ============================================================================

#[test]
fn test_card_with_title_and_description_only() {
    let el = Card::new().title("X").description("Y").build();

    assert_eq!(el.classes, vec!["card"]);
    let children = el.content.children();
    assert_eq!(children.len(), 1, "card must hold exactly the content block");
    assert_eq!(children[0].classes, vec!["card__content"]);

    let inner = children[0].content.children();
    assert_eq!(inner.len(), 2, "content must hold title and description only");
    assert_eq!(inner[0].tag, "h3");
    assert_eq!(inner[0].classes, vec!["card__title"]);
    assert_eq!(inner[0].content.text(), Some("X"));
    assert_eq!(inner[1].tag, "p");
    assert_eq!(inner[1].classes, vec!["card__description"]);
    assert_eq!(inner[1].content.text(), Some("Y"));

    assert!(find_class(&el, "card__image").is_none(), "no image url, no image node");
    assert!(find_class(&el, "card__action").is_none(), "no action text, no action link");
}

#[test]
fn test_card_image_comes_before_content() {
    let el = Card::new()
        .title("Lake")
        .description("Still water")
        .image_url("lake.jpg")
        .build();

    let children = el.content.children();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].tag, "img");
    assert_eq!(children[0].classes, vec!["card__image"]);
    assert_eq!(children[0].get_attr("src"), Some("lake.jpg"));
    assert_eq!(
        children[0].get_attr("alt"),
        Some("Lake"),
        "image alt falls back to the card title"
    );
    assert_eq!(children[1].classes, vec!["card__content"]);
}

#[test]
fn test_card_action_link_shape() {
    let el = Card::new()
        .title("T")
        .description("D")
        .action_text("Learn More")
        .build();

    let action = find_class(&el, "card__action").expect("action link should exist");
    assert_eq!(action.tag, "a");
    assert_eq!(action.get_attr("href"), Some("#"));
    assert_eq!(action.content.text(), Some("Learn More"));
}

#[test]
fn test_card_action_click_reaches_the_anchor() {
    let (count, handler) = counter();
    let el = Card::new()
        .title("T")
        .description("D")
        .action_text("More")
        .on_action_click(handler)
        .build();

    let action = find_class(&el, "card__action").expect("action link should exist");
    assert!(action.click());
    assert_eq!(count.load(Ordering::SeqCst), 1);

    assert!(el.on_click.is_none(), "the handler belongs to the anchor, not the root");
}

#[test]
fn test_card_callback_without_action_text_is_dropped() {
    let (count, handler) = counter();
    let el = Card::new()
        .title("T")
        .description("D")
        .on_action_click(handler)
        .build();

    assert!(find_class(&el, "card__action").is_none());
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

// ============================================================================
// Hero Tests
// ============================================================================

#[test]
fn test_hero_structure_with_both_actions() {
    let el = Hero::new()
        .title("Big")
        .subtitle("Small")
        .primary_action_label("Start")
        .secondary_action_label("More")
        .build();

    assert_eq!(el.classes, vec!["hero"]);
    let content = find_class(&el, "hero__content").expect("content block");
    let inner = content.content.children();
    assert_eq!(inner.len(), 3);
    assert_eq!(inner[0].classes, vec!["hero__title"]);
    assert_eq!(inner[0].tag, "h1");
    assert_eq!(inner[1].classes, vec!["hero__subtitle"]);
    assert_eq!(inner[2].classes, vec!["hero__actions"]);

    let actions = inner[2].content.children();
    assert_eq!(actions.len(), 2, "primary then secondary");
    assert_eq!(actions[0].classes, vec!["btn", "btn--large", "btn--primary"]);
    assert_eq!(actions[0].content.text(), Some("Start"));
    assert_eq!(actions[1].classes, vec!["btn", "btn--large", "btn--secondary"]);
    assert_eq!(actions[1].content.text(), Some("More"));
}

#[test]
fn test_hero_actions_row_is_always_present() {
    let el = Hero::new().title("Big").subtitle("Small").build();

    let actions = find_class(&el, "hero__actions").expect("actions row must exist");
    assert!(
        actions.content.children().is_empty(),
        "no labels means an empty actions row, not a missing one"
    );
}

#[test]
fn test_hero_omitting_secondary_label_omits_the_button() {
    let el = Hero::new()
        .title("Big")
        .subtitle("Small")
        .primary_action_label("Start")
        .build();

    let actions = find_class(&el, "hero__actions").expect("actions row");
    assert_eq!(actions.content.children().len(), 1);
    assert_eq!(
        actions.content.children()[0].content.text(),
        Some("Start")
    );
}

#[test]
fn test_hero_forwards_a_distinct_callback_to_each_button() {
    let (primary_count, primary_handler) = counter();
    let (secondary_count, secondary_handler) = counter();

    let el = Hero::new()
        .title("Big")
        .subtitle("Small")
        .primary_action_label("Start")
        .secondary_action_label("More")
        .on_primary_click(primary_handler)
        .on_secondary_click(secondary_handler)
        .build();

    let actions = find_class(&el, "hero__actions").expect("actions row");
    let buttons = actions.content.children();
    assert!(buttons[0].click());
    assert_eq!(primary_count.load(Ordering::SeqCst), 1);
    assert_eq!(secondary_count.load(Ordering::SeqCst), 0);

    assert!(buttons[1].click());
    assert_eq!(primary_count.load(Ordering::SeqCst), 1);
    assert_eq!(secondary_count.load(Ordering::SeqCst), 1);
}

// ============================================================================
// Header Tests
// ============================================================================

#[test]
fn test_header_logged_out_shows_login_and_signup() {
    let el = Header::new().build();

    assert_eq!(el.tag, "header");
    assert_eq!(el.classes, vec!["header"]);

    let brand = find_class(&el, "header__brand").expect("brand block");
    assert_eq!(brand.content.text(), Some("PatternBook"));

    let actions = find_class(&el, "header__actions").expect("actions block");
    let buttons = actions.content.children();
    assert_eq!(buttons.len(), 2);
    assert_eq!(buttons[0].content.text(), Some("Log in"));
    assert_eq!(buttons[0].classes, vec!["btn", "btn--small", "btn--secondary"]);
    assert_eq!(buttons[1].content.text(), Some("Sign up"));
    assert_eq!(buttons[1].classes, vec!["btn", "btn--small", "btn--primary"]);

    assert!(find_class(&el, "header__welcome").is_none());
}

#[test]
fn test_header_logged_in_shows_welcome_and_logout() {
    let el = Header::new().user("Jane Doe").build();

    let welcome = find_class(&el, "header__welcome").expect("welcome text");
    assert_eq!(welcome.tag, "span");
    assert_eq!(welcome.content.text(), Some("Welcome, Jane Doe!"));

    let actions = find_class(&el, "header__actions").expect("actions block");
    let children = actions.content.children();
    assert_eq!(children.len(), 2, "welcome text plus one button");
    assert_eq!(children[1].content.text(), Some("Log out"));
    assert_eq!(children[1].classes, vec!["btn", "btn--small", "btn--secondary"]);
}

#[test]
fn test_header_routes_callbacks_by_state() {
    let (login_count, login_handler) = counter();
    let (signup_count, signup_handler) = counter();

    let el = Header::new()
        .on_login(login_handler)
        .on_create_account(signup_handler)
        .build();

    let actions = find_class(&el, "header__actions").expect("actions block");
    let buttons = actions.content.children();
    assert!(buttons[0].click());
    assert!(buttons[1].click());
    assert_eq!(login_count.load(Ordering::SeqCst), 1);
    assert_eq!(signup_count.load(Ordering::SeqCst), 1);

    let (logout_count, logout_handler) = counter();
    let el = Header::new().user("Jane").on_logout(logout_handler).build();
    let actions = find_class(&el, "header__actions").expect("actions block");
    assert!(actions.content.children()[1].click());
    assert_eq!(logout_count.load(Ordering::SeqCst), 1);
}

// ============================================================================
// Purity Tests
// ============================================================================

#[test]
fn test_identical_parameters_render_identically() {
    let build = || {
        Hero::new()
            .title("Build Your Dream Website")
            .subtitle("Components without the framework.")
            .primary_action_label("Get Started")
            .build()
    };

    assert_eq!(render(&build()), render(&build()));
}

#[test]
fn test_builders_do_not_share_output_between_calls() {
    let first = Card::new().title("A").description("B").build();
    let second = Card::new().title("A").description("B").build();

    // Mutating one tree must leave the other untouched.
    let mutated = first.class("extra");
    assert_eq!(mutated.classes, vec!["card", "extra"]);
    assert_eq!(second.classes, vec!["card"]);
}
