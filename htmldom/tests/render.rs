use htmldom::{render, Element};

// ============================================================================
// Attribute Ordering Tests
// ============================================================================

#[test]
fn test_attributes_render_in_fixed_order() {
    let el = Element::new("a")
        .attr("href", "#")
        .class("card__action")
        .id("action");

    assert_eq!(
        render(&el),
        "<a id=\"action\" class=\"card__action\" href=\"#\"></a>",
        "id must come first, then class, then remaining attributes"
    );
}

#[test]
fn test_remaining_attributes_keep_insertion_order() {
    let el = Element::new("img")
        .attr("src", "photo.jpg")
        .attr("alt", "A photo")
        .class("card__image");

    assert_eq!(
        render(&el),
        "<img class=\"card__image\" src=\"photo.jpg\" alt=\"A photo\">",
        "src was set before alt and must render before it"
    );
}

#[test]
fn test_classes_join_with_single_spaces() {
    let el = Element::text("button", "Go").classes(["btn", "btn--large", "btn--primary"]);

    assert_eq!(
        render(&el),
        "<button class=\"btn btn--large btn--primary\">Go</button>"
    );
}

// ============================================================================
// Style Declaration Tests
// ============================================================================

#[test]
fn test_style_declarations_format() {
    let el = Element::div()
        .class("c-button")
        .style_prop("--variant", "secondary")
        .style_prop("--size", "small");

    assert_eq!(
        render(&el),
        "<div class=\"c-button\" style=\"--variant: secondary; --size: small;\"></div>",
        "style pairs must render as `name: value;` joined by single spaces"
    );
}

#[test]
fn test_style_prop_replaces_in_place() {
    let el = Element::div()
        .style_prop("--size", "small")
        .style_prop("--variant", "secondary")
        .style_prop("--size", "large");

    assert_eq!(
        render(&el),
        "<div style=\"--size: large; --variant: secondary;\"></div>",
        "resetting a property must replace its value without reordering"
    );
}

#[test]
fn test_empty_style_omits_attribute() {
    assert_eq!(render(&Element::div().class("hero")), "<div class=\"hero\"></div>");
}

// ============================================================================
// Content Tests
// ============================================================================

#[test]
fn test_children_render_in_order_without_whitespace() {
    let el = Element::div()
        .class("hero__actions")
        .child(Element::text("button", "First"))
        .child(Element::text("button", "Second"));

    assert_eq!(
        render(&el),
        "<div class=\"hero__actions\"><button>First</button><button>Second</button></div>"
    );
}

#[test]
fn test_nested_children() {
    let el = Element::div()
        .class("card")
        .child(Element::div().class("card__content").child(Element::text("h3", "Title")));

    assert_eq!(
        render(&el),
        "<div class=\"card\"><div class=\"card__content\"><h3>Title</h3></div></div>"
    );
}

#[test]
fn test_empty_element_renders_open_and_close_tags() {
    assert_eq!(render(&Element::new("p")), "<p></p>");
}

// ============================================================================
// Escaping Tests
// ============================================================================

#[test]
fn test_text_escapes_markup_characters() {
    let el = Element::text("p", "Tom & Jerry <3 >_<");

    assert_eq!(render(&el), "<p>Tom &amp; Jerry &lt;3 &gt;_&lt;</p>");
}

#[test]
fn test_attribute_values_escape_quotes() {
    let el = Element::new("img").attr("alt", "a \"quoted\" name & more");

    assert_eq!(render(&el), "<img alt=\"a &quot;quoted&quot; name &amp; more\">");
}

// ============================================================================
// Void Element Tests
// ============================================================================

#[test]
fn test_void_elements_have_no_closing_tag() {
    let el = Element::new("img").class("card__image").attr("src", "x.png");

    assert_eq!(render(&el), "<img class=\"card__image\" src=\"x.png\">");
}

#[test]
fn test_br_and_hr_are_void() {
    assert_eq!(render(&Element::new("br")), "<br>");
    assert_eq!(render(&Element::new("hr")), "<hr>");
}

// ============================================================================
// Determinism Tests
// ============================================================================

#[test]
fn test_identical_trees_render_identically() {
    let build = || {
        Element::div()
            .class("hero")
            .style_prop("--cols", "3")
            .child(Element::text("h1", "Welcome").class("hero__title"))
    };

    assert_eq!(render(&build()), render(&build()));
}
