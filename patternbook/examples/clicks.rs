// Example: Simulated Interaction
//
// Builds the procedural components with callbacks attached and simulates
// clicks the way a hosting document would dispatch them:
// - Each callback logs the event it received
// - Buttons without callbacks stay inert

use htmldom::{find_class, ClickHandler};
use patternbook::widgets::{Card, Header, Hero};

fn log_handler(name: &'static str) -> ClickHandler {
    ClickHandler::new(move |event| {
        println!("{name}: clicked <{}> (id: {:?})", event.tag, event.id);
    })
}

fn main() {
    let hero = Hero::new()
        .title("Build Your Dream Website")
        .subtitle("Components without the framework.")
        .primary_action_label("Get Started")
        .secondary_action_label("Learn More")
        .on_primary_click(log_handler("onPrimaryClick"))
        .on_secondary_click(log_handler("onSecondaryClick"))
        .build();

    let actions = find_class(&hero, "hero__actions").expect("hero actions row");
    for button in actions.content.children() {
        button.click();
    }

    let card = Card::new()
        .title("Beautiful Landscapes")
        .description("Explore the hidden gems of nature with our guided tours.")
        .action_text("Learn More")
        .on_action_click(log_handler("onActionClick"))
        .build();

    if let Some(action) = find_class(&card, "card__action") {
        action.click();
    }

    let header = Header::new()
        .on_login(log_handler("onLogin"))
        .on_create_account(log_handler("onCreateAccount"))
        .build();

    let actions = find_class(&header, "header__actions").expect("header actions");
    for button in actions.content.children() {
        if !button.click() {
            println!("no handler on <{}>", button.tag);
        }
    }

    // Logged-in header: only the log-out button carries a handler.
    let header = Header::new()
        .user("Jane Doe")
        .on_logout(log_handler("onLogout"))
        .build();

    let actions = find_class(&header, "header__actions").expect("header actions");
    for child in actions.content.children() {
        if !child.click() {
            println!("no handler on <{}>", child.tag);
        }
    }
}
