// Example: Gallery Page
//
// Renders every registered variant into a single gallery.html for a quick
// visual pass without the explorer:
// - Fragment components emit their base or transformed markup
// - Builder components render through htmldom
// - Render internals are logged to gallery.log

use std::fs::File;
use std::io::Write;

use patternbook::catalog::registered_components;
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("gallery.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut page = String::new();
    page.push_str("<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str("<title>PatternBook gallery</title>\n</head>\n<body>\n");

    let mut components: Vec<_> = registered_components().collect();
    components.sort_by_key(|entry| entry.title);

    for entry in components {
        page.push_str(&format!("<h2>{}</h2>\n", entry.title));
        for variant in entry.variants {
            page.push_str(&format!("<h3>{}</h3>\n", variant.name));
            page.push_str(&(variant.render)());
            page.push('\n');
        }
    }

    page.push_str("</body>\n</html>\n");

    let mut out = File::create("gallery.html")?;
    out.write_all(page.as_bytes())?;
    println!("wrote gallery.html");

    Ok(())
}
