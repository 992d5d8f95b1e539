// Example: Catalog Listing
//
// Walks the component registry and prints what a hosting explorer would
// discover:
// - Component titles and hosting layouts
// - Parameter schemas (control, options, documented defaults)
// - Named variants

use patternbook::catalog::{registered_components, Control};

fn main() {
    let mut components: Vec<_> = registered_components().collect();
    components.sort_by_key(|entry| entry.title);

    for entry in components {
        println!("{} [{:?}]", entry.title, entry.layout);

        if !entry.params.is_empty() {
            println!("  params:");
            for param in entry.params {
                let mut line = format!("    {} ({:?})", param.name, param.control);
                if let Some(category) = param.category {
                    line.push_str(&format!(" [{category}]"));
                }
                if let Some(default) = param.default_value {
                    line.push_str(&format!(" = {default}"));
                }
                println!("{line}");

                if param.control == Control::Select && !param.options.is_empty() {
                    for option in param.options {
                        println!("      {:24} {:?}", option.label, option.value);
                    }
                }
            }
        }

        println!("  variants:");
        for variant in entry.variants {
            println!("    {}", variant.name);
        }
        println!();
    }
}
