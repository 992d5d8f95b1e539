//! First-occurrence text substitution over fragment strings.
//!
//! Documentation variants of static fragments are derived by editing the
//! base string: a literal swap, removal of an optional block, or splicing
//! replacement markup over a block. Every operation touches the first
//! occurrence only and returns the input unchanged when no anchor matches.

use std::ops::Range;

use regex::Regex;

/// Replace the first occurrence of `needle` with `replacement`.
///
/// Returns the input unchanged when `needle` is absent.
pub fn replace_first(input: &str, needle: &str, replacement: &str) -> String {
    input.replacen(needle, replacement, 1)
}

/// Remove the first block opened by a `tag` element carrying `class`.
///
/// The match spans the narrowest well-formed block: from the opening tag
/// to the close tag that balances it, nested same-name tags included.
/// Surrounding text is preserved byte for byte. Absent or unbalanced
/// anchors leave the input unchanged.
pub fn remove_block(input: &str, tag: &str, class: &str) -> String {
    replace_block(input, tag, class, "")
}

/// Replace the first well-formed `tag.class` block with `replacement`.
pub fn replace_block(input: &str, tag: &str, class: &str, replacement: &str) -> String {
    match find_block(input, tag, class, 0) {
        Some(range) => splice(input, range, replacement),
        None => {
            log::debug!("no <{tag} class~={class}> block found, input unchanged");
            input.to_string()
        }
    }
}

/// Replace two adjacent `tag.class` blocks, whitespace between them
/// included, with `replacement`.
///
/// Both blocks must be present with nothing but whitespace between them;
/// otherwise the input is returned unchanged.
pub fn replace_adjacent_blocks(input: &str, tag: &str, class: &str, replacement: &str) -> String {
    let Some(first) = find_block(input, tag, class, 0) else {
        return input.to_string();
    };

    let gap = &input[first.end..];
    let second_start = first.end + (gap.len() - gap.trim_start().len());

    match find_block(input, tag, class, second_start) {
        Some(second) if second.start == second_start => {
            splice(input, first.start..second.end, replacement)
        }
        _ => {
            log::debug!("no adjacent <{tag} class~={class}> pair found, input unchanged");
            input.to_string()
        }
    }
}

/// Locate the narrowest well-formed `tag.class` block at or after `from`.
///
/// The range is absolute and covers the opening tag through its balancing
/// close tag.
fn find_block(input: &str, tag: &str, class: &str, from: usize) -> Option<Range<usize>> {
    let open = open_tag_pattern(tag, class);
    let m = open.find(&input[from..])?;
    let start = from + m.start();
    let mut pos = from + m.end();

    let open_token = format!("<{tag}");
    let close_token = format!("</{tag}>");
    let mut depth = 1usize;

    while depth > 0 {
        let rest = &input[pos..];
        let next_close = rest.find(&close_token)?;
        match find_open_token(rest, &open_token) {
            Some(next_open) if next_open < next_close => {
                depth += 1;
                pos += next_open + open_token.len();
            }
            _ => {
                depth -= 1;
                pos += next_close + close_token.len();
            }
        }
    }

    Some(start..pos)
}

/// Find the next `<tag` occurrence that opens an element (followed by
/// whitespace or `>`), skipping longer tag names sharing the prefix.
fn find_open_token(input: &str, open_token: &str) -> Option<usize> {
    let mut offset = 0;
    while let Some(found) = input[offset..].find(open_token) {
        let at = offset + found;
        match input[at + open_token.len()..].chars().next() {
            Some(c) if c.is_whitespace() || c == '>' => return Some(at),
            None => return None,
            _ => offset = at + open_token.len(),
        }
    }
    None
}

fn open_tag_pattern(tag: &str, class: &str) -> Regex {
    // Class tokens are space-delimited, so `gone` must not match inside
    // `gone-ish` or `gone__body`.
    let pattern = format!(
        r#"<{}\b[^>]*\bclass="(?:[^"]*\s)?{}(?:\s[^"]*)?"[^>]*>"#,
        regex::escape(tag),
        regex::escape(class),
    );
    Regex::new(&pattern).expect("Invalid open tag pattern")
}

fn splice(input: &str, range: Range<usize>, replacement: &str) -> String {
    let mut out =
        String::with_capacity(input.len() - (range.end - range.start) + replacement.len());
    out.push_str(&input[..range.start]);
    out.push_str(replacement);
    out.push_str(&input[range.end..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_first_touches_only_first_occurrence() {
        let out = replace_first("a b a", "a", "c");
        assert_eq!(out, "c b a");
    }

    #[test]
    fn test_replace_first_without_match_is_identity() {
        let out = replace_first("a b c", "x", "y");
        assert_eq!(out, "a b c");
    }

    #[test]
    fn test_remove_block_spans_opening_to_balanced_close() {
        let html = r#"<div><div class="gone"><span>x</span></div><p>keep</p></div>"#;
        assert_eq!(remove_block(html, "div", "gone"), "<div><p>keep</p></div>");
    }

    #[test]
    fn test_remove_block_balances_nested_same_tags() {
        let html = r#"<div class="outer"><div class="gone"><div>inner</div></div>tail</div>"#;
        assert_eq!(
            remove_block(html, "div", "gone"),
            r#"<div class="outer">tail</div>"#
        );
    }

    #[test]
    fn test_remove_block_missing_anchor_is_identity() {
        let html = "<div class=\"stays\">x</div>";
        assert_eq!(remove_block(html, "div", "gone"), html);
    }

    #[test]
    fn test_remove_block_unbalanced_is_identity() {
        let html = r#"<div class="gone"><div>never closed"#;
        assert_eq!(remove_block(html, "div", "gone"), html);
    }

    #[test]
    fn test_open_tag_matching_ignores_longer_tag_names() {
        // <p> scan must not treat <pre> as a nested <p>
        let html = r#"<p class="gone">a<pre>b</pre>c</p><p>after</p>"#;
        assert_eq!(remove_block(html, "p", "gone"), "<p>after</p>");
    }

    #[test]
    fn test_class_must_match_a_whole_token() {
        let html = r#"<div class="gone-ish">x</div>"#;
        assert_eq!(remove_block(html, "div", "gone"), html);

        let html = r#"<div class="card__gone">x</div>"#;
        assert_eq!(remove_block(html, "div", "gone"), html);
    }

    #[test]
    fn test_class_matches_among_multiple_tokens() {
        let html = r#"<div class="a gone b">x</div><p>y</p>"#;
        assert_eq!(remove_block(html, "div", "gone"), "<p>y</p>");
    }

    #[test]
    fn test_replace_adjacent_blocks_covers_the_whitespace_between() {
        let html = "<nav><div class=\"b\">1</div>\n\t<div class=\"b\">2</div></nav>";
        assert_eq!(
            replace_adjacent_blocks(html, "div", "b", "<span>one</span>"),
            "<nav><span>one</span></nav>"
        );
    }

    #[test]
    fn test_replace_adjacent_blocks_requires_a_pair() {
        let html = "<nav><div class=\"b\">alone</div></nav>";
        assert_eq!(replace_adjacent_blocks(html, "div", "b", "x"), html);
    }

    #[test]
    fn test_replace_adjacent_blocks_requires_adjacency() {
        let html = "<nav><div class=\"b\">1</div><hr><div class=\"b\">2</div></nav>";
        assert_eq!(replace_adjacent_blocks(html, "div", "b", "x"), html);
    }
}
