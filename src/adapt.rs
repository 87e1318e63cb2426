use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::{trace, warn};

use crate::glyphs::Style;

struct Patterns {
    html_link: Regex,
    html_link_open: Regex,
    html_p: Regex,
    html_bold: Regex,
    html_italic: Regex,
    html_any_tag: Regex,
    protected: Regex,
    paren_url: Regex,
}

static RE: LazyLock<Patterns> = LazyLock::new(|| Patterns {
    html_link: Regex::new(r#"<a href=["']([:/\w\-.=?&]*)["']>([ \w\-./]*)</a>"#).unwrap(),
    html_link_open: Regex::new(r"(?i)<a\s[^>]*>").unwrap(),
    html_p: Regex::new(r"</?p>").unwrap(),
    html_bold: Regex::new(r"<b>(.*?)</b>").unwrap(),
    html_italic: Regex::new(r"<i>(.*?)</i>").unwrap(),
    html_any_tag: Regex::new(r"<[^<]+?>").unwrap(),
    protected: Regex::new(r"https?://[:/\w\-.=?&]*|<[^<]+?>").unwrap(),
    paren_url: Regex::new(r"\s?\((https?://[:/\w\-.=?&]*)\)\s?").unwrap(),
});

/// Convert bot message markup (`<b>`, `<i>`, `<a>`, `<p>`) into text a
/// messenger without HTML support can display.
///
/// - `threema_format`: render emphasis as `*bold*` / `_italic_` instead of
///   Unicode look-alike glyphs.
/// - `just_strip`: only turn links and paragraphs into plain text, no
///   emphasis at all.
///
/// Any other tag is removed. An anchor that does not match the supported
/// grammar loses its URL.
pub fn adapt_text(text: &str, threema_format: bool, just_strip: bool) -> String {
    if text.is_empty() {
        return String::new();
    }

    // Step 1: <a href="url">label</a> → label (url)
    let text = extract_links(text);

    // Step 2: <p> → line breaks, trim every line
    let mut text = normalize_paragraphs(&text);

    // Step 3: Emphasis, bold before italic
    if !just_strip {
        let bold: fn(&str) -> String = if threema_format {
            render_bold_markdown
        } else {
            render_bold
        };
        let italic: fn(&str) -> String = if threema_format {
            render_italic_markdown
        } else {
            render_italic
        };
        trace!(threema_format, "rendering emphasis");

        text = RE
            .html_bold
            .replace_all(&text, |caps: &Captures| bold(&caps[1]))
            .into_owned();
        text = RE
            .html_italic
            .replace_all(&text, |caps: &Captures| italic(&caps[1]))
            .into_owned();
    }

    // Step 4: Drop everything else that looks like a tag
    strip_tags(&text)
}

/// Rewrite every supported anchor into `label (url)`.
pub fn extract_links(text: &str) -> String {
    let text = RE.html_link.replace_all(text, "${2} (${1})").into_owned();

    for tag in RE.html_link_open.find_iter(&text) {
        warn!(tag = tag.as_str(), "unsupported anchor tag, link target is dropped");
    }

    text
}

/// Turn `<p>` / `</p>` into line breaks and trim whitespace around every line.
///
/// Blank lines in the middle survive; leading and trailing newlines do not.
pub fn normalize_paragraphs(text: &str) -> String {
    let text = RE.html_p.replace_all(text, "\n");
    text.lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
        .trim_matches('\n')
        .to_string()
}

/// Remove every remaining `<...>` tag in a single pass.
pub fn strip_tags(text: &str) -> String {
    RE.html_any_tag.replace_all(text, "").into_owned()
}

/// Bold look-alike glyphs. URLs and leftover tags are copied verbatim.
pub fn render_bold(text: &str) -> String {
    render_glyphs(text, Style::Bold)
}

/// Italic look-alike glyphs. Digits have no italic form and stay as they are.
pub fn render_italic(text: &str) -> String {
    render_glyphs(text, Style::Italic)
}

/// `*bold*` with parenthesized URLs moved outside the delimiters.
pub fn render_bold_markdown(text: &str) -> String {
    render_markdown(text, '*')
}

/// `_italic_` with parenthesized URLs moved outside the delimiters.
pub fn render_italic_markdown(text: &str) -> String {
    render_markdown(text, '_')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Text(&'a str),
    Url(&'a str),
    Tag(&'a str),
}

fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut last = 0;

    for m in RE.protected.find_iter(text) {
        if m.start() > last {
            out.push(Segment::Text(&text[last..m.start()]));
        }
        if m.as_str().starts_with('<') {
            out.push(Segment::Tag(m.as_str()));
        } else {
            out.push(Segment::Url(m.as_str()));
        }
        last = m.end();
    }

    if last < text.len() {
        out.push(Segment::Text(&text[last..]));
    }
    out
}

fn render_glyphs(text: &str, style: Style) -> String {
    // Styled glyphs are 4 bytes wide
    let mut out = String::with_capacity(text.len() * 4);
    for segment in segments(text) {
        match segment {
            Segment::Text(plain) => style.apply(plain, &mut out),
            Segment::Url(verbatim) | Segment::Tag(verbatim) => out.push_str(verbatim),
        }
    }
    out
}

fn render_markdown(text: &str, delimiter: char) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut last = 0;

    for caps in RE.paren_url.captures_iter(text) {
        let (Some(whole), Some(url)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        push_emphasized(&mut parts, &text[last..whole.start()], delimiter);
        parts.push(format!("({})", url.as_str()));
        last = whole.end();
    }
    push_emphasized(&mut parts, &text[last..], delimiter);

    parts.join(" ").trim().to_string()
}

// Empty runs get no delimiters, so a URL at either end never leaves `**`/`__`
fn push_emphasized(parts: &mut Vec<String>, text: &str, delimiter: char) {
    if !text.is_empty() {
        parts.push(format!("{delimiter}{text}{delimiter}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // === Unicode emphasis ===

    #[test]
    fn test_bold_unicode() {
        assert_eq!(
            adapt_text("<b>Dies ist ein Test!</b>", false, false),
            "𝗗𝗶𝗲𝘀 𝗶𝘀𝘁 𝗲𝗶𝗻 𝗧𝗲𝘀𝘁!"
        );
    }

    #[test]
    fn test_italic_unicode() {
        assert_eq!(
            adapt_text("<i>Dies ist ein Test!</i>", false, false),
            "𝘋𝘪𝘦𝘴 𝘪𝘴𝘵 𝘦𝘪𝘯 𝘛𝘦𝘴𝘵!"
        );
    }

    #[test]
    fn test_bold_umlaut_combining() {
        assert_eq!(
            adapt_text("<b>Städte</b>", false, false),
            "𝗦𝘁𝗮\u{308}𝗱𝘁𝗲"
        );
    }

    #[test]
    fn test_bold_digits_italic_digits() {
        assert_eq!(adapt_text("<b>42</b>", false, false), "𝟰𝟮");
        assert_eq!(adapt_text("<i>42</i>", false, false), "42");
    }

    #[test]
    fn test_bold_and_italic_in_one_text() {
        assert_eq!(
            adapt_text("<b>ab</b> und <i>cd</i>", false, false),
            "𝗮𝗯 und 𝘤𝘥"
        );
    }

    #[test]
    fn test_url_in_italic_unicode() {
        let input = "<i>Mehr Infos <a href='https://test.de/'>hier</a> und <a href='https://test2.de/'>da</a></i>";
        assert_eq!(
            adapt_text(input, false, false),
            "𝘔𝘦𝘩𝘳 𝘐𝘯𝘧𝘰𝘴 𝘩𝘪𝘦𝘳 (https://test.de/) 𝘶𝘯𝘥 𝘥𝘢 (https://test2.de/)"
        );
    }

    #[test]
    fn test_bare_url_in_bold_untouched() {
        assert_eq!(render_bold("via http://x.de/a"), "𝘃𝗶𝗮 http://x.de/a");
    }

    // === Markdown emphasis ===

    #[test]
    fn test_bold_markdown() {
        assert_eq!(
            adapt_text(
                "<b>Dies ist ein Test mit ein paar schönen Umlauten wie üäö!</b>",
                true,
                false
            ),
            "*Dies ist ein Test mit ein paar schönen Umlauten wie üäö!*"
        );
    }

    #[test]
    fn test_italic_markdown() {
        assert_eq!(
            adapt_text(
                "<i>Dies ist ein Test mit ein paar schönen Umlauten wie üäö!</i>",
                true,
                false
            ),
            "_Dies ist ein Test mit ein paar schönen Umlauten wie üäö!_"
        );
    }

    #[test]
    fn test_url_in_italic_markdown() {
        let input = "<i>Mehr Infos <a href='https://test.de/'>hier</a> und <a href='https://test2.de/'>da</a></i>";
        assert_eq!(
            adapt_text(input, true, false),
            "_Mehr Infos hier_ (https://test.de/) _und da_ (https://test2.de/)"
        );
    }

    #[test]
    fn test_url_in_bold_markdown() {
        let input = "<b>Mehr Infos <a href='https://test.de/'>hier</a> und <a href='https://test2.de/'>da</a></b>";
        assert_eq!(
            adapt_text(input, true, false),
            "*Mehr Infos hier* (https://test.de/) *und da* (https://test2.de/)"
        );
    }

    #[test]
    fn test_url_at_span_start_markdown() {
        assert_eq!(
            render_bold_markdown("(https://a.de/) danach"),
            "(https://a.de/) *danach*"
        );
    }

    #[test]
    fn test_empty_span_markdown() {
        assert_eq!(adapt_text("vor<b></b>nach", true, false), "vornach");
    }

    #[test]
    fn test_markdown_keeps_literal_double_asterisk() {
        assert_eq!(render_bold_markdown("2**3"), "*2**3*");
    }

    // === Links ===

    #[test]
    fn test_link() {
        assert_eq!(
            adapt_text("<a href='https://d-64.org/'>D-64</a>", false, false),
            "D-64 (https://d-64.org/)"
        );
    }

    #[test]
    fn test_several_links() {
        let input = "<a href='https://d-64.org/'>D-64</a> und der <a href=\"https://www.ccc.de/\">CCC</a> leisten wertvolle Arbeit!";
        assert_eq!(
            adapt_text(input, false, false),
            "D-64 (https://d-64.org/) und der CCC (https://www.ccc.de/) leisten wertvolle Arbeit!"
        );
    }

    #[test]
    fn test_link_with_query() {
        assert_eq!(
            adapt_text(
                "<a href='https://tourismus-wegweiser.de/widget/detail/?bl=he&sel=no'>hier</a>",
                false,
                false
            ),
            "hier (https://tourismus-wegweiser.de/widget/detail/?bl=he&sel=no)"
        );
    }

    #[test]
    fn test_unsupported_link_loses_url() {
        assert_eq!(
            adapt_text("<a href='https://x.de/' target='_blank'>X</a>", false, false),
            "X"
        );
    }

    // === Paragraphs and stripping ===

    #[test]
    fn test_just_strip() {
        assert_eq!(
            adapt_text("<p>Absatz 1.</p> Kein Absatz. <p>Absatz 2</p>", false, true),
            "Absatz 1.\nKein Absatz.\nAbsatz 2"
        );
    }

    #[test]
    fn test_just_strip_drops_emphasis_tags() {
        assert_eq!(adapt_text("<b>fett</b> <i>kursiv</i>", false, true), "fett kursiv");
    }

    #[test]
    fn test_blank_lines_kept() {
        assert_eq!(normalize_paragraphs("  a \n\n b  \n"), "a\n\nb");
    }

    #[test]
    fn test_strip_unknown_tags() {
        assert_eq!(adapt_text("<code>D-64</code>", false, false), "D-64");
    }

    // === Edge cases ===

    #[test]
    fn test_empty_input() {
        assert_eq!(adapt_text("", true, false), "");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(adapt_text("hallo welt", false, false), "hallo welt");
    }

    #[test]
    fn test_segments() {
        assert_eq!(
            segments("a https://x.de/ <i>b"),
            vec![
                Segment::Text("a "),
                Segment::Url("https://x.de/"),
                Segment::Text(" "),
                Segment::Tag("<i>"),
                Segment::Text("b"),
            ]
        );
    }

    fn tagged_text() -> impl Strategy<Value = String> {
        prop::collection::vec(prop_oneof!["[^<]{0,12}", "</?[a-z]{1,6}>"], 0..12)
            .prop_map(|parts| parts.concat())
    }

    proptest! {
        #[test]
        fn prop_strip_tags_idempotent(text in tagged_text()) {
            let once = strip_tags(&text);
            prop_assert_eq!(strip_tags(&once), once.clone());
            prop_assert!(!once.contains('<'));
        }

        #[test]
        fn prop_plain_text_survives_markdown(text in "[a-zA-Z0-9 ,.!]{1,40}") {
            let rendered = adapt_text(&format!("<b>{text}</b>"), true, false);
            prop_assert_eq!(rendered, format!("*{text}*").trim().to_string());
        }
    }
}
