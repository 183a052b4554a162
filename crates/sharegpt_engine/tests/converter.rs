use sharegpt_core::{ConversionFailure, Converter};
use sharegpt_engine::Html2MdConverter;

#[test]
fn converter_turns_html_into_markdown() {
    let md = Html2MdConverter.to_markdown("<h1>Hello</h1><p>world</p>").unwrap();
    let trimmed = md.trim();
    assert!(
        trimmed.starts_with("# Hello") || trimmed.starts_with("Hello\n=="),
        "unexpected markdown output: {md:?}"
    );
    assert!(trimmed.contains("world"));
}

#[test]
fn converter_keeps_code_text() {
    let md = Html2MdConverter
        .to_markdown("<pre><code>let answer = 42;</code></pre>")
        .unwrap();
    assert!(md.contains("let answer = 42;"), "unexpected markdown output: {md:?}");
}

#[test]
fn nul_characters_are_rejected() {
    assert_eq!(
        Html2MdConverter.to_markdown("<p>a\0b</p>"),
        Err(ConversionFailure::RejectedMarkup)
    );
}
