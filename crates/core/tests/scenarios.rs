use faqflow_core::{
    ContentFormat, EVENT_HANDLER, SCRIPT_TAG, get_content_warnings, process_content,
    sanitize_html, text_to_html, validate_html, validate_html_syntax,
};

#[test]
fn well_formed_paragraph_has_no_warnings() {
    assert!(get_content_warnings("<p>Hello</p>", ContentFormat::Html).is_empty());
}

#[test]
fn mismatched_tags_are_reported() {
    let warnings = get_content_warnings("<div><span>text</div>", ContentFormat::Html);
    assert!(
        warnings
            .iter()
            .any(|w| w == "Mismatched tags: Expected closing tag for <span>, found </div>")
    );
}

#[test]
fn unclosed_tag_is_reported() {
    let warnings = get_content_warnings("<b>bold", ContentFormat::Html);
    assert!(
        warnings
            .iter()
            .any(|w| w == "Unclosed tag: <b> is missing closing tag </b>")
    );
}

#[test]
fn javascript_urls_are_reported() {
    let warnings = get_content_warnings(
        r#"<a href="javascript:alert(1)">click</a>"#,
        ContentFormat::Html,
    );
    assert!(
        warnings
            .iter()
            .any(|w| w == "JavaScript protocol in URLs is not allowed for security reasons")
    );
}

#[test]
fn security_messages_are_exported() {
    let warnings = validate_html(r#"<p onclick="x()">hi</p><script>y()</script>"#);
    assert_eq!(warnings, vec![SCRIPT_TAG.to_string(), EVENT_HANDLER.to_string()]);
}

#[test]
fn markdown_headings_are_stripped_but_text_survives() {
    let html = process_content("# Title\n\nSome *text*", ContentFormat::Markdown);
    assert!(html.contains("<em>text</em>"));
    assert!(html.contains("Title"));
    assert!(!html.contains("<h1"));
}

#[test]
fn text_newlines_become_breaks() {
    assert_eq!(text_to_html("line1\nline2"), "line1<br>line2");
}

#[test]
fn embedded_html_warnings_carry_prefix() {
    let warnings = get_content_warnings(
        r#"Check out <img src="x" onerror="alert(1)">"#,
        ContentFormat::Markdown,
    );
    assert!(!warnings.is_empty());
    assert!(
        warnings
            .iter()
            .all(|w| w.starts_with("Embedded HTML in markdown: "))
    );
}

#[test]
fn lone_closing_div_is_one_orphan() {
    assert_eq!(
        validate_html_syntax("</div>"),
        vec!["Orphaned closing tag: </div>".to_string()]
    );
}

#[test]
fn many_void_elements_leave_nothing_open() {
    let html = "<br><img src=\"a.png\"><hr/><input><meta charset=\"utf-8\">".repeat(40);
    assert!(validate_html_syntax(&html).is_empty());
}

#[test]
fn fifty_nested_divs_are_balanced() {
    let html = format!("{}deep{}", "<div>".repeat(50), "</div>".repeat(50));
    assert!(get_content_warnings(&html, ContentFormat::Html).is_empty());
}

#[test]
fn benign_markup_passes_security_scan() {
    let html = r#"<figure><img src="/img/plan.png" alt="Plans"><figcaption>Plans</figcaption></figure>"#;
    assert!(validate_html(html).is_empty());
}

#[test]
fn inline_images_pass_both_scanners_and_the_sanitizer() {
    let html = r#"<p>Logo:</p><img src="data:image/png;base64,iVBORw0KGgo=" alt="dot">"#;
    assert!(get_content_warnings(html, ContentFormat::Html).is_empty());
    assert_eq!(process_content(html, ContentFormat::Html), html);
}

#[test]
fn prose_with_less_than_sign_has_no_warnings() {
    assert!(validate_html_syntax("Prices: if a <b then c").is_empty());
    assert!(get_content_warnings("<p>x</p><b class=\"x\"", ContentFormat::Html).is_empty());
}

#[test]
fn sanitized_output_never_contains_script() {
    let inputs = [
        "<script>alert(1)</script>",
        "<SCRIPT SRC=//evil.example/x.js></SCRIPT>",
        "<div><script>\nalert(1)\n</script></div>",
        "<scr<script>ipt>alert(1)</script>",
        "<svg><script>alert(1)</script></svg>",
    ];
    for input in inputs {
        let output = sanitize_html(input).to_lowercase();
        assert!(!output.contains("<script"), "{input} produced {output}");
    }
}

#[test]
fn sanitizing_twice_changes_nothing() {
    let inputs = [
        "<p>Plain answer</p>",
        r#"<table><tr><td onclick="x()">1</td></tr></table>"#,
        r#"<a href="javascript:alert(1)" title="t">bad</a><em>ok</em>"#,
        "<b><i>crossed</b></i>",
        "<video controls poster=\"/p.png\"><source src=\"/v.mp4\"></video>",
    ];
    for input in inputs {
        let once = sanitize_html(input);
        assert_eq!(sanitize_html(&once), once, "not idempotent for {input}");
    }
}

#[test]
fn empty_content_everywhere() {
    for format in [ContentFormat::Html, ContentFormat::Markdown, ContentFormat::Text] {
        assert_eq!(process_content("", format), "");
        assert!(get_content_warnings("", format).is_empty());
    }
}
