use super::*;

#[test]
fn plain_text_is_unchanged() {
    assert_eq!(format_message_html("Just words."), "Just words.");
}

#[test]
fn full_pipeline_runs_in_order() {
    let html = format_message_html("**a** *b* `c`\nd http://x.test");
    assert_eq!(
        html,
        "<strong>a</strong> <em>b</em> <code>c</code><br>d \
         <a href=\"http://x.test\" target=\"_blank\" rel=\"noopener noreferrer\">http://x.test</a>"
    );
}

#[test]
fn bold_answer_renders_strong() {
    assert_eq!(format_message_html("Hi **there**"), "Hi <strong>there</strong>");
}

#[test]
fn markers_are_non_greedy() {
    assert_eq!(format_message_html("*a* and *b*"), "<em>a</em> and <em>b</em>");
}

#[test]
fn markers_do_not_span_lines() {
    assert_eq!(format_message_html("*a\nb*"), "*a<br>b*");
}

#[test]
fn embedded_markup_is_escaped() {
    assert_eq!(
        format_message_html("<script>alert('x')</script>"),
        "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"
    );
}

#[test]
fn already_escaped_input_is_not_unescaped() {
    assert_eq!(format_message_html("&lt;b&gt;"), "&amp;lt;b&amp;gt;");
}

#[test]
fn formatting_twice_only_escapes_again() {
    let once = format_message_html("**x**");
    let twice = format_message_html(&once);
    assert_eq!(twice, "&lt;strong&gt;x&lt;/strong&gt;");
}

#[test]
fn url_stops_at_generated_tags() {
    let html = format_message_html("see https://a.test/path\nnext");
    assert!(html.contains(r#"<a href="https://a.test/path" "#));
    assert!(html.ends_with("</a><br>next"));
}

#[test]
fn quotes_cannot_break_out_of_href() {
    let html = format_message_html(r#"http://x.test/"onmouseover="alert(1)"#);
    assert!(!html.contains(r#""onmouseover"#));
    assert!(html.contains("&quot;onmouseover=&quot;"));
}

#[test]
fn escape_html_covers_all_special_characters() {
    assert_eq!(escape_html(r#"&<>"'"#), "&amp;&lt;&gt;&quot;&#39;");
}
