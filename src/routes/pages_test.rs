use super::*;

fn qa(question: &str) -> QaPair {
    QaPair { question: question.to_owned(), answer: "a".to_owned(), sources: Vec::new() }
}

#[test]
fn escape_html_escapes_markup_and_quotes() {
    assert_eq!(escape_html(r#"<a href="x">Tom's & co</a>"#), "&lt;a href=&quot;x&quot;&gt;Tom&#39;s &amp; co&lt;/a&gt;");
}

#[test]
fn render_fills_token_slot() {
    let html = render_demo_page(r#"<input name="csrf_token" value="{{csrf_token}}">"#, "1.ab.cd", &[]);
    assert_eq!(html, r#"<input name="csrf_token" value="1.ab.cd">"#);
}

#[test]
fn render_emits_one_button_per_question() {
    let html = render_demo_page("{{predefined_questions}}", "t", &[qa("First?"), qa("Second?")]);
    assert_eq!(html.matches("class=\"predefined-question\"").count(), 2);
    assert!(html.contains(r#"data-question="First?""#));
    assert!(html.contains(">Second?</button>"));
}

#[test]
fn render_escapes_question_text() {
    let html = render_demo_page("{{predefined_questions}}", "t", &[qa(r#"Is "x" <safe>?"#)]);
    assert!(html.contains(r#"data-question="Is &quot;x&quot; &lt;safe&gt;?""#));
    assert!(!html.contains("<safe>"));
}

#[test]
fn embedded_template_has_both_slots_and_widget_mount() {
    assert!(DEMO_TEMPLATE.contains(TOKEN_SLOT));
    assert!(DEMO_TEMPLATE.contains(QUESTIONS_SLOT));
    assert!(DEMO_TEMPLATE.contains(r#"id="chat-widget""#));
}

#[test]
fn escape_html_covers_all_special_characters() {
    assert_eq!(escape_html(r#"&<>"'"#), "&amp;&lt;&gt;&quot;&#39;");
}
