use super::*;

#[test]
fn renders_emphasis_and_lists() {
    let html = render_markdown_html("**x** is\n\n- one\n- two");
    assert!(html.contains("<strong>x</strong>"));
    assert!(html.contains("<li>one</li>"));
}

#[test]
fn drops_raw_html() {
    let html = render_markdown_html("hi <script>alert(1)</script> there");
    assert!(!html.contains("<script>"));
    assert!(html.contains("hi"));
}

#[test]
fn renders_tables() {
    let html = render_markdown_html("| a | b |\n|---|---|\n| 1 | 2 |");
    assert!(html.contains("<table>"));
}
