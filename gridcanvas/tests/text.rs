use gridcanvas::canvas::TraceCanvas;
use gridcanvas::text::{text_height, truncate_text, wrap_text};

// TraceCanvas metric: one ASCII char is 7px at the default 14px font,
// a wide (CJK) char is 14px.

#[test]
fn test_wrap_fits_single_line() {
    let canvas = TraceCanvas::new(0, 0);
    let wrapped = wrap_text(&canvas, "hello", 100.0, 22.0);
    assert_eq!(wrapped.lines.len(), 1);
    assert_eq!(wrapped.lines[0].content, "hello");
    assert_eq!(wrapped.lines[0].width, 35.0);
    assert_eq!(wrapped.total_height, 22.0);
}

#[test]
fn test_wrap_greedy_break() {
    let canvas = TraceCanvas::new(0, 0);
    // 10 chars at 7px into a 35px box: exactly 5 per line
    let wrapped = wrap_text(&canvas, "abcdefghij", 35.0, 22.0);
    assert_eq!(wrapped.lines.len(), 2);
    assert_eq!(wrapped.lines[0].content, "abcde");
    assert_eq!(wrapped.lines[1].content, "fghij");
    assert_eq!(wrapped.total_height, 44.0);
}

#[test]
fn test_wrap_newlines_are_hard_breaks() {
    let canvas = TraceCanvas::new(0, 0);
    let wrapped = wrap_text(&canvas, "ab\ncd", 100.0, 22.0);
    assert_eq!(wrapped.lines.len(), 2);
    assert_eq!(wrapped.lines[0].content, "ab");
    assert_eq!(wrapped.lines[1].content, "cd");
}

#[test]
fn test_wrap_drops_empty_segments() {
    let canvas = TraceCanvas::new(0, 0);
    let wrapped = wrap_text(&canvas, "a\n\n\nb", 100.0, 22.0);
    assert_eq!(wrapped.lines.len(), 2);
    assert_eq!(wrapped.total_height, 44.0);
}

#[test]
fn test_wrap_empty_text_is_one_line() {
    let canvas = TraceCanvas::new(0, 0);
    let wrapped = wrap_text(&canvas, "", 100.0, 22.0);
    assert_eq!(wrapped.lines.len(), 1);
    assert_eq!(wrapped.lines[0].content, "");
    assert_eq!(wrapped.total_height, 22.0);
}

#[test]
fn test_wrap_degenerate_width_is_single_line() {
    let canvas = TraceCanvas::new(0, 0);
    let wrapped = wrap_text(&canvas, "hello world", 0.0, 22.0);
    assert_eq!(wrapped.lines.len(), 1);
    assert_eq!(wrapped.lines[0].content, "hello world");
    assert_eq!(wrapped.total_height, 22.0);
}

#[test]
fn test_wrap_places_at_least_one_char_per_line() {
    let canvas = TraceCanvas::new(0, 0);
    // 3px box is narrower than any char; must not loop or drop chars
    let wrapped = wrap_text(&canvas, "abc", 3.0, 22.0);
    assert_eq!(wrapped.lines.len(), 3);
    assert_eq!(wrapped.lines[0].content, "a");
}

#[test]
fn test_wrap_wide_chars() {
    let canvas = TraceCanvas::new(0, 0);
    // two CJK chars per 28px line
    let wrapped = wrap_text(&canvas, "日本語テ", 28.0, 22.0);
    assert_eq!(wrapped.lines.len(), 2);
    assert_eq!(wrapped.lines[0].content, "日本");
}

#[test]
fn test_text_height_matches_wrap() {
    let canvas = TraceCanvas::new(0, 0);
    let text = "abcdefghij\nxyz";
    let wrapped = wrap_text(&canvas, text, 35.0, 22.0);
    assert_eq!(text_height(&canvas, text, 35.0, 22.0), wrapped.total_height);
}

#[test]
fn test_truncate_fits_unchanged() {
    let canvas = TraceCanvas::new(0, 0);
    assert_eq!(truncate_text(&canvas, "hello", 100.0), "hello");
    assert_eq!(truncate_text(&canvas, "hello", 35.0), "hello");
}

#[test]
fn test_truncate_appends_marker() {
    let canvas = TraceCanvas::new(0, 0);
    // 42px fits five chars plus the 7px marker
    assert_eq!(truncate_text(&canvas, "hello world", 42.0), "hello…");
}

#[test]
fn test_truncate_tiny_width_is_marker_only() {
    let canvas = TraceCanvas::new(0, 0);
    assert_eq!(truncate_text(&canvas, "hello", 7.0), "…");
}
