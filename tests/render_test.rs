//! Integration tests for PDF rendering.
//!
//! Layout assertions read positioning operators straight out of
//! uncompressed content streams, so every test pins the creation date
//! and disables compression unless it is exercising those options.

use chrono::TimeZone;
use napdf::{
    parse_str, render_schedule, render_str, render_str_with_stats, PageSize, RenderOptions,
};

fn fixed_options() -> RenderOptions {
    RenderOptions::new()
        .with_compression(false)
        .with_created(chrono::Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap())
}

/// Extract (x, y) pairs from every text positioning operator.
fn text_positions(pdf: &[u8]) -> Vec<(f32, f32)> {
    operator_points(pdf, "Td")
}

/// Extract (x, y) pairs from path move/line operators.
fn path_points(pdf: &[u8]) -> Vec<(f32, f32)> {
    let mut points = operator_points(pdf, "m");
    points.extend(operator_points(pdf, "l"));
    points
}

fn operator_points(pdf: &[u8], op: &str) -> Vec<(f32, f32)> {
    let text = String::from_utf8_lossy(pdf);
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let mut points = Vec::new();
    for (i, token) in tokens.iter().enumerate() {
        if *token == op && i >= 2 {
            if let (Ok(x), Ok(y)) = (tokens[i - 2].parse::<f32>(), tokens[i - 1].parse::<f32>()) {
                points.push((x, y));
            }
        }
    }
    points
}

fn find(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    haystack[from..]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|i| i + from)
}

/// Data of the first stream object in the file.
fn first_stream(pdf: &[u8]) -> &[u8] {
    let start = find(pdf, b"stream\n", 0).unwrap() + b"stream\n".len();
    let end = find(pdf, b"\nendstream", start).unwrap();
    &pdf[start..end]
}

#[test]
fn test_empty_markdown_renders_title_page() {
    let result = render_str_with_stats("", &fixed_options()).unwrap();

    assert!(result.bytes.starts_with(b"%PDF-"));
    assert_eq!(result.stats.page_count, 1);
    assert_eq!(result.stats.section_count, 0);

    let text = String::from_utf8_lossy(&result.bytes);
    assert!(text.contains("(Sleep Schedule) Tj"));
    assert!(text.contains("(1) Tj"));
}

#[test]
fn test_exact_letter_layout() {
    let markdown = "### Wake-Up\n**06:30 AM**\n- Feed";
    let pdf = render_str(markdown, &fixed_options()).unwrap();

    let positions = text_positions(&pdf);
    assert_eq!(
        positions,
        vec![
            (50.0, 732.0), // title
            (50.0, 692.0), // heading
            (50.0, 670.0), // time label
            (60.0, 652.0), // bullet
            (572.0, 20.0), // page number
        ]
    );
}

#[test]
fn test_divider_spans_margins() {
    let markdown = "### Wake-Up\n**06:30 AM**\n- Feed";
    let pdf = render_str(markdown, &fixed_options()).unwrap();

    let points = path_points(&pdf);
    assert!(points.contains(&(50.0, 630.0)));
    assert!(points.contains(&(562.0, 630.0)));
}

#[test]
fn test_long_bullet_hard_wraps() {
    let markdown = format!("### Nap\n- {}", "a".repeat(200));
    let pdf = render_str(&markdown, &fixed_options()).unwrap();

    // 200 chars wrap into 90 + 90 + 20
    let body: Vec<_> = text_positions(&pdf)
        .into_iter()
        .filter(|(x, _)| *x == 60.0)
        .collect();
    assert_eq!(body.len(), 3);

    // Continuation lines are indented instead of bulleted
    let text = String::from_utf8_lossy(&pdf);
    assert!(text.contains("(   aaa"));
}

#[test]
fn test_wrap_width_option() {
    let markdown = "### Nap\n- abcdefghijklmno";
    let options = fixed_options().with_wrap_width(10);
    let pdf = render_str(markdown, &options).unwrap();

    let text = String::from_utf8_lossy(&pdf);
    assert!(text.contains("(   klmno) Tj"));
}

#[test]
fn test_page_break_and_numbering() {
    let bullets: String = (0..60).map(|i| format!("- bullet number {}\n", i)).collect();
    let markdown = format!("### Routine\n{}", bullets);
    let result = render_str_with_stats(&markdown, &fixed_options()).unwrap();

    assert_eq!(result.stats.page_count, 2);
    assert_eq!(result.stats.bullet_count, 60);

    let text = String::from_utf8_lossy(&result.bytes);
    assert!(text.contains("(1) Tj"));
    assert!(text.contains("(2) Tj"));
}

#[test]
fn test_no_draw_below_page_bottom() {
    let mut markdown = String::new();
    for s in 0..8 {
        markdown.push_str(&format!("### Section {}\n**0{}:00 AM**\n", s, s));
        for b in 0..20 {
            markdown.push_str(&format!("- wind-down step {} {}\n", b, "x".repeat(100)));
        }
    }
    let pdf = render_str(&markdown, &fixed_options()).unwrap();

    for (_, y) in text_positions(&pdf) {
        assert!(y >= 20.0, "text drawn at y = {}", y);
    }
    for (_, y) in path_points(&pdf) {
        assert!(y >= 8.0, "divider drawn at y = {}", y);
    }
}

#[test]
fn test_streaming_matches_model_render() {
    let markdown =
        "### Wake-Up\n**07:00 AM**\n- Morning feed\n- Diaper change\n### Nap\n- Dim the room";
    let options = fixed_options().with_age_months(6);

    let streamed = render_str(markdown, &options).unwrap();
    let schedule = parse_str(markdown, &options.title);
    let modeled = render_schedule(&schedule, &options).unwrap();

    assert_eq!(streamed, modeled.bytes);
}

#[test]
fn test_deterministic_compressed_bytes() {
    let markdown = "### Nap\n- Rest quietly";
    let options =
        RenderOptions::new().with_created(chrono::Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap());

    assert_eq!(
        render_str(markdown, &options).unwrap(),
        render_str(markdown, &options).unwrap()
    );
}

#[test]
fn test_a4_media_box() {
    let options = fixed_options().with_page_size(PageSize::A4);
    let pdf = render_str("### Nap\n- Rest", &options).unwrap();

    let text = String::from_utf8_lossy(&pdf);
    assert!(text.contains("0 0 595 842"));

    // Title sits relative to the A4 top edge
    assert_eq!(text_positions(&pdf)[0], (50.0, 782.0));
}

#[test]
fn test_compression_flag() {
    let markdown = "### Nap\n- Rest";
    let compressed = render_str(markdown, &RenderOptions::new()).unwrap();
    let plain = render_str(markdown, &fixed_options()).unwrap();

    assert!(String::from_utf8_lossy(&compressed).contains("FlateDecode"));

    let plain_text = String::from_utf8_lossy(&plain);
    assert!(!plain_text.contains("FlateDecode"));
    assert!(plain_text.contains("(Nap) Tj"));
}

#[test]
fn test_compressed_stream_inflates_to_plain() {
    use std::io::Read;

    let markdown = "### Nap\n- Rest";
    let compressed = render_str(markdown, &fixed_options().with_compression(true)).unwrap();
    let plain = render_str(markdown, &fixed_options()).unwrap();

    let mut decoder = flate2::read::ZlibDecoder::new(first_stream(&compressed));
    let mut inflated = Vec::new();
    decoder.read_to_end(&mut inflated).unwrap();

    assert_eq!(inflated, first_stream(&plain));
}

#[test]
fn test_document_info() {
    let pdf = render_str("", &fixed_options()).unwrap();
    let text = String::from_utf8_lossy(&pdf);

    assert!(text.contains(concat!("(napdf ", env!("CARGO_PKG_VERSION"), ")")));
    assert!(text.contains("(D:20250115"));
    assert!(text.contains("(Sleep Schedule)"));
}

#[test]
fn test_render_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schedule.md");
    std::fs::write(&path, "### Nap\n- Rest").unwrap();

    let pdf = napdf::render_file(&path, &RenderOptions::new()).unwrap();
    assert!(pdf.starts_with(b"%PDF-"));
}

#[test]
fn test_render_file_missing_input() {
    let result = napdf::render_file("no_such_schedule.md", &RenderOptions::new());
    assert!(result.is_err());
}
