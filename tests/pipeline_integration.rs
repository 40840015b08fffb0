use markprep::normalize::{WrapFormat, classify, normalize, reescape};
use markprep::pipeline::prepare;
use markprep::render::render_html;
use markprep::validate::{Diagnostic, Severity, validate};

const RELEASE_NOTES: &str = include_str!("fixtures/release_notes.md");
const RELEASE_NOTES_JSON: &str = include_str!("fixtures/release_notes.json.txt");
const RELEASE_NOTES_DOUBLE: &str = include_str!("fixtures/release_notes.double.txt");
const BROKEN: &str = include_str!("fixtures/broken.md");

#[test]
fn test_all_wrappings_decode_to_the_same_text() {
    let bare = normalize(RELEASE_NOTES);
    let json = normalize(RELEASE_NOTES_JSON);
    let double = normalize(RELEASE_NOTES_DOUBLE);

    assert_eq!(bare, RELEASE_NOTES.trim());
    assert_eq!(json.trim_end(), bare);
    assert_eq!(double.trim_end(), bare);
}

#[test]
fn test_fixture_formats_are_detected() {
    assert_eq!(classify(RELEASE_NOTES.trim()), WrapFormat::Bare);
    assert_eq!(classify(RELEASE_NOTES_JSON.trim()), WrapFormat::JsonQuoted);
    assert_eq!(classify(RELEASE_NOTES_DOUBLE.trim()), WrapFormat::DoubleEscapedQuoted);
}

#[test]
fn test_release_notes_are_clean_in_every_wrapping() {
    for raw in [RELEASE_NOTES, RELEASE_NOTES_JSON, RELEASE_NOTES_DOUBLE] {
        let prepared = prepare(raw).expect("non-blank input");
        assert!(prepared.validation.is_valid());
        assert!(
            !prepared.validation.has_warnings(),
            "{:?}",
            prepared.validation.warnings()
        );
    }
}

#[test]
fn test_decoded_release_notes_render_table_and_code() {
    let prepared = prepare(RELEASE_NOTES_DOUBLE).unwrap();
    let html = render_html(&prepared.text);
    assert!(html.contains("<table>"), "{html}");
    assert!(html.contains("language-json"), "{html}");
    assert!(!html.contains("\\n"), "escape markers leaked into output: {html}");
}

#[test]
fn test_broken_report_diagnostics() {
    let result = validate(BROKEN);

    assert_eq!(result.issues().len(), 1);
    assert_eq!(result.issues()[0].severity(), Severity::Issue);
    assert!(result.issues()[0].message().contains("Unclosed code block"));

    let lines: Vec<_> = result.warnings().iter().map(Diagnostic::line).collect();
    assert_eq!(lines, [Some(7), Some(8), Some(10), Some(3)]);
    assert!(result.warnings()[3].message().contains("H1 to H4"));
}

#[test]
fn test_broken_report_survives_escaping() {
    let wrapped = format!("\"{}\"", reescape(BROKEN));
    let prepared = prepare(&wrapped).unwrap();
    assert_eq!(prepared.format, WrapFormat::JsonQuoted);
    assert_eq!(prepared.validation, validate(BROKEN));
}

#[test]
fn test_short_table_row_after_separator() {
    let result = validate("| a | b |\n| - | - |\n| 1 | 2 |\n| 1 |");
    assert!(result.is_valid());
    assert_eq!(result.warnings().len(), 1);
    assert_eq!(result.warnings()[0].line(), Some(4));
}

#[test]
fn test_double_escaped_newlines_become_single_newlines() {
    let raw = r#"\"one\\ntwo\\nthree\""#;
    assert_eq!(normalize(raw), "one\ntwo\nthree");
}
