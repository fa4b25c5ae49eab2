//! Tests for the main LAS parser functionality

use std::io::Write;

use super::sample_las;
use crate::app::services::las_parser::{LasParser, Section};
use crate::config::LasConfig;
use crate::Error;

#[test]
fn test_empty_input_yields_degenerate_result() {
    let parser = LasParser::new();
    let result = parser.parse_str("");

    assert!(result.is_empty());
    assert_eq!(result.stats.lines_total, 0);
}

#[test]
fn test_input_without_section_markers_yields_empty_result() {
    let content = "STRT.F  8665.00 : START DEPTH\n8665.0 1.23\nDEPT.FT\n";
    let parser = LasParser::new();
    let result = parser.parse_str(content);

    assert!(result.metadata.is_empty());
    assert!(result.curves.is_empty());
    assert!(result.data.is_empty());
    assert_eq!(result.stats.lines_skipped, 3);
}

#[test]
fn test_parses_representative_file() {
    let parser = LasParser::new();
    let result = parser.parse_str(sample_las());

    assert_eq!(result.metadata.len(), 6);
    assert_eq!(result.metadata["STRT"], "8665.00");
    assert_eq!(result.metadata["STOP"], "8667.00");
    assert_eq!(result.metadata["STEP"], "0.50");
    assert_eq!(result.metadata["NULL"], "-9999");
    assert_eq!(result.metadata["WELL"], "ANACONDA 55");
    assert_eq!(result.metadata["LOC"], "Gulf Coast");

    // Curve tokens are captured verbatim, unit suffix included
    assert_eq!(result.curves, vec!["DEPT.FT", "GR.GAPI", "RHOB.G/CC"]);

    // Sentinel values pass through unmodified
    assert_eq!(
        result.data,
        vec![
            vec![8665.00, 45.2, 2.35],
            vec![8665.50, 50.1, -9999.0],
            vec![8666.00, 48.7, 2.41],
        ]
    );
    assert_eq!(result.stats.rows_parsed, 3);
}

#[test]
fn test_comments_and_blank_lines_are_ignored_everywhere() {
    let content = "~Well Information\n\n# a comment\n STRT.F  100.0 : START\n~Ascii\n\n# another\n100.0 1.0\n";
    let parser = LasParser::new();
    let result = parser.parse_str(content);

    assert_eq!(result.metadata["STRT"], "100.0");
    assert_eq!(result.data, vec![vec![100.0, 1.0]]);
    assert_eq!(result.stats.lines_skipped, 0);
}

#[test]
fn test_data_row_with_non_numeric_leading_token_is_dropped() {
    let content = "~Ascii\n8665.0 1.23 -9999\nabc 1 2\n";
    let parser = LasParser::new();
    let result = parser.parse_str(content);

    assert_eq!(result.data, vec![vec![8665.0, 1.23, -9999.0]]);
    assert_eq!(result.stats.rows_parsed, 1);
    assert_eq!(result.stats.lines_skipped, 1);
}

#[test]
fn test_mid_row_failures_do_not_drop_the_row() {
    let content = "~Ascii\n8665.0 bad 2.41\n";
    let parser = LasParser::new();
    let result = parser.parse_str(content);

    assert_eq!(result.data.len(), 1);
    assert_eq!(result.data[0][0], 8665.0);
    assert!(result.data[0][1].is_nan());
    assert_eq!(result.data[0][2], 2.41);
}

#[test]
fn test_repeated_metadata_key_last_occurrence_wins() {
    let content = "~Well Information\n WELL.  FIRST : NAME\n WELL.  SECOND : NAME\n";
    let parser = LasParser::new();
    let result = parser.parse_str(content);

    assert_eq!(result.metadata["WELL"], "SECOND");
}

#[test]
fn test_duplicate_curves_are_preserved_in_order() {
    let content = "~Curve Information\n DEPT.FT : Depth\n GR.GAPI : Gamma\n GR.GAPI : Gamma again\n";
    let parser = LasParser::new();
    let result = parser.parse_str(content);

    assert_eq!(result.curves, vec!["DEPT.FT", "GR.GAPI", "GR.GAPI"]);
}

#[test]
fn test_unrecognized_header_leaves_active_section_in_place() {
    // A parameter section header is not recognized, so the well section
    // stays active and the parameter line is stored as metadata.
    let content =
        "~Well Information\n WELL.  TEST : NAME\n~Parameter Information\n MUD.  GEL CHEM : MUD TYPE\n";
    let parser = LasParser::new();
    let result = parser.parse_str(content);

    assert_eq!(result.metadata["WELL"], "TEST");
    assert_eq!(result.metadata["MUD"], "GEL CHEM");
}

#[test]
fn test_uppercase_section_headers_are_not_recognized() {
    let content = "~WELL INFORMATION\n STRT.F  100.0 : START\n";
    let parser = LasParser::new();
    let result = parser.parse_str(content);

    // Keyword matching is case-sensitive, so the line stays outside any section
    assert!(result.metadata.is_empty());
    assert_eq!(result.stats.lines_skipped, 2);
}

#[test]
fn test_header_lines_are_never_treated_as_data() {
    let content = "~Ascii\n~Ascii\n100.0 1.0\n";
    let parser = LasParser::new();
    let result = parser.parse_str(content);

    assert_eq!(result.data, vec![vec![100.0, 1.0]]);
}

#[test]
fn test_parsing_is_idempotent() {
    let parser = LasParser::new();
    let first = parser.parse_str(sample_las());
    let second = parser.parse_str(sample_las());

    assert_eq!(first.metadata, second.metadata);
    assert_eq!(first.curves, second.curves);
    assert_eq!(first.data, second.data);
    assert_eq!(first.stats, second.stats);
}

#[test]
fn test_warnings_are_off_by_default() {
    let content = "~Ascii\nabc 1 2\n";
    let parser = LasParser::new();
    let result = parser.parse_str(content);

    assert_eq!(result.stats.lines_skipped, 1);
    assert!(result.stats.warnings.is_empty());
}

#[test]
fn test_opt_in_warnings_record_line_and_section() {
    let content = "~Ascii\n100.0 1.0\nabc 1 2\n";
    let parser = LasParser::with_config(LasConfig::default().with_warnings());
    let result = parser.parse_str(content);

    // Diagnostics are additive: acceptance decisions are unchanged
    assert_eq!(result.data, vec![vec![100.0, 1.0]]);

    assert_eq!(result.stats.warnings.len(), 1);
    let warning = &result.stats.warnings[0];
    assert_eq!(warning.line, 3);
    assert_eq!(warning.section, Section::Data);
    assert!(warning.reason.contains("not numeric"));
}

#[test]
fn test_warning_collection_respects_cap() {
    let content = "~Ascii\nabc\ndef\nghi\n";
    let parser = LasParser::with_config(LasConfig::default().with_warnings().with_max_warnings(2));
    let result = parser.parse_str(content);

    assert_eq!(result.stats.lines_skipped, 3);
    assert_eq!(result.stats.warnings.len(), 2);
}

#[tokio::test]
async fn test_parse_file_roundtrip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(sample_las().as_bytes()).unwrap();

    let parser = LasParser::new();
    let result = parser.parse_file(file.path()).await.unwrap();

    assert_eq!(result.curves.len(), 3);
    assert_eq!(result.data.len(), 3);
}

#[tokio::test]
async fn test_parse_file_propagates_io_error() {
    let parser = LasParser::new();
    let error = parser
        .parse_file(std::path::Path::new("/nonexistent/well.las"))
        .await
        .unwrap_err();

    assert!(matches!(error, Error::Io { .. }));
}
