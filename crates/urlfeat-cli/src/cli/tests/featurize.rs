//! Tests for the featurize subcommand.

use super::parse;
use crate::cli::{Cli, CliCommand, FormatArg, ShapeArg};
use chrono::{TimeZone, Utc};
use clap::Parser;

#[test]
fn cli_parse_featurize_defaults() {
    match parse(&["urlfeat", "featurize", "https://example.com/a?x=1&y=2"]) {
        CliCommand::Featurize {
            url,
            shape,
            format,
            no_fetch,
            no_whois,
            as_of,
        } => {
            assert_eq!(url, "https://example.com/a?x=1&y=2");
            assert_eq!(shape, ShapeArg::Map);
            assert_eq!(format, FormatArg::Json);
            assert!(!no_fetch);
            assert!(!no_whois);
            assert!(as_of.is_none());
        }
        _ => panic!("expected Featurize"),
    }
}

#[test]
fn cli_parse_featurize_all_flags() {
    match parse(&[
        "urlfeat",
        "featurize",
        "http://x.test",
        "--shape",
        "reduced",
        "--format",
        "csv",
        "--no-fetch",
        "--no-whois",
        "--as-of",
        "2024-02-03T04:05:06Z",
    ]) {
        CliCommand::Featurize {
            shape,
            format,
            no_fetch,
            no_whois,
            as_of,
            ..
        } => {
            assert_eq!(shape, ShapeArg::Reduced);
            assert_eq!(format, FormatArg::Csv);
            assert!(no_fetch);
            assert!(no_whois);
            assert_eq!(as_of, Some(Utc.with_ymd_and_hms(2024, 2, 3, 4, 5, 6).unwrap()));
        }
        _ => panic!("expected Featurize with flags"),
    }
}

#[test]
fn cli_parse_featurize_as_of_with_offset() {
    match parse(&[
        "urlfeat",
        "featurize",
        "http://x.test",
        "--as-of",
        "2024-02-03T06:05:06+02:00",
    ]) {
        CliCommand::Featurize { as_of, .. } => {
            assert_eq!(as_of, Some(Utc.with_ymd_and_hms(2024, 2, 3, 4, 5, 6).unwrap()));
        }
        _ => panic!("expected Featurize"),
    }
}

#[test]
fn cli_rejects_bad_as_of() {
    assert!(Cli::try_parse_from(["urlfeat", "featurize", "http://x", "--as-of", "yesterday"]).is_err());
}

#[test]
fn cli_rejects_unknown_shape() {
    assert!(Cli::try_parse_from(["urlfeat", "featurize", "http://x", "--shape", "tiny"]).is_err());
}

#[test]
fn cli_featurize_requires_url() {
    assert!(Cli::try_parse_from(["urlfeat", "featurize"]).is_err());
}
