//! Tests for tiktok, facebook and resolve subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_tiktok() {
    let cli = parse(&["unduh", "tiktok", "https://www.tiktok.com/@u/video/1"]);
    match cli.command {
        CliCommand::Tiktok { url } => assert_eq!(url, "https://www.tiktok.com/@u/video/1"),
        _ => panic!("expected Tiktok"),
    }
    assert!(!cli.json);
    assert!(cli.config.is_none());
}

#[test]
fn cli_parse_facebook_json() {
    let cli = parse(&["unduh", "facebook", "https://fb.watch/abc/", "--json"]);
    match cli.command {
        CliCommand::Facebook { url } => assert_eq!(url, "https://fb.watch/abc/"),
        _ => panic!("expected Facebook"),
    }
    assert!(cli.json);
}

#[test]
fn cli_parse_resolve_with_config() {
    let cli = parse(&[
        "unduh",
        "--config",
        "/tmp/unduh.toml",
        "resolve",
        "https://www.facebook.com/watch/?v=1",
    ]);
    match cli.command {
        CliCommand::Resolve { url } => assert_eq!(url, "https://www.facebook.com/watch/?v=1"),
        _ => panic!("expected Resolve"),
    }
    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("/tmp/unduh.toml"))
    );
}

#[test]
fn cli_parse_tiktok_requires_url() {
    assert!(Cli::try_parse_from(["unduh", "tiktok"]).is_err());
}
