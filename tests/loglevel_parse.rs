use clap::Parser;
use gallery_move::cli::Args;
use gallery_move::config::{LogLevel, parse_config_xml};

fn level_from_xml(value: &str) -> Option<LogLevel> {
    let xml = format!("<config><log_level>{value}</log_level></config>");
    parse_config_xml(&xml).unwrap().log_level
}

#[test]
fn xml_accepts_aliases_and_any_case() {
    assert_eq!(level_from_xml("QUIET"), Some(LogLevel::Quiet));
    assert_eq!(level_from_xml("error"), Some(LogLevel::Quiet));
    assert_eq!(level_from_xml("Normal"), Some(LogLevel::Normal));
    assert_eq!(level_from_xml("verbose"), Some(LogLevel::Info));
    assert_eq!(level_from_xml("trace"), Some(LogLevel::Debug));
}

#[test]
fn unknown_level_in_xml_is_rejected() {
    let err = parse_config_xml("<config><log_level>loud</log_level></config>").unwrap_err();
    assert!(format!("{err:#}").contains("loud"));
}

#[test]
fn flag_and_file_spellings_agree() {
    for name in ["quiet", "normal", "info", "debug"] {
        let args = Args::parse_from(["gallery_move", "--log-level", name]);
        assert_eq!(args.effective_log_level(), level_from_xml(name), "level {name}");
    }
}

#[test]
fn displayed_level_is_accepted_back() {
    for lvl in [LogLevel::Quiet, LogLevel::Normal, LogLevel::Info, LogLevel::Debug] {
        assert_eq!(LogLevel::parse(&lvl.to_string()), Some(lvl));
    }
}

#[test]
fn unknown_level_flag_is_rejected_by_parser() {
    let err = Args::try_parse_from(["gallery_move", "--log-level", "loud"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    assert!(err.to_string().contains("loud"));
}
