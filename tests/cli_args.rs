use std::path::PathBuf;

use clap::Parser;

use execplan::cli::CliArgs;
use execplan::config::loader::default_manifest_path;

#[test]
fn config_defaults_to_the_shared_manifest_path() {
    let args = CliArgs::parse_from(["execplan"]);
    assert_eq!(args.config, default_manifest_path());
}

#[test]
fn config_flag_overrides_the_default() {
    let args = CliArgs::parse_from(["execplan", "--config", "plans/other.toml"]);
    assert_eq!(args.config, PathBuf::from("plans/other.toml"));
}
