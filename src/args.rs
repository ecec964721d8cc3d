use std::path::PathBuf;
use clap::{Arg, ArgAction, ArgMatches, Command};
use crate::config::{SitemapConfig, DEFAULT_BASE_URL, DEFAULT_OUTPUT};
use crate::error::Result;

#[derive(Debug)]
pub struct Args {
    pub config: SitemapConfig,
    pub verbose: bool,
}

fn command() -> Command {
    Command::new("jejusitemap")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Write sitemap.xml for every public HTML page under a directory.")
        .arg(
            Arg::new("root")
                .short('r')
                .long("root")
                .value_parser(clap::value_parser!(PathBuf))
                .value_name("DIR")
                .help("Directory to scan (defaults to current directory if not provided)"),
        )
        .arg(
            Arg::new("base-url")
                .short('b')
                .long("base-url")
                .value_parser(clap::value_parser!(String))
                .value_name("URL")
                .default_value(DEFAULT_BASE_URL)
                .help("Scheme and host prepended to every page path"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(clap::value_parser!(PathBuf))
                .value_name("FILE")
                .default_value(DEFAULT_OUTPUT)
                .help("Sitemap file to overwrite, relative to the scan root"),
        )
        .arg(
            Arg::new("exclude")
                .short('x')
                .long("exclude")
                .value_parser(clap::value_parser!(String))
                .value_name("PATTERN")
                .action(ArgAction::Append)
                .help("Extra substring that drops any path containing it (repeatable)"),
        )
        .arg(
            Arg::new("lastmod")
                .long("lastmod")
                .action(ArgAction::SetTrue)
                .help("Add <lastmod> dates taken from file modification times"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Enables verbose output"),
        )
}

/// parse command line arguments
pub fn parse_args() -> Result<Args> {
    args_from_matches(&command().get_matches())
}

fn args_from_matches(matches: &ArgMatches) -> Result<Args> {
    let root = matches
        .get_one::<PathBuf>("root")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("."));

    let base_url = matches
        .get_one::<String>("base-url")
        .map(String::as_str)
        .unwrap_or(DEFAULT_BASE_URL);

    let output = matches
        .get_one::<PathBuf>("output")
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let excludes: Vec<String> = matches
        .get_many::<String>("exclude")
        .map(|vals| vals.cloned().collect())
        .unwrap_or_default();

    let config = SitemapConfig::new(root)
        .with_base_url(base_url)?
        .with_output(output)
        .with_extra_excludes(excludes)
        .with_lastmod(matches.get_flag("lastmod"));

    Ok(Args {
        config,
        verbose: matches.get_flag("verbose"),
    })
}
