use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command};

use keysymmap::DEFAULT_KEYSYMDEF_PATH;

pub(super) struct Configuration {
    pub(super) keysymdef: PathBuf,
    pub(super) output: Option<PathBuf>,
    pub(super) verbose: bool,
}

fn command() -> Command {
    Command::new("keysymmap")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parses keysymdef.h to construct a unicode symbol -> keysym mapping table.")
        .arg(Arg::new("verbose")
            .short('v')
            .long("verbose")
            .action(ArgAction::SetTrue)
            .help("Prints verbose information to stderr"))
        .arg(Arg::new("output")
            .short('o')
            .long("output")
            .value_name("FILE")
            .value_parser(clap::value_parser!(PathBuf))
            .help("Writes the table to the given file instead of stdout"))
        .arg(Arg::new("keysymdef")
            .help("Path to the keysym definition header")
            .index(1)
            .value_parser(clap::value_parser!(PathBuf))
            .default_value(DEFAULT_KEYSYMDEF_PATH))
}

pub(super) fn parse_cli() -> Configuration {
    from_matches(&command().get_matches())
}

fn from_matches(matches: &ArgMatches) -> Configuration {
    let keysymdef = matches.get_one::<PathBuf>("keysymdef")
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_KEYSYMDEF_PATH));

    Configuration {
        keysymdef,
        output: matches.get_one::<PathBuf>("output").cloned(),
        verbose: matches.get_flag("verbose"),
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use super::*;

    fn parse_cli_from(args: &[&str]) -> Result<Configuration> {
        let matches = command().try_get_matches_from(args)?;
        Ok(from_matches(&matches))
    }

    #[test]
    fn test_defaults() {
        let config = parse_cli_from(&["keysymmap"]).unwrap();
        assert_eq!(config.keysymdef, PathBuf::from("/usr/include/X11/keysymdef.h"));
        assert_eq!(config.output, None);
        assert!(!config.verbose);
    }

    #[test]
    fn test_all_args() {
        let config = parse_cli_from(&["keysymmap", "-v", "--output", "keysymmap.h", "/tmp/keysymdef.h"]).unwrap();
        assert_eq!(config.keysymdef, PathBuf::from("/tmp/keysymdef.h"));
        assert_eq!(config.output, Some(PathBuf::from("keysymmap.h")));
        assert!(config.verbose);
    }

    #[test]
    fn test_rejects_extra_positional() {
        assert!(parse_cli_from(&["keysymmap", "a.h", "b.h"]).is_err());
    }
}
