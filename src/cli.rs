use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub(crate) struct Cli {
    /// The message file to generate exception types from
    #[clap(short, long)]
    pub input: PathBuf,
    /// The output path to store the generated header
    #[clap(short, long)]
    pub output: PathBuf,
    /// Generate for a project that defines _UNICODE
    #[clap(short, long, alias = "unicode")]
    pub wide: bool,
    /// Extra include directive to add to the header, can be repeated
    #[clap(short = 'I', long = "include")]
    pub includes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repeated_includes_and_wide_alias() {
        let cli = Cli::parse_from([
            "exception-generator",
            "-i",
            "messages.mc",
            "-o",
            "out/messages.h",
            "--unicode",
            "-I",
            "<windows.h>",
            "--include",
            "extra.h",
        ]);

        assert_eq!(cli.input, PathBuf::from("messages.mc"));
        assert_eq!(cli.output, PathBuf::from("out/messages.h"));
        assert!(cli.wide);
        assert_eq!(cli.includes, vec!["<windows.h>", "extra.h"]);
    }

    #[test]
    fn narrow_by_default() {
        let cli = Cli::parse_from(["exception-generator", "-i", "a.mc", "-o", "a.h"]);
        assert!(!cli.wide);
        assert!(cli.includes.is_empty());
    }
}
