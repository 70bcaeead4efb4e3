//! `machine-name` CLI

use std::{io::Write, path::PathBuf};

use anyhow::Context;
use argh::{EarlyExit, FromArgs};
use tracing::debug;
use wordlists::{Locale, WordListSource, WORDLIST_VERSION};

use crate::{or_env::OrEnvExt as _, serial};

/// argh doesn't support aliases for long options, so these get rewritten
/// before parsing.
const OPTION_ALIASES: [(&str, &str); 2] =
    [("--language", "--lang"), ("--serial-number", "--sn")];

/// Generates localized Heroku-style names from 32-bit serial numbers
#[derive(Debug, PartialEq, Eq, FromArgs)]
#[argh(note = "Use `{command_name} --version` to print the version.")]
pub struct Args {
    /// locale for names. Alias: `--language`.
    ///
    /// Default: "en_US.UTF-8".
    /// Env: `LANG`.
    #[argh(option)]
    pub lang: Option<Locale>,

    /// optional: a directory of word lists laid out as
    /// `<locale>/first.txt` and `<locale>/second.txt`. Uses the built-in
    /// word lists if unset.
    ///
    /// Env: `MACHINE_NAME_WORDLISTS_DIR`.
    #[argh(option)]
    pub wordlists_dir: Option<PathBuf>,

    #[argh(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, PartialEq, Eq, FromArgs)]
#[argh(subcommand)]
pub enum Command {
    Name(NameArgs),
    Locales(LocalesArgs),
}

/// Generates a name from a serial number
#[derive(Debug, PartialEq, Eq, FromArgs)]
#[argh(subcommand, name = "name")]
pub struct NameArgs {
    /// 32-bit serial number for generating the machine name.
    /// Alias: `--serial-number`.
    #[argh(option)]
    pub sn: String,

    /// format of the serial number. Only "hex" is supported.
    ///
    /// Default: "hex".
    #[argh(option, short = 'f', default = "String::from(\"hex\")")]
    pub format: String,
}

/// Lists the locales which have word lists
#[derive(Debug, PartialEq, Eq, FromArgs)]
#[argh(subcommand, name = "locales")]
pub struct LocalesArgs {}

impl Args {
    /// Parse the process args, exiting on `--help`, `--version`, or a usage
    /// error like [`argh::from_env`] does.
    pub fn from_cli() -> Self {
        let argv = std::env::args().collect::<Vec<_>>();
        let cmd = argv
            .first()
            .and_then(|arg0| arg0.rsplit(['/', '\\']).next())
            .unwrap_or("machine-name");
        let args = argv.iter().skip(1).map(String::as_str).collect::<Vec<_>>();

        match Self::parse(cmd, &args) {
            Ok(args) => args,
            Err(EarlyExit { output, status }) => match status {
                Ok(()) => {
                    println!("{output}");
                    std::process::exit(0)
                }
                Err(()) => {
                    eprintln!(
                        "{output}\nRun {cmd} --help for more information."
                    );
                    std::process::exit(1)
                }
            },
        }
    }

    /// Parse `args` (excluding the program name), accepting the long option
    /// aliases in [`OPTION_ALIASES`]. Like `--help`, a `--version` anywhere
    /// before a `--` separator exits early.
    pub fn parse(cmd: &str, args: &[&str]) -> Result<Self, EarlyExit> {
        let wants_version = args
            .iter()
            .take_while(|&&arg| arg != "--")
            .any(|&arg| arg == "--version");
        if wants_version {
            return Err(EarlyExit {
                output: version_string(cmd),
                status: Ok(()),
            });
        }

        let args = normalize_aliases(args);
        Self::from_args(&[cmd], &args)
    }

    /// Fill unset args from env vars. This is the only place the process
    /// environment is read.
    pub fn or_env_mut(&mut self) -> anyhow::Result<()> {
        self.lang.or_env_mut("LANG")?;
        self.wordlists_dir.or_env_mut("MACHINE_NAME_WORDLISTS_DIR")?;
        Ok(())
    }

    /// Run the command, writing its output to `out`.
    pub fn run(self, out: &mut impl Write) -> anyhow::Result<()> {
        let locale = self.lang.unwrap_or_default();
        let source = match self.wordlists_dir {
            Some(dir) => WordListSource::Directory(dir),
            None => WordListSource::Embedded,
        };
        debug!(%locale, ?source, "Resolved config");

        match self.cmd {
            Command::Name(args) => args.run(&source, &locale, out),
            Command::Locales(args) => args.run(&source, out),
        }
    }
}

impl NameArgs {
    fn run(
        self,
        source: &WordListSource,
        locale: &Locale,
        out: &mut impl Write,
    ) -> anyhow::Result<()> {
        let Self { sn: raw, format } = self;

        let sn = serial::parse_serial_number(&raw, &format).with_context(|| {
            format!("Couldn't parse '{format}'-formatted serial number '{raw}'")
        })?;
        let word_lists = source.load(locale).with_context(|| {
            format!("Couldn't load word lists for locale '{locale}'")
        })?;
        let name = word_lists.compose(sn).with_context(|| {
            format!("Couldn't compose name for locale '{locale}'")
        })?;

        writeln!(out, "{name}").context("Couldn't write name")?;
        Ok(())
    }
}

impl LocalesArgs {
    fn run(
        self,
        source: &WordListSource,
        out: &mut impl Write,
    ) -> anyhow::Result<()> {
        let locales =
            source.list_locales().context("Couldn't list locales")?;
        for locale in &locales {
            writeln!(out, "{locale}").context("Couldn't write locale")?;
        }
        // The version only describes the built-in lists.
        if let WordListSource::Embedded = source {
            writeln!(out, "# word list version: {WORDLIST_VERSION}")
                .context("Couldn't write word list version")?;
        }
        Ok(())
    }
}

fn version_string(cmd: &str) -> String {
    format!("{cmd} {}", env!("CARGO_PKG_VERSION"))
}

/// Rewrite aliased long options to their canonical names. Everything after a
/// `--` separator is left alone.
fn normalize_aliases<'a>(args: &[&'a str]) -> Vec<&'a str> {
    let mut seen_separator = false;
    args.iter()
        .map(|&arg| {
            if seen_separator {
                return arg;
            }
            if arg == "--" {
                seen_separator = true;
                return arg;
            }
            OPTION_ALIASES
                .iter()
                .find(|(alias, _)| *alias == arg)
                .map_or(arg, |&(_, canonical)| canonical)
        })
        .collect()
}
