//! Command-line interface implementation for errpages.
//! Provides argument parsing and resolution of what a run should generate.

use crate::constants::DEFAULT_CONFIG_FILE;
use crate::generator::AppSelection;
use clap::{error::ErrorKind, Parser};
use std::path::{Path, PathBuf};

/// Command-line arguments structure for errpages.
#[derive(Parser, Debug)]
#[command(author, version, about = "errpages: static error page generator", long_about = None)]
pub struct Args {
    /// Application id (read from conf.json) or path to a JSON configuration file
    #[arg(value_name = "APP_ID|CONFIG_FILE")]
    pub target: String,

    /// Generate only this application from the configuration file
    #[arg(short, long, value_name = "APP_ID")]
    pub app: Option<String>,

    /// Directory containing css/, img/ and templates/; output goes to its dist/
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// What a single invocation generates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub root: PathBuf,
    pub config_file: PathBuf,
    pub selection: AppSelection,
}

impl Args {
    /// Returns true if the positional argument names a configuration file
    /// rather than an application id.
    pub fn target_is_config_file(&self) -> bool {
        let target = Path::new(&self.target);
        self.app.is_some()
            || target.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
            || target.is_file()
    }

    /// Resolves the configuration file, the project root and the selected apps.
    pub fn invocation(&self) -> Invocation {
        let root = self.root.clone().unwrap_or_else(|| PathBuf::from("."));

        if self.target_is_config_file() {
            Invocation {
                config_file: PathBuf::from(&self.target),
                selection: match &self.app {
                    Some(app) => AppSelection::One(app.clone()),
                    None => AppSelection::All,
                },
                root,
            }
        } else {
            Invocation {
                config_file: root.join(DEFAULT_CONFIG_FILE),
                selection: AppSelection::One(self.target.clone()),
                root,
            }
        }
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 0 after printing help or version
/// * With status code 1 on any argument error
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                std::process::exit(1);
            }
        },
    }
}
