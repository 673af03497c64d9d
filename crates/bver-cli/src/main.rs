// Copyright (c) Contributors to the bver project.
// SPDX-License-Identifier: Apache-2.0

//! bver - Declarative Software Version Resolution CLI

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::Result;

mod cmd_env;
mod cmd_query;
mod cmd_show;

use cmd_env::CmdEnv;
use cmd_query::CmdQuery;
use cmd_show::CmdShow;

#[derive(Parser)]
#[clap(
    name = "bver",
    about = "Declarative software version resolution",
    version,
    long_about = "Resolve active software and addon versions from JSON version documents"
)]
struct Opt {
    #[clap(flatten)]
    logging: Logging,

    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Parser)]
struct Logging {
    /// Increase verbosity (-v, -vv, -vvv)
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[clap(short, long, global = true)]
    quiet: bool,
}

/// Where to load version documents from, and which versions to pin.
#[derive(Parser, Clone, Debug, Default)]
pub struct LoadFlags {
    /// Version documents or directories containing them
    #[clap(env = "BVER_PATHS", value_delimiter = ':', required = true)]
    pub paths: Vec<PathBuf>,

    /// Ignore BVER_<NAME>_VERSION variables from the environment
    #[clap(long = "no-env-overrides")]
    pub no_env_overrides: bool,

    /// Pin a software version (NAME=VERSION)
    #[clap(long = "pin", value_parser = parse_pin)]
    pub pins: Vec<(String, String)>,
}

impl LoadFlags {
    /// Load the documents and index the resolved softwares.
    pub fn load(&self) -> Result<bver::Query> {
        let mut overrides = if self.no_env_overrides {
            bver::ActiveVersions::new()
        } else {
            bver::ActiveVersions::from_env()
        };
        for (name, version) in &self.pins {
            overrides.pin(name, version.clone());
        }

        let mut loader = bver::Loader::new();
        let mut registry = bver::Registry::new();
        loader.load_paths(&self.paths, &mut registry, Some(&overrides))?;

        tracing::info!(softwares = registry.len(), "resolved version documents");
        Ok(registry.into_query())
    }
}

fn parse_pin(value: &str) -> std::result::Result<(String, String), String> {
    match value.split_once('=') {
        Some((name, version)) if !name.is_empty() && !version.is_empty() => {
            Ok((name.to_string(), version.to_string()))
        }
        _ => Err(format!("expected NAME=VERSION, got '{value}'")),
    }
}

#[derive(Subcommand)]
enum Command {
    /// Display resolved softwares and addons
    Show(CmdShow),

    /// Look softwares up by name, key or addon
    Query(CmdQuery),

    /// Print a shell script exporting the resolved versions
    Env(CmdEnv),
}

impl Opt {
    fn run(self) -> Result<i32> {
        // Setup logging
        let log_level = match (self.logging.quiet, self.logging.verbose) {
            (true, _) => tracing::Level::ERROR,
            (false, 0) => tracing::Level::WARN,
            (false, 1) => tracing::Level::INFO,
            (false, 2) => tracing::Level::DEBUG,
            (false, _) => tracing::Level::TRACE,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .init();

        // Dispatch to command
        match self.cmd {
            Command::Show(cmd) => cmd.run(),
            Command::Query(cmd) => cmd.run(),
            Command::Env(cmd) => cmd.run(),
        }
    }
}

fn main() -> Result<()> {
    let opt = Opt::parse();
    let code = opt.run()?;
    std::process::exit(code);
}
