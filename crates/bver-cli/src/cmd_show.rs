// Copyright (c) Contributors to the bver project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `bver show` command.

use clap::Args;
use colored::Colorize;
use miette::{IntoDiagnostic, Result};

/// Display resolved softwares and addons
#[derive(Debug, Args)]
pub struct CmdShow {
    #[clap(flatten)]
    load: crate::LoadFlags,

    /// Include options in table output
    #[clap(long)]
    options: bool,

    /// Output format: table, yaml, json
    #[clap(long, default_value = "table")]
    format: String,
}

impl CmdShow {
    pub fn run(&self) -> Result<i32> {
        let query = self.load.load()?;

        match self.format.as_str() {
            "json" => {
                let json = serde_json::to_string_pretty(query.softwares()).into_diagnostic()?;
                println!("{json}");
            }
            "yaml" => {
                let yaml = serde_yaml::to_string(query.softwares()).into_diagnostic()?;
                print!("{yaml}");
            }
            _ => self.show_table(&query),
        }

        Ok(0)
    }

    fn show_table(&self, query: &bver::Query) {
        println!("{}", "Resolved Softwares:".bold());
        println!();

        if query.softwares().is_empty() {
            println!("  {}", "(no softwares)".dimmed());
        }

        for (i, software) in query.softwares().iter().enumerate() {
            println!(
                "  {}. {} {} {}",
                i + 1,
                software.name().cyan(),
                software.version().green(),
                format!("[{}]", software.bver_key()).dimmed()
            );

            if self.options {
                for (name, value) in software.options() {
                    println!("       {} = {}", name.yellow(), value);
                }
            }

            for addon in software.addons() {
                let state = if addon.is_enabled() {
                    "enabled".green()
                } else {
                    "disabled".red()
                };
                println!(
                    "     + {} {} ({}) {}",
                    addon.name().blue(),
                    addon.version().green(),
                    state,
                    format!("[{}]", software.addon_bver_key(addon)).dimmed()
                );
            }
        }

        println!();
        println!("Total: {} software(s)", query.softwares().len());
    }
}
