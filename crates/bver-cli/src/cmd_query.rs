// Copyright (c) Contributors to the bver project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `bver query` command.

use clap::Args;
use colored::Colorize;
use miette::Result;

/// Look softwares up by name, key or addon
#[derive(Debug, Args)]
#[clap(group(
    clap::ArgGroup::new("lookup")
        .required(true)
        .args(["software", "key", "addon", "addon_key"]),
))]
pub struct CmdQuery {
    #[clap(flatten)]
    load: crate::LoadFlags,

    /// Find a software by name
    #[clap(long)]
    software: Option<String>,

    /// Find a software by key (BVER_<NAME>_VERSION)
    #[clap(long)]
    key: Option<String>,

    /// Find the softwares owning an addon by name
    #[clap(long)]
    addon: Option<String>,

    /// Find the softwares owning an addon by key (BVER_<NAME>_<ADDON>_VERSION)
    #[clap(long = "addon-key")]
    addon_key: Option<String>,
}

impl CmdQuery {
    pub fn run(&self) -> Result<i32> {
        let query = self.load.load()?;

        let found = if let Some(name) = &self.software {
            vec![query.software_by_name(name)?]
        } else if let Some(key) = &self.key {
            vec![query.software_by_key(key)?]
        } else if let Some(name) = &self.addon {
            query.softwares_by_addon_name(name)?
        } else if let Some(key) = &self.addon_key {
            query.softwares_by_addon_key(key)?
        } else {
            Vec::new()
        };

        for software in found {
            println!("{} {}", software.name().cyan(), software.version().green());
        }

        Ok(0)
    }
}
