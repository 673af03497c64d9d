// Copyright (c) Contributors to the bver project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `bver env` command.

use clap::Args;
use miette::Result;

/// Print a shell script exporting the resolved versions
#[derive(Debug, Args)]
pub struct CmdEnv {
    #[clap(flatten)]
    load: crate::LoadFlags,
}

impl CmdEnv {
    pub fn run(&self) -> Result<i32> {
        let query = self.load.load()?;
        let vars = bver::environment_variables(&query);
        print!("{}", bver::generate_startup_script(&vars));
        Ok(0)
    }
}
