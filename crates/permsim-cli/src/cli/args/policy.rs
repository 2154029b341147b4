//! Policy command arguments.

use std::path::PathBuf;

use clap::{Args, Subcommand};

#[derive(Args, Clone, Debug)]
pub struct PolicyArgs {
    #[command(subcommand)]
    pub cmd: PolicyCommand,
}

#[derive(Subcommand, Clone, Debug)]
pub enum PolicyCommand {
    /// Load a policy and report what it grants and allows
    Validate(PolicyValidateArgs),
}

#[derive(Args, Clone, Debug)]
pub struct PolicyValidateArgs {
    /// Policy file path (YAML)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Subject that listed tool rights are granted to
    #[arg(long, default_value = permsim_policy::DEFAULT_SUBJECT)]
    pub default_subject: String,
}
