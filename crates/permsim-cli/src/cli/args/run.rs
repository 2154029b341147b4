use std::path::PathBuf;

use clap::{Args, ValueEnum};

#[derive(Args, Clone, Debug)]
pub struct RunArgs {
    /// Case file (JSON, or YAML with a .yaml/.yml extension)
    pub case: PathBuf,

    /// Policy file (YAML)
    #[arg(long, alias = "model", env = "PERMSIM_POLICY", default_value = "perm_model/model.yaml")]
    pub policy: PathBuf,

    /// Block unauthorized grants even if the case does not set autofix
    #[arg(long)]
    pub autofix: bool,

    /// Skip the injection hint pre-pass
    #[arg(long)]
    pub no_hints: bool,

    /// Subject assumed when an event omits one
    #[arg(long, env = "PERMSIM_DEFAULT_SUBJECT", default_value = permsim_policy::DEFAULT_SUBJECT)]
    pub default_subject: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
