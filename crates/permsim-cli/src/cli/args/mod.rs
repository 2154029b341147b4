use clap::{Args, Parser, Subcommand};

pub mod policy;
pub mod run;
pub use policy::*;
pub use run::*;

#[derive(Parser)]
#[command(
    name = "permsim",
    version,
    about = "Replay agent permission events against an access policy and report unauthorized grants"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Replay a case file against a policy
    Run(RunArgs),
    /// Policy file utilities
    Policy(PolicyArgs),
    /// Check whether a piece of text looks like a prompt injection
    Hint(HintArgs),
    Version,
}

#[derive(Args, Clone, Debug)]
pub struct HintArgs {
    /// Text to classify
    pub text: String,

    /// Additional marker phrase (repeatable)
    #[arg(long = "phrase")]
    pub phrases: Vec<String>,
}
