use super::args::*;

pub mod hint;
pub mod policy;
pub(crate) mod reporting;
pub(crate) mod run;

use crate::exit_codes::SUCCESS;

pub fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Run(args) => run::run(args),
        Command::Policy(args) => policy::run(args),
        Command::Hint(args) => Ok(hint::run(args)),
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(SUCCESS)
        }
    }
}
