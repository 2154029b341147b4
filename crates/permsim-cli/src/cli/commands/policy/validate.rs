use anyhow::{Context, Result};
use permsim_policy::Policy;

use crate::cli::args::PolicyValidateArgs;
use crate::exit_codes;

pub fn run(args: PolicyValidateArgs) -> Result<i32> {
    let policy = Policy::from_file(&args.input, &args.default_subject)
        .with_context(|| format!("failed to load policy {}", args.input.display()))?;

    let mut allowed: Vec<_> = policy.allowed_grants().iter().collect();
    allowed.sort();
    let mut initial: Vec<_> = policy.initial_grants().iter().collect();
    initial.sort();

    println!("initial grants: {}", initial.len());
    for key in initial {
        println!("  {}", key);
    }
    println!("allowed grants: {}", allowed.len());
    for key in allowed {
        println!("  {}", key);
    }

    eprintln!("✔ Policy OK: {}", args.input.display());
    Ok(exit_codes::SUCCESS)
}
