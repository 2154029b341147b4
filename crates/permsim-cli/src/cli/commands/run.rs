use anyhow::{Context, Result};
use permsim_core::{Case, Engine, InjectionClassifier, Mode, Policy, RunReport};

use super::reporting;
use crate::cli::args::{OutputFormat, RunArgs};
use crate::exit_codes;

pub(crate) fn run(args: RunArgs) -> Result<i32> {
    let policy = Policy::from_file(&args.policy, &args.default_subject)
        .with_context(|| format!("failed to load policy {}", args.policy.display()))?;
    let mut case = Case::from_file(&args.case, &args.default_subject)
        .with_context(|| format!("failed to load case {}", args.case.display()))?;

    if !args.no_hints {
        InjectionClassifier::default().annotate(&mut case.events);
    }

    let mode = Mode::from_autofix(case.autofix || args.autofix);
    tracing::info!(
        "replaying {} event(s) from {} in {} mode",
        case.events.len(),
        args.case.display(),
        mode.as_str()
    );

    let mut engine = Engine::new(policy, mode);
    let outcome = engine.run(&case.events);
    let report = RunReport::new(mode, &case.events, outcome);

    match args.format {
        OutputFormat::Text => print!("{}", reporting::render_text(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(if report.has_violations() {
        exit_codes::VIOLATIONS_FOUND
    } else {
        exit_codes::SUCCESS
    })
}
