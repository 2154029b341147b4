use permsim_core::InjectionClassifier;

use crate::cli::args::HintArgs;
use crate::exit_codes;

pub fn run(args: HintArgs) -> i32 {
    let classifier = args
        .phrases
        .iter()
        .fold(InjectionClassifier::default(), |c, p| c.with_phrase(p));

    match classifier.first_match(Some(args.text.as_str())) {
        Some(marker) => {
            println!("injection hint: matched '{}'", marker);
            exit_codes::SUCCESS
        }
        None => {
            println!("no injection hint");
            exit_codes::NO_HINT
        }
    }
}
