//! Exports a small demo problem and prints its Penpa URL.
//!
//! Run with `RUST_LOG=warn` to see conflict warnings.

use sudovar_export::export_problem;
use sudovar_rules::{Problem, RuleData, RuleKind};

fn main() {
    env_logger::init();

    let mut problem = Problem::new(4, 2);
    if let RuleData::GivenNumbers(data) =
        problem.rule_data.get_mut(RuleKind::GivenNumbers)
    {
        data.numbers[0][0] = Some(1);
        data.numbers[3][3] = Some(4);
    }
    problem.enable(RuleKind::Diagonal);

    match export_problem(&problem) {
        Ok(export) => {
            if export.has_conflicts {
                eprintln!("warning: some overlapping items were dropped");
            }
            println!("{}", export.url);
        }
        Err(err) => eprintln!("export failed: {err}"),
    }
}
