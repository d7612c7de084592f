use serde::Serialize;

use confusables_core::skeleton;

use crate::cli::collect_inputs;

#[derive(Debug, Serialize)]
struct SkeletonOutput<'a> {
    input: &'a str,
    skeleton: String,
    changed: bool,
}

/// Print the skeleton of each input, one per line.
pub fn run(inputs: Vec<String>, json: bool) -> i32 {
    let inputs = match collect_inputs(inputs) {
        Ok(i) => i,
        Err(e) => {
            eprintln!("confusables: cannot read stdin: {e}");
            return 1;
        }
    };
    if inputs.is_empty() {
        eprintln!("confusables: no input (pass strings as arguments or pipe them on stdin)");
        return 2;
    }

    for input in &inputs {
        let result = skeleton(input);
        if json {
            let out = SkeletonOutput {
                input,
                changed: result != *input,
                skeleton: result,
            };
            match serde_json::to_string(&out) {
                Ok(s) => println!("{s}"),
                Err(e) => {
                    eprintln!("confusables: JSON serialization failed: {e}");
                    return 1;
                }
            }
        } else {
            println!("{result}");
        }
    }
    0
}
