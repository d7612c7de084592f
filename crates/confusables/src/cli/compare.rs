use serde::Serialize;

use confusables_core::skeleton;

#[derive(Debug, Serialize)]
struct CompareOutput<'a> {
    left: &'a str,
    right: &'a str,
    left_skeleton: String,
    right_skeleton: String,
    confusable: bool,
}

/// Compare two strings by skeleton. Exit code 0 when they are confusable,
/// 1 when they are not.
pub fn run(left: &str, right: &str, json: bool) -> i32 {
    let left_skeleton = skeleton(left);
    let right_skeleton = skeleton(right);
    let confusable = left_skeleton == right_skeleton;

    if json {
        let out = CompareOutput {
            left,
            right,
            left_skeleton,
            right_skeleton,
            confusable,
        };
        match serde_json::to_string_pretty(&out) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("confusables: JSON serialization failed: {e}");
                return 2;
            }
        }
    } else if confusable {
        println!("confusable: {left:?} and {right:?} share skeleton {left_skeleton:?}");
    } else {
        println!(
            "distinct: {left:?} -> {left_skeleton:?}, {right:?} -> {right_skeleton:?}"
        );
    }

    if confusable {
        0
    } else {
        1
    }
}
