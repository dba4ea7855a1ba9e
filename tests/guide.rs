use std::fs::{self};

use numora::evaluate;
use walkdir::WalkDir;

struct Example {
    code:     String,
    expected: Option<String>,
}

#[test]
fn guide_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("guide").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, example) in extract_examples(&content).into_iter().enumerate() {
            count += 1;
            let rendered = match evaluate(&example.code) {
                Ok(value) => value.map(|v| v.to_string()).unwrap_or_default(),
                Err(e) => panic!("Example {} in {:?} failed:\n{}\nError: {}",
                                 i + 1,
                                 path,
                                 example.code,
                                 e),
            };
            if let Some(expected) = example.expected {
                assert_eq!(rendered.trim(),
                           expected.trim(),
                           "Example {} in {:?} printed the wrong result:\n{}",
                           i + 1,
                           path,
                           example.code);
            }
        }
    }

    assert!(count > 0, "No examples found in guide");
}

/// Collects every `numora` block, paired with the `output` block that
/// directly follows it, if any.
fn extract_examples(content: &str) -> Vec<Example> {
    let mut examples: Vec<Example> = Vec::new();
    let mut inside: Option<bool> = None;
    let mut awaiting_output = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        let Some(is_code) = inside else {
            match trimmed.strip_prefix("```").map(str::trim) {
                Some("numora") => inside = Some(true),
                Some("output") => inside = Some(false),
                _ if trimmed.is_empty() => {},
                // Prose between a block and its output unpairs them.
                _ => awaiting_output = false,
            }
            buf.clear();
            continue;
        };
        if trimmed.starts_with("```") {
            inside = None;
            if is_code {
                examples.push(Example { code:     buf.clone(),
                                        expected: None, });
                awaiting_output = true;
            } else if awaiting_output && let Some(last) = examples.last_mut() {
                last.expected = Some(buf.clone());
                awaiting_output = false;
            }
            continue;
        }
        buf.push_str(line);
        buf.push('\n');
    }

    examples
}
