use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::InstructionStep;

// The section ends at a "<page> of <pages>" footer artifact when present.
static INSTRUCTIONS_SECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)Cook & enjoy\n(.*?)(?:\n\d+\sof\s\d+|$)").unwrap());
static STEP_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\s*$").unwrap());

/// Extract numbered cooking instructions from the "Cook & enjoy" section.
///
/// A line consisting of a bare number starts a new step; subsequent
/// lines accumulate into that step's text until the next number. Lines
/// before the first step number are discarded, and a step that gathers
/// no text is dropped. Steps keep their detection order.
pub fn parse_instructions(text: &str) -> Vec<InstructionStep> {
    let Some(captures) = INSTRUCTIONS_SECTION.captures(text) else {
        return Vec::new();
    };

    let mut instructions = Vec::new();
    let mut current_step: Option<u32> = None;
    let mut current_text: Vec<&str> = Vec::new();

    let mut flush = |step: Option<u32>, lines: &mut Vec<&str>| {
        if let Some(step) = step {
            if !lines.is_empty() {
                instructions.push(InstructionStep {
                    step,
                    text: lines.join(" ").trim().to_string(),
                });
            }
        }
        lines.clear();
    };

    for line in captures[1].split('\n') {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(step_captures) = STEP_NUMBER.captures(line) {
            flush(current_step, &mut current_text);
            current_step = step_captures[1].parse().ok();
        } else if current_step.is_some() {
            current_text.push(line);
        }
    }
    flush(current_step, &mut current_text);

    instructions
}
