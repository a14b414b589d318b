//! Preparing code for line-numbered display.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Code split into display lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct DisplayedCode {
    /// Lines without trailing newlines
    lines: Vec<String>,
    /// Number of lines
    total_lines: usize,
}

/// Trim code and split it into lines, dropping trailing blank lines.
///
/// # Examples
///
/// ```
/// use vibecoder_prompt::prepare_code_for_display;
///
/// let shown = prepare_code_for_display("function a() {\n  return 1;\n}\n\n   \n");
/// assert_eq!(*shown.total_lines(), 3);
/// assert_eq!(shown.lines()[1], "  return 1;");
/// ```
pub fn prepare_code_for_display(code: &str) -> DisplayedCode {
    let mut lines: Vec<String> = code
        .trim_start_matches(['\n', '\r'])
        .lines()
        .map(str::to_string)
        .collect();
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
    let total_lines = lines.len();
    DisplayedCode { lines, total_lines }
}
