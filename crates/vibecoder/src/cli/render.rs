//! Terminal rendering of generated scripts.

use std::io::IsTerminal;
use vibecoder::{GenerationResult, Span, SpanKind, highlight, prepare_code_for_display};

fn paint(span: &Span, color: bool) -> String {
    let code = match span.kind {
        SpanKind::Keyword => "35",
        SpanKind::String => "32",
        SpanKind::Comment => "90",
        SpanKind::Number => "33",
        SpanKind::Plain => return span.text.clone(),
    };
    if color {
        format!("\x1b[{}m{}\x1b[0m", code, span.text)
    } else {
        span.text.clone()
    }
}

/// Print code with line numbers, highlighted on a terminal.
pub fn print_code(code: &str) {
    let color = std::io::stdout().is_terminal();
    let shown = prepare_code_for_display(code);
    let width = shown.total_lines().to_string().len();
    for (n, line) in shown.lines().iter().enumerate() {
        let painted: String = highlight(line).iter().map(|s| paint(s, color)).collect();
        println!("{:>width$} | {}", n + 1, painted, width = width);
    }
}

/// Print a finished turn. Streamed turns already showed the raw text.
pub fn print_result(result: &GenerationResult, streamed: bool) {
    if !result.is_success() {
        eprintln!("Error: {}", result.error().unwrap_or("Unknown error"));
        return;
    }
    let code = result.code().unwrap_or_default();
    if !streamed {
        print_code(code);
        if let Some(explanation) = result.explanation().filter(|e| !e.is_empty()) {
            println!("\n{}", explanation);
        }
    }
    println!(
        "\n{} lines in {:.1}s",
        prepare_code_for_display(code).total_lines(),
        result.response_time_ms() as f64 / 1000.0
    );
}
