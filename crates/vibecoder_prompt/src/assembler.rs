//! System prompt assembly.

use vibecoder_context::StaticContext;
use vibecoder_core::GenerationOptions;

const ROLE: &str = "You are an expert Google Apps Script developer with years of experience \
building automated workflows for Google Sheets, Docs, Gmail, Drive, Calendar and Forms. \
Your task is to write a well-commented, ready-to-use Apps Script that precisely fulfills \
the user's request.

Format your response as follows:
1. First, the complete script in a single fenced code block marked ```js
2. Then, a brief explanation of how the script works and the steps needed to deploy and run it";

const FORMATTING: &str = "Rules for the script:
- Deliver everything in ONE file. Never split the solution across multiple files.
- Write the full implementation. Never abbreviate with placeholders such as \"...\" or \"rest of code here\".
- Do not declare top-level entry points as async. Wrap asynchronous work in helper functions \
and call them from a synchronous outer function.
- Start the file with comments listing every OAuth scope the script requires, for example:
  // @OnlyCurrentDoc
  // Required OAuth scopes:
  // https://www.googleapis.com/auth/spreadsheets
- When the script needs a user interface, build the HTML inline with HtmlService.createHtmlOutput. \
Do not reference separate .html files.";

const HELPER_INTRO: &str = "A helper library for calling Gemini from Apps Script is appended \
to your script automatically. Do not reimplement it; call its functions as documented below \
whenever the script needs generative AI.";

const SAMPLES_INTRO: &str = "The following sample scripts show the conventions and APIs to prefer. \
Follow their style where relevant.";

/// Build the system instruction for a generation request.
///
/// Sections appear in a fixed order: role framing, formatting rules, the helper
/// library contract (when `include_helper`), then the sample corpus (when
/// `include_sample_code`). Empty context is interpolated as an empty section
/// body so an unloaded cache still yields a usable prompt. The output is a
/// pure function of its inputs.
///
/// # Examples
///
/// ```
/// use vibecoder_context::StaticContext;
/// use vibecoder_core::GenerationOptions;
/// use vibecoder_prompt::build_system_prompt;
///
/// let context = StaticContext::new("function callGemini() {}", "callGemini(prompt) -> string", "");
/// let prompt = build_system_prompt(&GenerationOptions::new(false, false), &context);
/// assert!(prompt.contains("Apps Script"));
/// assert!(!prompt.contains("callGemini(prompt)"));
/// ```
pub fn build_system_prompt(options: &GenerationOptions, context: &StaticContext) -> String {
    let mut sections = vec![ROLE.to_string(), FORMATTING.to_string()];

    if *options.include_helper() {
        sections.push(format!(
            "{}\n\n<helper_library_reference>\n{}\n</helper_library_reference>",
            HELPER_INTRO,
            context.helper_docs().trim()
        ));
    }

    if *options.include_sample_code() {
        sections.push(format!(
            "{}\n\n<sample_code>\n{}\n</sample_code>",
            SAMPLES_INTRO,
            context.sample_code().trim()
        ));
    }

    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> StaticContext {
        StaticContext::new(
            "function callGemini(prompt) { return ''; }",
            "HELPER-DOCS: callGemini(prompt) returns text",
            "SAMPLE-CORPUS: function onOpen() {}",
        )
    }

    #[test]
    fn helper_docs_only_when_requested() {
        let with = build_system_prompt(&GenerationOptions::new(true, false), &context());
        let without = build_system_prompt(&GenerationOptions::new(false, true), &context());
        assert!(with.contains("HELPER-DOCS"));
        assert!(!without.contains("HELPER-DOCS"));
    }

    #[test]
    fn samples_only_when_requested() {
        let with = build_system_prompt(&GenerationOptions::new(false, true), &context());
        let without = build_system_prompt(&GenerationOptions::new(true, false), &context());
        assert!(with.contains("SAMPLE-CORPUS"));
        assert!(!without.contains("SAMPLE-CORPUS"));
    }

    #[test]
    fn helper_precedes_samples() {
        let prompt = build_system_prompt(&GenerationOptions::default(), &context());
        let helper = prompt.find("HELPER-DOCS").unwrap();
        let samples = prompt.find("SAMPLE-CORPUS").unwrap();
        let rules = prompt.find("ONE file").unwrap();
        assert!(rules < helper);
        assert!(helper < samples);
    }

    #[test]
    fn deterministic() {
        let opts = GenerationOptions::default();
        assert_eq!(
            build_system_prompt(&opts, &context()),
            build_system_prompt(&opts, &context())
        );
    }

    #[test]
    fn unloaded_context_still_produces_rules() {
        let prompt = build_system_prompt(&GenerationOptions::default(), &StaticContext::empty());
        assert!(prompt.contains("OAuth scope"));
        assert!(prompt.contains("<sample_code>\n\n</sample_code>"));
    }
}
