//! Refinement prompts.

/// Build the prompt for a refinement turn.
///
/// # Examples
///
/// ```
/// use vibecoder_prompt::build_refine_prompt;
///
/// let prompt = build_refine_prompt("Email my team", "Add a CC to my manager");
/// assert!(prompt.starts_with("Original request: Email my team"));
/// assert!(prompt.contains("Refinement needed: Add a CC to my manager"));
/// ```
pub fn build_refine_prompt(original: &str, refinement: &str) -> String {
    format!(
        "Original request: {}\n\nRefinement needed: {}\n\nPlease generate an improved script that addresses the refinement.",
        original.trim(),
        refinement.trim()
    )
}
