// Shared prompt fragments and the template filler.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Emphasis rules appended to every generation prompt. The display layer only
/// understands these four markers, so the model is told to stick to them.
pub const EMPHASIS_INSTRUCTION: &str = "\
    FORMATTING RULES: Use **double asterisks** for bold and *single asterisks* for italic. \
    Do NOT use Markdown headings (#), tables, links, or code blocks. \
    Use plain line breaks between sections and a leading \"• \" for bullet points.";

/// Fills `{key}` placeholders in a single left-to-right pass.
///
/// Substituted values are never rescanned, so user text that happens to contain
/// `{company_name}` stays literal. Unknown placeholders are kept as-is.
pub fn render_template(template: &str, values: &[(&str, &str)]) -> String {
    let extra: usize = values.iter().map(|(_, v)| v.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replaced = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, close))
        });
        match replaced {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
