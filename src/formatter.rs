/*!
 * Fenced block rendering
 *
 * A block is three backticks immediately followed by the display path in
 * brackets, a newline, the body with trailing whitespace removed, a
 * newline and three closing backticks.
 */

/// Render a whole file as a fenced block, or `""` when it has no content
pub fn format_file_block(display_path: &str, content: &str) -> String {
    fenced(display_path, content)
}

/// Render an explicit text selection as a fenced block, or `""` when the
/// selection is blank
pub fn format_selection_block(display_path: &str, selected_text: &str) -> String {
    fenced(display_path, selected_text)
}

/// Remove trailing spaces, tabs, newlines and carriage returns
pub fn trim_trailing_whitespace(text: &str) -> &str {
    text.trim_end_matches([' ', '\t', '\n', '\r'])
}

/// Drop backticks so a path cannot close the fence early
pub fn sanitize_path(display_path: &str) -> String {
    display_path.replace('`', "")
}

fn fenced(display_path: &str, body: &str) -> String {
    let body = trim_trailing_whitespace(body);
    if body.is_empty() {
        return String::new();
    }

    format!("```[{}]\n{}\n```", sanitize_path(display_path), body)
}
