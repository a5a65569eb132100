//! JSON and CI-variable escape helpers

/// Escape a string into `buf` as JSON string content (no surrounding quotes)
pub fn escape_json_into(s: &str, buf: &mut String) {
    for ch in s.chars() {
        match ch {
            '"' => buf.push_str("\\\""),
            '\\' => buf.push_str("\\\\"),
            '\n' => buf.push_str("\\n"),
            '\r' => buf.push_str("\\r"),
            '\t' => buf.push_str("\\t"),
            c if c.is_control() => {
                buf.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => buf.push(c),
        }
    }
}

/// Format a list of values as a JSON array string
pub fn format_json_array(values: &[&str]) -> String {
    let mut buf = String::with_capacity(values.len() * 16 + 2);
    buf.push('[');
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            buf.push(',');
        }
        buf.push('"');
        escape_json_into(v, &mut buf);
        buf.push('"');
    }
    buf.push(']');
    buf
}

/// Escape a value for single-line CI output variables
///
/// Line breaks and `%` are percent-encoded so the value survives a
/// `KEY=value` env file line.
pub fn safe_output_escape(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
