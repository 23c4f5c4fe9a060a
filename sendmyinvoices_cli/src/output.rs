use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Raw,
    Pretty,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Self {
        match value {
            "pretty" | "json" => Self::Pretty,
            _ => Self::Raw,
        }
    }
}

/// Formats a response body. Pretty output re-indents JSON and leaves
/// anything else untouched.
pub fn render(body: &str, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Raw => body.to_string(),
        OutputFormat::Pretty => match serde_json::from_str::<Value>(body) {
            Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| body.to_string()),
            Err(_) => body.to_string(),
        },
    }
}

pub fn print_body(body: &str, format: &OutputFormat) {
    println!("{}", render(body, format));
}
