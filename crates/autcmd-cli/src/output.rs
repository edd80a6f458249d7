//! Token printing formats

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One token per line
    Lines,
    /// A JSON array of strings
    Json,
    /// A single line, each token single-quoted for POSIX shells
    Shell,
}

/// Format tokens for stdout, newline-terminated
pub fn render(tokens: &[String], format: OutputFormat) -> Result<String, serde_json::Error> {
    let text = match format {
        OutputFormat::Lines => tokens.join("\n"),
        OutputFormat::Json => serde_json::to_string(tokens)?,
        OutputFormat::Shell => tokens
            .iter()
            .map(|t| shell_quote(t))
            .collect::<Vec<_>>()
            .join(" "),
    };
    Ok(format!("{}\n", text))
}

fn shell_quote(token: &str) -> String {
    format!("'{}'", token.replace('\'', r"'\''"))
}
