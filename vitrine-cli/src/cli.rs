use std::path::PathBuf;

use clap::Parser;

/// Fill in the portfolio contact form and submit it.
///
/// Without an endpoint the submission is simulated: it is logged and
/// accepted after the configured delay.
#[derive(Parser, Debug)]
#[command(name = "vitrine-cli", version, about)]
pub struct Cli {
    /// JSON configuration file. Missing keys keep their defaults.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// POST the form to this URL instead of simulating delivery.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Simulated delivery delay in milliseconds.
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Log file.
    #[arg(long, default_value = "vitrine.log")]
    pub log: PathBuf,

    /// Form values as `name=value` pairs, e.g. `email=jo@example.com`.
    #[arg(value_parser = parse_field)]
    pub fields: Vec<(String, String)>,
}

fn parse_field(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected name=value, got '{arg}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field() {
        assert_eq!(
            parse_field("message=a=b").unwrap(),
            ("message".to_string(), "a=b".to_string())
        );
        assert_eq!(parse_field("subject=").unwrap().1, "");
        assert!(parse_field("=value").is_err());
        assert!(parse_field("novalue").is_err());
    }

    #[test]
    fn test_parse_args() {
        let cli = Cli::try_parse_from([
            "vitrine-cli",
            "--endpoint",
            "https://example.com/contact",
            "name=Jo",
            "email=jo@x.com",
        ])
        .unwrap();
        assert_eq!(cli.endpoint.as_deref(), Some("https://example.com/contact"));
        assert_eq!(cli.fields.len(), 2);
        assert_eq!(cli.log, PathBuf::from("vitrine.log"));
    }
}
