//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

/// Terminal client for the AI care plan service
#[derive(Parser, Debug, Default)]
#[command(name = "careplan", version, about)]
pub struct Args {
    /// Care plan service base URL (overrides CAREPLAN_API_URL and the config file)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Config file to read instead of ~/.config/careplan/config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Preload built-in sample patient N (starting at 1)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    pub sample: Option<u16>,

    /// Directory printable care plans are saved to
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Query the service health endpoint, print the result and exit
    #[arg(long)]
    pub check_health: bool,
}

impl Args {
    /// Zero-based sample index
    pub fn sample_index(&self) -> Option<usize> {
        self.sample.map(|n| n as usize - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let args = Args::try_parse_from(["careplan"]).unwrap();
        assert_eq!(args.api_url, None);
        assert_eq!(args.sample_index(), None);
        assert!(!args.check_health);
    }

    #[test]
    fn test_all_arguments() {
        let args = Args::try_parse_from([
            "careplan",
            "--api-url",
            "http://10.0.0.5:8000",
            "--config",
            "/tmp/careplan.toml",
            "--sample",
            "2",
            "--output-dir",
            "/tmp/plans",
            "--check-health",
        ])
        .unwrap();

        assert_eq!(args.api_url.as_deref(), Some("http://10.0.0.5:8000"));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/careplan.toml")));
        assert_eq!(args.sample_index(), Some(1));
        assert_eq!(args.output_dir, Some(PathBuf::from("/tmp/plans")));
        assert!(args.check_health);
    }

    #[test]
    fn test_sample_zero_rejected() {
        assert!(Args::try_parse_from(["careplan", "--sample", "0"]).is_err());
    }
}
