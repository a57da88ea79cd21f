use binarycookies::base::cookieerror::CookieError;
use binarycookies::cookies::binarycookie::unix_now;
use binarycookies::cookies::browser::{SafariCookieReader, DEFAULT_COOKIE_PATH};
use binarycookies::cookies::filter::CookieFilter;
use binarycookies::cookies::render::{render, OutputFormat};
use binarycookies::telemetry;
use clap::{Parser, ValueEnum};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
    JsonMore,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
            Format::JsonMore => OutputFormat::JsonExtended,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "binarycookies", version, about = "Dump cookies from Safari's Cookies.binarycookies")]
struct Args {
    /// The full path to Cookies.binarycookies
    #[arg(short = 'f', long, default_value = DEFAULT_COOKIE_PATH)]
    file_path: String,

    /// Include expired cookies in output
    #[arg(short = 'e', long)]
    expired: bool,

    /// Filter for URL anywhere in cookie domain name
    #[arg(short = 'u', long)]
    in_url: Option<String>,

    /// Filter for the exact URL
    #[arg(short = 'U', long)]
    url: Option<String>,

    /// Filter for the exact cookie name
    #[arg(short = 'n', long)]
    name: Option<String>,

    /// The output format for cookies
    #[arg(short = 'o', long, value_enum, default_value_t = Format::Text)]
    output_format: Format,

    /// Log decoding progress to stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

impl Args {
    fn filter(&self) -> CookieFilter {
        let mut filter = CookieFilter::new();
        if !self.expired {
            filter = filter.not_expired_at(unix_now());
        }
        if let Some(needle) = &self.in_url {
            filter = filter.domain_contains(needle.clone());
        }
        if let Some(url) = &self.url {
            filter = filter.domain(url.clone());
        }
        if let Some(name) = &self.name {
            filter = filter.name(name.clone());
        }
        filter
    }
}

fn run(args: &Args) -> Result<String, CookieError> {
    let cookies = SafariCookieReader::new()
        .with_path(args.file_path.clone())
        .with_filter(args.filter())
        .read_cookies()?;
    render(&cookies, args.output_format.into())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    telemetry::init_tracing(args.verbose);

    match run(&args) {
        Ok(output) => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
        Err(err) => {
            tracing::debug!(error = ?err, "decode failed");
            eprintln!("{}", err);
            std::process::exit(err.exit_code());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["binarycookies"]);
        assert_eq!(args.file_path, DEFAULT_COOKIE_PATH);
        assert_eq!(args.output_format, Format::Text);
        // Expired cookies are dropped unless asked for.
        assert_eq!(args.filter().predicates().len(), 1);
    }

    #[test]
    fn test_all_filters() {
        let args = Args::parse_from([
            "binarycookies",
            "-e",
            "-u",
            "apple",
            "-U",
            ".apple.com",
            "-n",
            "sid",
            "-o",
            "json-more",
        ]);
        assert_eq!(args.output_format, Format::JsonMore);
        assert_eq!(args.filter().predicates().len(), 3);
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Args::try_parse_from(["binarycookies", "-o", "xml"]).is_err());
    }
}
