use anyhow::{Context, Result};
use chronoglot::{Moment, RelativeFormatter};
use clap::Parser;

/// Humanize a timestamp as a localized relative-time phrase.
#[derive(Parser)]
#[command(name = "chronoglot", version, about)]
struct Cli {
    /// RFC 3339 timestamp to humanize
    timestamp: String,

    /// Phrase the distance as "… ago" instead of "in …"
    #[arg(long)]
    ago: bool,

    /// Reference instant (RFC 3339); defaults to the current time
    #[arg(long)]
    anchor: Option<String>,

    /// Locale for the phrase (e.g. "en", "ru", "uk")
    #[arg(long, default_value = "en")]
    locale: String,

    /// IANA timezone attached to the moment for display metadata
    #[arg(long, default_value = "UTC")]
    zone: String,

    /// Emit a JSON report instead of the bare phrase
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let moment = Moment::parse_rfc3339(&cli.timestamp)
        .context("parsing timestamp")?
        .in_timezone(&cli.zone)
        .context("resolving timezone")?
        .with_locale(cli.locale.as_str().into());
    let reference = match &cli.anchor {
        Some(s) => Moment::parse_rfc3339(s).context("parsing anchor")?,
        None => Moment::now(),
    };

    let formatter = RelativeFormatter::new();
    let phrase = if cli.ago {
        formatter.from_now_at(&moment, &reference)
    } else {
        formatter.to_now_at(&moment, &reference)
    };

    if cli.json {
        let report = serde_json::json!({
            "phrase": phrase,
            "locale": cli.locale,
            "direction": if cli.ago { "past" } else { "future" },
            "delta_seconds": reference.seconds_until(&moment),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{phrase}");
    }

    Ok(())
}
