pub mod cache;
pub mod config;
pub mod error;
pub mod feed_provider;
pub mod log;
pub mod providers;
pub mod rates;
pub mod ui;

use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};

use crate::cache::FeedCache;
use crate::config::AppConfig;
use crate::error::{Error, InputError};
use crate::feed_provider::FeedProvider;
use crate::providers::ecb::EcbFeedProvider;
use crate::ui::OutputMode;

/// What a single invocation should do once the day's rates are available.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Print the sorted list of currency codes in the day's feed.
    List,
    /// Convert an amount between two currencies. Arguments arrive raw and
    /// are validated only after the rate table is built.
    Convert {
        amount: Option<String>,
        from: Option<String>,
        to: Option<String>,
    },
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<(), Error> {
    info!("Currency converter starting...");

    let config = AppConfig::load_or_default(config_path)?;
    debug!("Loaded config: {config:#?}");

    // "Today" is computed exactly once per run and threaded through; the
    // cache key and the printed date always agree.
    let today = Local::now().date_naive();
    let provider = EcbFeedProvider::new(config.feed_base_url());

    run_for_date(command, &config, &provider, today, OutputMode::from_env()).await
}

/// Runs the whole pipeline for a fixed date.
pub async fn run_for_date(
    command: AppCommand,
    config: &AppConfig,
    provider: &dyn FeedProvider,
    today: NaiveDate,
    mode: OutputMode,
) -> Result<(), Error> {
    let cache = FeedCache::new(config.cache_dir());
    cache.prune_stale(today);

    let text = match cache.load(today) {
        Some(cached) => cached,
        None => provider.fetch_daily().await?,
    };

    let doc = rates::parse_feed(&text)?;
    let table = rates::extract(doc)?;

    // Persist only after the document passed extraction.
    if let Err(e) = cache.store(today, &text) {
        warn!("Could not persist the feed cache: {e}");
    }

    match command {
        AppCommand::List => {
            println!("{}", ui::format_code_list(&table.codes()));
        }
        AppCommand::Convert { amount, from, to } => {
            let (amount, from, to) = validate_request(amount, from, to)?;
            let result = table.convert(amount, &from, &to)?;
            println!(
                "{}",
                ui::format_conversion(mode, amount, &from, result, &to, today)
            );
        }
    }

    Ok(())
}

fn validate_request(
    amount: Option<String>,
    from: Option<String>,
    to: Option<String>,
) -> Result<(f64, String, String), InputError> {
    let (amount, from, to) = match (amount, from, to) {
        (Some(amount), Some(from), Some(to)) => (amount, from, to),
        _ => return Err(InputError::MissingArguments),
    };
    let amount: f64 = amount.parse().map_err(|_| InputError::BadAmount(amount))?;
    Ok((amount, from.to_uppercase(), to.to_uppercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_request_uppercases_codes() {
        let (amount, from, to) = validate_request(
            Some("150".to_string()),
            Some("usd".to_string()),
            Some("eur".to_string()),
        )
        .unwrap();

        assert_eq!(amount, 150.0);
        assert_eq!(from, "USD");
        assert_eq!(to, "EUR");
    }

    #[test]
    fn test_validate_request_needs_all_three_arguments() {
        let result = validate_request(Some("150".to_string()), Some("USD".to_string()), None);
        assert!(matches!(result, Err(InputError::MissingArguments)));
    }

    #[test]
    fn test_validate_request_rejects_a_non_numeric_amount() {
        let result = validate_request(
            Some("lots".to_string()),
            Some("USD".to_string()),
            Some("EUR".to_string()),
        );
        assert!(matches!(result, Err(InputError::BadAmount(raw)) if raw == "lots"));
    }
}
