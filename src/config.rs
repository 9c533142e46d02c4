use clap::Parser;
use tracing::warn;

/// Farefinder — flight-search backend proxying the SerpAPI Google Flights
/// engine.
#[derive(Parser, Debug, Clone)]
#[command(name = "farefinder")]
pub struct CliArgs {
    /// HTTP port to listen on
    #[arg(short = 'p', long = "port", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Provider API key (falls back to the SERPAPI_KEY environment variable)
    #[arg(short = 'k', long = "api-key")]
    pub api_key: Option<String>,

    /// Provider endpoint override (tests point this at a local stub)
    #[arg(long = "provider-url", default_value = PROVIDER_BASE_URL)]
    pub provider_url: String,
}

pub struct AppConfig {
    pub port: u16,
    pub api_key: String,
    pub provider_url: String,
}

// Server constants
pub const DEFAULT_PORT: u16 = 3001;

// Provider constants
pub const PROVIDER_BASE_URL: &str = "https://serpapi.com/search.json";
pub const PROVIDER_ENGINE: &str = "google_flights";
pub const API_KEY_ENV: &str = "SERPAPI_KEY";
pub const MISSING_API_KEY: &str = "missing-api-key";
pub const HTTP_TIMEOUT_SECS: u64 = 30;

// Calendar synthesis constants
pub const CALENDAR_WINDOW_DAYS: u64 = 60;
pub const PRICE_VARIATION_MIN: f64 = 0.8;
pub const PRICE_VARIATION_MAX: f64 = 1.2;
pub const WEEKEND_MULTIPLIER: f64 = 1.2;

// History constants
pub const HISTORY_LIMIT: usize = 50;

// Alert constants: mock current-price band for new alerts
pub const ALERT_MOCK_PRICE_MIN: u32 = 100;
pub const ALERT_MOCK_PRICE_MAX: u32 = 500;

impl AppConfig {
    /// Resolve the runtime configuration once at startup. The provider
    /// credential comes from the CLI flag, then the environment; a missing
    /// key gets a placeholder so the server still starts (provider calls
    /// will be rejected upstream).
    pub fn from_args(args: CliArgs) -> Self {
        let api_key = args
            .api_key
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .filter(|key| !key.is_empty())
            .unwrap_or_else(|| {
                warn!("{} is not set; using placeholder credential", API_KEY_ENV);
                MISSING_API_KEY.to_string()
            });

        AppConfig {
            port: args.port,
            api_key,
            provider_url: args.provider_url,
        }
    }
}
