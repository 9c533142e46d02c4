//! In-memory price alerts.
//!
//! Mirrors the tracker view: alerts are created with a mocked current price
//! and are never checked against live fares. Like the search history, they
//! are not persisted.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{ALERT_MOCK_PRICE_MAX, ALERT_MOCK_PRICE_MIN};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertPreferences {
    #[serde(default)]
    pub non_stop_only: bool,
    #[serde(default)]
    pub weekends_only: bool,
    #[serde(default = "default_max_stops")]
    pub max_stops: u32,
}

fn default_max_stops() -> u32 {
    2
}

impl Default for AlertPreferences {
    fn default() -> Self {
        Self {
            non_stop_only: false,
            weekends_only: false,
            max_stops: default_max_stops(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceAlert {
    pub id: String,
    pub origin: String,
    pub destination: String,
    pub target_price: f64,
    pub current_price: f64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub last_checked: DateTime<Utc>,
    pub preferences: AlertPreferences,
}

/// Request body for creating an alert; id and timestamps are server-side.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAlert {
    pub origin: String,
    pub destination: String,
    pub target_price: f64,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub preferences: AlertPreferences,
}

fn default_active() -> bool {
    true
}

#[derive(Default)]
pub struct AlertState {
    alerts: Vec<PriceAlert>,
}

impl AlertState {
    pub fn new() -> Self {
        Self { alerts: Vec::new() }
    }

    /// Create an alert. When the caller supplies no current price, a mock one
    /// is drawn (there is no live tracking behind this).
    pub fn add(&mut self, new: NewAlert) -> PriceAlert {
        let now = Utc::now();
        let current_price = new.current_price.unwrap_or_else(|| {
            rand::thread_rng().gen_range(ALERT_MOCK_PRICE_MIN..ALERT_MOCK_PRICE_MAX) as f64
        });
        let alert = PriceAlert {
            id: Uuid::new_v4().to_string(),
            origin: new.origin,
            destination: new.destination,
            target_price: new.target_price,
            current_price,
            is_active: new.is_active,
            created_at: now,
            last_checked: now,
            preferences: new.preferences,
        };
        self.alerts.push(alert.clone());
        alert
    }

    pub fn toggle(&mut self, id: &str) -> Option<PriceAlert> {
        let alert = self.alerts.iter_mut().find(|a| a.id == id)?;
        alert.is_active = !alert.is_active;
        Some(alert.clone())
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.alerts.len();
        self.alerts.retain(|a| a.id != id);
        self.alerts.len() < before
    }

    pub fn all(&self) -> &[PriceAlert] {
        &self.alerts
    }
}
