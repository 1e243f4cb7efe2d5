use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub const MIN_FORECAST_DAYS: u32 = 1;
pub const MAX_FORECAST_DAYS: u32 = 14;

/// The only message shown when a forecast lookup fails.
pub const CITY_NOT_FOUND: &str = "City not found";

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// A validated forecast lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastQuery {
    pub city: String,
    pub days: u32,
}

impl ForecastQuery {
    pub fn new(city: &str, days: Option<u32>) -> Result<Self, AppError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(AppError::validation("Please enter a city name"));
        }
        match days {
            Some(days) if (MIN_FORECAST_DAYS..=MAX_FORECAST_DAYS).contains(&days) => Ok(Self {
                city: city.to_string(),
                days,
            }),
            _ => Err(AppError::validation(format!(
                "Days must be between {MIN_FORECAST_DAYS} and {MAX_FORECAST_DAYS}"
            ))),
        }
    }
}

/// Parse the day-count selector value; blank or garbage is `None`.
pub fn parse_days(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

// ---------------------------------------------------------------------------
// Provider payload
// ---------------------------------------------------------------------------

/// Body of the provider's `forecast.json`, trimmed to what the widget shows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Forecast {
    pub location: Location,
    pub current: CurrentWeather,
    #[serde(default)]
    pub forecast: ForecastDays,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub name: String,
    #[serde(default)]
    pub country: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Condition {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub icon: String,
}

impl Condition {
    pub fn icon_url(&self) -> String {
        icon_url(&self.icon)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentWeather {
    pub temp_c: f64,
    #[serde(default)]
    pub condition: Condition,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ForecastDays {
    #[serde(default)]
    pub forecastday: Vec<ForecastDay>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastDay {
    pub date: String,
    pub day: DaySummary,
    #[serde(default)]
    pub hour: Vec<HourForecast>,
}

impl ForecastDay {
    pub fn label(&self) -> String {
        day_label(&self.date)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DaySummary {
    pub maxtemp_c: f64,
    pub mintemp_c: f64,
    #[serde(default)]
    pub daily_chance_of_rain: f64,
    #[serde(default)]
    pub condition: Condition,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HourForecast {
    pub time: String,
    pub temp_c: f64,
    #[serde(default)]
    pub chance_of_rain: f64,
    #[serde(default)]
    pub condition: Condition,
}

impl HourForecast {
    pub fn label(&self) -> String {
        hour_label(&self.time)
    }
}

// ---------------------------------------------------------------------------
// Display helpers
// ---------------------------------------------------------------------------

/// The provider sends protocol-relative icon URLs (`//cdn...`).
pub fn icon_url(icon: &str) -> String {
    if icon.starts_with("//") {
        format!("https:{icon}")
    } else {
        icon.to_string()
    }
}

/// `"2024-01-20 14:00"` → `"14:00"`. Unparseable input is returned as is.
pub fn hour_label(time: &str) -> String {
    NaiveDateTime::parse_from_str(time, "%Y-%m-%d %H:%M")
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|_| time.to_string())
}

/// `"2024-01-20"` → `"Sat, 20 Jan"`. Unparseable input is returned as is.
pub fn day_label(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%a, %d %b").to_string())
        .unwrap_or_else(|_| date.to_string())
}

/// Temperatures are shown with at most one decimal.
pub fn format_temp(celsius: f64) -> String {
    format!("{celsius:.1}°C")
}

// ---------------------------------------------------------------------------
// Widget session
// ---------------------------------------------------------------------------

/// Search history and selection state of the weather page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeatherSession {
    history: Vec<String>,
    selected_city: Option<String>,
    selected_day: Option<usize>,
}

impl WeatherSession {
    /// Record a successful lookup: appends to the history once, selects the
    /// city and collapses any expanded day.
    pub fn record_search(&mut self, city: &str) {
        if !self.history.iter().any(|c| c == city) {
            self.history.push(city.to_string());
        }
        self.selected_city = Some(city.to_string());
        self.selected_day = None;
    }

    /// Expand a day, or collapse it if it is already expanded.
    pub fn toggle_day(&mut self, index: usize) {
        self.selected_day = match self.selected_day {
            Some(current) if current == index => None,
            _ => Some(index),
        };
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn selected_city(&self) -> Option<&str> {
        self.selected_city.as_deref()
    }

    pub fn selected_day(&self) -> Option<usize> {
        self.selected_day
    }

    pub fn is_day_selected(&self, index: usize) -> bool {
        self.selected_day == Some(index)
    }
}
