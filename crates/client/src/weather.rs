use shared_types::{AppError, Forecast, ForecastQuery, WeatherConfig, CITY_NOT_FOUND};

use crate::http::HttpClient;

pub const FORECAST_PATH: &str = "/v1/forecast.json";

/// Forecast lookups against the third-party weather provider.
#[derive(Debug, Clone)]
pub struct WeatherService {
    http: HttpClient,
    api_key: String,
}

impl WeatherService {
    pub fn new(http: HttpClient, api_key: impl Into<String>) -> Self {
        Self {
            http,
            api_key: api_key.into(),
        }
    }

    pub fn from_config(config: &WeatherConfig) -> Self {
        Self::new(HttpClient::new(&config.base_url, None), &config.api_key)
    }

    /// Fetch the forecast for `query`. Every failure (bad status, transport,
    /// undecodable body) is reported as one "City not found" error.
    #[tracing::instrument(skip(self), fields(city = %query.city, days = query.days))]
    pub async fn forecast(&self, query: &ForecastQuery) -> Result<Forecast, AppError> {
        let body = self.http.get(&self.forecast_path(query)).await.map_err(|e| {
            tracing::warn!(error = %e, "forecast request failed");
            AppError::network(CITY_NOT_FOUND)
        })?;
        serde_json::from_value(body).map_err(|e| {
            tracing::warn!(error = %e, "forecast response not understood");
            AppError::decode(CITY_NOT_FOUND)
        })
    }

    fn forecast_path(&self, query: &ForecastQuery) -> String {
        format!(
            "{FORECAST_PATH}?key={}&q={}&days={}&aqi=no",
            urlencoding::encode(&self.api_key),
            urlencoding::encode(&query.city),
            query.days
        )
    }
}
