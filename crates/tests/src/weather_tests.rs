use axum::{http::StatusCode, Router};
use client::{weather::FORECAST_PATH, HttpClient, WeatherService};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{format_temp, parse_days, ForecastQuery, WeatherSession, CITY_NOT_FOUND};

use crate::common::{self, MockBackend};

fn forecast_body() -> serde_json::Value {
    json!({
        "location": { "name": "New York", "country": "United States of America" },
        "current": {
            "temp_c": 21.06,
            "condition": { "text": "Sunny", "icon": "//cdn.weatherapi.com/weather/64x64/day/113.png" },
        },
        "forecast": {
            "forecastday": [
                {
                    "date": "2024-01-20",
                    "day": {
                        "maxtemp_c": 24.0,
                        "mintemp_c": 15.5,
                        "daily_chance_of_rain": 80,
                        "condition": { "text": "Patchy rain", "icon": "//cdn.weatherapi.com/r.png" },
                    },
                    "hour": [
                        { "time": "2024-01-20 00:00", "temp_c": 16.1, "chance_of_rain": 10 },
                        { "time": "2024-01-20 14:00", "temp_c": 23.9, "chance_of_rain": 85 },
                    ],
                },
            ],
        },
    })
}

#[tokio::test]
async fn forecast_query_carries_key_city_and_days() {
    let backend = MockBackend::start(
        Router::new().route(FORECAST_PATH, common::reply(StatusCode::OK, forecast_body())),
    )
    .await;
    let weather = WeatherService::new(backend.http(), "secret-key");
    let query = ForecastQuery::new(" New York ", parse_days("3")).unwrap();

    let forecast = weather.forecast(&query).await.unwrap();

    let requests = backend.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(
        requests[0].uri,
        "/v1/forecast.json?key=secret-key&q=New%20York&days=3&aqi=no"
    );
    assert_eq!(forecast.location.name, "New York");
    assert_eq!(format_temp(forecast.current.temp_c), "21.1°C");
    assert_eq!(
        forecast.current.condition.icon_url(),
        "https://cdn.weatherapi.com/weather/64x64/day/113.png"
    );
    let day = &forecast.forecast.forecastday[0];
    assert_eq!(day.label(), "Sat, 20 Jan");
    assert_eq!(day.hour[1].label(), "14:00");
}

#[tokio::test]
async fn provider_rejection_reads_as_city_not_found() {
    let backend = MockBackend::start(Router::new().route(
        FORECAST_PATH,
        common::reply(
            StatusCode::BAD_REQUEST,
            json!({ "error": { "code": 1006, "message": "No matching location found." } }),
        ),
    ))
    .await;
    let weather = WeatherService::new(backend.http(), "k");
    let query = ForecastQuery::new("Atlantis", Some(1)).unwrap();

    let err = weather.forecast(&query).await.unwrap_err();

    assert_eq!(err.user_message(), CITY_NOT_FOUND);
    assert_eq!(backend.request_count(), 1);
}

#[tokio::test]
async fn malformed_provider_body_reads_as_city_not_found() {
    let backend = MockBackend::start(
        Router::new().route(FORECAST_PATH, common::reply_text(StatusCode::OK, "maintenance")),
    )
    .await;
    let weather = WeatherService::new(backend.http(), "k");
    let query = ForecastQuery::new("Jakarta", Some(2)).unwrap();

    let err = weather.forecast(&query).await.unwrap_err();

    assert_eq!(err.user_message(), CITY_NOT_FOUND);
}

#[tokio::test]
async fn unreachable_provider_reads_as_city_not_found() {
    let weather = WeatherService::new(HttpClient::new(common::UNREACHABLE, None), "k");
    let query = ForecastQuery::new("Jakarta", Some(1)).unwrap();

    let err = weather.forecast(&query).await.unwrap_err();

    assert_eq!(err.user_message(), CITY_NOT_FOUND);
}

#[test]
fn invalid_queries_are_rejected_before_any_request() {
    assert_eq!(
        ForecastQuery::new("   ", Some(3)).unwrap_err().user_message(),
        "Please enter a city name"
    );
    assert_eq!(
        ForecastQuery::new("Paris", parse_days("")).unwrap_err().user_message(),
        "Days must be between 1 and 14"
    );
    assert!(ForecastQuery::new("Paris", Some(15)).is_err());
    assert!(ForecastQuery::new("Paris", Some(14)).is_ok());
}

#[tokio::test]
async fn repeated_searches_keep_history_unique() {
    let backend = MockBackend::start(
        Router::new().route(FORECAST_PATH, common::reply(StatusCode::OK, forecast_body())),
    )
    .await;
    let weather = WeatherService::new(backend.http(), "k");
    let mut session = WeatherSession::default();

    for city in ["London", "Paris", "London"] {
        let query = ForecastQuery::new(city, Some(1)).unwrap();
        weather.forecast(&query).await.unwrap();
        session.record_search(&query.city);
    }
    session.toggle_day(0);

    assert_eq!(session.history(), ["London".to_string(), "Paris".to_string()]);
    assert_eq!(session.selected_city(), Some("London"));
    assert_eq!(session.selected_day(), Some(0));
    assert_eq!(backend.request_count(), 3);
}
