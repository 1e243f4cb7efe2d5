use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdChevronDown, LdChevronUp, LdDroplets, LdHistory};
use dioxus_free_icons::Icon;
use shared_types::{
    format_temp, parse_days, Forecast, ForecastDay, ForecastQuery, WeatherSession,
    MAX_FORECAST_DAYS, MIN_FORECAST_DAYS,
};
use shared_ui::{
    Alert, AlertVariant, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, Form, FormSelect, Input, PageHeader, PageSubtitle, PageTitle, Spinner,
};

use crate::format_helpers::format_percent;
use crate::use_portal;

/// City forecast lookup with search history.
#[component]
pub fn Weather() -> Element {
    let portal = use_portal();
    let mut city = use_signal(String::new);
    let mut days = use_signal(String::new);
    let mut session = use_signal(WeatherSession::default);
    let mut forecast = use_signal(|| Option::<Forecast>::None);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // History buttons pass their city explicitly instead of going through the input.
    let search = use_callback(move |name: String| {
        if loading() {
            return;
        }
        let query = match ForecastQuery::new(&name, parse_days(&days.read())) {
            Ok(query) => query,
            Err(err) => {
                error_msg.set(Some(err.user_message()));
                return;
            }
        };
        let weather = portal.weather.clone();
        loading.set(true);
        error_msg.set(None);
        spawn(async move {
            match weather.forecast(&query).await {
                Ok(data) => {
                    session.write().record_search(&query.city);
                    forecast.set(Some(data));
                }
                Err(err) => error_msg.set(Some(err.user_message())),
            }
            loading.set(false);
        });
    });

    let current = forecast();
    let state = session();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./weather.css") }

        div { class: "weather-page",
            PageHeader {
                PageTitle { "Weather Checker" }
                PageSubtitle { "Current conditions and a forecast of up to {MAX_FORECAST_DAYS} days" }
            }

            Card { class: "weather-search",
                CardContent {
                    Form {
                        onsubmit: move |_| search.call(city()),
                        Input {
                            label: "City",
                            name: "city",
                            placeholder: "Enter a city name",
                            value: city(),
                            on_input: move |e: FormEvent| city.set(e.value()),
                        }
                        FormSelect {
                            label: "Days",
                            name: "days",
                            value: days(),
                            onchange: move |e: FormEvent| days.set(e.value()),
                            option { value: "", selected: days.read().is_empty(), "Select number of days" }
                            for n in MIN_FORECAST_DAYS..=MAX_FORECAST_DAYS {
                                option { key: "{n}", value: "{n}", selected: *days.read() == n.to_string(),
                                    if n == 1 { "1 day" } else { "{n} days" }
                                }
                            }
                        }
                        Button {
                            button_type: "submit",
                            class: "weather-submit",
                            disabled: loading(),
                            if loading() { "Checking..." } else { "Check Weather" }
                        }
                    }
                }
            }

            if let Some(message) = error_msg() {
                Alert { variant: AlertVariant::Error, "{message}" }
            }

            if loading() {
                Spinner { message: "Fetching forecast..." }
            } else if let Some(data) = current {
                ForecastPanel { data, selected_day: state.selected_day(), on_toggle: move |index| session.write().toggle_day(index) }
            }

            if !state.history().is_empty() {
                div { class: "weather-history",
                    h3 { class: "weather-history-title",
                        Icon::<LdHistory> { icon: LdHistory, width: 18, height: 18 }
                        "Search History"
                    }
                    ul {
                        for item in state.history().iter().cloned() {
                            li { key: "{item}",
                                Button {
                                    variant: if state.selected_city() == Some(item.as_str()) { ButtonVariant::Primary } else { ButtonVariant::Ghost },
                                    class: "weather-history-item",
                                    onclick: {
                                        let item = item.clone();
                                        move |_: MouseEvent| {
                                            city.set(item.clone());
                                            search.call(item.clone());
                                        }
                                    },
                                    "{item}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ForecastPanel(data: Forecast, selected_day: Option<usize>, on_toggle: EventHandler<usize>) -> Element {
    let place = format!("{}, {}", data.location.name, data.location.country);
    let condition = data.current.condition.text.clone();
    let icon = data.current.condition.icon_url();
    let temp = format_temp(data.current.temp_c);

    rsx! {
        div { class: "weather-forecast",
            h2 { class: "weather-location", "{place}" }

            Card { class: "weather-current",
                CardHeader {
                    CardTitle { "Today" }
                    CardDescription { "{condition}" }
                }
                CardContent {
                    div { class: "weather-current-body",
                        img { src: icon, alt: condition.clone() }
                        span { class: "weather-current-temp", "{temp}" }
                    }
                }
            }

            div { class: "weather-days",
                for (index, day) in data.forecast.forecastday.iter().enumerate() {
                    DayCard {
                        key: "{index}",
                        day: day.clone(),
                        expanded: selected_day == Some(index),
                        on_toggle: move |_| on_toggle.call(index),
                    }
                }
            }
        }
    }
}

#[component]
fn DayCard(day: ForecastDay, expanded: bool, on_toggle: EventHandler<MouseEvent>) -> Element {
    let summary = &day.day;
    let condition = summary.condition.text.clone();

    rsx! {
        div { class: "weather-day",
            div {
                class: if expanded { "weather-day-summary weather-day-selected" } else { "weather-day-summary" },
                onclick: move |evt| on_toggle.call(evt),
                div { class: "weather-day-date",
                    h4 { {day.label()} }
                    img { src: summary.condition.icon_url(), alt: condition.clone() }
                }
                div { class: "weather-day-details",
                    p { "{condition}" }
                    p { "Max: " {format_temp(summary.maxtemp_c)} }
                    p { "Min: " {format_temp(summary.mintemp_c)} }
                    p { class: "weather-rain", "Rain: " {format_percent(summary.daily_chance_of_rain)} }
                }
                div { class: "weather-day-toggle",
                    if expanded {
                        Icon::<LdChevronUp> { icon: LdChevronUp, width: 16, height: 16 }
                    } else {
                        Icon::<LdChevronDown> { icon: LdChevronDown, width: 16, height: 16 }
                    }
                }
            }

            if expanded {
                div { class: "weather-hours",
                    h4 { "Hourly Forecast" }
                    div { class: "weather-hours-grid",
                        for (index, hour) in day.hour.iter().enumerate() {
                            div { key: "{index}", class: "weather-hour",
                                p { class: "weather-hour-time", {hour.label()} }
                                img { src: hour.condition.icon_url(), alt: hour.condition.text.clone() }
                                p { class: "weather-hour-temp", {format_temp(hour.temp_c)} }
                                p { class: "weather-rain",
                                    Icon::<LdDroplets> { icon: LdDroplets, width: 12, height: 12 }
                                    {format_percent(hour.chance_of_rain)}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
