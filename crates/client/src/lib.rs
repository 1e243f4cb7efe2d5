pub mod auth;
pub mod config;
pub mod dashboard;
pub mod forms;
pub mod guard;
pub mod http;
pub mod session;
pub mod storage;
pub mod weather;

pub use auth::AuthService;
pub use dashboard::{DashboardOutcome, DashboardService};
pub use guard::GuardDecision;
pub use http::HttpClient;
pub use session::SessionStore;
pub use storage::KeyValueStore;
pub use weather::WeatherService;
