pub mod config;
pub mod dashboard;
pub mod error;
#[cfg(feature = "validation")]
pub mod forms;
pub mod models;
pub mod requests;
pub mod state;
pub mod weather;

pub use config::*;
pub use dashboard::*;
pub use error::*;
#[cfg(feature = "validation")]
pub use forms::*;
pub use models::*;
pub use requests::*;
pub use state::*;
pub use weather::*;
