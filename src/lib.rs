mod types;
mod routes;
mod handlers;
mod error;
mod state;
mod token;
mod config;
pub mod views;

pub use types::*;
pub use routes::*;
pub use handlers::*;
pub use error::*;
pub use state::*;
pub use token::*;
pub use config::*;
