pub mod dto;
pub mod handlers;
pub mod pages;
pub mod routes;
pub mod state;
pub mod utils;

pub use routes::{create_api_routes, create_app};
pub use state::AppState;
