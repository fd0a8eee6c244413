pub mod adzuna;
pub mod http_client;
pub mod ipgeolocation;

pub use adzuna::AdzunaJobProvider;
pub use http_client::build_http_client;
pub use ipgeolocation::IpGeolocationClient;
