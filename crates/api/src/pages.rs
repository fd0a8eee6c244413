use axum::Router;
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

/// Named pages and the file each one serves.
pub const PAGES: [(&str, &str); 4] = [
    ("/", "index.html"),
    ("/results", "results.html"),
    ("/premium", "premium.html"),
    ("/thank-you", "thank-you.html"),
];

/// Serves the named pages plus every other file under `public_dir`.
pub fn page_routes(public_dir: &Path) -> Router {
    PAGES
        .iter()
        .fold(Router::new(), |router, (route, file)| {
            router.route_service(route, ServeFile::new(public_dir.join(file)))
        })
        .fallback_service(ServeDir::new(public_dir))
}
