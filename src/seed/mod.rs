mod config;
mod seed;
mod seed_bundled;
mod seed_file;
mod seed_http;

pub use config::SeedConfig;
pub use seed::SeedSource;
pub use seed_bundled::BundledSeed;
pub use seed_file::FileSeed;
pub use seed_http::HttpSeed;
