pub mod client;
pub mod colors;
pub mod error;
pub mod logos;
pub mod record;
pub mod types;

pub use client::BrandDevClient;
pub use colors::normalize_colors;
pub use error::BranddevError;
pub use logos::derive_logos;
pub use record::build_record;
pub use types::{BrandPayload, RawBrand, RawColor, RawFont, RawLogo};

/// Provider tag written into every record this crate produces. Discovery
/// uses it to decide which domains still need (re-)fetching.
pub const PROVIDER: &str = "branddev";
