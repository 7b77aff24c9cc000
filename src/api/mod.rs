#[cfg(feature = "axum_api")]
pub mod axum;
