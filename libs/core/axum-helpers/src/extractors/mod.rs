//! Custom Axum extractors.

pub mod bearer;
pub mod validated_json;

pub use bearer::Bearer;
pub use validated_json::ValidatedJson;
