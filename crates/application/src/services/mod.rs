pub mod record_extractor;
pub mod validators;

pub use record_extractor::RecordExtractor;
pub use validators::{AllowAllValidator, RfcHostnameValidator};
