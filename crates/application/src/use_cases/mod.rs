pub mod lookup_records;

pub use lookup_records::LookupService;
