mod wire_resolver;

pub use wire_resolver::WireResolver;
