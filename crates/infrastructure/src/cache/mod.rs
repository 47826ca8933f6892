mod memory;

pub use memory::MemoryRecordCache;
