pub mod allocator;
pub mod graph;

pub use allocator::IdAllocator;
pub use graph::FamilyTree;
