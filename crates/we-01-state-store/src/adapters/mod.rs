pub mod memory_context;
pub mod scoped_context;

pub use memory_context::*;
pub use scoped_context::*;
