pub mod ephemeral;
pub mod in_memory;

pub use ephemeral::*;
pub use in_memory::*;
