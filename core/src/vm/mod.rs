mod instruction_set;
mod jump_cache;
mod runtime;
mod tape;


pub use instruction_set::Instruction;
pub use jump_cache::JumpCache;
pub use runtime::{Machine, RunSummary};
pub use tape::Tape;
