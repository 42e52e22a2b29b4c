mod stack;

pub use stack::{Stack, STACK_LIMIT};
