pub mod task;

pub use task::{StatusFilter, Task};
