pub mod clock;
pub mod store;
pub mod task;

pub use clock::{Clock, SystemClock};
pub use store::{Error, TaskStore};
pub use task::{Status, Task};
