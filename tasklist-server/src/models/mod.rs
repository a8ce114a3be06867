//! Domain models
//!
//! Client input is validated when converted into these types.
//! Invalid input returns ValidationError, not panic.

pub mod task;
pub mod validation;

pub use task::{NewTask, Task};
pub use validation::ValidationError;
