pub mod timer;
pub mod transitions;

pub use timer::ScopedTask;
pub use transitions::{Channel, EasingFunction};
