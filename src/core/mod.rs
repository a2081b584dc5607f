pub mod greeter;
pub mod stats;

pub use crate::domain::model::{GreetingRequest, GreetingStats, Language, DEFAULT_NAME};
pub use crate::domain::ports::{Clock, SystemClock};
