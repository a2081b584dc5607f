use chrono::{Local, NaiveTime};

/// Source of the wall-clock time appended to greetings.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveTime;
}

/// 讀取本地系統時間
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}
