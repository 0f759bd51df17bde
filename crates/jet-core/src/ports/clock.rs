use chrono::{DateTime, Datelike, Utc};

pub trait ClockPort: Send + Sync {
    fn now_ms(&self) -> i64;

    fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.now_ms()).unwrap_or_else(Utc::now)
    }

    fn current_year(&self) -> i32 {
        self.now().year()
    }
}
