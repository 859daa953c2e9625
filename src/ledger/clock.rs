use std::fmt::Debug;

pub trait DateStamper: Debug {
    fn stamp(&self) -> String;
}

/// Today's date on the local clock, `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalCalendar;

impl DateStamper for LocalCalendar {
    fn stamp(&self) -> String {
        chrono::Local::now()
            .date_naive()
            .format("%Y-%m-%d")
            .to_string()
    }
}

#[derive(Debug, Clone)]
pub struct FixedDate(pub String);

impl DateStamper for FixedDate {
    fn stamp(&self) -> String {
        self.0.clone()
    }
}
