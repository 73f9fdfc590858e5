use crate::model::Result;
use chrono::{Duration, NaiveDate};
use serde_json::{from_str, Value};
use std::fs;
use std::path::Path;

/// Date window of one documentation event. Replaces the hardcoded
/// plot/count constants so the same batches can run for any event.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct EventWindow {
    pub name: String,
    pub plot_start: NaiveDate,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub top_daily: usize,
    pub top_overall: usize,
}

// Create
impl EventWindow {
    pub fn from_config(path: &Path) -> Result<Self> {
        let json_str = fs::read_to_string(path)?;
        Self::parse(&json_str)
    }

    fn new(
        name: impl ToString,
        plot_start: NaiveDate,
        start: NaiveDate,
        end: NaiveDate,
        top_daily: usize,
        top_overall: usize,
    ) -> Self {
        Self {
            name: name.to_string(),
            plot_start,
            start,
            end,
            top_daily,
            top_overall,
        }
    }
}

impl Default for EventWindow {
    fn default() -> Self {
        Self::new(
            "docathon",
            NaiveDate::from_ymd_opt(2017, 3, 3).unwrap(),
            NaiveDate::from_ymd_opt(2017, 3, 6).unwrap(),
            NaiveDate::from_ymd_opt(2017, 3, 10).unwrap(),
            10,
            20,
        )
    }
}

// Parser
impl EventWindow {
    fn parse(json_str: &str) -> Result<Self> {
        fn date_field(details: &Value, field: &str) -> Result<NaiveDate> {
            let Some(raw) = details[field].as_str() else {
                return Err(format!("Not found '{field}' field").into());
            };
            let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") else {
                return Err(format!("Not a valid date: {raw}").into());
            };
            Ok(date)
        }

        let details: Value = from_str(json_str)?;
        let Some(name) = details["name"].as_str() else {
            return Err("Not found 'name' field".into());
        };
        let defaults = Self::default();
        let window = Self::new(
            name,
            date_field(&details, "plot_start")?,
            date_field(&details, "start")?,
            date_field(&details, "end")?,
            details["top_daily"]
                .as_u64()
                .map(|n| n as usize)
                .unwrap_or(defaults.top_daily),
            details["top_overall"]
                .as_u64()
                .map(|n| n as usize)
                .unwrap_or(defaults.top_overall),
        );
        if window.end < window.start {
            return Err(format!("Event ends ({}) before it starts ({})", window.end, window.start).into());
        }
        Ok(window)
    }
}

impl EventWindow {
    pub fn days(&self) -> Vec<NaiveDate> {
        let mut days = Vec::new();
        let mut day = self.start;
        while day <= self.end {
            days.push(day);
            day = day + Duration::days(1);
        }
        days
    }
}
