//! 週単位のコンテンツ計画の状態
//!
//! Caller-owned state for a weekly content calendar: which week is shown, the text planned
//! for each weekday, and which day (if any) is expanded. Rendering is left to the caller.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::Serialize;

use crate::analyzer::{AnalysisResult, analyze};

/// Shown in place of an empty day.
pub const EMPTY_DAY_PREVIEW: &str = "No content planned yet.";

/// Monday-first, as displayed.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Texts of a single week, one per weekday.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WeekPlan {
    days: [String; 7],
}

impl WeekPlan {
    pub fn text(&self, day: Weekday) -> &str {
        &self.days[day.num_days_from_monday() as usize]
    }

    pub fn set_text(&mut self, day: Weekday, text: String) {
        self.days[day.num_days_from_monday() as usize] = text;
    }
}

/// Inclusive Monday..=Sunday date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl fmt::Display for WeekRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyPlanner {
    current_week: i64,
    weeks: BTreeMap<i64, WeekPlan>,
    expanded: Option<Weekday>,
}

impl Default for WeeklyPlanner {
    fn default() -> Self {
        Self::new()
    }
}

impl WeeklyPlanner {
    pub fn new() -> Self {
        let mut weeks = BTreeMap::new();
        weeks.insert(0, WeekPlan::default());
        Self {
            current_week: 0,
            weeks,
            expanded: None,
        }
    }

    /// Offset from the week containing today.
    pub const fn current_week(&self) -> i64 {
        self.current_week
    }

    /// 週を移動する。未訪問の週は空の計画で作成する。
    pub fn change_week(&mut self, delta: i64) {
        self.current_week = self.current_week.saturating_add(delta);
        self.weeks.entry(self.current_week).or_default();
        log::debug!("moved to week offset {}", self.current_week);
    }

    pub fn set_text(&mut self, day: Weekday, text: impl Into<String>) {
        self.current_plan_mut().set_text(day, text.into());
    }

    pub fn text(&self, day: Weekday) -> &str {
        self.weeks
            .get(&self.current_week)
            .map_or("", |plan| plan.text(day))
    }

    /// Day text, or [`EMPTY_DAY_PREVIEW`] when nothing is planned.
    pub fn preview(&self, day: Weekday) -> &str {
        match self.text(day) {
            "" => EMPTY_DAY_PREVIEW,
            text => text,
        }
    }

    /// Expands `day`, collapsing any other. Toggling the expanded day collapses it.
    pub fn toggle_expand(&mut self, day: Weekday) {
        self.expanded = if self.expanded == Some(day) { None } else { Some(day) };
    }

    pub const fn expanded_day(&self) -> Option<Weekday> {
        self.expanded
    }

    pub fn is_expanded(&self, day: Weekday) -> bool {
        self.expanded == Some(day)
    }

    pub fn analysis(&self, day: Weekday) -> AnalysisResult {
        analyze(self.text(day))
    }

    pub fn week_analysis(&self) -> Vec<(Weekday, AnalysisResult)> {
        WEEKDAYS.iter().map(|&day| (day, self.analysis(day))).collect()
    }

    /// Dates of the current week, relative to the ISO week containing `today`.
    ///
    /// Returns `None` only if the offset leaves chrono's representable date range.
    pub fn week_range(&self, today: NaiveDate) -> Option<WeekRange> {
        let this_monday =
            today.checked_sub_days(Days::new(u64::from(today.weekday().num_days_from_monday())))?;
        let shift = Days::new(self.current_week.unsigned_abs().checked_mul(7)?);
        let start = if self.current_week >= 0 {
            this_monday.checked_add_days(shift)?
        } else {
            this_monday.checked_sub_days(shift)?
        };
        let end = start.checked_add_days(Days::new(6))?;
        Some(WeekRange { start, end })
    }

    fn current_plan_mut(&mut self) -> &mut WeekPlan {
        self.weeks.entry(self.current_week).or_default()
    }
}
