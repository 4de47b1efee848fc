//! Per-factor classifiers. Each maps one task attribute to a label and a sub-score.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImportanceLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl ImportanceLevel {
    pub fn classify(importance: i32) -> Self {
        match importance {
            i if i <= 3 => Self::Low,
            i if i <= 6 => Self::Medium,
            i if i <= 8 => Self::High,
            _ => Self::Critical,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low importance",
            Self::Medium => "Medium importance",
            Self::High => "High importance",
            Self::Critical => "Critical importance",
        }
    }

    pub fn score(&self) -> f64 {
        match self {
            Self::Low => 8.0,
            Self::Medium => 15.0,
            Self::High => 22.0,
            Self::Critical => 30.0,
        }
    }
}

/// Deadline pressure, measured in business days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Urgency {
    NoDueDate,
    /// Business days past due (positive).
    Overdue(i64),
    DueToday,
    DueVerySoon(i64),
    DueThisWeek(i64),
    Upcoming(i64),
}

impl Urgency {
    pub fn classify(business_days: Option<i64>) -> Self {
        match business_days {
            None => Self::NoDueDate,
            Some(d) if d < 0 => Self::Overdue(d.saturating_abs()),
            Some(0) => Self::DueToday,
            Some(d) if d <= 3 => Self::DueVerySoon(d),
            Some(d) if d <= 7 => Self::DueThisWeek(d),
            Some(d) => Self::Upcoming(d),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::NoDueDate => "No due date",
            Self::Overdue(_) => "Overdue",
            Self::DueToday => "Due today",
            Self::DueVerySoon(_) => "Due very soon",
            Self::DueThisWeek(_) => "Due this week",
            Self::Upcoming(_) => "Upcoming deadline",
        }
    }

    /// Overdue grows without bound the further past due a task is.
    pub fn score(&self) -> f64 {
        match self {
            Self::NoDueDate => 0.0,
            Self::Overdue(days) => 35.0 + *days as f64,
            Self::DueToday => 30.0,
            Self::DueVerySoon(_) => 20.0,
            Self::DueThisWeek(_) => 10.0,
            Self::Upcoming(_) => 5.0,
        }
    }

    /// Signed business days until due, `None` without a due date.
    pub fn business_days(&self) -> Option<i64> {
        match *self {
            Self::NoDueDate => None,
            Self::Overdue(d) => Some(-d),
            Self::DueToday => Some(0),
            Self::DueVerySoon(d) | Self::DueThisWeek(d) | Self::Upcoming(d) => Some(d),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effort {
    Unknown,
    QuickWin,
    Moderate,
    Large,
}

impl Effort {
    pub fn classify(hours: Option<f64>) -> Self {
        match hours {
            None => Self::Unknown,
            Some(h) if h <= 2.0 => Self::QuickWin,
            Some(h) if h <= 6.0 => Self::Moderate,
            Some(_) => Self::Large,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown effort",
            Self::QuickWin => "Quick win (low effort)",
            Self::Moderate => "Moderate effort",
            Self::Large => "Large effort task",
        }
    }

    /// Large tasks are penalized.
    pub fn score(&self) -> f64 {
        match self {
            Self::Unknown => 0.0,
            Self::QuickWin => 12.0,
            Self::Moderate => 5.0,
            Self::Large => -8.0,
        }
    }
}

/// How many tasks in the batch are waiting on this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fanout(pub usize);

impl Fanout {
    pub fn score(&self) -> f64 {
        self.0 as f64 * 6.0
    }
}

impl fmt::Display for Fanout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => f.write_str("No blockers"),
            n => write!(f, "Unblocks {n} task(s)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn importance_bands() {
        assert_eq!(ImportanceLevel::classify(0), ImportanceLevel::Low);
        assert_eq!(ImportanceLevel::classify(3), ImportanceLevel::Low);
        assert_eq!(ImportanceLevel::classify(4).label(), "Medium importance");
        assert_eq!(ImportanceLevel::classify(6).score(), 15.0);
        assert_eq!(ImportanceLevel::classify(7).label(), "High importance");
        assert_eq!(ImportanceLevel::classify(8).score(), 22.0);
        assert_eq!(ImportanceLevel::classify(9).label(), "Critical importance");
        assert_eq!(ImportanceLevel::classify(10).score(), 30.0);
    }

    #[test]
    fn urgency_bands() {
        assert_eq!(Urgency::classify(None).label(), "No due date");
        assert_eq!(Urgency::classify(None).score(), 0.0);
        assert_eq!(Urgency::classify(None).business_days(), None);

        assert_eq!(Urgency::classify(Some(0)).label(), "Due today");
        assert_eq!(Urgency::classify(Some(0)).score(), 30.0);
        assert_eq!(Urgency::classify(Some(1)).label(), "Due very soon");
        assert_eq!(Urgency::classify(Some(3)).score(), 20.0);
        assert_eq!(Urgency::classify(Some(4)).label(), "Due this week");
        assert_eq!(Urgency::classify(Some(7)).score(), 10.0);
        assert_eq!(Urgency::classify(Some(8)).label(), "Upcoming deadline");
        assert_eq!(Urgency::classify(Some(8)).score(), 5.0);
    }

    #[test]
    fn overdue_score_grows_with_days_past_due() {
        let one = Urgency::classify(Some(-1));
        let ten = Urgency::classify(Some(-10));
        assert_eq!(one.label(), "Overdue");
        assert_eq!(one.score(), 36.0);
        assert_eq!(ten.score(), 45.0);
        assert_eq!(ten.business_days(), Some(-10));
    }

    #[test]
    fn effort_bands() {
        assert_eq!(Effort::classify(None).score(), 0.0);
        assert_eq!(Effort::classify(Some(0.0)), Effort::QuickWin);
        assert_eq!(Effort::classify(Some(2.0)).label(), "Quick win (low effort)");
        assert_eq!(Effort::classify(Some(2.5)).label(), "Moderate effort");
        assert_eq!(Effort::classify(Some(6.0)).score(), 5.0);
        assert_eq!(Effort::classify(Some(6.5)).label(), "Large effort task");
        assert_eq!(Effort::classify(Some(40.0)).score(), -8.0);
    }

    #[test]
    fn fanout_labels() {
        assert_eq!(Fanout(0).to_string(), "No blockers");
        assert_eq!(Fanout(0).score(), 0.0);
        assert_eq!(Fanout(1).to_string(), "Unblocks 1 task(s)");
        assert_eq!(Fanout(3).score(), 18.0);
    }
}
