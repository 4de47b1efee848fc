//! Business-day arithmetic with an optional holiday set.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessCalendar {
    holidays: BTreeSet<NaiveDate>,
}

impl BusinessCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_holidays(holidays: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            holidays: holidays.into_iter().collect(),
        }
    }

    pub fn add_holiday(&mut self, day: NaiveDate) {
        self.holidays.insert(day);
    }

    pub fn holidays(&self) -> impl Iterator<Item = &NaiveDate> {
        self.holidays.iter()
    }

    /// Monday-Friday and not a configured holiday.
    pub fn is_business_day(&self, day: NaiveDate) -> bool {
        !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) && !self.holidays.contains(&day)
    }

    /// Signed business days from `today` to `due`.
    ///
    /// Walks one day at a time toward `due` and counts each stepped-to date
    /// that is a business day, so the range is `(today, due]` going forward
    /// and `[due, today)` going back. Negative means overdue.
    pub fn business_days_until(&self, due: Option<NaiveDate>, today: NaiveDate) -> Option<i64> {
        let due = due?;
        if due == today {
            return Some(0);
        }

        let forward = due > today;
        let mut cursor = today;
        let mut count = 0i64;

        while cursor != due {
            let next = if forward {
                cursor.checked_add_days(Days::new(1))
            } else {
                cursor.checked_sub_days(Days::new(1))
            };
            // Only reachable at chrono's date range limits.
            let Some(next) = next else { break };
            cursor = next;

            if self.is_business_day(cursor) {
                count += if forward { 1 } else { -1 };
            }
        }

        Some(count)
    }
}

/// Plain calendar-day difference; negative when `due` is in the past.
pub fn calendar_days_until(due: Option<NaiveDate>, today: NaiveDate) -> Option<i64> {
    due.map(|d| (d - today).num_days())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn monday() -> NaiveDate {
        d(2026, 10, 19)
    }

    #[test]
    fn weekends_are_not_business_days() {
        let cal = BusinessCalendar::new();
        assert!(cal.is_business_day(monday()));
        assert!(cal.is_business_day(d(2026, 10, 23)));
        assert!(!cal.is_business_day(d(2026, 10, 24)));
        assert!(!cal.is_business_day(d(2026, 10, 25)));
    }

    #[test]
    fn holidays_are_not_business_days() {
        let cal = BusinessCalendar::with_holidays([d(2026, 10, 21)]);
        assert!(!cal.is_business_day(d(2026, 10, 21)));
        assert!(cal.is_business_day(d(2026, 10, 22)));
    }

    #[test]
    fn same_day_is_zero() {
        let cal = BusinessCalendar::new();
        assert_eq!(cal.business_days_until(Some(monday()), monday()), Some(0));
        // Also on a weekend.
        let sat = d(2026, 10, 24);
        assert_eq!(cal.business_days_until(Some(sat), sat), Some(0));
    }

    #[test]
    fn no_due_date_is_none() {
        let cal = BusinessCalendar::new();
        assert_eq!(cal.business_days_until(None, monday()), None);
        assert_eq!(calendar_days_until(None, monday()), None);
    }

    #[test]
    fn week_spanning_weekend_counts_fewer_business_days() {
        let cal = BusinessCalendar::new();
        let due = d(2026, 10, 26);
        let biz = cal.business_days_until(Some(due), monday()).unwrap();
        let cal_days = calendar_days_until(Some(due), monday()).unwrap();
        assert_eq!(cal_days, 7);
        assert_eq!(biz, 5);
        assert!(biz < cal_days);
    }

    #[test]
    fn past_due_counts_negative_business_days() {
        let cal = BusinessCalendar::new();
        // Previous Monday: steps back over Sun, Sat, Fri, Thu, Wed, Tue, Mon.
        let due = d(2026, 10, 12);
        assert_eq!(cal.business_days_until(Some(due), monday()), Some(-5));
        assert_eq!(calendar_days_until(Some(due), monday()), Some(-7));
    }

    #[test]
    fn due_on_weekend_from_friday_is_zero_business_days() {
        let cal = BusinessCalendar::new();
        let fri = d(2026, 10, 23);
        assert_eq!(cal.business_days_until(Some(d(2026, 10, 24)), fri), Some(0));
        assert_eq!(cal.business_days_until(Some(d(2026, 10, 26)), fri), Some(1));
    }

    #[test]
    fn holiday_inside_range_is_skipped() {
        let cal = BusinessCalendar::with_holidays([d(2026, 10, 20)]);
        assert_eq!(cal.business_days_until(Some(d(2026, 10, 22)), monday()), Some(2));
    }

    #[test]
    fn far_dates_terminate() {
        let cal = BusinessCalendar::new();
        let far = d(2036, 10, 19);
        let biz = cal.business_days_until(Some(far), monday()).unwrap();
        assert!(biz > 2500 && biz < 2620);
        let back = cal.business_days_until(Some(monday()), far).unwrap();
        assert_eq!(back, -biz + adjust_endpoints(&cal, monday(), far));
    }

    // Forward counts (today, due]; backward counts [due, today). The two
    // differ only by whether each endpoint is a business day.
    fn adjust_endpoints(cal: &BusinessCalendar, start: NaiveDate, end: NaiveDate) -> i64 {
        let mut delta = 0;
        if cal.is_business_day(end) {
            delta += 1;
        }
        if cal.is_business_day(start) {
            delta -= 1;
        }
        delta
    }
}
