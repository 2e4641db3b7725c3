use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::models::employee::Employee;
use crate::models::schedule::{Schedule, ScheduleStatus};

pub const DAYS_PER_WEEK: i64 = 7;

/// The Monday on or before `anchor`.
pub fn week_start(anchor: NaiveDate) -> NaiveDate {
    anchor - Duration::days(anchor.weekday().num_days_from_monday() as i64)
}

pub fn week_days(anchor: NaiveDate) -> Vec<NaiveDate> {
    let start = week_start(anchor);
    (0..DAYS_PER_WEEK)
        .map(|offset| start + Duration::days(offset))
        .collect()
}

/// First schedule for the employee on that day. Later duplicates are ignored.
pub fn find_schedule(schedules: &[Schedule], employee_id: u32, day: NaiveDate) -> Option<&Schedule> {
    schedules
        .iter()
        .find(|schedule| schedule.employee_id == employee_id && schedule.date == day)
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleCell {
    pub date: NaiveDate,
    pub schedule_id: Option<u32>,
    pub status: Option<ScheduleStatus>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

impl ScheduleCell {
    fn empty(date: NaiveDate) -> Self {
        ScheduleCell {
            date,
            schedule_id: None,
            status: None,
            start_time: None,
            end_time: None,
        }
    }

    fn filled(schedule: &Schedule) -> Self {
        ScheduleCell {
            date: schedule.date,
            schedule_id: Some(schedule.id),
            status: Some(schedule.status),
            start_time: Some(schedule.start_time.clone()),
            end_time: Some(schedule.end_time.clone()),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GridRow {
    pub employee_id: u32,
    pub name: String,
    pub role: String,
    pub cells: Vec<ScheduleCell>,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub scheduled: usize,
    pub present: usize,
    pub late: usize,
    pub absent: usize,
}

impl StatusCounts {
    pub fn tally(schedules: &[Schedule]) -> Self {
        schedules
            .iter()
            .fold(StatusCounts::default(), |mut counts, schedule| {
                match schedule.status {
                    ScheduleStatus::Scheduled => counts.scheduled += 1,
                    ScheduleStatus::Present => counts.present += 1,
                    ScheduleStatus::Late => counts.late += 1,
                    ScheduleStatus::Absent => counts.absent += 1,
                }
                counts
            })
    }
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WeekGrid {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub previous_week: NaiveDate,
    pub next_week: NaiveDate,
    pub days: Vec<NaiveDate>,
    pub rows: Vec<GridRow>,
    pub counts: StatusCounts,
}

impl WeekGrid {
    pub fn build(anchor: NaiveDate, employees: &[Employee], schedules: &[Schedule]) -> Self {
        let days = week_days(anchor);
        let rows = employees
            .iter()
            .map(|employee| GridRow {
                employee_id: employee.id,
                name: employee.full_name(),
                role: employee.role.clone(),
                cells: days
                    .iter()
                    .map(|day| {
                        find_schedule(schedules, employee.id, *day)
                            .map(ScheduleCell::filled)
                            .unwrap_or_else(|| ScheduleCell::empty(*day))
                    })
                    .collect(),
            })
            .collect();

        let start = week_start(anchor);
        WeekGrid {
            week_start: start,
            week_end: start + Duration::days(DAYS_PER_WEEK - 1),
            previous_week: anchor - Duration::days(DAYS_PER_WEEK),
            next_week: anchor + Duration::days(DAYS_PER_WEEK),
            days,
            rows,
            counts: StatusCounts::tally(schedules),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{date, employee, schedule};

    #[test]
    fn week_starts_on_monday() {
        // 2024-01-22 is a Monday.
        assert_eq!(week_start(date(2024, 1, 22)), date(2024, 1, 22));
        assert_eq!(week_start(date(2024, 1, 24)), date(2024, 1, 22));
        assert_eq!(week_start(date(2024, 1, 28)), date(2024, 1, 22));
        assert_eq!(week_start(date(2024, 1, 29)), date(2024, 1, 29));
        // Crosses a year boundary.
        assert_eq!(week_start(date(2025, 1, 1)), date(2024, 12, 30));

        let days = week_days(date(2024, 1, 25));
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], date(2024, 1, 22));
        assert_eq!(days[6], date(2024, 1, 28));
    }

    #[test]
    fn grid_takes_first_match_and_leaves_gaps_empty() {
        let employees = vec![employee(1, "Ann", "Ops"), employee(2, "Ben", "Ops")];
        let schedules = vec![
            schedule(10, 1, date(2024, 1, 22), ScheduleStatus::Present),
            schedule(11, 1, date(2024, 1, 22), ScheduleStatus::Absent),
            schedule(12, 2, date(2024, 1, 26), ScheduleStatus::Late),
            schedule(13, 2, date(2024, 1, 29), ScheduleStatus::Scheduled),
        ];

        let grid = WeekGrid::build(date(2024, 1, 24), &employees, &schedules);
        assert_eq!(grid.week_start, date(2024, 1, 22));
        assert_eq!(grid.week_end, date(2024, 1, 28));
        assert_eq!(grid.previous_week, date(2024, 1, 17));
        assert_eq!(grid.next_week, date(2024, 1, 31));
        assert_eq!(grid.rows.len(), 2);

        let ann = &grid.rows[0];
        assert_eq!(ann.name, "Ann Tester");
        assert_eq!(ann.cells[0].schedule_id, Some(10));
        assert_eq!(ann.cells[0].status, Some(ScheduleStatus::Present));
        assert!(ann.cells[1..].iter().all(|cell| cell.status.is_none()));

        let ben = &grid.rows[1];
        assert_eq!(ben.cells[4].schedule_id, Some(12));
        assert_eq!(ben.cells[4].start_time.as_deref(), Some("09:00"));
        assert_eq!(ben.cells.iter().filter(|c| c.schedule_id.is_some()).count(), 1);

        assert_eq!(
            grid.counts,
            StatusCounts {
                scheduled: 1,
                present: 1,
                late: 1,
                absent: 1,
            }
        );
    }
}
