use super::{cell, seed_date, Entity};
use crate::crud::field::{show_date, show_optional_integer, show_optional_text};
use crate::crud::{BlankText, Field};
use crate::model::Session;
use chrono::NaiveDate;

const SCORE_RANGE: std::ops::RangeInclusive<i64> = 1..=5;

fn check_score(s: &str) -> Result<(), String> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(());
    }
    match s.parse::<i64>() {
        Ok(n) if SCORE_RANGE.contains(&n) => Ok(()),
        _ => Err("score must be between 1 and 5".to_string()),
    }
}

impl Entity for Session {
    fn format(&self) -> (i64, String) {
        (
            self.id,
            format!(
                "task={} date={} dur={} score={} notes={}",
                self.task,
                show_date(&self.date),
                show_optional_integer(self.duration_mins),
                show_optional_integer(self.score_feedback),
                show_optional_text(&self.notes),
            ),
        )
    }

    fn fields(seed: &Self, today: NaiveDate) -> Vec<Field<Self>> {
        let task = if seed.id == 0 && seed.task == 0 {
            String::new()
        } else {
            seed.task.to_string()
        };
        vec![
            Field::integer("Task ID", task, |s: &mut Session, v| s.task = v),
            Field::date(
                "Session date (YYYY-MM-DD)",
                seed_date(seed.id, &seed.date, today),
                |s: &mut Session, v| s.date = v,
            ),
            Field::optional_integer(
                "Duration (minutes)",
                show_optional_integer(seed.duration_mins),
                |s: &mut Session, v| s.duration_mins = v,
            ),
            Field::optional_integer(
                "Score (1-5)",
                show_optional_integer(seed.score_feedback),
                |s: &mut Session, v| s.score_feedback = v,
            )
            .with_validator(check_score),
            Field::optional_text(
                "Notes (optional)",
                show_optional_text(&seed.notes),
                BlankText::Empty,
                |s: &mut Session, v| s.notes = v,
            ),
        ]
    }

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.task.to_string(),
            show_date(&self.date),
            cell(&self.duration_mins),
            cell(&self.score_feedback),
            cell(&self.notes),
        ]
    }
}
