use super::{cell, Entity};
use crate::crud::field::{show_optional_integer, show_optional_text};
use crate::crud::{BlankText, Field, TableSpec};
use crate::model::Review;
use chrono::NaiveDate;

fn row(r: &Review) -> Vec<String> {
    vec![
        r.id.to_string(),
        r.task.to_string(),
        show_optional_integer(r.week),
        show_optional_text(&r.summary),
    ]
}

impl Entity for Review {
    fn format(&self) -> (i64, String) {
        (
            self.id,
            format!(
                "task={} week={} summary={}",
                self.task,
                show_optional_integer(self.week),
                show_optional_text(&self.summary),
            ),
        )
    }

    fn table() -> Option<TableSpec<Self>> {
        Some(TableSpec {
            headers: &["id", "task", "week", "summary"],
            row,
        })
    }

    fn fields(seed: &Self, _today: NaiveDate) -> Vec<Field<Self>> {
        let task = if seed.id == 0 && seed.task == 0 {
            String::new()
        } else {
            seed.task.to_string()
        };
        vec![
            Field::integer("Task ID", task, |r: &mut Review, v| r.task = v),
            Field::optional_integer(
                "Week (optional)",
                show_optional_integer(seed.week),
                |r: &mut Review, v| r.week = v,
            ),
            Field::optional_text(
                "Summary (optional)",
                show_optional_text(&seed.summary),
                BlankText::Empty,
                |r: &mut Review, v| r.summary = v,
            ),
        ]
    }

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.task.to_string(),
            cell(&self.week),
            cell(&self.summary),
        ]
    }
}
