use super::{cell, date_cell, Entity};
use crate::crud::field::{show_optional_date, show_optional_text};
use crate::crud::{BlankText, Field};
use crate::model::Task;
use chrono::NaiveDate;

impl Entity for Task {
    fn format(&self) -> (i64, String) {
        (self.id, format!("{} (archived={})", self.name, self.archived))
    }

    fn hint() -> Option<fn(&Self) -> String> {
        Some(|t: &Task| t.name.clone())
    }

    fn fields(seed: &Self, _today: NaiveDate) -> Vec<Field<Self>> {
        vec![
            Field::text("Task name", seed.name.clone(), |t: &mut Task, v| t.name = v),
            Field::optional_text(
                "Tag (optional)",
                show_optional_text(&seed.tag),
                BlankText::Absent,
                |t: &mut Task, v| t.tag = v,
            ),
            Field::optional_text(
                "Description (optional)",
                show_optional_text(&seed.description),
                BlankText::Empty,
                |t: &mut Task, v| t.description = v,
            ),
            Field::optional_date(
                "Target date (YYYY-MM-DD, optional)",
                show_optional_date(&seed.date_target),
                |t: &mut Task, v| t.date_target = v,
            ),
        ]
    }

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            cell(&self.tag),
            cell(&self.description),
            date_cell(&self.date_target),
            date_cell(&self.date_start),
            self.archived.to_string(),
        ]
    }

    fn before_insert(&mut self, today: NaiveDate) {
        self.date_start.get_or_insert(today);
    }
}
