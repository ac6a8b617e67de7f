use super::{cell, date_cell, Entity};
use crate::crud::field::{show_optional_date, show_optional_integer, show_optional_text};
use crate::crud::{BlankText, Field};
use crate::model::Milestone;
use chrono::NaiveDate;

impl Entity for Milestone {
    fn format(&self) -> (i64, String) {
        (
            self.id,
            format!(
                "task={} type={} value={} achieved={} msg={}",
                self.task,
                show_optional_text(&self.kind),
                show_optional_integer(self.value),
                show_optional_date(&self.achieved),
                show_optional_text(&self.message),
            ),
        )
    }

    fn fields(seed: &Self, _today: NaiveDate) -> Vec<Field<Self>> {
        let task = if seed.id == 0 && seed.task == 0 {
            String::new()
        } else {
            seed.task.to_string()
        };
        vec![
            Field::integer("Task ID", task, |m: &mut Milestone, v| m.task = v),
            Field::optional_text(
                "Type (optional)",
                show_optional_text(&seed.kind),
                BlankText::Absent,
                |m: &mut Milestone, v| m.kind = v,
            ),
            Field::optional_integer(
                "Value (optional)",
                show_optional_integer(seed.value),
                |m: &mut Milestone, v| m.value = v,
            ),
            Field::optional_date(
                "Achieved date (YYYY-MM-DD, optional)",
                show_optional_date(&seed.achieved),
                |m: &mut Milestone, v| m.achieved = v,
            ),
            Field::optional_text(
                "Message (optional)",
                show_optional_text(&seed.message),
                BlankText::Empty,
                |m: &mut Milestone, v| m.message = v,
            ),
        ]
    }

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.task.to_string(),
            cell(&self.kind),
            cell(&self.value),
            date_cell(&self.achieved),
            cell(&self.message),
        ]
    }
}
