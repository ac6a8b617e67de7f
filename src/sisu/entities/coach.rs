use super::{date_cell, Entity};
use crate::crud::field::show_optional_date;
use crate::crud::Field;
use crate::model::Coach;
use chrono::NaiveDate;

impl Entity for Coach {
    fn format(&self) -> (i64, String) {
        (
            self.id,
            format!(
                "trigger={} content={} date={}",
                self.trigger,
                self.content,
                show_optional_date(&self.date),
            ),
        )
    }

    fn hint() -> Option<fn(&Self) -> String> {
        Some(|c: &Coach| c.trigger.clone())
    }

    fn fields(seed: &Self, _today: NaiveDate) -> Vec<Field<Self>> {
        vec![
            Field::text("Trigger", seed.trigger.clone(), |c: &mut Coach, v| c.trigger = v),
            Field::text("Content", seed.content.clone(), |c: &mut Coach, v| c.content = v),
            Field::optional_date(
                "Date (YYYY-MM-DD, optional)",
                show_optional_date(&seed.date),
                |c: &mut Coach, v| c.date = v,
            ),
        ]
    }

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.trigger.clone(),
            self.content.clone(),
            date_cell(&self.date),
        ]
    }
}
