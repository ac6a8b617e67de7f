use super::{seed_date, Entity};
use crate::crud::field::show_date;
use crate::crud::Field;
use crate::model::CalendarNote;
use chrono::NaiveDate;

impl Entity for CalendarNote {
    fn format(&self) -> (i64, String) {
        (
            self.id,
            format!("date={} note={}", show_date(&self.date), self.note),
        )
    }

    fn fields(seed: &Self, today: NaiveDate) -> Vec<Field<Self>> {
        vec![
            Field::date(
                "Date (YYYY-MM-DD)",
                seed_date(seed.id, &seed.date, today),
                |c: &mut CalendarNote, v| c.date = v,
            ),
            Field::text("Note", seed.note.clone(), |c: &mut CalendarNote, v| c.note = v),
        ]
    }

    fn csv_row(&self) -> Vec<String> {
        vec![self.id.to_string(), show_date(&self.date), self.note.clone()]
    }
}
