use crate::store::Record;
use chrono::NaiveDate;
use rusqlite::{Row, ToSql};
use serde::{Deserialize, Serialize};

/// A high-level routine or goal that sessions, milestones and reviews point at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub name: String,
    pub tag: Option<String>,
    pub description: Option<String>,
    pub date_target: Option<NaiveDate>,
    pub date_start: Option<NaiveDate>,
    pub archived: bool,
}

impl Task {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }
}

/// One block of work logged against a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: i64,
    pub task: i64,
    pub date: NaiveDate,
    pub duration_mins: Option<i64>,
    pub score_feedback: Option<i64>,
    pub notes: Option<String>,
}

/// Incentive, streak or mastery checkpoint for a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: i64,
    pub task: i64,
    /// Stored in the `type` column
    pub kind: Option<String>,
    pub value: Option<i64>,
    pub achieved: Option<NaiveDate>,
    pub message: Option<String>,
}

/// Weekly look back at a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub task: i64,
    pub week: Option<i64>,
    pub summary: Option<String>,
}

/// A motivational message shown when its trigger comes up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coach {
    pub id: i64,
    pub trigger: String,
    pub content: String,
    pub date: Option<NaiveDate>,
}

/// A free-form note pinned to a day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarNote {
    pub id: i64,
    pub date: NaiveDate,
    pub note: String,
}

impl Record for Task {
    const TABLE: &'static str = "tasks";
    const SINGULAR: &'static str = "task";
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "tag",
        "description",
        "date_target",
        "date_start",
        "archived",
    ];

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn to_params(&self) -> Vec<Box<dyn ToSql>> {
        vec![
            Box::new(self.name.clone()),
            Box::new(self.tag.clone()),
            Box::new(self.description.clone()),
            Box::new(self.date_target),
            Box::new(self.date_start),
            Box::new(self.archived),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            tag: row.get(2)?,
            description: row.get(3)?,
            date_target: row.get(4)?,
            date_start: row.get(5)?,
            archived: row.get(6)?,
        })
    }
}

impl Record for Session {
    const TABLE: &'static str = "sessions";
    const SINGULAR: &'static str = "session";
    const COLUMNS: &'static [&'static str] =
        &["task", "date", "duration_mins", "score_feedback", "notes"];

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn to_params(&self) -> Vec<Box<dyn ToSql>> {
        vec![
            Box::new(self.task),
            Box::new(self.date),
            Box::new(self.duration_mins),
            Box::new(self.score_feedback),
            Box::new(self.notes.clone()),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            task: row.get(1)?,
            date: row.get(2)?,
            duration_mins: row.get(3)?,
            score_feedback: row.get(4)?,
            notes: row.get(5)?,
        })
    }
}

impl Record for Milestone {
    const TABLE: &'static str = "milestones";
    const SINGULAR: &'static str = "milestone";
    const COLUMNS: &'static [&'static str] = &["task", "type", "value", "achieved", "message"];

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn to_params(&self) -> Vec<Box<dyn ToSql>> {
        vec![
            Box::new(self.task),
            Box::new(self.kind.clone()),
            Box::new(self.value),
            Box::new(self.achieved),
            Box::new(self.message.clone()),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            task: row.get(1)?,
            kind: row.get(2)?,
            value: row.get(3)?,
            achieved: row.get(4)?,
            message: row.get(5)?,
        })
    }
}

impl Record for Review {
    const TABLE: &'static str = "reviews";
    const SINGULAR: &'static str = "review";
    const COLUMNS: &'static [&'static str] = &["task", "week", "summary"];

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn to_params(&self) -> Vec<Box<dyn ToSql>> {
        vec![
            Box::new(self.task),
            Box::new(self.week),
            Box::new(self.summary.clone()),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            task: row.get(1)?,
            week: row.get(2)?,
            summary: row.get(3)?,
        })
    }
}

impl Record for Coach {
    const TABLE: &'static str = "coach";
    const SINGULAR: &'static str = "coach";
    const COLUMNS: &'static [&'static str] = &["trigger", "content", "date"];

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn to_params(&self) -> Vec<Box<dyn ToSql>> {
        vec![
            Box::new(self.trigger.clone()),
            Box::new(self.content.clone()),
            Box::new(self.date),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            trigger: row.get(1)?,
            content: row.get(2)?,
            date: row.get(3)?,
        })
    }
}

impl Record for CalendarNote {
    const TABLE: &'static str = "calendar";
    const SINGULAR: &'static str = "calendar";
    const COLUMNS: &'static [&'static str] = &["date", "note"];

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn to_params(&self) -> Vec<Box<dyn ToSql>> {
        vec![Box::new(self.date), Box::new(self.note.clone())]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            date: row.get(1)?,
            note: row.get(2)?,
        })
    }
}
