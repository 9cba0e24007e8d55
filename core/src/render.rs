//! Text presentation of students and of the list view.

use std::fmt;

use crate::types::Student;

pub const LOADING_TEXT: &str = "Loading students...";

/// One student rendered as a card, keyed by the student's id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentCard {
    pub key: i64,
    pub lines: Vec<String>,
}

/// Render one student. Pure field interpolation.
pub fn render_student(student: &Student) -> StudentCard {
    StudentCard {
        key: student.id,
        lines: vec![
            student.name.clone(),
            format!("Year {}", student.year),
            format!("Course: {}", student.course),
            format!("Email: {}", student.email),
            format!("Phone: {}", student.phone),
            format!("Website: {}", student.website),
        ],
    }
}

impl fmt::Display for StudentCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = self.lines.iter();
        if let Some(title) = lines.next() {
            writeln!(f, "{title}")?;
        }
        for line in lines {
            writeln!(f, "  {line}")?;
        }
        Ok(())
    }
}

/// What the students list shows for its current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRender {
    Loading,
    Error(String),
    /// The list container. May be empty.
    List(Vec<StudentCard>),
}

impl fmt::Display for ListRender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListRender::Loading => writeln!(f, "{LOADING_TEXT}"),
            ListRender::Error(message) => writeln!(f, "{message}"),
            ListRender::List(cards) => {
                for (i, card) in cards.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{card}")?;
                }
                Ok(())
            }
        }
    }
}
