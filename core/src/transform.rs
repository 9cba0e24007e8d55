//! Raw user to student mapping.
//!
//! The demo API has no notion of courses or year levels, so both are derived
//! from the record's position in the response. This is a placeholder policy
//! for demo data, not a statement about the person behind the record.

use crate::types::{RawUser, Student};

/// Course names, assigned round-robin by position.
pub const COURSES: [&str; 10] = [
    "BS Computer Science",
    "BS Information Technology",
    "BS Information Systems",
    "BS Computer Engineering",
    "BS Electronics Engineering",
    "BS Civil Engineering",
    "BS Accountancy",
    "BS Business Administration",
    "BS Nursing",
    "BS Psychology",
];

/// Number of year levels; years cycle through `1..=YEAR_LEVELS`.
pub const YEAR_LEVELS: usize = 4;

const EMAIL_DOMAIN: &str = "student.edu.ph";
const WEBSITE_SUFFIX: &str = "edu.ph";
const PHONE_PREFIX: &str = "+63";
const PHONE_DIGITS: usize = 10;

/// Map every raw user to a student, preserving order.
pub fn transform(users: &[RawUser]) -> Vec<Student> {
    users
        .iter()
        .enumerate()
        .map(|(index, user)| to_student(user, index))
        .collect()
}

/// Map one raw user sitting at `index` in the response.
pub fn to_student(user: &RawUser, index: usize) -> Student {
    let name = NameParts::parse(&user.name);
    Student {
        id: user.id,
        name: user.name.clone(),
        course: course_for(index).to_string(),
        year: year_for(index),
        email: format!("{}.{}@{EMAIL_DOMAIN}", name.first, name.last),
        phone: format_phone(&user.phone),
        website: format!("{}-{}.{WEBSITE_SUFFIX}", name.first, name.last),
    }
}

pub fn course_for(index: usize) -> &'static str {
    COURSES[index % COURSES.len()]
}

pub fn year_for(index: usize) -> String {
    (index % YEAR_LEVELS + 1).to_string()
}

/// Lower-cased first and last name tokens used to synthesize addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameParts {
    pub first: String,
    pub last: String,
}

impl NameParts {
    /// Split on whitespace. A single token serves as both first and last
    /// name; an empty name falls back to `student` / `user`.
    pub fn parse(name: &str) -> Self {
        let mut tokens = name.split_whitespace();
        let first = tokens.next();
        let last = tokens.last().or(first);
        Self {
            first: first.map_or_else(|| "student".to_string(), str::to_lowercase),
            last: last.map_or_else(|| "user".to_string(), str::to_lowercase),
        }
    }
}

/// Format the first ten digits of `raw` as `+63 ddd ddd dddd`.
///
/// Non-digits are dropped first. With fewer than ten digits each group takes
/// whatever digits reach it, so groups can come out short or empty.
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(PHONE_DIGITS)
        .collect();
    let group = |start: usize, end: usize| {
        let len = digits.len();
        digits.get(start.min(len)..end.min(len)).unwrap_or_default()
    };
    format!(
        "{PHONE_PREFIX} {} {} {}",
        group(0, 3),
        group(3, 6),
        group(6, PHONE_DIGITS)
    )
}
