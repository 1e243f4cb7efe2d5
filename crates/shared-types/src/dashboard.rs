use serde::de::{DeserializeOwned, Deserializer, Error as _};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

// ---------------------------------------------------------------------------
// Lenient field helpers
// ---------------------------------------------------------------------------

/// A list field that tolerates a non-list value by treating it as empty.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => serde_json::from_value(Value::Array(items)).map_err(D::Error::custom),
        _ => Ok(Vec::new()),
    }
}

/// A text field that may arrive as a string or a number.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// A numeric grade value as sent by the backend.
///
/// Decimal columns arrive as strings (`"87.50"`), computed ones as numbers;
/// anything that does not parse as a finite number is kept for display but
/// excluded from arithmetic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Score(pub Value);

impl Score {
    pub fn as_f64(&self) -> Option<f64> {
        match &self.0 {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
        .filter(|v| v.is_finite())
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            Value::Null => f.write_str("-"),
            other => write!(f, "{other}"),
        }
    }
}

impl From<f64> for Score {
    fn from(v: f64) -> Self {
        Score(serde_json::json!(v))
    }
}

impl From<&str> for Score {
    fn from(v: &str) -> Self {
        Score(Value::String(v.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Grade records
// ---------------------------------------------------------------------------

/// One student's grade in one course (read-only, backend-owned).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GradeRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub course_code: Option<String>,
    #[serde(default)]
    pub course_name: Option<String>,
    #[serde(default)]
    pub course_credits: Option<u32>,
    #[serde(default)]
    pub instructor_name: Option<String>,
    #[serde(default)]
    pub student_name: Option<String>,
    #[serde(default)]
    pub assignment_score: Option<Score>,
    #[serde(default)]
    pub midterm_score: Option<Score>,
    #[serde(default)]
    pub final_score: Option<Score>,
    #[serde(default)]
    pub final_grade: Option<Score>,
    #[serde(default)]
    pub letter_grade: Option<String>,
    #[serde(default)]
    pub grade_point: Option<f64>,
}

impl GradeRecord {
    /// Numeric final grade, if the backend sent one.
    pub fn final_grade_value(&self) -> Option<f64> {
        self.final_grade.as_ref().and_then(Score::as_f64)
    }

    /// Grade point from the backend, else derived from the letter grade.
    pub fn grade_point_value(&self) -> Option<f64> {
        self.grade_point
            .or_else(|| self.letter_grade.as_deref().and_then(grade_point))
    }

    pub fn tier(&self) -> GradeTier {
        GradeTier::of(self.letter_grade.as_deref())
    }
}

/// Mean of the numeric final grades. Records whose grade is missing or
/// non-numeric are left out of both the sum and the count.
pub fn average_final_grade<'a, I>(grades: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a GradeRecord>,
{
    let (sum, count) = grades
        .into_iter()
        .filter_map(GradeRecord::final_grade_value)
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Grade points per letter grade.
const GRADE_POINTS: &[(&str, f64)] = &[
    ("A", 4.0),
    ("A-", 3.7),
    ("B+", 3.3),
    ("B", 3.0),
    ("B-", 2.7),
    ("C+", 2.3),
    ("C", 2.0),
    ("D", 1.0),
    ("E", 0.0),
];

/// Grade point for a letter grade, `None` for unknown letters.
pub fn grade_point(letter: &str) -> Option<f64> {
    let letter = letter.trim();
    GRADE_POINTS
        .iter()
        .find(|(l, _)| *l == letter)
        .map(|(_, p)| *p)
}

/// Display bucket of a letter grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeTier {
    A,
    B,
    C,
    Low,
    Ungraded,
}

impl GradeTier {
    pub fn of(letter: Option<&str>) -> Self {
        match letter.map(str::trim) {
            None | Some("") => GradeTier::Ungraded,
            Some(l) if l.starts_with('A') => GradeTier::A,
            Some(l) if l.starts_with('B') => GradeTier::B,
            Some(l) if l.starts_with('C') => GradeTier::C,
            Some(_) => GradeTier::Low,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            GradeTier::A => "grade-a",
            GradeTier::B => "grade-b",
            GradeTier::C => "grade-c",
            GradeTier::Low => "grade-low",
            GradeTier::Ungraded => "grade-none",
        }
    }
}

/// Two decimals, or `"N/A"` when there is nothing to show.
pub fn format_score(value: Option<f64>) -> String {
    value
        .map(|v| format!("{v:.2}"))
        .unwrap_or_else(|| "N/A".to_string())
}

// ---------------------------------------------------------------------------
// Student dashboard
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StudentProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub major: Option<String>,
}

/// Statistics as computed by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StudentStatistics {
    #[serde(default)]
    pub total_courses: Option<u32>,
    #[serde(default)]
    pub gpa: Option<f64>,
    #[serde(default)]
    pub total_credits: Option<u32>,
}

/// Body of `GET /api/dashboard/student/?email=`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StudentDashboard {
    #[serde(default)]
    pub student: StudentProfile,
    #[serde(default)]
    pub statistics: StudentStatistics,
    #[serde(default, deserialize_with = "lenient_list")]
    pub grades: Vec<GradeRecord>,
}

/// Aggregates shown on the student dashboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StudentSummary {
    pub gpa: Option<f64>,
    pub total_courses: usize,
    pub total_credits: u32,
}

impl StudentDashboard {
    pub fn summary(&self) -> StudentSummary {
        StudentSummary {
            gpa: average_final_grade(&self.grades),
            total_courses: self.grades.len(),
            total_credits: self.grades.iter().filter_map(|g| g.course_credits).sum(),
        }
    }
}

// ---------------------------------------------------------------------------
// Instructor dashboard
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InstructorProfile {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub major: Option<String>,
}

/// A course taught by the instructor with its enrolled students' grades.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CourseRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub credits: Option<u32>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub semester: String,
    #[serde(default, deserialize_with = "lenient_list")]
    pub grades: Vec<GradeRecord>,
}

impl CourseRecord {
    pub fn student_count(&self) -> usize {
        self.grades.len()
    }

    pub fn average_final_grade(&self) -> Option<f64> {
        average_final_grade(&self.grades)
    }
}

/// Body of `GET /api/dashboard/instructor/?email=`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InstructorDashboard {
    #[serde(default)]
    pub instructor: InstructorProfile,
    #[serde(default, deserialize_with = "lenient_list")]
    pub courses: Vec<CourseRecord>,
}

/// Aggregates shown on the instructor dashboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstructorSummary {
    pub total_courses: usize,
    pub total_students: usize,
    pub total_credits: u32,
    pub average_score: Option<f64>,
}

impl InstructorDashboard {
    pub fn summary(&self) -> InstructorSummary {
        InstructorSummary {
            total_courses: self.courses.len(),
            total_students: self.courses.iter().map(CourseRecord::student_count).sum(),
            total_credits: self.courses.iter().filter_map(|c| c.credits).sum(),
            average_score: average_final_grade(self.courses.iter().flat_map(|c| &c.grades)),
        }
    }
}
