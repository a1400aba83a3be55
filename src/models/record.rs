use serde::{Deserialize, Serialize};

/// One lab report cover page.
///
/// Serialized keys are camelCase so the stored blob keeps the shape the
/// editor has always written (`{"university": ..., "labTitle": ...}`).
/// Missing keys deserialize as empty strings; unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportRecord {
    pub university: String,
    pub lab_title: String,
    pub department: String,
    pub course_title: String,
    pub course_code: String,
    pub name: String,
    pub id: String,
    pub semester: String,
    pub program: String,
    pub submitted_to: String,
    pub designation: String,
    pub submission_date: String,
}

/// The fixed set of record fields. Nothing is added or removed at runtime;
/// the form, the preview and the CLI all iterate [`Field::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    University,
    LabTitle,
    Department,
    CourseTitle,
    CourseCode,
    Name,
    Id,
    Semester,
    Program,
    SubmittedTo,
    Designation,
    SubmissionDate,
}

impl Field {
    pub const ALL: [Field; 12] = [
        Field::University,
        Field::LabTitle,
        Field::Department,
        Field::CourseTitle,
        Field::CourseCode,
        Field::Name,
        Field::Id,
        Field::Semester,
        Field::Program,
        Field::SubmittedTo,
        Field::Designation,
        Field::SubmissionDate,
    ];

    /// The field's JSON key, as used in the stored blob and as the form
    /// control name.
    pub fn name(self) -> &'static str {
        match self {
            Field::University => "university",
            Field::LabTitle => "labTitle",
            Field::Department => "department",
            Field::CourseTitle => "courseTitle",
            Field::CourseCode => "courseCode",
            Field::Name => "name",
            Field::Id => "id",
            Field::Semester => "semester",
            Field::Program => "program",
            Field::SubmittedTo => "submittedTo",
            Field::Designation => "designation",
            Field::SubmissionDate => "submissionDate",
        }
    }

    /// Human label shown next to the form control.
    pub fn label(self) -> &'static str {
        match self {
            Field::University => "University Name",
            Field::LabTitle => "Lab Title",
            Field::Department => "Department",
            Field::CourseTitle => "Course Title",
            Field::CourseCode => "Course Code",
            Field::Name => "Student Name",
            Field::Id => "Student ID",
            Field::Semester => "Semester",
            Field::Program => "Program",
            Field::SubmittedTo => "Submitted To",
            Field::Designation => "Designation",
            Field::SubmissionDate => "Submission Date",
        }
    }

    /// Designation is the only field edited in a multi-line control.
    pub fn is_multiline(self) -> bool {
        matches!(self, Field::Designation)
    }

    pub fn parse(name: &str) -> Option<Field> {
        Field::ALL.iter().copied().find(|f| f.name() == name)
    }
}

impl ReportRecord {
    /// The built-in demonstration record used when nothing has been saved.
    pub fn sample() -> Self {
        Self {
            university: "Central University of Science & Technology".to_string(),
            lab_title: "LAB REPORT".to_string(),
            department: "Department of Computer Science and Engineering".to_string(),
            course_title: "Computer Graphics Lab".to_string(),
            course_code: "CSE 408".to_string(),
            name: "MD Shoeb Abedin".to_string(),
            id: "08923100051010".to_string(),
            semester: "Fall 2025".to_string(),
            program: "B.Sc in CSE".to_string(),
            submitted_to: "MD Hasan Al Mamun".to_string(),
            designation: "Lecturer, Department of CSE, Central University of Science & Technology."
                .to_string(),
            submission_date: String::new(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::University => &self.university,
            Field::LabTitle => &self.lab_title,
            Field::Department => &self.department,
            Field::CourseTitle => &self.course_title,
            Field::CourseCode => &self.course_code,
            Field::Name => &self.name,
            Field::Id => &self.id,
            Field::Semester => &self.semester,
            Field::Program => &self.program,
            Field::SubmittedTo => &self.submitted_to,
            Field::Designation => &self.designation,
            Field::SubmissionDate => &self.submission_date,
        }
    }

    /// Returns a copy with one field replaced. Edits always go through a
    /// whole-record replacement, never in-place mutation.
    #[must_use]
    pub fn with_field(&self, field: Field, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let slot = match field {
            Field::University => &mut next.university,
            Field::LabTitle => &mut next.lab_title,
            Field::Department => &mut next.department,
            Field::CourseTitle => &mut next.course_title,
            Field::CourseCode => &mut next.course_code,
            Field::Name => &mut next.name,
            Field::Id => &mut next.id,
            Field::Semester => &mut next.semester,
            Field::Program => &mut next.program,
            Field::SubmittedTo => &mut next.submitted_to,
            Field::Designation => &mut next.designation,
            Field::SubmissionDate => &mut next.submission_date,
        };
        *slot = value.into();
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_values() {
        let record = ReportRecord::sample();
        assert_eq!(
            record.university,
            "Central University of Science & Technology"
        );
        assert_eq!(record.course_code, "CSE 408");
        assert_eq!(record.submission_date, "");
    }

    #[test]
    fn test_with_field_changes_exactly_one_field() {
        let base = ReportRecord::sample();
        for field in Field::ALL {
            let edited = base.with_field(field, "changed");
            for other in Field::ALL {
                if other == field {
                    assert_eq!(edited.get(other), "changed");
                } else {
                    assert_eq!(edited.get(other), base.get(other));
                }
            }
        }
    }

    #[test]
    fn test_field_parse_roundtrip() {
        for field in Field::ALL {
            assert_eq!(Field::parse(field.name()), Some(field));
        }
        assert_eq!(Field::parse("nonexistent"), None);
        // Labels are not keys
        assert_eq!(Field::parse("University Name"), None);
    }

    #[test]
    fn test_serialized_keys_are_camel_case() {
        let json = serde_json::to_value(ReportRecord::sample()).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), Field::ALL.len());
        for field in Field::ALL {
            assert!(obj.contains_key(field.name()), "missing {}", field.name());
        }
    }

    #[test]
    fn test_missing_keys_deserialize_empty() {
        let record: ReportRecord =
            serde_json::from_str(r#"{"university": "Somewhere Tech"}"#).unwrap();
        assert_eq!(record.university, "Somewhere Tech");
        assert_eq!(record.lab_title, "");
        assert_eq!(record.designation, "");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let record: ReportRecord =
            serde_json::from_str(r#"{"name": "A Student", "legacyField": 42}"#).unwrap();
        assert_eq!(record.name, "A Student");
    }
}
