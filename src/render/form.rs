use std::fmt::Write;

use super::escape;
use crate::models::{Field, ReportRecord};

/// Render the editable form pane: one labeled control per record field,
/// a multi-line control only for the designation field. Control names are
/// the record's JSON keys; the client glue serializes them back into a
/// whole-record update on every input event.
pub fn render(record: &ReportRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, r#"<div class="form-grid">"#);

    for field in Field::ALL {
        let name = field.name();
        let _ = writeln!(out, r#"<div class="form-group">"#);
        let _ = writeln!(
            out,
            r#"<label for="{}">{}</label>"#,
            name,
            escape(field.label())
        );
        if field.is_multiline() {
            let _ = writeln!(
                out,
                r#"<textarea id="{}" name="{}" rows="3">{}</textarea>"#,
                name,
                name,
                escape(record.get(field))
            );
        } else {
            let _ = writeln!(
                out,
                r#"<input type="text" id="{}" name="{}" value="{}">"#,
                name,
                name,
                escape(record.get(field))
            );
        }
        let _ = writeln!(out, "</div>");
    }

    let _ = writeln!(out, "</div>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Field;

    #[test]
    fn test_renders_one_control_per_field() {
        let html = render(&ReportRecord::sample());
        for field in Field::ALL {
            assert!(
                html.contains(&format!(r#"name="{}""#, field.name())),
                "missing control for {}",
                field.name()
            );
        }
        assert_eq!(html.matches(r#"<div class="form-group">"#).count(), 12);
    }

    #[test]
    fn test_designation_is_the_only_textarea() {
        let html = render(&ReportRecord::sample());
        assert_eq!(html.matches("<textarea").count(), 1);
        assert!(html.contains(r#"<textarea id="designation""#));
        assert_eq!(html.matches(r#"<input type="text""#).count(), 11);
    }

    #[test]
    fn test_values_are_escaped() {
        let record = ReportRecord::sample().with_field(Field::Name, r#""><script>"#);
        let html = render(&record);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
    }

    #[test]
    fn test_labels_come_from_the_catalog() {
        let html = render(&ReportRecord::sample());
        assert!(html.contains("<label for=\"university\">University Name</label>"));
        assert!(html.contains("<label for=\"submittedTo\">Submitted To</label>"));
    }
}
