use std::fmt::Write;

use super::escape;
use crate::models::{Field, ReportRecord};

/// Styles for the cover sheet itself, shared between the editor's preview
/// pane and the standalone print document.
pub const SHEET_STYLE: &str = r#"
.a4-page {
  width: 210mm;
  min-height: 297mm;
  box-sizing: border-box;
  margin: 0 auto;
  padding: 28mm 22mm;
  background: #fff;
  color: #111;
  font-family: Georgia, "Times New Roman", serif;
  text-align: center;
}
.a4-page .university {
  font-size: 26px;
  margin: 0 0 18px;
}
.a4-page .logo-box {
  margin: 0 auto 18px;
  width: 140px;
  height: 140px;
}
.a4-page .lab-title {
  font-size: 22px;
  letter-spacing: 2px;
  margin: 10px 0 4px;
}
.a4-page .divider {
  width: 60%;
  margin: 8px auto 16px;
  border: 0;
  border-top: 2px solid #111;
}
.a4-page .department {
  font-size: 15px;
  margin: 0 0 28px;
}
.a4-page .course-info p {
  margin: 2px 0;
}
.a4-page .submission-table {
  display: flex;
  justify-content: space-between;
  text-align: left;
  margin: 40px 10mm 0;
}
.a4-page .submission-table h3 {
  border-bottom: 1px solid #111;
  padding-bottom: 4px;
  margin-bottom: 8px;
}
.a4-page .submission-table p {
  margin: 3px 0;
}
.a4-page .submission-table .right {
  max-width: 45%;
}
.a4-page .submission-date {
  margin-top: 48px;
  text-align: left;
  padding-left: 10mm;
}
"#;

/// Render the record into the fixed academic cover-page structure. Purely
/// presentational; always reflects the record it is given.
pub fn render(record: &ReportRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, r#"<div class="a4-page">"#);
    let _ = writeln!(
        out,
        r#"<h1 class="university">{}</h1>"#,
        escape(&record.university)
    );
    let _ = writeln!(
        out,
        r#"<div class="logo-box">{}</div>"#,
        logo_seal(&record.university)
    );
    let _ = writeln!(
        out,
        r#"<h2 class="lab-title">{}</h2>"#,
        escape(&record.lab_title)
    );
    let _ = writeln!(out, r#"<hr class="divider">"#);
    let _ = writeln!(
        out,
        r#"<p class="department">{}</p>"#,
        escape(&record.department)
    );

    let _ = writeln!(out, r#"<div class="course-info">"#);
    let _ = writeln!(
        out,
        "<p><strong>Course Title:</strong> {}</p>",
        escape(&record.course_title)
    );
    let _ = writeln!(
        out,
        "<p><strong>Course Code:</strong> {}</p>",
        escape(&record.course_code)
    );
    let _ = writeln!(out, "</div>");

    let _ = writeln!(out, r#"<div class="submission-table">"#);
    let _ = writeln!(out, r#"<div class="left">"#);
    let _ = writeln!(out, "<h3>Submitted by</h3>");
    let _ = writeln!(out, "<p><strong>Name:</strong> {}</p>", escape(&record.name));
    let _ = writeln!(out, "<p><strong>ID No:</strong> {}</p>", escape(&record.id));
    let _ = writeln!(
        out,
        "<p><strong>Semester:</strong> {}</p>",
        escape(&record.semester)
    );
    let _ = writeln!(
        out,
        "<p><strong>Program:</strong> {}</p>",
        escape(&record.program)
    );
    let _ = writeln!(out, "</div>");
    let _ = writeln!(out, r#"<div class="right">"#);
    let _ = writeln!(out, "<h3>Submitted to</h3>");
    let _ = writeln!(
        out,
        "<p><strong>{}</strong></p>",
        escape(&record.submitted_to)
    );
    let _ = writeln!(out, "<p>{}</p>", multiline(record.get(Field::Designation)));
    let _ = writeln!(out, "</div>");
    let _ = writeln!(out, "</div>");

    let _ = writeln!(
        out,
        r#"<div class="submission-date"><strong>Submission Date:</strong> {}</div>"#,
        escape(&record.submission_date)
    );
    let _ = writeln!(out, "</div>");
    out
}

/// Escape, then keep line breaks from the multi-line control.
fn multiline(text: &str) -> String {
    escape(text).replace('\n', "<br>")
}

/// Placeholder crest: a circled monogram built from the university name,
/// so the cover keeps its seal without bundling an image asset.
fn logo_seal(university: &str) -> String {
    format!(
        concat!(
            r##"<svg viewBox="0 0 140 140" width="140" height="140" role="img" aria-label="University Logo">"##,
            r##"<circle cx="70" cy="70" r="66" fill="none" stroke="#111" stroke-width="3"/>"##,
            r##"<circle cx="70" cy="70" r="54" fill="none" stroke="#111" stroke-width="1.5"/>"##,
            r##"<text x="70" y="82" text-anchor="middle" font-size="34" font-family="Georgia, serif">{}</text>"##,
            "</svg>"
        ),
        escape(&monogram(university))
    )
}

/// First letters of up to three capitalized words.
fn monogram(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .filter(|c| c.is_uppercase())
        .take(3)
        .collect()
}
