use std::fmt::Write;

use super::{form, preview::SHEET_STYLE};
use crate::models::ReportRecord;

const APP_STYLE: &str = r#"
* { box-sizing: border-box; }
body {
  margin: 0;
  font-family: "Segoe UI", Helvetica, Arial, sans-serif;
  background: #e8eaed;
}
.builder-container {
  display: flex;
  min-height: 100vh;
  gap: 24px;
}
.form-section {
  width: 380px;
  flex-shrink: 0;
  padding: 24px;
  background: #fff;
  border-right: 1px solid #d0d3d8;
  overflow-y: auto;
}
.form-title {
  margin: 0 0 16px;
  font-size: 20px;
}
.form-group {
  margin-bottom: 12px;
}
.form-group label {
  display: block;
  font-size: 12px;
  font-weight: 600;
  color: #444;
  margin-bottom: 4px;
}
.form-group input,
.form-group textarea {
  width: 100%;
  padding: 7px 9px;
  font-size: 14px;
  font-family: inherit;
  border: 1px solid #c4c8cf;
  border-radius: 4px;
}
.print-btn {
  width: 100%;
  margin-top: 8px;
  padding: 10px;
  font-size: 15px;
  color: #fff;
  background: #1a56db;
  border: 0;
  border-radius: 4px;
  cursor: pointer;
}
.print-btn:hover {
  background: #174bbf;
}
.preview-section {
  flex-grow: 1;
  padding: 24px;
  overflow-y: auto;
}
.preview-section .a4-page {
  box-shadow: 0 2px 10px rgba(0, 0, 0, 0.25);
}
"#;

// Client glue: every input event serializes the controls into a whole
// record, replaces the stored record, and refetches the preview fragment.
// The print button only navigates when the preview pane is mounted.
const APP_SCRIPT: &str = r#"
(function () {
  var preview = document.getElementById('preview');
  var controls = document.querySelectorAll('.form-grid [name]');

  function currentRecord() {
    var record = {};
    controls.forEach(function (control) {
      record[control.name] = control.value;
    });
    return record;
  }

  function pushEdit() {
    fetch('/api/record', {
      method: 'PUT',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify(currentRecord()),
    })
      .then(function () { return fetch('/api/preview'); })
      .then(function (response) { return response.text(); })
      .then(function (markup) {
        if (preview) { preview.innerHTML = markup; }
      });
  }

  controls.forEach(function (control) {
    control.addEventListener('input', pushEdit);
  });

  document.getElementById('print-btn').addEventListener('click', function () {
    if (!preview) { return; }
    window.location.href = '/print';
  });
})();
"#;

/// Assemble the full editor page: form pane, preview pane, styles and the
/// client glue script, all inline so the binary serves a single document.
pub fn render(record: &ReportRecord, preview_markup: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<!DOCTYPE html>");
    let _ = writeln!(out, r#"<html lang="en">"#);
    let _ = writeln!(out, "<head>");
    let _ = writeln!(out, r#"<meta charset="utf-8">"#);
    let _ = writeln!(
        out,
        r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#
    );
    let _ = writeln!(out, "<title>Lab Report Editor</title>");
    let _ = writeln!(out, "<style>{}{}</style>", APP_STYLE, SHEET_STYLE);
    let _ = writeln!(out, "</head>");
    let _ = writeln!(out, "<body>");
    let _ = writeln!(out, r#"<div class="builder-container">"#);

    let _ = writeln!(out, r#"<div class="form-section">"#);
    let _ = writeln!(out, r#"<h2 class="form-title">Lab Report Editor</h2>"#);
    let _ = write!(out, "{}", form::render(record));
    let _ = writeln!(
        out,
        r#"<button id="print-btn" class="print-btn" type="button">Print / Save PDF</button>"#
    );
    let _ = writeln!(out, "</div>");

    let _ = writeln!(out, r#"<div class="preview-section">"#);
    let _ = writeln!(out, r#"<div id="preview">"#);
    let _ = write!(out, "{}", preview_markup);
    let _ = writeln!(out, "</div>");
    let _ = writeln!(out, "</div>");

    let _ = writeln!(out, "</div>");
    let _ = writeln!(out, "<script>{}</script>", APP_SCRIPT);
    let _ = writeln!(out, "</body>");
    let _ = writeln!(out, "</html>");
    out
}
