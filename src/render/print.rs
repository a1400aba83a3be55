use std::sync::Arc;
use tokio::sync::RwLock;

use super::preview::SHEET_STYLE;

/// Glue for the scoped print view. Whenever the preview is rendered its
/// markup is captured here; the print route wraps the captured markup in a
/// standalone document. With no capture yet, printing is a no-op.
#[derive(Clone, Default)]
pub struct PrintController {
    snapshot: Arc<RwLock<Option<String>>>,
}

impl PrintController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the markup of the most recently rendered preview.
    pub async fn capture(&self, markup: &str) {
        *self.snapshot.write().await = Some(markup.to_string());
    }

    pub async fn has_snapshot(&self) -> bool {
        self.snapshot.read().await.is_some()
    }

    /// The standalone printable document, or `None` when no preview has
    /// been rendered yet.
    pub async fn document(&self) -> Option<String> {
        let guard = self.snapshot.read().await;
        guard.as_deref().map(render_document)
    }
}

const PRINT_STYLE: &str = r#"
html, body {
  margin: 0;
  padding: 0;
  background: #fff;
}
@page {
  size: A4;
  margin: 0;
}
@media print {
  .a4-page {
    margin: 0;
  }
}
"#;

// Opens the platform print dialog once the document is laid out, then hands
// control back to the editor. State is rebuilt from the store on the way in.
const PRINT_SCRIPT: &str = r#"
window.addEventListener('load', function () {
  window.print();
});
window.addEventListener('afterprint', function () {
  window.location.replace('/');
});
"#;

/// Wrap captured preview markup in a complete printable page.
pub fn render_document(markup: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"en\">\n",
            "<head>\n",
            "<meta charset=\"utf-8\">\n",
            "<title>Lab Report</title>\n",
            "<style>{sheet}{print}</style>\n",
            "</head>\n",
            "<body>\n",
            "{markup}\n",
            "<script>{script}</script>\n",
            "</body>\n",
            "</html>\n"
        ),
        sheet = SHEET_STYLE,
        print = PRINT_STYLE,
        markup = markup,
        script = PRINT_SCRIPT,
    )
}
