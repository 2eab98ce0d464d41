use crate::template_engine::escape_html;

const TAILWIND_CDN: &str = r#"<script src="https://cdn.tailwindcss.com"></script>"#;

const PRINT_STYLE: &str = "<style>@media print { @page { margin: 0; } \
    body { -webkit-print-color-adjust: exact; } }</style>";

// Tailwind's CDN build styles the page after load; give it a moment before printing.
const PRINT_SCRIPT: &str = "<script>window.addEventListener('load', function () { \
    setTimeout(function () { window.print(); }, 500); });</script>";

/// Full HTML document for downloading the rendered markup.
pub fn standalone_document(full_name: &str, markup: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{} Resume</title>{TAILWIND_CDN}</head><body>{markup}</body></html>",
        escape_html(full_name)
    )
}

/// Document that opens the browser print dialog once loaded.
pub fn print_document(full_name: &str, markup: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{} - Resume</title>{TAILWIND_CDN}{PRINT_STYLE}</head><body>{markup}{PRINT_SCRIPT}</body></html>",
        escape_html(full_name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standalone_document_shell() {
        assert_eq!(
            standalone_document("Ada", "<p>x</p>"),
            "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>Ada Resume</title>\
             <script src=\"https://cdn.tailwindcss.com\"></script></head><body><p>x</p></body></html>"
        );
    }

    #[test]
    fn test_title_is_escaped() {
        let doc = standalone_document("</title><script>alert(1)</script>", "");
        assert!(doc.contains("<title>&lt;/title&gt;&lt;script&gt;alert(1)&lt;/script&gt; Resume</title>"));
    }

    #[test]
    fn test_print_document_prints_after_load() {
        let doc = print_document("Ada", "<p>x</p>");
        assert!(doc.contains("@page { margin: 0; }"));
        assert!(doc.contains("-webkit-print-color-adjust: exact;"));
        assert!(doc.contains("window.print()"));
        assert!(doc.contains("<body><p>x</p><script>"));
    }
}
