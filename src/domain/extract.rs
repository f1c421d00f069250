//! HTML to plain text
//!
//! Flattens markup to its visible text: every text node outside
//! script/style subtrees, whitespace-normalized and joined with single
//! spaces.

use scraper::{ElementRef, Html};

use crate::domain::types::QueryError;

const SKIPPED_TAGS: [&str; 3] = ["script", "style", "noscript"];

/// Extract the visible text of a page, treating an empty result as a
/// terminal error for the request.
pub fn extract_page_text(html: &str) -> Result<String, QueryError> {
    let text = extract_text(html);
    if text.is_empty() {
        Err(QueryError::EmptyExtractedContent)
    } else {
        Ok(text)
    }
}

/// Flatten markup to a single whitespace-joined string. Tags carry no
/// structure into the output; a page of tags and whitespace yields an
/// empty string.
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut words: Vec<&str> = Vec::new();
    collect_words(document.root_element(), &mut words);
    words.join(" ")
}

fn collect_words<'a>(element: ElementRef<'a>, words: &mut Vec<&'a str>) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            words.extend(text.split_whitespace());
        } else if let Some(el) = ElementRef::wrap(child) {
            if !SKIPPED_TAGS.contains(&el.value().name()) {
                collect_words(el, words);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_text_nodes_with_single_spaces() {
        let html = "<html><body><h1>Title</h1><p>First   paragraph.</p>\n<p>Second.</p></body></html>";
        assert_eq!(extract_text(html), "Title First paragraph. Second.");
    }

    #[test]
    fn skips_scripts_styles_and_comments() {
        let html = r#"
            <html><head>
            <style>body { color: red; }</style>
            <script>console.log("hidden");</script>
            </head><body>
            <!-- a comment -->
            <noscript>enable js</noscript>
            <p>Visible</p>
            </body></html>
        "#;
        assert_eq!(extract_text(html), "Visible");
    }

    #[test]
    fn tags_and_whitespace_only_yields_empty_string() {
        let html = "<html><body>\n  <div>  </div>\n  <span></span>\n</body></html>";
        assert_eq!(extract_text(html), "");
    }

    #[test]
    fn empty_extraction_is_a_terminal_error() {
        let html = "<html><body><div></div></body></html>";
        assert_eq!(
            extract_page_text(html),
            Err(QueryError::EmptyExtractedContent)
        );
    }

    #[test]
    fn nested_elements_are_flattened_in_document_order() {
        let html = "<div>outer <b>bold <i>italic</i></b> tail</div>";
        assert_eq!(extract_text(html), "outer bold italic tail");
    }
}
