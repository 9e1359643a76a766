use lopdf::Document as LopdfDocument;
use std::collections::BTreeSet;

/// Extract all text content from a PDF document
pub fn extract_text(doc: &LopdfDocument) -> String {
    let mut text = String::new();
    let pages = doc.get_pages();
    for page_num in 1..=pages.len() {
        if let Ok(page_text) = doc.extract_text(&[page_num as u32]) {
            text.push_str(&page_text);
            text.push('\n');
        }
    }
    text
}

/// BaseFont names of every font dictionary in the file
pub fn font_names(doc: &LopdfDocument) -> BTreeSet<String> {
    doc.objects
        .values()
        .flat_map(|object| match object {
            lopdf::Object::Dictionary(dict) => vec![dict],
            _ => Vec::new(),
        })
        .flat_map(|dict| {
            // the shared resources dictionary nests the fonts inline
            let mut found = Vec::new();
            if let Ok(fonts) = dict.get(b"Font").and_then(|f| f.as_dict()) {
                for (_, font) in fonts.iter() {
                    if let Ok(name) = font
                        .as_dict()
                        .and_then(|d| d.get(b"BaseFont"))
                        .and_then(|n| n.as_name())
                    {
                        found.push(String::from_utf8_lossy(name).to_string());
                    }
                }
            }
            found
        })
        .collect()
}

/// Number of image XObjects in the file
pub fn image_count(doc: &LopdfDocument) -> usize {
    doc.objects
        .values()
        .filter(|object| match object {
            lopdf::Object::Stream(stream) => stream
                .dict
                .get(b"Subtype")
                .and_then(|s| s.as_name())
                .is_ok_and(|name| name == b"Image"),
            _ => false,
        })
        .count()
}

/// Assert that `needles` occur in `text` in the given order
pub fn assert_in_order(text: &str, needles: &[&str]) {
    let mut from = 0;
    for needle in needles {
        match text[from..].find(needle) {
            Some(pos) => from += pos + needle.len(),
            None => panic!("'{}' missing or out of order in:\n{}", needle, text),
        }
    }
}
