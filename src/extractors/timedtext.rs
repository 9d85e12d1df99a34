use crate::core::TranscriptEntry;
use anyhow::Result;
use regex::Regex;

const TEXT_ELEMENT_PATTERN: &str =
    r#"(?s)<text\s+start="([^"]*)"(?:\s+dur="([^"]*)")?(?:\s+[\w:-]+="[^"]*")*\s*>(.*?)</text>"#;
const MARKUP_PATTERN: &str = r"<[^>]*>";

/// Parses YouTube timedtext XML into entries.
///
/// Bodies are decoded twice (XML entities, then the HTML entities YouTube
/// nests inside them) and stripped of markup. Empty bodies are skipped.
pub fn parse_timedtext(xml: &str) -> Result<Vec<TranscriptEntry>> {
    let element_re = Regex::new(TEXT_ELEMENT_PATTERN)?;
    let markup_re = Regex::new(MARKUP_PATTERN)?;

    let mut entries = Vec::new();
    for captures in element_re.captures_iter(xml) {
        let body = &captures[3];
        if body.is_empty() {
            continue;
        }

        let start: f64 = captures[1]
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid start offset {:?}: {}", &captures[1], e))?;
        let duration: f64 = match captures.get(2) {
            Some(dur) => dur
                .as_str()
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid duration {:?}: {}", dur.as_str(), e))?,
            None => 0.0,
        };

        let xml_decoded = html_escape::decode_html_entities(body);
        let html_decoded = html_escape::decode_html_entities(&xml_decoded);
        let text = markup_re.replace_all(&html_decoded, "").into_owned();

        entries.push(TranscriptEntry {
            start,
            duration,
            text,
        });
    }

    tracing::debug!("Parsed {} timedtext entries", entries.len());
    Ok(entries)
}
