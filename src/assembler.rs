use crate::consts::{IMAGE_MARKER_PREFIX, IMAGE_MARKER_SUFFIX};
use crate::image_search::ImageSearchTrait;

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn image_tag(url: &str, alt: &str) -> String {
    format!(
        "<img src=\"{}\" alt=\"{}\"/>",
        escape_attribute(url),
        escape_attribute(alt)
    )
}

/// Replaces every `[IMAGE: description]` marker with an image tag, looking the
/// description up one marker at a time. Markers without a result are kept as
/// `[IMAGE: description]`. A marker with no closing bracket is left verbatim
/// and not looked up.
pub async fn assemble_content(raw: &str, images: &dyn ImageSearchTrait) -> String {
    let mut segments = raw.split(IMAGE_MARKER_PREFIX);
    let mut content = segments.next().unwrap_or_default().to_string();

    for segment in segments {
        let Some((description, rest)) = segment.split_once(IMAGE_MARKER_SUFFIX) else {
            log::debug!("unclosed image marker, keeping text as is");
            content.push_str(IMAGE_MARKER_PREFIX);
            content.push_str(segment);
            continue;
        };

        let description = description.trim();
        match images.search_image(description).await {
            Some(url) => content.push_str(&image_tag(&url, description)),
            None => {
                content.push_str(IMAGE_MARKER_PREFIX);
                content.push(' ');
                content.push_str(description);
                content.push(IMAGE_MARKER_SUFFIX);
            }
        }
        content.push_str(rest);
    }

    content
}
