use unicode_segmentation::UnicodeSegmentation;

/// First `max` grapheme clusters of `text`, with `...` appended when cut.
pub fn preview(text: &str, max: usize) -> String {
    let mut graphemes = text.graphemes(true);
    let head: String = graphemes.by_ref().take(max).collect();
    if graphemes.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
