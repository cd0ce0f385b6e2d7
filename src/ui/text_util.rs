// PixelWidget
// copyright zipxing@hotmail.com 2022～2025

//! Cell-width text helpers used by the terminal text provider.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Word-wraps `text` to lines of at most `max_width` display cells.
///
/// `\n` always starts a new line, runs of whitespace collapse to one space,
/// and a word wider than a whole line is split between characters. A zero
/// width yields no lines at all; any other width yields at least one.
///
/// ```
/// use pixel_widget::ui::text_util::wrap_text;
/// assert_eq!(wrap_text("Contracts and Factions", 10), vec!["Contracts", "and", "Factions"]);
/// ```
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut width = 0;
        let mut started = false;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            if started && width + 1 + word_width <= max_width {
                line.push(' ');
                line.push_str(word);
                width += 1 + word_width;
                continue;
            }
            if started {
                lines.push(std::mem::take(&mut line));
            }
            started = true;
            if word_width <= max_width {
                line.push_str(word);
                width = word_width;
            } else {
                let mut pieces = split_by_width(word, max_width);
                // the tail keeps the line open for the next word
                let tail = pieces.pop().unwrap_or_default();
                lines.extend(pieces);
                width = tail.width();
                line = tail;
            }
        }
        lines.push(line);
    }
    lines
}

/// Splits a single word into chunks no wider than `max_width` cells.
fn split_by_width(word: &str, max_width: usize) -> Vec<String> {
    let mut pieces = vec![String::new()];
    let mut width = 0;
    for ch in word.chars() {
        let cw = ch.width().unwrap_or(0);
        if width + cw > max_width && width > 0 {
            pieces.push(String::new());
            width = 0;
        }
        if let Some(last) = pieces.last_mut() {
            last.push(ch);
        }
        width += cw;
    }
    pieces
}

/// Width in cells of the widest line, and the line count.
pub fn block_size<S: AsRef<str>>(lines: &[S]) -> (usize, usize) {
    let width = lines.iter().map(|l| l.as_ref().width()).max().unwrap_or(0);
    (width, lines.len())
}

/// Longest prefix of `text` that fits in `max_width` cells.
pub fn truncate_to_width(text: &str, max_width: usize) -> &str {
    let mut width = 0;
    for (i, ch) in text.char_indices() {
        let cw = ch.width().unwrap_or(0);
        if width + cw > max_width {
            return &text[..i];
        }
        width += cw;
    }
    text
}
