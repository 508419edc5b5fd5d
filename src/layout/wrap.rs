use crate::composition::text::TextAlign;

/// Line height multiplier applied to the font size.
pub const LINE_HEIGHT_FACTOR: f64 = 1.2;

/// One measured, positioned line of a wrapped block.
#[derive(Clone, Debug, PartialEq)]
pub struct LaidOutLine {
    /// Line content.
    pub text: String,
    /// Measured pixel width.
    pub width_px: f64,
    /// Vertical offset of the line's center from the anchor, in pixels.
    pub center_offset_y: f64,
}

/// A wrapped and measured text block, centered vertically on its anchor.
#[derive(Clone, Debug, PartialEq)]
pub struct TextBlock {
    /// Lines in top-to-bottom order. Empty iff the source text was blank.
    pub lines: Vec<LaidOutLine>,
    /// Height of a single line in pixels (`size_pt * 1.2`).
    pub line_height_px: f64,
    /// Total stacked height, `lines.len() * line_height_px`.
    pub block_height_px: f64,
    /// Width of the widest line.
    pub max_line_width_px: f64,
}

impl TextBlock {
    /// Wrap `text` greedily to `max_width_px` using the supplied measurement
    /// function and lay the lines out centered on the anchor.
    ///
    /// The vertical offset of line `i` out of `k` is
    /// `(i - (k - 1) / 2) * line_height`, so toggling between one and many
    /// lines never moves a line by more than half a line height.
    pub fn compose(
        text: &str,
        size_pt: f64,
        max_width_px: f64,
        measure: &mut dyn FnMut(&str) -> f64,
    ) -> TextBlock {
        let line_height_px = size_pt * LINE_HEIGHT_FACTOR;
        let wrapped = wrap_greedy(text, max_width_px, measure);
        let count = wrapped.len();

        let mut lines = Vec::with_capacity(count);
        let mut max_line_width_px: f64 = 0.0;
        for (i, line) in wrapped.into_iter().enumerate() {
            let width_px = measure(&line);
            max_line_width_px = max_line_width_px.max(width_px);
            let center_offset_y = (i as f64 - (count as f64 - 1.0) / 2.0) * line_height_px;
            lines.push(LaidOutLine {
                text: line,
                width_px,
                center_offset_y,
            });
        }

        TextBlock {
            block_height_px: count as f64 * line_height_px,
            lines,
            line_height_px,
            max_line_width_px,
        }
    }

    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Horizontal offset of a line's left edge from the anchor.
    pub fn line_left_offset(&self, line: &LaidOutLine, alignment: TextAlign) -> f64 {
        match alignment {
            TextAlign::Left => 0.0,
            TextAlign::Center => -line.width_px / 2.0,
            TextAlign::Right => -line.width_px,
        }
    }

    /// Background box geometry for this block, `None` when the block is
    /// empty so a blank element never flashes a zero-area box.
    pub fn background_box(
        &self,
        alignment: TextAlign,
        padding_px: f64,
        corner_radius_px: f64,
    ) -> Option<BackgroundBox> {
        if self.is_empty() {
            return None;
        }
        let width = self.max_line_width_px + 2.0 * padding_px;
        let height = self.block_height_px + 2.0 * padding_px;
        let left_offset = match alignment {
            TextAlign::Left => 0.0,
            TextAlign::Center => -width / 2.0,
            TextAlign::Right => -width,
        };
        Some(BackgroundBox {
            left_offset,
            top_offset: -height / 2.0,
            width,
            height,
            corner_radius_px,
        })
    }
}

/// Geometry of a text block's background box, relative to the anchor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackgroundBox {
    /// Offset of the left edge from the anchor X.
    pub left_offset: f64,
    /// Offset of the top edge from the anchor Y.
    pub top_offset: f64,
    /// Box width (`max line width + 2 * padding`).
    pub width: f64,
    /// Box height (`block height + 2 * padding`).
    pub height: f64,
    /// Corner radius in pixels.
    pub corner_radius_px: f64,
}

/// Greedy word wrap.
///
/// The next word joins the current line when the measured width of
/// `current + " " + word` stays within `max_width_px`; otherwise the current
/// line is committed and the word starts a new one. A single word wider than
/// the limit still gets its own line, never silently truncated. Blank input
/// produces no lines.
pub fn wrap_greedy(
    text: &str,
    max_width_px: f64,
    measure: &mut dyn FnMut(&str) -> f64,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{current} {word}");
        if measure(&candidate) <= max_width_px {
            current = candidate;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
#[path = "../../tests/unit/layout/wrap.rs"]
mod tests;
