use super::*;

/// Fixed-advance measurer: every char is 10px wide.
fn char_measure(s: &str) -> f64 {
    s.chars().count() as f64 * 10.0
}

#[test]
fn wraps_greedily_without_exceeding_max_width() {
    let mut measure = char_measure;
    let lines = wrap_greedy("the quick brown fox jumps", 100.0, &mut measure);
    assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
    for line in &lines {
        assert!(char_measure(line) <= 100.0);
    }
}

#[test]
fn word_wider_than_the_limit_still_gets_its_own_line() {
    let mut measure = char_measure;
    let lines = wrap_greedy("a extraordinarily b", 80.0, &mut measure);
    assert_eq!(lines, vec!["a", "extraordinarily", "b"]);
}

#[test]
fn blank_text_produces_no_lines() {
    let mut measure = char_measure;
    assert!(wrap_greedy("", 100.0, &mut measure).is_empty());
    assert!(wrap_greedy("   \t  ", 100.0, &mut measure).is_empty());

    let block = TextBlock::compose("", 24.0, 100.0, &mut measure);
    assert!(block.is_empty());
    assert_eq!(block.block_height_px, 0.0);
    assert!(block.background_box(TextAlign::Center, 8.0, 4.0).is_none());
}

#[test]
fn line_offsets_center_the_block_on_the_anchor() {
    let mut measure = char_measure;

    // Three lines of three words each.
    let block = TextBlock::compose("aaa bbb ccc", 20.0, 30.0, &mut measure);
    assert_eq!(block.lines.len(), 3);
    let lh = 20.0 * 1.2;
    assert_eq!(block.line_height_px, lh);
    assert_eq!(block.block_height_px, 3.0 * lh);
    assert_eq!(block.lines[0].center_offset_y, -lh);
    assert_eq!(block.lines[1].center_offset_y, 0.0);
    assert_eq!(block.lines[2].center_offset_y, lh);

    // A single line sits exactly on the anchor.
    let single = TextBlock::compose("aaa", 20.0, 300.0, &mut measure);
    assert_eq!(single.lines.len(), 1);
    assert_eq!(single.lines[0].center_offset_y, 0.0);
}

#[test]
fn four_line_offsets_use_half_steps() {
    let mut measure = char_measure;
    let block = TextBlock::compose("aa bb cc dd", 10.0, 20.0, &mut measure);
    assert_eq!(block.lines.len(), 4);
    let lh = 12.0;
    assert_eq!(block.lines[0].center_offset_y, -1.5 * lh);
    assert_eq!(block.lines[1].center_offset_y, -0.5 * lh);
    assert_eq!(block.lines[2].center_offset_y, 0.5 * lh);
    assert_eq!(block.lines[3].center_offset_y, 1.5 * lh);
}

#[test]
fn background_box_tracks_widest_line_and_alignment() {
    let mut measure = char_measure;
    let block = TextBlock::compose("aaaa bb", 20.0, 40.0, &mut measure);
    assert_eq!(block.lines.len(), 2);
    assert_eq!(block.max_line_width_px, 40.0);

    let centered = block.background_box(TextAlign::Center, 5.0, 3.0).unwrap();
    assert_eq!(centered.width, 50.0);
    assert_eq!(centered.height, 2.0 * 24.0 + 10.0);
    assert_eq!(centered.left_offset, -25.0);
    assert_eq!(centered.top_offset, -centered.height / 2.0);
    assert_eq!(centered.corner_radius_px, 3.0);

    let left = block.background_box(TextAlign::Left, 5.0, 0.0).unwrap();
    assert_eq!(left.left_offset, 0.0);
    let right = block.background_box(TextAlign::Right, 5.0, 0.0).unwrap();
    assert_eq!(right.left_offset, -50.0);
}

#[test]
fn line_left_offsets_follow_alignment() {
    let mut measure = char_measure;
    let block = TextBlock::compose("abcd", 20.0, 300.0, &mut measure);
    let line = &block.lines[0];
    assert_eq!(line.width_px, 40.0);
    assert_eq!(block.line_left_offset(line, TextAlign::Left), 0.0);
    assert_eq!(block.line_left_offset(line, TextAlign::Center), -20.0);
    assert_eq!(block.line_left_offset(line, TextAlign::Right), -40.0);
}
