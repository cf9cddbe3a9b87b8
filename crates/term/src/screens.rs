//! Menu screens and popups drawn around the game view.

use crate::core::{InitialsEntry, Rankings};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::game_view::{format_score, label_style, shape_color, value_style, BoardFrame, Viewport};
use crate::types::Shape;

const GLYPH_ROWS: usize = 5;

/// 3x5 block glyphs for the banner letters.
fn glyph(ch: char) -> Option<[&'static str; GLYPH_ROWS]> {
    Some(match ch {
        'T' => ["###", " # ", " # ", " # ", " # "],
        'E' => ["###", "#  ", "## ", "#  ", "###"],
        'R' => ["## ", "# #", "## ", "# #", "# #"],
        'O' => ["###", "# #", "# #", "# #", "###"],
        'D' => ["## ", "# #", "# #", "# #", "## "],
        'P' => ["###", "# #", "###", "#  ", "#  "],
        _ => return None,
    })
}

const BANNER: &str = "TETRODROP";

fn centered_x(viewport: Viewport, text_w: u16) -> u16 {
    viewport.width.saturating_sub(text_w) / 2
}

fn put_centered(fb: &mut FrameBuffer, viewport: Viewport, y: u16, text: &str, style: CellStyle) {
    let x = centered_x(viewport, text.chars().count() as u16);
    fb.put_str(x, y, text, style);
}

fn reset(fb: &mut FrameBuffer, viewport: Viewport) {
    fb.resize(viewport.width, viewport.height);
    fb.clear(CellStyle::default().cell(' '));
}

/// Title screen: block-letter banner and the menu choices.
pub fn render_title(viewport: Viewport, fb: &mut FrameBuffer) {
    reset(fb, viewport);

    // Each glyph pixel is two columns wide, with one pixel of spacing.
    let letter_w = 4 * 2;
    let banner_w = BANNER.len() as u16 * letter_w - 2;
    let x0 = centered_x(viewport, banner_w);
    let y0 = viewport.height.saturating_sub(GLYPH_ROWS as u16 + 6) / 2;

    for (i, ch) in BANNER.chars().enumerate() {
        let Some(rows) = glyph(ch) else {
            continue;
        };
        let shape = Shape::ALL[i % Shape::ALL.len()];
        let style = CellStyle::plain(shape_color(shape), Rgb::new(0, 0, 0)).bold();
        let x = x0 + i as u16 * letter_w;
        for (dy, row) in rows.iter().enumerate() {
            for (dx, px) in row.chars().enumerate() {
                if px == '#' {
                    fb.fill_rect(x + dx as u16 * 2, y0 + dy as u16, 2, 1, '█', style);
                }
            }
        }
    }

    let y = y0 + GLYPH_ROWS as u16 + 2;
    put_centered(fb, viewport, y, "ENTER  play", value_style());
    put_centered(fb, viewport, y + 1, "S  scores ", value_style());
    put_centered(fb, viewport, y + 2, "Q  quit   ", value_style());
}

/// Rankings table, highest score first.
pub fn render_rankings(rankings: &Rankings, viewport: Viewport, fb: &mut FrameBuffer) {
    reset(fb, viewport);

    let rows = rankings.entries().len() as u16;
    let y0 = viewport.height.saturating_sub(rows + 4) / 2;
    put_centered(fb, viewport, y0, "TOP-10 RANKINGS", label_style());

    for (i, entry) in rankings.entries().iter().enumerate() {
        let line = format!("{:>2}. {}  {}", i + 1, entry.name, format_score(entry.score));
        put_centered(fb, viewport, y0 + 2 + i as u16, &line, value_style());
    }

    put_centered(fb, viewport, y0 + rows + 3, "T title   Q quit", value_style());
}

/// Boxed popup with one line of text per entry, centred on the board frame.
/// Returns the left edge of the inner area, the top of the box and the
/// inner width.
fn popup(fb: &mut FrameBuffer, frame: BoardFrame, lines: &[(&str, CellStyle)]) -> (u16, u16, u16) {
    let inner_w = lines
        .iter()
        .map(|(text, _)| text.chars().count() as u16)
        .max()
        .unwrap_or(0)
        + 4;
    let w = inner_w + 2;
    let h = lines.len() as u16 + 4;
    let x = frame.x + frame.width.saturating_sub(w) / 2;
    let y = frame.y + frame.height.saturating_sub(h) / 2;

    fb.fill_rect(x, y, w, h, ' ', CellStyle::default());
    fb.draw_box(x, y, w, h, label_style());
    for (i, (text, style)) in lines.iter().enumerate() {
        let tx = x + 1 + (inner_w - text.chars().count() as u16) / 2;
        fb.put_str(tx, y + 2 + i as u16, text, *style);
    }
    (x + 1, y, inner_w)
}

/// Drawn over the final game frame.
pub fn draw_game_over(fb: &mut FrameBuffer, frame: BoardFrame, score: u64) {
    let score_line = format!("SCORE {}", format_score(score));
    popup(
        fb,
        frame,
        &[
            ("GAME OVER", label_style()),
            ("", value_style()),
            (score_line.as_str(), value_style()),
            ("", value_style()),
            ("T title   Q quit", value_style()),
        ],
    );
}

/// Initials editor popup; the letter under the cursor is highlighted.
pub fn draw_initials(fb: &mut FrameBuffer, frame: BoardFrame, entry: &InitialsEntry) {
    let name = entry.name();
    // Letters are spaced out so the cursor cell stands apart.
    let spaced: String = name
        .chars()
        .flat_map(|c| [c, ' '])
        .take(name.len() * 2 - 1)
        .collect();

    let (inner_x, y, inner_w) = popup(
        fb,
        frame,
        &[
            ("NEW HIGH SCORE", label_style()),
            ("", value_style()),
            (spaced.as_str(), value_style()),
            ("", value_style()),
            ("ENTER to confirm", value_style()),
        ],
    );

    let letters_x = inner_x + (inner_w - spaced.len() as u16) / 2;
    let cursor_x = letters_x + entry.cursor() as u16 * 2;
    if let Some(ch) = name.chars().nth(entry.cursor()) {
        let highlight = CellStyle::plain(Rgb::new(0, 0, 0), Rgb::new(240, 220, 80)).bold();
        fb.put_char(cursor_x, y + 4, ch, highlight);
    }
}
