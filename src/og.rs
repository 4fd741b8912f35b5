//! The 1200x630 Open-Graph preview card.
//!
//! Every element sits at a literal pixel coordinate; nothing is measured,
//! wrapped, or sized dynamically.

use std::path::{Path, PathBuf};

use crate::backdrop::{self, Glow};
use crate::canvas::Canvas;
use crate::color::{lerp, opaque, with_alpha, Rgb};
use crate::error::Result;
use crate::font;

pub const WIDTH: u32 = 1200;
pub const HEIGHT: u32 = 630;

pub const BG: Rgb = (13, 17, 23);
pub const PRIMARY: Rgb = (76, 110, 245);
pub const ACCENT: Rgb = (255, 146, 43);
pub const GREEN: Rgb = (81, 207, 102);
const WHITE: Rgb = (241, 243, 245);
const GRAY: Rgb = (134, 142, 150);
const DARK_CARD: Rgb = (33, 37, 41);
const CARD_BORDER: Rgb = (73, 80, 87);

const STATS: [(&str, &str, Rgb); 3] = [
    ("27", "Projects", PRIMARY),
    ("22", "AI Agents", ACCENT),
    ("12", "Production", GREEN),
];

/// Output filename under the writer's directory
pub const OUTPUT_NAME: &str = "og-image.png";

/// Compose the card in memory.
pub fn render() -> Canvas {
    let mut canvas = Canvas::new(WIDTH, HEIGHT, BG);
    let w = WIDTH as i32;
    let h = HEIGHT as i32;

    backdrop::draw_grid(&mut canvas, 40, with_alpha(PRIMARY, 10));
    backdrop::composite_glows(
        &mut canvas,
        &[
            Glow {
                center: (900, -200),
                radius: 300,
                color: PRIMARY,
                peak_alpha: 25,
            },
            Glow {
                center: (-100, 500),
                radius: 300,
                color: ACCENT,
                peak_alpha: 25,
            },
        ],
    );

    let font_huge = font::resolve(58.0, true);
    let font_title = font::resolve(22.0, true);
    let font_body = font::resolve(16.0, false);
    let font_stat = font::resolve(36.0, true);
    let font_label = font::resolve(15.0, false);
    let font_badge = font::resolve(14.0, false);
    let font_url = font::resolve(14.0, false);

    // collaboration badge with status dot
    let (bx, by) = (72, 120);
    canvas.rounded_rect(
        bx,
        by,
        bx + 220,
        by + 34,
        17,
        Some(with_alpha(PRIMARY, 30)),
        Some(with_alpha(PRIMARY, 64)),
    );
    canvas.fill_ellipse(bx + 14, by + 11, bx + 22, by + 19, opaque(GREEN));
    font_badge.draw_text(
        &mut canvas,
        bx + 30,
        by + 7,
        "Open to Collaborate",
        opaque((145, 167, 255)),
    );

    font_huge.draw_text(&mut canvas, 72, 175, "Archer Yu", opaque(PRIMARY));
    font_title.draw_text(
        &mut canvas,
        72,
        260,
        "AI Agent Engineer | Full-Stack Developer",
        opaque(WHITE),
    );
    font_body.draw_text(
        &mut canvas,
        72,
        310,
        "Building AI Agent systems from monitoring,",
        opaque(GRAY),
    );
    font_body.draw_text(
        &mut canvas,
        72,
        335,
        "trading to knowledge management.",
        opaque(GRAY),
    );

    // metric cards, stacked in one column
    let (card_x, card_y_start, card_w, card_h, card_gap) = (800, 160, 320, 80, 16);
    for (i, (num, label, color)) in STATS.iter().enumerate() {
        let cy = card_y_start + i as i32 * (card_h + card_gap);
        canvas.rounded_rect(
            card_x,
            cy,
            card_x + card_w,
            cy + card_h,
            14,
            Some(with_alpha(DARK_CARD, 200)),
            Some(with_alpha(CARD_BORDER, 100)),
        );
        font_stat.draw_text(&mut canvas, card_x + 24, cy + 16, num, opaque(*color));
        font_label.draw_text(&mut canvas, card_x + 100, cy + 30, label, opaque(GRAY));
    }

    // bottom gradient strip, one solid vertical line per column
    for x in 0..w {
        let shade = lerp(PRIMARY, ACCENT, x as f32 / w as f32);
        canvas.vline(x, h - 4, h - 1, opaque(shade));
    }

    font_url.draw_text(
        &mut canvas,
        w - 250,
        h - 32,
        "github.com/yupeng0512",
        opaque(CARD_BORDER),
    );

    canvas
}

/// Render the card and write it to `out_dir`, which must already exist.
pub fn write_card(out_dir: &Path) -> Result<PathBuf> {
    let path = out_dir.join(OUTPUT_NAME);
    log::debug!("rendering OG card to {}", path.display());
    render().save_png(&path)?;
    Ok(path)
}
