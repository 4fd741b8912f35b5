//! Per-project 1200x675 showcase cards.

use std::path::{Path, PathBuf};

use crate::backdrop::{self, Glow};
use crate::canvas::Canvas;
use crate::color::{opaque, with_alpha, Rgb};
use crate::error::Result;
use crate::font::{self, FontHandle};
use crate::project::{self, ProjectDescriptor};

pub const WIDTH: u32 = 1200;
pub const HEIGHT: u32 = 675;

const BG: Rgb = (13, 17, 23);
const GRAY: Rgb = (134, 142, 150);
const WHITE: Rgb = (241, 243, 245);
const DARK_CARD: Rgb = (26, 29, 36);
const CHIP_FILL: Rgb = (33, 37, 41);
const BORDER: Rgb = (73, 80, 87);
const GREEN: Rgb = (81, 207, 102);
const PAIN_RED: Rgb = (255, 100, 100);

/// Chip width for a tag label: a per-character estimate plus padding, not a
/// real text measurement. Under- or over-estimates proportional fonts; this
/// is an accepted approximation.
pub fn chip_width(label: &str) -> i32 {
    9 * label.chars().count() as i32 + 24
}

/// The font handles one showcase run needs, resolved once and shared across
/// all cards
pub struct Fonts {
    name: FontHandle,
    title: FontHandle,
    body: FontHandle,
    tag: FontHandle,
    small: FontHandle,
}

impl Fonts {
    pub fn resolve() -> Self {
        Self {
            name: font::resolve(48.0, true),
            title: font::resolve(20.0, true),
            body: font::resolve(16.0, false),
            tag: font::resolve(14.0, true),
            small: font::resolve(13.0, false),
        }
    }
}

/// Compose one project's card in memory.
pub fn render_card(project: &ProjectDescriptor, fonts: &Fonts) -> Canvas {
    let mut canvas = Canvas::new(WIDTH, HEIGHT, BG);
    let w = WIDTH as i32;
    let h = HEIGHT as i32;
    let accent = project.accent;

    // top accent strip
    canvas.fill_rect(0, 0, w - 1, 4, opaque(accent));

    backdrop::composite_glows(
        &mut canvas,
        &[Glow {
            center: (w - 200, -100),
            radius: 200,
            color: accent,
            peak_alpha: 18,
        }],
    );

    // production badge
    let (bx, by) = (60, 40);
    canvas.rounded_rect(
        bx,
        by,
        bx + 80,
        by + 26,
        13,
        Some(with_alpha(GREEN, 40)),
        Some(with_alpha(GREEN, 100)),
    );
    fonts
        .small
        .draw_text(&mut canvas, bx + 12, by + 5, "Production", opaque(GREEN));

    fonts
        .name
        .draw_text(&mut canvas, 60, 85, &project.name, opaque(accent));
    fonts
        .title
        .draw_text(&mut canvas, 60, 150, &project.tagline, opaque(WHITE));

    // tag chips, left to right, no wrapping
    let mut tx = 60;
    let ty = 200;
    for tag in &project.tech {
        let tw = chip_width(tag);
        canvas.rounded_rect(
            tx,
            ty,
            tx + tw,
            ty + 28,
            6,
            Some(with_alpha(CHIP_FILL, 200)),
            Some(with_alpha(BORDER, 100)),
        );
        fonts
            .small
            .draw_text(&mut canvas, tx + 12, ty + 5, tag, opaque(GRAY));
        tx += tw + 10;
    }

    // highlights
    let mut hy = 260;
    fonts
        .title
        .draw_text(&mut canvas, 60, hy, "Key Features", opaque(WHITE));
    hy += 35;
    for highlight in &project.highlights {
        let line = format!("->  {highlight}");
        fonts.body.draw_text(&mut canvas, 80, hy, &line, opaque(GRAY));
        hy += 28;
    }

    // value story card
    let vy = 420;
    canvas.rounded_rect(
        60,
        vy,
        w - 60,
        h - 30,
        16,
        Some(with_alpha(DARK_CARD, 220)),
        Some(with_alpha(BORDER, 80)),
    );
    fonts
        .tag
        .draw_text(&mut canvas, 90, vy + 20, "PAIN", opaque(PAIN_RED));
    fonts
        .body
        .draw_text(&mut canvas, 90, vy + 42, &project.pain, opaque(GRAY));
    fonts
        .tag
        .draw_text(&mut canvas, 90, vy + 80, "SOLUTION", opaque(accent));
    fonts
        .body
        .draw_text(&mut canvas, 90, vy + 102, &project.solution, opaque(GRAY));
    fonts
        .tag
        .draw_text(&mut canvas, 90, vy + 140, "RESULT", opaque(GREEN));
    fonts
        .body
        .draw_text(&mut canvas, 90, vy + 162, &project.result, opaque(GRAY));

    canvas
}

/// Render every project in the literal list into `out_dir`, creating the
/// directory if needed. Returns the written paths in list order.
pub fn write_cards(out_dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)?;
    let fonts = Fonts::resolve();
    let mut paths = Vec::new();
    for project in project::showcase_projects() {
        let path = out_dir.join(format!("{}.png", project.slug));
        log::debug!("rendering showcase card {}", path.display());
        render_card(&project, &fonts).save_png(&path)?;
        paths.push(path);
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chip_width_formula_is_exact() {
        assert_eq!(chip_width("Python"), 9 * 6 + 24);
        assert_eq!(chip_width(""), 24);
        assert_eq!(chip_width("FastAPI"), 87);
    }

    #[test]
    fn card_shows_accent_strip_and_background() {
        let fonts = Fonts::resolve();
        let project = &project::showcase_projects()[0];
        let canvas = render_card(project, &fonts);
        assert_eq!(canvas.pixel(10, 2), project.accent);
        assert_eq!(canvas.pixel(10, 600), BG);
    }
}
