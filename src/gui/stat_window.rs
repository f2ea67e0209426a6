//! Stat overlay shown while Tab is held
//!
//! One row per stat: base value, boost from team roles and upgrades, total.

use crate::text::{draw_text, draw_text_centered};
use fortress::stats::{StatEntry, StatKind, StatTable};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;

const WIDTH: u32 = 700;
const ROW_HEIGHT: i32 = 34;
const SCALE: u32 = 2;
const COLUMNS: [i32; 4] = [30, 330, 460, 580];

/// Formats a stat value without trailing noise: `72`, `0.05`, `3.5`
pub fn format_value(value: f32) -> String {
    let text = format!("{:.2}", value);
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" { "0".to_string() } else { trimmed.to_string() }
}

fn row_cells(kind: StatKind, entry: StatEntry) -> [String; 4] {
    [
        kind.label().to_uppercase(),
        format_value(entry.base),
        format!("+{}", format_value(entry.boost)),
        format_value(entry.total()),
    ]
}

pub fn render(canvas: &mut Canvas<Window>, stats: &StatTable) -> Result<(), String> {
    let (screen_width, _) = canvas.logical_size();
    let rows: Vec<[String; 4]> = stats.rows().map(|(kind, entry)| row_cells(kind, entry)).collect();
    let height = 90 + rows.len() as u32 * ROW_HEIGHT as u32;
    let frame = Rect::new(screen_width.saturating_sub(WIDTH) as i32 / 2, 80, WIDTH, height);

    canvas.set_blend_mode(BlendMode::Blend);
    canvas.set_draw_color(Color::RGBA(20, 20, 30, 210));
    canvas.fill_rect(frame)?;
    canvas.set_blend_mode(BlendMode::None);
    canvas.set_draw_color(Color::RGB(120, 120, 140));
    canvas.draw_rect(frame)?;

    draw_text_centered(canvas, "STATS", frame.center().x(), frame.y() + 15, Color::WHITE, 3)?;

    let header_y = frame.y() + 55;
    for (column, header) in COLUMNS.iter().zip(["STAT", "BASE", "BOOST", "TOTAL"]) {
        draw_text(canvas, header, frame.x() + column, header_y, Color::RGB(180, 180, 200), SCALE)?;
    }

    for (i, cells) in rows.iter().enumerate() {
        let y = header_y + ROW_HEIGHT * (i as i32 + 1);
        for (c, (column, cell)) in COLUMNS.iter().zip(cells.iter()).enumerate() {
            let color = if c == 2 { Color::RGB(0, 255, 0) } else { Color::WHITE };
            draw_text(canvas, cell, frame.x() + column, y, color, SCALE)?;
        }
    }

    Ok(())
}
