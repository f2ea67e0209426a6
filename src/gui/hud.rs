//! Screen-space HUD drawn from a `HudSnapshot`
//!
//! Counters top-left, meters top-right, the house prompt above the bottom
//! bar, and the bottom bar itself: character health outside the house,
//! house health inside. Between waves the countdown line doubles as a
//! button that starts the next day.

use crate::text::{GLYPH_HEIGHT, draw_text, draw_text_centered, text_width};
use crate::ui::HealthBar;
use fortress::HudSnapshot;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

const SCALE: u32 = 2;
const LINE: i32 = 24;
const MARGIN: i32 = 16;
const BUTTON_PAD: i32 = 4;
const COUNTDOWN_ROW: i32 = 1;

fn countdown_line(countdown: &str) -> String {
    format!("NEXT DAY IN {} (CLICK OR N)", countdown)
}

/// Left-column lines
pub fn counter_lines(hud: &HudSnapshot) -> Vec<String> {
    let mut lines = vec![format!("DAY {}", hud.day)];
    if let Some(countdown) = &hud.countdown {
        lines.push(countdown_line(countdown));
    } else {
        lines.push(format!("ZOMBIES: {}", hud.zombies_remaining));
    }
    lines.push(format!("MONEY: {}", hud.money));
    lines.push(format!("FOOD: {}  AMMO: {}  SCRAP: {}", hud.food, hud.ammo, hud.scrap));
    lines
}

/// Right-column lines
pub fn meter_lines(hud: &HudSnapshot) -> Vec<String> {
    vec![
        format!("DPS: {:.1}", hud.dps),
        format!("SPS: {:.1}", hud.sps),
        format!("SPEED: {:.1}", hud.player_speed),
        format!("ZOOM: {:.1}", hud.zoom),
    ]
}

/// Screen rect of the start-next-day button, only while the countdown runs
pub fn next_day_button(hud: &HudSnapshot) -> Option<Rect> {
    let line = countdown_line(hud.countdown.as_deref()?);
    Some(Rect::new(
        MARGIN - BUTTON_PAD,
        MARGIN + LINE * COUNTDOWN_ROW - BUTTON_PAD,
        text_width(&line, SCALE) + 2 * BUTTON_PAD as u32,
        GLYPH_HEIGHT * SCALE + 2 * BUTTON_PAD as u32,
    ))
}

pub fn render(canvas: &mut Canvas<Window>, hud: &HudSnapshot, bottom_bar: &HealthBar) -> Result<(), String> {
    let (screen_width, screen_height) = canvas.logical_size();

    if let Some(button) = next_day_button(hud) {
        canvas.set_draw_color(Color::RGB(70, 130, 180));
        canvas.fill_rect(button)?;
        canvas.set_draw_color(Color::WHITE);
        canvas.draw_rect(button)?;
    }
    for (i, line) in counter_lines(hud).iter().enumerate() {
        draw_text(canvas, line, MARGIN, MARGIN + LINE * i as i32, Color::WHITE, SCALE)?;
    }
    for (i, line) in meter_lines(hud).iter().enumerate() {
        let x = screen_width as i32 - MARGIN - text_width(line, SCALE) as i32;
        draw_text(canvas, line, x, MARGIN + LINE * i as i32, Color::RGB(200, 200, 120), SCALE)?;
    }

    let (label, fraction) = if hud.in_house {
        ("HOUSE", hud.house_health)
    } else {
        ("HEALTH", hud.character_health)
    };
    bottom_bar.render_screen_bottom(canvas, screen_width, screen_height, fraction)?;
    let bar_top = screen_height as i32 - bottom_bar.style().height as i32 - bottom_bar.style().offset_y;
    draw_text(canvas, label, MARGIN, bar_top + 8, Color::WHITE, SCALE)?;

    if hud.house_destroyed {
        draw_text_centered(
            canvas,
            "THE HOUSE HAS FALLEN",
            screen_width as i32 / 2,
            MARGIN,
            Color::RGB(255, 80, 80),
            3,
        )?;
    }

    if let Some((kind, alpha)) = hud.hint {
        let a = (alpha.clamp(0.0, 1.0) * 255.0) as u8;
        if a > 0 {
            draw_text_centered(
                canvas,
                kind.message(),
                screen_width as i32 / 2,
                bar_top - 50,
                Color::RGBA(255, 255, 255, a),
                3,
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> HudSnapshot {
        HudSnapshot {
            day: 3,
            countdown: None,
            money: 120,
            food: 40,
            ammo: 12,
            scrap: 75,
            zombies_remaining: 9,
            character_health: 1.0,
            house_health: 0.5,
            house_destroyed: false,
            in_house: true,
            dps: 50.0,
            sps: 3.0,
            player_speed: 72.0,
            zoom: 1.0,
            hint: None,
        }
    }

    #[test]
    fn test_counters_show_zombies_during_wave() {
        let lines = counter_lines(&snapshot());
        assert_eq!(lines[0], "DAY 3");
        assert_eq!(lines[1], "ZOMBIES: 9");
        assert_eq!(lines[2], "MONEY: 120");
    }

    #[test]
    fn test_counters_show_countdown_between_waves() {
        let mut hud = snapshot();
        hud.countdown = Some("1:30".to_string());
        assert_eq!(counter_lines(&hud)[1], "NEXT DAY IN 1:30 (CLICK OR N)");
    }

    #[test]
    fn test_next_day_button_only_between_waves() {
        let mut hud = snapshot();
        assert_eq!(next_day_button(&hud), None);

        hud.countdown = Some("0:45".to_string());
        let button = next_day_button(&hud).unwrap();
        let text_y = MARGIN + LINE * COUNTDOWN_ROW;
        assert!(button.contains_point((MARGIN + 2, text_y + 2)));
        assert!(button.contains_point((MARGIN + text_width(&counter_lines(&hud)[1], SCALE) as i32 - 1, text_y)));
        // The DAY line above and the MONEY line below stay outside
        assert!(!button.contains_point((MARGIN + 2, MARGIN + 2)));
        assert!(!button.contains_point((MARGIN + 2, MARGIN + LINE * 2 + 2)));
    }

    #[test]
    fn test_meters() {
        let lines = meter_lines(&snapshot());
        assert_eq!(lines[0], "DPS: 50.0");
        assert_eq!(lines[3], "ZOOM: 1.0");
    }
}
