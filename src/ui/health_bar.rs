//! Health bars
//!
//! Two uses share this component: a thin bar under every zombie, and the wide
//! translucent bar across the bottom of the screen that shows the character's
//! health outside the house and the house's health inside it.
//!
//! Bars are stateless. Create one per style and call `render` for each
//! entity.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;

/// Appearance of a health bar
#[derive(Debug, Clone)]
pub struct HealthBarStyle {
    /// Bar height in pixels
    pub height: u32,

    /// Gap between the bottom of the entity and the bar
    pub offset_y: i32,

    /// Shown behind the fill (the lost portion)
    pub background_color: Color,

    /// Fill color above `low_threshold`
    pub health_color: Color,

    /// Fill color at or below `low_threshold`
    pub low_health_color: Color,

    /// Fraction at which the fill switches to `low_health_color`
    pub low_threshold: f32,

    /// Border color; `None` for no border
    pub border_color: Option<Color>,
}

impl Default for HealthBarStyle {
    fn default() -> Self {
        HealthBarStyle {
            height: 5,
            offset_y: 5,
            background_color: Color::RGB(255, 0, 0),
            health_color: Color::RGB(0, 255, 0),
            low_health_color: Color::RGB(0, 255, 0),
            low_threshold: 0.0,
            border_color: None,
        }
    }
}

impl HealthBarStyle {
    /// Full-width translucent bar along the bottom edge
    pub fn screen_bottom() -> Self {
        HealthBarStyle {
            height: 30,
            offset_y: 0,
            background_color: Color::RGBA(255, 0, 0, 150),
            health_color: Color::RGBA(0, 200, 0, 180),
            low_health_color: Color::RGBA(230, 120, 0, 200),
            low_threshold: 0.3,
            border_color: Some(Color::RGB(0, 0, 0)),
        }
    }
}

/// Pixels of `width` to fill for `fraction` health
pub fn fill_width(width: u32, fraction: f32) -> u32 {
    if !fraction.is_finite() {
        return 0;
    }
    (width as f32 * fraction.clamp(0.0, 1.0)) as u32
}

pub struct HealthBar {
    style: HealthBarStyle,
}

impl HealthBar {
    pub fn with_style(style: HealthBarStyle) -> Self {
        HealthBar { style }
    }

    pub fn style(&self) -> &HealthBarStyle {
        &self.style
    }

    /// Draws the bar just below `entity`, as wide as the entity
    pub fn render_below(&self, canvas: &mut Canvas<Window>, entity: Rect, fraction: f32) -> Result<(), String> {
        let bar = Rect::new(
            entity.x(),
            entity.bottom() + self.style.offset_y,
            entity.width(),
            self.style.height,
        );
        self.render_at(canvas, bar, fraction)
    }

    /// Draws the bar along the bottom of a `screen_width` x `screen_height` screen
    pub fn render_screen_bottom(
        &self,
        canvas: &mut Canvas<Window>,
        screen_width: u32,
        screen_height: u32,
        fraction: f32,
    ) -> Result<(), String> {
        let y = screen_height as i32 - self.style.height as i32 - self.style.offset_y;
        self.render_at(canvas, Rect::new(0, y, screen_width, self.style.height), fraction)
    }

    /// Draws the bar filling `bar`
    pub fn render_at(&self, canvas: &mut Canvas<Window>, bar: Rect, fraction: f32) -> Result<(), String> {
        canvas.set_blend_mode(BlendMode::Blend);

        canvas.set_draw_color(self.style.background_color);
        canvas.fill_rect(bar)?;

        let filled = fill_width(bar.width(), fraction);
        if filled > 0 {
            let color = if fraction <= self.style.low_threshold {
                self.style.low_health_color
            } else {
                self.style.health_color
            };
            canvas.set_draw_color(color);
            canvas.fill_rect(Rect::new(bar.x(), bar.y(), filled, bar.height()))?;
        }

        if let Some(border) = self.style.border_color {
            canvas.set_draw_color(border);
            canvas.draw_rect(bar)?;
        }

        canvas.set_blend_mode(BlendMode::None);
        Ok(())
    }
}

impl Default for HealthBar {
    fn default() -> Self {
        HealthBar::with_style(HealthBarStyle::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style_is_zombie_bar() {
        let bar = HealthBar::default();
        assert_eq!(bar.style().height, 5);
        assert_eq!(bar.style().offset_y, 5);
        assert!(bar.style().border_color.is_none());
    }

    #[test]
    fn test_screen_bottom_style() {
        let style = HealthBarStyle::screen_bottom();
        assert_eq!(style.height, 30);
        assert_eq!(style.background_color.a, 150);
    }

    #[test]
    fn test_fill_width_clamps() {
        assert_eq!(fill_width(200, 0.5), 100);
        assert_eq!(fill_width(200, 1.5), 200);
        assert_eq!(fill_width(200, -1.0), 0);
        assert_eq!(fill_width(200, f32::NAN), 0);
    }
}
