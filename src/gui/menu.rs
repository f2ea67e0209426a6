//! Base Menu Component
//!
//! A centered box with a title, optional body text and a vertical list of
//! items. Keyboard navigation wraps around; mouse clicks are resolved with
//! `item_at`. The main menu, intro, family selection and team selection
//! screens are all built from it.

use crate::text::{GLYPH_HEIGHT, draw_text, draw_text_centered, text_width};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;

/// Configuration for menu appearance
#[derive(Debug, Clone)]
pub struct MenuStyle {
    /// Menu box width in pixels
    pub width: u32,

    /// Background color
    pub background_color: Color,

    /// Border color
    pub border_color: Color,

    /// Overlay darkness (0-255, higher = darker)
    pub overlay_alpha: u8,

    pub title_color: Color,
    pub body_color: Color,
    pub item_color: Color,
    pub selected_item_color: Color,

    /// Selection highlight color
    pub highlight_color: Color,

    /// Color of the marker next to marked (picked) items
    pub mark_color: Color,
}

impl Default for MenuStyle {
    fn default() -> Self {
        MenuStyle {
            width: 760,
            background_color: Color::RGB(30, 30, 40),
            border_color: Color::RGB(100, 100, 120),
            overlay_alpha: 180,
            title_color: Color::RGB(220, 220, 240),
            body_color: Color::RGB(190, 190, 200),
            item_color: Color::RGB(160, 160, 170),
            selected_item_color: Color::RGB(255, 255, 255),
            highlight_color: Color::RGB(80, 100, 140),
            mark_color: Color::RGB(90, 220, 90),
        }
    }
}

const TITLE_SCALE: u32 = 4;
const BODY_SCALE: u32 = 2;
const ITEM_SCALE: u32 = 3;
const PADDING: u32 = 30;
const BODY_LINE: u32 = 24;
const ITEM_HEIGHT: u32 = 50;

/// A menu entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub text: String,
    /// Drawn with a check marker, e.g. a picked role
    pub marked: bool,
}

impl MenuItem {
    pub fn new(text: impl Into<String>) -> Self {
        MenuItem {
            text: text.into(),
            marked: false,
        }
    }
}

pub struct Menu {
    title: String,
    body: Vec<String>,
    items: Vec<MenuItem>,
    selected_index: usize,
    style: MenuStyle,
}

impl Menu {
    pub fn new(title: impl Into<String>, items: Vec<MenuItem>) -> Self {
        Menu {
            title: title.into(),
            body: Vec::new(),
            items,
            selected_index: 0,
            style: MenuStyle::default(),
        }
    }

    /// Adds lines of text between the title and the items
    pub fn with_body(mut self, lines: &[&str]) -> Self {
        self.body = lines.iter().map(|line| line.to_string()).collect();
        self
    }

    /// Move selection up (wraps to bottom)
    pub fn select_previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected_index = if self.selected_index == 0 {
            self.items.len() - 1
        } else {
            self.selected_index - 1
        };
    }

    /// Move selection down (wraps to top)
    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.items.len();
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn set_marked(&mut self, index: usize, marked: bool) {
        if let Some(item) = self.items.get_mut(index) {
            item.marked = marked;
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    fn height(&self) -> u32 {
        let mut height = PADDING + GLYPH_HEIGHT * TITLE_SCALE + PADDING;
        if !self.body.is_empty() {
            height += self.body.len() as u32 * BODY_LINE + PADDING;
        }
        height + self.items.len() as u32 * ITEM_HEIGHT + PADDING
    }

    fn frame(&self, screen: (u32, u32)) -> Rect {
        let width = self.style.width.min(screen.0);
        let height = self.height().min(screen.1);
        Rect::new(
            (screen.0 - width) as i32 / 2,
            (screen.1 - height) as i32 / 2,
            width,
            height,
        )
    }

    /// Screen rectangle of item `index` on a screen of size `screen`
    pub fn item_rect(&self, index: usize, screen: (u32, u32)) -> Rect {
        let frame = self.frame(screen);
        let mut top = frame.y() as u32 + PADDING + GLYPH_HEIGHT * TITLE_SCALE + PADDING;
        if !self.body.is_empty() {
            top += self.body.len() as u32 * BODY_LINE + PADDING;
        }
        Rect::new(
            frame.x() + 15,
            (top + index as u32 * ITEM_HEIGHT) as i32,
            frame.width().saturating_sub(30),
            ITEM_HEIGHT - 10,
        )
    }

    /// Index of the item under (`x`, `y`), if any; also selects it
    pub fn item_at(&mut self, x: i32, y: i32, screen: (u32, u32)) -> Option<usize> {
        let hit = (0..self.items.len()).find(|&i| self.item_rect(i, screen).contains_point((x, y)));
        if let Some(index) = hit {
            self.selected_index = index;
        }
        hit
    }

    /// Render the menu at screen center
    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        let screen = canvas.logical_size();

        canvas.set_blend_mode(BlendMode::Blend);
        canvas.set_draw_color(Color::RGBA(0, 0, 0, self.style.overlay_alpha));
        canvas.fill_rect(None)?;
        canvas.set_blend_mode(BlendMode::None);

        let frame = self.frame(screen);
        canvas.set_draw_color(self.style.background_color);
        canvas.fill_rect(frame)?;
        canvas.set_draw_color(self.style.border_color);
        canvas.draw_rect(frame)?;

        let center_x = frame.x() + frame.width() as i32 / 2;
        let mut y = frame.y() + PADDING as i32;
        draw_text_centered(canvas, &self.title, center_x, y, self.style.title_color, TITLE_SCALE)?;
        y += (GLYPH_HEIGHT * TITLE_SCALE + PADDING) as i32;

        for line in &self.body {
            draw_text_centered(canvas, line, center_x, y, self.style.body_color, BODY_SCALE)?;
            y += BODY_LINE as i32;
        }

        for (i, item) in self.items.iter().enumerate() {
            let rect = self.item_rect(i, screen);
            let is_selected = i == self.selected_index;
            if is_selected {
                canvas.set_draw_color(self.style.highlight_color);
                canvas.fill_rect(rect)?;
            }

            let text_y = rect.y() + (rect.height() as i32 - (GLYPH_HEIGHT * ITEM_SCALE) as i32) / 2;
            if item.marked {
                canvas.set_draw_color(self.style.mark_color);
                canvas.fill_rect(Rect::new(rect.x() + 20, text_y, GLYPH_HEIGHT * ITEM_SCALE, GLYPH_HEIGHT * ITEM_SCALE))?;
            }

            let color = if is_selected {
                self.style.selected_item_color
            } else {
                self.style.item_color
            };
            let text_x = center_x - text_width(&item.text, ITEM_SCALE) as i32 / 2;
            draw_text(canvas, &item.text, text_x, text_y, color, ITEM_SCALE)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> Menu {
        Menu::new(
            "FORTRESS",
            vec![MenuItem::new("START GAME"), MenuItem::new("QUIT")],
        )
    }

    #[test]
    fn test_navigation_wraps() {
        let mut m = menu();
        m.select_previous();
        assert_eq!(m.selected_index(), 1);
        m.select_next();
        assert_eq!(m.selected_index(), 0);
    }

    #[test]
    fn test_item_at_hits_item_rects() {
        let mut m = menu();
        let screen = (1280, 720);
        let second = m.item_rect(1, screen);
        let hit = m.item_at(second.x() + 5, second.y() + 5, screen);
        assert_eq!(hit, Some(1));
        assert_eq!(m.selected_index(), 1);
        assert_eq!(m.item_at(0, 0, screen), None);
    }

    #[test]
    fn test_body_pushes_items_down() {
        let plain = menu();
        let with_body = menu().with_body(&["ONE", "TWO"]);
        let screen = (1280, 720);
        assert!(with_body.item_rect(0, screen).y() > plain.item_rect(0, screen).y());
    }

    #[test]
    fn test_marking() {
        let mut m = menu();
        m.set_marked(0, true);
        m.set_marked(9, true);
        assert!(m.items()[0].marked);
        assert!(!m.items()[1].marked);
    }
}
