//! Shop Overlay
//!
//! Two tabs: upgrades (one row per catalogue entry) and repairs. The panel
//! only tracks what is selected; it turns clicks and key presses into a
//! `ShopCommand` and the game loop applies it to the world.

use crate::text::{GLYPH_HEIGHT, draw_text, draw_text_centered};
use fortress::GameWorld;
use fortress::stats::StatKind;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;

const PANEL_WIDTH: u32 = 820;
const PANEL_HEIGHT: u32 = 520;
const TAB_WIDTH: u32 = 220;
const TAB_HEIGHT: u32 = 50;
const ROW_HEIGHT: u32 = 48;
const SCALE: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopTab {
    Upgrades,
    Repairs,
}

impl ShopTab {
    pub const ALL: [ShopTab; 2] = [ShopTab::Upgrades, ShopTab::Repairs];

    pub fn label(&self) -> &'static str {
        match self {
            ShopTab::Upgrades => "UPGRADES",
            ShopTab::Repairs => "REPAIRS",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopCommand {
    Buy(StatKind),
    Repair,
    Close,
}

pub struct ShopPanel {
    tab: ShopTab,
    selected_row: usize,
    /// Result of the last command, shown at the bottom of the panel
    status: Option<String>,
}

impl Default for ShopPanel {
    fn default() -> Self {
        ShopPanel {
            tab: ShopTab::Upgrades,
            selected_row: 0,
            status: None,
        }
    }
}

impl ShopPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab(&self) -> ShopTab {
        self.tab
    }

    pub fn selected_row(&self) -> usize {
        self.selected_row
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }

    pub fn switch_tab(&mut self) {
        self.tab = match self.tab {
            ShopTab::Upgrades => ShopTab::Repairs,
            ShopTab::Repairs => ShopTab::Upgrades,
        };
        self.selected_row = 0;
    }

    fn row_count(&self, offers: &[StatKind]) -> usize {
        match self.tab {
            ShopTab::Upgrades => offers.len(),
            ShopTab::Repairs => 1,
        }
    }

    pub fn select_previous(&mut self, offers: &[StatKind]) {
        let rows = self.row_count(offers);
        if rows > 0 {
            self.selected_row = (self.selected_row + rows - 1) % rows;
        }
    }

    pub fn select_next(&mut self, offers: &[StatKind]) {
        let rows = self.row_count(offers);
        if rows > 0 {
            self.selected_row = (self.selected_row + 1) % rows;
        }
    }

    /// Command for the selected row
    pub fn activate(&self, offers: &[StatKind]) -> Option<ShopCommand> {
        match self.tab {
            ShopTab::Upgrades => offers.get(self.selected_row).map(|&stat| ShopCommand::Buy(stat)),
            ShopTab::Repairs => Some(ShopCommand::Repair),
        }
    }

    fn frame(screen: (u32, u32)) -> Rect {
        Rect::new(
            screen.0.saturating_sub(PANEL_WIDTH) as i32 / 2,
            screen.1.saturating_sub(PANEL_HEIGHT) as i32 / 2,
            PANEL_WIDTH,
            PANEL_HEIGHT,
        )
    }

    fn tab_rect(index: usize, screen: (u32, u32)) -> Rect {
        let frame = Self::frame(screen);
        Rect::new(
            frame.x() + 20 + (index as u32 * (TAB_WIDTH + 10)) as i32,
            frame.y() + 20,
            TAB_WIDTH,
            TAB_HEIGHT,
        )
    }

    fn row_rect(index: usize, screen: (u32, u32)) -> Rect {
        let frame = Self::frame(screen);
        Rect::new(
            frame.x() + 20,
            frame.y() + 100 + (index as u32 * ROW_HEIGHT) as i32,
            PANEL_WIDTH - 40,
            ROW_HEIGHT - 8,
        )
    }

    fn close_rect(screen: (u32, u32)) -> Rect {
        let frame = Self::frame(screen);
        Rect::new(frame.x() + 20, frame.bottom() - 60, PANEL_WIDTH - 40, 40)
    }

    /// Resolves a click at (`x`, `y`)
    ///
    /// Tab clicks switch tabs and return `None`; row clicks select the row
    /// and return its command.
    pub fn click(&mut self, x: i32, y: i32, screen: (u32, u32), offers: &[StatKind]) -> Option<ShopCommand> {
        if Self::close_rect(screen).contains_point((x, y)) {
            return Some(ShopCommand::Close);
        }
        for (i, tab) in ShopTab::ALL.iter().enumerate() {
            if Self::tab_rect(i, screen).contains_point((x, y)) {
                if *tab != self.tab {
                    self.switch_tab();
                }
                return None;
            }
        }
        let row = (0..self.row_count(offers)).find(|&i| Self::row_rect(i, screen).contains_point((x, y)))?;
        self.selected_row = row;
        self.activate(offers)
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, world: &GameWorld) -> Result<(), String> {
        let screen = canvas.logical_size();

        canvas.set_blend_mode(BlendMode::Blend);
        canvas.set_draw_color(Color::RGBA(0, 0, 0, 160));
        canvas.fill_rect(None)?;
        canvas.set_blend_mode(BlendMode::None);

        let frame = Self::frame(screen);
        canvas.set_draw_color(Color::RGB(40, 40, 50));
        canvas.fill_rect(frame)?;
        canvas.set_draw_color(Color::RGB(120, 120, 140));
        canvas.draw_rect(frame)?;

        for (i, tab) in ShopTab::ALL.iter().enumerate() {
            let rect = Self::tab_rect(i, screen);
            let color = if *tab == self.tab {
                Color::RGB(70, 130, 180)
            } else {
                Color::RGB(110, 110, 110)
            };
            canvas.set_draw_color(color);
            canvas.fill_rect(rect)?;
            let text_y = rect.y() + (TAB_HEIGHT - GLYPH_HEIGHT * SCALE) as i32 / 2;
            draw_text_centered(canvas, tab.label(), rect.center().x(), text_y, Color::WHITE, SCALE)?;
        }

        let rows: Vec<String> = match self.tab {
            ShopTab::Upgrades => world
                .shop()
                .offers()
                .iter()
                .map(|offer| format!("UPGRADE {}: {} MONEY (+{})", offer.stat.label(), offer.price, offer.boost))
                .collect(),
            ShopTab::Repairs => {
                let house = world.house();
                let cost = world.shop().repair_cost(house);
                vec![format!(
                    "REPAIR HOUSE {:.0}/{:.0}: {} SCRAP",
                    house.health.current(),
                    house.health.max(),
                    cost
                )]
            }
        };

        for (i, row) in rows.iter().enumerate() {
            let rect = Self::row_rect(i, screen);
            if i == self.selected_row {
                canvas.set_draw_color(Color::RGB(80, 100, 140));
                canvas.fill_rect(rect)?;
            }
            let text_y = rect.y() + (rect.height() - GLYPH_HEIGHT * SCALE) as i32 / 2;
            draw_text(canvas, row, rect.x() + 15, text_y, Color::WHITE, SCALE)?;
        }

        let footer_y = Self::close_rect(screen).y() - 40;
        let balance = format!(
            "MONEY: {}   SCRAP: {}",
            world.money(),
            world.materials().scrap
        );
        draw_text(canvas, &balance, frame.x() + 20, footer_y, Color::RGB(220, 220, 120), SCALE)?;
        if let Some(status) = &self.status {
            draw_text(canvas, status, frame.x() + 420, footer_y, Color::RGB(255, 140, 140), SCALE)?;
        }

        let close = Self::close_rect(screen);
        canvas.set_draw_color(Color::RGB(200, 50, 50));
        canvas.fill_rect(close)?;
        let text_y = close.y() + (close.height() - GLYPH_HEIGHT * SCALE) as i32 / 2;
        draw_text_centered(canvas, "CLOSE SHOP (B)", close.center().x(), text_y, Color::WHITE, SCALE)?;

        Ok(())
    }
}
