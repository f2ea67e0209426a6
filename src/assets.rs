//! Sprite textures with solid-color fallbacks
//!
//! Every texture is optional. A file that is missing or fails to decode is
//! logged once at `warn` and the entity is drawn as a filled rectangle in its
//! fallback color instead, so the game runs from a bare checkout.

use fortress::drops::ResourceKind;
use sdl2::image::LoadTexture;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use std::path::Path;

pub const HOUSE_COLOR: Color = Color::RGB(100, 100, 100);
pub const RUBBLE_COLOR: Color = Color::RGB(139, 69, 19);
pub const GRASS_COLOR: Color = Color::RGB(60, 120, 50);
pub const CHARACTER_COLOR: Color = Color::RGB(30, 60, 200);
pub const ZOMBIE_COLOR: Color = Color::RGB(0, 255, 0);
pub const BULLET_COLOR: Color = Color::RGB(230, 200, 60);

/// Size the grass texture is tiled at
pub const GRASS_TILE: u32 = 64;

pub fn drop_color(kind: ResourceKind) -> Color {
    match kind {
        ResourceKind::Food => Color::RGB(200, 160, 90),
        ResourceKind::Ammo => Color::RGB(90, 110, 60),
        ResourceKind::Scrap => Color::RGB(150, 150, 160),
    }
}

/// Loads a texture, logging and returning `None` on failure
fn load_optional<'a>(creator: &'a TextureCreator<WindowContext>, dir: &Path, file: &str) -> Option<Texture<'a>> {
    let path = dir.join(file);
    match creator.load_texture(&path) {
        Ok(texture) => {
            log::debug!("loaded {}", path.display());
            Some(texture)
        }
        Err(e) => {
            log::warn!("could not load {} ({}); using a solid color", path.display(), e);
            None
        }
    }
}

pub struct Sprites<'a> {
    pub house: Option<Texture<'a>>,
    pub grass: Option<Texture<'a>>,
    pub bullet: Option<Texture<'a>>,
    pub ammo: Option<Texture<'a>>,
    pub food: Option<Texture<'a>>,
    pub scrap: Option<Texture<'a>>,
}

impl<'a> Sprites<'a> {
    pub fn load(creator: &'a TextureCreator<WindowContext>, dir: &Path) -> Self {
        Sprites {
            house: load_optional(creator, dir, "starterhouseIMG.png"),
            grass: load_optional(creator, dir, "grass.png"),
            bullet: load_optional(creator, dir, "5.56Ammo.png"),
            ammo: load_optional(creator, dir, "AmmoCrateIMG.png"),
            food: load_optional(creator, dir, "FoodBagIMG.png"),
            scrap: load_optional(creator, dir, "scrapIMG.png"),
        }
    }

    pub fn drop_texture(&self, kind: ResourceKind) -> Option<&Texture<'a>> {
        match kind {
            ResourceKind::Food => self.food.as_ref(),
            ResourceKind::Ammo => self.ammo.as_ref(),
            ResourceKind::Scrap => self.scrap.as_ref(),
        }
    }
}

/// Copies `texture` into `rect`, or fills `rect` with `fallback`
pub fn draw_or_fill(
    canvas: &mut Canvas<Window>,
    texture: Option<&Texture>,
    rect: Rect,
    fallback: Color,
) -> Result<(), String> {
    match texture {
        Some(texture) => canvas.copy(texture, None, rect),
        None => {
            canvas.set_draw_color(fallback);
            canvas.fill_rect(rect)
        }
    }
}

/// Like `draw_or_fill`, rotating the texture by `angle` degrees about its center
pub fn draw_rotated_or_fill(
    canvas: &mut Canvas<Window>,
    texture: Option<&Texture>,
    rect: Rect,
    angle: f32,
    fallback: Color,
) -> Result<(), String> {
    match texture {
        Some(texture) => canvas.copy_ex(texture, None, rect, f64::from(angle), None, false, false),
        None => {
            canvas.set_draw_color(fallback);
            canvas.fill_rect(rect)
        }
    }
}
