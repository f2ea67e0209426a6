//! World rendering
//!
//! Draw order, back to front: grass, drops, house, character, zombies with
//! their health bars, bullets. Zoom scales the house about the screen center,
//! the character about its own center and zombies from their top-left
//! corner. Bullets carry the size they were fired at; drops never scale.

use crate::assets::{self, Sprites};
use crate::ui::HealthBar;
use fortress::GameWorld;
use fortress::collision::Bounds;
use glam::Vec2;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Converts world bounds to an SDL rect, never smaller than 1x1
pub fn to_rect(bounds: Bounds) -> Rect {
    Rect::new(
        bounds.x.round() as i32,
        bounds.y.round() as i32,
        bounds.width.round().max(1.0) as u32,
        bounds.height.round().max(1.0) as u32,
    )
}

/// `bounds` scaled by `zoom` about its center
pub fn scaled_about_center(bounds: Bounds, zoom: f32) -> Bounds {
    Bounds::centered(bounds.center(), bounds.width * zoom, bounds.height * zoom)
}

/// `bounds` scaled by `zoom` keeping the top-left corner fixed
pub fn scaled_from_corner(bounds: Bounds, zoom: f32) -> Bounds {
    Bounds::new(bounds.x, bounds.y, bounds.width * zoom, bounds.height * zoom)
}

fn draw_grass(canvas: &mut Canvas<Window>, sprites: &Sprites) -> Result<(), String> {
    let Some(grass) = sprites.grass.as_ref() else {
        canvas.set_draw_color(assets::GRASS_COLOR);
        return canvas.fill_rect(None);
    };
    let (width, height) = canvas.logical_size();
    for y in (0..height).step_by(assets::GRASS_TILE as usize) {
        for x in (0..width).step_by(assets::GRASS_TILE as usize) {
            canvas.copy(grass, None, Rect::new(x as i32, y as i32, assets::GRASS_TILE, assets::GRASS_TILE))?;
        }
    }
    Ok(())
}

pub fn render_world(
    canvas: &mut Canvas<Window>,
    world: &GameWorld,
    sprites: &Sprites,
    zombie_bar: &HealthBar,
) -> Result<(), String> {
    use fortress::collision::Collidable;

    let zoom = world.zoom();
    draw_grass(canvas, sprites)?;

    for drop in world.drops() {
        let rect = to_rect(drop.get_bounds());
        assets::draw_or_fill(canvas, sprites.drop_texture(drop.kind), rect, assets::drop_color(drop.kind))?;
    }

    let house = world.house();
    let house_rect = to_rect(Bounds::centered(house.center(), house.size * zoom, house.size * zoom));
    if house.is_destroyed() {
        canvas.set_draw_color(assets::RUBBLE_COLOR);
        canvas.fill_rect(house_rect)?;
    } else {
        assets::draw_or_fill(canvas, sprites.house.as_ref(), house_rect, assets::HOUSE_COLOR)?;
    }

    let character = world.character();
    if character.is_visible() {
        canvas.set_draw_color(assets::CHARACTER_COLOR);
        canvas.fill_rect(to_rect(scaled_about_center(character.get_bounds(), zoom)))?;
    }

    for zombie in world.zombies() {
        let rect = to_rect(scaled_from_corner(zombie.get_bounds(), zoom));
        canvas.set_draw_color(assets::ZOMBIE_COLOR);
        canvas.fill_rect(rect)?;
        zombie_bar.render_below(canvas, rect, zombie.health.fraction())?;
    }

    for bullet in world.bullets() {
        let rect = to_rect(bullet.get_bounds());
        // SDL rotates clockwise; bullet angles run counter-clockwise
        assets::draw_rotated_or_fill(canvas, sprites.bullet.as_ref(), rect, -bullet.angle, assets::BULLET_COLOR)?;
    }

    Ok(())
}

/// Converts a cursor position in logical pixels to world units
pub fn cursor_to_world(x: i32, y: i32) -> Vec2 {
    Vec2::new(x as f32, y as f32)
}
