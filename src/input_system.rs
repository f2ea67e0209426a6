use fortress::character::MoveIntent;
use fortress::team::SetupStep;
use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Scancode};
use sdl2::mouse::MouseButton;

/// Actions the player can perform
///
/// Decouples SDL events from what the game does with them. Held controls
/// (movement keys, the fire button, Tab) are read separately each frame by
/// `held_movement` and `stats_held`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    // === Menu Navigation ===
    MenuUp,
    MenuDown,
    MenuLeft,
    MenuRight,
    MenuConfirm,

    // === Gameplay ===
    ToggleHouse,
    ToggleShop,
    NextDay,
    /// Wheel steps, positive to zoom in
    Zoom(i32),
    /// Left press in the world; the HUD may claim it before it fires
    FireStart(i32, i32),
    FireStop,
    SpawnZombie(i32, i32),

    // === Mouse ===
    LeftClick(i32, i32),
    MouseMove(i32, i32),

    // === System ===
    Quit,
}

/// Which set of bindings is live
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Main menu, intro, family and team screens
    Setup,
    Playing,
    Shop,
}

impl InputContext {
    pub fn for_setup_step(step: SetupStep) -> Self {
        match step {
            SetupStep::Playing => InputContext::Playing,
            SetupStep::MainMenu | SetupStep::Intro | SetupStep::FamilySelection | SetupStep::TeamSelection => {
                InputContext::Setup
            }
        }
    }
}

pub struct InputSystem {
    pub context: InputContext,
}

impl InputSystem {
    pub fn new() -> Self {
        InputSystem {
            context: InputContext::Setup,
        }
    }

    /// Drains pending SDL events into actions for the current context
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<GameAction> {
        let mut actions = Vec::new();

        for event in event_pump.poll_iter() {
            let action = match event {
                Event::Quit { .. } => Some(GameAction::Quit),
                Event::KeyDown {
                    keycode: Some(key),
                    repeat: false,
                    ..
                } => self.map_key(key),
                Event::MouseButtonDown { mouse_btn, x, y, .. } => self.map_mouse_down(mouse_btn, x, y),
                Event::MouseButtonUp {
                    mouse_btn: MouseButton::Left,
                    ..
                } => Some(GameAction::FireStop),
                Event::MouseMotion { x, y, .. } => Some(GameAction::MouseMove(x, y)),
                Event::MouseWheel { y, .. } if self.context == InputContext::Playing && y != 0 => {
                    Some(GameAction::Zoom(y.signum()))
                }
                _ => None,
            };
            actions.extend(action);
        }

        actions
    }

    /// Translates a key press
    pub fn map_key(&self, key: Keycode) -> Option<GameAction> {
        if key == Keycode::Escape {
            return Some(GameAction::Quit);
        }
        match self.context {
            InputContext::Setup => match key {
                Keycode::Up => Some(GameAction::MenuUp),
                Keycode::Down => Some(GameAction::MenuDown),
                Keycode::Return | Keycode::Space => Some(GameAction::MenuConfirm),
                _ => None,
            },
            InputContext::Playing => match key {
                Keycode::E => Some(GameAction::ToggleHouse),
                Keycode::B => Some(GameAction::ToggleShop),
                Keycode::N => Some(GameAction::NextDay),
                _ => None,
            },
            InputContext::Shop => match key {
                Keycode::B => Some(GameAction::ToggleShop),
                Keycode::Up => Some(GameAction::MenuUp),
                Keycode::Down => Some(GameAction::MenuDown),
                Keycode::Left => Some(GameAction::MenuLeft),
                Keycode::Right => Some(GameAction::MenuRight),
                Keycode::Return | Keycode::Space => Some(GameAction::MenuConfirm),
                _ => None,
            },
        }
    }

    /// Translates a mouse button press at (`x`, `y`)
    pub fn map_mouse_down(&self, button: MouseButton, x: i32, y: i32) -> Option<GameAction> {
        match (self.context, button) {
            (InputContext::Playing, MouseButton::Left) => Some(GameAction::FireStart(x, y)),
            (InputContext::Playing, MouseButton::Right) => Some(GameAction::SpawnZombie(x, y)),
            (InputContext::Setup | InputContext::Shop, MouseButton::Left) => Some(GameAction::LeftClick(x, y)),
            _ => None,
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// WASD state this frame
pub fn held_movement(event_pump: &EventPump) -> MoveIntent {
    let keys = event_pump.keyboard_state();
    MoveIntent {
        up: keys.is_scancode_pressed(Scancode::W),
        down: keys.is_scancode_pressed(Scancode::S),
        left: keys.is_scancode_pressed(Scancode::A),
        right: keys.is_scancode_pressed(Scancode::D),
    }
}

/// True while Tab is held
pub fn stats_held(event_pump: &EventPump) -> bool {
    event_pump.keyboard_state().is_scancode_pressed(Scancode::Tab)
}
