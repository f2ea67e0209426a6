use clap::Parser;
use fortress::game::SimClock;
use fortress::stats::StatKind;
use fortress::team::{Family, INTRO_LINES, Role, SetupFlow, SetupStep, Team};
use fortress::{GameConfig, GameWorld, PlayerInput, logging};
use sdl2::pixels::Color;
use std::path::PathBuf;
use std::time::{Duration, Instant};

mod assets;
mod gui;
mod input_system;
mod render;
mod text;
mod ui;

use assets::Sprites;
use gui::{Menu, MenuItem, ShopCommand, ShopPanel};
use input_system::{GameAction, InputContext, InputSystem};
use ui::{HealthBar, HealthBarStyle};

const WINDOW_TITLE: &str = "Fortress of the Undead";
const FRAME_TIME: Duration = Duration::from_nanos(1_000_000_000 / 60);

#[derive(Parser, Debug)]
#[command(name = "fortress", about = "Hold the house against the undead")]
struct Args {
    /// JSON tuning file (overrides FORTRESS_CONFIG and the user config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding the sprite images
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    /// Seed the random source for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

/// What a confirmed setup screen asks the loop to do
enum SetupOutcome {
    Quit,
    Start(Team),
}

/// One menu per setup step, kept alive so selections survive redraws
struct SetupScreens {
    flow: SetupFlow,
    main_menu: Menu,
    intro: Menu,
    families: Menu,
    roles: Menu,
}

impl SetupScreens {
    fn new() -> Self {
        let mut role_items: Vec<MenuItem> = Role::ALL.iter().map(|role| MenuItem::new(role.label())).collect();
        role_items.push(MenuItem::new("CONFIRM TEAM"));

        SetupScreens {
            flow: SetupFlow::new(),
            main_menu: Menu::new(
                "FORTRESS OF THE UNDEAD",
                vec![MenuItem::new("START GAME"), MenuItem::new("QUIT")],
            ),
            intro: Menu::new("THE JOB", vec![MenuItem::new("CONTINUE")]).with_body(&INTRO_LINES),
            families: Menu::new(
                "WHO WILL YOU PROTECT?",
                Family::ALL.iter().map(|family| MenuItem::new(family.label())).collect(),
            ),
            roles: Menu::new("PICK YOUR TEAM", role_items).with_body(&["CHOOSE TWO ROLES"]),
        }
    }

    fn menu_mut(&mut self) -> Option<&mut Menu> {
        match self.flow.step() {
            SetupStep::MainMenu => Some(&mut self.main_menu),
            SetupStep::Intro => Some(&mut self.intro),
            SetupStep::FamilySelection => Some(&mut self.families),
            SetupStep::TeamSelection => Some(&mut self.roles),
            SetupStep::Playing => None,
        }
    }

    fn render(&self, canvas: &mut sdl2::render::Canvas<sdl2::video::Window>) -> Result<(), String> {
        match self.flow.step() {
            SetupStep::MainMenu => self.main_menu.render(canvas),
            SetupStep::Intro => self.intro.render(canvas),
            SetupStep::FamilySelection => self.families.render(canvas),
            SetupStep::TeamSelection => self.roles.render(canvas),
            SetupStep::Playing => Ok(()),
        }
    }

    /// Acts on the selected item of the current screen
    fn confirm(&mut self) -> Option<SetupOutcome> {
        match self.flow.step() {
            SetupStep::MainMenu => {
                if self.main_menu.selected_index() == 1 {
                    return Some(SetupOutcome::Quit);
                }
                self.flow.start();
            }
            SetupStep::Intro => self.flow.continue_intro(),
            SetupStep::FamilySelection => {
                if let Some(&family) = Family::ALL.get(self.families.selected_index()) {
                    self.flow.choose_family(family);
                }
            }
            SetupStep::TeamSelection => {
                let index = self.roles.selected_index();
                match Role::ALL.get(index) {
                    Some(&role) => match self.flow.toggle_role(role) {
                        Ok(picked) => self.roles.set_marked(index, picked),
                        Err(e) => log::info!("{}", e),
                    },
                    None => match self.flow.confirm_team() {
                        Ok(team) => return Some(SetupOutcome::Start(team)),
                        Err(e) => log::info!("{}", e),
                    },
                }
            }
            SetupStep::Playing => {}
        }
        None
    }
}

/// A game in progress
struct Session {
    world: GameWorld,
    shop: ShopPanel,
    shop_open: bool,
    fire_held: bool,
}

impl Session {
    fn offers(&self) -> Vec<StatKind> {
        self.world.shop().offers().iter().map(|offer| offer.stat).collect()
    }

    fn apply_shop_command(&mut self, command: ShopCommand) {
        match command {
            ShopCommand::Buy(stat) => match self.world.purchase_upgrade(stat) {
                Ok(purchase) => self.shop.set_status(format!("{} UPGRADED", purchase.stat.label().to_uppercase())),
                Err(e) => self.shop.set_status(e.to_string().to_uppercase()),
            },
            ShopCommand::Repair => match self.world.repair_house() {
                Ok(cost) => self.shop.set_status(format!("REPAIRED FOR {} SCRAP", cost)),
                Err(e) => self.shop.set_status(e.to_string().to_uppercase()),
            },
            ShopCommand::Close => self.shop_open = false,
        }
    }
}

enum Screen {
    Setup(SetupScreens),
    Playing(Session),
}

fn main() -> Result<(), String> {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = GameConfig::discover(args.config.as_deref()).sanitized();
    let screen_width = config.screen_width.round() as u32;
    let screen_height = config.screen_height.round() as u32;

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window = video_subsystem
        .window(WINDOW_TITLE, screen_width, screen_height)
        .position_centered()
        .resizable()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    canvas
        .set_logical_size(screen_width, screen_height)
        .map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let sprites = Sprites::load(&texture_creator, &args.assets);
    let mut event_pump = sdl_context.event_pump()?;

    let zombie_bar = HealthBar::default();
    let bottom_bar = HealthBar::with_style(HealthBarStyle::screen_bottom());

    let mut input = InputSystem::new();
    let mut clock = SimClock::new(config.tick_rate);
    let mut screen = Screen::Setup(SetupScreens::new());
    let mut cursor = (0, 0);
    let mut last_frame = Instant::now();

    log::info!("{} started ({}x{})", WINDOW_TITLE, screen_width, screen_height);

    'running: loop {
        let frame_start = Instant::now();
        input.context = match &screen {
            Screen::Setup(setup) => InputContext::for_setup_step(setup.flow.step()),
            Screen::Playing(session) if session.shop_open => InputContext::Shop,
            Screen::Playing(_) => InputContext::Playing,
        };

        let logical = canvas.logical_size();
        for action in input.poll_events(&mut event_pump) {
            if action == GameAction::Quit {
                break 'running;
            }
            if let GameAction::MouseMove(x, y) | GameAction::LeftClick(x, y) | GameAction::FireStart(x, y) =
                action
            {
                cursor = (x, y);
            }

            let mut chosen_team = None;
            match &mut screen {
                Screen::Setup(setup) => {
                    let confirmed = match action {
                        GameAction::MenuUp => {
                            if let Some(menu) = setup.menu_mut() {
                                menu.select_previous();
                            }
                            None
                        }
                        GameAction::MenuDown => {
                            if let Some(menu) = setup.menu_mut() {
                                menu.select_next();
                            }
                            None
                        }
                        GameAction::MenuConfirm => setup.confirm(),
                        GameAction::LeftClick(x, y) => {
                            let hit = setup.menu_mut().and_then(|menu| menu.item_at(x, y, logical));
                            hit.and_then(|_| setup.confirm())
                        }
                        _ => None,
                    };
                    match confirmed {
                        Some(SetupOutcome::Quit) => break 'running,
                        Some(SetupOutcome::Start(team)) => chosen_team = Some(team),
                        None => {}
                    }
                }
                Screen::Playing(session) => handle_playing_action(session, action, logical),
            }

            if let Some(team) = chosen_team {
                let world = match args.seed {
                    Some(seed) => GameWorld::with_seed(config.clone(), team, seed),
                    None => GameWorld::new(config.clone(), team),
                };
                screen = Screen::Playing(Session {
                    world,
                    shop: ShopPanel::new(),
                    shop_open: false,
                    fire_held: false,
                });
                last_frame = Instant::now();
            }
        }

        let now = Instant::now();
        let frame_time = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        canvas.set_draw_color(Color::RGB(0, 0, 0));
        canvas.clear();

        match &mut screen {
            Screen::Setup(setup) => setup.render(&mut canvas)?,
            Screen::Playing(session) => {
                session.world.set_input(PlayerInput {
                    movement: input_system::held_movement(&event_pump),
                    fire_held: session.fire_held && !session.shop_open,
                    aim: render::cursor_to_world(cursor.0, cursor.1),
                });
                for _ in 0..clock.advance(frame_time) {
                    session.world.tick(clock.step());
                }

                render::render_world(&mut canvas, &session.world, &sprites, &zombie_bar)?;
                gui::hud::render(&mut canvas, &session.world.hud(), &bottom_bar)?;
                if input_system::stats_held(&event_pump) {
                    gui::stat_window::render(&mut canvas, session.world.stats())?;
                }
                if session.shop_open {
                    session.shop.render(&mut canvas, &session.world)?;
                }
            }
        }

        canvas.present();

        // Cap framerate to ~60 FPS
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            std::thread::sleep(FRAME_TIME - elapsed);
        }
    }

    log::info!("goodbye");
    Ok(())
}

fn handle_playing_action(session: &mut Session, action: GameAction, logical: (u32, u32)) {
    let offers = session.offers();
    match action {
        GameAction::ToggleShop => {
            session.shop_open = !session.shop_open;
            session.fire_held = false;
        }
        GameAction::ToggleHouse => {
            if !session.world.toggle_house() {
                log::debug!("too far from the house to enter");
            }
        }
        GameAction::NextDay => start_next_day(session),
        GameAction::Zoom(steps) => {
            session.world.adjust_zoom(steps);
        }
        GameAction::FireStart(x, y) => {
            let button = gui::hud::next_day_button(&session.world.hud());
            if button.is_some_and(|rect| rect.contains_point((x, y))) {
                start_next_day(session);
            } else {
                session.fire_held = true;
            }
        }
        GameAction::FireStop => session.fire_held = false,
        GameAction::SpawnZombie(x, y) => session.world.spawn_zombie_at(render::cursor_to_world(x, y)),
        GameAction::MenuUp => session.shop.select_previous(&offers),
        GameAction::MenuDown => session.shop.select_next(&offers),
        GameAction::MenuLeft | GameAction::MenuRight => session.shop.switch_tab(),
        GameAction::MenuConfirm => {
            if let Some(command) = session.shop.activate(&offers) {
                session.apply_shop_command(command);
            }
        }
        GameAction::LeftClick(x, y) => {
            if let Some(command) = session.shop.click(x, y, logical, &offers) {
                session.apply_shop_command(command);
            }
        }
        GameAction::MouseMove(..) | GameAction::Quit => {}
    }
}

fn start_next_day(session: &mut Session) {
    if !session.world.confirm_next_day() {
        log::debug!("next day is only available once the wave is cleared");
    }
}
