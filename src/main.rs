mod ai;
mod assets;
mod collision;
mod enemy;
mod entity;
mod events;
mod level;
mod player;
mod state;
mod text;

use crate::assets::AssetManager;
use crate::events::{EventManager, InputEvent};
use crate::state::{
    GAME_OVER, GAMEPLAY, MAIN_MENU, PAUSE, StateManager,
    game_over::GameOver, gameplay::Gameplay, main_menu::MainMenu, pause::Pause,
};
use sdl2::image::InitFlag;
use sdl2::pixels::Color;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub const SCREEN_WIDTH: u32 = 800;
pub const SCREEN_HEIGHT: u32 = 600;

const ASSET_CONFIG: &str = "assets_config.json";
const FRAME_TIME: Duration = Duration::from_nanos(1_000_000_000 / 60);

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(InitFlag::PNG)?;
    let _mixer_context = sdl2::mixer::init(sdl2::mixer::InitFlag::OGG)?;
    sdl2::mixer::open_audio(
        44_100,
        sdl2::mixer::DEFAULT_FORMAT,
        sdl2::mixer::DEFAULT_CHANNELS,
        1_024,
    )?;

    let window = video_subsystem
        .window("Dungeon Chase", SCREEN_WIDTH, SCREEN_HEIGHT)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;
    let mut canvas = window
        .into_canvas()
        .accelerated()
        .build()
        .map_err(|e| e.to_string())?;
    let texture_creator = canvas.texture_creator();

    let mut assets = AssetManager::new(&texture_creator);
    assets.load_from_config(ASSET_CONFIG)?;
    let player_size = assets.image_size("player")?;
    let enemy_size = assets.image_size("enemy")?;

    let mut event_manager = EventManager::new();
    let mut states = StateManager::new();
    states.add_state(MAIN_MENU, Box::new(MainMenu::new()));
    states.add_state(GAMEPLAY, Box::new(Gameplay::new(player_size, enemy_size)));
    states.add_state(PAUSE, Box::new(Pause::new()));
    states.add_state(GAME_OVER, Box::new(GameOver::new()));
    states.change_state(MAIN_MENU, &mut event_manager);

    info!("starting main loop");
    let mut event_pump = sdl_context.event_pump()?;

    'running: loop {
        // One poll per frame. The same batch feeds direct delegation to
        // the current state and then the pub/sub fan-out.
        let batch: Vec<InputEvent> = event_pump
            .poll_iter()
            .filter_map(|e| InputEvent::from_sdl(&e))
            .collect();

        for event in &batch {
            if matches!(event, InputEvent::Quit) {
                break 'running;
            }
            if let Some(command) = states.handle_event(event) {
                if states.apply(command, &mut event_manager) {
                    break 'running;
                }
            }
        }

        // Commands raised mid-dispatch are collected and applied after
        // the batch so the listener snapshot stays coherent.
        let mut commands = Vec::new();
        let quit = event_manager.process_events(&batch, &mut |name, event| {
            if let Some(command) = states.deliver(name, event) {
                commands.push(command);
            }
        });
        if quit {
            break 'running;
        }
        for command in commands {
            if states.apply(command, &mut event_manager) {
                break 'running;
            }
        }

        if let Some(command) = states.update() {
            if states.apply(command, &mut event_manager) {
                break 'running;
            }
        }

        canvas.set_draw_color(Color::RGB(0, 0, 0));
        canvas.clear();
        states.draw(&mut canvas, &assets)?;
        canvas.present();

        std::thread::sleep(FRAME_TIME);
    }

    info!("shutting down");
    Ok(())
}
