use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;
use std::path::PathBuf;

mod gui;
mod leaderboard;
mod state;
mod text;

use gui::{MainMenuButton, MenuView};
use leaderboard::Leaderboard;
use state::GameState;

// Window size constants
const WINDOW_WIDTH: u32 = 800;
const WINDOW_HEIGHT: u32 = 700;

/// Side length of the player square in the placeholder scene
const PLAYER_SIZE: u32 = 48;

/// Player colors cycled by the Change Color button
const PLAYER_COLORS: [Color; 4] = [
    Color::RGB(80, 180, 90),
    Color::RGB(200, 90, 80),
    Color::RGB(90, 120, 220),
    Color::RGB(220, 200, 80),
];

/// Resolves the per-user leaderboard file location
fn leaderboard_path() -> PathBuf {
    dirs::home_dir()
        .map(|p| p.join(".arcade-menu/leaderboard.json"))
        .unwrap_or_else(|| PathBuf::from("./leaderboard.json"))
}

/// Renders the placeholder gameplay scene
///
/// A colored player square at screen center plus one tick mark per point
/// along the top edge. The game-over overlay draws on top of this frame.
fn draw_playing_scene(
    canvas: &mut Canvas<Window>,
    player_color: Color,
    score: u32,
) -> Result<(), String> {
    canvas.set_draw_color(Color::RGB(15, 15, 20));
    canvas.clear();

    let player = Rect::new(
        (WINDOW_WIDTH - PLAYER_SIZE) as i32 / 2,
        (WINDOW_HEIGHT - PLAYER_SIZE) as i32 / 2,
        PLAYER_SIZE,
        PLAYER_SIZE,
    );
    canvas.set_draw_color(player_color);
    canvas.fill_rect(player)?;

    canvas.set_draw_color(Color::RGB(220, 220, 240));
    // The tick row is capped so it never runs off the right edge
    for i in 0..score.min(64) {
        canvas.fill_rect(Rect::new(10 + (i as i32 * 12), 10, 8, 8))?;
    }

    Ok(())
}

fn main() -> Result<(), String> {
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let ttf_context = sdl2::ttf::init().map_err(|e| e.to_string())?;

    let window = video_subsystem
        .window("Arcade Menu", WINDOW_WIDTH, WINDOW_HEIGHT)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let mut event_pump = sdl_context.event_pump()?;

    // Font loading happens here; a missing font aborts startup
    let mut menu_view = MenuView::new(&ttf_context, (WINDOW_WIDTH, WINDOW_HEIGHT))?;

    let leaderboard_file = leaderboard_path();
    let mut leaderboard = match Leaderboard::load(&leaderboard_file) {
        Ok(board) => {
            println!("Loaded leaderboard from {}", leaderboard_file.display());
            board
        }
        Err(_) => {
            println!("No existing leaderboard found, starting empty");
            Leaderboard::new()
        }
    };

    let mut game_state = GameState::MainMenu;
    let mut score: u32 = 0;
    let mut color_index = 0;

    println!("Controls:");
    println!("Arrows + Enter or mouse - Navigate the menus");
    println!("Space - Score a point");
    println!("ESC - End the current run");

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => break 'running,
                Event::MouseMotion { x, y, .. } => {
                    menu_view.handle_mouse_move(x, y, game_state);
                }
                Event::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    x,
                    y,
                    ..
                } => match game_state {
                    GameState::MainMenu => {
                        if menu_view.is_start_clicked(x, y) {
                            score = 0;
                            game_state = GameState::Playing;
                        } else if menu_view.is_change_color_clicked(x, y) {
                            color_index = (color_index + 1) % PLAYER_COLORS.len();
                        } else if menu_view.is_exit_clicked(x, y) {
                            break 'running;
                        }
                    }
                    GameState::GameOver => {
                        if menu_view.is_game_over_replay_clicked(x, y) {
                            score = 0;
                            game_state = GameState::Playing;
                        } else if menu_view.is_game_over_to_main_menu_clicked(x, y) {
                            game_state = GameState::MainMenu;
                            // Restore the highlight for the current selection
                            menu_view.select_button(menu_view.selected_index());
                        }
                    }
                    GameState::Playing => {}
                },
                Event::KeyDown {
                    keycode: Some(Keycode::Return),
                    ..
                } if game_state == GameState::MainMenu => {
                    menu_view.handle_keyboard_input(&event);
                    match menu_view.selected_button() {
                        MainMenuButton::Start => {
                            score = 0;
                            game_state = GameState::Playing;
                        }
                        MainMenuButton::ChangeColor => {
                            color_index = (color_index + 1) % PLAYER_COLORS.len();
                        }
                        MainMenuButton::Exit => break 'running,
                    }
                }
                Event::KeyDown { .. } if game_state == GameState::MainMenu => {
                    menu_view.handle_keyboard_input(&event);
                }
                Event::KeyDown {
                    keycode: Some(Keycode::Space),
                    ..
                } if game_state == GameState::Playing => {
                    score += 1;
                }
                Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } if game_state == GameState::Playing => {
                    leaderboard.record(score);
                    if let Err(e) = leaderboard.save(&leaderboard_file) {
                        eprintln!("Failed to save leaderboard: {}", e);
                    }
                    game_state = GameState::GameOver;
                }
                _ => {}
            }
        }

        match game_state {
            GameState::MainMenu => menu_view.draw_main_menu(&mut canvas)?,
            GameState::Playing => {
                draw_playing_scene(&mut canvas, PLAYER_COLORS[color_index], score)?
            }
            GameState::GameOver => {
                // The overlay darkens the final frame of the run
                draw_playing_scene(&mut canvas, PLAYER_COLORS[color_index], score)?;
                menu_view.draw_game_over_menu(&mut canvas, &leaderboard, score)?;
            }
        }

        canvas.present();

        // Cap framerate to ~60 FPS
        std::thread::sleep(std::time::Duration::new(0, 1_000_000_000u32 / 60));
    }

    Ok(())
}
