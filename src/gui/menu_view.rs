//! Main Menu and Game-Over Screens
//!
//! The menu view owns the button layout for both screens plus the loaded
//! fonts, and answers the hit-test queries the host loop uses to drive mode
//! transitions. Drawing goes to a canvas borrowed from the caller.
//!
//! The main menu supports mouse hover and keyboard navigation with a single
//! highlighted button; the game-over screen draws outlined buttons without
//! the highlighting path.

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas};
use sdl2::ttf::{Font, FontStyle, Sdl2TtfContext};
use sdl2::video::Window;

use super::button::{ButtonGroup, ButtonPalette};
use crate::leaderboard::Leaderboard;
use crate::state::GameState;
use crate::text::draw_text_centered;

/// Font used for every piece of menu text
const FONT_PATH: &str = "assets/fonts/DejaVuSans.ttf";

/// Top edge of the first main-menu button
const MAIN_MENU_TOP_Y: i32 = 150;

/// Top edge of the first game-over button
const GAME_OVER_TOP_Y: i32 = 500;

/// Outline thickness of the game-over buttons
const GAME_OVER_OUTLINE: u32 = 3;

/// Alpha of the game-over background overlay
const OVERLAY_ALPHA: u8 = 150;

// Point sizes per text role
const LABEL_POINT_SIZE: u16 = 24;
const BUTTON_POINT_SIZE: u16 = 30;
const CAPTION_POINT_SIZE: u16 = 35;
const SCORE_POINT_SIZE: u16 = 40;
const TITLE_POINT_SIZE: u16 = 60;

/// The three main-menu buttons, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuButton {
    Start = 0,
    ChangeColor = 1,
    Exit = 2,
}

/// One font per text role, all loaded from [`FONT_PATH`]
///
/// SDL_ttf fonts are loaded at a fixed point size, so every size the menus
/// use is opened up front. Loading happens once at view construction and is
/// the only operation in this module that can fail.
struct MenuFonts<'ttf> {
    /// Main-menu button labels (bold)
    label: Font<'ttf, 'static>,
    /// Game-over button labels
    button: Font<'ttf, 'static>,
    /// "Top Score" line
    caption: Font<'ttf, 'static>,
    /// "Your Score" line
    score: Font<'ttf, 'static>,
    /// "Game Over" title
    title: Font<'ttf, 'static>,
}

impl<'ttf> MenuFonts<'ttf> {
    fn load(ttf: &'ttf Sdl2TtfContext) -> Result<Self, String> {
        let open = |size: u16| {
            ttf.load_font(FONT_PATH, size)
                .map_err(|e| format!("Failed to load font {}: {}", FONT_PATH, e))
        };

        let mut label = open(LABEL_POINT_SIZE)?;
        label.set_style(FontStyle::BOLD);

        Ok(MenuFonts {
            label,
            button: open(BUTTON_POINT_SIZE)?,
            caption: open(CAPTION_POINT_SIZE)?,
            score: open(SCORE_POINT_SIZE)?,
            title: open(TITLE_POINT_SIZE)?,
        })
    }
}

/// State of the main-menu and game-over screens
///
/// # Example
///
/// ```rust
/// use crate::gui::MenuView;
///
/// let ttf_context = sdl2::ttf::init().map_err(|e| e.to_string())?;
/// let mut menu_view = MenuView::new(&ttf_context, (800, 700))?;
///
/// // Event handling
/// menu_view.handle_mouse_move(x, y, game_state);
///
/// // Rendering
/// menu_view.draw_main_menu(&mut canvas)?;
///
/// // Hit-test query on click
/// if menu_view.is_start_clicked(x, y) {
///     start_game();
/// }
/// ```
pub struct MenuView<'ttf> {
    fonts: MenuFonts<'ttf>,
    window_size: (u32, u32),
    main_menu: ButtonGroup,
    game_over: ButtonGroup,
}

impl<'ttf> MenuView<'ttf> {
    /// Creates the view: lays out both button groups and loads the fonts
    ///
    /// Font loading is the only failure path; an `Err` here should abort
    /// startup. The first main-menu button starts highlighted.
    pub fn new(ttf: &'ttf Sdl2TtfContext, window_size: (u32, u32)) -> Result<Self, String> {
        let fonts = MenuFonts::load(ttf)?;

        let mut main_menu = ButtonGroup::stacked(
            &["Start", "Change Color", "Exit"],
            ButtonPalette::default(),
            window_size.0,
            MAIN_MENU_TOP_Y,
            0,
        );
        main_menu.set_active(Some(0));

        let game_over = ButtonGroup::stacked(
            &["Retry", "Main Menu"],
            ButtonPalette::default(),
            window_size.0,
            GAME_OVER_TOP_Y,
            GAME_OVER_OUTLINE,
        );

        Ok(MenuView {
            fonts,
            window_size,
            main_menu,
            game_over,
        })
    }

    /// Draws the main menu: background clear plus the three buttons
    pub fn draw_main_menu(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        canvas.set_draw_color(self.main_menu.palette().background);
        canvas.clear();
        self.main_menu.render(canvas, &self.fonts.label)
    }

    /// Draws the game-over screen over the current frame
    ///
    /// Renders a translucent overlay, the title, the score lines and the two
    /// outlined buttons. The top-score line is omitted when the leaderboard
    /// has no entries. Buttons draw at their stored rects, so the clickable
    /// regions always match what is on screen.
    pub fn draw_game_over_menu(
        &self,
        canvas: &mut Canvas<Window>,
        leaderboard: &Leaderboard,
        current_score: u32,
    ) -> Result<(), String> {
        let (width, height) = self.window_size;
        let palette = self.game_over.palette();

        let bg = palette.background;
        canvas.set_blend_mode(BlendMode::Blend);
        canvas.set_draw_color(Color::RGBA(bg.r, bg.g, bg.b, OVERLAY_ALPHA));
        canvas.fill_rect(Rect::new(0, 0, width, height))?;
        canvas.set_blend_mode(BlendMode::None);

        let text_color = palette.selected_text_color;

        draw_text_centered(
            canvas,
            &self.fonts.title,
            "Game Over",
            width,
            (height as f32 * 0.2) as i32,
            text_color,
        )?;

        draw_text_centered(
            canvas,
            &self.fonts.score,
            &format!("Your Score: {}", current_score),
            width,
            (height as f32 * 0.4) as i32,
            text_color,
        )?;

        if let Some(top) = leaderboard.top() {
            draw_text_centered(
                canvas,
                &self.fonts.caption,
                &format!("Top Score: {}", top.score),
                width,
                (height as f32 * 0.5) as i32,
                text_color,
            )?;
        }

        self.game_over.render(canvas, &self.fonts.button)
    }

    /// Updates the main-menu hover highlight from a mouse position
    ///
    /// No-op outside the main-menu mode. Hits resolve in button priority
    /// order (Start, Change Color, Exit); a miss clears the highlight.
    pub fn handle_mouse_move(&mut self, x: i32, y: i32, state: GameState) {
        if state != GameState::MainMenu {
            return;
        }
        self.main_menu.hover(x, y);
    }

    /// Handles a keyboard event for main-menu navigation
    ///
    /// Up/Down move the selection with wrap-around; Return re-applies the
    /// highlight for the current selection. Activating the selection is the
    /// caller's job via [`selected_button`](Self::selected_button).
    pub fn handle_keyboard_input(&mut self, event: &Event) {
        if let Event::KeyDown {
            keycode: Some(key), ..
        } = event
        {
            match *key {
                Keycode::Up => self.main_menu.move_cursor_up(),
                Keycode::Down => self.main_menu.move_cursor_down(),
                Keycode::Return => self.main_menu.confirm_cursor(),
                _ => {}
            }
        }
    }

    /// Highlights the main-menu button at `index`
    ///
    /// Any index past the last button clears all highlighting.
    pub fn select_button(&mut self, index: usize) {
        self.main_menu.set_active(Some(index));
    }

    /// Current keyboard selection index (0..=2)
    pub fn selected_index(&self) -> usize {
        self.main_menu.cursor()
    }

    /// Current keyboard selection as a typed button
    pub fn selected_button(&self) -> MainMenuButton {
        match self.main_menu.cursor() {
            0 => MainMenuButton::Start,
            1 => MainMenuButton::ChangeColor,
            _ => MainMenuButton::Exit,
        }
    }

    /// True if the point lies within the Start button
    pub fn is_start_clicked(&self, x: i32, y: i32) -> bool {
        self.main_menu.contains(MainMenuButton::Start as usize, x, y)
    }

    /// True if the point lies within the Change Color button
    pub fn is_change_color_clicked(&self, x: i32, y: i32) -> bool {
        self.main_menu
            .contains(MainMenuButton::ChangeColor as usize, x, y)
    }

    /// True if the point lies within the Exit button
    pub fn is_exit_clicked(&self, x: i32, y: i32) -> bool {
        self.main_menu.contains(MainMenuButton::Exit as usize, x, y)
    }

    /// True if the point lies within the game-over Retry button
    pub fn is_game_over_replay_clicked(&self, x: i32, y: i32) -> bool {
        self.game_over.contains(0, x, y)
    }

    /// True if the point lies within the game-over Main Menu button
    pub fn is_game_over_to_main_menu_clicked(&self, x: i32, y: i32) -> bool {
        self.game_over.contains(1, x, y)
    }
}
