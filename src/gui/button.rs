//! Labeled Button Groups
//!
//! Provides the reusable building block for screen-space menus: a fixed set
//! of labeled rectangular buttons with a shared color palette and at most one
//! active (highlighted) button. The same component backs both the main menu
//! (hover/keyboard highlighting, no outlines) and the game-over screen
//! (outlined buttons, no highlighting).

use crate::text::draw_text_in_rect;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::ttf::Font;
use sdl2::video::Window;

/// Button width in pixels
pub const BUTTON_WIDTH: u32 = 200;

/// Button height in pixels
pub const BUTTON_HEIGHT: u32 = 50;

/// Vertical gap between stacked buttons in pixels
pub const BUTTON_SPACING: u32 = 20;

/// Named colors shared by a button group
///
/// Immutable after construction; the group reads it to recolor buttons when
/// the active selection changes.
#[derive(Debug, Clone)]
pub struct ButtonPalette {
    /// Screen background color
    pub background: Color,

    /// Fill color of an unselected button
    pub button_color: Color,

    /// Fill color of the active button
    pub selected_button_color: Color,

    /// Label color on an unselected button
    pub text_color: Color,

    /// Label color on the active button
    pub selected_text_color: Color,

    /// Button outline color (game-over buttons)
    pub outline_color: Color,
}

impl Default for ButtonPalette {
    fn default() -> Self {
        ButtonPalette {
            background: Color::RGB(30, 30, 40),
            button_color: Color::RGB(55, 60, 80),
            selected_button_color: Color::RGB(80, 100, 140),
            text_color: Color::RGB(170, 170, 180),
            selected_text_color: Color::RGB(255, 255, 255),
            outline_color: Color::RGB(100, 100, 120),
        }
    }
}

/// A single labeled button
///
/// The rect never moves after group construction; only the colors change
/// when the active selection does.
#[derive(Debug, Clone)]
pub struct Button {
    pub rect: Rect,
    pub label: String,
    pub fill: Color,
    pub text_color: Color,
}

/// A fixed set of stacked, labeled buttons with one optional active button
///
/// Hit tests resolve in vector order, so the construction order of the
/// labels is the priority order. The keyboard cursor is tracked separately
/// from the highlight: moving the mouse off every button clears the
/// highlight but keeps the cursor where it was.
///
/// # Example
///
/// ```rust
/// use crate::gui::{ButtonGroup, ButtonPalette};
///
/// let mut menu = ButtonGroup::stacked(
///     &["Start", "Change Color", "Exit"],
///     ButtonPalette::default(),
///     800,
///     150,
///     0,
/// );
///
/// // Mouse hover
/// menu.hover(mouse_x, mouse_y);
///
/// // Keyboard navigation
/// menu.move_cursor_down();
///
/// // Render
/// menu.render(&mut canvas, &font)?;
/// ```
pub struct ButtonGroup {
    buttons: Vec<Button>,
    active: Option<usize>,
    cursor: usize,
    palette: ButtonPalette,
    outline_thickness: u32,
}

impl ButtonGroup {
    /// Builds a vertical stack of buttons, horizontally centered in the window
    ///
    /// Buttons use the fixed width/height/spacing constants; the first button's
    /// top edge sits at `top_y`. `outline_thickness` of 0 draws no outline.
    pub fn stacked(
        labels: &[&str],
        palette: ButtonPalette,
        window_width: u32,
        top_y: i32,
        outline_thickness: u32,
    ) -> Self {
        let x = ((window_width - BUTTON_WIDTH) / 2) as i32;

        let buttons = labels
            .iter()
            .enumerate()
            .map(|(i, label)| Button {
                rect: Rect::new(
                    x,
                    top_y + (i as i32 * (BUTTON_HEIGHT + BUTTON_SPACING) as i32),
                    BUTTON_WIDTH,
                    BUTTON_HEIGHT,
                ),
                label: label.to_string(),
                fill: palette.button_color,
                text_color: palette.text_color,
            })
            .collect();

        ButtonGroup {
            buttons,
            active: None,
            cursor: 0,
            palette,
            outline_thickness,
        }
    }

    /// The buttons in priority order
    #[allow(dead_code)] // Reserved for callers that need the raw geometry
    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// The shared palette
    pub fn palette(&self) -> &ButtonPalette {
        &self.palette
    }

    /// Index of the currently highlighted button, if any
    #[allow(dead_code)] // Reserved for state queries
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Current keyboard cursor position
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns true if the point lies within the button at `index`
    pub fn contains(&self, index: usize, x: i32, y: i32) -> bool {
        self.buttons
            .get(index)
            .is_some_and(|button| button.rect.contains_point((x, y)))
    }

    /// First button containing the point, in priority order
    pub fn hit_test(&self, x: i32, y: i32) -> Option<usize> {
        self.buttons
            .iter()
            .position(|button| button.rect.contains_point((x, y)))
    }

    /// Updates cursor and highlight from a mouse position
    ///
    /// A miss clears the highlight but leaves the cursor untouched.
    pub fn hover(&mut self, x: i32, y: i32) {
        match self.hit_test(x, y) {
            Some(index) => {
                self.cursor = index;
                self.set_active(Some(index));
            }
            None => self.set_active(None),
        }
    }

    /// Move the cursor up one button (wraps to the bottom) and highlight it
    pub fn move_cursor_up(&mut self) {
        self.cursor = (self.cursor + self.buttons.len() - 1) % self.buttons.len();
        self.set_active(Some(self.cursor));
    }

    /// Move the cursor down one button (wraps to the top) and highlight it
    pub fn move_cursor_down(&mut self) {
        self.cursor = (self.cursor + 1) % self.buttons.len();
        self.set_active(Some(self.cursor));
    }

    /// Re-apply the highlight for the current cursor position
    pub fn confirm_cursor(&mut self) {
        self.set_active(Some(self.cursor));
    }

    /// Sets the active button and recolors the whole group
    ///
    /// An out-of-range index behaves like `None`: all highlighting is
    /// cleared. Exactly the active button gets the selected fill/text
    /// colors; every other button gets the defaults.
    pub fn set_active(&mut self, index: Option<usize>) {
        self.active = index.filter(|&i| i < self.buttons.len());

        for (i, button) in self.buttons.iter_mut().enumerate() {
            if self.active == Some(i) {
                button.fill = self.palette.selected_button_color;
                button.text_color = self.palette.selected_text_color;
            } else {
                button.fill = self.palette.button_color;
                button.text_color = self.palette.text_color;
            }
        }
    }

    /// Renders every button: fill, optional outline rings, centered label
    pub fn render(&self, canvas: &mut Canvas<Window>, font: &Font) -> Result<(), String> {
        for button in &self.buttons {
            canvas.set_draw_color(button.fill);
            canvas.fill_rect(button.rect)?;

            if self.outline_thickness > 0 {
                canvas.set_draw_color(self.palette.outline_color);
                // draw_rect is one pixel wide; nested rings build up thickness
                for ring in 0..self.outline_thickness {
                    canvas.draw_rect(Rect::new(
                        button.rect.x() - ring as i32,
                        button.rect.y() - ring as i32,
                        button.rect.width() + ring * 2,
                        button.rect.height() + ring * 2,
                    ))?;
                }
            }

            draw_text_in_rect(canvas, font, &button.label, button.rect, button.text_color)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn main_menu_group() -> ButtonGroup {
        ButtonGroup::stacked(
            &["Start", "Change Color", "Exit"],
            ButtonPalette::default(),
            800,
            150,
            0,
        )
    }

    #[test]
    fn test_stacked_centers_horizontally() {
        let group = main_menu_group();
        let expected_x = ((800 - BUTTON_WIDTH) / 2) as i32;

        for button in group.buttons() {
            assert_eq!(button.rect.x(), expected_x);
        }
    }

    #[test]
    fn test_stacked_vertical_spacing() {
        let group = main_menu_group();
        let buttons = group.buttons();

        assert_eq!(buttons[0].rect.y(), 150);
        for pair in buttons.windows(2) {
            assert_eq!(
                pair[1].rect.y(),
                pair[0].rect.y() + (BUTTON_HEIGHT + BUTTON_SPACING) as i32
            );
        }
    }

    #[test]
    fn test_set_active_highlights_exactly_one() {
        let mut group = main_menu_group();
        let palette = group.palette().clone();

        for target in 0..3 {
            group.set_active(Some(target));
            assert_eq!(group.active(), Some(target));

            for (i, button) in group.buttons().iter().enumerate() {
                if i == target {
                    assert_eq!(button.fill, palette.selected_button_color);
                    assert_eq!(button.text_color, palette.selected_text_color);
                } else {
                    assert_eq!(button.fill, palette.button_color);
                    assert_eq!(button.text_color, palette.text_color);
                }
            }
        }
    }

    #[test]
    fn test_set_active_out_of_range_clears_all() {
        let mut group = main_menu_group();
        let palette = group.palette().clone();

        group.set_active(Some(1));
        group.set_active(Some(7));

        assert_eq!(group.active(), None);
        for button in group.buttons() {
            assert_eq!(button.fill, palette.button_color);
            assert_eq!(button.text_color, palette.text_color);
        }
    }

    #[test]
    fn test_hit_test_resolves_in_priority_order() {
        let group = main_menu_group();
        let first = group.buttons()[0].rect;

        // Center of the first button
        assert_eq!(group.hit_test(first.x() + 100, first.y() + 25), Some(0));
        // Center of the last button
        let last = group.buttons()[2].rect;
        assert_eq!(group.hit_test(last.x() + 100, last.y() + 25), Some(2));
        // In the gap between buttons
        assert_eq!(group.hit_test(first.x() + 100, first.y() + 55), None);
        // Far outside
        assert_eq!(group.hit_test(0, 0), None);
    }

    #[test]
    fn test_hover_miss_clears_highlight_keeps_cursor() {
        let mut group = main_menu_group();
        let second = group.buttons()[1].rect;

        group.hover(second.x() + 10, second.y() + 10);
        assert_eq!(group.active(), Some(1));
        assert_eq!(group.cursor(), 1);

        group.hover(0, 0);
        assert_eq!(group.active(), None);
        assert_eq!(group.cursor(), 1);
    }

    #[test]
    fn test_cursor_wraps_both_directions() {
        let mut group = main_menu_group();

        group.move_cursor_up();
        assert_eq!(group.cursor(), 2);
        assert_eq!(group.active(), Some(2));

        group.move_cursor_down();
        assert_eq!(group.cursor(), 0);

        group.move_cursor_down();
        assert_eq!(group.cursor(), 1);
    }

    #[test]
    fn test_confirm_cursor_restores_highlight() {
        let mut group = main_menu_group();

        group.move_cursor_down();
        group.hover(0, 0); // highlight cleared, cursor stays at 1

        group.confirm_cursor();
        assert_eq!(group.active(), Some(1));
    }

    #[test]
    fn test_contains_is_per_button() {
        let group = main_menu_group();
        let third = group.buttons()[2].rect;

        assert!(group.contains(2, third.x() + 1, third.y() + 1));
        assert!(!group.contains(0, third.x() + 1, third.y() + 1));
        assert!(!group.contains(9, third.x() + 1, third.y() + 1));
    }
}
