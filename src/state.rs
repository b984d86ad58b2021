// Shared game mode enum used throughout the game

/// Game state enum for tracking the current screen
///
/// Menu input handling is gated on this: mouse hover only updates the
/// main-menu highlight while in `MainMenu`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    MainMenu,
    Playing,
    GameOver,
}
