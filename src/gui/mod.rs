//! Screen-Space Menu GUI
//!
//! This module provides the menu screens that render at fixed screen
//! positions, independent of the game scene: the main menu and the
//! game-over overlay.
//!
//! # Architecture
//!
//! - [`ButtonGroup`] is the generic building block: a fixed stack of labeled
//!   buttons with a shared [`ButtonPalette`] and at most one active button.
//! - [`MenuView`] composes two groups (main menu, game over), owns the
//!   fonts, and exposes the draw and input-query operations the host loop
//!   drives.
//!
//! All rendering uses SDL2 primitives plus TTF text; the canvas is borrowed
//! from the caller per draw call.

pub mod button;
pub mod menu_view;

pub use button::{Button, ButtonGroup, ButtonPalette};
pub use menu_view::{MainMenuButton, MenuView};
