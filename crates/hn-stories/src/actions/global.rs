//! Global actions - not tied to any specific part of the screen

use ratatui::crossterm::event::KeyEvent;

#[derive(Debug, Clone)]
pub enum GlobalAction {
    /// Raw key press, translated by the keyboard middleware
    KeyPressed(KeyEvent),
    /// Leave the application
    Quit,
}
