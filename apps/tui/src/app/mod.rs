// App module for metafinder
// Holds the explorer session and maps key presses onto it

pub mod input;
pub mod state;

pub use input::{handle_input, handle_mouse};
pub use state::{App, AppScreen, Pane};
