pub mod answer;
pub mod copy_view;
pub mod error;
pub mod form;
pub mod header;
pub mod keybindings;
pub mod loading;
pub mod settings;
