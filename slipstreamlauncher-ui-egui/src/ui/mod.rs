pub mod dialogs;
pub mod layout;
pub mod settings;
pub mod shell;
