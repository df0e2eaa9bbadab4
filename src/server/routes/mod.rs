pub mod organizer;
pub mod ui;
