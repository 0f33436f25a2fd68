pub mod history;
pub mod home;
pub mod settings;
pub mod tools;
