pub mod add;
pub mod get;
pub mod images;
pub mod list;
pub mod login;
pub mod remove;
pub mod setup;
pub mod update;
