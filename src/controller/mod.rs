pub mod api;
pub mod home;
pub mod pages;
pub mod players;
pub mod standings;
