pub mod flips;
pub mod health;
pub mod home;
