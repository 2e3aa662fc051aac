//! Page bodies, one per route

pub mod about;
pub mod contact;
pub mod home;
pub mod profile;
pub mod sell;
pub mod shop;
