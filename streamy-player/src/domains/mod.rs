pub mod carousel;
pub mod home;
pub mod spotlight;
