//! Page components

mod admin;
mod landing;
mod not_found;

pub use admin::AdminPage;
pub use landing::LandingPage;
pub use not_found::NotFound;
