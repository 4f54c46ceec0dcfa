//! Dioxus fullstack page components.
//!
//! Each page wraps its content in a route guard from [`crate::app::guards`].

mod booking;
mod dashboard;
mod login;
mod not_found;
mod profile;

pub use booking::Booking;
pub use dashboard::Dashboard;
pub use login::Login;
pub use not_found::NotFound;
pub use profile::Profile;
