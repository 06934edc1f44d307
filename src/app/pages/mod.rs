pub mod home;
pub mod not_found;
pub mod schedule;

pub use home::Home;
pub use not_found::NotFound;
pub use schedule::Schedule;
