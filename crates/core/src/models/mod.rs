pub mod appointment;
pub mod consultant;
pub mod user;
