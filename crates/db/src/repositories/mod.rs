pub mod appointment;
pub mod consultant;
pub mod session;
pub mod user;
