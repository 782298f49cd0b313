pub mod booking;
pub mod event;
pub mod seat;
pub mod user;

pub use booking::Booking;
pub use event::Event;
pub use seat::Seat;
pub use user::User;
