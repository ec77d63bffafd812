pub mod adoption;
pub mod notification;
pub mod pet;
pub mod prelude;
pub mod user;
