pub use super::adoption::Entity as Adoption;
pub use super::notification::Entity as Notification;
pub use super::pet::Entity as Pet;
pub use super::user::Entity as User;
