mod user;

pub use user::{NewUserRecord, UserId, UserRecord};
