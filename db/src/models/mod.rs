pub mod brand;
pub mod car;
pub mod player;
pub mod programming_language;
pub mod team;
pub mod user;

pub use brand::Entity as Brand;
pub use car::Entity as Car;
pub use player::Entity as Player;
pub use team::Entity as Team;
pub use user::Entity as User;
