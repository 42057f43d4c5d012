pub mod brand;
pub mod car;
pub mod language;
pub mod team_and_player;
pub mod user;
