pub mod m202510190001_create_users;
pub mod m202510190002_create_brands;
pub mod m202510190003_create_cars;
pub mod m202510190004_create_programming_languages;
pub mod m202510190005_create_teams;
pub mod m202510190006_create_players;
