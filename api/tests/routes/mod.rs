mod cars_test;
mod languages_test;
mod players_test;
mod teams_test;
mod users_test;
