mod player;
mod team;
