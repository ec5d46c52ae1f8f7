mod get_game;

pub use self::get_game::*;
