mod create_game;
mod get_signups;
mod list_games;
mod update_payment;

pub use self::create_game::*;
pub use self::get_signups::*;
pub use self::list_games::*;
pub use self::update_payment::*;
