mod game;
mod signup;

pub use self::game::*;
pub use self::signup::*;
