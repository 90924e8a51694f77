pub mod level;
pub mod parse;
pub mod password;
pub mod template;
