pub mod parse;
pub mod snowflake;
