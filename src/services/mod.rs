pub mod initializer;
pub mod response_parser;
