pub mod bill_parser;
