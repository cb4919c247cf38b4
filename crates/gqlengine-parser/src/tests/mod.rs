mod graphql_parse_error_tests;
mod graphql_parser_schema_tests;
mod printer_round_trip_tests;
mod utils;
