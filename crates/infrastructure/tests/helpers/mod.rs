#![allow(dead_code)]

pub mod builders;
pub mod dns_server_mock;

pub use builders::{build_query, parse_message, FailingDirectory};
pub use dns_server_mock::MockDnsServer;
