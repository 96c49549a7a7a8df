mod dns;
mod repositories;
mod use_cases;

pub use dns::{build_dns_handler, build_udp_listener};
pub use repositories::Repositories;
pub use use_cases::UseCases;
