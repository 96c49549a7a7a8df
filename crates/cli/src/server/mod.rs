pub mod dns;
pub mod signals;
pub mod web;

pub use dns::bind_dns_socket;
pub use signals::cancel_on_signal;
pub use web::start_web_server;
