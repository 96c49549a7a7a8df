pub mod listener;
pub mod name_codec;
pub mod packet;
pub mod server;
pub mod transport;
pub mod wire_response;

pub use listener::UdpListener;
pub use server::{DnsServerHandler, Reply, ReplySource};
pub use transport::{DnsTransport, UdpTransport};
