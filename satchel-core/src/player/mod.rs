//! Player-side networking seams used by inventories.

mod connection;

pub use connection::NetworkConnection;
