//! Ports (in the hexagonal sense) between the domain and its adapters.
//!
//! `inbound` ports are the use cases HTTP handlers call; `outbound` ports are
//! the storage capabilities the services depend on.

pub mod inbound;
pub mod outbound;
