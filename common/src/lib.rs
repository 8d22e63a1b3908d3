//! Types and helpers shared by the checkpoint server and the QR generator.

pub mod model;
pub mod network;
pub mod requests;
