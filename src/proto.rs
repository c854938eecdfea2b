//! Protobuf message types generated from `proto/happyday.proto` at build time.

/// Messages of the `happyday` package.
pub mod happyday {
    include!(concat!(env!("OUT_DIR"), "/happyday.rs"));
}

pub use happyday::{HappyDayRequest, HappyDayResponse};

/// Media type set on every successful protobuf response.
pub const PROTOBUF_CONTENT_TYPE: &str = "application/x-protobuf";
