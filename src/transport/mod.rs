//! Transport layer: wire-format details (JSON encoding/decoding).

mod send;
mod text;

pub use send::{decode_send_json_response, encode_send_json, encode_send_json_redacted};
