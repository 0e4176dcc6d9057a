// src/ids.rs
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;

pub const DEFAULT_ID_BYTES: usize = 9;

/// Where new root-entry ids come from. Injected so tests can hand out
/// deterministic ids.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Production generator: OS randomness, URL-safe output.
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> String {
        let mut rng = OsRng;
        generate_id(&mut rng, DEFAULT_ID_BYTES)
    }
}

/// Generate an id from random bytes.
/// - Uses Base64 URL-safe, no padding.
/// - 9 bytes -> 12 char id.
pub fn generate_id<R: RngCore>(rng: &mut R, nbytes: usize) -> String {
    let mut buf = vec![0u8; nbytes];
    rng.fill_bytes(&mut buf);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buf)
}
