use rand::rngs::OsRng;
use rand::RngCore;

/// Number of random bytes in a generated secret (hex doubles the length).
pub const SECRET_BYTES: usize = 64;
/// Shortest secret accepted from the user.
pub const MIN_SECRET_LENGTH: usize = 32;

/// 64 bytes from the OS RNG, hex encoded.
pub fn generate_secret() -> String {
    generate_secret_with(&mut OsRng)
}

pub fn generate_secret_with<R: RngCore + ?Sized>(rng: &mut R) -> String {
    let mut bytes = [0u8; SECRET_BYTES];
    rng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Trims `candidate` and keeps it only if it is long enough.
pub fn accept_secret(candidate: &str) -> Option<String> {
    let trimmed = candidate.trim();
    (trimmed.chars().count() >= MIN_SECRET_LENGTH).then(|| trimmed.to_string())
}
