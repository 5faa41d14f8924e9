/// Every multiplier a unit token can resolve to, smallest first.
pub const UNIT_MULTIPLIERS: [u64; 7] = [1, 1 << 10, 1 << 20, 1 << 30, 1 << 40, 1 << 50, 1 << 60];

/// Map a unit token to its power-of-1024 multiplier.
///
/// Only the first character is inspected, so the token must already have
/// passed the unit grammar. Empty tokens, "b", "bytes" and "i" resolve to 1.
pub fn multiplier_for(token: &str) -> u64 {
    match token.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('k') => 1 << 10,
        Some('m') => 1 << 20,
        Some('g') => 1 << 30,
        Some('t') => 1 << 40,
        Some('p') => 1 << 50,
        Some('e') => 1 << 60,
        _ => 1,
    }
}

pub fn is_known_multiplier(multiplier: u64) -> bool {
    UNIT_MULTIPLIERS.contains(&multiplier)
}
