//! Register and immediate operand parsing.

use crate::error::LineError;

/// ABI register names in index order, matching
/// `examples/original_source/src/c32_encode.c`'s `c32_parse_register`.
const ABI_NAMES: &[&str] = &[
    "zero", "at", "v0", "v1", "a0", "a1", "a2", "a3", "t0", "t1", "t2", "t3", "t4", "t5", "t6",
    "t7", "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "t8", "t9", "k0", "k1", "gp", "sp",
    "fp", "ra",
];

/// Parse a register operand: `R0`..`R31` (case-insensitive prefix) or one of
/// the fixed ABI names.
pub fn parse_register(token: &str) -> Result<u8, LineError> {
    if let Some(index) = ABI_NAMES.iter().position(|&name| name == token) {
        return Ok(index as u8);
    }

    let mut chars = token.chars();
    match chars.next() {
        Some('R') | Some('r') => {
            let digits = chars.as_str();
            if digits.is_empty() {
                return Err(LineError::InvalidRegister(token.to_string()));
            }
            let n: u32 = digits
                .parse()
                .map_err(|_| LineError::InvalidRegister(token.to_string()))?;
            if n <= 31 {
                Ok(n as u8)
            } else {
                Err(LineError::InvalidRegister(token.to_string()))
            }
        }
        _ => Err(LineError::InvalidRegister(token.to_string())),
    }
}

/// Parse a signed 32-bit immediate: optional `+`/`-`, then `0x`/`0X`-prefixed
/// hex or decimal. Unlike the C source this is grounded on, any trailing
/// garbage is an error rather than being silently dropped (see DESIGN.md).
pub fn parse_immediate(token: &str) -> Result<i32, LineError> {
    let (negative, rest) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };

    let malformed = || LineError::MalformedImmediate(token.to_string());

    let magnitude: u32 = if let Some(hex) = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        if hex.is_empty() {
            return Err(malformed());
        }
        u32::from_str_radix(hex, 16).map_err(|_| malformed())?
    } else {
        if rest.is_empty() {
            return Err(malformed());
        }
        rest.parse().map_err(|_| malformed())?
    };

    Ok(if negative {
        (magnitude as i64 * -1) as i32
    } else {
        magnitude as i32
    })
}
