//! Serializes a decoded instruction back to 8 little-endian bytes.
//!
//! A pure, opinion-free serializer: it does not validate the opcode or
//! register ranges, mirroring the original encoder this is grounded on.

use crate::decode::{Instruction, WORD_LEN};
use crate::endian;

pub fn encode(inst: &Instruction) -> [u8; WORD_LEN] {
    let mut word = [0u8; WORD_LEN];
    word[0] = inst.raw_opcode;
    word[1] = inst.rs;
    word[2] = inst.rt;
    word[3] = inst.rd;
    endian::write_u32(&mut word[4..8], inst.imm);
    word
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode;

    #[test]
    fn encode_decode_round_trips_every_byte_pattern() {
        let words: &[[u8; 8]] = &[
            [0x05, 0x01, 0x00, 0x02, 0x2A, 0x00, 0x00, 0x00],
            [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
            [0x00; 8],
            [0x73, 0x1F, 0x00, 0x1E, 0x00, 0x10, 0x00, 0x00],
        ];
        for word in words {
            let inst = decode(word);
            assert_eq!(&encode(&inst), word);
        }
    }
}
