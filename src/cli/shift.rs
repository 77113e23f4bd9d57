//! Manual decode/encode with a known shift

use super::input::{collect_one, emit};
use super::InputArgs;
use anyhow::Result;
use caesar::config::CaesarConfig;
use caesar::{decode, encode, normalize_shift, DecodeOptions};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Decode,
    Encode,
}

pub fn run(
    direction: Direction,
    shift: i64,
    io: &InputArgs,
    options: &DecodeOptions,
    config: &CaesarConfig,
) -> Result<()> {
    let input = collect_one(io.text.clone(), io.input.as_deref(), config.trim_input())?;
    debug!(
        "{:?} {} with shift {} (normalized {})",
        direction,
        input.source,
        shift,
        normalize_shift(shift)
    );

    let result = apply(direction, &input.text, shift, options);
    emit(io.output.as_deref(), &result)
}

fn apply(direction: Direction, text: &str, shift: i64, options: &DecodeOptions) -> String {
    match direction {
        Direction::Decode => decode(text, shift, options),
        Direction::Encode => encode(text, shift, options),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_removes_shift() {
        let out = apply(Direction::Decode, "Khoor, Zruog!", 3, &DecodeOptions::default());
        assert_eq!(out, "Hello, World!");
    }

    #[test]
    fn test_encode_applies_shift() {
        let out = apply(Direction::Encode, "Hello, World!", 3, &DecodeOptions::default());
        assert_eq!(out, "Khoor, Zruog!");
    }

    #[test]
    fn test_negative_shift_equivalence() {
        let opts = DecodeOptions::default();
        assert_eq!(
            apply(Direction::Decode, "Khoor", -23, &opts),
            apply(Direction::Decode, "Khoor", 3, &opts)
        );
        assert_eq!(
            apply(Direction::Decode, "Khoor", i64::MIN, &opts).len(),
            5
        );
    }
}
