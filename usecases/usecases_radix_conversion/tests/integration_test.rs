//! Integration tests for usecases_radix_conversion crate
//!
//! These tests verify conversions end-to-end: known examples in both
//! directions, zero handling, digit validation, and random values checked
//! against malachite's own base rendering.

use std::str::FromStr;

use entities_symbol_system::{
    ConfigError, Digits, NumeralSystem, SystemSpec, CANONICAL_DIGITS, MAX_RADIX,
};
use malachite::base::num::conversion::traits::ToStringBase;
use malachite::Natural;
use usecases_radix_conversion::{ConversionError, RadixConverter};

/// Deterministic generator so failing cases can be replayed
struct SplitMix64(u64);

impl SplitMix64 {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    fn below(&mut self, bound: u64) -> u64 {
        self.next_u64() % bound
    }
}

fn text_system(radix: usize) -> SystemSpec {
    SystemSpec::Text(CANONICAL_DIGITS[..radix].to_string())
}

fn token_system(radix: usize) -> SystemSpec {
    SystemSpec::Tokens(CANONICAL_DIGITS[..radix].chars().map(String::from).collect())
}

fn tokens_of(text: &str) -> Vec<String> {
    text.chars().map(String::from).collect()
}

fn assert_converts_both_ways(x_system: SystemSpec, x: Digits, y_system: SystemSpec, y: Digits) {
    let forward = RadixConverter::new(x_system.clone(), y_system.clone()).unwrap();
    let expected_y = y.trim_leading_zeros(forward.output_system().zero_symbol());
    assert_eq!(forward.convert(&x).unwrap(), expected_y, "{:?} -> {:?}: {}", x_system, y_system, x);

    let backward = RadixConverter::new(y_system.clone(), x_system.clone()).unwrap();
    let expected_x = x.trim_leading_zeros(backward.output_system().zero_symbol());
    assert_eq!(backward.convert(&y).unwrap(), expected_x, "{:?} -> {:?}: {}", y_system, x_system, y);
}

#[test]
fn test_decimal_to_hex_with_explicit_alphabets() {
    assert_converts_both_ways(
        "0123456789".into(),
        "12345678901234567890123456789012".into(),
        "0123456789abcdef".into(),
        "9bd30a3c645943dd1690a03a14".into(),
    );
}

#[test]
fn test_decimal_to_hex_with_canonical_radices() {
    assert_converts_both_ways(
        10.into(),
        "12345678901234567890123456789012".into(),
        16.into(),
        "9bd30a3c645943dd1690a03a14".into(),
    );
}

#[test]
fn test_phrase_alphabet_to_eight_symbols() {
    assert_converts_both_ways(
        "the quickbrownfxjmpsvlazydg.".into(),
        "cwm fjord veg balks nth pyx quiz.".into(),
        "><+-.,[]".into(),
        "<,++[-++>+<<]].>,<>><<<>.[[+,[<>+>->+-[[.[-<>[.[>.[]]".into(),
    );
}

#[test]
fn test_letters_to_token_alphabet() {
    assert_converts_both_ways(
        "AaBbC".into(),
        "ABabC".into(),
        ["Ook.", "Ook!", "Ook?"].into(),
        ["Ook!", "Ook.", "Ook!", "Ook?", "Ook?", "Ook."].into(),
    );

    // leading "A" is the zero digit and is dropped on the way back
    let backward = RadixConverter::new(["Ook.", "Ook!", "Ook?"], "AaBbC").unwrap();
    let x = backward
        .convert_tokens(&["Ook!", "Ook.", "Ook!", "Ook?", "Ook?", "Ook."])
        .unwrap();
    assert_eq!(x, Digits::from("BabC"));
}

#[test]
fn test_token_alphabet_to_letters() {
    assert_converts_both_ways(
        ["Alice", "Bob", "Carol", "Dave"].into(),
        ["Bob", "Bob", "Carol", "Alice", "Dave"].into(),
        "qp".into(),
        "pqppqqqpp".into(),
    );
}

#[test]
fn test_binary_zeros_to_letters() {
    assert_converts_both_ways(2.into(), "00000000".into(), "ABCDEF".into(), "A".into());

    let converter = RadixConverter::new(2, "ABCDEF").unwrap();
    assert_eq!(converter.convert_str("00000000").unwrap(), Digits::from("A"));
}

#[test]
fn test_zero_in_every_shape_is_one_zero_digit() {
    for radix in 2..=36usize {
        let converter = RadixConverter::new(text_system(radix), token_system(radix)).unwrap();
        for input in ["", "0", "00000000000000000000000000000000000000000"] {
            assert_eq!(converter.convert_str(input).unwrap(), Digits::from(["0"]));
        }

        let converter = RadixConverter::new(token_system(radix), "zyx").unwrap();
        assert_eq!(converter.convert_tokens(&["0", "0"]).unwrap(), Digits::from("z"));
        assert_eq!(converter.convert(&Digits::Tokens(Vec::new())).unwrap(), Digits::from("z"));
    }
}

#[test]
fn test_identity_strips_leading_zeros() {
    let converter = RadixConverter::new(16, 16).unwrap();
    assert_eq!(converter.convert_str("000ff00").unwrap(), Digits::from("ff00"));

    let tokens = ["Alice", "Bob", "Carol", "Dave"];
    let converter = RadixConverter::new(tokens, tokens).unwrap();
    assert_eq!(
        converter.convert_tokens(&["Alice", "Dave", "Alice"]).unwrap(),
        Digits::from(["Dave", "Alice"])
    );
}

#[test]
fn test_unknown_digit_rejects_whole_input() {
    let converter = RadixConverter::new(2, 10).unwrap();
    assert_eq!(
        converter.convert_str("1019").unwrap_err(),
        ConversionError::UnknownDigit {
            digit: "9".to_string(),
            position: 3,
        }
    );

    // uppercase is not part of the canonical alphabet
    let converter = RadixConverter::new(16, 10).unwrap();
    assert!(converter.convert_str("FF").is_err());
}

#[test]
fn test_no_prefix_or_substring_matching() {
    let converter = RadixConverter::new(["Alice", "Bob"], 10).unwrap();
    for bad in ["Al", "Bobby", "alice", "", "AliceBob"] {
        assert_eq!(
            converter.convert_tokens(&["Bob", bad]).unwrap_err(),
            ConversionError::UnknownDigit {
                digit: bad.to_string(),
                position: 1,
            }
        );
    }

    // multi-character tokens never match a string alphabet
    let converter = RadixConverter::new("01", 10).unwrap();
    assert!(converter.convert_tokens(&["1", "01"]).is_err());
    assert_eq!(converter.convert_tokens(&["1", "0"]).unwrap(), Digits::from("2"));
}

#[test]
fn test_reconfiguration_is_atomic_and_chainable() {
    let mut converter = RadixConverter::default();
    converter.set_input_system(10).unwrap().set_output_system(2).unwrap();
    assert_eq!(converter.convert_str("10").unwrap(), Digits::from("1010"));

    assert_eq!(
        converter.set_output_system("0x0").unwrap_err(),
        ConfigError::DuplicateSymbol {
            symbol: "0".to_string(),
            first: 0,
            second: 2,
        }
    );
    assert_eq!(converter.set_input_system(1).unwrap_err(), ConfigError::RadixOutOfRange { radix: 1 });
    assert_eq!(converter.convert_str("10").unwrap(), Digits::from("1010"));

    converter.set_output_system(["no", "yes"]).unwrap();
    assert_eq!(converter.convert_str("2").unwrap(), Digits::from(["yes", "no"]));
}

#[test]
fn test_largest_radix_round_trip() {
    let tokens: Vec<String> = (0..MAX_RADIX).map(|i| format!("d{}", i)).collect();
    let mut converter = RadixConverter::new(10, tokens.clone()).unwrap();
    assert_eq!(converter.output_system().radix(), MAX_RADIX);

    // 2^45 - 1 is three digits of radix 2^15, all 32767
    let wide = converter.convert_str("35184372088831").unwrap();
    assert_eq!(wide, Digits::from(["d32767", "d32767", "d32767"]));

    converter.set_input_system(tokens).unwrap().set_output_system(10).unwrap();
    assert_eq!(converter.convert(&wide).unwrap(), Digits::from("35184372088831"));
}

#[test]
fn test_random_53_bit_values_for_all_radix_pairs() {
    let mut rng = SplitMix64(0x5eed_0053);
    for i in 2..=36usize {
        for j in 2..=36usize {
            let ii = RadixConverter::new(i, j).unwrap();
            let ss = RadixConverter::new(text_system(i), text_system(j)).unwrap();
            let ts = RadixConverter::new(token_system(i), text_system(j)).unwrap();
            let tt = RadixConverter::new(token_system(i), token_system(j)).unwrap();
            let st = RadixConverter::new(text_system(i), token_system(j)).unwrap();

            for _ in 0..2 {
                let value = Natural::from(rng.next_u64() >> 11);
                let x = value.to_string_base(i as u8);
                let y = value.to_string_base(j as u8);
                let (tx, ty) = (tokens_of(&x), tokens_of(&y));

                assert_eq!(ii.convert_str(&x).unwrap(), Digits::from(y.as_str()), "{} ({}) -> ({})", x, i, j);
                assert_eq!(ss.convert_str(&x).unwrap(), Digits::from(y.as_str()));
                assert_eq!(ts.convert_tokens(&tx).unwrap(), Digits::from(y.as_str()));
                assert_eq!(tt.convert_tokens(&tx).unwrap(), Digits::Tokens(ty.clone()));
                assert_eq!(st.convert_str(&x).unwrap(), Digits::Tokens(ty));
            }
        }
    }
}

#[test]
fn test_random_long_values_in_both_directions() {
    let mut rng = SplitMix64(0x1234_5678);
    for _ in 0..4 {
        let length = 40 + rng.below(160) as usize;
        let mut decimal = String::with_capacity(length);
        decimal.push(char::from(b'1' + rng.below(9) as u8));
        for _ in 1..length {
            decimal.push(char::from(b'0' + rng.below(10) as u8));
        }
        let value = Natural::from_str(&decimal).unwrap();

        for i in 2..=36usize {
            for j in [2usize, 3, 7, 10, 16, 17, 32, 36] {
                let x = value.to_string_base(i as u8);
                let y = value.to_string_base(j as u8);

                let forward = RadixConverter::new(i, j).unwrap();
                assert_eq!(forward.convert_str(&x).unwrap(), Digits::from(y.as_str()), "{} ({}) -> ({})", x, i, j);

                let backward = RadixConverter::new(text_system(j), token_system(i)).unwrap();
                assert_eq!(backward.convert_str(&y).unwrap(), Digits::Tokens(tokens_of(&x)));
            }
        }
    }
}

#[test]
fn test_round_trip_through_custom_alphabets() {
    let mut rng = SplitMix64(42);
    let phrase = "the quickbrownfxjmpsvlazydg.";
    let ook = ["Ook.", "Ook!", "Ook?"];

    for _ in 0..50 {
        let length = 1 + rng.below(60) as usize;
        let input: String = (0..length)
            .map(|_| {
                let index = rng.below(phrase.len() as u64) as usize;
                char::from(phrase.as_bytes()[index])
            })
            .collect();

        let there = RadixConverter::new(phrase, ook).unwrap();
        let back = RadixConverter::new(ook, phrase).unwrap();
        let middle = there.convert_str(&input).unwrap();
        assert_eq!(
            back.convert(&middle).unwrap(),
            Digits::from(input.as_str()).trim_leading_zeros("t")
        );
    }
}
