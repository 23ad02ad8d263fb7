//! Integration tests for entities_symbol_system crate
//!
//! These tests verify alphabet validation limits and lookups end-to-end.

use entities_symbol_system::*;

fn distinct_tokens(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("t{}", i)).collect()
}

fn distinct_chars(count: usize) -> String {
    // U+0100.. stays below the surrogate range for every accepted radix
    (0..count as u32)
        .filter_map(|i| char::from_u32(0x100 + i))
        .collect()
}

#[test]
fn test_alphabet_size_limits_for_tokens() {
    for radix in [2, 3, 36, 256, 4096, MAX_RADIX] {
        let system = SymbolSystem::new(distinct_tokens(radix)).unwrap();
        assert_eq!(system.radix(), radix);
        assert_eq!(system.alphabet_kind(), AlphabetKind::List);
    }

    assert_eq!(
        SymbolSystem::new(distinct_tokens(MAX_RADIX + 1)),
        Err(ConfigError::TooManySymbols { radix: MAX_RADIX + 1 })
    );
}

#[test]
fn test_alphabet_size_limits_for_text() {
    let largest = SymbolSystem::new(distinct_chars(MAX_RADIX)).unwrap();
    assert_eq!(largest.radix(), MAX_RADIX);
    assert_eq!(largest.alphabet_kind(), AlphabetKind::String);
    assert_eq!(largest.index_of("\u{100}"), Some(0));
    assert_eq!(largest.symbol_at(MAX_RADIX - 1), Some("\u{80ff}"));

    assert_eq!(
        SymbolSystem::new(distinct_chars(MAX_RADIX + 1)),
        Err(ConfigError::TooManySymbols { radix: MAX_RADIX + 1 })
    );
}

#[test]
fn test_minimum_radix_is_uniform() {
    assert!(SymbolSystem::new("ab").is_ok());
    assert!(SymbolSystem::new(["a", "b"]).is_ok());
    assert!(SymbolSystem::new(2).is_ok());

    assert!(matches!(SymbolSystem::new("a"), Err(ConfigError::TooFewSymbols { .. })));
    assert!(matches!(SymbolSystem::new(["a"]), Err(ConfigError::TooFewSymbols { .. })));
    assert!(matches!(SymbolSystem::new(1), Err(ConfigError::RadixOutOfRange { .. })));
    assert!(matches!(SymbolSystem::new(0), Err(ConfigError::RadixOutOfRange { .. })));
}

#[test]
fn test_every_symbol_round_trips_through_lookups() {
    let systems = vec![
        SymbolSystem::new(36).unwrap(),
        SymbolSystem::new("><+-.,[]").unwrap(),
        SymbolSystem::new(vec!["Alice", "Bob", "Carol", "Dave"]).unwrap(),
        SymbolSystem::new(distinct_tokens(1000)).unwrap(),
    ];

    for system in &systems {
        for value in 0..system.radix() {
            let symbol = system.symbol_at(value).unwrap();
            assert_eq!(system.index_of(symbol), Some(value));
        }
        assert_eq!(system.symbols().count(), system.radix());
    }
}

#[test]
fn test_reconfigure_between_shapes() {
    let mut system = SymbolSystem::default();
    assert_eq!(system.alphabet_kind(), AlphabetKind::String);

    system.configure(["Ook.", "Ook!", "Ook?"]).unwrap();
    assert_eq!(system.alphabet_kind(), AlphabetKind::List);
    assert_eq!(system.zero_symbol(), "Ook.");

    let error = system.configure(["Ook.", "Ook."]).unwrap_err();
    assert_eq!(
        error,
        ConfigError::DuplicateSymbol {
            symbol: "Ook.".to_string(),
            first: 0,
            second: 1,
        }
    );
    assert_eq!(system.radix(), 3);
    assert_eq!(system.alphabet_kind(), AlphabetKind::List);
}
