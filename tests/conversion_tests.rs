use anyhow::Result;
use numbase::utils::logger;
use numbase::{convert_base, BaseConverter, ConvertError};

#[test]
fn test_known_conversions_end_to_end() -> Result<()> {
    logger::init_logger(false);

    assert_eq!(convert_base("1000", 2, 10)?, "8");
    assert_eq!(convert_base("18", 10, 2)?, "10010");
    assert_eq!(convert_base("10F", 16, 10)?, "271");
    assert_eq!(convert_base("15", 10, 15)?, "f");
    assert_eq!(convert_base("271", 10, 16)?, "10f");
    assert_eq!(convert_base("zz", 36, 10)?, "1295");
    assert_eq!(convert_base("744", 8, 16)?, "1e4");

    Ok(())
}

#[test]
fn test_negative_conversions_end_to_end() -> Result<()> {
    assert!(convert_base("-1", 2, 10)?.starts_with('-'));
    assert!(convert_base("-1", 2, 16)?.starts_with('-'));
    assert_eq!(convert_base("-ff", 16, 2)?, "-11111111");
    assert_eq!(convert_base("-255", 10, 16)?, "-ff");

    Ok(())
}

#[test]
fn test_zero_is_invariant_across_every_base_pair() -> Result<()> {
    for from_base in 2..=36 {
        for to_base in 2..=36 {
            assert_eq!(convert_base("0", from_base, to_base)?, "0");
        }
    }

    Ok(())
}

#[test]
fn test_identity_conversion_normalizes_case() -> Result<()> {
    assert_eq!(convert_base("10F", 16, 16)?, "10f");
    assert_eq!(convert_base("-ZZ", 36, 36)?, "-zz");
    assert_eq!(convert_base("101", 2, 2)?, "101");

    Ok(())
}

#[test]
fn test_round_trip_restores_the_literal() -> Result<()> {
    for (literal, from_base, to_base) in [
        ("10010", 10, 2),
        ("deadbeef", 16, 7),
        ("-zyx", 36, 2),
        ("777", 8, 36),
    ] {
        let there = convert_base(literal, from_base, to_base)?;
        assert_eq!(convert_base(&there, to_base, from_base)?, literal);
    }

    Ok(())
}

#[test]
fn test_converter_defaults_match_the_conventional_pair() -> Result<()> {
    // Binary in, decimal out.
    assert_eq!(BaseConverter::default().convert("1000")?, "8");

    Ok(())
}

#[test]
fn test_error_kinds_are_distinguishable() {
    assert!(matches!(
        convert_base("87.5", 2, 10),
        Err(ConvertError::InvalidLiteral { .. })
    ));
    assert!(matches!(
        convert_base("-0", 2, 10),
        Err(ConvertError::InvalidLiteral { .. })
    ));
    assert!(matches!(
        convert_base("ff", 10, 2),
        Err(ConvertError::DigitOutOfRangeForBase { base: 10, .. })
    ));
    assert!(matches!(
        convert_base("f", 1, 10),
        Err(ConvertError::BaseOutOfRange {
            param: "from_base",
            value: 1,
            ..
        })
    ));
    assert!(matches!(
        convert_base("f", 37, 10),
        Err(ConvertError::BaseOutOfRange {
            param: "from_base",
            value: 37,
            ..
        })
    ));
    assert!(matches!(
        convert_base("1", 2, 37),
        Err(ConvertError::BaseOutOfRange {
            param: "to_base",
            value: 37,
            ..
        })
    ));
}

#[test]
fn test_error_messages_name_the_offender() {
    let err = convert_base("ff", 10, 2).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("ff"));
    assert!(message.contains("10"));

    let err = convert_base("1", 2, 37).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("to_base"));
    assert!(message.contains("37"));
}
