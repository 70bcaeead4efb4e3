//! Parsing raw serial numbers into `u32`s.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Errors which can be produced while parsing a serial number.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseError {
    #[error("unrecognized serial number format '{format}'")]
    UnsupportedFormat { format: String },

    #[error("serial number '{raw}' has no digits")]
    Empty { raw: String },

    #[error("serial number '{raw}' contains a non-hex character {ch:?}")]
    InvalidDigit { raw: String, ch: char },

    #[error("serial number '{raw}' doesn't fit in 32 bits")]
    OutOfRange { raw: String },
}

/// The textual format of a serial number.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SerialFormat {
    /// Base 16 with an optional `0x` prefix, e.g. `2a`, `0x2A`, `0000002a`.
    #[default]
    Hex,
}

impl SerialFormat {
    pub fn parse(self, raw: &str) -> Result<u32, ParseError> {
        match self {
            Self::Hex => parse_hex(raw),
        }
    }
}

impl FromStr for SerialFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hex" => Ok(Self::Hex),
            _ => Err(ParseError::UnsupportedFormat {
                format: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for SerialFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hex => f.write_str("hex"),
        }
    }
}

/// Parse `raw` as a serial number in the format named by `format`. The format
/// is checked before the serial number is looked at.
pub fn parse_serial_number(
    raw: &str,
    format: &str,
) -> Result<u32, ParseError> {
    SerialFormat::from_str(format)?.parse(raw)
}

fn parse_hex(raw: &str) -> Result<u32, ParseError> {
    let digits = raw
        .strip_prefix("0x")
        .or_else(|| raw.strip_prefix("0X"))
        .unwrap_or(raw);

    if digits.is_empty() {
        return Err(ParseError::Empty {
            raw: raw.to_owned(),
        });
    }

    // Leading zeros are fine; overflow is detected on the first digit that
    // doesn't fit.
    digits.chars().try_fold(0u32, |acc, ch| {
        let nibble = ch.to_digit(16).ok_or_else(|| ParseError::InvalidDigit {
            raw: raw.to_owned(),
            ch,
        })?;
        acc.checked_mul(16)
            .and_then(|acc| acc.checked_add(nibble))
            .ok_or_else(|| ParseError::OutOfRange {
                raw: raw.to_owned(),
            })
    })
}

#[cfg(test)]
mod test {
    use proptest::{arbitrary::any, prop_assert_eq, proptest};

    use super::*;

    #[test]
    fn prefix_is_optional() {
        assert_eq!(parse_serial_number("0x2A", "hex"), Ok(42));
        assert_eq!(parse_serial_number("2A", "hex"), Ok(42));
        assert_eq!(parse_serial_number("2a", "hex"), Ok(42));
        assert_eq!(parse_serial_number("0X2a", "hex"), Ok(42));
    }

    #[test]
    fn unsupported_format() {
        assert_eq!(
            parse_serial_number("ff", "decimal"),
            Err(ParseError::UnsupportedFormat {
                format: "decimal".to_owned()
            }),
        );
        // The format tag is case sensitive.
        assert!(matches!(
            parse_serial_number("ff", "HEX"),
            Err(ParseError::UnsupportedFormat { .. })
        ));
        // Format is checked before the serial number.
        assert!(matches!(
            parse_serial_number("not hex", ""),
            Err(ParseError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn bounds() {
        assert_eq!(parse_serial_number("0", "hex"), Ok(0));
        assert_eq!(parse_serial_number("ffffffff", "hex"), Ok(u32::MAX));
        let leading_zeros = "0x00000000ffffffff";
        assert_eq!(parse_serial_number(leading_zeros, "hex"), Ok(u32::MAX));
        assert_eq!(
            parse_serial_number("100000000", "hex"),
            Err(ParseError::OutOfRange {
                raw: "100000000".to_owned()
            }),
        );
    }

    #[test]
    fn malformed() {
        for raw in ["", "0x"] {
            assert_eq!(
                parse_serial_number(raw, "hex"),
                Err(ParseError::Empty {
                    raw: raw.to_owned()
                }),
            );
        }

        let cases = [
            ("+2a", '+'),
            ("-1", '-'),
            (" 2a", ' '),
            ("2a\n", '\n'),
            ("dead_beef", '_'),
            ("0x0x1", 'x'),
            ("xyz", 'x'),
            ("12g4", 'g'),
            ("ä", 'ä'),
        ];
        for (raw, ch) in cases {
            assert_eq!(
                parse_serial_number(raw, "hex"),
                Err(ParseError::InvalidDigit {
                    raw: raw.to_owned(),
                    ch
                }),
            );
        }
    }

    #[test]
    fn error_keeps_raw_input() {
        let err = parse_serial_number("0xnope", "hex").unwrap_err();
        assert_eq!(
            err.to_string(),
            "serial number '0xnope' contains a non-hex character 'n'"
        );
    }

    #[test]
    fn hex_roundtrip() {
        proptest!(|(sn in any::<u32>())| {
            let spellings =
                [format!("{sn:x}"), format!("{sn:#x}"), format!("{sn:08X}")];
            for raw in spellings {
                prop_assert_eq!(parse_serial_number(&raw, "hex"), Ok(sn));
            }
        });
    }

    #[test]
    fn format_display_roundtrip() {
        let format = SerialFormat::default();
        assert_eq!(format.to_string(), "hex");
        assert_eq!(SerialFormat::from_str(&format.to_string()), Ok(format));
    }
}
