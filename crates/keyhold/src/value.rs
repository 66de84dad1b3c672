//! Codec dispatch: conversions between typed values and raw stored bytes.
//!
//! Each supported value kind has exactly one canonical byte encoding:
//!
//! | value kind | raw encoding |
//! |---|---|
//! | `Vec<u8>` | identity |
//! | `String` | UTF-8 byte sequence |
//! | fixed-width integers | native-endian raw bit pattern |
//! | string-projected types | string projection, then UTF-8 |
//! | integer-projected types | integer projection, then raw bit pattern |
//!
//! Decoding never substitutes a default: bytes that do not form a valid
//! value of the requested kind fail with a decoding error. The one
//! exception is raw-projected types, where "the projection decodes but
//! matches no case" is a soft absence (`None`), not an error.

use crate::error::KeychainError;

/// A value with a direct canonical byte encoding.
///
/// Implemented for raw bytes, text, and all fixed-width integers. The
/// session operations select the codec statically through this trait.
pub trait KeychainValue: Sized {
    /// Encode into the raw byte representation stored by the backend.
    fn encode(&self) -> Result<Vec<u8>, KeychainError>;

    /// Decode from raw stored bytes.
    ///
    /// Fails with a decoding error when the bytes are not a valid value of
    /// this kind.
    fn decode(bytes: &[u8]) -> Result<Self, KeychainError>;
}

impl KeychainValue for Vec<u8> {
    fn encode(&self) -> Result<Vec<u8>, KeychainError> {
        Ok(self.clone())
    }

    fn decode(bytes: &[u8]) -> Result<Self, KeychainError> {
        Ok(bytes.to_vec())
    }
}

impl KeychainValue for String {
    fn encode(&self) -> Result<Vec<u8>, KeychainError> {
        Ok(self.as_bytes().to_vec())
    }

    fn decode(bytes: &[u8]) -> Result<Self, KeychainError> {
        String::from_utf8(bytes.to_vec())
            .map_err(|err| KeychainError::decode(format!("stored bytes are not valid UTF-8: {err}")))
    }
}

macro_rules! impl_fixed_width_integer {
    ($($int:ty),* $(,)?) => {$(
        impl KeychainValue for $int {
            fn encode(&self) -> Result<Vec<u8>, KeychainError> {
                Ok(self.to_ne_bytes().to_vec())
            }

            fn decode(bytes: &[u8]) -> Result<Self, KeychainError> {
                let array: [u8; std::mem::size_of::<$int>()] =
                    bytes.try_into().map_err(|_| {
                        KeychainError::decode(format!(
                            concat!(
                                "expected ",
                                stringify!($int),
                                " ({} bytes), found {} bytes"
                            ),
                            std::mem::size_of::<$int>(),
                            bytes.len()
                        ))
                    })?;
                Ok(<$int>::from_ne_bytes(array))
            }
        }
    )*};
}

impl_fixed_width_integer!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// A value stored through a raw projection.
///
/// Covers enumeration-like types representable by a string or integer raw
/// value. The projection is encoded with the [`KeychainValue`] codec for
/// [`Raw`](RawKeychainValue::Raw); on load, a projection that decodes but
/// matches no case yields `None` rather than an error — "the field decodes"
/// and "the field maps to a known case" are independent conditions.
///
/// ```
/// use keyhold::RawKeychainValue;
///
/// #[derive(Debug, PartialEq)]
/// enum Channel {
///     Stable,
///     Beta,
/// }
///
/// impl RawKeychainValue for Channel {
///     type Raw = String;
///
///     fn raw_value(&self) -> String {
///         match self {
///             Channel::Stable => "stable".to_string(),
///             Channel::Beta => "beta".to_string(),
///         }
///     }
///
///     fn from_raw(raw: String) -> Option<Self> {
///         match raw.as_str() {
///             "stable" => Some(Channel::Stable),
///             "beta" => Some(Channel::Beta),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait RawKeychainValue: Sized {
    /// The projection type carrying the canonical byte encoding.
    type Raw: KeychainValue;

    /// Project this value onto its raw representation.
    fn raw_value(&self) -> Self::Raw;

    /// Recover a value from its raw representation.
    ///
    /// Returns `None` when the projection matches no known case.
    fn from_raw(raw: Self::Raw) -> Option<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyhold_backend::Status;

    #[test]
    fn bytes_are_passed_through() {
        let data = vec![0u8, 255, 7, 42];
        let encoded = data.encode().unwrap();
        assert_eq!(encoded, data);
        assert_eq!(Vec::<u8>::decode(&encoded).unwrap(), data);
    }

    #[test]
    fn text_round_trips_as_utf8() {
        let text = "pässwörd → 秘密".to_string();
        let encoded = text.encode().unwrap();
        assert_eq!(String::decode(&encoded).unwrap(), text);
    }

    #[test]
    fn invalid_utf8_is_a_decode_error() {
        let err = String::decode(&[0xff, 0xfe, 0xfd]).unwrap_err();
        assert_eq!(err.status(), Status::DECODE);
        assert!(err.message().contains("UTF-8"));
    }

    #[test]
    fn integers_use_native_bit_pattern() {
        let value: u32 = 12345;
        let encoded = value.encode().unwrap();
        assert_eq!(encoded, value.to_ne_bytes().to_vec());
        assert_eq!(u32::decode(&encoded).unwrap(), value);
    }

    #[test]
    fn negative_integers_round_trip() {
        let value: i64 = -987_654_321;
        let encoded = value.encode().unwrap();
        assert_eq!(i64::decode(&encoded).unwrap(), value);
    }

    #[test]
    fn wrong_byte_width_is_a_decode_error() {
        // 5 bytes can never be a u32.
        let err = u32::decode(&[1, 2, 3, 4, 5]).unwrap_err();
        assert_eq!(err.status(), Status::DECODE);
        assert!(err.message().contains("4 bytes"));
        assert!(err.message().contains("5 bytes"));
    }

    #[test]
    fn empty_bytes_never_decode_as_integer() {
        assert!(u8::decode(&[]).is_err());
        assert!(i128::decode(&[]).is_err());
    }

    #[derive(Debug, PartialEq)]
    enum StringRaw {
        A,
        B,
        C,
    }

    impl RawKeychainValue for StringRaw {
        type Raw = String;

        fn raw_value(&self) -> String {
            match self {
                StringRaw::A => "a".to_string(),
                StringRaw::B => "b".to_string(),
                StringRaw::C => "c".to_string(),
            }
        }

        fn from_raw(raw: String) -> Option<Self> {
            match raw.as_str() {
                "a" => Some(StringRaw::A),
                "b" => Some(StringRaw::B),
                "c" => Some(StringRaw::C),
                _ => None,
            }
        }
    }

    #[derive(Debug, PartialEq)]
    enum IntegerRaw {
        A,
        B,
        C,
    }

    impl RawKeychainValue for IntegerRaw {
        type Raw = u8;

        fn raw_value(&self) -> u8 {
            match self {
                IntegerRaw::A => 0,
                IntegerRaw::B => 1,
                IntegerRaw::C => 2,
            }
        }

        fn from_raw(raw: u8) -> Option<Self> {
            match raw {
                0 => Some(IntegerRaw::A),
                1 => Some(IntegerRaw::B),
                2 => Some(IntegerRaw::C),
                _ => None,
            }
        }
    }

    #[test]
    fn string_projection_round_trips() {
        let raw = StringRaw::C.raw_value();
        assert_eq!(StringRaw::from_raw(raw), Some(StringRaw::C));
    }

    #[test]
    fn unknown_string_projection_is_soft_absence() {
        assert_eq!(StringRaw::from_raw("z".to_string()), None);
    }

    #[test]
    fn integer_projection_round_trips() {
        let raw = IntegerRaw::B.raw_value();
        assert_eq!(IntegerRaw::from_raw(raw), Some(IntegerRaw::B));
    }

    #[test]
    fn unknown_integer_projection_is_soft_absence() {
        assert_eq!(IntegerRaw::from_raw(200), None);
    }
}
