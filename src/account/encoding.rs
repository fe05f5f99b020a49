use bech32::{u5, Variant};

use crate::models::errors::{AccountError, CodecError};

/// Regroups `input` from `from_bits`-wide units into `to_bits`-wide units.
///
/// With `pad` set, a trailing partial group is zero-filled and emitted. Without it, the
/// leftover bits must be fewer than `from_bits` and all zero, otherwise the input is treated
/// as a malformed encoding.
pub fn convert_bits(
    input: &[u8],
    from_bits: u32,
    to_bits: u32,
    pad: bool,
) -> Result<Vec<u8>, CodecError> {
    if !(1..=8).contains(&from_bits) || !(1..=8).contains(&to_bits) {
        return Err(CodecError::InvalidWidth { from_bits, to_bits });
    }

    let max_value: u32 = (1 << to_bits) - 1;
    let max_acc: u32 = (1 << (from_bits + to_bits - 1)) - 1;

    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut output = Vec::with_capacity(input.len() * from_bits as usize / to_bits as usize + 1);

    for &value in input {
        if u32::from(value) >> from_bits != 0 {
            return Err(CodecError::ValueOutOfRange { value, from_bits });
        }
        acc = ((acc << from_bits) | u32::from(value)) & max_acc;
        bits += from_bits;
        while bits >= to_bits {
            bits -= to_bits;
            output.push(((acc >> bits) & max_value) as u8);
        }
    }

    if pad {
        if bits > 0 {
            output.push(((acc << (to_bits - bits)) & max_value) as u8);
        }
    } else if bits >= from_bits || ((acc << (to_bits - bits)) & max_value) != 0 {
        return Err(CodecError::InvalidPadding { leftover: bits });
    }

    Ok(output)
}

/// Bech32-encodes an 8-bit payload under the given human-readable part.
pub fn encode(hrp: &str, data: &[u8]) -> Result<String, AccountError> {
    let symbols = convert_bits(data, 8, 5, true)?
        .into_iter()
        .map(u5::try_from_u8)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(bech32::encode(hrp, symbols, Variant::Bech32)?)
}

/// Splits a bech32 string into its human-readable part and 8-bit payload.
pub fn decode(text: &str) -> Result<(String, Vec<u8>), AccountError> {
    let (hrp, symbols, variant) = bech32::decode(text)?;
    if variant != Variant::Bech32 {
        return Err(AccountError::UnsupportedVariant {
            variant: format!("{:?}", variant),
        });
    }
    let groups: Vec<u8> = symbols.iter().map(|symbol| symbol.to_u8()).collect();
    let data = convert_bits(&groups, 5, 8, false)?;

    Ok((hrp, data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_bits_pads_trailing_group() {
        assert_eq!(convert_bits(&[0xff], 8, 5, true).unwrap(), vec![31, 28]);
        assert_eq!(convert_bits(&[1, 2, 3], 8, 5, true).unwrap(), vec![0, 4, 1, 0, 6]);
    }

    #[test]
    fn test_convert_bits_rejects_non_zero_padding() {
        // 0b11111_11101 carries a set bit inside the two padding bits
        let err = convert_bits(&[31, 29], 5, 8, false).unwrap_err();
        assert_eq!(err, CodecError::InvalidPadding { leftover: 2 });
    }

    #[test]
    fn test_convert_bits_rejects_out_of_range_symbol() {
        let err = convert_bits(&[32], 5, 8, true).unwrap_err();
        assert_eq!(err, CodecError::ValueOutOfRange { value: 32, from_bits: 5 });
    }

    #[test]
    fn test_convert_bits_rejects_invalid_width() {
        assert!(matches!(
            convert_bits(&[1], 0, 5, true),
            Err(CodecError::InvalidWidth { .. })
        ));
        assert!(matches!(
            convert_bits(&[1], 8, 9, true),
            Err(CodecError::InvalidWidth { .. })
        ));
    }

    #[test]
    fn test_encode_decode() {
        let body = [0x2e, 0xef, 0x74, 0xc2, 0x26];
        let text = encode("tlink", &body).unwrap();
        let (hrp, data) = decode(&text).unwrap();
        assert_eq!(hrp, "tlink");
        assert_eq!(data, body);
    }

    #[test]
    fn test_decode_rejects_bech32m() {
        let symbols = convert_bits(&[0x2e, 0xef, 0x74, 0xc2, 0x26], 8, 5, true)
            .unwrap()
            .into_iter()
            .map(|value| u5::try_from_u8(value).unwrap())
            .collect::<Vec<_>>();
        let text = bech32::encode("tlink", symbols, Variant::Bech32m).unwrap();

        let err = decode(&text).unwrap_err();
        assert!(matches!(err, AccountError::UnsupportedVariant { .. }));
    }

    #[test]
    fn test_decode_rejects_bad_checksum() {
        let err = decode("tlink19mhhfs3xmyt9lk9uah33kk9lgucqz9dqhgpfz9").unwrap_err();
        assert!(matches!(err, AccountError::Bech32(_)));
    }
}
