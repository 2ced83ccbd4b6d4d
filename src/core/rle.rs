//! 런길이 부호화 (RLE)
//!
//! 최대 길이 런 단위로 (심볼, 카운트) 토큰을 만든다. 카운트는 항상 1 이상.

use crate::core::error::CodecError;
use crate::core::types::RleToken;

/// 문자열을 RLE 토큰 시퀀스로 압축
pub fn encode(input: &str) -> Vec<RleToken> {
    let symbols: Vec<char> = input.chars().collect();
    encode_symbols(&symbols)
        .into_iter()
        .map(|(symbol, count)| RleToken { symbol, count })
        .collect()
}

/// RLE 토큰 시퀀스를 원문으로 복원
pub fn decode(tokens: &[RleToken]) -> Result<String, CodecError> {
    let mut out = String::new();
    for token in tokens {
        if token.count == 0 {
            return Err(CodecError::InvalidInput(format!(
                "런 카운트는 1 이상이어야 함: symbol '{}'",
                token.symbol
            )));
        }
        for _ in 0..token.count {
            out.push(token.symbol);
        }
    }
    Ok(out)
}

/// 임의 심볼 타입에 대한 RLE 압축
///
/// 스캔 시퀀스를 심볼로 사상한 뒤 엔트로피 스테이지에 넘길 때 사용.
pub fn encode_symbols<T: PartialEq + Copy>(input: &[T]) -> Vec<(T, usize)> {
    let mut out = Vec::new();
    let mut i = 0;
    while i < input.len() {
        let mut count = 1;
        while i + count < input.len() && input[i + count] == input[i] {
            count += 1;
        }
        out.push((input[i], count));
        i += count;
    }
    out
}

/// 임의 심볼 타입 RLE 복원
pub fn decode_symbols<T: Copy>(tokens: &[(T, usize)]) -> Result<Vec<T>, CodecError> {
    let mut out = Vec::new();
    for &(symbol, count) in tokens {
        if count == 0 {
            return Err(CodecError::InvalidInput(
                "런 카운트는 1 이상이어야 함".to_string(),
            ));
        }
        for _ in 0..count {
            out.push(symbol);
        }
    }
    Ok(out)
}
