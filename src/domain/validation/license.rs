//! # 운전면허 번호 검증 규칙
//!
//! 기사 등록과 면허 갱신에서 공통으로 사용하는 면허번호 형식 규칙입니다.
//!
//! ## 형식 규칙
//!
//! 유효한 면허번호는 정확히 8자로 구성됩니다:
//!
//! - 앞 3자: ASCII 대문자 (`A`-`Z`)
//! - 뒤 5자: ASCII 숫자 (`0`-`9`)
//!
//! 예: `ABC12345`
//!
//! ## 검증 순서
//!
//! 1. 길이 검사 (문자 수 기준, 바이트 수 아님)
//! 2. 길이가 맞는 경우에만 구성 문자 검사
//!
//! 두 실패는 상호 배타적이며, 입력은 어떤 경우에도 정규화하지 않습니다.
//! 소문자 입력도 교정 없이 그대로 거부됩니다.

use validator::ValidationError;

/// 면허번호의 전체 길이 (문자 수)
const LICENSE_NUMBER_LENGTH: usize = 8;

/// 면허번호 앞부분 대문자 구간의 길이
const LICENSE_PREFIX_LENGTH: usize = 3;

/// 운전면허 번호 형식을 검증합니다.
///
/// 길이를 먼저 검사하고, 길이가 정확히 8자인 경우에만 구성 문자를
/// 검사합니다. 길이는 유니코드 스칼라 값(문자) 수 기준이므로
/// 멀티바이트 문자가 섞인 8자 입력은 길이 검사를 통과한 뒤
/// 형식 검사에서 거부됩니다.
///
/// # 인자
///
/// * `license_number` - 검증할 면허번호 문자열
///
/// # 반환값
///
/// * `Ok(())` - 형식 규칙을 만족하는 경우
/// * `Err(ValidationError)` - 길이 또는 구성 문자 규칙 위반
///
/// # 에러 코드
///
/// - `length_mismatch`: 문자 수가 8이 아닌 경우
/// - `format_mismatch`: 8자이지만 대문자 3자 + 숫자 5자 구성이 아닌 경우
///
/// # 예제
///
/// ```rust,ignore
/// // 유효한 면허번호
/// assert!(validate_license_number("ABC12345").is_ok());
///
/// // 무효한 면허번호
/// assert!(validate_license_number("ABC1234").is_err());   // 7자 - 길이 위반
/// assert!(validate_license_number("abc12345").is_err());  // 소문자 - 형식 위반
/// assert!(validate_license_number("AB123456").is_err());  // 대문자 2자 - 형식 위반
/// ```
pub fn validate_license_number(license_number: &str) -> Result<(), ValidationError> {
    let chars: Vec<char> = license_number.chars().collect();

    if chars.len() != LICENSE_NUMBER_LENGTH {
        return Err(ValidationError::new("length_mismatch")
            .with_message("License number must be exactly 8 characters long".into()));
    }

    let prefix_ok = chars[..LICENSE_PREFIX_LENGTH]
        .iter()
        .all(|c| c.is_ascii_uppercase());
    let digits_ok = chars[LICENSE_PREFIX_LENGTH..]
        .iter()
        .all(|c| c.is_ascii_digit());

    if !(prefix_ok && digits_ok) {
        return Err(ValidationError::new("format_mismatch").with_message(
            "License number must consist of 3 uppercase letters followed by 5 digits (e.g., ABC12345)"
                .into(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_length_mismatch(input: &str) {
        let err = validate_license_number(input).unwrap_err();
        assert_eq!(err.code, "length_mismatch", "input: {:?}", input);
        assert_eq!(
            err.to_string(),
            "License number must be exactly 8 characters long"
        );
    }

    fn assert_format_mismatch(input: &str) {
        let err = validate_license_number(input).unwrap_err();
        assert_eq!(err.code, "format_mismatch", "input: {:?}", input);
        assert_eq!(
            err.to_string(),
            "License number must consist of 3 uppercase letters followed by 5 digits (e.g., ABC12345)"
        );
    }

    #[test]
    fn test_valid_license_number() {
        assert!(validate_license_number("ABC12345").is_ok());
        assert!(validate_license_number("ZZZ00000").is_ok());
        assert!(validate_license_number("AAA99999").is_ok());
    }

    #[test]
    fn test_too_short_fails_with_length_message() {
        assert_length_mismatch("ABC1234");
        assert_length_mismatch("A");
        assert_length_mismatch("");
    }

    #[test]
    fn test_too_long_fails_with_length_message() {
        assert_length_mismatch("ABCD12345");
        assert_length_mismatch("ABC123456");
    }

    #[test]
    fn test_lowercase_prefix_fails_with_format_message() {
        assert_format_mismatch("abc12345");
        assert_format_mismatch("Abc12345");
        assert_format_mismatch("ABc12345");
    }

    #[test]
    fn test_wrong_segment_split_fails_with_format_message() {
        // 8자이지만 대문자/숫자 경계가 어긋난 경우
        assert_format_mismatch("AB123456");
        assert_format_mismatch("ABCD1234");
    }

    #[test]
    fn test_digit_section_with_letters_fails() {
        assert_format_mismatch("ABC12A45");
        assert_format_mismatch("ABCDEFGH");
        assert_format_mismatch("12345678");
    }

    #[test]
    fn test_whitespace_is_not_normalized() {
        assert_length_mismatch(" ABC12345");
        assert_format_mismatch("ABC1234 ");
    }

    #[test]
    fn test_non_ascii_input() {
        // 8문자이지만 ASCII 범위를 벗어난 문자는 형식 위반
        assert_format_mismatch("ÀBC12345");
        assert_format_mismatch("ABC1234５"); // 전각 숫자
        // 문자 수 기준 길이 검사
        assert_length_mismatch("ÀBC1234");
    }

    #[test]
    fn test_validation_is_idempotent() {
        let candidate = "ABC12345";
        assert!(validate_license_number(candidate).is_ok());
        assert!(validate_license_number(candidate).is_ok());

        let first = validate_license_number("abc12345").unwrap_err();
        let second = validate_license_number("abc12345").unwrap_err();
        assert_eq!(first.code, second.code);
    }
}
