//! Composite field encoding - bank account strings and phone masking.
//!
//! Stored records keep the bank account as one string, `"<bank> <digits>"`, or bare digits
//! when no known bank prefixes it. Inside the crate the pair is a [`BankAccount`]; the
//! composite string only exists at the serde boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Banks offered in the pay tab. Display names are single whitespace-free tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bank {
    /// 국민은행
    Kookmin,
    /// 신한은행
    Shinhan,
    /// 우리은행
    Woori,
    /// 하나은행
    Hana,
    /// 농협은행
    Nonghyup,
    /// 기업은행
    Ibk,
    /// 카카오뱅크
    KakaoBank,
    /// 토스뱅크
    TossBank,
    /// 케이뱅크
    KBank,
    /// SC제일은행
    StandardChartered,
    /// 씨티은행
    Citi,
    /// 부산은행
    Busan,
    /// 대구은행
    Daegu,
    /// 광주은행
    Gwangju,
    /// 전북은행
    Jeonbuk,
    /// 경남은행
    Gyeongnam,
    /// 수협은행
    Suhyup,
    /// 우체국
    Post,
    /// 새마을금고
    Saemaul,
    /// 신협
    Shinhyup,
}

impl Bank {
    /// Every bank, in picker order
    pub const ALL: [Self; 20] = [
        Self::Kookmin,
        Self::Shinhan,
        Self::Woori,
        Self::Hana,
        Self::Nonghyup,
        Self::Ibk,
        Self::KakaoBank,
        Self::TossBank,
        Self::KBank,
        Self::StandardChartered,
        Self::Citi,
        Self::Busan,
        Self::Daegu,
        Self::Gwangju,
        Self::Jeonbuk,
        Self::Gyeongnam,
        Self::Suhyup,
        Self::Post,
        Self::Saemaul,
        Self::Shinhyup,
    ];

    /// Display name as it appears in the composite string.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kookmin => "국민은행",
            Self::Shinhan => "신한은행",
            Self::Woori => "우리은행",
            Self::Hana => "하나은행",
            Self::Nonghyup => "농협은행",
            Self::Ibk => "기업은행",
            Self::KakaoBank => "카카오뱅크",
            Self::TossBank => "토스뱅크",
            Self::KBank => "케이뱅크",
            Self::StandardChartered => "SC제일은행",
            Self::Citi => "씨티은행",
            Self::Busan => "부산은행",
            Self::Daegu => "대구은행",
            Self::Gwangju => "광주은행",
            Self::Jeonbuk => "전북은행",
            Self::Gyeongnam => "경남은행",
            Self::Suhyup => "수협은행",
            Self::Post => "우체국",
            Self::Saemaul => "새마을금고",
            Self::Shinhyup => "신협",
        }
    }

    /// Looks a bank up by its exact display name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bank| bank.name() == name)
    }
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Bank and account digits as a structured pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct BankAccount {
    /// Recognized bank, if the composite string carried one
    pub bank: Option<Bank>,
    /// Account number without hyphens
    pub digits: String,
}

impl BankAccount {
    /// Builds a pair from its parts, stripping hyphens from the digits.
    #[must_use]
    pub fn new(bank: Option<Bank>, digits: &str) -> Self {
        Self {
            bank,
            digits: strip_hyphens(digits),
        }
    }

    /// Parses the composite string form.
    #[must_use]
    pub fn parse(account: &str) -> Self {
        Self {
            bank: decode_bank(account),
            digits: decode_number(account),
        }
    }

    /// Composite string form.
    #[must_use]
    pub fn to_composite(&self) -> String {
        encode(self.bank, &self.digits)
    }

    /// Neither a bank nor any digits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bank.is_none() && self.digits.is_empty()
    }
}

impl fmt::Display for BankAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_composite())
    }
}

impl From<String> for BankAccount {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<BankAccount> for String {
    fn from(value: BankAccount) -> Self {
        value.to_composite()
    }
}

fn strip_hyphens(value: &str) -> String {
    value.chars().filter(|c| *c != '-').collect()
}

/// Bank named by the first whitespace-separated token, if it is a known bank.
#[must_use]
pub fn decode_bank(account: &str) -> Option<Bank> {
    account.split_whitespace().next().and_then(Bank::from_name)
}

/// Account digits of a composite string, hyphens removed.
///
/// With a recognized bank prefix the remaining tokens are concatenated; otherwise the
/// whole (trimmed) string is used.
#[must_use]
pub fn decode_number(account: &str) -> String {
    if decode_bank(account).is_some() {
        account
            .split_whitespace()
            .skip(1)
            .map(strip_hyphens)
            .collect()
    } else {
        strip_hyphens(account.trim())
    }
}

/// Joins bank and digits into the composite string. Either side may be empty.
#[must_use]
pub fn encode(bank: Option<Bank>, digits: &str) -> String {
    let name = bank.map_or("", Bank::name);
    format!("{name} {digits}").trim().to_string()
}

/// Hides the middle group of a `DDD-DDDD-DDDD` phone number.
///
/// Anything not in that exact shape is returned unchanged.
#[must_use]
pub fn mask_phone(phone: &str) -> String {
    let groups: Vec<&str> = phone.split('-').collect();
    let shaped = groups.len() == 3
        && groups
            .iter()
            .zip([3, 4, 4])
            .all(|(group, len)| group.len() == len && group.bytes().all(|b| b.is_ascii_digit()));

    if shaped {
        format!("{}-****-{}", groups[0], groups[2])
    } else {
        phone.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_every_bank() {
        for bank in Bank::ALL {
            for digits in ["", "1", "110123456789"] {
                let composite = encode(Some(bank), digits);
                assert_eq!(decode_bank(&composite), Some(bank));
                assert_eq!(decode_number(&composite), digits);
            }
        }
    }

    #[test]
    fn test_round_trip_without_bank() {
        let composite = encode(None, "3333012345678");
        assert_eq!(composite, "3333012345678");
        assert_eq!(decode_bank(&composite), None);
        assert_eq!(decode_number(&composite), "3333012345678");
        assert_eq!(encode(None, ""), "");
    }

    #[test]
    fn test_decode_strips_hyphens() {
        assert_eq!(decode_number("우리은행 1002-123-456789"), "1002123456789");
        assert_eq!(decode_number("1002-123-456789"), "1002123456789");
    }

    #[test]
    fn test_decode_joins_tokens_after_bank() {
        assert_eq!(decode_bank("우리은행 1002 123"), Some(Bank::Woori));
        assert_eq!(decode_number("우리은행 1002 123"), "1002123");
        assert_eq!(decode_number("우리은행  1002-12   3 "), "1002123");
        assert_eq!(BankAccount::parse("우리은행 1002 123").to_composite(), "우리은행 1002123");
    }

    #[test]
    fn test_unknown_prefix_is_not_a_bank() {
        assert_eq!(decode_bank("MysteryBank 1234"), None);
        assert_eq!(decode_number("MysteryBank 12-34"), "MysteryBank 1234");
    }

    #[test]
    fn test_bank_account_serializes_as_composite() {
        let account = BankAccount::new(Some(Bank::KakaoBank), "3333-01-2345678");
        assert_eq!(account.digits, "3333012345678");
        assert_eq!(String::from(account.clone()), "카카오뱅크 3333012345678");
        assert_eq!(BankAccount::parse(&account.to_string()), account);
        assert!(BankAccount::default().is_empty());
    }

    #[test]
    fn test_mask_phone() {
        assert_eq!(mask_phone("010-1234-5678"), "010-****-5678");
    }

    #[test]
    fn test_mask_phone_leaves_other_shapes_alone() {
        for phone in ["", "01012345678", "010-1234", "02-123-4567", "010-12a4-5678", "010-1234-56789"] {
            assert_eq!(mask_phone(phone), phone);
        }
    }
}
