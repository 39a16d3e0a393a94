//! Plain `&str -> bool` format checks backing the [`is`](super) rules.
//!
//! These never see empty input through a rule (empty text passes before
//! the predicate runs), but they are usable on their own and return
//! `false` for `""` where an empty string is not a valid instance.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::LazyLock;

use base64::Engine as _;
use regex::Regex;

macro_rules! lazy_regex {
    ($($name:ident = $pattern:literal;)+) => {
        $(
            static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($pattern).unwrap());
        )+
    };
}

lazy_regex! {
    EMAIL_REGEX = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";
    MAC_REGEX = r"^(?:[0-9A-Fa-f]{2}[:-]){5}[0-9A-Fa-f]{2}$|^(?:[0-9A-Fa-f]{4}\.){2}[0-9A-Fa-f]{4}$";
    LABEL_REGEX = r"^[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?$";
    SSN_REGEX = r"^\d{3}[- ]?\d{2}[- ]?\d{4}$";
    E164_REGEX = r"^\+[1-9]\d{1,14}$";
    INT_REGEX = r"^[-+]?(?:0|[1-9][0-9]*)$";
    FLOAT_REGEX = r"^[-+]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][-+]?[0-9]+)?$";
    HEX_COLOR_REGEX = r"^#?(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$";
    RGB_COLOR_REGEX = r"^rgb\(\s*(?:0|[1-9]\d?|1\d\d?|2[0-4]\d|25[0-5])\s*,\s*(?:0|[1-9]\d?|1\d\d?|2[0-4]\d|25[0-5])\s*,\s*(?:0|[1-9]\d?|1\d\d?|2[0-4]\d|25[0-5])\s*\)$";
    DATA_URI_REGEX = r"^data:[a-zA-Z]+/[a-zA-Z0-9.+-]+(?:;[a-zA-Z0-9-]+=[a-zA-Z0-9-]+)*;base64,(.+)$";
}

const COUNTRY_CODES_2: &str = "AD AE AF AG AI AL AM AO AQ AR AS AT AU AW AX AZ BA BB BD BE BF BG \
    BH BI BJ BL BM BN BO BQ BR BS BT BV BW BY BZ CA CC CD CF CG CH CI CK CL CM CN CO CR CU CV CW \
    CX CY CZ DE DJ DK DM DO DZ EC EE EG EH ER ES ET FI FJ FK FM FO FR GA GB GD GE GF GG GH GI GL \
    GM GN GP GQ GR GS GT GU GW GY HK HM HN HR HT HU ID IE IL IM IN IO IQ IR IS IT JE JM JO JP KE \
    KG KH KI KM KN KP KR KW KY KZ LA LB LC LI LK LR LS LT LU LV LY MA MC MD ME MF MG MH MK ML MM \
    MN MO MP MQ MR MS MT MU MV MW MX MY MZ NA NC NE NF NG NI NL NO NP NR NU NZ OM PA PE PF PG PH \
    PK PL PM PN PR PS PT PW PY QA RE RO RS RU RW SA SB SC SD SE SG SH SI SJ SK SL SM SN SO SR SS \
    ST SV SX SY SZ TC TD TF TG TH TJ TK TL TM TN TO TR TT TV TW TZ UA UG UM US UY UZ VA VC VE VG \
    VI VN VU WF WS YE YT ZA ZM ZW";

// ============================================================================
// INTERNET
// ============================================================================

pub fn is_email(s: &str) -> bool {
    s.len() <= 254 && EMAIL_REGEX.is_match(s)
}

/// An absolute URL with a host.
pub fn is_url(s: &str) -> bool {
    url::Url::parse(s).is_ok_and(|u| u.has_host())
}

pub fn is_ip(s: &str) -> bool {
    s.parse::<IpAddr>().is_ok()
}

pub fn is_ipv4(s: &str) -> bool {
    s.parse::<Ipv4Addr>().is_ok()
}

pub fn is_ipv6(s: &str) -> bool {
    s.parse::<Ipv6Addr>().is_ok()
}

/// Colon, hyphen or dot (`0123.4567.89ab`) separated 48-bit address.
pub fn is_mac(s: &str) -> bool {
    MAC_REGEX.is_match(s)
}

/// A single DNS label.
pub fn is_subdomain(s: &str) -> bool {
    LABEL_REGEX.is_match(s)
}

/// RFC 1123 host name, with an optional trailing dot.
pub fn is_dns_name(s: &str) -> bool {
    let name = s.strip_suffix('.').unwrap_or(s);
    !name.is_empty() && name.len() <= 253 && name.split('.').all(is_subdomain)
}

/// A registrable domain: at least two labels and an alphabetic top level.
pub fn is_domain(s: &str) -> bool {
    if s.len() > 255 || !is_dns_name(s) {
        return false;
    }
    let name = s.strip_suffix('.').unwrap_or(s);
    match name.rsplit_once('.') {
        Some((_, tld)) => tld.len() >= 2 && tld.bytes().all(|b| b.is_ascii_alphabetic()),
        None => false,
    }
}

pub fn is_host(s: &str) -> bool {
    is_ip(s) || is_dns_name(s)
}

/// A port number in `1..=65535`.
pub fn is_port(s: &str) -> bool {
    s.parse::<u16>().is_ok_and(|p| p > 0)
}

// ============================================================================
// CHARACTER CLASSES
// ============================================================================

pub fn is_alpha(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphabetic())
}

pub fn is_digit(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

pub fn is_alphanumeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric())
}

pub fn is_utf_letter(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_alphabetic)
}

pub fn is_utf_numeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_numeric)
}

pub fn is_utf_letter_numeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_alphanumeric)
}

pub fn is_lower_case(s: &str) -> bool {
    s == s.to_lowercase()
}

pub fn is_upper_case(s: &str) -> bool {
    s == s.to_uppercase()
}

pub fn is_ascii(s: &str) -> bool {
    s.is_ascii()
}

pub fn is_printable_ascii(s: &str) -> bool {
    s.bytes().all(|b| (0x20..=0x7e).contains(&b))
}

/// Contains at least one non-ASCII character.
pub fn is_multibyte(s: &str) -> bool {
    !s.is_ascii()
}

// ============================================================================
// NUMBERS
// ============================================================================

pub fn is_int(s: &str) -> bool {
    INT_REGEX.is_match(s)
}

pub fn is_float(s: &str) -> bool {
    FLOAT_REGEX.is_match(s)
}

pub fn is_hexadecimal(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_hexdigit())
}

pub fn is_hex_color(s: &str) -> bool {
    HEX_COLOR_REGEX.is_match(s)
}

pub fn is_rgb_color(s: &str) -> bool {
    RGB_COLOR_REGEX.is_match(s)
}

pub fn is_latitude(s: &str) -> bool {
    is_float(s) && s.parse::<f64>().is_ok_and(|v| (-90.0..=90.0).contains(&v))
}

pub fn is_longitude(s: &str) -> bool {
    is_float(s) && s.parse::<f64>().is_ok_and(|v| (-180.0..=180.0).contains(&v))
}

/// Passes the Luhn checksum; spaces and hyphens are ignored.
pub fn is_credit_card(s: &str) -> bool {
    let digits: Vec<u32> = s
        .chars()
        .filter(|c| !matches!(c, ' ' | '-'))
        .map(|c| c.to_digit(10))
        .collect::<Option<_>>()
        .unwrap_or_default();
    if !(12..=19).contains(&digits.len()) {
        return false;
    }
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| match (i % 2, d * 2) {
            (1, doubled) if doubled > 9 => doubled - 9,
            (1, doubled) => doubled,
            _ => d,
        })
        .sum();
    sum % 10 == 0
}

pub fn is_e164(s: &str) -> bool {
    E164_REGEX.is_match(s)
}

pub fn is_ssn(s: &str) -> bool {
    SSN_REGEX.is_match(s)
}

// ============================================================================
// IDENTIFIERS AND ENCODINGS
// ============================================================================

fn parse_uuid(s: &str) -> Option<uuid::Uuid> {
    if s.len() != 36 {
        return None;
    }
    uuid::Uuid::parse_str(s).ok()
}

/// Hyphenated UUID of any version.
pub fn is_uuid(s: &str) -> bool {
    parse_uuid(s).is_some()
}

fn is_uuid_version(s: &str, version: usize) -> bool {
    parse_uuid(s).is_some_and(|u| {
        u.get_version_num() == version && u.get_variant() == uuid::Variant::RFC4122
    })
}

pub fn is_uuid_v3(s: &str) -> bool {
    is_uuid_version(s, 3)
}

pub fn is_uuid_v4(s: &str) -> bool {
    is_uuid_version(s, 4)
}

pub fn is_uuid_v5(s: &str) -> bool {
    is_uuid_version(s, 5)
}

/// 24 hex digits.
pub fn is_mongo_id(s: &str) -> bool {
    s.len() == 24 && is_hexadecimal(s)
}

/// Semantic version, with an optional leading `v`.
pub fn is_semver(s: &str) -> bool {
    semver::Version::parse(s.strip_prefix('v').unwrap_or(s)).is_ok()
}

pub fn is_json(s: &str) -> bool {
    serde_json::from_str::<serde::de::IgnoredAny>(s).is_ok()
}

/// Standard, padded base64.
pub fn is_base64(s: &str) -> bool {
    base64::engine::general_purpose::STANDARD.decode(s).is_ok()
}

pub fn is_data_uri(s: &str) -> bool {
    DATA_URI_REGEX
        .captures(s)
        .and_then(|c| c.get(1))
        .is_some_and(|payload| is_base64(payload.as_str()))
}

/// ISO 3166-1 alpha-2, upper case.
pub fn is_country_code2(s: &str) -> bool {
    s.len() == 2 && COUNTRY_CODES_2.split_ascii_whitespace().any(|code| code == s)
}
