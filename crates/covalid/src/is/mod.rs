//! Format rules
//!
//! Each function returns a [`StringRule`] wrapping one of the
//! [`predicates`]. Codes follow the `validation_is_<name>` pattern.
//!
//! # Examples
//!
//! ```rust,ignore
//! use covalid::{is, prelude::*};
//!
//! validate("user@example.com", &rules![required(), is::email()])?;
//! validate("10.0.0.1", &rules![is::ipv4()])?;
//! ```

pub mod predicates;

use crate::foundation::ValidationError;
use crate::validators::{StringRule, string_rule_with_error};

macro_rules! format_rules {
    ($($(#[$meta:meta])* $name:ident => $check:ident, $code:literal, $message:literal;)+) => {
        $(
            $(#[$meta])*
            pub fn $name() -> StringRule {
                string_rule_with_error(
                    predicates::$check,
                    ValidationError::from_static(concat!("validation_is_", $code), $message),
                )
            }
        )+
    };
}

format_rules! {
    email => is_email, "email", "must be a valid email address";
    /// Absolute URL with a host.
    url => is_url, "url", "must be a valid URL";
    alpha => is_alpha, "alpha", "must contain English letters only";
    digit => is_digit, "digit", "must contain digits only";
    alphanumeric => is_alphanumeric, "alphanumeric", "must contain English letters and digits only";
    utf_letter => is_utf_letter, "utf_letter", "must contain unicode letter characters only";
    utf_numeric => is_utf_numeric, "utf_numeric", "must contain unicode number characters only";
    utf_letter_numeric => is_utf_letter_numeric, "utf_letter_numeric", "must contain unicode letters and numbers only";
    lower_case => is_lower_case, "lower_case", "must be in lower case";
    upper_case => is_upper_case, "upper_case", "must be in upper case";
    ip => is_ip, "ip", "must be a valid IP address";
    ipv4 => is_ipv4, "ipv4", "must be a valid IPv4 address";
    ipv6 => is_ipv6, "ipv6", "must be a valid IPv6 address";
    mac => is_mac, "mac", "must be a valid MAC address";
    subdomain => is_subdomain, "sub_domain", "must be a valid subdomain";
    domain => is_domain, "domain", "must be a valid domain";
    dns_name => is_dns_name, "dns_name", "must be a valid DNS name";
    /// IP address or DNS name.
    host => is_host, "host", "must be a valid IP address or DNS name";
    port => is_port, "port", "must be a valid port number";
    latitude => is_latitude, "latitude", "must be a valid latitude";
    longitude => is_longitude, "longitude", "must be a valid longitude";
    ssn => is_ssn, "ssn", "must be a valid social security number";
    semver => is_semver, "semver", "must be a valid semantic version";
    uuid => is_uuid, "uuid", "must be a valid UUID";
    uuid_v3 => is_uuid_v3, "uuid_v3", "must be a valid UUID v3";
    uuid_v4 => is_uuid_v4, "uuid_v4", "must be a valid UUID v4";
    uuid_v5 => is_uuid_v5, "uuid_v5", "must be a valid UUID v5";
    mongo_id => is_mongo_id, "mongo_id", "must be a valid hex-encoded MongoDB ObjectId";
    credit_card => is_credit_card, "credit_card", "must be a valid credit card number";
    json => is_json, "json", "must be in valid JSON format";
    ascii => is_ascii, "ascii", "must contain ASCII characters only";
    printable_ascii => is_printable_ascii, "printable_ascii", "must contain printable ASCII characters only";
    e164 => is_e164, "e164", "must be a valid E164 number";
    country_code2 => is_country_code2, "country_code_2_letter", "must be a valid two-letter country code";
    data_uri => is_data_uri, "data_uri", "must be a Base64-encoded data URI";
    base64 => is_base64, "base64", "must be encoded in Base64";
    multibyte => is_multibyte, "multibyte", "must contain multibyte characters";
    hexadecimal => is_hexadecimal, "hexadecimal", "must be a valid hexadecimal number";
    hex_color => is_hex_color, "hex_color", "must be a valid hexadecimal color code";
    rgb_color => is_rgb_color, "rgb_color", "must be a valid RGB color code";
    int => is_int, "int", "must be an integer number";
    float => is_float, "float", "must be a floating point number";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Rule, ToValue, Value};
    use rstest::rstest;

    #[rstest]
    #[case(email(), "test@example.com", "example.com", "must be a valid email address")]
    #[case(ipv4(), "74.125.19.99", "2001:4860:0:2001::68", "must be a valid IPv4 address")]
    #[case(port(), "123", "99999", "must be a valid port number")]
    #[case(uuid_v4(), "57b73598-8764-4ad0-a76a-679bb6640eb1", "b987fbc9-4bed-3078-cf07-9141ba07c9f3", "must be a valid UUID v4")]
    #[case(int(), "100", "1.1", "must be an integer number")]
    fn test_rules(#[case] rule: StringRule, #[case] valid: &str, #[case] invalid: &str, #[case] message: &str) {
        assert!(rule.validate(&"".to_value()).is_ok());
        assert!(rule.validate(&Value::Nil).is_ok());
        assert!(rule.validate(&valid.to_value()).is_ok());
        assert!(rule.validate(&Some(valid).to_value()).is_ok());
        assert_eq!(rule.validate(&invalid.to_value()).unwrap_err().to_string(), message);
    }

    #[test]
    fn test_codes() {
        let err = email().validate(&"x".to_value()).unwrap_err();
        assert_eq!(err.code(), Some("validation_is_email"));
        let err = country_code2().validate(&"XY".to_value()).unwrap_err();
        assert_eq!(err.code(), Some("validation_is_country_code_2_letter"));
    }
}
