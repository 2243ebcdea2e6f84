use serde::Deserialize;

use crate::domain::{CallerNameInfo, CarrierInfo, LookupPhoneNumberResponse};

/// Build the query parameters for a lookup request, in the order they must
/// appear on the wire.
///
/// `CountryCode` is emitted only when a value was supplied; the `Type` values
/// keep a fixed `caller-name` before `carrier` order, matching recorded
/// fixtures.
pub(crate) fn query_params(
    country_code: Option<&str>,
    include_caller_name: bool,
    include_carrier: bool,
) -> Vec<(&'static str, String)> {
    let mut params = Vec::<(&'static str, String)>::new();

    if let Some(country_code) = country_code {
        params.push(("CountryCode", country_code.to_owned()));
    }
    if include_caller_name {
        params.push(("Type", "caller-name".to_owned()));
    }
    if include_carrier {
        params.push(("Type", "carrier".to_owned()));
    }

    params
}

#[derive(Debug, Clone, Deserialize)]
struct CallerNameJson {
    #[serde(default)]
    caller_name: Option<String>,
    #[serde(default)]
    caller_type: Option<String>,
    #[serde(default)]
    error_code: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct CarrierJson {
    #[serde(default)]
    mobile_country_code: Option<String>,
    #[serde(default)]
    mobile_network_code: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    error_code: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct LookupJsonResponse {
    #[serde(default)]
    country_code: Option<String>,
    #[serde(default)]
    phone_number: Option<String>,
    #[serde(default)]
    national_format: Option<String>,
    #[serde(default)]
    caller_name: Option<CallerNameJson>,
    #[serde(default)]
    carrier: Option<CarrierJson>,
    #[serde(default)]
    url: Option<String>,
}

/// Decode a lookup response body. Absent or `null` fields become defaults;
/// unknown fields are ignored.
pub(crate) fn decode_response(json: &str) -> Result<LookupPhoneNumberResponse, serde_json::Error> {
    let parsed: LookupJsonResponse = serde_json::from_str(json)?;

    let caller_name = parsed
        .caller_name
        .map(|it| CallerNameInfo {
            caller_name: it.caller_name.unwrap_or_default(),
            caller_type: it.caller_type.unwrap_or_default(),
            error_code: it.error_code.unwrap_or_default(),
        })
        .unwrap_or_default();

    let carrier = parsed
        .carrier
        .map(|it| CarrierInfo {
            mobile_country_code: it.mobile_country_code.unwrap_or_default(),
            mobile_network_code: it.mobile_network_code.unwrap_or_default(),
            name: it.name.unwrap_or_default(),
            kind: it.kind.unwrap_or_default(),
            error_code: it.error_code.unwrap_or_default(),
        })
        .unwrap_or_default();

    Ok(LookupPhoneNumberResponse {
        country_code: parsed.country_code.unwrap_or_default(),
        phone_number: parsed.phone_number.unwrap_or_default(),
        national_format: parsed.national_format.unwrap_or_default(),
        caller_name,
        carrier,
        url: parsed.url.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_params_keep_fixed_type_order() {
        let params = query_params(Some("US"), true, true);
        assert_eq!(
            params,
            vec![
                ("CountryCode", "US".to_owned()),
                ("Type", "caller-name".to_owned()),
                ("Type", "carrier".to_owned()),
            ]
        );
    }

    #[test]
    fn query_params_omit_absent_values_entirely() {
        assert!(query_params(None, false, false).is_empty());

        let params = query_params(None, false, true);
        assert_eq!(params, vec![("Type", "carrier".to_owned())]);
    }

    #[test]
    fn decode_maps_null_error_codes_to_empty_strings() {
        let json = r#"
        {
            "url": "https://lookups.twilio.com/v1/PhoneNumbers/+15108675310?Type=carrier",
            "carrier": {
                "error_code": null,
                "type": "mobile",
                "name": "T-Mobile USA, Inc.",
                "mobile_network_code": "160",
                "mobile_country_code": "310"
            },
            "caller_name": {
                "caller_name": "John Smith",
                "caller_type": "consumer",
                "error_code": null
            },
            "national_format": "(510) 867-5310",
            "phone_number": "+15108675310",
            "country_code": "US"
        }
        "#;

        let resp = decode_response(json).unwrap();
        assert_eq!(resp.country_code, "US");
        assert_eq!(resp.phone_number, "+15108675310");
        assert_eq!(resp.national_format, "(510) 867-5310");
        assert_eq!(resp.carrier.name, "T-Mobile USA, Inc.");
        assert_eq!(resp.carrier.kind, "mobile");
        assert_eq!(resp.carrier.mobile_country_code, "310");
        assert_eq!(resp.carrier.mobile_network_code, "160");
        assert_eq!(resp.carrier.error_code, "");
        assert_eq!(resp.caller_name.caller_name, "John Smith");
        assert_eq!(resp.caller_name.caller_type, "consumer");
        assert_eq!(resp.caller_name.error_code, "");
    }

    #[test]
    fn decode_defaults_missing_sections() {
        let resp = decode_response(r#"{"phone_number": "+15108675310"}"#).unwrap();
        assert_eq!(resp.phone_number, "+15108675310");
        assert_eq!(resp.caller_name, CallerNameInfo::default());
        assert_eq!(resp.carrier, CarrierInfo::default());
        assert_eq!(resp.url, "");
    }

    #[test]
    fn decode_rejects_invalid_json() {
        assert!(decode_response("invalid JSON").is_err());
    }
}
