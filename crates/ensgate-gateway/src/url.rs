//! Gateway URL template expansion.
//!
//! EIP-3668 templates may contain `{sender}` and `{data}`. Both are replaced by
//! lowercase `0x`-prefixed hex. A template without `{data}` is a `POST`
//! gateway and receives both values in the JSON body instead.

use alloy_primitives::hex;
use ensgate_core::GatewayRequest;
use url::Url;

use crate::error::{GatewayError, GatewayResult};
use crate::models::{GatewayPostBody, PreparedRequest};

const SENDER_PLACEHOLDER: &str = "{sender}";
const DATA_PLACEHOLDER: &str = "{data}";

/// Expand `request` into a concrete URL and method.
pub fn expand(request: &GatewayRequest) -> GatewayResult<PreparedRequest> {
    let sender = hex::encode_prefixed(request.sender);
    let data = hex::encode_prefixed(&request.call_data);
    let template = &request.url_template;

    let expanded = template
        .replace(SENDER_PLACEHOLDER, &sender)
        .replace(DATA_PLACEHOLDER, &data);
    let url = Url::parse(&expanded).map_err(|source| GatewayError::InvalidUrl {
        url: expanded.clone(),
        source,
    })?;

    if template.contains(DATA_PLACEHOLDER) {
        Ok(PreparedRequest::Get(url))
    } else {
        Ok(PreparedRequest::Post(url, GatewayPostBody { data, sender }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, bytes};

    fn request(template: &str) -> GatewayRequest {
        GatewayRequest {
            url_template: template.to_string(),
            sender: address!("C1735677a60884ABbCF72295E88d47764BeDa282"),
            call_data: bytes!("DEADBEEF"),
        }
    }

    #[test]
    fn test_get_template_substitutes_both_placeholders() {
        let prepared = expand(&request("https://example/{sender}/{data}.json")).unwrap();
        assert_eq!(
            prepared,
            PreparedRequest::Get(
                Url::parse(
                    "https://example/0xc1735677a60884abbcf72295e88d47764beda282/0xdeadbeef.json"
                )
                .unwrap()
            )
        );
    }

    #[test]
    fn test_data_only_template() {
        let prepared = expand(&request("https://gw.example/lookup?q={data}")).unwrap();
        assert_eq!(prepared.url().query(), Some("q=0xdeadbeef"));
    }

    #[test]
    fn test_template_without_data_is_post() {
        let prepared = expand(&request("https://gw.example/{sender}")).unwrap();
        match prepared {
            PreparedRequest::Post(url, body) => {
                assert_eq!(
                    url.path(),
                    "/0xc1735677a60884abbcf72295e88d47764beda282"
                );
                assert_eq!(body.data, "0xdeadbeef");
                assert_eq!(body.sender, "0xc1735677a60884abbcf72295e88d47764beda282");
            }
            other => panic!("expected POST, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_template() {
        assert!(matches!(
            expand(&request("not a url/{data}")),
            Err(GatewayError::InvalidUrl { .. })
        ));
    }
}
