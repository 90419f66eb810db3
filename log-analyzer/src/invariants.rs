use derive_more::{AsRef, Debug, Display};
use serde::Serialize;

/// Client address exactly as captured from the line. Only the digit-dot shape is checked.
#[derive(Debug, Display, AsRef, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct IpAddress(String);

impl IpAddress {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for IpAddress {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

#[derive(Debug, Display, AsRef, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Url(String);

impl Url {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for Url {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asserting::prelude::*;

    #[test]
    fn keys_keep_text_verbatim() {
        let ip = IpAddress::from("050.112.00.11");
        let url = Url::from("/a b?c=HTTP/1.1");

        assert_that!(ip.to_string()).is_equal_to("050.112.00.11".to_string());
        assert_that!(url.as_str()).is_equal_to("/a b?c=HTTP/1.1");
    }

    #[test]
    fn keys_serialize_as_plain_strings() {
        let json = serde_json::to_string(&IpAddress::from("10.0.0.1")).unwrap();
        assert_that!(json).is_equal_to(r#""10.0.0.1""#.to_string());
    }
}
