//! Transient flash notices, carried to the next rendered page in a cookie.

use actix_web::HttpRequest;
use actix_web::cookie::Cookie;
use serde::Serialize;

const FLASH_COOKIE: &str = "blogly_flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Success,
    Warning,
}

impl Level {
    fn as_str(self) -> &'static str {
        match self {
            Level::Success => "success",
            Level::Warning => "warning",
        }
    }
}

/// A one-shot status notice. The message is urlencoded on the wire so
/// any text fits the cookie-value grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flash {
    pub level: Level,
    pub message: String,
}

fn encode(message: &str) -> String {
    url::form_urlencoded::byte_serialize(message.as_bytes()).collect()
}

fn decode(encoded: &str) -> String {
    // A bare urlencoded value parses as a single key with no value.
    url::form_urlencoded::parse(encoded.as_bytes())
        .next()
        .map(|(decoded, _)| decoded.into_owned())
        .unwrap_or_default()
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: Level::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: Level::Warning,
            message: message.into(),
        }
    }

    /// The cookie that carries this notice to the next request.
    pub fn into_cookie(self) -> Cookie<'static> {
        Cookie::build(
            FLASH_COOKIE,
            format!("{}:{}", self.level.as_str(), encode(&self.message)),
        )
        .path("/")
        .http_only(true)
        .finish()
    }

    /// Read the pending notice off a request, if any.
    pub fn take(req: &HttpRequest) -> Option<Flash> {
        let cookie = req.cookie(FLASH_COOKIE)?;
        let (level, message) = cookie.value().split_once(':')?;
        let level = match level {
            "success" => Level::Success,
            "warning" => Level::Warning,
            _ => return None,
        };

        Some(Flash {
            level,
            message: decode(message),
        })
    }

    /// A cookie that clears the notice once it has been shown.
    pub fn removal_cookie() -> Cookie<'static> {
        let mut cookie = Cookie::new(FLASH_COOKIE, "");
        cookie.set_path("/");
        cookie.make_removal();
        cookie
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn flash_round_trips_through_cookie() {
        let cookie = Flash::success("New user created!").into_cookie();
        let req = TestRequest::default().cookie(cookie).to_http_request();

        let flash = Flash::take(&req).unwrap();
        assert_eq!(flash, Flash::success("New user created!"));
    }

    #[test]
    fn message_with_spaces_and_punctuation_round_trips() {
        let cookie = Flash::warning("Something went wrong :/").into_cookie();
        for byte in cookie.value().bytes() {
            // cookie-octet per RFC 6265: no whitespace, DQUOTE, comma,
            // semicolon or backslash
            assert!(byte > 0x20 && !b"\",;\\".contains(&byte), "raw byte {byte:#x}");
        }

        let req = TestRequest::default().cookie(cookie).to_http_request();
        let flash = Flash::take(&req).unwrap();
        assert_eq!(flash, Flash::warning("Something went wrong :/"));
    }

    #[test]
    fn unknown_level_is_ignored() {
        let req = TestRequest::default()
            .cookie(Cookie::new(FLASH_COOKIE, "shout:HELLO"))
            .to_http_request();
        assert!(Flash::take(&req).is_none());
    }

    #[test]
    fn absent_cookie_is_none() {
        let req = TestRequest::default().to_http_request();
        assert!(Flash::take(&req).is_none());
    }
}
