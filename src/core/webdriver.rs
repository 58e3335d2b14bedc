// src/core/webdriver.rs
//
// Minimal W3C WebDriver client (blocking). Enough to drive a search form:
// open a session, navigate, run scripts, locate/click elements, read the DOM.
//
// Sessions are scoped: `Session` deletes itself on drop, so the browser is
// released on every exit path, including `?` early returns.

use std::{
    thread,
    time::{Duration, Instant},
};

use reqwest::{
    Method,
    StatusCode,
    blocking::{Client, Response},
};
use serde_json::{Value, json};

use crate::{
    config::{
        consts::{WEBDRIVER_COMMAND_TIMEOUT_SECS, WEBDRIVER_POLL_MS},
        settings::{Browser, Settings},
    },
    error::WebDriverError,
};

/// W3C web element identifier key.
pub const ELEMENT_KEY: &str = "element-6066-11e4-a52e-4f735466cecf";

/// Handle to an element in the remote DOM.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    id: String,
}

impl Element {
    /// Wire form, for passing as a script argument.
    pub fn to_json(&self) -> Value {
        json!({ ELEMENT_KEY: self.id })
    }

    fn from_json(v: &Value) -> Result<Element, WebDriverError> {
        v.get(ELEMENT_KEY)
            .and_then(Value::as_str)
            .map(|id| Element { id: s!(id) })
            .ok_or_else(|| WebDriverError::Protocol(format!("not an element reference: {v}")))
    }
}

/// `capabilities` body for `POST /session`.
pub fn capabilities(browser: Browser, headless: bool) -> Value {
    let mut args: Vec<&str> = Vec::new();
    match browser {
        Browser::Firefox => {
            if headless { args.push("-headless"); }
            json!({
                "capabilities": { "alwaysMatch": {
                    "browserName": "firefox",
                    "moz:firefoxOptions": { "args": args },
                }}
            })
        }
        Browser::Edge | Browser::Chrome => {
            if headless { args.push("--headless"); }
            args.push("--disable-gpu");
            let (name, key) = match browser {
                Browser::Edge => ("MicrosoftEdge", "ms:edgeOptions"),
                _             => ("chrome", "goog:chromeOptions"),
            };
            json!({
                "capabilities": { "alwaysMatch": {
                    "browserName": name,
                    key: { "args": args },
                }}
            })
        }
    }
}

/// Split a driver reply into `value` or a typed command error.
pub fn reply_value(status: StatusCode, mut body: Value) -> Result<Value, WebDriverError> {
    let value = match body.get_mut("value") {
        Some(v) => v.take(),
        None => return Err(WebDriverError::Protocol(format!("reply without `value`: {body}"))),
    };
    if status.is_success() {
        return Ok(value);
    }
    let error = value.get("error").and_then(Value::as_str).unwrap_or("unknown error");
    let message = value.get("message").and_then(Value::as_str).unwrap_or("");
    Err(WebDriverError::Command { error: s!(error), message: s!(message) })
}

/// Body that is not JSON (a proxy error page, say) is a protocol error.
pub fn decode_reply(status: StatusCode, text: &str) -> Result<Value, WebDriverError> {
    let body: Value = serde_json::from_str(text).map_err(|e| {
        WebDriverError::Protocol(format!("non-JSON reply (HTTP {}): {e}", status.as_u16()))
    })?;
    reply_value(status, body)
}

fn read_reply(resp: Response) -> Result<Value, WebDriverError> {
    let status = resp.status();
    let text = resp.text()?;
    decode_reply(status, &text)
}

/// Retry `attempt` every `interval` until it yields a value or `timeout`
/// passes. `Ok(None)` and stale element references mean "not yet".
pub fn poll<T, F>(what: &str, timeout: Duration, interval: Duration, mut attempt: F) -> Result<T, WebDriverError>
where
    F: FnMut() -> Result<Option<T>, WebDriverError>,
{
    let deadline = Instant::now() + timeout;
    loop {
        match attempt() {
            Ok(Some(v)) => return Ok(v),
            Ok(None) => {}
            Err(e) if e.is_stale_element() => {}
            Err(e) => return Err(e),
        }
        if Instant::now() >= deadline {
            return Err(WebDriverError::Timeout { what: s!(what), secs: timeout.as_secs() });
        }
        thread::sleep(interval);
    }
}

pub struct Session {
    http: Client,
    base: String,
    id: String,
    closed: bool,
}

impl Session {
    /// `POST /session` against the configured driver.
    pub fn start(settings: &Settings) -> Result<Session, WebDriverError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(WEBDRIVER_COMMAND_TIMEOUT_SECS))
            .build()?;
        let base = settings.webdriver_url.trim_end_matches('/').to_string();

        let caps = capabilities(settings.browser, settings.headless);
        let resp = http.post(format!("{base}/session")).json(&caps).send()?;
        let value = read_reply(resp)?;

        let id = value
            .get("sessionId")
            .and_then(Value::as_str)
            .ok_or_else(|| WebDriverError::Protocol(format!("no sessionId in {value}")))?
            .to_string();

        logf!("WebDriver: session {id} opened ({:?}, headless={})", settings.browser, settings.headless);
        Ok(Session { http, base, id, closed: false })
    }

    fn cmd(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value, WebDriverError> {
        let url = format!("{}/session/{}{}", self.base, self.id, path);
        let mut req = self.http.request(method, url);
        if let Some(b) = body {
            req = req.json(&b);
        }
        read_reply(req.send()?)
    }

    pub fn goto(&self, url: &str) -> Result<(), WebDriverError> {
        logd!("WebDriver: goto {url}");
        self.cmd(Method::POST, "/url", Some(json!({ "url": url })))?;
        Ok(())
    }

    /// Run a synchronous script. Element args go through `Element::to_json`.
    pub fn execute(&self, script: &str, args: Vec<Value>) -> Result<Value, WebDriverError> {
        self.cmd(Method::POST, "/execute/sync", Some(json!({ "script": script, "args": args })))
    }

    /// `Ok(None)` when nothing matches yet.
    pub fn find(&self, css: &str) -> Result<Option<Element>, WebDriverError> {
        let body = json!({ "using": "css selector", "value": css });
        match self.cmd(Method::POST, "/element", Some(body)) {
            Ok(v) => Element::from_json(&v).map(Some),
            Err(e) if e.is_no_such_element() => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub fn click(&self, el: &Element) -> Result<(), WebDriverError> {
        self.cmd(Method::POST, &format!("/element/{}/click", el.id), Some(json!({})))?;
        Ok(())
    }

    pub fn is_displayed(&self, el: &Element) -> Result<bool, WebDriverError> {
        let v = self.cmd(Method::GET, &format!("/element/{}/displayed", el.id), None)?;
        Ok(v.as_bool().unwrap_or(false))
    }

    pub fn is_enabled(&self, el: &Element) -> Result<bool, WebDriverError> {
        let v = self.cmd(Method::GET, &format!("/element/{}/enabled", el.id), None)?;
        Ok(v.as_bool().unwrap_or(false))
    }

    pub fn page_source(&self) -> Result<String, WebDriverError> {
        let v = self.cmd(Method::GET, "/source", None)?;
        v.as_str()
            .map(String::from)
            .ok_or_else(|| WebDriverError::Protocol(s!("page source is not a string")))
    }

    /// Poll until `css` is present.
    pub fn wait_for(&self, css: &str, timeout: Duration) -> Result<Element, WebDriverError> {
        self.wait_until(css, timeout, |_| Ok(true))
    }

    /// Poll until `css` is present, displayed and enabled.
    pub fn wait_for_clickable(&self, css: &str, timeout: Duration) -> Result<Element, WebDriverError> {
        self.wait_until(css, timeout, |el| Ok(self.is_displayed(el)? && self.is_enabled(el)?))
    }

    fn wait_until<F>(&self, css: &str, timeout: Duration, ready: F) -> Result<Element, WebDriverError>
    where
        F: Fn(&Element) -> Result<bool, WebDriverError>,
    {
        poll(css, timeout, Duration::from_millis(WEBDRIVER_POLL_MS), || {
            let Some(el) = self.find(css)? else { return Ok(None) };
            // element may be replaced between find and check
            Ok(ready(&el)?.then_some(el))
        })
    }

    /// Explicit close; errors are reported instead of swallowed.
    pub fn quit(mut self) -> Result<(), WebDriverError> {
        self.closed = true;
        self.delete()
    }

    fn delete(&self) -> Result<(), WebDriverError> {
        let url = format!("{}/session/{}", self.base, self.id);
        read_reply(self.http.delete(url).send()?)?;
        logf!("WebDriver: session {} closed", self.id);
        Ok(())
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        if let Err(e) = self.delete() {
            loge!("WebDriver: failed to close session {}: {e}", self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_capabilities_shape() {
        let caps = capabilities(Browser::Edge, true);
        let m = &caps["capabilities"]["alwaysMatch"];
        assert_eq!(m["browserName"], "MicrosoftEdge");
        assert_eq!(m["ms:edgeOptions"]["args"], json!(["--headless", "--disable-gpu"]));
    }

    #[test]
    fn chrome_headed_has_no_headless_flag() {
        let caps = capabilities(Browser::Chrome, false);
        let m = &caps["capabilities"]["alwaysMatch"];
        assert_eq!(m["browserName"], "chrome");
        assert_eq!(m["goog:chromeOptions"]["args"], json!(["--disable-gpu"]));
    }

    #[test]
    fn firefox_uses_moz_options() {
        let caps = capabilities(Browser::Firefox, true);
        assert_eq!(caps["capabilities"]["alwaysMatch"]["moz:firefoxOptions"]["args"], json!(["-headless"]));
    }

    #[test]
    fn reply_success_returns_value() {
        let v = reply_value(StatusCode::OK, json!({ "value": { ELEMENT_KEY: "abc" } })).unwrap();
        assert_eq!(Element::from_json(&v).unwrap(), Element { id: s!("abc") });
    }

    #[test]
    fn reply_error_is_typed() {
        let body = json!({ "value": { "error": "no such element", "message": "Unable to locate", "stacktrace": "" } });
        let err = reply_value(StatusCode::NOT_FOUND, body).unwrap_err();
        assert!(err.is_no_such_element());
        assert_eq!(err.to_string(), "no such element: Unable to locate");
    }

    #[test]
    fn reply_without_value_is_protocol_error() {
        let err = reply_value(StatusCode::OK, json!({ "status": 0 })).unwrap_err();
        assert!(matches!(err, WebDriverError::Protocol(_)));
    }

    #[test]
    fn html_reply_is_protocol_error() {
        let err = decode_reply(StatusCode::BAD_GATEWAY, "<html><body>502 Bad Gateway</body></html>").unwrap_err();
        assert!(matches!(err, WebDriverError::Protocol(ref m) if m.contains("HTTP 502")), "{err}");
    }

    #[test]
    fn json_reply_decodes() {
        let v = decode_reply(StatusCode::OK, r#"{ "value": { "sessionId": "s1" } }"#).unwrap();
        assert_eq!(v["sessionId"], "s1");
    }

    fn stale() -> WebDriverError {
        WebDriverError::Command { error: s!("stale element reference"), message: s!("gone") }
    }

    #[test]
    fn poll_returns_once_ready() {
        let mut tries = 0;
        let got = poll("#x", Duration::from_secs(5), Duration::ZERO, || {
            tries += 1;
            Ok((tries == 3).then_some(tries))
        })
        .unwrap();
        assert_eq!(got, 3);
        assert_eq!(tries, 3);
    }

    #[test]
    fn poll_retries_stale_elements() {
        let mut tries = 0;
        let got = poll("#x", Duration::from_secs(5), Duration::ZERO, || {
            tries += 1;
            if tries < 3 { Err(stale()) } else { Ok(Some("el")) }
        })
        .unwrap();
        assert_eq!(got, "el");
        assert_eq!(tries, 3);
    }

    #[test]
    fn poll_times_out() {
        let mut tries = 0;
        let err = poll::<(), _>("div.result", Duration::from_millis(20), Duration::from_millis(1), || {
            tries += 1;
            Ok(None)
        })
        .unwrap_err();
        assert!(matches!(err, WebDriverError::Timeout { ref what, secs: 0 } if what == "div.result"));
        assert!(tries >= 2);
    }

    #[test]
    fn poll_stops_on_other_errors() {
        let mut tries = 0;
        let err = poll::<(), _>("#x", Duration::from_secs(5), Duration::ZERO, || {
            tries += 1;
            Err(WebDriverError::Command { error: s!("invalid session id"), message: s!() })
        })
        .unwrap_err();
        assert!(matches!(err, WebDriverError::Command { .. }));
        assert_eq!(tries, 1);
    }

    #[test]
    fn element_json_round_trip() {
        let el = Element { id: s!("e-1") };
        assert_eq!(Element::from_json(&el.to_json()).unwrap(), el);
        assert!(Element::from_json(&json!({ "id": "e-1" })).is_err());
    }
}
