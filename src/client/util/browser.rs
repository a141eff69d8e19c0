//! Small bridges to browser APIs through `document::eval`.

use dioxus::document;
use dioxus_logger::tracing;

use crate::client::store::session::TOKEN_STORAGE_KEY;

/// Quotes `value` as a JavaScript string literal
fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

/// Reads the API token saved by the sign-in flow, `None` when absent or unreadable
pub async fn stored_token() -> Option<String> {
    let script = format!(
        "return window.localStorage.getItem({});",
        js_string(TOKEN_STORAGE_KEY)
    );

    match document::eval(&script).join::<Option<String>>().await {
        Ok(token) => token,
        Err(e) => {
            tracing::warn!("Failed to read stored token: {:?}", e);
            None
        }
    }
}

/// Opens `url` in a new browsing context
pub fn open_in_new_tab(url: &str) {
    let script = format!("window.open({}, '_blank', 'noopener');", js_string(url));
    let _ = document::eval(&script);
}

/// Reports the current viewport width, then again on every resize, until the page goes away
pub async fn watch_viewport_width(mut on_width: impl FnMut(u32)) {
    let mut eval = document::eval(
        r#"
        dioxus.send(window.innerWidth);
        window.addEventListener("resize", () => dioxus.send(window.innerWidth));
        "#,
    );

    while let Ok(width) = eval.recv::<u32>().await {
        on_width(width);
    }
}
