//! Sources of the anti-forgery token sent with write requests

use wasm_bindgen::JsCast;

/// Selector of the hidden input the server renders the token into
pub const DEFAULT_CSRF_SELECTOR: &str = "input#csrf_token";

/// Provides the current CSRF token, read at the moment a request is built
pub trait CsrfTokenSource {
    fn token(&self) -> Option<String>;
}

/// Token handed over explicitly by the host
#[derive(Debug, Clone)]
pub struct StaticCsrfToken(pub String);

impl CsrfTokenSource for StaticCsrfToken {
    fn token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Token provider functions supplied by the host
impl<F> CsrfTokenSource for F
where
    F: Fn() -> Option<String>,
{
    fn token(&self) -> Option<String> {
        self()
    }
}

/// Reads the token from a hidden input of the current page
#[derive(Debug, Clone)]
pub struct PageCsrfToken {
    selector: String,
}

impl PageCsrfToken {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
        }
    }
}

impl Default for PageCsrfToken {
    fn default() -> Self {
        Self::new(DEFAULT_CSRF_SELECTOR)
    }
}

impl CsrfTokenSource for PageCsrfToken {
    fn token(&self) -> Option<String> {
        let document = web_sys::window()?.document()?;
        let element = document.query_selector(&self.selector).ok()??;
        let input = element.dyn_into::<web_sys::HtmlInputElement>().ok()?;
        Some(input.value())
    }
}
