use web_sys::{Document, Window};

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

pub fn document() -> Result<Document, String> {
    window()?
        .document()
        .ok_or_else(|| "No document object".to_string())
}

/// Anything that owns a page title.
pub trait DocumentTitle {
    fn title(&self) -> String;
    fn set_title(&self, title: &str);
}

/// The live browser document.
#[derive(Clone)]
pub struct BrowserDocument(Document);

impl BrowserDocument {
    pub fn current() -> Result<Self, String> {
        document().map(Self)
    }
}

impl DocumentTitle for BrowserDocument {
    fn title(&self) -> String {
        self.0.title()
    }

    fn set_title(&self, title: &str) {
        self.0.set_title(title);
    }
}

/// Holds the page title for as long as it is alive.
///
/// The title in place at acquisition is restored when the guard drops.
pub struct TitleGuard<T: DocumentTitle> {
    target: T,
    previous: String,
}

impl<T: DocumentTitle> TitleGuard<T> {
    pub fn acquire(target: T, title: &str) -> Self {
        let previous = target.title();
        target.set_title(title);
        Self { target, previous }
    }

    pub fn update(&self, title: &str) {
        self.target.set_title(title);
    }

    pub fn previous(&self) -> &str {
        &self.previous
    }
}

impl<T: DocumentTitle> Drop for TitleGuard<T> {
    fn drop(&mut self) {
        self.target.set_title(&self.previous);
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn browser_title_is_restored_after_guard_drops() {
        let doc = BrowserDocument::current().unwrap();
        doc.set_title("Before");
        {
            let _guard = TitleGuard::acquire(doc.clone(), "Log In - Login Page UI");
            assert_eq!(doc.title(), "Log In - Login Page UI");
        }
        assert_eq!(doc.title(), "Before");
    }
}
