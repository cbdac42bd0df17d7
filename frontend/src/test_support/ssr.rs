use leptos::*;

/// Owns a reactive runtime for the duration of a test and disposes it on drop,
/// including when an assertion panics mid-way through an async test.
pub struct RuntimeGuard(Option<RuntimeId>);

impl RuntimeGuard {
    pub fn new() -> Self {
        Self(Some(create_runtime()))
    }
}

impl Drop for RuntimeGuard {
    fn drop(&mut self) {
        if let Some(runtime) = self.0.take() {
            runtime.dispose();
        }
    }
}

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let _runtime = RuntimeGuard::new();
    f()
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}
