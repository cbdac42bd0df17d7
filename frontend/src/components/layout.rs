use crate::utils::document::{BrowserDocument, TitleGuard};
use leptos::*;

/// Full-viewport shell that centers its children on the page background.
///
/// Children bring their own framing (card, padding, width). When `title` is
/// given, the document title follows it while the layout is mounted and the
/// previous title comes back on unmount.
#[component]
pub fn MainAppLayout(
    children: Children,
    #[prop(optional, into)] title: Option<MaybeSignal<String>>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    if let Some(title) = title {
        use_document_title(title);
    }

    view! {
        <main class=format!(
            "flex items-center justify-center h-screen bg-background {}",
            class
        )>
            {children()}
        </main>
    }
}

fn use_document_title(title: MaybeSignal<String>) {
    let guard = store_value(None::<TitleGuard<BrowserDocument>>);

    create_effect(move |_| {
        let next = title.get();
        guard.update_value(|slot| {
            if let Some(held) = slot.as_ref() {
                held.update(&next);
                return;
            }
            match BrowserDocument::current() {
                Ok(document) => *slot = Some(TitleGuard::acquire(document, &next)),
                Err(err) => log::warn!("cannot set page title: {}", err),
            }
        });
    });

    on_cleanup(move || {
        guard.update_value(|slot| {
            slot.take();
        });
    });
}
