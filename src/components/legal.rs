//! Static legal text shown in a modal. Opening writes the `legal` query
//! hint; closing strips it again.

use leptos::prelude::*;

use crate::i18n;
use crate::state::settings::SettingsState;
use crate::util::location::LegalDoc;

const PRIVACY_TEXT: &str = "We store only the account attributes needed to \
operate your session: an identifier, an optional display name, and optional \
contact details. Guest accounts hold no contact details and are erased \
together with their data when their session ends. Nothing is shared with \
third parties beyond the identity provider operating this service.";

const TOS_TEXT: &str = "This service is provided as-is, without warranty of \
any kind. You are responsible for the credentials you register and for \
anything done under your session. Guest sessions are temporary; once logged \
out, a guest account and its data cannot be recovered.";

fn title_key(doc: LegalDoc) -> &'static str {
    match doc {
        LegalDoc::Privacy => "footer.privacy",
        LegalDoc::Tos => "footer.tos",
    }
}

fn body_text(doc: LegalDoc) -> &'static str {
    match doc {
        LegalDoc::Privacy => PRIVACY_TEXT,
        LegalDoc::Tos => TOS_TEXT,
    }
}

#[component]
pub fn LegalModal(doc: LegalDoc, on_close: Callback<()>) -> impl IntoView {
    let settings = expect_context::<RwSignal<SettingsState>>();
    let t = move |key: &'static str| i18n::translate(settings.get().lang, key);

    view! {
        <div class="modal-backdrop" role="dialog">
            <div class="modal">
                <div class="modal-header">
                    <h3>{move || t(title_key(doc))}</h3>
                    <button class="btn" on:click=move |_| on_close.run(())>"×"</button>
                </div>
                <div class="modal-body">
                    <p>{body_text(doc)}</p>
                </div>
                <div class="modal-actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        {move || t("btn.close")}
                    </button>
                </div>
            </div>
        </div>
    }
}
