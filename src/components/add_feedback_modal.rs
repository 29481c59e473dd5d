//! Add Feedback Modal Component
//!
//! Modal form for creating a feedback item. Mounted only while the dialog
//! is open, so the fields start blank every time.

use gloo_timers::callback::Timeout;
use leptos::ev;
use leptos::html;
use leptos::prelude::*;

use crate::context::use_board;

#[component]
pub fn AddFeedbackModal() -> impl IntoView {
    let ctx = use_board();

    view! {
        <Show when=move || ctx.dialog.with(|d| d.is_open())>
            <FeedbackForm />
        </Show>
    }
}

/// Backdrop, panel and form. Escape or a backdrop click cancels.
#[component]
fn FeedbackForm() -> impl IntoView {
    let ctx = use_board();
    let title_ref = NodeRef::<html::Input>::new();

    // Focus the title once the panel is in the DOM
    Effect::new(move |_| {
        if let Some(input) = title_ref.get() {
            Timeout::new(0, move || {
                if let Err(e) = input.focus() {
                    log::debug!("Could not focus feedback title: {:?}", e);
                }
            })
            .forget();
        }
    });

    let title = move || ctx.dialog.with(|d| d.form().map(|f| f.draft.title.clone()).unwrap_or_default());
    let description = move || ctx.dialog.with(|d| d.form().map(|f| f.draft.description.clone()).unwrap_or_default());
    let error = move || ctx.dialog.with(|d| d.error().map(str::to_string));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit_dialog();
    };

    // Listen on the window so Escape works wherever focus is
    let keydown = window_event_listener(ev::keydown, move |ev| {
        if ctx.dismiss_dialog_on_key(&ev.key()) {
            ev.prevent_default();
        }
    });
    on_cleanup(move || keydown.remove());

    view! {
        <div class="modal-root" role="dialog" aria-modal="true" aria-labelledby="add-feedback-title">
            <div class="modal-overlay" aria-hidden="true" on:click=move |_| ctx.cancel_dialog()></div>
            <div class="modal-panel">
                <h2 id="add-feedback-title" class="modal-title">"Add Feedback"</h2>
                <form class="feedback-form" on:submit=on_submit>
                    <div class="form-field">
                        <label class="form-label" for="feedback-title">"Title"</label>
                        <input
                            id="feedback-title"
                            class="form-input"
                            type="text"
                            node_ref=title_ref
                            maxlength=ctx.limits.title_max.to_string()
                            placeholder="Short summary"
                            prop:value=title
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                ctx.dialog.update(|d| d.set_title(value));
                            }
                        />
                    </div>
                    <div class="form-field">
                        <label class="form-label" for="feedback-description">"Description"</label>
                        <textarea
                            id="feedback-description"
                            class="form-input form-textarea"
                            maxlength=ctx.limits.description_max.to_string()
                            placeholder="Describe your idea (optional)"
                            prop:value=description
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                ctx.dialog.update(|d| d.set_description(value));
                            }
                        ></textarea>
                    </div>
                    {move || error().map(|msg| view! { <div class="form-error">{msg}</div> })}
                    <div class="form-actions">
                        <button type="button" class="cancel-btn" on:click=move |_| ctx.cancel_dialog()>
                            "Cancel"
                        </button>
                        <button type="submit" class="accent-btn">"Submit"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
