use std::time::Duration;

use leptos::{
    component, create_action, create_rw_signal, ev::SubmitEvent, event_target_value,
    leptos_dom::helpers::TimeoutHandle, on_cleanup, set_timeout_with_handle, store_value, view,
    IntoView, Show, SignalGet, SignalSet, SignalUpdate, SignalWith,
};
use shared::{
    model::ContactSubmission,
    store::{StoreClient, StoreError, Table},
};
use tracing::error;

/// How long the success and error banners stay up before the form goes
/// back to idle.
pub const STATUS_REVERT_DELAY: Duration = Duration::from_secs(5);

/// Submission lifecycle of the lead-capture form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmitStatus {
    pub fn is_submitting(self) -> bool {
        matches!(self, SubmitStatus::Submitting)
    }
}

fn status_after_insert(outcome: &Result<(), StoreError>) -> SubmitStatus {
    match outcome {
        Ok(()) => SubmitStatus::Success,
        Err(_) => SubmitStatus::Error,
    }
}

/// A successful insert hands the draft to the store and the form starts
/// over empty; a failed one keeps the visitor's text so they can retry by
/// hand.
fn draft_after_insert(
    outcome: &Result<(), StoreError>,
    draft: ContactSubmission,
) -> ContactSubmission {
    match outcome {
        Ok(()) => ContactSubmission::default(),
        Err(_) => draft,
    }
}

/// Banner states collapse back to idle when the revert timer fires; the
/// other states are left alone.
fn status_after_revert(status: SubmitStatus) -> SubmitStatus {
    match status {
        SubmitStatus::Success | SubmitStatus::Error => SubmitStatus::Idle,
        other => other,
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let draft = create_rw_signal(ContactSubmission::default());
    let status = create_rw_signal(SubmitStatus::default());

    // The banner revert timer is scoped to this form: re-submitting clears
    // a pending revert and unmounting cancels it outright.
    let revert_timer = store_value(None::<TimeoutHandle>);
    let clear_revert = move || {
        if let Some(handle) = revert_timer.get_value() {
            handle.clear();
        }
    };
    let schedule_revert = move || {
        clear_revert();
        let revert = move || status.update(|s| *s = status_after_revert(*s));
        match set_timeout_with_handle(revert, STATUS_REVERT_DELAY) {
            Ok(handle) => revert_timer.set_value(Some(handle)),
            Err(err) => error!("Failed to schedule status revert: {err:?}"),
        }
    };
    on_cleanup(clear_revert);

    let store = StoreClient::use_client();
    let submit = create_action(move |submission: &ContactSubmission| {
        let store = store.clone();
        let submission = submission.clone();
        async move {
            status.set(SubmitStatus::Submitting);

            let outcome = store.insert(Table::ContactSubmissions, &submission).await;
            if let Err(err) = &outcome {
                error!("Error submitting contact form: {err}");
            }

            status.set(status_after_insert(&outcome));
            draft.update(|d| *d = draft_after_insert(&outcome, std::mem::take(d)));
            schedule_revert();
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if status.get().is_submitting() {
            return;
        }
        submit.dispatch(draft.get());
    };

    view! {
        <section id="contact" class="py-20 bg-gradient-to-br from-primary-600 to-primary-800">
            <div class="container mx-auto px-4">
                <div class="max-w-4xl mx-auto">
                    <div class="text-center mb-12">
                        <h2 class="text-4xl md:text-5xl font-bold text-white mb-4">
                            "Start Your Transformation Today"
                        </h2>
                        <p class="text-xl text-primary-100">
                            "Get a free consultation and personalized fitness plan"
                        </p>
                    </div>

                    <div class="bg-white rounded-2xl shadow-2xl p-8 md:p-12">
                        <form class="space-y-6" on:submit=on_submit>
                            <div class="grid md:grid-cols-2 gap-6">
                                <div>
                                    <label for="name" class="block text-sm font-semibold text-gray-700 mb-2">
                                        "Full Name *"
                                    </label>
                                    <input
                                        type="text"
                                        id="name"
                                        required
                                        placeholder="John Doe"
                                        class="w-full px-4 py-3 border border-gray-300 rounded-lg"
                                        prop:value=move || draft.with(|d| d.name.clone())
                                        on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                                    />
                                </div>

                                <div>
                                    <label for="email" class="block text-sm font-semibold text-gray-700 mb-2">
                                        "Email Address *"
                                    </label>
                                    <input
                                        type="email"
                                        id="email"
                                        required
                                        placeholder="john@example.com"
                                        class="w-full px-4 py-3 border border-gray-300 rounded-lg"
                                        prop:value=move || draft.with(|d| d.email.clone())
                                        on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                                    />
                                </div>
                            </div>

                            <div class="grid md:grid-cols-2 gap-6">
                                <div>
                                    <label for="phone" class="block text-sm font-semibold text-gray-700 mb-2">
                                        "Phone Number"
                                    </label>
                                    <input
                                        type="tel"
                                        id="phone"
                                        placeholder="+1 (555) 123-4567"
                                        class="w-full px-4 py-3 border border-gray-300 rounded-lg"
                                        prop:value=move || draft.with(|d| d.phone.clone())
                                        on:input=move |ev| draft.update(|d| d.phone = event_target_value(&ev))
                                    />
                                </div>

                                <div>
                                    <label for="program" class="block text-sm font-semibold text-gray-700 mb-2">
                                        "Preferred Program"
                                    </label>
                                    <select
                                        id="program"
                                        class="w-full px-4 py-3 border border-gray-300 rounded-lg"
                                        prop:value=move || draft.with(|d| d.preferred_program.clone())
                                        on:change=move |ev| draft.update(|d| d.preferred_program = event_target_value(&ev))
                                    >
                                        <option value="">"Select a program"</option>
                                        <option value="transformation">"Body Transformation"</option>
                                        <option value="weight_loss">"Weight Loss"</option>
                                        <option value="muscle_gain">"Muscle Building"</option>
                                        <option value="home_training">"Home Workout"</option>
                                    </select>
                                </div>
                            </div>

                            <div>
                                <label for="message" class="block text-sm font-semibold text-gray-700 mb-2">
                                    "Tell us about your goals *"
                                </label>
                                <textarea
                                    id="message"
                                    required
                                    rows=5
                                    placeholder="Tell us about your fitness goals, current fitness level, and any specific requirements..."
                                    class="w-full px-4 py-3 border border-gray-300 rounded-lg resize-none"
                                    prop:value=move || draft.with(|d| d.message.clone())
                                    on:input=move |ev| draft.update(|d| d.message = event_target_value(&ev))
                                ></textarea>
                            </div>

                            <Show when=move || status.get() == SubmitStatus::Success>
                                <div class="bg-green-50 border border-green-200 text-green-800 px-4 py-3 rounded-lg">
                                    "Thank you! We'll get back to you within 24 hours."
                                </div>
                            </Show>

                            <Show when=move || status.get() == SubmitStatus::Error>
                                <div class="bg-red-50 border border-red-200 text-red-800 px-4 py-3 rounded-lg">
                                    "Something went wrong. Please try again."
                                </div>
                            </Show>

                            <button
                                type="submit"
                                class="w-full bg-primary-600 hover:bg-primary-700 text-white font-bold py-4 px-8 rounded-lg disabled:opacity-50 disabled:cursor-not-allowed"
                                prop:disabled=move || status.get().is_submitting()
                            >
                                { move || if status.get().is_submitting() {
                                    "Sending..."
                                } else {
                                    "Get Free Consultation"
                                } }
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod test {
    use shared::{model::ContactSubmission, store::StoreError};

    use super::{
        draft_after_insert, status_after_insert, status_after_revert, SubmitStatus,
        STATUS_REVERT_DELAY,
    };

    fn filled_draft() -> ContactSubmission {
        ContactSubmission {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            phone: String::new(),
            message: "hi".to_string(),
            preferred_program: String::new(),
        }
    }

    #[test]
    fn test_form_starts_idle_with_an_empty_draft() {
        assert_eq!(SubmitStatus::default(), SubmitStatus::Idle);
        assert_eq!(ContactSubmission::default(), ContactSubmission {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            message: String::new(),
            preferred_program: String::new(),
        });
    }

    #[test]
    fn test_successful_insert_moves_to_success() {
        assert_eq!(status_after_insert(&Ok(())), SubmitStatus::Success);
    }

    #[test]
    fn test_successful_insert_resets_the_draft_to_empty() {
        let draft = draft_after_insert(&Ok(()), filled_draft());
        assert_eq!(draft, ContactSubmission::default());
    }

    #[test]
    fn test_failed_insert_preserves_the_draft_for_retry() {
        let outcome = Err(StoreError::Response {
            status: 500,
            message: "boom".to_string(),
        });
        let draft = draft_after_insert(&outcome, filled_draft());
        assert_eq!(draft, filled_draft());
    }

    #[test]
    fn test_failed_insert_moves_to_error() {
        let outcome = Err(StoreError::Response {
            status: 500,
            message: "boom".to_string(),
        });
        assert_eq!(status_after_insert(&outcome), SubmitStatus::Error);
    }

    #[test]
    fn test_only_submitting_disables_the_button() {
        assert!(SubmitStatus::Submitting.is_submitting());
        for status in [SubmitStatus::Idle, SubmitStatus::Success, SubmitStatus::Error] {
            assert!(!status.is_submitting());
        }
    }

    #[test]
    fn test_banners_revert_after_five_seconds() {
        assert_eq!(STATUS_REVERT_DELAY.as_secs(), 5);
    }

    #[test]
    fn test_revert_returns_both_banners_to_idle() {
        assert_eq!(status_after_revert(SubmitStatus::Success), SubmitStatus::Idle);
        assert_eq!(status_after_revert(SubmitStatus::Error), SubmitStatus::Idle);
    }

    #[test]
    fn test_revert_leaves_non_banner_states_alone() {
        assert_eq!(status_after_revert(SubmitStatus::Idle), SubmitStatus::Idle);
        assert_eq!(
            status_after_revert(SubmitStatus::Submitting),
            SubmitStatus::Submitting
        );
    }
}
