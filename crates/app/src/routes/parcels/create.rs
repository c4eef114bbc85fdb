use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdPackage;
use dioxus_free_icons::Icon;
use shared_types::DraftField;
use shared_ui::components::{
    Button, Card, CardContent, CardNotice, CardNoticeTone, CardTitle, Form, Input, PageHeader,
    PageTitle, Textarea,
};

use super::form_state::{ParcelFormState, SUBMIT_SUCCESS_MESSAGE};
use super::gateway::{ParcelGateway, ServerFnGateway};

#[component]
pub fn ParcelCreatePage() -> Element {
    let mut form = use_signal(ParcelFormState::default);

    let handle_submit = move |_evt: FormEvent| {
        let Some(request) = form.write().begin_submission() else {
            return;
        };

        spawn(async move {
            let outcome = ServerFnGateway.create_parcel(request).await;
            form.write().finish_submission(outcome);
        });
    };

    let state = form.read().clone();
    let disabled = state.submit_disabled();
    let submit_label = state.submit_label();

    rsx! {
        div { class: "container parcel-create",
            PageHeader {
                Icon::<LdPackage> { icon: LdPackage, width: 24, height: 24 }
                PageTitle { "Create New Shipment" }
            }

            Card {
                CardContent {
                    if state.success {
                        CardNotice { tone: CardNoticeTone::Success,
                            "{SUBMIT_SUCCESS_MESSAGE}"
                            if let Some(tracking) = &state.tracking_number {
                                " Tracking number: "
                                strong { "{tracking}" }
                            }
                        }
                    }
                    if let Some(err) = &state.error {
                        CardNotice { tone: CardNoticeTone::Error, "{err}" }
                    }

                    Form { onsubmit: handle_submit, busy: disabled,
                        div { class: "form-section",
                            CardTitle { "Sender Information" }
                            for field in DraftField::SENDER {
                                DraftInput { key: "{field}", form, field, disabled }
                            }
                        }

                        div { class: "form-section",
                            CardTitle { "Recipient Information" }
                            for field in DraftField::RECIPIENT {
                                DraftInput { key: "{field}", form, field, disabled }
                            }
                        }

                        div { class: "form-section",
                            CardTitle { "Parcel Information" }
                            DraftInput { form, field: DraftField::Weight, disabled }
                            Textarea {
                                name: DraftField::Description.name().to_string(),
                                placeholder: DraftField::Description.placeholder().to_string(),
                                value: state.draft.description.clone(),
                                disabled,
                                required: true,
                                on_input: move |evt: FormEvent| {
                                    form.write().set_field(DraftField::Description, evt.value());
                                },
                            }
                        }

                        div { class: "form-actions",
                            Button { button_type: "submit".to_string(), disabled,
                                "{submit_label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// One required input bound to a draft field.
#[component]
fn DraftInput(form: Signal<ParcelFormState>, field: DraftField, disabled: bool) -> Element {
    let value = form.read().draft.get(field).to_string();
    let (min, step) = match field {
        DraftField::Weight => (Some("0.1".to_string()), Some("0.1".to_string())),
        _ => (None, None),
    };

    rsx! {
        div { class: "form-group",
            Input {
                name: field.name().to_string(),
                input_type: field.input_type().to_string(),
                placeholder: field.placeholder().to_string(),
                value,
                disabled,
                required: true,
                min,
                step,
                on_input: move |evt: FormEvent| {
                    let mut form = form;
                    form.write().set_field(field, evt.value());
                },
            }
        }
    }
}
