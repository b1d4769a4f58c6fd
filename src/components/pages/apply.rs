//! Apply-online page: the student application form.
//!
//! Submission is simulated (see [`crate::core::submit`]); the page holds
//! the form model, the submit lifecycle, and the success card.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen::JsCast;

use crate::components::icons as ic;
use crate::config::{
    CONTACT_EMAIL, CONTACT_PHONES, ENGLISH_TEST_OPTIONS, PASSPORT_OPTIONS,
    STUDY_DESTINATION_OPTIONS, STUDY_LEVELS,
};
use crate::core::submit::submit_application;
use crate::models::{ApplicationForm, SubmitStatus};

stylance::import_crate_style!(css, "src/components/pages/apply.module.css");

/// Apply-online page.
#[component]
pub fn ApplyPage() -> impl IntoView {
    let form = RwSignal::new(ApplicationForm::default());
    let status = RwSignal::new(SubmitStatus::Idle);
    let error = RwSignal::new(None::<String>);

    let reset = Callback::new(move |_: ()| {
        form.set(ApplicationForm::default());
        error.set(None);
        status.set(SubmitStatus::Idle);
    });

    view! {
        <div class=css::page>
            <div class=css::container>
                {move || {
                    if status.get() == SubmitStatus::Submitted {
                        view! { <SuccessCard on_reset=reset /> }.into_any()
                    } else {
                        view! { <FormCard form=form status=status error=error /> }.into_any()
                    }
                }}
            </div>
        </div>
    }
}

/// Confirmation card shown after a successful submission.
#[component]
fn SuccessCard(on_reset: Callback<()>) -> impl IntoView {
    view! {
        <div class=css::successWrap>
            <div class=css::successCard>
                <span class=css::successIcon>
                    <Icon icon=ic::CHECK_CIRCLE />
                </span>
                <h2 class=css::successTitle>"Application Submitted!"</h2>
                <p class=css::successText>
                    "Thank you for your application. Our counselors will contact you within \
                     24 hours to discuss your study abroad journey."
                </p>
                <button class=css::resetButton on:click=move |_| on_reset.run(())>
                    "Submit Another Application"
                </button>
            </div>
        </div>
    }
}

/// Header, form sections, and submit flow.
#[component]
fn FormCard(
    form: RwSignal<ApplicationForm>,
    status: RwSignal<SubmitStatus>,
    error: RwSignal<Option<String>>,
) -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        status.set(SubmitStatus::Submitting);
        error.set(None);

        leptos::task::spawn_local(async move {
            let data = form.get_untracked();
            match submit_application(&data).await {
                Ok(()) => status.set(SubmitStatus::Submitted),
                Err(e) => {
                    error.set(Some(e.to_string()));
                    status.set(SubmitStatus::Idle);
                }
            }
        });
    };

    let is_submitting = move || status.get() == SubmitStatus::Submitting;

    view! {
        <header class=css::header>
            <h1 class=css::headerTitle>"Apply Online"</h1>
            <p class=css::headerLead>
                "Take the first step towards your international education journey. \
                 Fill out this form and our expert counselors will guide you through \
                 the process."
            </p>
        </header>

        <div class=css::card>
            <div class=css::cardBanner>
                <span class=css::cardBannerIcon>
                    <Icon icon=ic::FILE_TEXT />
                </span>
                <div>
                    <h2 class=css::cardBannerTitle>"Student Application Form"</h2>
                    <p class=css::cardBannerSub>"Complete all required fields"</p>
                </div>
            </div>

            <form class=css::form on:submit=on_submit>
                <section class=css::section>
                    <h3 class=css::sectionTitle>
                        <span class=css::sectionIcon>
                            <Icon icon=ic::USER />
                        </span>
                        "Personal Information"
                    </h3>

                    <div class=css::fieldGrid>
                        <TextField
                            label="Full Name"
                            value=Signal::derive(move || form.with(|f| f.full_name.clone()))
                            on_input=Callback::new(move |v| form.update(|f| f.full_name = v))
                        />
                        <TextField
                            label="Phone Number"
                            input_type="tel"
                            placeholder="Include country code"
                            value=Signal::derive(move || form.with(|f| f.phone_number.clone()))
                            on_input=Callback::new(move |v| form.update(|f| f.phone_number = v))
                        />
                        <TextField
                            label="Email Address"
                            input_type="email"
                            value=Signal::derive(move || form.with(|f| f.email.clone()))
                            on_input=Callback::new(move |v| form.update(|f| f.email = v))
                        />
                        <TextField
                            label="Current Address (City/District)"
                            value=Signal::derive(move || form.with(|f| f.current_address.clone()))
                            on_input=Callback::new(move |v| {
                                form.update(|f| f.current_address = v)
                            })
                        />
                    </div>

                    <TextField
                        label="Highest Academic Qualification"
                        placeholder="e.g., \"+2 Science - GPA 3.1\" / \"Bachelor's in BBA - 60%\""
                        value=Signal::derive(move || {
                            form.with(|f| f.academic_qualification.clone())
                        })
                        on_input=Callback::new(move |v| {
                            form.update(|f| f.academic_qualification = v)
                        })
                    />
                </section>

                <section class=css::section>
                    <h3 class=css::sectionTitle>
                        <span class=css::sectionIcon>
                            <Icon icon=ic::GLOBE />
                        </span>
                        "Study Preferences"
                    </h3>

                    <div class=css::field>
                        <span class=css::label>"Preferred Study Destination(s) *"</span>
                        <div class=css::checkboxGrid>
                            {STUDY_DESTINATION_OPTIONS
                                .iter()
                                .map(|option| {
                                    let option = *option;
                                    view! {
                                        <label class=css::checkbox>
                                            <input
                                                type="checkbox"
                                                prop:checked=move || {
                                                    form.with(|f| {
                                                        f.study_destinations
                                                            .iter()
                                                            .any(|d| d == option)
                                                    })
                                                }
                                                on:change=move |_| {
                                                    form.update(|f| f.toggle_destination(option))
                                                }
                                            />
                                            <span>{option}</span>
                                        </label>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <SelectField
                        label="Preferred Level of Study"
                        prompt="Select level"
                        options=STUDY_LEVELS
                        value=Signal::derive(move || form.with(|f| f.study_level.clone()))
                        on_change=Callback::new(move |v| form.update(|f| f.study_level = v))
                    />
                </section>

                <section class=css::section>
                    <h3 class=css::sectionTitle>
                        <span class=css::sectionIcon>
                            <Icon icon=ic::GRADUATION_CAP />
                        </span>
                        "Test & Documentation"
                    </h3>

                    <SelectField
                        label="Have you taken any English proficiency tests?"
                        prompt="Select option"
                        options=ENGLISH_TEST_OPTIONS
                        value=Signal::derive(move || form.with(|f| f.english_test.clone()))
                        on_change=Callback::new(move |v| form.update(|f| f.english_test = v))
                    />

                    <SelectField
                        label="Do you have a valid passport?"
                        prompt="Select option"
                        options=PASSPORT_OPTIONS
                        value=Signal::derive(move || form.with(|f| f.has_passport.clone()))
                        on_change=Callback::new(move |v| form.update(|f| f.has_passport = v))
                    />

                    <div class=css::field>
                        <label class=css::label>"Why do you want to study abroad?"</label>
                        <textarea
                            class=css::textarea
                            rows=4
                            placeholder="Brief reason to understand goals/motivation"
                            prop:value=move || form.with(|f| f.study_abroad.clone())
                            on:input=move |ev| {
                                let Some(target) = ev.target() else { return };
                                let area =
                                    target.unchecked_into::<web_sys::HtmlTextAreaElement>();
                                form.update(|f| f.study_abroad = area.value());
                            }
                        ></textarea>
                    </div>
                </section>

                {move || {
                    error.get().map(|msg| view! { <p class=css::errorText>{msg}</p> })
                }}

                <button class=css::submitButton type="submit" disabled=is_submitting>
                    {move || {
                        if is_submitting() {
                            view! {
                                <span class=css::spinner></span>
                                "Submitting Application..."
                            }
                            .into_any()
                        } else {
                            view! {
                                <Icon icon=ic::SEND />
                                "Submit Application"
                            }
                            .into_any()
                        }
                    }}
                </button>
            </form>
        </div>

        <aside class=css::helpBand>
            <h3 class=css::helpTitle>"Need Help with Your Application?"</h3>
            <p class=css::helpLead>
                "Our expert counselors are here to assist you every step of the way."
            </p>
            <div class=css::helpActions>
                <a class=css::helpPrimary href=format!("tel:{}", CONTACT_PHONES[0])>
                    {format!("\u{1F4DE} Call: {}", CONTACT_PHONES[0])}
                </a>
                <a class=css::helpSecondary href=format!("mailto:{}", CONTACT_EMAIL)>
                    "\u{2709} Email Us"
                </a>
            </div>
        </aside>
    }
}

/// Required single-line input bound to one form field.
#[component]
fn TextField(
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = "")] placeholder: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    let handle = move |ev: leptos::ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        on_input.run(input.value());
    };

    view! {
        <div class=css::field>
            <label class=css::label>{label} " *"</label>
            <input
                class=css::input
                type=input_type
                placeholder=placeholder
                prop:value=value
                on:input=handle
                required
            />
        </div>
    }
}

/// Required select bound to one form field, with a disabled prompt row.
#[component]
fn SelectField(
    label: &'static str,
    prompt: &'static str,
    options: &'static [&'static str],
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    let handle = move |ev: leptos::ev::Event| {
        let Some(target) = ev.target() else { return };
        let select = target.unchecked_into::<web_sys::HtmlSelectElement>();
        on_change.run(select.value());
    };

    view! {
        <div class=css::field>
            <label class=css::label>{label} " *"</label>
            <select class=css::select prop:value=value on:change=handle required>
                <option value="" disabled>{prompt}</option>
                {options
                    .iter()
                    .map(|option| view! { <option value=*option>{*option}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}
