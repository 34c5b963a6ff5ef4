use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdStar;
use dioxus_free_icons::Icon;
use shared_types::{AppError, FeatureFlags, ImprovementArea, SurveyResponse, RATING_MAX};
use shared_ui::{
    use_toast, Button, Card, CardContent, CardHeader, Field, Input, PageHeader, Textarea,
    ToastOptions,
};
use std::collections::HashMap;
use validator::Validate;

const COMMENTS_MAX: usize = 1000;

/// Validate a filled-in survey. On success returns the normalized response.
pub fn check_survey(response: SurveyResponse) -> Result<SurveyResponse, AppError> {
    let response = response.normalized();
    response.validate()?;
    Ok(response)
}

/// Add `area` when it is missing, drop it when present.
fn toggle_area(areas: &mut Vec<ImprovementArea>, area: ImprovementArea) {
    match areas.iter().position(|a| *a == area) {
        Some(i) => {
            areas.remove(i);
        }
        None => areas.push(area),
    }
}

/// Row of clickable stars. `value` of `None` shows all stars empty.
#[component]
fn RatingStars(id: String, value: Option<u8>, on_rate: EventHandler<u8>) -> Element {
    let current = value.unwrap_or(0);

    rsx! {
        div { id: "{id}", class: "rating-stars", role: "radiogroup",
            for star in 1..=RATING_MAX {
                button {
                    key: "{star}",
                    r#type: "button",
                    class: "rating-star",
                    "data-filled": if star <= current { "true" } else { "false" },
                    "aria-label": "{star} of {RATING_MAX}",
                    onclick: move |_| on_rate.call(star),
                    Icon::<LdStar> { icon: LdStar, width: 28, height: 28 }
                }
            }
        }
    }
}

/// Satisfaction survey for students.
#[component]
pub fn Survey() -> Element {
    let flags: FeatureFlags = use_context();
    let toast = use_toast();

    let mut overall = use_signal(|| Option::<u8>::None);
    let mut instructor = use_signal(|| Option::<u8>::None);
    let mut facility = use_signal(|| Option::<u8>::None);
    let mut recommend = use_signal(|| Option::<bool>::None);
    let mut improvements = use_signal(Vec::<ImprovementArea>::new);
    let mut comments = use_signal(String::new);
    let mut contact_info = use_signal(String::new);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut submitted = use_signal(|| false);

    if !flags.survey {
        return rsx! {
            PageHeader {
                title: "Survey unavailable",
                subtitle: "The survey is closed at the moment.".to_string(),
            }
        };
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let response = SurveyResponse {
            overall_satisfaction: overall(),
            instructor_rating: instructor(),
            facility_rating: facility(),
            recommend_to_others: recommend(),
            improvements: improvements(),
            comments: comments(),
            contact_info: Some(contact_info()),
        };

        match check_survey(response) {
            Ok(response) => {
                tracing::info!(
                    overall = response.overall_satisfaction.unwrap_or_default(),
                    recommend = response.recommend_to_others.unwrap_or_default(),
                    improvements = response.improvements.len(),
                    "survey submitted"
                );
                field_errors.set(HashMap::new());
                toast.success(
                    "Survey sent. Thank you for your time!".to_string(),
                    ToastOptions::new(),
                );
                submitted.set(true);
            }
            Err(err) => {
                toast.error(err.friendly_message(), ToastOptions::new());
                field_errors.set(err.field_errors);
            }
        }
    };

    let error_for = move |field: &str| field_errors.read().get(field).cloned();

    if submitted() {
        return rsx! {
            document::Link { rel: "stylesheet", href: asset!("./survey.css") }
            div { class: "survey-page",
                Card { class: "survey-done",
                    CardHeader { title: "Thank you!" }
                    CardContent {
                        p { "Your feedback helps us improve our lessons." }
                        Link { to: Route::Home {}, class: "button-link", "Back to home" }
                    }
                }
            }
        };
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./survey.css") }

        div { class: "survey-page",
            PageHeader {
                title: "Student satisfaction survey",
                subtitle: "Tell us how your lessons went.".to_string(),
            }

            Card {
                CardContent {
                    form { class: "survey-form", onsubmit: handle_submit,
                        Field { label: "Overall satisfaction", html_for: "overall_satisfaction", error: error_for("overall_satisfaction"),
                            RatingStars { id: "overall_satisfaction", value: overall(), on_rate: move |n| overall.set(Some(n)) }
                        }

                        Field { label: "Your instructor", html_for: "instructor_rating", error: error_for("instructor_rating"),
                            RatingStars { id: "instructor_rating", value: instructor(), on_rate: move |n| instructor.set(Some(n)) }
                        }

                        Field { label: "Facilities and vehicles", html_for: "facility_rating", error: error_for("facility_rating"),
                            RatingStars { id: "facility_rating", value: facility(), on_rate: move |n| facility.set(Some(n)) }
                        }

                        Field { label: "Would you recommend us to others?", html_for: "recommend_to_others", error: error_for("recommend_to_others"),
                            div { id: "recommend_to_others", class: "survey-choice-row",
                                label { class: "survey-choice",
                                    input {
                                        r#type: "radio",
                                        name: "recommend_to_others",
                                        checked: recommend() == Some(true),
                                        onchange: move |_| recommend.set(Some(true)),
                                    }
                                    "Yes"
                                }
                                label { class: "survey-choice",
                                    input {
                                        r#type: "radio",
                                        name: "recommend_to_others",
                                        checked: recommend() == Some(false),
                                        onchange: move |_| recommend.set(Some(false)),
                                    }
                                    "No"
                                }
                            }
                        }

                        Field { label: "What could we improve?", html_for: "improvements", hint: "Pick any that apply".to_string(),
                            div { id: "improvements", class: "survey-choice-column",
                                for area in ImprovementArea::ALL.iter().copied() {
                                    label { key: "{area.as_str()}", class: "survey-choice",
                                        input {
                                            r#type: "checkbox",
                                            value: area.as_str(),
                                            checked: improvements.read().contains(&area),
                                            onchange: move |_| toggle_area(&mut improvements.write(), area),
                                        }
                                        "{area.label()}"
                                    }
                                }
                            }
                        }

                        Field { label: "Comments and suggestions", html_for: "comments", error: error_for("comments"),
                            Textarea {
                                id: "comments",
                                value: comments(),
                                max_len: COMMENTS_MAX,
                                invalid: error_for("comments").is_some(),
                                on_input: move |e: FormEvent| comments.set(e.value()),
                            }
                        }

                        Field { label: "Contact details", html_for: "contact_info", hint: "Optional, if you would like a reply".to_string(),
                            Input {
                                id: "contact_info",
                                value: contact_info(),
                                on_input: move |e: FormEvent| contact_info.set(e.value()),
                            }
                        }

                        Button { button_type: "submit", "Send survey" }
                    }
                }
            }
        }
    }
}
