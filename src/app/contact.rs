//! Contact section: info cards, social links, the relay-backed form, and the
//! page footer.
//!
//! Submission is a small state machine kept separate from the view so the
//! transition rules are natively testable. The wire contract is a URL-encoded
//! POST to the configured relay endpoint; any 2xx is success, everything else
//! (including transport failure) lands in `Failed` with the draft preserved.

use leptos::task::spawn_local;
use leptos::{html, prelude::*};
use thiserror::Error;
use web_sys::Element;

use crate::config::ContactRelay;

use super::content::{CONTACT_INFO, SOCIAL_LINKS};
use super::hooks::use_visible_once;
use super::motion::{hover_target, use_motion, Intent, SlideFrom, Timeline};

const HOVER_READY_MS: u64 = 1600;

/// How long the success banner stays up before the empty form returns.
const BANNER_MS: f64 = 5000.0;

const FAILURE_MESSAGE: &str =
    "Failed to send message. Please try again or contact directly via email.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("relay returned status {0}")]
    Status(u16),
    #[error("transport error: {0}")]
    Transport(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Submit,
    Delivered,
    Rejected(SubmitError),
    BannerExpired,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Submitted,
    Failed(String),
}

impl SubmitPhase {
    /// Submission is user-initiated and unlimited; the only gate is one
    /// in-flight request at a time.
    pub fn can_submit(&self) -> bool {
        matches!(self, SubmitPhase::Idle | SubmitPhase::Failed(_))
    }

    /// Pure transition function. Events that make no sense in the current
    /// phase leave it unchanged.
    pub fn advance(self, event: FormEvent) -> SubmitPhase {
        match (self, event) {
            (phase, FormEvent::Submit) if phase.can_submit() => SubmitPhase::Submitting,
            (SubmitPhase::Submitting, FormEvent::Delivered) => SubmitPhase::Submitted,
            (SubmitPhase::Submitting, FormEvent::Rejected(_)) => {
                SubmitPhase::Failed(FAILURE_MESSAGE.to_string())
            }
            (SubmitPhase::Submitted, FormEvent::BannerExpired) => SubmitPhase::Idle,
            (phase, _) => phase,
        }
    }
}

/// Maps a request outcome to the machine event it drives.
pub fn outcome(result: Result<u16, String>) -> FormEvent {
    match result {
        Ok(status) if (200..300).contains(&status) => FormEvent::Delivered,
        Ok(status) => FormEvent::Rejected(SubmitError::Status(status)),
        Err(message) => FormEvent::Rejected(SubmitError::Transport(message)),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Draft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl Draft {
    pub fn clear(&mut self) {
        *self = Draft::default();
    }
}

/// URL-encoded body for the relay: the draft fields plus the relay's control
/// fields (subject line, table template, autoresponse text, disabled captcha,
/// and an empty honeypot).
pub fn encode_form(draft: &Draft, relay: &ContactRelay) -> String {
    let fields: &[(&str, &str)] = &[
        ("name", &draft.name),
        ("email", &draft.email),
        ("subject", &draft.subject),
        ("message", &draft.message),
        ("_subject", &relay.subject),
        ("_template", "table"),
        ("_autoresponse", &relay.autoresponse),
        ("_captcha", "false"),
        ("_honey", ""),
    ];
    fields
        .iter()
        .map(|(name, value)| format!("{name}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

async fn send_to_relay(endpoint: &str, body: String) -> Result<u16, String> {
    let request = gloo_net::http::Request::post(endpoint)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .header("Accept", "application/json")
        .body(body)
        .map_err(|e| e.to_string())?;
    let response = request.send().await.map_err(|e| e.to_string())?;
    Ok(response.status())
}

#[component]
pub fn Contact() -> impl IntoView {
    let motion = use_motion();
    let section_ref = NodeRef::<html::Section>::new();
    let title_ref = NodeRef::<html::H2>::new();
    let underline_ref = NodeRef::<html::Div>::new();
    let info_ref = NodeRef::<html::Div>::new();
    let form_ref = NodeRef::<html::Div>::new();
    let socials_ref = NodeRef::<html::Div>::new();

    let visible = use_visible_once(section_ref);
    let (hover_ready, set_hover_ready) = signal(false);

    let relay = StoredValue::new(ContactRelay::default());
    let draft = RwSignal::new(Draft::default());
    let (phase, set_phase) = signal(SubmitPhase::Idle);
    let banner_timer = StoredValue::new(None::<TimeoutHandle>);

    Effect::new(move |_| {
        if !visible.get() {
            return;
        }

        let mut timeline = Timeline::new();
        if let Some(el) = title_ref.get_untracked() {
            timeline = timeline.play_chars(
                0,
                Element::from(el),
                Intent::CharRise {
                    rise_pct: 110.0,
                    duration_ms: 600.0,
                    delay_ms: 0.0,
                },
                30.0,
            );
        }
        if let Some(el) = underline_ref.get_untracked() {
            timeline = timeline.play(
                300,
                Element::from(el),
                Intent::GrowX {
                    duration_ms: 600.0,
                    delay_ms: 0.0,
                },
            );
        }
        // progressive reveal, alternating slide direction by element index
        let columns = [
            info_ref.get_untracked().map(Element::from),
            form_ref.get_untracked().map(Element::from),
            socials_ref.get_untracked().map(Element::from),
        ];
        for (index, column) in columns.into_iter().enumerate() {
            if let Some(el) = column {
                timeline = timeline.play(
                    300 + index as u32 * 200,
                    el,
                    Intent::EntranceSlide {
                        from: SlideFrom::for_index(index),
                        distance_px: 80.0,
                        duration_ms: 800.0,
                        delay_ms: 0.0,
                    },
                );
            }
        }
        motion.run(timeline);
        motion.defer(HOVER_READY_MS, move || set_hover_ready.set(true));
    });

    on_cleanup(move || {
        if let Some(timer) = banner_timer.get_value() {
            timer.clear();
        }
    });

    let lift = move |ev: leptos::ev::MouseEvent| {
        if !hover_ready.get_untracked() {
            return;
        }
        if let Some(el) = hover_target(&ev) {
            motion.play(
                &el,
                Intent::HoverLift {
                    scale: 1.05,
                    lift_px: 3.0,
                    duration_ms: 300.0,
                },
            );
        }
    };
    let settle = move |ev: leptos::ev::MouseEvent| {
        if !hover_ready.get_untracked() {
            return;
        }
        if let Some(el) = hover_target(&ev) {
            motion.play(&el, Intent::HoverSettle { duration_ms: 300.0 });
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !phase.get_untracked().can_submit() {
            return;
        }
        set_phase.update(|p| *p = p.clone().advance(FormEvent::Submit));

        let body = relay.with_value(|relay| encode_form(&draft.get_untracked(), relay));
        let endpoint = relay.with_value(|relay| relay.endpoint.clone());
        spawn_local(async move {
            let result = send_to_relay(&endpoint, body).await;
            let event = outcome(result);
            if let FormEvent::Rejected(err) = &event {
                log::warn!("contact form submission failed: {err}");
            }
            let delivered = event == FormEvent::Delivered;
            set_phase.update(|p| *p = p.clone().advance(event));
            if delivered {
                draft.update(|d| d.clear());
                let timer = set_timeout_with_handle(
                    move || {
                        set_phase.update(|p| *p = p.clone().advance(FormEvent::BannerExpired));
                    },
                    std::time::Duration::from_millis(BANNER_MS as u64),
                );
                if let Ok(timer) = timer {
                    banner_timer.set_value(Some(timer));
                }
            }
        });
    };

    view! {
        <section
            id="contact"
            node_ref=section_ref
            class="py-20 bg-gradient-to-b from-gray-950 to-black relative overflow-hidden"
        >
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2
                        node_ref=title_ref
                        class="inline-block overflow-hidden text-4xl md:text-6xl font-bold text-white mb-6"
                    >
                        "Get In Touch"
                    </h2>
                    <div
                        node_ref=underline_ref
                        class="w-24 h-1 bg-gradient-to-r from-cyan-400 to-purple-400 mx-auto"
                    ></div>
                </div>

                <div class="grid lg:grid-cols-2 gap-16">
                    <div node_ref=info_ref class="space-y-6">
                        <h3 class="text-2xl font-bold text-white">"Let's create together"</h3>
                        <p class="text-gray-400">
                            "Whether it's an AMV commission, a music remix, or a web \
                             project, I'd love to hear about it."
                        </p>
                        {CONTACT_INFO
                            .iter()
                            .map(|info| {
                                view! {
                                    <a
                                        href=info.href
                                        class="flex items-center gap-4 p-4 rounded-xl bg-white/5 border border-white/10"
                                        on:mouseenter=lift
                                        on:mouseleave=settle
                                    >
                                        <span class=format!(
                                            "w-10 h-10 rounded-full bg-gradient-to-br {} shrink-0",
                                            info.color,
                                        )></span>
                                        <span>
                                            <span class="block text-gray-500 text-xs">{info.label}</span>
                                            <span class="block text-gray-200">{info.value}</span>
                                        </span>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div node_ref=form_ref>
                        {move || {
                            let banner = match phase.get() {
                                SubmitPhase::Submitted => Some((
                                    "mb-6 p-4 rounded-xl bg-green-500/10 border border-green-500/30 text-green-400",
                                    "Message sent! I'll get back to you within 24 hours.".to_string(),
                                )),
                                SubmitPhase::Failed(message) => Some((
                                    "mb-6 p-4 rounded-xl bg-red-500/10 border border-red-500/30 text-red-400",
                                    message,
                                )),
                                _ => None,
                            };
                            banner.map(|(class, text)| view! { <div class=class>{text}</div> })
                        }}

                        <form class="space-y-4" on:submit=on_submit>
                            <div class="grid sm:grid-cols-2 gap-4">
                                <input
                                    type="text"
                                    required
                                    placeholder="Your name"
                                    class="w-full px-4 py-3 rounded-lg bg-gray-900 border border-gray-800 text-gray-200 focus:outline-none focus:border-cyan-500"
                                    prop:value=move || draft.with(|d| d.name.clone())
                                    on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                                />
                                <input
                                    type="email"
                                    required
                                    placeholder="Your email"
                                    class="w-full px-4 py-3 rounded-lg bg-gray-900 border border-gray-800 text-gray-200 focus:outline-none focus:border-cyan-500"
                                    prop:value=move || draft.with(|d| d.email.clone())
                                    on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                                />
                            </div>
                            <input
                                type="text"
                                required
                                placeholder="Subject"
                                class="w-full px-4 py-3 rounded-lg bg-gray-900 border border-gray-800 text-gray-200 focus:outline-none focus:border-cyan-500"
                                prop:value=move || draft.with(|d| d.subject.clone())
                                on:input=move |ev| draft.update(|d| d.subject = event_target_value(&ev))
                            />
                            <textarea
                                required
                                rows="5"
                                placeholder="Your message"
                                class="w-full px-4 py-3 rounded-lg bg-gray-900 border border-gray-800 text-gray-200 focus:outline-none focus:border-cyan-500"
                                prop:value=move || draft.with(|d| d.message.clone())
                                on:input=move |ev| draft.update(|d| d.message = event_target_value(&ev))
                            ></textarea>
                            <button
                                type="submit"
                                class="w-full px-8 py-3 rounded-lg bg-gradient-to-r from-cyan-500 to-purple-500 text-white font-semibold disabled:opacity-50 disabled:cursor-not-allowed"
                                disabled=move || phase.with(|p| *p == SubmitPhase::Submitting)
                                on:mouseenter=lift
                                on:mouseleave=settle
                            >
                                {move || {
                                    if phase.with(|p| *p == SubmitPhase::Submitting) {
                                        "Sending..."
                                    } else {
                                        "Send Message"
                                    }
                                }}
                            </button>
                        </form>
                    </div>
                </div>

                <div node_ref=socials_ref class="flex justify-center gap-6 mt-16">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=link.label
                                    class=format!(
                                        "text-2xl text-gray-500 transition-colors {}",
                                        link.hover,
                                    )
                                    on:mouseenter=lift
                                    on:mouseleave=settle
                                >
                                    <i class=link.icon></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                <footer class="mt-16 pt-8 border-t border-gray-800 text-center text-gray-600 text-sm">
                    <p>"© 2025 Nishal K. Crafted in Kerala."</p>
                    <p class="mt-1">"Built " {env!("BUILD_TIME")}</p>
                </footer>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_submission_round_trip() {
        let phase = SubmitPhase::Idle;
        assert!(phase.can_submit());

        let phase = phase.advance(FormEvent::Submit);
        assert_eq!(phase, SubmitPhase::Submitting);
        assert!(!phase.can_submit());

        // double-submit while in flight is ignored
        let phase = phase.advance(FormEvent::Submit);
        assert_eq!(phase, SubmitPhase::Submitting);

        let phase = phase.advance(outcome(Ok(200)));
        assert_eq!(phase, SubmitPhase::Submitted);

        let phase = phase.advance(FormEvent::BannerExpired);
        assert_eq!(phase, SubmitPhase::Idle);

        assert_eq!(BANNER_MS, 5000.0);
    }

    #[test]
    fn rejected_submission_allows_retry() {
        let phase = SubmitPhase::Submitting.advance(outcome(Ok(500)));
        let SubmitPhase::Failed(message) = &phase else {
            panic!("expected Failed, got {phase:?}");
        };
        assert_eq!(message, FAILURE_MESSAGE);
        assert!(phase.can_submit());
        assert_eq!(phase.advance(FormEvent::Submit), SubmitPhase::Submitting);
    }

    #[test]
    fn transport_errors_fail_the_same_way() {
        let event = outcome(Err("connection refused".to_string()));
        assert_eq!(
            event,
            FormEvent::Rejected(SubmitError::Transport("connection refused".to_string()))
        );
        assert_eq!(
            SubmitPhase::Submitting.advance(event),
            SubmitPhase::Failed(FAILURE_MESSAGE.to_string())
        );
    }

    #[test]
    fn any_2xx_counts_as_delivered() {
        assert_eq!(outcome(Ok(200)), FormEvent::Delivered);
        assert_eq!(outcome(Ok(204)), FormEvent::Delivered);
        assert_eq!(
            outcome(Ok(302)),
            FormEvent::Rejected(SubmitError::Status(302))
        );
    }

    #[test]
    fn banner_expiry_only_applies_after_success() {
        assert_eq!(
            SubmitPhase::Idle.advance(FormEvent::BannerExpired),
            SubmitPhase::Idle
        );
        assert_eq!(
            SubmitPhase::Submitting.advance(FormEvent::BannerExpired),
            SubmitPhase::Submitting
        );
    }

    #[test]
    fn encoded_body_carries_draft_and_relay_control_fields() {
        let draft = Draft {
            name: "Ada L".to_string(),
            email: "ada@example.com".to_string(),
            subject: "AMV commission?".to_string(),
            message: "hi & hello".to_string(),
        };
        let relay = ContactRelay {
            endpoint: "https://relay.example/send".to_string(),
            subject: "New Portfolio Contact Message".to_string(),
            autoresponse: "Thanks!".to_string(),
        };
        let body = encode_form(&draft, &relay);
        assert!(body.contains("name=Ada%20L"));
        assert!(body.contains("email=ada%40example.com"));
        assert!(body.contains("subject=AMV%20commission%3F"));
        assert!(body.contains("message=hi%20%26%20hello"));
        assert!(body.contains("_subject=New%20Portfolio%20Contact%20Message"));
        assert!(body.contains("_template=table"));
        assert!(body.contains("_captcha=false"));
        assert!(body.contains("_honey="));
    }

    #[test]
    fn cleared_draft_is_empty() {
        let mut draft = Draft {
            name: "x".to_string(),
            email: "y".to_string(),
            subject: "z".to_string(),
            message: "w".to_string(),
        };
        draft.clear();
        assert_eq!(draft, Draft::default());
    }
}
