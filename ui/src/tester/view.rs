use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::{core::config::use_config, t};

use super::{reply_text, TesterEvent};

#[component]
pub fn RequestTesterView() -> Element {
    let base = use_config().tester_base;

    let mut get_param = use_signal(String::new);
    let mut post_param = use_signal(String::new);
    let mut post_body = use_signal(String::new);
    let mut response = use_signal(|| Option::<String>::None);
    let mut pending = use_signal(|| 0usize);

    let requests = use_coroutine(move |mut rx: UnboundedReceiver<TesterEvent>| {
        let base = base.clone();
        async move {
            while let Some(event) = rx.next().await {
                tracing::debug!(method = event.method(), "sending tester request");
                let text = match &event {
                    TesterEvent::Get { param } => {
                        let outcome = api::tester::send_get(&base, param).await;
                        if let Err(err) = &outcome {
                            tracing::error!(%err, "tester GET failed");
                        }
                        reply_text(&outcome, || t!("tester-get-failed"))
                    }
                    TesterEvent::Post { param, body } => {
                        let outcome = api::tester::send_post(&base, param, body).await;
                        if let Err(err) = &outcome {
                            tracing::error!(%err, "tester POST failed");
                        }
                        reply_text(&outcome, || t!("tester-post-failed"))
                    }
                };
                response.set(Some(text));
                pending -= 1;
            }
        }
    });

    let mut submit = move |event: TesterEvent| {
        pending += 1;
        requests.send(event);
    };

    let busy = pending() > 0;

    rsx! {
        section { class: "page page-tester",
            h1 { {t!("tester-title")} }

            div { class: "tester__card",
                h2 { {t!("tester-get-heading")} }
                form {
                    class: "tester__form",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        submit(TesterEvent::Get { param: get_param() });
                    },
                    label { class: "tester__field",
                        span { {t!("tester-get-param")} }
                        input {
                            r#type: "text",
                            value: "{get_param}",
                            oninput: move |evt| get_param.set(evt.value()),
                        }
                    }
                    button { r#type: "submit", class: "button button--primary",
                        {t!("tester-send-get")}
                    }
                }
            }

            div { class: "tester__card",
                h2 { {t!("tester-post-heading")} }
                form {
                    class: "tester__form",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        submit(TesterEvent::Post {
                            param: post_param(),
                            body: post_body(),
                        });
                    },
                    label { class: "tester__field",
                        span { {t!("tester-post-body")} }
                        input {
                            r#type: "text",
                            value: "{post_body}",
                            oninput: move |evt| post_body.set(evt.value()),
                        }
                    }
                    label { class: "tester__field",
                        span { {t!("tester-post-param")} }
                        input {
                            r#type: "text",
                            value: "{post_param}",
                            oninput: move |evt| post_param.set(evt.value()),
                        }
                    }
                    button { r#type: "submit", class: "button button--primary",
                        {t!("tester-send-post")}
                    }
                }
            }

            div { class: "tester__response", aria_live: "polite",
                h2 { {t!("tester-response-heading")} }
                if busy {
                    p { class: "tester__pending", {t!("status-loading")} }
                }
                if let Some(text) = response() {
                    pre { class: "tester__output", "{text}" }
                } else {
                    p { class: "tester__placeholder", {t!("tester-response-empty")} }
                }
            }
        }
    }
}
