//! Regulatory Copilot
//!
//! Free-text questions answered by the compliance service, with sources.

use leptos::*;

use crate::api::ApiHandle;
use crate::state::{ChatReply, ChatSession};

/// Chat panel component
#[component]
pub fn CopilotChat() -> impl IntoView {
    let api = expect_context::<ApiHandle>();
    let session = create_rw_signal(ChatSession::default());

    let submit = move || {
        let Some(question) = session.try_update(ChatSession::submit).flatten() else {
            return;
        };

        let api = api.clone();
        spawn_local(async move {
            let outcome = api.ask_question(&question).await;
            session.try_update(|s| s.resolve(outcome));
        });
    };
    let submit_on_enter = submit.clone();

    view! {
        <section class="bg-gray-800 rounded-xl p-6 flex flex-col">
            <h2 class="text-xl font-semibold mb-1">"Regulatory Copilot"</h2>
            <p class="text-sm text-gray-400 mb-4">"Ask about the EU Energy Efficiency Directive"</p>

            <div class="flex space-x-2">
                <input
                    id="copilot-query"
                    type="text"
                    placeholder="e.g. What is the public building renovation target?"
                    prop:value=move || session.with(|s| s.query().to_string())
                    on:input=move |ev| session.update(|s| s.set_query(event_target_value(&ev)))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            submit_on_enter();
                        }
                    }
                    class="flex-1 bg-gray-700 rounded-lg px-4 py-2
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
                <button
                    id="copilot-ask"
                    on:click=move |_| submit()
                    disabled=move || session.with(ChatSession::is_pending)
                    class="px-6 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg font-medium transition-colors"
                >
                    {move || session.with(ChatSession::trigger_label)}
                </button>
            </div>

            <div class="mt-6">
                <Show when=move || session.with(ChatSession::is_pending)>
                    <div class="animate-pulse space-y-2">
                        <div class="h-4 bg-gray-700 rounded w-3/4" />
                        <div class="h-4 bg-gray-700 rounded w-1/2" />
                    </div>
                </Show>

                {move || {
                    session
                        .with(|s| s.reply().cloned())
                        .map(|reply| view! { <ReplyCard reply=reply /> })
                }}
            </div>
        </section>
    }
}

/// Answer text plus its citations
#[component]
fn ReplyCard(reply: ChatReply) -> impl IntoView {
    let sources = reply.citation_lines();
    let text_class = match reply {
        ChatReply::Answer { .. } => "whitespace-pre-wrap text-gray-100",
        ChatReply::Unreachable => "whitespace-pre-wrap text-red-400",
    };

    view! {
        <div id="copilot-reply" class="bg-gray-700/50 rounded-lg p-4">
            <p class=text_class>{reply.text().to_string()}</p>

            {(!sources.is_empty()).then(|| view! {
                <div class="mt-3 pt-3 border-t border-gray-600">
                    <p class="text-xs uppercase text-gray-400 mb-1">"Sources:"</p>
                    <ul class="copilot-sources text-sm text-gray-300 space-y-1">
                        {sources
                            .into_iter()
                            .map(|line| view! { <li>{line}</li> })
                            .collect_view()}
                    </ul>
                </div>
            })}
        </div>
    }
}
