//! App Root Component
//!
//! Shell with the header and the two dashboard panels.

use leptos::*;
use std::rc::Rc;

use crate::api::{ApiHandle, GatewayClient};
use crate::components::{CopilotChat, EnergyDashboard};
use crate::state::SessionStatus;

/// Root application component wired to the real gateway
#[component]
pub fn App() -> impl IntoView {
    let api: ApiHandle = Rc::new(GatewayClient::from_build_env());

    view! { <Shell api=api /> }
}

/// Dashboard layout; `api` is shared with both panels through context
#[component]
pub fn Shell(api: ApiHandle) -> impl IntoView {
    provide_context(api.clone());

    let status = create_rw_signal(SessionStatus::default());

    // Mock sign-in; only changes the header label
    spawn_local(async move {
        let token = api.obtain_token().await;
        status.try_set(SessionStatus::from_token(&token));
    });

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <header class="bg-gray-800 border-b border-gray-700">
                <div class="container mx-auto px-4 py-4 flex items-center justify-between">
                    <div>
                        <h1 class="text-2xl font-bold">"PowerGrid"</h1>
                        <p class="text-sm text-gray-400">"Intelligent CoE Core"</p>
                    </div>
                    <span id="session-status" class="text-sm text-gray-300">
                        {move || status.get().label()}
                    </span>
                </div>
            </header>

            <main class="flex-1 container mx-auto px-4 py-8 grid lg:grid-cols-2 gap-8">
                <EnergyDashboard />
                <CopilotChat />
            </main>
        </div>
    }
}
