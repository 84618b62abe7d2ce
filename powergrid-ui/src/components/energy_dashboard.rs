//! Live Grid Telemetry
//!
//! Polls the gateway every few seconds and renders the latest meter readings.

use chrono::Local;
use leptos::*;

use crate::api::ApiHandle;
use crate::state::{PollHandle, TelemetryFeed, TelemetryRow, POLL_INTERVAL_MS};

/// Telemetry panel component
#[component]
pub fn EnergyDashboard() -> impl IntoView {
    let api = expect_context::<ApiHandle>();
    let feed = create_rw_signal(TelemetryFeed::new(Local::now()));

    let poll = move || {
        // Signal is gone once the view has been torn down
        let Some(ticket) = feed.try_update(TelemetryFeed::begin_poll) else {
            return;
        };

        let api = api.clone();
        spawn_local(async move {
            let readings = api.fetch_telemetry().await;
            feed.try_update(|f| f.apply(ticket, readings, Local::now()));
        });
    };

    let poller = PollHandle::start(POLL_INTERVAL_MS, poll);
    on_cleanup(move || drop(poller));

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            // Header
            <div class="flex items-center justify-between mb-4">
                <div class="flex items-center space-x-3">
                    <h2 class="text-xl font-semibold">"Live Grid Telemetry"</h2>
                    <span class="flex items-center space-x-1 text-xs text-green-400">
                        <span class="w-2 h-2 bg-green-400 rounded-full pulse" />
                        <span>"Live"</span>
                    </span>
                </div>
                <span class="text-sm text-gray-400">
                    "Last Sync: "
                    <span id="last-sync">{move || feed.with(TelemetryFeed::last_updated_label)}</span>
                </span>
            </div>

            <table id="telemetry-table" class="w-full text-sm">
                <thead>
                    <tr class="text-left text-gray-400 border-b border-gray-700">
                        <th class="py-2">"Device ID"</th>
                        <th class="py-2">"Status"</th>
                        <th class="py-2">"Consumption (kWh)"</th>
                        <th class="py-2">"Timestamp"</th>
                    </tr>
                </thead>
                <tbody>
                    // Rows are rebuilt on every poll so refreshed values always show
                    {move || feed.with(|f| {
                        if f.has_data() {
                            f.visible_rows()
                                .into_iter()
                                .map(|row| view! { <ReadingRow row=row /> })
                                .collect_view()
                        } else {
                            view! {
                                <tr>
                                    <td colspan="4" class="py-6 text-center text-gray-500">
                                        "Waiting for telemetry..."
                                    </td>
                                </tr>
                            }
                            .into_view()
                        }
                    })}
                </tbody>
            </table>
        </section>
    }
}

/// One meter reading
#[component]
fn ReadingRow(row: TelemetryRow) -> impl IntoView {
    let badge_class = if row.is_peak {
        "px-2 py-0.5 rounded text-xs font-medium bg-red-500/20 text-red-400"
    } else {
        "px-2 py-0.5 rounded text-xs font-medium bg-green-500/20 text-green-400"
    };

    view! {
        <tr class="border-b border-gray-700/50">
            <td class="py-2 font-mono">{row.device_id}</td>
            <td class="py-2">
                <span class=badge_class>{row.status}</span>
            </td>
            <td class="py-2">{row.value}</td>
            <td class="py-2 text-gray-400">{row.time}</td>
        </tr>
    }
}
