//! Engine host requests: dialogs and notifications

use crate::host::HostRequest;
use crate::state::AppState;

/// Route a request from [`crate::host::ChannelHost`] into UI state.
///
/// Reply senders are parked in the state until the user answers.
pub fn handle_host_request(state: &mut AppState, request: HostRequest) {
    match request {
        HostRequest::Confirm { message, reply } => state.show_confirm(&message, reply),
        HostRequest::PromptDirectory { start_hint, reply } => {
            state.show_prompt(&start_hint, reply)
        }
        HostRequest::Notify { title, message } => state.push_notification(title, message),
    }
}
