//! Update function for the SMS form component.
//!
//! Elm-style: receives the component state, the `Context` and a `Msg`,
//! mutates the state and returns whether the view must re-render.
//!
//! Key behaviors
//! - Field edits only update the raw strings; validation happens on submit.
//! - `Submit` asks the controller for a ticket and spawns the dispatch task.
//!   The task reports back through `Msg::Settled`, exactly once.
//! - `Cancel` aborts the in-flight request and resets the form at once.

use common::controller::run_submission;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::dispatch::HttpDispatch;

use super::messages::Msg;
use super::state::SmsFormComponent;

/// Central update function for the component.
pub fn update(component: &mut SmsFormComponent, ctx: &Context<SmsFormComponent>, msg: Msg) -> bool {
    match msg {
        Msg::SetPhone(phone) => {
            component.phone = phone;
            true
        }
        Msg::SetCount(count) => {
            component.count = count;
            true
        }
        Msg::Submit => {
            let Some(ticket) = component
                .controller
                .submit(&component.phone, &component.count)
            else {
                // Rejected input (or already sending): the controller has
                // already updated the view model.
                return true;
            };

            let dispatch = HttpDispatch::new(ctx.props().endpoint.to_string());
            let link = ctx.link().clone();
            spawn_local(async move {
                run_submission(&dispatch, ticket, move |id, outcome| {
                    link.send_message(Msg::Settled(id, outcome));
                })
                .await;
            });
            true
        }
        Msg::Cancel => component.controller.cancel(),
        // The controller logs failures; `logger` forwards them to the console.
        Msg::Settled(id, outcome) => component.controller.settle(id, outcome),
        Msg::Resized => {
            log::debug!("viewport resized");
            false
        }
    }
}
