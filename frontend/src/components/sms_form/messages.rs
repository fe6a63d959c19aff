use common::controller::{DispatchOutcome, SubmissionId};

#[derive(Clone)]
pub enum Msg {
    SetPhone(String),
    SetCount(String),
    Submit,
    Cancel,
    Settled(SubmissionId, DispatchOutcome),
    Resized,
}
