use serde::Serialize;

use crate::types::needs::UserNeeds;
use crate::types::result::{FitResult, Summary};

#[derive(Serialize)]
struct Payload<'a> {
    inputs: &'a UserNeeds,
    results: &'a [FitResult],
    summary: &'a Summary,
}

pub fn to_json(
    needs: &UserNeeds,
    results: &[FitResult],
    summary: &Summary,
) -> Result<String, serde_json::Error> {
    let payload = Payload {
        inputs: needs,
        results,
        summary,
    };
    // Value maps are BTreeMap-backed, so rendering through a Value sorts
    // object keys alphabetically.
    let value = serde_json::to_value(&payload)?;
    serde_json::to_string_pretty(&value)
}
