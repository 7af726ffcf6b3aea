pub mod human;
pub mod json;

use crate::error::NavigatorError;
use crate::types::needs::UserNeeds;
use crate::types::result::{FitResult, Summary};

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Human,
    Json,
}

pub fn render(
    needs: &UserNeeds,
    results: &[FitResult],
    summary: &Summary,
    format: OutputFormat,
) -> Result<String, NavigatorError> {
    match format {
        OutputFormat::Human => Ok(human::to_text(needs, results, summary)),
        OutputFormat::Json => json::to_json(needs, results, summary).map_err(NavigatorError::Json),
    }
}
