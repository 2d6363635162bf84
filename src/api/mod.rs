//! HTTP API module for the severance engine.
//!
//! This module provides the REST API endpoints for the two termination
//! calculators and the letter generator.

mod handlers;
mod parsing;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use parsing::{parse_count, parse_currency};
pub use request::{
    CalculationRequest, CompensationRequest, DismissalRequest, EntitlementsRequest,
    LetterGenerationRequest, PeriodRequest,
};
pub use response::{ApiError, LetterResponse};
pub use state::AppState;
