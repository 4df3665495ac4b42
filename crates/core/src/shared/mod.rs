pub mod api_key;
pub mod clock;
pub mod constants;
pub mod retry;
