pub mod domain;
pub mod infrastructure;
pub mod resolve_use_case;
