pub mod count_words_use_case;
pub mod error;
pub mod infrastructure;
pub mod stage;
