pub mod normalizer;
pub mod word_counter;
