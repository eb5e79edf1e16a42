pub mod scorer;
pub mod similarity;
