pub mod candidates;
pub mod load;
pub mod resolve;
