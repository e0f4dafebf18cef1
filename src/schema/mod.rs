pub mod concept;
pub mod deck;
