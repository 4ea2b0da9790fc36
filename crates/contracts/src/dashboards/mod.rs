pub mod d100_store_overview;
