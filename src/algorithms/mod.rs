/// Module containing Strongin's global search method.
pub mod strongin;
pub use strongin::Strongin;
