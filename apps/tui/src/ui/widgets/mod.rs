pub mod cards;
pub mod charts;
pub mod gauge;
pub mod popup;
