pub mod item_use_case;
pub mod runner;
