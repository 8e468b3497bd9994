pub mod dashboard;
mod status;
mod strategy_form;
mod update_feed;
