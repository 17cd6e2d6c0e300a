pub mod analysis_result;
pub mod health_indicator;
pub mod review_form;
pub mod reviews_list;
pub mod sentiment;
