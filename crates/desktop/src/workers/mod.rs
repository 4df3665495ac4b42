pub mod count_worker;
pub mod url_check_worker;
