mod admin_test;
mod middleware_test;
mod responses_test;
mod store_failure_test;
