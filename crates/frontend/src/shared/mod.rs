pub mod api_utils;
pub mod debouncer;
pub mod dom;
pub mod export;
pub mod lookup_picker;
pub mod page_behaviors;
pub mod request_canceler;
pub mod task;

#[cfg(test)]
pub mod test_support;
