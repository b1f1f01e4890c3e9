pub mod view_result;
