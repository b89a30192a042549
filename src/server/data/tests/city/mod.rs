use super::*;

mod get_by_name;
