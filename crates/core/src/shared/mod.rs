pub mod constants;
pub mod platform_kind;
