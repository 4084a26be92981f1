pub mod platform_kind;
