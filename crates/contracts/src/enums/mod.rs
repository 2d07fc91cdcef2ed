pub mod lookup_kind;

pub use lookup_kind::LookupKind;
