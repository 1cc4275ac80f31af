pub mod indexmap;
pub mod option_ext;
pub mod path_ext;
