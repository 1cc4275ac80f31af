mod assemble_loaders;
mod assemble_plugins;
mod clear_output;
mod normalize_options;
mod resolve_spec;
mod synthesize_filenames;

pub(crate) use assemble_loaders::assemble_loaders;
pub(crate) use assemble_plugins::assemble_plugins;
pub(crate) use normalize_options::normalize_options;
pub(crate) use resolve_spec::resolve_spec;
pub(crate) use synthesize_filenames::synthesize_filenames;
