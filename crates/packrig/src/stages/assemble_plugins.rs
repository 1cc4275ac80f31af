use std::path::Path;

use regex::Regex;
use serde_json::Value;

use packrig_common::{
  BuildConfig, Mode, ModuleReplacement, PluginDirective, ReplaceTarget, ResolvedSpec,
};
use packrig_error::{BuildError, BuildResult};
use packrig_fs::FileSystem;
use packrig_utils::indexmap::FxIndexMap;
use packrig_utils::option_ext::OptionExt;
use packrig_utils::path_ext::PathExt;

use super::clear_output::clear_output;

/// The devtool a dev build falls back to: original sources with good initial
/// build speed and good rebuild speed.
pub(crate) const DEFAULT_DEV_DEVTOOL: &str = "cheap-module-eval-source-map";

/// Appends replacement and definition directives, then the mode-specific set.
/// The two mode branches are terminal and mutually exclusive.
pub(crate) fn assemble_plugins<Fs: FileSystem>(
  fs: &Fs,
  config: &mut BuildConfig,
  spec: &ResolvedSpec,
) -> BuildResult<()> {
  if let Some(replace) = &spec.replace {
    for (pattern, target) in replace {
      let replacement = compile_replacement(pattern, target, spec)?;
      config.plugins.push(PluginDirective::ModuleReplacement(replacement));
    }
  }

  if let Some(define) = &spec.define {
    config.plugins.push(PluginDirective::Define(define.clone()));
  }

  match spec.mode {
    Mode::Dev => {
      config.devtool =
        Some(spec.devtool.clone().unwrap_or_else(|| DEFAULT_DEV_DEVTOOL.to_string()));
    }
    Mode::Production => {
      // The output guard runs before any plugin is appended; an unsafe
      // output directory must abort with the configuration untouched.
      clear_output(fs, spec)?;

      // Dedupe and ordering must precede minification for deterministic,
      // minimal output. The environment flag is independent and runs last.
      config.plugins.extend([
        PluginDirective::Dedupe,
        PluginDirective::OccurrenceOrder { prefer_entry: true },
        PluginDirective::Minify(spec.uglify.clone()),
        PluginDirective::ExtractCss {
          filename: spec.output.css_filename.clone().unpack(),
          all_chunks: true,
        },
        PluginDirective::Define(production_env()),
      ]);
    }
  }

  Ok(())
}

/// Patterns match the entire resource request.
fn compile_replacement(
  pattern: &str,
  target: &ReplaceTarget,
  spec: &ResolvedSpec,
) -> BuildResult<ModuleReplacement> {
  let regex = Regex::new(&format!("^{pattern}$")).map_err(|source| {
    BuildError::InvalidReplacePattern { pattern: pattern.to_string(), source }
  })?;

  let target = match target {
    ReplaceTarget::Path(path) => {
      ReplaceTarget::Path(Path::new(path).absolutize_to_string(&spec.cwd))
    }
    factory @ ReplaceTarget::Factory(_) => factory.clone(),
  };

  Ok(ModuleReplacement { pattern: regex, target })
}

/// Freezes the runtime environment flag for production output.
fn production_env() -> FxIndexMap<String, Value> {
  let mut define = FxIndexMap::default();
  define.insert("process.env.NODE_ENV".to_string(), Value::String("\"production\"".to_string()));
  define
}
