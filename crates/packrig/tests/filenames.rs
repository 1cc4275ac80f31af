//! The filename synthesis matrix: mode, hashing, and package versions.

use std::path::{Path, PathBuf};

use packrig::{
  BuildError, BuildOptions, Entry, FilenameTemplate, HashMode, OutputOptions, PackageHint,
  PackageMeta, synthesize,
};

fn options(cwd: &Path) -> BuildOptions {
  BuildOptions {
    input: Some(Entry::from("./src/index.js")),
    output: Some(OutputOptions::from("./dist")),
    cwd: Some(cwd.to_path_buf()),
    ..BuildOptions::default()
  }
}

fn templates(config: &packrig::BuildConfig) -> (&str, &str) {
  let js = config.output.filename.as_ref().expect("filename").as_str();
  let css = config.output.css_filename.as_ref().expect("css filename").as_str();
  (js, css)
}

#[test]
fn dev_mode_uses_plain_names() {
  let config = synthesize(BuildOptions {
    is_dev: Some(true),
    ..options(Path::new("/srv/app"))
  })
  .expect("config");
  assert_eq!(templates(&config), ("[name].js", "[name].css"));
}

#[test]
fn production_without_hash_uses_package_version() {
  let config = synthesize(BuildOptions {
    is_dev: Some(false),
    hash: Some(HashMode::Off),
    package: Some(PackageHint::Meta(PackageMeta::new("1.2.3"))),
    ..options(Path::new("/srv/app"))
  })
  .expect("config");
  assert_eq!(templates(&config), ("[name].1.2.3.js", "[name].1.2.3.css"));
}

#[test]
fn production_hash_splits_by_artifact_kind() {
  let config = synthesize(BuildOptions {
    hash: Some(HashMode::On),
    ..options(Path::new("/srv/app"))
  })
  .expect("config");
  assert_eq!(templates(&config), ("[name].[chunkhash].js", "[name].[contenthash].css"));
}

#[test]
fn production_hash_length_is_appended() {
  let config = synthesize(BuildOptions {
    hash: Some(HashMode::Len(4)),
    ..options(Path::new("/srv/app"))
  })
  .expect("config");
  assert_eq!(templates(&config), ("[name].[chunkhash:4].js", "[name].[contenthash:4].css"));
}

#[test]
fn version_is_read_from_an_explicit_package_path() {
  let dir = tempfile::tempdir().expect("tempdir");
  let meta_path = dir.path().join("meta").join("package.json");
  std::fs::create_dir_all(meta_path.parent().expect("parent")).expect("mkdir");
  std::fs::write(&meta_path, r#"{"version": "2.0.1"}"#).expect("write");

  let config = synthesize(BuildOptions {
    package: Some(PackageHint::Path(PathBuf::from("./meta/package.json"))),
    ..options(dir.path())
  })
  .expect("config");
  assert_eq!(templates(&config), ("[name].2.0.1.js", "[name].2.0.1.css"));
}

#[test]
fn version_falls_back_to_cwd_package_json() {
  let dir = tempfile::tempdir().expect("tempdir");
  std::fs::write(dir.path().join("package.json"), r#"{"version": "0.3.0"}"#).expect("write");

  let config = synthesize(options(dir.path())).expect("config");
  assert_eq!(templates(&config), ("[name].0.3.0.js", "[name].0.3.0.css"));
}

#[test]
fn missing_package_metadata_aborts_versioned_naming() {
  let dir = tempfile::tempdir().expect("tempdir");
  let err = synthesize(options(dir.path())).expect_err("no package.json to read");
  assert!(matches!(err, BuildError::Filesystem(_)));
}

#[test]
fn user_supplied_templates_are_kept() {
  let output = OutputOptions {
    path: Some("./dist".to_string()),
    filename: Some(FilenameTemplate::from("bundle.js")),
    css_filename: Some(FilenameTemplate::from("bundle.css")),
    public_path: None,
  };
  let config = synthesize(BuildOptions {
    output: Some(output),
    hash: Some(HashMode::On),
    ..options(Path::new("/srv/app"))
  })
  .expect("config");
  assert_eq!(templates(&config), ("bundle.js", "bundle.css"));
}
