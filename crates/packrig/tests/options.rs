//! Option shape validation and entry/output canonicalization.

use std::path::PathBuf;

use serde_json::json;

use packrig::{BuildError, BuildOptions, Entry, OutputOptions, synthesize};

fn dev_options(input: Entry, output: OutputOptions) -> BuildOptions {
  BuildOptions {
    input: Some(input),
    output: Some(output),
    cwd: Some(PathBuf::from("/srv/app")),
    is_dev: Some(true),
    ..BuildOptions::default()
  }
}

#[test]
fn missing_required_options_fail_first() {
  let err = synthesize(BuildOptions::default()).expect_err("empty options must fail");
  assert!(matches!(err, BuildError::MissingOption));

  let err = synthesize(BuildOptions {
    input: Some(Entry::from("./src/index.js")),
    ..BuildOptions::default()
  })
  .expect_err("missing out must fail");
  assert!(matches!(err, BuildError::MissingOption));

  let err = synthesize(BuildOptions {
    output: Some(OutputOptions::from("./dist")),
    ..BuildOptions::default()
  })
  .expect_err("missing in must fail");
  assert!(matches!(err, BuildError::MissingOption));
}

#[test]
fn single_entry_becomes_absolute() {
  let config = synthesize(dev_options(Entry::from("./src/index.js"), OutputOptions::from("./dist")))
    .expect("config");
  assert_eq!(config.entry, Entry::Single("/srv/app/src/index.js".to_string()));
}

#[test]
fn entry_list_preserves_order() {
  let entry = Entry::from(vec!["./b.js".to_string(), "pages/a.js".to_string()]);
  let config = synthesize(dev_options(entry, OutputOptions::from("./dist"))).expect("config");
  assert_eq!(
    config.entry,
    Entry::List(vec!["/srv/app/b.js".to_string(), "/srv/app/pages/a.js".to_string()])
  );
}

#[test]
fn named_entries_preserve_key_identity() {
  let options = BuildOptions::from_value(json!({
    "in": {"app": "./app.js", "admin": "./pages/admin.js"},
    "out": "./dist",
    "cwd": "/srv/app",
    "isDev": true
  }))
  .expect("options");

  let config = synthesize(options).expect("config");
  let Entry::Named(bundles) = &config.entry else { panic!("expected named entry") };
  assert_eq!(
    bundles.get_index(0),
    Some((&"app".to_string(), &"/srv/app/app.js".to_string()))
  );
  assert_eq!(
    bundles.get_index(1),
    Some((&"admin".to_string(), &"/srv/app/pages/admin.js".to_string()))
  );
}

#[test]
fn invalid_entry_shapes_are_rejected() {
  for bad in [json!(42), json!(true), json!(null)] {
    let err = BuildOptions::from_value(json!({"in": bad, "out": "./dist"}))
      .expect_err("shape must be rejected");
    assert!(matches!(err, BuildError::InvalidOption { .. }));
  }
}

#[test]
fn string_output_gets_defaults() {
  let config = synthesize(dev_options(Entry::from("./src/index.js"), OutputOptions::from("public")))
    .expect("config");
  assert_eq!(config.output.path, "/srv/app/public/");
  assert_eq!(config.output.public_path, "/");
}

#[test]
fn object_output_defaults_path_and_keeps_public_path() {
  let output = OutputOptions { public_path: Some("/static/".to_string()), ..OutputOptions::default() };
  let config = synthesize(dev_options(Entry::from("./src/index.js"), output)).expect("config");
  assert_eq!(config.output.path, "/srv/app/dist/");
  assert_eq!(config.output.public_path, "/static/");
}

#[test]
fn passthrough_fields_reach_the_config_verbatim() {
  let options = BuildOptions::from_value(json!({
    "in": "./src/index.js",
    "out": "./dist",
    "cwd": "/srv/app",
    "isDev": true,
    "stats": "verbose",
    "externals": ["react"]
  }))
  .expect("options");

  let config = synthesize(options).expect("config");
  assert_eq!(config.extra.get("stats"), Some(&json!("verbose")));
  assert_eq!(config.extra.get("externals"), Some(&json!(["react"])));
}
