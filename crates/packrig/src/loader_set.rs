use packrig_common::{LoaderRule, Mode, ResolvedSpec};

/// The builtin file-type mapping. In dev, styles are injected inline so
/// rebuilds stay hot; in production they route through extraction so the
/// stylesheet becomes its own artifact.
pub(crate) fn loader_set(spec: &ResolvedSpec) -> Vec<LoaderRule> {
  let style_rule = match spec.mode {
    Mode::Dev => LoaderRule::new(r"\.css$", &["style", "css"]),
    Mode::Production => LoaderRule { extract: true, ..LoaderRule::new(r"\.css$", &["css"]) },
  };

  let script_rule = LoaderRule {
    exclude: Some("node_modules".to_string()),
    ..LoaderRule::new(r"\.jsx?$", &["babel"])
  };

  vec![
    script_rule,
    style_rule,
    LoaderRule::new(r"\.json$", &["json"]),
    LoaderRule::new(r"\.(png|jpe?g|gif|svg|woff2?|ttf|eot)$", &["url"]),
  ]
}
