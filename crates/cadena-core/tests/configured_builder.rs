use cadena_config::{CadenaPaths, RightsConfig, TomlConfigBackend};
use cadena_core::domain::{ComposerId, OwnershipMode, PublisherId, RightsChainNode, WriterEntry, WriterRole};
use cadena_core::services::{RightsChainBuilder, ShareValidator};
use tempfile::tempdir;

fn builder_from(cfg: &RightsConfig) -> RightsChainBuilder {
  let default_publisher = PublisherId::from_uuid(cfg.require_default_publisher().unwrap());
  let validator = ShareValidator::with_tolerance(cfg.share_tolerance).unwrap();
  RightsChainBuilder::new(default_publisher).with_validator(validator)
}

#[test]
fn default_publisher_comes_from_config_file() {
  let tmp = tempdir().unwrap();
  let backend = TomlConfigBackend::new(CadenaPaths::at(tmp.path()).unwrap());
  std::fs::write(
    backend.paths().config_file(),
    "[rights]\ndefault_publisher_id = \"9d2f4c1a-8b7e-4d3c-a6f5-1e2d3c4b5a69\"\nshare_tolerance = 0.005\n",
  )
  .unwrap();

  let cfg = RightsConfig::load_from(&backend).unwrap();
  let builder = builder_from(&cfg);

  let mut writer = WriterEntry::new(WriterRole::Composer);
  writer.composer_id = Some(ComposerId::new());
  writer.share = 100.0;
  writer.is_controlled = true;

  let chain = builder.generate_checked(&[writer], OwnershipMode::Simple).unwrap();
  match &chain[0].children[0] {
    RightsChainNode::Publisher(p) => assert_eq!(p.publisher_id.to_string(), "9d2f4c1a-8b7e-4d3c-a6f5-1e2d3c4b5a69"),
    other => panic!("expected publisher node, got {other:?}"),
  }
}

#[test]
fn configured_tolerance_never_loosens_the_100_percent_rule() {
  let tmp = tempdir().unwrap();
  let backend = TomlConfigBackend::new(CadenaPaths::at(tmp.path()).unwrap());
  std::fs::write(
    backend.paths().config_file(),
    "[rights]\ndefault_publisher_id = \"9d2f4c1a-8b7e-4d3c-a6f5-1e2d3c4b5a69\"\nshare_tolerance = 0.005\n",
  )
  .unwrap();
  let builder = builder_from(&RightsConfig::load_from(&backend).unwrap());

  let mut writer = WriterEntry::new(WriterRole::Composer);
  writer.composer_id = Some(ComposerId::new());
  writer.share = 99.99;

  assert!(builder.generate_checked(&[writer], OwnershipMode::Simple).is_err());
}

#[test]
fn missing_default_publisher_is_a_config_error() {
  let tmp = tempdir().unwrap();
  let backend = TomlConfigBackend::new(CadenaPaths::at(tmp.path()).unwrap());

  let cfg = RightsConfig::load_from(&backend).unwrap();
  assert!(cfg.require_default_publisher().is_err());
}
