/* src/cli/core/src/config/tests/discovery.rs */

use super::*;

#[test]
fn find_config_walks_upward() {
  let tmp = tempfile::tempdir().unwrap();
  std::fs::write(tmp.path().join(CONFIG_FILE), MINIMAL).unwrap();
  let nested = tmp.path().join("app/pages/blog");
  std::fs::create_dir_all(&nested).unwrap();

  let found = find_config(&nested).unwrap();
  assert_eq!(found, tmp.path().canonicalize().unwrap().join(CONFIG_FILE));

  let config = load_config(&found).unwrap();
  assert_eq!(config.organization.name, "Acme Studio");
}

#[test]
fn find_config_prefers_nearest() {
  let tmp = tempfile::tempdir().unwrap();
  std::fs::write(tmp.path().join(CONFIG_FILE), MINIMAL).unwrap();
  let member = tmp.path().join("member");
  std::fs::create_dir_all(&member).unwrap();
  std::fs::write(member.join(CONFIG_FILE), MINIMAL.replace("Acme Studio", "Member Co")).unwrap();

  let found = find_config(&member).unwrap();
  assert_eq!(load_config(&found).unwrap().organization.name, "Member Co");
}

#[test]
fn load_config_missing_file() {
  let tmp = tempfile::tempdir().unwrap();
  let err = load_config(&tmp.path().join(CONFIG_FILE)).unwrap_err();
  assert!(err.to_string().contains("failed to read"));
}

#[test]
fn find_config_missing_dir() {
  let tmp = tempfile::tempdir().unwrap();
  let err = find_config(&tmp.path().join("does-not-exist")).unwrap_err();
  assert!(err.to_string().contains("failed to canonicalize"));
}
