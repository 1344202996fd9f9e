//! Tests for project discovery and layered loading

use packgen_config::{ConfigError, ModuleTransform, ProjectDiscovery, UseBuiltIns};
use serial_test::serial;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

struct EnvGuard(&'static str);

impl EnvGuard {
    fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            std::env::set_var(key, value);
        }
        Self(key)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            std::env::remove_var(self.0);
        }
    }
}

#[test]
#[serial]
fn discovers_packgen_toml() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("packgen.toml"),
        r#"
fsharpEntry = "./src/Client.fsproj"
outputDir = "./dist"
devServerPort = 3000

[babel]
useBuiltIns = "usage"
"#,
    )
    .unwrap();

    let project = ProjectDiscovery::new(dir.path()).load().unwrap();
    assert_eq!(project.root, dir.path());
    assert_eq!(project.source, Some(dir.path().join("packgen.toml")));
    assert_eq!(project.options.fsharp_entry, PathBuf::from("./src/Client.fsproj"));
    assert_eq!(project.options.output_dir, PathBuf::from("./dist"));
    assert_eq!(project.options.dev_server_port, 3000);
    assert_eq!(project.options.babel.use_built_ins, UseBuiltIns::Usage);
    assert_eq!(project.options.babel.corejs, 3);
}

#[test]
#[serial]
fn discovers_package_json_field() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("package.json"),
        r#"{
  "name": "client",
  "packgen": {
    "publicPath": "/app/",
    "devServerProxy": {
      "/api": { "target": "http://localhost:5000", "changeOrigin": true }
    }
  }
}"#,
    )
    .unwrap();

    let project = ProjectDiscovery::new(dir.path()).load().unwrap();
    assert_eq!(project.options.public_path, "/app/");
    assert_eq!(
        project.options.dev_server_proxy["/api"].target,
        "http://localhost:5000"
    );
}

#[test]
#[serial]
fn missing_config_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let project = ProjectDiscovery::new(dir.path()).load().unwrap();
    assert!(project.source.is_none());
    assert_eq!(project.root, dir.path());
    assert_eq!(project.options.dev_server_port, 8080);
}

#[test]
#[serial]
fn explicit_path_must_exist() {
    let dir = TempDir::new().unwrap();
    let err = ProjectDiscovery::new(dir.path())
        .load_from(&PathBuf::from("missing.toml"))
        .unwrap_err();
    match err {
        ConfigError::NotFound(path) => assert_eq!(path, dir.path().join("missing.toml")),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
#[serial]
fn explicit_path_sets_root_to_its_directory() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("client");
    fs::create_dir_all(&nested).unwrap();
    fs::write(nested.join("settings.json"), r#"{ "devServerPort": 9000 }"#).unwrap();

    let project = ProjectDiscovery::new(dir.path())
        .load_from(&PathBuf::from("client/settings.json"))
        .unwrap();
    assert_eq!(project.root, nested);
    assert_eq!(project.options.dev_server_port, 9000);
}

#[test]
#[serial]
fn environment_overrides_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("packgen.toml"), "devServerPort = 3000\n").unwrap();

    let _port = EnvGuard::set("PACKGEN_DEV_SERVER_PORT", "4500");
    let _corejs = EnvGuard::set("PACKGEN_BABEL__COREJS", "2");

    let project = ProjectDiscovery::new(dir.path()).load().unwrap();
    assert_eq!(project.options.dev_server_port, 4500);
    assert_eq!(project.options.babel.corejs, 2);
}

#[test]
#[serial]
fn environment_overrides_nested_camel_case_keys() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("packgen.toml"),
        "[babel]\nuseBuiltIns = \"entry\"\nmodules = \"auto\"\n",
    )
    .unwrap();

    let _use_built_ins = EnvGuard::set("PACKGEN_BABEL__USE_BUILT_INS", "usage");
    let _modules = EnvGuard::set("PACKGEN_BABEL__MODULES", "false");
    let _output = EnvGuard::set("PACKGEN_OUTPUT_DIR", "./dist");

    let project = ProjectDiscovery::new(dir.path()).load().unwrap();
    assert_eq!(project.options.babel.use_built_ins, UseBuiltIns::Usage);
    assert_eq!(project.options.babel.modules, ModuleTransform::Disabled);
    assert_eq!(project.options.output_dir, PathBuf::from("./dist"));
}

#[test]
#[serial]
fn snake_case_file_keys() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("packgen.toml"),
        r#"
dev_server_port = 3000
output_dir = "./dist"

[babel]
use_built_ins = "usage"
"#,
    )
    .unwrap();

    let project = ProjectDiscovery::new(dir.path()).load().unwrap();
    assert_eq!(project.options.dev_server_port, 3000);
    assert_eq!(project.options.output_dir, PathBuf::from("./dist"));
    assert_eq!(project.options.babel.use_built_ins, UseBuiltIns::Usage);
}

#[test]
#[serial]
fn environment_overrides_snake_case_file_keys() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("packgen.toml"), "dev_server_port = 3000\n").unwrap();

    let _port = EnvGuard::set("PACKGEN_DEV_SERVER_PORT", "4500");

    let project = ProjectDiscovery::new(dir.path()).load().unwrap();
    assert_eq!(project.options.dev_server_port, 4500);
}

#[test]
#[serial]
fn boolean_false_babel_settings_in_toml() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("packgen.toml"),
        "[babel]\nuseBuiltIns = false\nmodules = false\n",
    )
    .unwrap();

    let project = ProjectDiscovery::new(dir.path()).load().unwrap();
    assert_eq!(project.options.babel.use_built_ins, UseBuiltIns::Disabled);
    assert_eq!(project.options.babel.modules, ModuleTransform::Disabled);
}

#[test]
#[serial]
fn proxy_target_shorthand_in_toml() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("packgen.toml"),
        r#"
[devServerProxy]
"/api" = "http://localhost:5000"
"/api_v2" = { target = "http://localhost:5001", change_origin = true }
"#,
    )
    .unwrap();

    let project = ProjectDiscovery::new(dir.path()).load().unwrap();
    let proxy = &project.options.dev_server_proxy;
    assert_eq!(proxy["/api"].target, "http://localhost:5000");
    assert!(!proxy["/api"].change_origin);
    assert_eq!(proxy["/api_v2"].target, "http://localhost:5001");
    assert!(proxy["/api_v2"].change_origin);
}

#[test]
#[serial]
fn malformed_package_json_is_an_error() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("package.json"),
        r#"{ "packgen": { "devServerPort": 3000, } "#,
    )
    .unwrap();

    let err = ProjectDiscovery::new(dir.path()).load().unwrap_err();
    assert!(matches!(err, ConfigError::PackageJson { .. }));
}

#[test]
#[serial]
fn invalid_value_reports_extract_error() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("packgen.toml"),
        "devServerPort = \"not a port\"\n",
    )
    .unwrap();

    let err = ProjectDiscovery::new(dir.path()).load().unwrap_err();
    assert!(matches!(err, ConfigError::Extract(_)));
}
