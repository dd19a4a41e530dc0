//! Integration tests for marketcart

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Isolated config and storage file for one test
    struct Sandbox {
        dir: TempDir,
    }

    impl Sandbox {
        fn new() -> Self {
            let dir = TempDir::new().unwrap();
            std::fs::write(
                dir.path().join("config.toml"),
                "[general]\nactivity_log = false\n",
            )
            .unwrap();
            Self { dir }
        }

        fn storage(&self) -> PathBuf {
            self.dir.path().join("storage.json")
        }

        fn cmd(&self) -> Command {
            let mut cmd = cargo_bin_cmd!("marketcart");
            cmd.env_remove("MARKETCART_CONFIG")
                .env_remove("MARKETCART_STORE")
                .arg("--config")
                .arg(self.dir.path().join("config.toml"))
                .arg("--store")
                .arg(self.storage());
            cmd
        }

        fn persisted(&self) -> serde_json::Value {
            let document: serde_json::Value =
                serde_json::from_str(&std::fs::read_to_string(self.storage()).unwrap()).unwrap();
            let raw = document["@GoMarketplace_products"].as_str().unwrap();
            serde_json::from_str(raw).unwrap()
        }
    }

    fn add_shirt(sandbox: &Sandbox) {
        sandbox
            .cmd()
            .args([
                "add", "--id", "a", "--title", "Shirt", "--image-url", "u", "--price", "10",
            ])
            .assert()
            .success();
    }

    #[test]
    fn help_displays() {
        cargo_bin_cmd!("marketcart")
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("persistent shopping cart"));
    }

    #[test]
    fn version_displays() {
        cargo_bin_cmd!("marketcart")
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("marketcart"));
    }

    #[test]
    fn list_empty() {
        let sandbox = Sandbox::new();
        sandbox
            .cmd()
            .args(["list", "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[]"));
    }

    #[test]
    fn add_persists_wire_format() {
        let sandbox = Sandbox::new();
        add_shirt(&sandbox);

        let items = sandbox.persisted();
        assert_eq!(items.as_array().unwrap().len(), 1);
        assert_eq!(items[0]["id"], "a");
        assert_eq!(items[0]["title"], "Shirt");
        assert_eq!(items[0]["image_url"], "u");
        assert_eq!(items[0]["price"], 10.0);
        assert_eq!(items[0]["quantity"], 1);
    }

    #[test]
    fn add_twice_merges() {
        let sandbox = Sandbox::new();
        add_shirt(&sandbox);
        add_shirt(&sandbox);

        sandbox
            .cmd()
            .args(["list", "--format", "plain"])
            .assert()
            .success()
            .stdout("a 2\n");
    }

    #[test]
    fn decrement_to_zero_removes_item() {
        let sandbox = Sandbox::new();
        add_shirt(&sandbox);
        sandbox.cmd().args(["increment", "a"]).assert().success();

        sandbox
            .cmd()
            .args(["decrement", "a", "--format", "plain"])
            .assert()
            .success()
            .stdout("a 1\n");

        sandbox
            .cmd()
            .args(["decrement", "a", "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[]"));

        assert_eq!(sandbox.persisted(), serde_json::json!([]));
    }

    #[test]
    fn decrement_missing_item_succeeds() {
        let sandbox = Sandbox::new();
        sandbox
            .cmd()
            .args(["decrement", "ghost", "--format", "plain"])
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }

    #[test]
    fn table_shows_subtotal() {
        let sandbox = Sandbox::new();
        add_shirt(&sandbox);
        add_shirt(&sandbox);

        sandbox
            .cmd()
            .arg("list")
            .assert()
            .success()
            .stdout(predicate::str::contains("Shirt"))
            .stdout(predicate::str::contains("subtotal 20.00"));
    }

    #[test]
    fn huge_prices_do_not_break_listing() {
        let sandbox = Sandbox::new();
        for _ in 0..2 {
            sandbox
                .cmd()
                .args([
                    "add",
                    "--id",
                    "m",
                    "--title",
                    "Yacht",
                    "--price",
                    "50000000000000000000000000000",
                ])
                .assert()
                .success();
        }

        sandbox
            .cmd()
            .arg("list")
            .assert()
            .success()
            .stdout(predicate::str::contains("subtotal overflow"));
    }

    #[test]
    fn malformed_storage_falls_back_to_empty_cart() {
        let sandbox = Sandbox::new();
        std::fs::write(
            sandbox.storage(),
            r#"{"@GoMarketplace_products": "this is not a cart"}"#,
        )
        .unwrap();

        sandbox
            .cmd()
            .args(["list", "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[]"))
            .stderr(predicate::str::contains("empty cart"));
    }

    #[test]
    fn empty_id_is_rejected() {
        let sandbox = Sandbox::new();
        sandbox
            .cmd()
            .args(["add", "--id", "", "--title", "Ghost", "--price", "1"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid product"));
    }

    #[test]
    fn unknown_backend_reports_hint() {
        let sandbox = Sandbox::new();
        std::fs::write(
            sandbox.dir.path().join("config.toml"),
            "[storage]\nbackend = \"redis\"\n",
        )
        .unwrap();

        sandbox
            .cmd()
            .arg("list")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown storage backend"))
            .stderr(predicate::str::contains("Hint:"));
    }

    #[test]
    fn config_show() {
        let sandbox = Sandbox::new();
        sandbox
            .cmd()
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[storage]"))
            .stdout(predicate::str::contains("@GoMarketplace_products"));
    }

    #[test]
    fn config_path() {
        let sandbox = Sandbox::new();
        sandbox
            .cmd()
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }
}
