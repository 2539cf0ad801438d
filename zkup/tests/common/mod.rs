//! Shared fixture: a throwaway home, toolkit dir and fake toolchain.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Records its arguments and drops fake binaries into `--root/bin`.
const FAKE_CARGO: &str = r#"#!/bin/sh
echo "$@" >> "$ZKUP_TEST_LOG"
if [ -n "$ZKUP_TEST_FAIL" ]; then
  exit 101
fi
root=""
prev=""
for arg in "$@"; do
  if [ "$prev" = "--root" ]; then
    root="$arg"
  fi
  prev="$arg"
done
mkdir -p "$root/bin"
for arg in "$@"; do
  case "$arg" in
    zk_inception|zk_supervisor) echo "fake $arg" > "$root/bin/$arg" ;;
    */crates/zk_inception) echo "fake zk_inception" > "$root/bin/zk_inception" ;;
    */crates/zk_supervisor) echo "fake zk_supervisor" > "$root/bin/zk_supervisor" ;;
  esac
done
exit 0
"#;

const FAKE_GIT: &str = "#!/bin/sh\nexit 0\n";

pub struct TestFixture {
    _temp_dir: TempDir,
    pub home: PathBuf,
    pub toolkit_dir: PathBuf,
    pub fake_bin: PathBuf,
    pub log: PathBuf,
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let home = temp_dir.path().join("home");
        let fake_bin = temp_dir.path().join("fake-bin");
        fs::create_dir_all(&home).expect("Failed to create home");
        fs::create_dir_all(&fake_bin).expect("Failed to create fake bin");

        Self {
            toolkit_dir: home.join(".zkt"),
            log: temp_dir.path().join("cargo.log"),
            _temp_dir: temp_dir,
            home,
            fake_bin,
        }
    }

    /// Installs fake `cargo` and `git` into the fake bin directory.
    #[cfg(unix)]
    pub fn with_fake_toolchain(self) -> Self {
        write_executable(&self.fake_bin.join("cargo"), FAKE_CARGO);
        write_executable(&self.fake_bin.join("git"), FAKE_GIT);
        self
    }

    /// A local checkout containing the `zk_toolbox` project directory.
    pub fn checkout(&self) -> PathBuf {
        let checkout = self.home.join("src/zksync-era");
        fs::create_dir_all(checkout.join("zk_toolbox/crates")).expect("Failed to create checkout");
        checkout
    }

    /// `zkup` with a hermetic environment. PATH only contains the fake bin
    /// directory plus the system dirs needed for `sh` and `ln`.
    pub fn zkup(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("zkup"));
        cmd.env_clear()
            .env("HOME", &self.home)
            .env("PATH", format!("{}:/bin:/usr/bin", self.fake_bin.display()))
            .env("ZKT_DIR", &self.toolkit_dir)
            .env("ZKUP_TEST_LOG", &self.log)
            .env("NO_COLOR", "1");
        cmd
    }

    /// `zkup` with a PATH that contains nothing at all.
    pub fn zkup_without_tools(&self) -> Command {
        let mut cmd = self.zkup();
        cmd.env("PATH", &self.fake_bin);
        cmd
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.toolkit_dir.join("bin")
    }

    /// One entry per cargo invocation.
    pub fn cargo_calls(&self) -> Vec<String> {
        fs::read_to_string(&self.log)
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

#[cfg(unix)]
fn write_executable(path: &Path, contents: &str) {
    use std::os::unix::fs::PermissionsExt;

    fs::write(path, contents).expect("Failed to write fake tool");
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .expect("Failed to make fake tool executable");
}
