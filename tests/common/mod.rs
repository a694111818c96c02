use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

#[allow(dead_code)]
pub fn run_takeaway(args: &[&str]) -> Output {
    TestEnv::new().run(args)
}

pub struct TestEnv {
    home: TempDir,
    config: TempDir,
    data: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("create temporary HOME dir"),
            config: tempfile::tempdir().expect("create temporary XDG config dir"),
            data: tempfile::tempdir().expect("create temporary XDG data dir"),
        }
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .output()
            .expect("failed to execute takeaway binary")
    }

    #[allow(dead_code)]
    pub fn run_with_stdin(&self, args: &[&str], stdin: &str) -> Output {
        use std::io::Write;
        use std::process::Stdio;

        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("failed to spawn takeaway binary");
        child
            .stdin
            .take()
            .expect("child stdin")
            .write_all(stdin.as_bytes())
            .expect("write stdin");
        child.wait_with_output().expect("wait for takeaway binary")
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_takeaway"));
        cmd.args(args)
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.config.path())
            .env("XDG_DATA_HOME", self.data.path())
            .env_remove("TAKEAWAY_WORKER_SCRIPT");
        cmd
    }

    #[allow(dead_code)]
    pub fn data_path(&self) -> &Path {
        self.data.path()
    }

    #[allow(dead_code)]
    pub fn config_path(&self) -> PathBuf {
        let output = self.run(&["config", "path"]);
        assert!(
            output.status.success(),
            "config path should succeed\nstdout:\n{}\nstderr:\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );

        let path = String::from_utf8_lossy(&output.stdout);
        PathBuf::from(path.trim())
    }

    #[allow(dead_code)]
    pub fn write_config(&self, contents: &str) {
        let config_path = self.config_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).expect("create config parent directory");
        }
        std::fs::write(&config_path, contents).expect("write config file");
    }

    /// Write a worker shell script into the data dir and return a config
    /// snippet pointing the keyword worker at it (run through /bin/sh).
    #[allow(dead_code)]
    pub fn install_worker(&self, body: &str) -> String {
        let script = write_worker_script(self.data.path(), body);
        format!(
            "[worker]\ncommand = \"/bin/sh\"\nscript = \"{}\"\ntimeout_secs = 10\n",
            script.display()
        )
    }
}

/// Write a one-shot worker script to `dir` and return its path.
///
/// Scripts are run as `sh <script>`, so no shebang or exec bit is needed.
#[allow(dead_code)]
pub fn write_worker_script(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("worker.sh");
    std::fs::write(&path, body).expect("write worker script");
    path
}

/// A worker that consumes stdin and prints a fixed successful response.
#[allow(dead_code)]
pub fn keywords_worker_body(keywords_json: &str) -> String {
    format!("cat > /dev/null\nprintf '{{\"keywords\": {}}}'\n", keywords_json)
}
