use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

const ISOLATED_VARS: [&str; 5] = [
    "NINES_CONFIG",
    "NINES_EXPLAIN",
    "NINES_HANDS",
    "NINES_LOG",
    "RUST_LOG",
];

#[derive(Debug, Clone)]
pub struct CliRunner {
    mode: RunMode,
}

#[derive(Debug, Clone)]
enum RunMode {
    Binary(PathBuf),
    Library,
}

#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    #[allow(dead_code)]
    pub duration: Duration,
}

impl CliRunner {
    pub fn new() -> Result<Self, String> {
        if let Some(p) = option_env!("CARGO_BIN_EXE_nines") {
            let pb = PathBuf::from(p);
            if pb.exists() {
                return Ok(Self {
                    mode: RunMode::Binary(pb),
                });
            }
        }
        // in-process fallback; cannot apply per-run environment
        Ok(Self {
            mode: RunMode::Library,
        })
    }

    pub fn run(&self, args: &[&str]) -> CliResult {
        self.run_inner(args, &[], None)
    }

    #[allow(dead_code)]
    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> CliResult {
        self.run_inner(args, env, None)
    }

    #[allow(dead_code)]
    pub fn run_with_input(&self, args: &[&str], input: &str) -> CliResult {
        self.run_inner(args, &[], Some(input.as_bytes()))
    }

    #[allow(dead_code)]
    pub fn run_with_env_and_input(
        &self,
        args: &[&str],
        env: &[(&str, &str)],
        input: &str,
    ) -> CliResult {
        self.run_inner(args, env, Some(input.as_bytes()))
    }

    #[allow(dead_code)]
    pub fn run_with_raw_input(
        &self,
        args: &[&str],
        env: &[(&str, &str)],
        input: &[u8],
    ) -> CliResult {
        self.run_inner(args, env, Some(input))
    }

    fn run_inner(&self, args: &[&str], env: &[(&str, &str)], input: Option<&[u8]>) -> CliResult {
        let start = Instant::now();
        match &self.mode {
            RunMode::Binary(bin) => {
                let mut cmd = Command::new(bin);
                cmd.args(args)
                    .stdin(if input.is_some() {
                        Stdio::piped()
                    } else {
                        Stdio::null()
                    })
                    .stdout(Stdio::piped())
                    .stderr(Stdio::piped());
                for k in ISOLATED_VARS {
                    cmd.env_remove(k);
                }
                for (k, v) in env.iter() {
                    cmd.env(k, v);
                }

                let mut child = cmd.spawn().expect("failed to spawn CLI binary");
                if let Some(s) = input {
                    use std::io::Write as _;
                    if let Some(mut stdin) = child.stdin.take() {
                        let _ = stdin.write_all(s);
                    }
                }
                let output = child.wait_with_output().expect("failed to read output");
                CliResult {
                    exit_code: output.status.code().unwrap_or(1),
                    stdout: String::from_utf8_lossy(&output.stdout).to_string(),
                    stderr: String::from_utf8_lossy(&output.stderr).to_string(),
                    duration: start.elapsed(),
                }
            }
            RunMode::Library => {
                let mut out: Vec<u8> = Vec::new();
                let mut err: Vec<u8> = Vec::new();
                let mut stdin = std::io::Cursor::new(input.unwrap_or_default().to_vec());
                // clap expects the program name first
                let argv: Vec<String> = std::iter::once("nines".to_string())
                    .chain(args.iter().map(|s| s.to_string()))
                    .collect();
                let code = nines_cli::run_with_input(argv, &mut stdin, &mut out, &mut err);
                CliResult {
                    exit_code: code,
                    stdout: String::from_utf8_lossy(&out).to_string(),
                    stderr: String::from_utf8_lossy(&err).to_string(),
                    duration: start.elapsed(),
                }
            }
        }
    }
}
