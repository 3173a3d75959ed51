//! Minimal demonstration CLI over the `rd_sandbox` library surface. Parses
//! just enough of a run configuration to exercise `run()`; config-file
//! loading and judge-specific argument grammars are external collaborators
//! and are not implemented here.

use rd_sandbox::{default_config, run, Verdict};
use serde::Serialize;
use std::collections::HashSet;
use structopt::StructOpt;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RunResult {
    verdict_code: i32,
    verdict_name: &'static str,
}

#[derive(StructOpt)]
#[structopt(name = "rdbox", about = "Run a command under the supervised-execution sandbox")]
struct Opt {
    /// Wall-clock limit in milliseconds (unset = no limit)
    #[structopt(long)]
    time_ms: Option<i64>,

    /// Address-space limit in megabytes (unset = no limit)
    #[structopt(long)]
    memory_mb: Option<i64>,

    /// Process-count limit (unset = no limit)
    #[structopt(long)]
    nproc: Option<i64>,

    /// chdir target in the child before exec
    #[structopt(long)]
    dir: Option<String>,

    /// Regex over absolute paths allowed for path-taking syscalls
    #[structopt(long)]
    filesystem_whitelist: Option<String>,

    /// Print the result as a single line of JSON instead of plain text
    #[structopt(long)]
    json: bool,

    /// Command to run, followed by its arguments
    #[structopt(required = true)]
    cmd: Vec<String>,
}

fn main() {
    let opt = Opt::from_args();

    let mut config = default_config();
    config.time_ms = opt.time_ms.unwrap_or(-1);
    config.memory_mb = opt.memory_mb.unwrap_or(-1);
    config.nproc = opt.nproc.unwrap_or(-1);
    config.dir = opt.dir;
    config.filesystem_whitelist = opt.filesystem_whitelist;
    config.syscall_whitelist = HashSet::new();
    config.cmd = opt.cmd[0].clone();
    config.argv = opt.cmd.clone();
    config.envp = std::env::vars().map(|(k, v)| format!("{}={}", k, v)).collect();

    let json = opt.json;
    let verdict_code = run(config);
    let verdict_name = Verdict::from_code(verdict_code).map_or("??", Verdict::name);

    if json {
        let result = RunResult {
            verdict_code,
            verdict_name,
        };
        println!("{}", serde_json::to_string(&result).unwrap_or_default());
    } else {
        eprintln!("[rdbox] verdict: {} ({})", verdict_name, verdict_code);
    }
    std::process::exit(verdict_code);
}
