use std::{fs, path::Path, process::Command, time::SystemTime};

fn main() {
  let now = SystemTime::now()
    .duration_since(std::time::UNIX_EPOCH)
    .map(|d| d.as_millis())
    .unwrap_or(0);
  println!("cargo:rustc-env=BUILD_TIME={}", now);

  println!("cargo:rerun-if-changed=.git/HEAD");
  if Path::new(".git/refs/heads").exists() {
    println!("cargo:rerun-if-changed=.git/refs/heads");
  }

  let git = get_git_info();
  println!("cargo:rustc-env=GIT_BRANCH={}", git.branch);
  println!("cargo:rustc-env=GIT_COMMIT={}", git.commit);
}

struct GitInfo {
  branch: String,
  commit: String,
}

fn git_output(args: &[&str]) -> Option<String> {
  let output = Command::new("git").args(args).output().ok()?;
  if !output.status.success() {
    return None;
  }
  Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

fn get_git_info() -> GitInfo {
  let mut info = GitInfo {
    branch: git_output(&["rev-parse", "--abbrev-ref", "HEAD"]).unwrap_or_else(|| "unknown".into()),
    commit: git_output(&["rev-parse", "--short", "HEAD"]).unwrap_or_else(|| "unknown".into()),
  };

  // No git binary: read HEAD by hand
  if info.commit == "unknown" {
    if let Ok(head) = fs::read_to_string(".git/HEAD") {
      if let Some(ref_path) = head.strip_prefix("ref: ") {
        let ref_path = ref_path.trim();
        info.branch = ref_path.rsplit('/').next().unwrap_or("unknown").to_string();
        if let Ok(commit) = fs::read_to_string(format!(".git/{}", ref_path)) {
          info.commit = commit.trim().chars().take(7).collect();
        }
      } else {
        info.commit = head.trim().chars().take(7).collect();
      }
    }
  }

  info
}
